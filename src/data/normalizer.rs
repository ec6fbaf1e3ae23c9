// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Puts raw CSV text into canonical form before it becomes a
// SentimentExample.
//
// Why do we need this?
//   Exported review data is messy:
//   - Literal escape sequences such as "\n" or "\t" left by
//     whatever tool produced the CSV
//   - Runs of spaces, tabs and newlines inside quoted fields
//   - Leading/trailing padding
//
// Normalisation steps (applied in order):
//   1. Resolve backslash escapes into literal characters
//   2. Collapse every run of whitespace into one ASCII space
//   3. Trim leading and trailing whitespace
//
// Case is NOT folded here. The loader lowercases afterwards,
// so the normaliser stays reusable for case-sensitive text.
//
// Escaped backslashes ("\\") are left as they are, and so is
// any escape that would decode to a backslash. That keeps
// normalize(normalize(x)) == normalize(x).
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use std::iter::Peekable;
use std::str::Chars;

pub struct TextNormalizer;

impl TextNormalizer {
    /// Normalise a raw text string. Never fails; "" maps to "".
    pub fn normalize(input: &str) -> String {
        collapse_whitespace(&unescape(input))
    }
}

// ── Step 1: Resolve escapes ──────────────────────────────────────────────────
fn unescape(input: &str) -> String {
    let mut out   = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        // Trailing backslash stays literal
        let Some(&next) = chars.peek() else {
            out.push('\\');
            break;
        };

        let resolved = match next {
            'n'        => Some('\n'),
            'r'        => Some('\r'),
            't'        => Some('\t'),
            'f'        => Some('\u{000C}'),
            'v'        => Some('\u{000B}'),
            '"' | '\'' => Some(next),
            // Bell, escape and NUL carry no text, drop them
            'a' | 'e' | '0' => {
                chars.next();
                continue;
            }
            '\\' => {
                chars.next();
                out.push_str("\\\\");
                continue;
            }
            'x' => decode_hex(&mut chars, 2),
            'u' => decode_hex(&mut chars, 4),
            _   => None,
        };

        match resolved {
            Some(ch) if next == 'x' || next == 'u' => out.push(ch),
            Some(ch) => {
                chars.next();
                out.push(ch);
            }
            // Unknown escape: keep the backslash, the next char
            // goes through the loop as ordinary text
            None => out.push('\\'),
        }
    }

    out
}

/// Decode `\xHH` / `\uHHHH` with `chars` positioned on the `x`/`u`.
/// Consumes the escape only on success; decoding to a backslash
/// counts as failure so the output never gains a new escape.
fn decode_hex(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<char> {
    let hex: String = chars.clone().skip(1).take(digits).collect();
    if hex.len() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let decoded = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)?;
    if decoded == '\\' {
        return None;
    }

    // Skip the marker letter plus the digits
    for _ in 0..=digits {
        chars.next();
    }
    Some(decoded)
}

// ── Steps 2 + 3: Collapse runs and trim ──────────────────────────────────────
// A space is only emitted once a non-whitespace char follows it,
// which trims both ends in the same pass.
fn collapse_whitespace(text: &str) -> String {
    let mut out           = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

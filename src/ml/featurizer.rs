// ============================================================
// Layer 5 — Hashing Featurizer
// ============================================================
// Turns normalised text into a fixed-length numeric vector
// without building a vocabulary (the "hashing trick").
//
// Features extracted from "loved this!":
//   word unigrams   w:loved  w:this  w:!
//   word bigrams    b:loved this  b:this !
//   char trigrams   c: lo  c:lov  c:ove ... c:is!  c:s!
//
// Word boundaries come from the `Whitespace` pre-tokenizer of
// the tokenizers crate (\w+|[^\w\s]+), so punctuation such as
// "!" becomes its own token. Each feature string is hashed with
// FNV-1a into one of `dimension` buckets, counts are summed, and
// the vector is L2-normalised.
//
// Bucket indices must not change between Rust releases or
// platforms, so the hash is FNV-1a rather than std's SipHash.
//
// Reference: Weinberger et al. (2009) Feature Hashing for
//            Large Scale Multitask Learning

use std::hash::Hasher;

use tokenizers::pre_tokenizers::whitespace::Whitespace;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

use crate::domain::traits::Featurizer;
use crate::error::{Result, SentimentError};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME:        u64 = 0x0000_0100_0000_01b3;

// Namespaces so a word and a trigram with the same bytes
// land in different buckets
const WORD:    &[u8] = b"w:";
const BIGRAM:  &[u8] = b"b:";
const TRIGRAM: &[u8] = b"c:";
const SPACE:   &[u8] = b" ";

/// 64-bit FNV-1a hasher
struct Fnv1a(u64);

impl Default for Fnv1a {
    fn default() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for Fnv1a {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= u64::from(b);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Stateless hashing vectorizer over word 1-2 grams and char trigrams.
#[derive(Debug, Clone)]
pub struct HashingFeaturizer {
    dimension: usize,
}

impl HashingFeaturizer {
    /// `dimension` is clamped to at least 1
    pub fn new(dimension: usize) -> Self {
        Self { dimension: dimension.max(1) }
    }

    /// Split text into word and punctuation tokens
    fn tokens(&self, text: &str) -> Result<Vec<String>> {
        let mut pretokenized = PreTokenizedString::from(text);
        Whitespace {}
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| SentimentError::Training(format!("pre-tokenization failed: {e}")))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(token, _, _)| token.to_owned())
            .collect())
    }

    fn bucket(&self, parts: &[&[u8]]) -> usize {
        let mut hasher = Fnv1a::default();
        for part in parts {
            hasher.write(part);
        }
        (hasher.finish() % self.dimension as u64) as usize
    }
}

impl Featurizer for HashingFeaturizer {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn featurize(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimension];
        let tokens     = self.tokens(text)?;

        for token in &tokens {
            vector[self.bucket(&[WORD, token.as_bytes()])] += 1.0;
        }

        for pair in tokens.windows(2) {
            vector[self.bucket(&[BIGRAM, pair[0].as_bytes(), SPACE, pair[1].as_bytes()])] += 1.0;
        }

        // Pad with spaces so word starts and ends get their own trigrams
        let padded: Vec<char> = std::iter::once(' ')
            .chain(text.chars())
            .chain(std::iter::once(' '))
            .collect();
        let mut buf = [0u8; 12];
        for tri in padded.windows(3) {
            let mut len = 0;
            for c in tri {
                len += c.encode_utf8(&mut buf[len..]).len();
            }
            vector[self.bucket(&[TRIGRAM, &buf[..len]])] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }

        Ok(vector)
    }
}

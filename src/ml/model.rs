use burn::{
    nn::{Initializer, Linear, LinearConfig},
    prelude::*,
    tensor::activation,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct LogisticModelConfig {
    pub n_features: usize,
}

impl LogisticModelConfig {
    /// Weights and bias start at zero, so initialisation draws
    /// nothing from the backend RNG.
    pub fn init<B: Backend>(&self, device: &B::Device) -> LogisticModel<B> {
        let linear = LinearConfig::new(self.n_features, 1)
            .with_initializer(Initializer::Zeros)
            .init(device);
        LogisticModel { linear }
    }
}

/// Logistic regression: one linear unit followed by a sigmoid.
#[derive(Module, Debug)]
pub struct LogisticModel<B: Backend> {
    pub linear: Linear<B>,
}

impl<B: Backend> LogisticModel<B> {
    /// features: [batch, n_features] → logits: [batch]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 1> {
        let [batch_size, _] = features.dims();
        self.linear.forward(features).reshape([batch_size])
    }

    /// Positive-class probabilities: [batch]
    pub fn predict_proba(&self, features: Tensor<B, 2>) -> Tensor<B, 1> {
        activation::sigmoid(self.forward(features))
    }

    /// Mean binary cross-entropy on logits plus `l2_penalty / 2 * ||w||²`.
    pub fn forward_loss(
        &self,
        features:   Tensor<B, 2>,
        labels:     Tensor<B, 1>,
        l2_penalty: f64,
    ) -> Tensor<B, 1> {
        let logits = self.forward(features);

        // BCE(z, y) = max(z, 0) - z*y + ln(1 + e^-|z|), finite for any z
        let bce = activation::relu(logits.clone())
            - logits.clone() * labels
            + logits.abs().neg().exp().log1p();

        let weight  = self.linear.weight.val();
        let penalty = (weight.clone() * weight).sum().mul_scalar(l2_penalty / 2.0);

        bce.mean() + penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::ElementConversion;

    type B = NdArray;

    #[test]
    fn test_zero_init_predicts_one_half() {
        let device = Default::default();
        let model: LogisticModel<B> = LogisticModelConfig::new(3).init(&device);
        let x = Tensor::<B, 1>::from_floats([1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0].as_slice(), &device)
            .reshape([2, 3]);
        let probs = model.predict_proba(x).into_data().to_vec::<f32>().unwrap();
        assert_eq!(probs.len(), 2);
        assert!(probs.iter().all(|p| (p - 0.5).abs() < 1e-6));
    }

    #[test]
    fn test_zero_init_loss_is_ln2() {
        let device = Default::default();
        let model: LogisticModel<B> = LogisticModelConfig::new(2).init(&device);
        let x = Tensor::<B, 1>::from_floats([1.0f32, 0.0, 0.0, 1.0].as_slice(), &device)
            .reshape([2, 2]);
        let y = Tensor::<B, 1>::from_floats([1.0f32, 0.0].as_slice(), &device);
        let loss: f64 = model.forward_loss(x, y, 0.1).into_scalar().elem::<f64>();
        assert!((loss - std::f64::consts::LN_2).abs() < 1e-5);
    }
}

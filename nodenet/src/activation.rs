use serde::{Deserialize, Serialize};

/// Slope applied to negative inputs by [`ActivationType::LeakyReLU`].
pub const LEAKY_RELU_SLOPE: f32 = 0.3;

/// The capability set every activation strategy
/// must provide to the propagation engine.
///
/// The derivative is expressed in terms of the
/// node's *output* rather than its pre-activation
/// sum, so nodes never need to store the latter.
pub trait Activation {
    /// Applies the activation function to a node's
    /// weighted input sum.
    fn activate(&self, net: f32) -> f32;

    /// Returns the derivative of the activation function,
    /// given the value it produced.
    fn derivative(&self, output: f32) -> f32;
}

/// An ActivationType represents the activation
/// function used by every non-input node of a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationType {
    // 1 / (1 + exp(-x))
    Sigmoid,
    // x      if x > 0
    // 0.3x   otherwise
    LeakyReLU,
    // ln(1 + exp(x))
    Softplus,
}

impl Activation for ActivationType {
    /// # Examples
    /// ```
    /// use nodenet::activation::{Activation, ActivationType};
    ///
    /// assert_eq!(ActivationType::Sigmoid.activate(0.0), 0.5);
    /// assert_eq!(ActivationType::LeakyReLU.activate(-2.0), -0.6);
    /// assert!((ActivationType::Softplus.activate(0.0) - 2f32.ln()).abs() < 1e-6);
    /// ```
    fn activate(&self, net: f32) -> f32 {
        match self {
            ActivationType::Sigmoid => 1.0 / (1.0 + (-net).exp()),
            ActivationType::LeakyReLU => {
                if net > 0.0 {
                    net
                } else {
                    LEAKY_RELU_SLOPE * net
                }
            }
            // max(x, 0) + ln(1 + exp(-|x|)) stays finite where exp(x) overflows.
            ActivationType::Softplus => net.max(0.0) + (-net.abs()).exp().ln_1p(),
        }
    }

    /// The LeakyReLU derivative looks at the sign of the
    /// output instead of the input. Both agree because the
    /// function preserves sign, which does not hold for
    /// activations in general.
    fn derivative(&self, output: f32) -> f32 {
        match self {
            ActivationType::Sigmoid => output * (1.0 - output),
            ActivationType::LeakyReLU => {
                if output > 0.0 {
                    1.0
                } else {
                    LEAKY_RELU_SLOPE
                }
            }
            ActivationType::Softplus => 1.0 - (-output).exp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f32; 9] = [-4.0, -2.0, -1.0, -0.25, 0.0, 0.25, 1.0, 2.0, 4.0];

    fn numerical_derivative(activation: ActivationType, x: f32) -> f32 {
        const H: f32 = 1e-3;
        (activation.activate(x + H) - activation.activate(x - H)) / (2.0 * H)
    }

    #[test]
    fn sigmoid() {
        assert_eq!(ActivationType::Sigmoid.activate(0.0), 0.5);
        assert!(ActivationType::Sigmoid.activate(20.0) > 0.999);
        assert!(ActivationType::Sigmoid.activate(-20.0) < 0.001);
        for x in SAMPLES {
            let output = ActivationType::Sigmoid.activate(x);
            let expected = numerical_derivative(ActivationType::Sigmoid, x);
            assert!((ActivationType::Sigmoid.derivative(output) - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn softplus() {
        assert!(SAMPLES.iter().all(|x| ActivationType::Softplus.activate(*x) > 0.0));
        for x in SAMPLES {
            let naive = (1.0 + x.exp()).ln();
            assert!((ActivationType::Softplus.activate(x) - naive).abs() < 1e-5);
        }
        for x in SAMPLES {
            let output = ActivationType::Softplus.activate(x);
            let expected = numerical_derivative(ActivationType::Softplus, x);
            assert!((ActivationType::Softplus.derivative(output) - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn softplus_stays_finite_for_large_inputs() {
        for x in [88.0f32, 100.0, 1e6] {
            let output = ActivationType::Softplus.activate(x);
            assert!(output.is_finite());
            assert!((output - x).abs() < 1e-3 * x);
            assert!(ActivationType::Softplus.derivative(output).is_finite());
        }
        let output = ActivationType::Softplus.activate(-100.0);
        assert!(output.is_finite() && output >= 0.0);
    }

    #[test]
    fn leaky_relu() {
        assert_eq!(ActivationType::LeakyReLU.activate(3.0), 3.0);
        assert_eq!(ActivationType::LeakyReLU.activate(-1.0), -LEAKY_RELU_SLOPE);
        assert_eq!(ActivationType::LeakyReLU.activate(0.0), 0.0);
    }

    // Output sign stands in for input sign. This matches the true
    // derivative everywhere except at 0, where the input slope is
    // undefined and the output-based rule picks the negative side.
    #[test]
    fn leaky_relu_derivative_reads_output_sign() {
        for x in SAMPLES.iter().copied().filter(|x| *x != 0.0) {
            let output = ActivationType::LeakyReLU.activate(x);
            let slope = if x > 0.0 { 1.0 } else { LEAKY_RELU_SLOPE };
            assert_eq!(ActivationType::LeakyReLU.derivative(output), slope);
        }
        assert_eq!(ActivationType::LeakyReLU.derivative(0.0), LEAKY_RELU_SLOPE);
    }
}

use crate::error::AutogradError;
use crate::nn::Parameter;
use crate::value::Value;
use std::fmt::Debug;

/// The base trait for all parameter containers (neurons, layers, networks).
///
/// A module owns trainable leaves and computes an output from input nodes. Every
/// container exposes a complete, order-stable flattening of its parameters, which is
/// what optimizers and [`zero_grad`](Module::zero_grad) work on.
pub trait Module: Debug {
    /// `Value` for a single neuron, `Vec<Value>` for layers and networks.
    type Output;

    /// Builds the graph of this module applied to `inputs`.
    ///
    /// # Errors
    /// [`AutogradError::InputLengthMismatch`] if `inputs` does not have the module's fan-in,
    /// plus any error of the underlying operations.
    fn forward(&self, inputs: &[Value]) -> Result<Self::Output, AutogradError>;

    /// All trainable leaves, sub-modules included, in a stable order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Same order as [`parameters`](Module::parameters), with hierarchical names
    /// such as `"input.neuron1.w0"`.
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    /// Resets the gradient of every parameter to 0.
    ///
    /// Must be called between optimisation steps: gradients accumulate across backward
    /// passes.
    fn zero_grad(&self) -> Result<(), AutogradError> {
        for param in self.parameters() {
            param.zero_grad()?;
        }
        Ok(())
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::Tape;

    #[derive(Debug)]
    struct MockModule {
        scale: Parameter,
        shift: Parameter,
    }

    impl Module for MockModule {
        type Output = Value;

        fn forward(&self, inputs: &[Value]) -> Result<Value, AutogradError> {
            match inputs {
                [x] => x.mul(&*self.scale)?.add(&*self.shift),
                _ => Err(AutogradError::InputLengthMismatch {
                    expected: 1,
                    actual: inputs.len(),
                    module: "MockModule".to_string(),
                }),
            }
        }

        fn parameters(&self) -> Vec<Parameter> {
            vec![self.scale.clone(), self.shift.clone()]
        }

        fn named_parameters(&self) -> Vec<(String, Parameter)> {
            vec![
                ("scale".to_string(), self.scale.clone()),
                ("shift".to_string(), self.shift.clone()),
            ]
        }
    }

    fn mock(tape: &Tape) -> Result<MockModule, AutogradError> {
        Ok(MockModule {
            scale: Parameter::new(tape.leaf(2.0))?,
            shift: Parameter::new(tape.leaf(-1.0))?,
        })
    }

    #[test]
    fn test_provided_zero_grad() -> Result<(), AutogradError> {
        let tape = Tape::new();
        let module = mock(&tape)?;
        let x = tape.leaf(3.0);
        let y = module.forward(&[x.clone()])?;
        y.backprop()?;
        assert_eq!(module.scale.grad(), 3.0);
        assert_eq!(module.shift.grad(), 1.0);

        module.zero_grad()?;
        assert!(module.parameters().iter().all(|p| p.grad() == 0.0));
        // Inputs are not parameters and keep their gradient.
        assert_eq!(x.grad(), 2.0);
        Ok(())
    }

    #[test]
    fn test_num_parameters_and_names() -> Result<(), AutogradError> {
        let tape = Tape::new();
        let module = mock(&tape)?;
        assert_eq!(module.num_parameters(), 2);
        let named = module.named_parameters();
        let params = module.parameters();
        assert_eq!(named.len(), params.len());
        for ((_, named_param), param) in named.iter().zip(&params) {
            assert!(named_param.same_node(param));
        }
        Ok(())
    }

    #[test]
    fn test_forward_input_length() -> Result<(), AutogradError> {
        let tape = Tape::new();
        let module = mock(&tape)?;
        let err = module.forward(&[]).unwrap_err();
        assert_eq!(
            err,
            AutogradError::InputLengthMismatch {
                expected: 1,
                actual: 0,
                module: "MockModule".to_string()
            }
        );
        Ok(())
    }
}

use scalargrad_core::{AutogradError, Tape, Value};

/// Installs a test logger once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn leaves(tape: &Tape, data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| tape.leaf(x)).collect()
}

/// Collects the gradients of `values`, in order.
#[allow(dead_code)]
pub fn grads(values: &[Value]) -> Vec<f64> {
    values.iter().map(Value::grad).collect()
}

#[allow(dead_code)]
pub type TestResult = Result<(), AutogradError>;

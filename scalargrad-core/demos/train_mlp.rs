//! Trains a small perceptron on a synthetic regression task with mini-batch SGD.
//!
//! Run with `RUST_LOG=info cargo run --example train_mlp`.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::nn::losses::squared_error;
use scalargrad_core::{AutogradError, Mlp, MlpConfig, Module, Optimizer, Sgd, Tape, Value};

const SAMPLES: usize = 64;
const BATCH_SIZE: usize = 8;
const EPOCHS: usize = 40;
const LEARNING_RATE: f64 = 0.01;

fn target(x: &[f64; 2]) -> f64 {
    1.0 + 2.0 * x[0] - x[1]
}

fn main() -> Result<(), AutogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(1337);
    let data: Vec<[f64; 2]> = (0..SAMPLES)
        .map(|_| [rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)])
        .collect();

    let tape = Tape::new();
    let config = MlpConfig {
        in_size: 2,
        mid_size: 8,
        out_size: 1,
    };
    let mlp = Mlp::from_config(&tape, config, &mut rng)?;
    let params = mlp.parameters();
    let mark = tape.checkpoint();
    let mut optim = Sgd::new(LEARNING_RATE)?;
    info!(
        "Training {:?} ({} parameters) on {} samples",
        config,
        params.len(),
        SAMPLES
    );

    for epoch in 0..EPOCHS {
        let mut epoch_loss = 0.0;
        let mut batch: Vec<Value> = Vec::with_capacity(BATCH_SIZE);

        for (i, x) in data.iter().enumerate() {
            let inputs = [tape.leaf(x[0]), tape.leaf(x[1])];
            let pred = mlp.forward(&inputs)?.remove(0);
            batch.push(squared_error(&pred, target(x))?);

            // Update once every BATCH_SIZE accumulated losses.
            if (i + 1) % BATCH_SIZE == 0 || i + 1 == data.len() {
                let mut loss = batch[0].clone();
                for l in &batch[1..] {
                    loss = loss.add(l)?;
                }
                epoch_loss += loss.value();

                optim.zero_grad(&params)?;
                loss.div(batch.len() as f64)?.backprop()?;
                optim.step(&params)?;

                batch.clear();
                tape.rewind(mark)?;
            }
        }

        if epoch % 5 == 0 || epoch + 1 == EPOCHS {
            info!("epoch {:>3}: mean loss {:.6}", epoch, epoch_loss / SAMPLES as f64);
        }
    }

    let probe = [0.25, 0.75];
    let inputs = [tape.leaf(probe[0]), tape.leaf(probe[1])];
    let pred = mlp.forward(&inputs)?.remove(0);
    info!(
        "f({:?}) = {:.4} (target {:.4}), {} SGD steps",
        probe,
        pred.value(),
        target(&probe),
        optim.steps()
    );
    Ok(())
}

mod console;
mod dataset;

use console::PairReader;
use dataset::{bitwise_examples, OUTPUT_COUNT};

use nodenet::activation::ActivationType;
use nodenet::network::{Network, NetworkConfig};
use nodenet::training::logging::{ReportingLevel, TrainingLogger};
use nodenet::training::{Trainer, TrainingConfig};

use rand::{rngs::StdRng, SeedableRng};

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::process;

const EXPORT_PATH: &str = "output.dot";
const LOG_INTERVAL: usize = 10;

fn network_config() -> NetworkConfig {
    NetworkConfig {
        input_count: NonZeroUsize::new(2).unwrap(),
        hidden_per_layer: NonZeroUsize::new(4).unwrap(),
        hidden_layers: 3,
        output_count: NonZeroUsize::new(OUTPUT_COUNT).unwrap(),
        activation: ActivationType::Sigmoid,
        ..NetworkConfig::zero()
    }
}

fn main() {
    let network_config = network_config();
    let training_config = TrainingConfig::default();
    match (
        ron::to_string(&network_config),
        ron::to_string(&training_config),
    ) {
        (Ok(network), Ok(training)) => eprintln!("network: {}\ntraining: {}", network, training),
        (Err(e), _) | (_, Err(e)) => eprintln!("{}", e),
    }

    let mut rng = StdRng::from_entropy();
    let mut network = match Network::new(&network_config, &mut rng) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("invalid network configuration: {}", e);
            process::exit(1);
        }
    };

    let trainer = Trainer::new(training_config);
    let mut logger = TrainingLogger::new(ReportingLevel::WorstExample);
    train(&mut network, &trainer, &mut logger);

    println!("Let's test!");
    let stdin = io::stdin();
    for (a, b) in PairReader::new(stdin.lock()) {
        let [xor, and, or] = answer(&mut network, a, b);
        println!("answer: a^b={} a&b={} a|b={}", xor, and, or);
    }

    if let Err(e) = fs::write(EXPORT_PATH, network.graph().dot().to_string()) {
        eprintln!("failed to write {}: {}", EXPORT_PATH, e);
    }
}

/// Runs the configured number of epochs over the bitwise
/// dataset, logging each one and printing every
/// `LOG_INTERVAL`th snapshot along with the last.
fn train(network: &mut Network, trainer: &Trainer, logger: &mut TrainingLogger) {
    let examples = bitwise_examples();
    let epochs = trainer.config().epochs;
    for epoch in 0..epochs {
        let reports = trainer.train_epoch(network, &examples);
        logger.log(epoch, &reports);
        if epoch % LOG_INTERVAL == 0 || epoch + 1 == epochs {
            if let Some(log) = logger.last() {
                eprintln!("{}", log);
            }
        }
    }
}

/// Returns the network's XOR, AND and OR predictions for `a` and `b`.
fn answer(network: &mut Network, a: i64, b: i64) -> [bool; OUTPUT_COUNT] {
    let outputs = network.evaluate_at(&[a as f32, b as f32]);
    let mut answers = [false; OUTPUT_COUNT];
    for (answer, output) in answers.iter_mut().zip(outputs) {
        *answer = output > 0.5;
    }
    answers
}

#[cfg(test)]
mod tests {
    use super::*;

    use rayon::prelude::*;

    #[test]
    fn network_config_is_valid() {
        let network = Network::new(&network_config(), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(network.input_count(), 2);
        assert_eq!(network.output_count(), OUTPUT_COUNT);
        assert_eq!(network.graph().len(), 17);
    }

    #[test]
    fn learns_bitwise_operations_in_most_seeded_runs() {
        const RUNS: u64 = 8;
        const REQUIRED: usize = 6;
        let trainer = Trainer::new(TrainingConfig {
            max_iterations: 1000,
            ..TrainingConfig::default()
        });

        let successes = (0..RUNS)
            .into_par_iter()
            .filter(|seed| {
                let mut network =
                    Network::new(&network_config(), &mut StdRng::seed_from_u64(*seed)).unwrap();
                let mut logger = TrainingLogger::new(ReportingLevel::NoExamples);
                train(&mut network, &trainer, &mut logger);
                answer(&mut network, 1, 0) == [true, false, true]
            })
            .count();

        assert!(
            successes >= REQUIRED,
            "only {} of {} seeded runs learned (1, 0)",
            successes,
            RUNS
        );
    }

    fn pin_outputs(network: &mut Network, bias: f32) {
        let outputs = network.graph().output_indices().to_vec();
        for index in outputs {
            let node = network.graph_mut().node_mut(index);
            node.set_bias(bias);
            for edge in node.incoming_mut() {
                edge.set_weight(0.0);
            }
        }
    }

    #[test]
    fn answer_thresholds_strictly_above_half() {
        let mut network = Network::new(&network_config(), &mut StdRng::seed_from_u64(0)).unwrap();

        pin_outputs(&mut network, 0.0);
        assert_eq!(network.evaluate_at(&[1.0, 0.0]), vec![0.5; OUTPUT_COUNT]);
        assert_eq!(answer(&mut network, 1, 0), [false; OUTPUT_COUNT]);

        pin_outputs(&mut network, 10.0);
        assert_eq!(answer(&mut network, 1, 0), [true; OUTPUT_COUNT]);

        pin_outputs(&mut network, -10.0);
        assert_eq!(answer(&mut network, 0, 1), [false; OUTPUT_COUNT]);
    }

    #[test]
    fn exported_graph_lists_every_edge_and_node() {
        let network = Network::new(&network_config(), &mut StdRng::seed_from_u64(0)).unwrap();
        let dot = network.graph().dot().to_string();
        let lines: Vec<_> = dot.lines().collect();
        assert_eq!(lines.first(), Some(&"graph {"));
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines.iter().filter(|l| l.contains(" -- ")).count(), 52);
        assert_eq!(lines.iter().filter(|l| l.contains("type: ")).count(), 17);
    }
}

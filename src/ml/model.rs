// ============================================================
// Layer 5 — Reference Network
// ============================================================
// A small fully connected sigmoid network that implements the
// TrainableModel / ModelFactory traits. Orchestration code
// never depends on it directly; it is simply the collaborator
// the binary ships with.
//
// Architecture shape (camelCase keys, extra keys are kept):
//
//   {
//     "inputs": 2,              feature columns per row
//     "outputs": 1,             target columns per row
//     "learningRate": 0.5,
//     "layers": [
//       {"neurons": [{"bias": 0.1, "weights": [0.3, -0.2]}, ...]},
//       ...
//     ]
//   }
//
// A `null` bias or weight list is filled with random values in
// [-1, 1) when the network is built. Rows are the `inputs`
// feature values followed by the `outputs` target values.
//
// Training is plain per-row stochastic gradient descent on the
// squared error, with sigmoid activations on every layer.
//
// Reference: Rumelhart et al. (1986) backpropagation
//            serde crate documentation (flatten, rename_all)

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::data::splitter::split_at_ratio;
use crate::domain::architecture::ArchitectureSpec;
use crate::domain::dataset::Row;
use crate::domain::error::ModelError;
use crate::domain::traits::{EpochReport, ModelFactory, TrainableModel};

fn default_learning_rate() -> f64 {
    0.5
}

// ─── Architecture Description ─────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub inputs:  usize,
    pub outputs: usize,

    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    pub layers: Vec<LayerConfig>,

    /// Keys this network does not use, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    pub neurons: Vec<NeuronConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronConfig {
    #[serde(default)]
    pub bias: Option<f64>,

    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl NetworkConfig {
    pub fn from_spec(spec: &ArchitectureSpec) -> Result<Self, ModelError> {
        serde_json::from_value(spec.clone()).map_err(|e| ModelError::Architecture(e.to_string()))
    }

    /// Build the network, filling unset parameters from `rng`.
    pub fn init<R: Rng>(&self, rng: &mut R) -> Result<FeedForwardNetwork, ModelError> {
        if self.inputs == 0 {
            return Err(ModelError::Architecture("a network needs at least one input".into()));
        }
        if self.layers.is_empty() {
            return Err(ModelError::Architecture("a network needs at least one layer".into()));
        }

        let mut fan_in = self.inputs;
        let mut layers = Vec::with_capacity(self.layers.len());
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.neurons.is_empty() {
                return Err(ModelError::Architecture(format!("layer {index} has no neurons")));
            }
            let neurons = layer
                .neurons
                .iter()
                .map(|n| Neuron::init(n, fan_in, &mut *rng))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ModelError::Architecture(format!("layer {index}: {e}")))?;
            fan_in = neurons.len();
            layers.push(neurons);
        }

        if fan_in != self.outputs {
            return Err(ModelError::Architecture(format!(
                "last layer has {fan_in} neurons but the network declares {} outputs",
                self.outputs
            )));
        }

        Ok(FeedForwardNetwork {
            config: self.clone(),
            layers,
        })
    }
}

// ─── Parameters ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
struct Neuron {
    bias:    f64,
    weights: Vec<f64>,
}

impl Neuron {
    fn init<R: Rng>(cfg: &NeuronConfig, fan_in: usize, rng: &mut R) -> Result<Self, String> {
        let weights = match &cfg.weights {
            Some(w) if w.len() != fan_in => {
                return Err(format!("expected {fan_in} weights, got {}", w.len()));
            }
            Some(w) => w.clone(),
            None => (0..fan_in).map(|_| rng.gen_range(-1.0..1.0)).collect(),
        };
        let bias = cfg.bias.unwrap_or_else(|| rng.gen_range(-1.0..1.0));
        Ok(Self { bias, weights })
    }

    fn activate(&self, inputs: &[f64]) -> f64 {
        let z: f64 = self.weights.iter().zip(inputs).map(|(w, x)| w * x).sum::<f64>() + self.bias;
        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ─── FeedForwardNetwork ───────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct FeedForwardNetwork {
    config: NetworkConfig,
    layers: Vec<Vec<Neuron>>,
}

impl FeedForwardNetwork {
    fn check_width(&self, actual: usize, expected: usize) -> Result<(), ModelError> {
        if actual == expected {
            Ok(())
        } else {
            Err(ModelError::Width { expected, actual })
        }
    }

    /// Activations of every layer, input vector first.
    fn forward(&self, inputs: &[f64]) -> Vec<Vec<f64>> {
        let mut activations = vec![inputs.to_vec()];
        for layer in &self.layers {
            let prev = activations.last().map(Vec::as_slice).unwrap_or_default();
            let next: Vec<f64> = layer.iter().map(|n| n.activate(prev)).collect();
            activations.push(next);
        }
        activations
    }

    /// One SGD step on a single row.
    fn backpropagate(&mut self, features: &[f64], targets: &[f64]) {
        let activations = self.forward(features);
        let rate = self.config.learning_rate;

        // Output layer: (a - y) * a * (1 - a)
        let Some(outputs) = activations.last() else { return };
        let mut deltas: Vec<f64> = outputs
            .iter()
            .zip(targets)
            .map(|(a, y)| (a - y) * a * (1.0 - a))
            .collect();

        for l in (0..self.layers.len()).rev() {
            let prev = &activations[l];

            // Deltas for the layer below, computed before weights change
            let below: Vec<f64> = (0..prev.len())
                .map(|j| {
                    let back: f64 = self.layers[l].iter().zip(&deltas).map(|(n, d)| n.weights[j] * d).sum();
                    back * prev[j] * (1.0 - prev[j])
                })
                .collect();

            for (neuron, delta) in self.layers[l].iter_mut().zip(&deltas) {
                for (w, x) in neuron.weights.iter_mut().zip(prev) {
                    *w -= rate * delta * x;
                }
                neuron.bias -= rate * delta;
            }
            deltas = below;
        }
    }

    /// Mean squared error over `rows`; 0.0 for no rows.
    fn mean_squared_error(&self, rows: &[Row]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        let inputs = self.config.inputs;
        let total: f64 = rows
            .iter()
            .map(|row| {
                let outputs = self.forward(&row[..inputs]);
                let predicted = outputs.last().map(Vec::as_slice).unwrap_or_default();
                predicted.iter().zip(&row[inputs..]).map(|(p, y)| (p - y).powi(2)).sum::<f64>()
                    / self.config.outputs as f64
            })
            .sum();
        total / rows.len() as f64
    }
}

impl TrainableModel for FeedForwardNetwork {
    fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.check_width(inputs.len(), self.config.inputs)?;
        Ok(self.forward(inputs).pop().unwrap_or_default())
    }

    fn partition<'a>(&self, rows: &'a [Row], split_ratio: u8) -> Result<(&'a [Row], &'a [Row]), ModelError> {
        Ok(split_at_ratio(rows, split_ratio))
    }

    fn train_epochs(&mut self, train: &[Row], eval: &[Row], epochs: usize) -> Result<EpochReport, ModelError> {
        let width = self.config.inputs + self.config.outputs;
        for row in train.iter().chain(eval) {
            self.check_width(row.len(), width)?;
        }

        let scored = if eval.is_empty() { train } else { eval };
        let mut report = EpochReport::default();
        for epoch in 1..=epochs {
            let started = Instant::now();
            for row in train {
                let (features, targets) = row.split_at(self.config.inputs);
                self.backpropagate(features, targets);
            }
            let error = self.mean_squared_error(scored);
            if !error.is_finite() {
                return Err(ModelError::Other(format!("error diverged in epoch {epoch}")));
            }
            let seconds = started.elapsed().as_secs_f64();
            tracing::debug!("Epoch {}/{}: error={:.6} ({:.4}s)", epoch, epochs, error, seconds);
            report.per_epoch_error.push(error);
            report.per_epoch_seconds.push(seconds);
        }
        Ok(report)
    }

    fn architecture(&self) -> ArchitectureSpec {
        let mut config = self.config.clone();
        config.layers = self
            .layers
            .iter()
            .map(|layer| LayerConfig {
                neurons: layer
                    .iter()
                    .map(|n| NeuronConfig {
                        bias:    Some(n.bias),
                        weights: Some(n.weights.clone()),
                    })
                    .collect(),
            })
            .collect();
        serde_json::to_value(&config).unwrap_or_default()
    }
}

// ─── NetworkFactory ───────────────────────────────────────────────────────────
/// Builds FeedForwardNetworks; a fixed seed makes initial weights reproducible.
#[derive(Debug, Clone, Default)]
pub struct NetworkFactory {
    seed: Option<u64>,
}

impl NetworkFactory {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl ModelFactory for NetworkFactory {
    fn construct(&self, architecture: &ArchitectureSpec) -> Result<Box<dyn TrainableModel>, ModelError> {
        let config = NetworkConfig::from_spec(architecture)?;
        let network = match self.seed {
            Some(seed) => config.init(&mut StdRng::seed_from_u64(seed))?,
            None => config.init(&mut rand::thread_rng())?,
        };
        Ok(Box::new(network))
    }

    /// 2 inputs → 3 hidden → 1 output, all parameters unset.
    fn baseline_architecture(&self) -> ArchitectureSpec {
        let unset = || json!({"bias": null, "weights": null});
        json!({
            "inputs": 2,
            "outputs": 1,
            "learningRate": default_learning_rate(),
            "layers": [
                {"neurons": [unset(), unset(), unset()]},
                {"neurons": [unset()]}
            ]
        })
    }
}

use shared::{ModelIdentifier, PredictionLabel};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Outcome counters for one model. `total` always equals `real + fake`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelTally {
    total: usize,
    real: usize,
    fake: usize,
}

impl ModelTally {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn real(&self) -> usize {
        self.real
    }

    pub fn fake(&self) -> usize {
        self.fake
    }

    fn record(&mut self, label: PredictionLabel) {
        self.total += 1;
        match label {
            PredictionLabel::Real => self.real += 1,
            PredictionLabel::Fake => self.fake += 1,
        }
    }
}

/// Per-model counters, with a zeroed entry for every known model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStats {
    tallies: BTreeMap<ModelIdentifier, ModelTally>,
}

impl Default for ModelStats {
    fn default() -> Self {
        Self {
            tallies: ModelIdentifier::iter()
                .map(|model| (model, ModelTally::default()))
                .collect(),
        }
    }
}

impl ModelStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_outcome(&mut self, model: ModelIdentifier, label: PredictionLabel) {
        self.tallies.entry(model).or_default().record(label);
    }

    pub fn get(&self, model: ModelIdentifier) -> ModelTally {
        self.tallies.get(&model).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelIdentifier, ModelTally)> + '_ {
        self.tallies.iter().map(|(model, tally)| (*model, *tally))
    }

    pub fn total(&self) -> usize {
        self.tallies.values().map(ModelTally::total).sum()
    }
}

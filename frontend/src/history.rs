use shared::PredictionLabel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub real: usize,
    pub fake: usize,
}

impl LabelCounts {
    pub fn total(&self) -> usize {
        self.real + self.fake
    }
}

/// Chronological, append-only log of every label the session has received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<PredictionLabel>,
    counts: LabelCounts,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: PredictionLabel) {
        self.entries.push(label);
        match label {
            PredictionLabel::Real => self.counts.real += 1,
            PredictionLabel::Fake => self.counts.fake += 1,
        }
        debug_assert_eq!(self.counts.total(), self.entries.len());
    }

    pub fn counts(&self) -> LabelCounts {
        self.counts
    }

    pub fn entries(&self) -> &[PredictionLabel] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<PredictionLabel> {
        self.entries.last().copied()
    }
}

//! Render-ready data series derived from a [`Session`]. Recomputed on every
//! call; nothing here is cached.

use crate::history::History;
use crate::session::Session;
use crate::stats::ModelStats;
use serde::Serialize;
use shared::{KeywordCounts, ModelIdentifier, PredictionLabel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSeries {
    pub labels: [PredictionLabel; 2],
    pub values: [usize; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl KeywordSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelPerformanceRow {
    pub model: ModelIdentifier,
    pub total: usize,
    pub real: usize,
    pub fake: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub distribution: DistributionSeries,
    pub keywords: KeywordSeries,
    pub model_performance: Vec<ModelPerformanceRow>,
}

impl ChartData {
    /// Zero rows stay in the data; the table is only worth showing once some
    /// model has produced a prediction.
    pub fn show_model_performance(&self) -> bool {
        self.model_performance.iter().any(|row| row.total > 0)
    }
}

pub fn project(session: &Session) -> ChartData {
    ChartData {
        distribution: distribution_series(session.history()),
        keywords: keyword_series(session.keywords()),
        model_performance: model_performance_series(session.stats()),
    }
}

pub fn distribution_series(history: &History) -> DistributionSeries {
    let counts = history.counts();
    DistributionSeries {
        labels: [PredictionLabel::Real, PredictionLabel::Fake],
        values: [counts.real, counts.fake],
    }
}

pub fn keyword_series(keywords: &KeywordCounts) -> KeywordSeries {
    let (labels, values) = keywords
        .iter()
        .map(|(keyword, count)| (keyword.clone(), *count))
        .unzip();
    KeywordSeries { labels, values }
}

pub fn model_performance_series(stats: &ModelStats) -> Vec<ModelPerformanceRow> {
    stats
        .iter()
        .map(|(model, tally)| ModelPerformanceRow {
            model,
            total: tally.total(),
            real: tally.real(),
            fake: tally.fake(),
        })
        .collect()
}

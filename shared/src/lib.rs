use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Keyword -> occurrence count, as reported for a single input.
pub type KeywordCounts = BTreeMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
pub enum PredictionLabel {
    Real,
    Fake,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelIdentifier {
    #[default]
    RandomForest,
    LogisticRegression,
    NaiveBayes,
}

impl ModelIdentifier {
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelIdentifier::RandomForest => "Random Forest",
            ModelIdentifier::LogisticRegression => "Logistic Regression",
            ModelIdentifier::NaiveBayes => "Naive Bayes",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PredictRequest {
    pub text: String,
    pub model: ModelIdentifier,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PredictResponse {
    pub prediction: PredictionLabel,
    // `null` and a missing field both mean "no keywords detected"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: KeywordCounts,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<KeywordCounts, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<KeywordCounts>::deserialize(deserializer).map(Option::unwrap_or_default)
}

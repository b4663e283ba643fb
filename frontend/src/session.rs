//! Prediction session: request lifecycle plus everything accumulated from
//! successful predictions.
//!
//! The lifecycle is `Idle -> Loading -> {Success, Error}`, with [`Session::clear`]
//! returning to `Idle` from anywhere. History, per-model stats and the latest
//! keyword map belong to the session and survive `clear`.

use crate::client::{PredictionClient, PredictionResult, Transport};
use crate::error::SubmitError;
use crate::history::History;
use crate::stats::ModelStats;
use crate::validation::validate;
use shared::{KeywordCounts, ModelIdentifier, PredictionLabel};

pub const CONNECTION_ERROR_MESSAGE: &str =
    "failed to connect to the server. please ensure the backend is running";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: Status,
    pub result: Option<PredictionLabel>,
    pub error_message: Option<String>,
}

/// Handle for a started submission. Only the most recently started one can
/// complete the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    ticket: u64,
    pub text: String,
    pub model: ModelIdentifier,
}

impl Submission {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    ticket: u64,
    abandoned: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    history: History,
    stats: ModelStats,
    keywords: KeywordCounts,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stats(&self) -> &ModelStats {
        &self.stats
    }

    /// Keywords detected in the most recent successful input only.
    pub fn keywords(&self) -> &KeywordCounts {
        &self.keywords
    }

    pub fn is_loading(&self) -> bool {
        self.state.status == Status::Loading
    }

    /// True while a request is outstanding, including one abandoned by
    /// [`Session::clear`] that has not resolved yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a submission and moves to `Loading`, clearing any previous
    /// result or error. Nothing changes when the session is busy or the text
    /// is invalid.
    pub fn begin(&mut self, text: &str, model: ModelIdentifier) -> Result<Submission, SubmitError> {
        if self.is_busy() {
            log::debug!("Ignoring submission while a prediction is in flight");
            return Err(SubmitError::Busy);
        }
        validate(text)?;

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(InFlight {
            ticket,
            abandoned: false,
        });
        self.state = SessionState {
            status: Status::Loading,
            result: None,
            error_message: None,
        };
        log::debug!("Submission {} started with {}", ticket, model);

        Ok(Submission {
            ticket,
            text: text.to_string(),
            model,
        })
    }

    /// Applies the outcome of `submission`. Returns `false` when the
    /// submission was abandoned by [`Session::clear`] or has already
    /// completed, in which case nothing but the busy guard is touched.
    pub fn complete(&mut self, submission: &Submission, result: PredictionResult) -> bool {
        let in_flight = match self.in_flight {
            Some(in_flight) if in_flight.ticket == submission.ticket => in_flight,
            _ => {
                log::warn!(
                    "Discarding stale result for submission {}",
                    submission.ticket
                );
                return false;
            }
        };
        self.in_flight = None;

        if in_flight.abandoned {
            log::debug!(
                "Submission {} resolved after clear, result dropped",
                submission.ticket
            );
            return false;
        }

        match result {
            PredictionResult::Success { label, keywords } => {
                self.history.record(label);
                self.stats.record_outcome(submission.model, label);
                self.keywords = keywords;
                self.state = SessionState {
                    status: Status::Success,
                    result: Some(label),
                    error_message: None,
                };
                log::info!("Submission {} classified as {}", submission.ticket, label);
            }
            PredictionResult::Failure { reason } => {
                log::warn!("Submission {} failed: {}", submission.ticket, reason);
                self.state = SessionState {
                    status: Status::Error,
                    result: None,
                    error_message: Some(CONNECTION_ERROR_MESSAGE.to_string()),
                };
            }
        }
        true
    }

    /// Back to `Idle`. An in-flight request is left to finish and keeps the
    /// session busy until it resolves, but its result is discarded.
    pub fn clear(&mut self) {
        if let Some(in_flight) = self.in_flight.as_mut().filter(|f| !f.abandoned) {
            in_flight.abandoned = true;
            log::debug!("Clearing session, abandoning submission {}", in_flight.ticket);
        }
        self.state = SessionState::default();
    }

    /// Validates, sends and applies one submission end to end.
    pub async fn submit<T: Transport>(
        &mut self,
        client: &PredictionClient<T>,
        text: &str,
        model: ModelIdentifier,
    ) -> Result<&SessionState, SubmitError> {
        let submission = self.begin(text, model)?;
        let result = client.submit(&submission.text, submission.model).await;
        self.complete(&submission, result);
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedTransport;
    use crate::error::{ClientError, ValidationError};
    use futures::executor::block_on;
    use shared::PredictionLabel::{Fake, Real};

    const VALID: &str = "0123456789";

    fn success(label: PredictionLabel, keywords: &[(&str, u32)]) -> PredictionResult {
        PredictionResult::Success {
            label,
            keywords: keywords.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn failure() -> PredictionResult {
        PredictionResult::Failure {
            reason: ClientError::Transport("connection refused".into()),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = Session::new();
        assert_eq!(session.state(), &SessionState::default());
        assert_eq!(session.state().status, Status::Idle);
        assert!(session.history().is_empty());
        assert!(session.keywords().is_empty());
        assert_eq!(session.stats().total(), 0);
    }

    #[test]
    fn too_short_input_never_reaches_the_network() {
        let client = PredictionClient::new(ScriptedTransport::new());
        let mut session = Session::new();

        let err =
            block_on(session.submit(&client, "a", ModelIdentifier::RandomForest)).unwrap_err();

        assert_eq!(err, SubmitError::Invalid(ValidationError::TooShort));
        assert_eq!(client.transport().requests(), 0);
        assert_eq!(session.state().status, Status::Idle);
    }

    #[test]
    fn validation_error_leaves_previous_outcome_alone() {
        let mut session = Session::new();
        let submission = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&submission, success(Real, &[]));

        assert!(session.begin("   ", ModelIdentifier::RandomForest).is_err());
        assert_eq!(session.state().status, Status::Success);
        assert_eq!(session.state().result, Some(Real));
    }

    #[test]
    fn successful_prediction_updates_everything_together() {
        let client = PredictionClient::new(
            ScriptedTransport::new().reply(200, r#"{"prediction":"Real","keywords":{"hoax":2}}"#),
        );
        let mut session = Session::new();

        let state = block_on(session.submit(&client, VALID, ModelIdentifier::RandomForest))
            .unwrap()
            .clone();

        assert_eq!(state.status, Status::Success);
        assert_eq!(state.result, Some(Real));
        assert_eq!(state.error_message, None);
        assert_eq!(session.history().entries(), &[Real]);
        let forest = session.stats().get(ModelIdentifier::RandomForest);
        assert_eq!((forest.total(), forest.real(), forest.fake()), (1, 1, 0));
        assert_eq!(session.keywords().get("hoax"), Some(&2));
        assert_eq!(session.keywords().len(), 1);
    }

    #[test]
    fn failed_prediction_changes_neither_history_nor_stats() {
        let client = PredictionClient::new(
            ScriptedTransport::new()
                .fail(ClientError::Transport("offline".into()))
                .reply(200, r#"{"prediction":"Fake"}"#),
        );
        let mut session = Session::new();

        let state = block_on(session.submit(&client, VALID, ModelIdentifier::NaiveBayes))
            .unwrap()
            .clone();
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.result, None);
        assert_eq!(state.error_message.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
        assert!(session.history().is_empty());
        assert_eq!(session.stats().total(), 0);

        // the same text can be retried and succeeds independently
        let state = block_on(session.submit(&client, VALID, ModelIdentifier::NaiveBayes))
            .unwrap()
            .clone();
        assert_eq!(state.status, Status::Success);
        assert_eq!(state.error_message, None);
        assert_eq!(session.history().entries(), &[Fake]);
        assert_eq!(session.stats().get(ModelIdentifier::NaiveBayes).fake(), 1);
        assert_eq!(client.transport().requests(), 2);
    }

    #[test]
    fn failure_keeps_previous_keywords() {
        let mut session = Session::new();
        let first = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&first, success(Fake, &[("shocking", 1)]));

        let second = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&second, failure());

        assert_eq!(session.keywords().get("shocking"), Some(&1));
    }

    #[test]
    fn keywords_are_replaced_not_merged() {
        let mut session = Session::new();
        let first = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&first, success(Fake, &[("hoax", 2), ("urgent", 1)]));

        let second = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&second, success(Real, &[("truth", 3)]));

        let keys: Vec<_> = session.keywords().keys().cloned().collect();
        assert_eq!(keys, vec!["truth"]);

        let third = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&third, success(Real, &[]));
        assert!(session.keywords().is_empty());
    }

    #[test]
    fn submissions_are_refused_while_loading() {
        let mut session = Session::new();
        let submission = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        assert!(session.is_loading());

        assert_eq!(
            session.begin(VALID, ModelIdentifier::NaiveBayes),
            Err(SubmitError::Busy)
        );
        // busy wins over validation while loading
        assert_eq!(
            session.begin("", ModelIdentifier::NaiveBayes),
            Err(SubmitError::Busy)
        );

        assert!(session.complete(&submission, success(Real, &[])));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn begin_clears_previous_result_and_error() {
        let mut session = Session::new();
        let first = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        session.complete(&first, failure());
        assert!(session.state().error_message.is_some());

        session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        assert_eq!(
            session.state(),
            &SessionState {
                status: Status::Loading,
                result: None,
                error_message: None,
            }
        );
    }

    #[test]
    fn clear_is_idempotent_and_keeps_accumulated_data() {
        let mut session = Session::new();
        let submission = session.begin(VALID, ModelIdentifier::LogisticRegression).unwrap();
        session.complete(&submission, success(Fake, &[("alert", 1)]));
        let history = session.history().clone();
        let stats = session.stats().clone();

        session.clear();
        let once = session.state().clone();
        session.clear();

        assert_eq!(session.state(), &once);
        assert_eq!(once, SessionState::default());
        assert_eq!(session.history(), &history);
        assert_eq!(session.stats(), &stats);
        assert_eq!(session.keywords().get("alert"), Some(&1));
    }

    #[test]
    fn clear_while_loading_discards_the_late_result() {
        let mut session = Session::new();
        let abandoned = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();

        session.clear();
        assert_eq!(session.state(), &SessionState::default());
        assert!(!session.is_loading());
        assert!(session.is_busy());

        assert!(!session.complete(&abandoned, success(Real, &[("hoax", 1)])));
        assert_eq!(session.state(), &SessionState::default());
        assert!(session.history().is_empty());
        assert_eq!(session.stats().total(), 0);
        assert!(session.keywords().is_empty());
        assert!(!session.is_busy());

        let current = session.begin(VALID, ModelIdentifier::NaiveBayes).unwrap();
        assert!(session.complete(&current, success(Fake, &[])));
        assert_eq!(session.history().entries(), &[Fake]);
        assert_eq!(session.stats().get(ModelIdentifier::NaiveBayes).total(), 1);
    }

    #[test]
    fn clear_does_not_allow_a_second_request_in_flight() {
        let client = PredictionClient::new(ScriptedTransport::new());
        let mut session = Session::new();
        let abandoned = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();

        session.clear();
        session.clear();

        assert_eq!(
            session.begin(VALID, ModelIdentifier::NaiveBayes),
            Err(SubmitError::Busy)
        );
        assert_eq!(
            block_on(session.submit(&client, VALID, ModelIdentifier::NaiveBayes)),
            Err(SubmitError::Busy)
        );
        assert_eq!(client.transport().requests(), 0);
        assert_eq!(session.state().status, Status::Idle);

        session.complete(&abandoned, failure());
        assert_eq!(session.state().status, Status::Idle);
        assert_eq!(session.state().error_message, None);
        assert!(session.begin(VALID, ModelIdentifier::NaiveBayes).is_ok());
    }

    #[test]
    fn a_submission_completes_at_most_once() {
        let mut session = Session::new();
        let submission = session.begin(VALID, ModelIdentifier::RandomForest).unwrap();
        assert!(session.complete(&submission, success(Real, &[])));
        assert!(!session.complete(&submission, success(Real, &[])));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.stats().total(), 1);
    }

    #[test]
    fn different_models_share_one_history() {
        let client = PredictionClient::new(
            ScriptedTransport::new()
                .reply(200, r#"{"prediction":"Real"}"#)
                .reply(200, r#"{"prediction":"Fake"}"#),
        );
        let mut session = Session::new();

        block_on(session.submit(&client, VALID, ModelIdentifier::RandomForest)).unwrap();
        block_on(session.submit(&client, VALID, ModelIdentifier::LogisticRegression)).unwrap();

        assert_eq!(session.history().entries(), &[Real, Fake]);
        let counts = session.history().counts();
        assert_eq!((counts.real, counts.fake), (1, 1));
        let forest = session.stats().get(ModelIdentifier::RandomForest);
        let logreg = session.stats().get(ModelIdentifier::LogisticRegression);
        assert_eq!((forest.total(), forest.real(), forest.fake()), (1, 1, 0));
        assert_eq!((logreg.total(), logreg.real(), logreg.fake()), (1, 0, 1));
        assert_eq!(session.stats().get(ModelIdentifier::NaiveBayes).total(), 0);
    }

    #[test]
    fn history_and_stats_grow_by_one_per_success() {
        let mut session = Session::new();
        let models = [
            ModelIdentifier::RandomForest,
            ModelIdentifier::NaiveBayes,
            ModelIdentifier::RandomForest,
        ];
        for (i, model) in models.into_iter().enumerate() {
            let before_len = session.history().len();
            let before_total = session.stats().get(model).total();

            let submission = session.begin(VALID, model).unwrap();
            let label = if i % 2 == 0 { Real } else { Fake };
            session.complete(&submission, success(label, &[]));

            assert_eq!(session.history().len(), before_len + 1);
            let tally = session.stats().get(model);
            assert_eq!(tally.total(), before_total + 1);
            assert_eq!(tally.total(), tally.real() + tally.fake());
        }
    }
}

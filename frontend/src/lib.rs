pub mod charts;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod stats;
pub mod transport;
pub mod validation;

pub use client::{PredictionClient, PredictionResult, Transport, TransportResponse};
pub use config::ClientConfig;
pub use error::{ClientError, SubmitError, ValidationError};
pub use session::{Session, SessionState, Status, Submission};
pub use transport::HttpTransport;

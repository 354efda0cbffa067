use std::time::Duration;

use async_trait::async_trait;

pub mod config;
pub mod department;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod openai;
pub mod prompt;
pub mod report;
pub mod runner;
pub mod samples;

pub use config::Credentials;
pub use department::Department;
pub use error::{ClassifyError, ConfigError, Error, EvalError, PromptError, Result, SampleError};
pub use metrics::{evaluate, CategoryMetrics, ConfusionCounts, Report};
pub use openai::{normalize_label, OpenAIModel};
pub use prompt::PromptTemplate;
pub use report::Feedback;
pub use runner::{run_evaluation, Evaluation, Outcome, Prediction};
pub use samples::{builtin_samples, load_samples, Sample};

pub const OPENAI_API_KEY_NAME: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE: &str = "api.openai.com/v1";
pub const OPENAI_API_CHAT_ENDPOINT: &str = "/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f64 = 0.0;
pub const MAX_TOKENS: u32 = 10;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Label recorded for a sample whose classification request failed.
pub const ERROR_LABEL: &str = "error";

/// Maps complaint text to a department label.
///
/// The label is whatever the backend answered after normalization and may lie
/// outside the department set. Errors are per request; callers decide whether
/// to recover.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> std::result::Result<String, ClassifyError>;
}

use tracing::{debug, info, warn};

use crate::department::Department;
use crate::error::EvalError;
use crate::metrics::{evaluate, Report};
use crate::samples::Sample;
use crate::{Classifier, ERROR_LABEL};

/// What the classifier said about one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    Label(String),
    Failed(String),
}

impl Prediction {
    /// The label scored by the evaluator; failures score as [`ERROR_LABEL`].
    pub fn label(&self) -> &str {
        match self {
            Prediction::Label(label) => label,
            Prediction::Failed(_) => ERROR_LABEL,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Prediction::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// 1-based position in the sample list.
    pub position: usize,
    pub sample: Sample,
    pub prediction: Prediction,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        self.prediction.label() == self.sample.department.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub outcomes: Vec<Outcome>,
    pub report: Report,
}

/// Classifies every sample in order, one request at a time, then scores the
/// run. A failed request only costs that sample; it never aborts the run.
///
/// `on_outcome` is called as each sample completes.
pub async fn run_evaluation<C>(
    classifier: &C,
    samples: &[Sample],
    mut on_outcome: impl FnMut(&Outcome),
) -> Result<Evaluation, EvalError>
where
    C: Classifier + ?Sized,
{
    let mut outcomes = Vec::with_capacity(samples.len());
    for (index, sample) in samples.iter().enumerate() {
        let position = index + 1;
        debug!(position, total = samples.len(), "classifying complaint");
        let prediction = match classifier.classify(&sample.text).await {
            Ok(label) => Prediction::Label(label),
            Err(error) => {
                warn!(position, %error, "error classifying complaint");
                Prediction::Failed(error.to_string())
            }
        };
        let outcome = Outcome {
            position,
            sample: sample.clone(),
            prediction,
        };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    let truth: Vec<Department> = outcomes.iter().map(|o| o.sample.department).collect();
    let predicted: Vec<&str> = outcomes.iter().map(|o| o.prediction.label()).collect();
    let report = evaluate(&truth, &predicted)?;
    info!(
        accuracy = report.accuracy,
        correct = report.correct,
        total = report.total,
        "evaluation finished"
    );

    Ok(Evaluation { outcomes, report })
}

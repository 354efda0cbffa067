//! Console rendering of per-sample results and the final report.

use std::fmt::Write;

use crate::department::Department;
use crate::metrics::Report;
use crate::runner::Outcome;

pub const EXCELLENT_THRESHOLD: f64 = 0.9;
pub const GOOD_THRESHOLD: f64 = 0.75;
pub const REFINEMENT_THRESHOLD: f64 = 0.5;

const RULE_WIDTH: usize = 70;
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    Good,
    NeedsRefinement,
    NeedsSignificantWork,
}

impl Feedback {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= EXCELLENT_THRESHOLD {
            Feedback::Excellent
        } else if accuracy >= GOOD_THRESHOLD {
            Feedback::Good
        } else if accuracy >= REFINEMENT_THRESHOLD {
            Feedback::NeedsRefinement
        } else {
            Feedback::NeedsSignificantWork
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Feedback::Excellent => "🎉 Excellent! Your prompt achieves high accuracy.",
            Feedback::Good => "👍 Good work! Try to improve edge cases for higher accuracy.",
            Feedback::NeedsRefinement => "📚 Your prompt needs refinement. Consider:",
            Feedback::NeedsSignificantWork => "💡 Keep working on your prompt! Tips:",
        }
    }

    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            Feedback::Excellent | Feedback::Good => &[],
            Feedback::NeedsRefinement => &[
                "Being more specific about what each department handles",
                "Providing clearer distinction between similar categories",
            ],
            Feedback::NeedsSignificantWork => &[
                "Define each department's responsibilities clearly",
                "Give examples of complaint types for each department",
                "Use structured output instructions",
            ],
        }
    }
}

pub fn render_header(sample_count: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n311 COMPLAINT CLASSIFIER - STUDENT EXERCISE\n{rule}\n\n\
         Classifying {sample_count} complaints across {} departments...\n\
         This may take a minute...\n",
        Department::ALL.len()
    )
}

pub fn render_outcome(outcome: &Outcome, total: usize) -> String {
    let status = if outcome.is_correct() { "✅" } else { "❌" };
    format!(
        "{status} [{}/{total}] True: {:10} | Predicted: {:10}\n   '{}...'",
        outcome.position,
        outcome.sample.department.as_str(),
        outcome.prediction.label(),
        preview(&outcome.sample.text),
    )
}

/// First characters of a complaint; counts chars, not bytes.
fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn render_report(report: &Report) -> String {
    let banner = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{banner}\nRESULTS\n{banner}");
    let _ = writeln!(
        out,
        "\nOverall Accuracy: {} ({}/{})",
        percent(report.accuracy),
        report.correct,
        report.total
    );
    let _ = writeln!(out, "\nPer-Department Metrics:\n{rule}");
    let _ = writeln!(
        out,
        "{:<12} {:<12} {:<12} {:<12} {:<8}\n{rule}",
        "Department", "Precision", "Recall", "F1-Score", "Support"
    );
    for metrics in &report.per_category {
        let _ = writeln!(
            out,
            "{:<12} {:>10}  {:>10}  {:>10}  {:>6}",
            metrics.department.as_str(),
            percent(metrics.precision),
            percent(metrics.recall),
            percent(metrics.f1),
            metrics.support
        );
    }
    let _ = writeln!(out, "{rule}");

    let feedback = Feedback::from_accuracy(report.accuracy);
    let _ = writeln!(out, "\nFEEDBACK:\n{}", feedback.headline());
    for tip in feedback.tips() {
        let _ = writeln!(out, "   - {tip}");
    }
    let _ = write!(out, "\n{banner}");
    out
}

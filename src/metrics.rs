//! Accuracy and per-department precision / recall / F1.
//!
//! Every department is scored independently from the same aligned pairs, so
//! the order departments are visited in never changes the numbers.

use crate::department::Department;
use crate::error::EvalError;

/// Confusion counts for one department.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    fn tally<S: AsRef<str>>(department: Department, truth: &[Department], predicted: &[S]) -> Self {
        let name = department.as_str();
        let mut counts = ConfusionCounts::default();
        for (actual, guess) in truth.iter().zip(predicted) {
            let is_actual = *actual == department;
            let is_guess = guess.as_ref() == name;
            match (is_actual, is_guess) {
                (true, true) => counts.true_positives += 1,
                (false, true) => counts.false_positives += 1,
                (true, false) => counts.false_negatives += 1,
                (false, false) => {}
            }
        }
        counts
    }

    /// TP / (TP + FP), or 0 when nothing was predicted as this department.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// TP / (TP + FN), or 0 when the department never occurs.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMetrics {
    pub department: Department,
    pub counts: ConfusionCounts,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub accuracy: f64,
    pub correct: usize,
    pub total: usize,
    /// One entry per department, in [`Department::ALL`] order.
    pub per_category: Vec<CategoryMetrics>,
}

impl Report {
    pub fn category(&self, department: Department) -> Option<&CategoryMetrics> {
        self.per_category
            .iter()
            .find(|metrics| metrics.department == department)
    }
}

/// Scores `predicted` against `truth`.
///
/// Predictions are compared as plain strings against department names, so a
/// label outside the department set (including the error marker) is wrong
/// for its true department and counts against no other department.
pub fn evaluate<S: AsRef<str>>(truth: &[Department], predicted: &[S]) -> Result<Report, EvalError> {
    if truth.len() != predicted.len() {
        return Err(EvalError::InvalidInput {
            truth: truth.len(),
            predicted: predicted.len(),
        });
    }

    let total = truth.len();
    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(actual, guess)| actual.as_str() == guess.as_ref())
        .count();

    let per_category = Department::ALL
        .into_iter()
        .map(|department| {
            let counts = ConfusionCounts::tally(department, truth, predicted);
            let precision = counts.precision();
            let recall = counts.recall();
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            CategoryMetrics {
                department,
                counts,
                precision,
                recall,
                f1,
                support: truth.iter().filter(|actual| **actual == department).count(),
            }
        })
        .collect();

    Ok(Report {
        accuracy: ratio(correct, total),
        correct,
        total,
        per_category,
    })
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::Department::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_input_scores_zero_everywhere() {
        let report = evaluate::<&str>(&[], &[]).unwrap();
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.total, 0);
        assert_eq!(report.per_category.len(), Department::ALL.len());
        for metrics in &report.per_category {
            assert_eq!(metrics.precision, 0.0);
            assert_eq!(metrics.recall, 0.0);
            assert_eq!(metrics.f1, 0.0);
            assert_eq!(metrics.support, 0);
        }
    }

    #[test]
    fn perfect_predictions_score_one() {
        let truth = [Fire, Police, Parks, Parks, Finance];
        let predicted: Vec<&str> = truth.iter().map(|d| d.as_str()).collect();
        let report = evaluate(&truth, &predicted).unwrap();

        assert_eq!(report.accuracy, 1.0);
        for metrics in &report.per_category {
            if metrics.support > 0 {
                assert_eq!(metrics.precision, 1.0);
                assert_eq!(metrics.recall, 1.0);
                assert_eq!(metrics.f1, 1.0);
            } else {
                assert_eq!(metrics.f1, 0.0);
            }
        }
    }

    #[test]
    fn supports_sum_to_sample_count() {
        let truth = [Fire, Fire, Police, Buildings, Finance, Parks, Parks];
        let predicted = ["fire", "police", "police", "error", "parks", "parks", "trees"];
        let report = evaluate(&truth, &predicted).unwrap();

        let support: usize = report.per_category.iter().map(|m| m.support).sum();
        assert_eq!(support, truth.len());
        assert_eq!(report.category(Parks).unwrap().support, 2);
    }

    #[test]
    fn accuracy_matches_direct_count() {
        let truth = [Fire, Police, Buildings, Finance, Parks, Fire];
        let predicted = ["fire", "fire", "buildings", "parks", "parks", "Fire"];
        let report = evaluate(&truth, &predicted).unwrap();

        let direct = truth
            .iter()
            .zip(&predicted)
            .filter(|(t, p)| t.as_str() == **p)
            .count();
        assert_eq!(report.correct, direct);
        assert_close(report.accuracy, direct as f64 / truth.len() as f64);
    }

    #[test]
    fn out_of_vocabulary_label_is_only_a_false_negative() {
        let truth = [Police, Fire];
        let predicted = ["sanitation", "fire"];
        let report = evaluate(&truth, &predicted).unwrap();

        let police = report.category(Police).unwrap();
        assert_eq!(police.counts.false_negatives, 1);
        assert_eq!(police.counts.true_positives, 0);
        let false_positives: usize = report
            .per_category
            .iter()
            .map(|m| m.counts.false_positives)
            .sum();
        assert_eq!(false_positives, 0);
    }

    #[test]
    fn fire_police_scenario() {
        let report = evaluate(&[Fire, Police], &["fire", "fire"]).unwrap();
        assert_close(report.accuracy, 0.5);

        let fire = report.category(Fire).unwrap();
        assert_eq!(
            fire.counts,
            ConfusionCounts {
                true_positives: 1,
                false_positives: 1,
                false_negatives: 0,
            }
        );
        assert_close(fire.precision, 0.5);
        assert_close(fire.recall, 1.0);
        assert_close(fire.f1, 2.0 / 3.0);
        assert_eq!(fire.support, 1);

        let police = report.category(Police).unwrap();
        assert_eq!(police.counts.false_negatives, 1);
        assert_eq!(police.precision, 0.0);
        assert_eq!(police.recall, 0.0);
        assert_eq!(police.f1, 0.0);
        assert_eq!(police.support, 1);
    }

    #[test]
    fn failed_predictions_scenario() {
        let report = evaluate(&[Finance, Finance], &["error", "error"]).unwrap();
        assert_eq!(report.accuracy, 0.0);

        let finance = report.category(Finance).unwrap();
        assert_eq!(finance.counts.false_negatives, 2);
        assert_eq!(finance.counts.false_positives, 0);
        assert_eq!(finance.support, 2);
        assert_eq!(finance.f1, 0.0);

        for metrics in report.per_category.iter().filter(|m| m.department != Finance) {
            assert_eq!(metrics.counts, ConfusionCounts::default());
            assert_eq!(metrics.support, 0);
            assert_eq!(metrics.precision, 0.0);
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = evaluate(&[Fire, Police, Parks], &["fire", "police"]).unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidInput {
                truth: 3,
                predicted: 2,
            }
        );
    }

    #[test]
    fn categories_follow_department_order() {
        let report = evaluate(&[Parks], &["parks"]).unwrap();
        let order: Vec<Department> = report.per_category.iter().map(|m| m.department).collect();
        assert_eq!(order, Department::ALL.to_vec());
    }
}

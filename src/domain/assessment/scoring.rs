//! Risk scoring over a complete answer sheet.
//!
//! Scoring is a pure function: the same questionnaire and answer sheet always
//! produce the same result. A sheet must answer every question exactly once;
//! partial sheets are rejected rather than scored against a partial
//! denominator.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{AssessmentError, Questionnaire, RiskTier};

/// Question id → chosen option weight for one attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<String, u8>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites the answer for a question.
    pub fn record(&mut self, question_id: impl Into<String>, weight: u8) {
        self.answers.insert(question_id.into(), weight);
    }

    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = (K, u8)>>(iter: T) -> Self {
        let mut sheet = AnswerSheet::new();
        for (id, weight) in iter {
            sheet.record(id, weight);
        }
        sheet
    }
}

/// Outcome of scoring a complete sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub tier: RiskTier,
}

/// Scores answer sheets against one questionnaire.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    questionnaire: Questionnaire,
}

impl RiskScorer {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self { questionnaire }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Validates the sheet and classifies its total.
    ///
    /// # Errors
    ///
    /// - `UnknownQuestion` if the sheet answers a question not in the questionnaire
    /// - `InvalidWeight` if a weight matches no option of its question
    /// - `Incomplete` if any question is unanswered
    pub fn score(&self, answers: &AnswerSheet) -> Result<RiskResult, AssessmentError> {
        for (id, weight) in answers.iter() {
            let question = self
                .questionnaire
                .find(id)
                .ok_or_else(|| AssessmentError::UnknownQuestion(id.to_string()))?;
            if question.option(weight).is_none() {
                return Err(AssessmentError::InvalidWeight {
                    question: id.to_string(),
                    weight,
                });
            }
        }

        let missing: Vec<String> = self
            .questionnaire
            .questions()
            .iter()
            .filter(|q| answers.get(q.id).is_none())
            .map(|q| q.id.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AssessmentError::Incomplete {
                answered: answers.len(),
                required: self.questionnaire.len(),
                missing,
            });
        }

        let total_score: u32 = answers.iter().map(|(_, w)| u32::from(w)).sum();
        let max_score = self.questionnaire.max_score();
        let percentage = f64::from(total_score) / f64::from(max_score) * 100.0;

        Ok(RiskResult {
            total_score,
            max_score,
            percentage,
            tier: RiskTier::from_score(total_score, max_score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const IDS: [&str; 6] = ["cycle", "weight", "hair", "acne", "fatigue", "family"];

    fn uniform_sheet(weight: u8) -> AnswerSheet {
        IDS.iter().map(|id| (*id, weight)).collect()
    }

    #[test]
    fn all_threes_scores_high() {
        let result = RiskScorer::default().score(&uniform_sheet(3)).unwrap();
        assert_eq!(result.total_score, 18);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.tier, RiskTier::High);
    }

    #[test]
    fn all_zeros_scores_low() {
        let result = RiskScorer::default().score(&uniform_sheet(0)).unwrap();
        assert_eq!(result.total_score, 0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.tier, RiskTier::Low);
    }

    #[test]
    fn mixed_answers_score_medium() {
        let sheet: AnswerSheet = [
            ("cycle", 2),
            ("weight", 1),
            ("hair", 1),
            ("acne", 1),
            ("fatigue", 1),
            ("family", 0),
        ]
        .into_iter()
        .collect();
        let result = RiskScorer::default().score(&sheet).unwrap();
        assert_eq!(result.total_score, 6);
        assert_eq!(result.tier, RiskTier::Medium);
    }

    #[test]
    fn partial_sheet_is_rejected_with_missing_ids() {
        let sheet: AnswerSheet = [("cycle", 3), ("weight", 3)].into_iter().collect();
        let err = RiskScorer::default().score(&sheet).unwrap_err();
        match err {
            AssessmentError::Incomplete {
                answered,
                required,
                missing,
            } => {
                assert_eq!(answered, 2);
                assert_eq!(required, 6);
                assert_eq!(missing, vec!["hair", "acne", "fatigue", "family"]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn empty_sheet_is_rejected() {
        let err = RiskScorer::default().score(&AnswerSheet::new()).unwrap_err();
        assert!(matches!(err, AssessmentError::Incomplete { answered: 0, .. }));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut sheet = uniform_sheet(1);
        sheet.record("sleep", 2);
        let err = RiskScorer::default().score(&sheet).unwrap_err();
        assert_eq!(err, AssessmentError::UnknownQuestion("sleep".to_string()));
    }

    #[test]
    fn weight_above_three_is_rejected() {
        let mut sheet = uniform_sheet(1);
        sheet.record("hair", 4);
        let err = RiskScorer::default().score(&sheet).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidWeight { weight: 4, .. }));
    }

    #[test]
    fn rerecording_overwrites_previous_answer() {
        let mut sheet = uniform_sheet(0);
        sheet.record("cycle", 3);
        assert_eq!(sheet.len(), 6);
        assert_eq!(RiskScorer::default().score(&sheet).unwrap().total_score, 3);
    }

    proptest! {
        #[test]
        fn complete_sheets_classify_by_total(weights in proptest::array::uniform6(0u8..=3)) {
            let sheet: AnswerSheet = IDS.iter().copied().zip(weights).collect();
            let result = RiskScorer::default().score(&sheet).unwrap();

            let expected_total: u32 = weights.iter().map(|w| u32::from(*w)).sum();
            prop_assert_eq!(result.total_score, expected_total);
            prop_assert!(result.total_score <= 18);

            let expected = match expected_total {
                0..=4 => RiskTier::Low,
                5..=9 => RiskTier::Medium,
                _ => RiskTier::High,
            };
            prop_assert_eq!(result.tier, expected);
        }

        #[test]
        fn scoring_is_idempotent(weights in proptest::array::uniform6(0u8..=3)) {
            let sheet: AnswerSheet = IDS.iter().copied().zip(weights).collect();
            let scorer = RiskScorer::default();
            prop_assert_eq!(scorer.score(&sheet).unwrap(), scorer.score(&sheet).unwrap());
        }
    }
}

//! AssessmentAttempt - the sequential quiz flow.
//!
//! One attempt walks the questionnaire in order. Each answer is recorded
//! against the current question and moves the pointer forward; answering the
//! last question scores the sheet. `retake` discards everything and returns
//! to the first question. No history of earlier attempts is retained.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::{AnswerSheet, AssessmentError, Question, Questionnaire, RiskResult, RiskScorer};

/// Lifecycle of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    InProgress,
    Complete,
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!((self, target), (InProgress, Complete) | (Complete, InProgress))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStatus::*;
        match self {
            InProgress => vec![Complete],
            Complete => vec![InProgress],
        }
    }
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnswerOutcome {
    /// Moved on to the question at this index.
    Next { index: usize },
    /// The last question was answered and the sheet scored.
    Completed(RiskResult),
}

/// One pass through the questionnaire.
#[derive(Debug, Clone)]
pub struct AssessmentAttempt {
    scorer: RiskScorer,
    current: usize,
    answers: AnswerSheet,
    status: AssessmentStatus,
    result: Option<RiskResult>,
}

impl AssessmentAttempt {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            scorer: RiskScorer::new(questionnaire),
            current: 0,
            answers: AnswerSheet::new(),
            status: AssessmentStatus::InProgress,
            result: None,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        self.scorer.questionnaire()
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question awaiting an answer, `None` once complete.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.status {
            AssessmentStatus::InProgress => self.questionnaire().question(self.current),
            AssessmentStatus::Complete => None,
        }
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn result(&self) -> Option<&RiskResult> {
        self.result.as_ref()
    }

    /// Fraction of the questionnaire answered, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        let total = self.questionnaire().len();
        if total == 0 {
            return 1.0;
        }
        self.answers.len() as f64 / total as f64
    }

    /// Answers the current question with the option carrying `weight`.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` once the attempt has a result
    /// - `InvalidWeight` if no option of the current question carries `weight`
    pub fn answer(&mut self, weight: u8) -> Result<AnswerOutcome, AssessmentError> {
        let question = self
            .current_question()
            .ok_or(AssessmentError::AlreadyComplete)?;

        if question.option(weight).is_none() {
            return Err(AssessmentError::InvalidWeight {
                question: question.id.to_string(),
                weight,
            });
        }

        self.answers.record(question.id, weight);

        if self.current + 1 < self.questionnaire().len() {
            self.current += 1;
            return Ok(AnswerOutcome::Next {
                index: self.current,
            });
        }

        let result = self.scorer.score(&self.answers)?;
        self.status = self.status.transition_to(AssessmentStatus::Complete)?;
        self.result = Some(result);
        tracing::debug!(
            total = result.total_score,
            tier = %result.tier,
            "risk assessment completed"
        );
        Ok(AnswerOutcome::Completed(result))
    }

    /// Clears all answers and returns to the first question.
    pub fn retake(&mut self) {
        self.answers.clear();
        self.current = 0;
        self.result = None;
        self.status = AssessmentStatus::InProgress;
    }
}

impl Default for AssessmentAttempt {
    fn default() -> Self {
        Self::new(Questionnaire::pcos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RiskTier;

    fn answer_all(attempt: &mut AssessmentAttempt, weights: [u8; 6]) -> AnswerOutcome {
        let mut last = None;
        for w in weights {
            last = Some(attempt.answer(w).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn starts_on_first_question() {
        let attempt = AssessmentAttempt::default();
        assert_eq!(attempt.current_index(), 0);
        assert_eq!(attempt.current_question().unwrap().id, "cycle");
        assert_eq!(attempt.status(), AssessmentStatus::InProgress);
        assert_eq!(attempt.progress(), 0.0);
    }

    #[test]
    fn answering_advances_pointer() {
        let mut attempt = AssessmentAttempt::default();
        assert_eq!(attempt.answer(2).unwrap(), AnswerOutcome::Next { index: 1 });
        assert_eq!(attempt.current_question().unwrap().id, "weight");
        assert_eq!(attempt.answers().get("cycle"), Some(2));
    }

    #[test]
    fn last_answer_scores_the_sheet() {
        let mut attempt = AssessmentAttempt::default();
        match answer_all(&mut attempt, [3; 6]) {
            AnswerOutcome::Completed(result) => {
                assert_eq!(result.total_score, 18);
                assert_eq!(result.tier, RiskTier::High);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(attempt.status(), AssessmentStatus::Complete);
        assert!(attempt.current_question().is_none());
        assert_eq!(attempt.progress(), 1.0);
    }

    #[test]
    fn answering_after_completion_fails() {
        let mut attempt = AssessmentAttempt::default();
        answer_all(&mut attempt, [0; 6]);
        assert_eq!(attempt.answer(1), Err(AssessmentError::AlreadyComplete));
    }

    #[test]
    fn invalid_weight_keeps_pointer() {
        let mut attempt = AssessmentAttempt::default();
        assert!(attempt.answer(7).is_err());
        assert_eq!(attempt.current_index(), 0);
        assert!(attempt.answers().is_empty());
    }

    #[test]
    fn retake_resets_answers_and_pointer() {
        let mut attempt = AssessmentAttempt::default();
        answer_all(&mut attempt, [1, 2, 3, 0, 1, 2]);

        attempt.retake();

        assert_eq!(attempt.current_index(), 0);
        assert!(attempt.answers().is_empty());
        assert!(attempt.result().is_none());
        assert_eq!(attempt.status(), AssessmentStatus::InProgress);
    }

    #[test]
    fn status_machine_allows_complete_and_retake_only() {
        assert!(AssessmentStatus::InProgress.can_transition_to(&AssessmentStatus::Complete));
        assert!(AssessmentStatus::Complete.can_transition_to(&AssessmentStatus::InProgress));
        assert!(AssessmentStatus::InProgress
            .transition_to(AssessmentStatus::InProgress)
            .is_err());
    }
}

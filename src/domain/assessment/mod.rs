//! Assessment module - the PCOS risk questionnaire and its scoring model.

mod attempt;
mod errors;
mod questionnaire;
mod risk_tier;
mod scoring;

pub use attempt::{AnswerOutcome, AssessmentAttempt, AssessmentStatus};
pub use errors::AssessmentError;
pub use questionnaire::{AnswerOption, Question, Questionnaire, MAX_OPTION_WEIGHT};
pub use risk_tier::{RiskTier, LOW_THRESHOLD_PERCENT, MEDIUM_THRESHOLD_PERCENT};
pub use scoring::{AnswerSheet, RiskResult, RiskScorer};

//! The fixed PCOS risk questionnaire.

/// Highest weight any option can carry.
pub const MAX_OPTION_WEIGHT: u8 = 3;

/// One ordinal answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub weight: u8,
    pub label: &'static str,
}

/// One question with its four options, ordered by weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [AnswerOption; 4],
}

impl Question {
    /// Returns the option carrying the given weight.
    pub fn option(&self, weight: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.weight == weight)
    }
}

const fn opt(weight: u8, label: &'static str) -> AnswerOption {
    AnswerOption { weight, label }
}

static PCOS_QUESTIONS: [Question; 6] = [
    Question {
        id: "cycle",
        prompt: "How regular is your menstrual cycle?",
        options: [
            opt(0, "Regular (every 21-35 days)"),
            opt(1, "Slightly irregular (varies by a week)"),
            opt(2, "Very irregular (unpredictable)"),
            opt(3, "Absent for 3+ months"),
        ],
    },
    Question {
        id: "weight",
        prompt: "Have you experienced unexplained weight gain?",
        options: [
            opt(0, "No weight changes"),
            opt(1, "Mild weight gain"),
            opt(2, "Moderate weight gain, especially around midsection"),
            opt(3, "Significant weight gain despite diet/exercise"),
        ],
    },
    Question {
        id: "hair",
        prompt: "Do you notice excess hair growth on face, chest, or back?",
        options: [
            opt(0, "No excess hair"),
            opt(1, "Minimal excess hair"),
            opt(2, "Noticeable excess hair"),
            opt(3, "Significant excess hair"),
        ],
    },
    Question {
        id: "acne",
        prompt: "How would you describe your skin condition?",
        options: [
            opt(0, "Clear skin"),
            opt(1, "Occasional breakouts"),
            opt(2, "Persistent acne, especially on jawline"),
            opt(3, "Severe, cystic acne"),
        ],
    },
    Question {
        id: "fatigue",
        prompt: "Do you experience fatigue or energy fluctuations?",
        options: [
            opt(0, "Generally energetic"),
            opt(1, "Occasional tiredness"),
            opt(2, "Frequent fatigue"),
            opt(3, "Constant exhaustion"),
        ],
    },
    Question {
        id: "family",
        prompt: "Is there a family history of PCOS or diabetes?",
        options: [
            opt(0, "No family history"),
            opt(1, "Distant relatives"),
            opt(2, "Immediate family member"),
            opt(3, "Multiple family members"),
        ],
    },
];

/// An ordered, fixed list of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Questionnaire {
    questions: &'static [Question],
}

impl Questionnaire {
    /// The six-question PCOS risk questionnaire.
    pub fn pcos() -> Self {
        Self {
            questions: &PCOS_QUESTIONS,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Maximum attainable total score (`N * 3`).
    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * u32::from(MAX_OPTION_WEIGHT)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::pcos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pcos_questionnaire_has_six_questions() {
        let q = Questionnaire::pcos();
        assert_eq!(q.len(), 6);
        assert_eq!(q.max_score(), 18);
    }

    #[test]
    fn question_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = Questionnaire::pcos().questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["cycle", "weight", "hair", "acne", "fatigue", "family"]);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn every_question_offers_weights_zero_to_three() {
        for question in Questionnaire::pcos().questions() {
            let weights: Vec<u8> = question.options.iter().map(|o| o.weight).collect();
            assert_eq!(weights, vec![0, 1, 2, 3], "question {}", question.id);
        }
    }

    #[test]
    fn option_lookup_by_weight() {
        let question = Questionnaire::pcos().find("acne").unwrap();
        assert_eq!(question.option(3).unwrap().label, "Severe, cystic acne");
        assert!(question.option(4).is_none());
    }
}

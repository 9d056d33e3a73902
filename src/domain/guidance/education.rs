//! Educational hub: three tabs of static PCOS content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GuidanceError;
use crate::domain::navigation::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MythFact {
    pub myth: &'static str,
    pub fact: &'static str,
}

pub static PCOS_VS_PCOD: [FaqItem; 4] = [
    FaqItem {
        question: "What is PCOS?",
        answer: "Polycystic Ovary Syndrome (PCOS) is a hormonal disorder affecting women of reproductive age. It involves metabolic and reproductive issues, including irregular periods, excess androgen levels, and polycystic ovaries. PCOS is a syndrome, meaning it's a collection of symptoms.",
    },
    FaqItem {
        question: "What is PCOD?",
        answer: "Polycystic Ovarian Disease (PCOD) is a condition where the ovaries release many immature or partially mature eggs, which eventually turn into cysts. It's generally considered a milder condition than PCOS and is more common.",
    },
    FaqItem {
        question: "Key differences",
        answer: "PCOS is a metabolic disorder with more severe symptoms and potential complications like diabetes and heart disease. PCOD is primarily an ovarian issue that can often be managed with lifestyle changes. PCOS affects about 10% of women, while PCOD affects up to 30%.",
    },
    FaqItem {
        question: "Treatment approaches",
        answer: "Both conditions benefit from lifestyle modifications including diet, exercise, and stress management. PCOS may require more intensive medical intervention, including medications for insulin resistance or fertility. PCOD often responds well to dietary changes and regular exercise.",
    },
];

pub static MYTHS_VS_FACTS: [MythFact; 6] = [
    MythFact {
        myth: "PCOS only affects overweight women",
        fact: "PCOS can affect women of any weight. While obesity can worsen symptoms, many women with PCOS are of normal weight or even underweight. It's a hormonal condition, not just a weight issue.",
    },
    MythFact {
        myth: "You cannot get pregnant with PCOS",
        fact: "Many women with PCOS conceive naturally or with medical assistance. While PCOS is a leading cause of infertility, it's very treatable. Lifestyle changes and medications can help regulate ovulation.",
    },
    MythFact {
        myth: "PCOS symptoms are the same for everyone",
        fact: "PCOS manifests differently in each person. Some may have irregular periods, others excess hair growth, acne, or weight gain. Not everyone has all symptoms, and severity varies widely.",
    },
    MythFact {
        myth: "Birth control pills cure PCOS",
        fact: "Birth control pills can help manage symptoms like irregular periods and acne, but they don't cure PCOS. They mask symptoms rather than address the underlying hormonal imbalance.",
    },
    MythFact {
        myth: "Only older women get PCOS",
        fact: "PCOS often begins during puberty, though symptoms may worsen with age. Many teens have PCOS. Early detection and management can prevent long-term complications.",
    },
    MythFact {
        myth: "Diet and exercise do not help PCOS",
        fact: "Lifestyle modifications are often the first-line treatment for PCOS. Regular exercise and a balanced diet can significantly improve insulin sensitivity, regulate periods, and reduce symptoms.",
    },
];

pub static WARNING_SIGNS: [&str; 9] = [
    "Missed periods for 3+ months without pregnancy",
    "Very heavy or painful periods",
    "Difficulty getting pregnant after 12 months of trying",
    "Sudden or unexplained weight gain",
    "Excessive hair growth on face, chest, or back",
    "Severe acne that does not respond to treatment",
    "Dark patches of skin (acanthosis nigricans)",
    "Symptoms of depression or anxiety",
    "Signs of diabetes (excessive thirst, frequent urination)",
];

/// What a first appointment usually covers.
pub static DOCTOR_VISIT_EXPECTATIONS: [&str; 5] = [
    "Discussion of your symptoms and medical history",
    "Physical examination",
    "Blood tests to check hormone levels",
    "Possibly an ultrasound to examine your ovaries",
    "Discussion of treatment options based on your goals",
];

/// Tabs of the educational hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EducationTab {
    #[default]
    #[serde(rename = "pcos-pcod")]
    PcosVsPcod,
    #[serde(rename = "myths")]
    Myths,
    #[serde(rename = "doctor")]
    Doctor,
}

impl EducationTab {
    pub fn all() -> &'static [EducationTab] {
        &[EducationTab::PcosVsPcod, EducationTab::Myths, EducationTab::Doctor]
    }

    pub fn id(&self) -> &'static str {
        match self {
            EducationTab::PcosVsPcod => "pcos-pcod",
            EducationTab::Myths => "myths",
            EducationTab::Doctor => "doctor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationTab::PcosVsPcod => "PCOS vs PCOD",
            EducationTab::Myths => "Myths vs Facts",
            EducationTab::Doctor => "When to See a Doctor",
        }
    }

    pub fn intro(&self) -> &'static str {
        match self {
            EducationTab::PcosVsPcod => "While often used interchangeably, PCOS and PCOD are different conditions with distinct characteristics and treatment approaches.",
            EducationTab::Myths => "There is a lot of misinformation about PCOS. Here is the truth behind common myths.",
            EducationTab::Doctor => "While lifestyle changes help manage PCOS, some symptoms require professional evaluation. Consider seeing a doctor if you experience:",
        }
    }
}

impl fmt::Display for EducationTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EducationTab {
    type Err = GuidanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| GuidanceError::unknown("tab", s))
    }
}

/// Tab selection and accordion state of the hub.
///
/// At most one FAQ and one myth are expanded at a time. The first FAQ
/// starts open. Expansion survives switching tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationHub {
    tab: EducationTab,
    expanded_faq: Option<usize>,
    expanded_myth: Option<usize>,
}

impl EducationHub {
    pub fn new() -> Self {
        Self {
            tab: EducationTab::default(),
            expanded_faq: Some(0),
            expanded_myth: None,
        }
    }

    pub fn tab(&self) -> EducationTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: EducationTab) {
        self.tab = tab;
    }

    pub fn expanded_faq(&self) -> Option<&'static FaqItem> {
        self.expanded_faq.map(|i| &PCOS_VS_PCOD[i])
    }

    pub fn expanded_myth(&self) -> Option<&'static MythFact> {
        self.expanded_myth.map(|i| &MYTHS_VS_FACTS[i])
    }

    /// Opens the FAQ at `index`, or closes it if already open.
    ///
    /// Returns whether it is now expanded.
    pub fn toggle_faq(&mut self, index: usize) -> Result<bool, GuidanceError> {
        self.require_tab(EducationTab::PcosVsPcod)?;
        if index >= PCOS_VS_PCOD.len() {
            return Err(GuidanceError::unknown("question", index.to_string()));
        }
        Ok(toggle(&mut self.expanded_faq, index))
    }

    /// Reveals the fact behind the myth at `index`, or hides it again.
    pub fn toggle_myth(&mut self, index: usize) -> Result<bool, GuidanceError> {
        self.require_tab(EducationTab::Myths)?;
        if index >= MYTHS_VS_FACTS.len() {
            return Err(GuidanceError::unknown("myth", index.to_string()));
        }
        Ok(toggle(&mut self.expanded_myth, index))
    }

    /// Screen the back button leads to.
    pub fn back(&self) -> Screen {
        Screen::Dashboard
    }

    fn require_tab(&self, expected: EducationTab) -> Result<(), GuidanceError> {
        if self.tab != expected {
            return Err(GuidanceError::WrongStep {
                expected: expected.label(),
            });
        }
        Ok(())
    }
}

impl Default for EducationHub {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle(slot: &mut Option<usize>, index: usize) -> bool {
    if *slot == Some(index) {
        *slot = None;
        false
    } else {
        *slot = Some(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_opens_on_first_faq() {
        let hub = EducationHub::new();
        assert_eq!(hub.tab(), EducationTab::PcosVsPcod);
        assert_eq!(hub.expanded_faq().map(|f| f.question), Some("What is PCOS?"));
        assert!(hub.expanded_myth().is_none());
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in EducationTab::all() {
            assert_eq!(tab.id().parse::<EducationTab>().unwrap(), *tab);
        }
        assert!("glossary".parse::<EducationTab>().is_err());
        assert_eq!(serde_json::to_value(EducationTab::Myths).unwrap(), "myths");
    }

    #[test]
    fn faq_toggle_keeps_one_open() {
        let mut hub = EducationHub::new();
        assert!(!hub.toggle_faq(0).unwrap());
        assert!(hub.expanded_faq().is_none());

        assert!(hub.toggle_faq(2).unwrap());
        assert!(hub.toggle_faq(3).unwrap());
        assert_eq!(hub.expanded_faq().map(|f| f.question), Some("Treatment approaches"));
    }

    #[test]
    fn myths_start_collapsed_and_toggle() {
        let mut hub = EducationHub::new();
        hub.select_tab(EducationTab::Myths);
        assert!(hub.toggle_myth(1).unwrap());
        assert_eq!(
            hub.expanded_myth().map(|m| m.myth),
            Some("You cannot get pregnant with PCOS")
        );
        assert!(!hub.toggle_myth(1).unwrap());
        assert!(hub.expanded_myth().is_none());
    }

    #[test]
    fn toggles_only_work_on_their_tab() {
        let mut hub = EducationHub::new();
        assert!(matches!(hub.toggle_myth(0), Err(GuidanceError::WrongStep { .. })));
        hub.select_tab(EducationTab::Doctor);
        assert!(matches!(hub.toggle_faq(0), Err(GuidanceError::WrongStep { .. })));
    }

    #[test]
    fn out_of_range_items_are_rejected() {
        let mut hub = EducationHub::new();
        assert!(matches!(hub.toggle_faq(4), Err(GuidanceError::UnknownOption { .. })));
        hub.select_tab(EducationTab::Myths);
        assert!(matches!(hub.toggle_myth(6), Err(GuidanceError::UnknownOption { .. })));
    }

    #[test]
    fn expansion_survives_tab_switches() {
        let mut hub = EducationHub::new();
        hub.toggle_faq(1).unwrap();
        hub.select_tab(EducationTab::Doctor);
        hub.select_tab(EducationTab::PcosVsPcod);
        assert_eq!(hub.expanded_faq().map(|f| f.question), Some("What is PCOD?"));
    }

    #[test]
    fn doctor_tab_content() {
        assert_eq!(WARNING_SIGNS.len(), 9);
        assert_eq!(DOCTOR_VISIT_EXPECTATIONS[1], "Physical examination");
        assert_eq!(EducationHub::new().back(), Screen::Dashboard);
    }
}

//! Canned analysis reports served by the mock analyzer.

use once_cell::sync::Lazy;

use crate::domain::analysis::{AnalysisReport, ParameterStatus, ReportFeedback, ReportParameter};

fn param(
    parameter: &str,
    value: &str,
    status: ParameterStatus,
    explanation: &str,
) -> ReportParameter {
    ReportParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        status,
        explanation: explanation.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn hormonal_panel() -> AnalysisReport {
    AnalysisReport {
        report_type: "Hormonal Panel".to_string(),
        parameters: vec![
            param(
                "LH/FSH Ratio",
                "2.8",
                ParameterStatus::Elevated,
                "Your LH to FSH ratio is slightly higher than typical. In PCOS, this ratio is often above 2:1. This doesn't mean anything is wrong, but it's something your doctor might want to monitor.",
            ),
            param(
                "Testosterone",
                "52 ng/dL",
                ParameterStatus::Attention,
                "Your testosterone level is at the upper end of normal. Slightly elevated androgens are common in PCOS and can contribute to symptoms like acne or hair changes.",
            ),
            param(
                "Prolactin",
                "15 ng/mL",
                ParameterStatus::Normal,
                "Your prolactin level is within the healthy range, which is good. This hormone doesn't appear to be contributing to your symptoms.",
            ),
            param(
                "DHEA-S",
                "180 µg/dL",
                ParameterStatus::Attention,
                "Your DHEA-S is slightly elevated, which can occur in PCOS. Managing stress and sleep can help optimize this hormone.",
            ),
            param(
                "AMH",
                "6.2 ng/mL",
                ParameterStatus::Elevated,
                "AMH (Anti-Mullerian Hormone) is higher than average. In PCOS, this can indicate more follicles in the ovaries, which is one of the diagnostic criteria.",
            ),
        ],
        summary: "Your hormonal panel shows patterns consistent with PCOS, including elevated androgens and AMH levels. These findings support the importance of lifestyle management and regular monitoring with your healthcare provider.".to_string(),
        feedback: ReportFeedback {
            overall_assessment: "Your hormonal profile is consistent with PCOS diagnosis. While some values show elevated androgens and AMH, your prolactin is normal, which is positive. These results support the need for lifestyle management but are not alarming.".to_string(),
            key_findings: lines(&[
                "Elevated LH/FSH ratio (2.8) - common in PCOS, indicates imbalance in reproductive hormones",
                "Slightly elevated testosterone - can explain symptoms like acne, excess hair growth, or irregular periods",
                "Normal prolactin - rules out hyperprolactinemia as a cause of your symptoms",
                "Elevated AMH - indicates normal ovarian reserve despite PCOS diagnosis",
            ]),
            recommendations: lines(&[
                "Focus on regular exercise (150+ minutes/week) - helps improve insulin sensitivity and hormone balance",
                "Adopt an anti-inflammatory diet rich in whole grains, fruits, and vegetables",
                "Maintain healthy weight through balanced nutrition - even 5-10% weight loss can improve symptoms",
                "Manage stress through yoga, meditation, or other relaxation techniques",
                "Get 7-9 hours of quality sleep - poor sleep worsens hormonal imbalance",
                "Consider working with a registered dietitian experienced in PCOS management",
            ]),
            when_to_see_doctors: lines(&[
                "If your symptoms worsen or new symptoms develop",
                "Before starting any new medications or supplements",
                "If planning for pregnancy - discuss preconception counseling",
                "For annual follow-up to monitor hormone levels and adjust treatment if needed",
            ]),
        },
    }
}

fn metabolic_panel() -> AnalysisReport {
    AnalysisReport {
        report_type: "Metabolic Panel".to_string(),
        parameters: vec![
            param(
                "Fasting Glucose",
                "95 mg/dL",
                ParameterStatus::Normal,
                "Great news! Your fasting glucose is within the healthy range. Maintaining stable blood sugar through diet and exercise helps manage PCOS symptoms.",
            ),
            param(
                "Insulin",
                "12 mIU/L",
                ParameterStatus::Normal,
                "Your insulin levels look good! This suggests your body is handling insulin well, which is positive for PCOS management.",
            ),
            param(
                "HOMA-IR",
                "2.8",
                ParameterStatus::Attention,
                "Your HOMA-IR suggests mild insulin resistance. This is common in PCOS but can be improved with exercise and dietary changes.",
            ),
            param(
                "Total Cholesterol",
                "210 mg/dL",
                ParameterStatus::Attention,
                "Your cholesterol is slightly elevated. Focus on heart-healthy fats and regular exercise to help improve this number.",
            ),
            param(
                "HDL Cholesterol",
                "45 mg/dL",
                ParameterStatus::Attention,
                "Your \"good\" cholesterol is lower than ideal. Aerobic exercise is one of the best ways to naturally increase HDL levels.",
            ),
        ],
        summary: "Your metabolic panel shows relatively good glucose control, but some attention to cholesterol and insulin resistance through lifestyle modifications would be beneficial.".to_string(),
        feedback: ReportFeedback {
            overall_assessment: "Your metabolic profile shows good glucose control but mild insulin resistance and slightly elevated cholesterol. These are manageable through lifestyle changes and don't require immediate medication in most cases.".to_string(),
            key_findings: lines(&[
                "Fasting glucose is normal - good glucose control at baseline",
                "HOMA-IR of 2.8 indicates mild insulin resistance - common in PCOS but improvable",
                "Total cholesterol slightly elevated - increases cardiovascular risk if not addressed",
                "Low HDL cholesterol - major risk factor for heart disease, especially in PCOS",
            ]),
            recommendations: lines(&[
                "Increase aerobic exercise to 30 minutes most days - this directly improves insulin sensitivity and raises HDL",
                "Reduce refined carbohydrates and added sugars - choose whole grains instead",
                "Increase soluble fiber intake (oats, beans, fruit) - helps lower cholesterol and stabilize blood sugar",
                "Include lean protein and healthy fats at each meal - slows glucose absorption",
                "Consider inositol supplementation - research shows benefit for insulin resistance in PCOS",
                "Monitor weight - excess body weight worsens insulin resistance",
                "Limit processed foods and increase heart-healthy foods like fish, nuts, and olive oil",
            ]),
            when_to_see_doctors: lines(&[
                "If fasting glucose rises above 100 mg/dL or if you develop prediabetes symptoms",
                "If cholesterol continues to rise despite lifestyle changes - may need medication",
                "For annual metabolic screening to track progress",
                "If you experience fatigue, increased thirst, or frequent urination - signs of worsening glucose control",
            ]),
        },
    }
}

fn thyroid_function() -> AnalysisReport {
    AnalysisReport {
        report_type: "Thyroid Function".to_string(),
        parameters: vec![
            param(
                "TSH",
                "2.1 mIU/L",
                ParameterStatus::Normal,
                "Your TSH is in the optimal range. Your thyroid appears to be functioning well, which is important for metabolism and overall health.",
            ),
            param(
                "Free T4",
                "1.2 ng/dL",
                ParameterStatus::Normal,
                "Your thyroid hormone level is healthy. This helps regulate your metabolism and energy levels.",
            ),
            param(
                "Free T3",
                "3.1 pg/mL",
                ParameterStatus::Normal,
                "Your Free T3 is within normal range, indicating good thyroid hormone availability to your tissues.",
            ),
            param(
                "TPO Antibodies",
                "8 IU/mL",
                ParameterStatus::Normal,
                "Your thyroid antibodies are negative, which means you don't have autoimmune thyroid disease. Good news for long-term thyroid health.",
            ),
        ],
        summary: "Your thyroid function is normal across all markers. This is positive news and suggests your thyroid is not contributing to PCOS symptoms.".to_string(),
        feedback: ReportFeedback {
            overall_assessment: "Excellent news! Your thyroid is functioning optimally across all markers. This rules out thyroid disorders as a contributor to your symptoms and supports overall metabolic health.".to_string(),
            key_findings: lines(&[
                "All thyroid markers are within optimal ranges",
                "No autoimmune thyroid disease detected - TPO antibodies are negative",
                "TSH is in the ideal range (1.5-2.5) for metabolism and symptom management",
                "Adequate thyroid hormone production and conversion (T4 to T3)",
            ]),
            recommendations: lines(&[
                "Continue with good lifestyle habits that support thyroid health",
                "Maintain adequate iodine, selenium, and zinc intake through diet or supplementation",
                "Manage stress - chronic stress can affect thyroid function",
                "Get regular exercise - supports thyroid health and weight management",
                "Ensure adequate sleep - critical for thyroid hormone regulation",
                "Limit goitrogenic foods in excess (raw cruciferous vegetables, soy)",
                "Stay hydrated - essential for all bodily functions including thyroid",
            ]),
            when_to_see_doctors: lines(&[
                "If you develop symptoms of hypothyroidism (fatigue, weight gain, cold sensitivity)",
                "If you develop symptoms of hyperthyroidism (anxiety, weight loss, heat sensitivity)",
                "For routine screening - once every 1-2 years is reasonable for PCOS management",
                "If starting new medications - some can interact with thyroid function",
            ]),
        },
    }
}

/// Hormonal Panel, Metabolic Panel and Thyroid Function, in that order.
pub static CANNED_REPORTS: Lazy<Vec<AnalysisReport>> =
    Lazy::new(|| vec![hormonal_panel(), metabolic_panel(), thyroid_function()]);

use hemo_core::{CancerIndicator, RiskLevel};

/// More than this many abnormalities adds the comprehensive-evaluation note.
const MANY_ABNORMALITIES: usize = 3;

const DISCLAIMER: &str = "Note: This AI-based analysis is a screening tool and should not replace professional medical diagnosis. Always consult with qualified healthcare professionals for proper evaluation and treatment.";

fn level_guidance(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => {
            "URGENT: Immediate consultation with a hematologist/oncologist is strongly recommended. \
             Additional diagnostic tests including bone marrow biopsy, flow cytometry, and comprehensive metabolic panel should be conducted as soon as possible. "
        }
        RiskLevel::High => {
            "High Priority: Schedule an appointment with a hematologist within 1-2 weeks. \
             Further testing including peripheral blood smear, bone marrow aspiration, and molecular studies may be necessary. "
        }
        RiskLevel::Moderate => {
            "Follow-up recommended: Consult with your primary care physician or hematologist within 2-4 weeks. \
             Repeat CBC test and additional blood work may be needed to monitor trends. "
        }
        RiskLevel::Low => {
            "Low risk detected. Continue routine health monitoring. \
             Maintain regular check-ups and repeat CBC annually or as recommended by your physician. "
        }
    }
}

/// Build the recommendation text: level guidance, each indicator, a note
/// for many abnormalities, then the disclaimer.
pub fn build_recommendations(
    level: RiskLevel,
    indicators: &[CancerIndicator],
    abnormality_count: usize,
) -> String {
    let mut text = String::from(level_guidance(level));

    if !indicators.is_empty() {
        text.push_str("\n\nSpecific concerns identified: ");
        for indicator in indicators {
            text.push_str(&format!(
                "{} - {}. ",
                indicator.indicator_type, indicator.description
            ));
        }
    }

    if abnormality_count > MANY_ABNORMALITIES {
        text.push_str(
            "\n\nMultiple abnormal parameters detected. Comprehensive evaluation is important to determine the underlying cause.",
        );
    }

    text.push_str("\n\n");
    text.push_str(DISCLAIMER);
    text
}


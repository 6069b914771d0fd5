use hemo_core::{Abnormality, Report};

use crate::ranges::range_for;
use crate::scoring::{DEVIATION_WEIGHT, MAX_FIELD_CONTRIBUTION};

/// Abnormalities found by the range scan and the score they contribute.
#[derive(Debug, Clone, Default)]
pub struct RangeScan {
    pub abnormalities: Vec<Abnormality>,
    pub score: f64,
}

/// Compare every measured field against its normal range, in panel order.
/// Unmeasured fields contribute nothing.
pub fn scan_ranges(report: &Report) -> RangeScan {
    let mut scan = RangeScan::default();

    for (field, value) in report.measured() {
        let range = range_for(field);
        let Some(deviation) = range.deviation(value) else {
            continue;
        };

        let contribution = (deviation.percent() * DEVIATION_WEIGHT).min(MAX_FIELD_CONTRIBUTION);
        tracing::debug!(
            field = %field,
            value,
            deviation_pct = deviation.percent(),
            contribution,
            "value outside normal range"
        );

        scan.score += contribution;
        scan.abnormalities.push(Abnormality {
            parameter: field.parameter_name(),
            value,
            normal_range: range.display(),
            deviation: deviation.describe(),
        });
    }

    scan
}


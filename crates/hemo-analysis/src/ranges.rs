use hemo_core::CbcField;
use serde::Serialize;

/// Reference interval for one CBC field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalRange {
    pub field: CbcField,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl NormalRange {
    const fn new(field: CbcField, min: f64, max: f64) -> Self {
        Self {
            field,
            min,
            max,
            unit: field.unit(),
        }
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Percent distance outside the range, relative to the violated bound.
    /// `None` when the value is within range.
    pub fn deviation(&self, value: f64) -> Option<Deviation> {
        if self.contains(value) {
            None
        } else if value < self.min {
            Some(Deviation::Below((self.min - value) / self.min * 100.0))
        } else if value > self.max {
            Some(Deviation::Above((value - self.max) / self.max * 100.0))
        } else {
            None
        }
    }

    /// e.g. `"4.5-11 10³/μL"`.
    pub fn display(&self) -> String {
        format!("{}-{} {}", self.min, self.max, self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    Below(f64),
    Above(f64),
}

impl Deviation {
    pub fn percent(self) -> f64 {
        match self {
            Deviation::Below(p) | Deviation::Above(p) => p,
        }
    }

    /// e.g. `"12.5% below normal"`. Ties round up (`12.25` reads `12.3`),
    /// which `{:.1}` alone would round to even.
    pub fn describe(self) -> String {
        let tenths = |p: f64| (p * 10.0).round() / 10.0;
        match self {
            Deviation::Below(p) => format!("{:.1}% below normal", tenths(p)),
            Deviation::Above(p) => format!("{:.1}% above normal", tenths(p)),
        }
    }
}

/// Adult reference intervals, in panel order.
pub static NORMAL_RANGES: [NormalRange; CbcField::COUNT] = [
    NormalRange::new(CbcField::WbcCount, 4.5, 11.0),
    NormalRange::new(CbcField::RbcCount, 4.5, 5.9),
    NormalRange::new(CbcField::Hemoglobin, 13.5, 17.5),
    NormalRange::new(CbcField::Hematocrit, 38.3, 48.6),
    NormalRange::new(CbcField::PlateletCount, 150.0, 400.0),
    NormalRange::new(CbcField::Neutrophils, 40.0, 70.0),
    NormalRange::new(CbcField::Lymphocytes, 20.0, 40.0),
    NormalRange::new(CbcField::Monocytes, 2.0, 8.0),
    NormalRange::new(CbcField::Eosinophils, 1.0, 4.0),
    NormalRange::new(CbcField::Basophils, 0.5, 1.0),
    NormalRange::new(CbcField::Mcv, 80.0, 100.0),
    NormalRange::new(CbcField::Mch, 27.0, 31.0),
    NormalRange::new(CbcField::Mchc, 32.0, 36.0),
];

pub fn range_for(field: CbcField) -> &'static NormalRange {
    // NORMAL_RANGES is declared in the same order as CbcField.
    &NORMAL_RANGES[field as usize]
}


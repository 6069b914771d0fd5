use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::field::CbcField;

/// A submitted Complete Blood Count report.
///
/// Each lab value is optional; `None` means "not measured". A `NaN` value is
/// read back as `None` by [`Report::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub test_date: jiff::civil::Date,

    #[serde(default)]
    pub wbc_count: Option<f64>,
    #[serde(default)]
    pub rbc_count: Option<f64>,
    #[serde(default)]
    pub hemoglobin: Option<f64>,
    #[serde(default)]
    pub hematocrit: Option<f64>,
    #[serde(default)]
    pub platelet_count: Option<f64>,
    #[serde(default)]
    pub neutrophils: Option<f64>,
    #[serde(default)]
    pub lymphocytes: Option<f64>,
    #[serde(default)]
    pub monocytes: Option<f64>,
    #[serde(default)]
    pub eosinophils: Option<f64>,
    #[serde(default)]
    pub basophils: Option<f64>,
    #[serde(default)]
    pub mcv: Option<f64>,
    #[serde(default)]
    pub mch: Option<f64>,
    #[serde(default)]
    pub mchc: Option<f64>,

    #[serde(default)]
    pub notes: String,
}

impl Report {
    /// A report with no measured values.
    pub fn new(id: Uuid, test_date: jiff::civil::Date) -> Self {
        Self {
            id,
            test_date,
            wbc_count: None,
            rbc_count: None,
            hemoglobin: None,
            hematocrit: None,
            platelet_count: None,
            neutrophils: None,
            lymphocytes: None,
            monocytes: None,
            eosinophils: None,
            basophils: None,
            mcv: None,
            mch: None,
            mchc: None,
            notes: String::new(),
        }
    }

    /// Set one lab value, builder style.
    pub fn with(mut self, field: CbcField, value: impl Into<Option<f64>>) -> Self {
        *self.slot(field) = value.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// The measured value for `field`, if any.
    pub fn value(&self, field: CbcField) -> Option<f64> {
        let raw = match field {
            CbcField::WbcCount => self.wbc_count,
            CbcField::RbcCount => self.rbc_count,
            CbcField::Hemoglobin => self.hemoglobin,
            CbcField::Hematocrit => self.hematocrit,
            CbcField::PlateletCount => self.platelet_count,
            CbcField::Neutrophils => self.neutrophils,
            CbcField::Lymphocytes => self.lymphocytes,
            CbcField::Monocytes => self.monocytes,
            CbcField::Eosinophils => self.eosinophils,
            CbcField::Basophils => self.basophils,
            CbcField::Mcv => self.mcv,
            CbcField::Mch => self.mch,
            CbcField::Mchc => self.mchc,
        };
        raw.filter(|v| !v.is_nan())
    }

    /// Present values in panel order.
    pub fn measured(&self) -> impl Iterator<Item = (CbcField, f64)> + '_ {
        CbcField::ALL
            .into_iter()
            .filter_map(|field| self.value(field).map(|v| (field, v)))
    }

    /// How many of the 13 lab fields were supplied.
    pub fn supplied_count(&self) -> usize {
        self.measured().count()
    }

    fn slot(&mut self, field: CbcField) -> &mut Option<f64> {
        match field {
            CbcField::WbcCount => &mut self.wbc_count,
            CbcField::RbcCount => &mut self.rbc_count,
            CbcField::Hemoglobin => &mut self.hemoglobin,
            CbcField::Hematocrit => &mut self.hematocrit,
            CbcField::PlateletCount => &mut self.platelet_count,
            CbcField::Neutrophils => &mut self.neutrophils,
            CbcField::Lymphocytes => &mut self.lymphocytes,
            CbcField::Monocytes => &mut self.monocytes,
            CbcField::Eosinophils => &mut self.eosinophils,
            CbcField::Basophils => &mut self.basophils,
            CbcField::Mcv => &mut self.mcv,
            CbcField::Mch => &mut self.mch,
            CbcField::Mchc => &mut self.mchc,
        }
    }
}

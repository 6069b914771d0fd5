use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the 13 measured values on a Complete Blood Count panel.
///
/// The declaration order is the canonical panel order: abnormalities are
/// always reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CbcField {
    WbcCount,
    RbcCount,
    Hemoglobin,
    Hematocrit,
    PlateletCount,
    Neutrophils,
    Lymphocytes,
    Monocytes,
    Eosinophils,
    Basophils,
    Mcv,
    Mch,
    Mchc,
}

impl CbcField {
    /// Number of lab fields on a CBC report.
    pub const COUNT: usize = 13;

    /// Every field, in panel order.
    pub const ALL: [CbcField; Self::COUNT] = [
        CbcField::WbcCount,
        CbcField::RbcCount,
        CbcField::Hemoglobin,
        CbcField::Hematocrit,
        CbcField::PlateletCount,
        CbcField::Neutrophils,
        CbcField::Lymphocytes,
        CbcField::Monocytes,
        CbcField::Eosinophils,
        CbcField::Basophils,
        CbcField::Mcv,
        CbcField::Mch,
        CbcField::Mchc,
    ];

    /// Serialized key (e.g. `"platelet_count"`).
    pub const fn key(self) -> &'static str {
        match self {
            CbcField::WbcCount => "wbc_count",
            CbcField::RbcCount => "rbc_count",
            CbcField::Hemoglobin => "hemoglobin",
            CbcField::Hematocrit => "hematocrit",
            CbcField::PlateletCount => "platelet_count",
            CbcField::Neutrophils => "neutrophils",
            CbcField::Lymphocytes => "lymphocytes",
            CbcField::Monocytes => "monocytes",
            CbcField::Eosinophils => "eosinophils",
            CbcField::Basophils => "basophils",
            CbcField::Mcv => "mcv",
            CbcField::Mch => "mch",
            CbcField::Mchc => "mchc",
        }
    }

    /// Form label (e.g. `"Platelet Count"`).
    pub const fn label(self) -> &'static str {
        match self {
            CbcField::WbcCount => "WBC Count",
            CbcField::RbcCount => "RBC Count",
            CbcField::Hemoglobin => "Hemoglobin",
            CbcField::Hematocrit => "Hematocrit",
            CbcField::PlateletCount => "Platelet Count",
            CbcField::Neutrophils => "Neutrophils",
            CbcField::Lymphocytes => "Lymphocytes",
            CbcField::Monocytes => "Monocytes",
            CbcField::Eosinophils => "Eosinophils",
            CbcField::Basophils => "Basophils",
            CbcField::Mcv => "MCV",
            CbcField::Mch => "MCH",
            CbcField::Mchc => "MCHC",
        }
    }

    /// Name shown on an abnormality row (e.g. `"PLATELET COUNT"`).
    pub fn parameter_name(self) -> String {
        self.label().to_uppercase()
    }

    /// Unit label for the measured value.
    pub const fn unit(self) -> &'static str {
        match self {
            CbcField::WbcCount | CbcField::PlateletCount => "10³/μL",
            CbcField::RbcCount => "10⁶/μL",
            CbcField::Hemoglobin | CbcField::Mchc => "g/dL",
            CbcField::Hematocrit
            | CbcField::Neutrophils
            | CbcField::Lymphocytes
            | CbcField::Monocytes
            | CbcField::Eosinophils
            | CbcField::Basophils => "%",
            CbcField::Mcv => "fL",
            CbcField::Mch => "pg",
        }
    }
}

impl fmt::Display for CbcField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CbcField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CbcField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}


//! Laboratory section enumeration for QC tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed laboratory sections, in board display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lab_section")]
pub enum LabSection {
    #[sqlx(rename = "Chemistry")]
    Chemistry,
    #[serde(rename = "Clinical Microscopy")]
    #[sqlx(rename = "Clinical Microscopy")]
    ClinicalMicroscopy,
    #[sqlx(rename = "Serology")]
    Serology,
    #[sqlx(rename = "Hematology")]
    Hematology,
    #[serde(rename = "Drug Testing")]
    #[sqlx(rename = "Drug Testing")]
    DrugTesting,
}

impl LabSection {
    /// All sections, in display order.
    pub const ALL: [LabSection; 5] = [
        LabSection::Chemistry,
        LabSection::ClinicalMicroscopy,
        LabSection::Serology,
        LabSection::Hematology,
        LabSection::DrugTesting,
    ];

    /// Return the section as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chemistry => "Chemistry",
            Self::ClinicalMicroscopy => "Clinical Microscopy",
            Self::Serology => "Serology",
            Self::Hematology => "Hematology",
            Self::DrugTesting => "Drug Testing",
        }
    }
}

impl fmt::Display for LabSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LabSection {
    type Err = labdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Chemistry" => Ok(Self::Chemistry),
            "Clinical Microscopy" => Ok(Self::ClinicalMicroscopy),
            "Serology" => Ok(Self::Serology),
            "Hematology" => Ok(Self::Hematology),
            "Drug Testing" => Ok(Self::DrugTesting),
            _ => Err(labdesk_core::AppError::validation(format!(
                "Invalid lab section: '{s}'"
            ))),
        }
    }
}

//! QC test status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a QC test. Wire values match the board labels verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "qc_status")]
pub enum QcStatus {
    /// QC run in progress (the daily reset state).
    #[sqlx(rename = "Ongoing")]
    Ongoing,
    /// QC passed.
    #[serde(rename = "QC Passed")]
    #[sqlx(rename = "QC Passed")]
    Passed,
    /// QC failed, under troubleshooting.
    #[serde(rename = "QC Troubleshooting")]
    #[sqlx(rename = "QC Troubleshooting")]
    Troubleshooting,
    /// Test referred to an external laboratory.
    #[serde(rename = "For Send-out")]
    #[sqlx(rename = "For Send-out")]
    ForSendOut,
    /// Tests remaining; the `remaining` count applies only here.
    #[serde(rename = "Remaining Test")]
    #[sqlx(rename = "Remaining Test")]
    RemainingTest,
}

impl QcStatus {
    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Passed => "QC Passed",
            Self::Troubleshooting => "QC Troubleshooting",
            Self::ForSendOut => "For Send-out",
            Self::RemainingTest => "Remaining Test",
        }
    }
}

impl fmt::Display for QcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QcStatus {
    type Err = labdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ongoing" => Ok(Self::Ongoing),
            "QC Passed" => Ok(Self::Passed),
            "QC Troubleshooting" => Ok(Self::Troubleshooting),
            "For Send-out" => Ok(Self::ForSendOut),
            "Remaining Test" => Ok(Self::RemainingTest),
            _ => Err(labdesk_core::AppError::validation(format!(
                "Invalid QC status: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&QcStatus::ForSendOut).unwrap();
        assert_eq!(json, "\"For Send-out\"");
        let back: QcStatus = serde_json::from_str("\"QC Passed\"").unwrap();
        assert_eq!(back, QcStatus::Passed);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("Done".parse::<QcStatus>().is_err());
    }
}

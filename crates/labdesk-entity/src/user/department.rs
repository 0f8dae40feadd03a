//! Department enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six fixed organizational units.
///
/// A record's department is fixed at creation and scopes department-admin
/// authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "department")]
pub enum Department {
    /// Clinical laboratory.
    #[sqlx(rename = "Laboratory")]
    Laboratory,
    /// Imaging (X-ray, ultrasound).
    #[sqlx(rename = "Imaging")]
    Imaging,
    /// Front desk and reception.
    #[sqlx(rename = "Reception")]
    Reception,
    /// Phlebotomy / specimen collection.
    #[sqlx(rename = "Phlebotomy")]
    Phlebotomy,
    /// Housekeeping and messenger staff.
    #[serde(rename = "HK/Messenger")]
    #[sqlx(rename = "HK/Messenger")]
    HkMessenger,
    /// Everything else.
    #[sqlx(rename = "Others")]
    Others,
}

impl Department {
    /// All departments, in display order.
    pub const ALL: [Department; 6] = [
        Department::Laboratory,
        Department::Imaging,
        Department::Reception,
        Department::Phlebotomy,
        Department::HkMessenger,
        Department::Others,
    ];

    /// Return the department as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laboratory => "Laboratory",
            Self::Imaging => "Imaging",
            Self::Reception => "Reception",
            Self::Phlebotomy => "Phlebotomy",
            Self::HkMessenger => "HK/Messenger",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Department {
    type Err = labdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Laboratory" => Ok(Self::Laboratory),
            "Imaging" => Ok(Self::Imaging),
            "Reception" => Ok(Self::Reception),
            "Phlebotomy" => Ok(Self::Phlebotomy),
            "HK/Messenger" => Ok(Self::HkMessenger),
            "Others" => Ok(Self::Others),
            _ => Err(labdesk_core::AppError::validation(format!(
                "Invalid department: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_display() {
        for dept in Department::ALL {
            assert_eq!(dept.as_str().parse::<Department>().unwrap(), dept);
        }
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&Department::HkMessenger).unwrap();
        assert_eq!(json, "\"HK/Messenger\"");
        let back: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Department::HkMessenger);
    }
}

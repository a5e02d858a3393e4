use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grade bands offered by the form's grade selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "K-2")]
    KindergartenToSecond,
    #[serde(rename = "3-5")]
    ThirdToFifth,
    #[serde(rename = "6-8")]
    SixthToEighth,
    #[serde(rename = "9-12")]
    NinthToTwelfth,
}

impl GradeLevel {
    /// Every band, in the order the selector lists them.
    pub const ALL: [GradeLevel; 4] = [
        GradeLevel::KindergartenToSecond,
        GradeLevel::ThirdToFifth,
        GradeLevel::SixthToEighth,
        GradeLevel::NinthToTwelfth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::KindergartenToSecond => "K-2",
            GradeLevel::ThirdToFifth => "3-5",
            GradeLevel::SixthToEighth => "6-8",
            GradeLevel::NinthToTwelfth => "9-12",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeLevel::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| format!("unknown grade level: {}", s))
    }
}

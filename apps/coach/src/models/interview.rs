use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewLevel {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl InterviewLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewLevel::Junior => "junior",
            InterviewLevel::Mid => "mid",
            InterviewLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for InterviewLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(InterviewLevel::Junior),
            "mid" => Ok(InterviewLevel::Mid),
            "senior" => Ok(InterviewLevel::Senior),
            other => Err(format!("unknown level '{other}' (expected junior, mid or senior)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mid() {
        assert_eq!(InterviewLevel::default(), InterviewLevel::Mid);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Senior".parse::<InterviewLevel>(), Ok(InterviewLevel::Senior));
        assert!("staff".parse::<InterviewLevel>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(InterviewLevel::Junior).unwrap(),
            serde_json::json!("junior")
        );
    }
}

use std::fmt::Display;

use anyhow::{Result, bail};

/// Process mode. Request logging is switched off under `Test`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Local,
    Test,
    Production,
}

impl Stage {
    pub fn logs_requests(&self) -> bool {
        !matches!(self, Stage::Test)
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            Stage::Local => "local",
            Stage::Test => "test",
            Stage::Production => "production",
        };
        write!(f, "{}", stage)
    }
}

impl TryFrom<&str> for Stage {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "development" => Ok(Stage::Local),
            "test" => Ok(Stage::Test),
            "production" => Ok(Stage::Production),
            other => bail!("unknown stage: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stages_case_insensitively() {
        assert_eq!(Stage::try_from("Production").unwrap(), Stage::Production);
        assert_eq!(Stage::try_from(" test ").unwrap(), Stage::Test);
        assert_eq!(Stage::try_from("development").unwrap(), Stage::Local);
    }

    #[test]
    fn rejects_unknown_stage() {
        assert!(Stage::try_from("staging").is_err());
    }

    #[test]
    fn only_test_stage_silences_request_logs() {
        assert!(Stage::Local.logs_requests());
        assert!(Stage::Production.logs_requests());
        assert!(!Stage::Test.logs_requests());
    }
}

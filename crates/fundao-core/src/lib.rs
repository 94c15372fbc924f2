pub mod fixtures;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- Domain types (matching the frontend's wire shapes) ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub yes: u32,
    pub no: u32,
    pub abstain: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub status: ProposalStatus,
    pub votes: VoteTally,
}

/// A DAO as rendered on the listing and detail pages. `treasury` is only
/// present on the detail record (raised minus gas fees in the mock data).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dao {
    pub dao_id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
    pub raised: u64,
    pub goal: u64,
    pub contributors: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasury: Option<u64>,
}

impl Dao {
    /// Funding progress as a percentage (0.0 when the goal is zero).
    pub fn progress(&self) -> f64 {
        if self.goal == 0 {
            0.0
        } else {
            self.raised as f64 / self.goal as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Erc20,
    Erc721,
    Erc1155,
}

/// User input from the create-DAO form, validated before "deployment".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoDraft {
    pub project_name: String,
    pub purpose: String,
    pub funding_goal: u64,
    pub token_type: TokenType,
}

impl DaoDraft {
    /// Enforce the create-form rules: name 3-50 chars, purpose 10-500 chars,
    /// funding goal positive.
    pub fn validate(&self) -> Result<(), String> {
        let name_len = self.project_name.chars().count();
        if name_len < 3 {
            return Err("Project name must be at least 3 characters.".to_string());
        }
        if name_len > 50 {
            return Err("Project name must be at most 50 characters.".to_string());
        }
        let purpose_len = self.purpose.chars().count();
        if purpose_len < 10 {
            return Err("Purpose must be at least 10 characters.".to_string());
        }
        if purpose_len > 500 {
            return Err("Purpose must be at most 500 characters.".to_string());
        }
        if self.funding_goal == 0 {
            return Err("Funding goal must be positive.".to_string());
        }
        Ok(())
    }
}

/// Passed/active/failed counts feeding the governance analytics chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub passed: u32,
    pub active: u32,
    pub failed: u32,
}

pub fn status_breakdown(proposals: &[Proposal]) -> StatusBreakdown {
    let mut counts = StatusBreakdown::default();
    for p in proposals {
        match p.status {
            ProposalStatus::Passed => counts.passed += 1,
            ProposalStatus::Active => counts.active += 1,
            ProposalStatus::Failed => counts.failed += 1,
        }
    }
    counts
}

// --- AI Settings ---

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

/// Resolve the global config directory (~/.fundao/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fundao")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = config_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DaoDraft {
        DaoDraft {
            project_name: "EcoWarriors Initiative".to_string(),
            purpose: "Funding decentralized projects to combat climate change.".to_string(),
            funding_goal: 100_000,
            token_type: TokenType::Erc20,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn draft_name_bounds() {
        let mut d = draft();
        d.project_name = "ab".to_string();
        assert!(d.validate().is_err());
        d.project_name = "x".repeat(51);
        assert!(d.validate().is_err());
        d.project_name = "abc".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn draft_purpose_bounds() {
        let mut d = draft();
        d.purpose = "too short".to_string();
        assert!(d.validate().is_err());
        d.purpose = "x".repeat(501);
        assert!(d.validate().is_err());
    }

    #[test]
    fn draft_goal_must_be_positive() {
        let mut d = draft();
        d.funding_goal = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn ai_configured_requires_key_except_ollama() {
        let mut s = AiSettings {
            provider: "openai".to_string(),
            api_key: String::new(),
            model: "gpt-4o".to_string(),
        };
        assert!(!ai_configured(&s));
        s.api_key = "sk-test".to_string();
        assert!(ai_configured(&s));

        let local = AiSettings {
            provider: "ollama".to_string(),
            api_key: String::new(),
            model: "llama3".to_string(),
        };
        assert!(ai_configured(&local));
        assert!(!ai_configured(&AiSettings::default()));
    }

    #[test]
    fn status_breakdown_counts_all_states() {
        let proposals = fixtures::proposals_for("ecowarriors");
        let counts = status_breakdown(&proposals);
        assert_eq!(counts.active, 2);
        assert_eq!(counts.passed, 1);
        assert_eq!(counts.failed, 1);
    }

    #[test]
    fn dao_progress_handles_zero_goal() {
        let mut dao = fixtures::featured_daos().remove(0);
        assert!((dao.progress() - 75.0).abs() < f64::EPSILON);
        dao.goal = 0;
        assert_eq!(dao.progress(), 0.0);
    }

    #[test]
    fn token_type_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenType::Erc721).unwrap(),
            "\"erc721\""
        );
    }
}

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// AiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never lives in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_summary_max_tokens")]
    pub summary_max_tokens: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_summary_max_tokens() -> u32 {
    300
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            summary_max_tokens: default_summary_max_tokens(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

// ---------------------------------------------------------------------------
// DepartmentsConfig
// ---------------------------------------------------------------------------

/// One tag-to-department mapping. A goal belongs to the first rule whose
/// `keyword` appears (case-insensitively) in any of its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRule {
    pub keyword: String,
    pub name: String,
}

impl DepartmentRule {
    pub fn new(keyword: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsConfig {
    #[serde(default = "default_department_rules")]
    pub rules: Vec<DepartmentRule>,
    #[serde(default = "default_department_fallback")]
    pub fallback: String,
}

fn default_department_rules() -> Vec<DepartmentRule> {
    vec![
        DepartmentRule::new("sales", "Sales"),
        DepartmentRule::new("marketing", "Marketing"),
        DepartmentRule::new("product", "Product"),
        DepartmentRule::new("support", "Support"),
        DepartmentRule::new("engineering", "Engineering"),
    ]
}

fn default_department_fallback() -> String {
    "Other".to_string()
}

impl Default for DepartmentsConfig {
    fn default() -> Self {
        Self {
            rules: default_department_rules(),
            fallback: default_department_fallback(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub departments: DepartmentsConfig,
    /// How many goals the activity pane shows.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_version() -> u32 {
    1
}

fn default_recent_limit() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            ai: AiConfig::default(),
            departments: DepartmentsConfig::default(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Load from the given path. A missing file yields the defaults; a
    /// present but malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_round_trip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.ai.model, "gpt-3.5-turbo");
        assert_eq!(parsed.recent_limit, 4);
    }

    #[test]
    fn partial_yaml_backfills_defaults() {
        let yaml = "version: 1\nai:\n  model: gpt-4o-mini\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.ai.model, "gpt-4o-mini");
        assert_eq!(cfg.ai.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.ai.max_tokens, 1500);
        assert_eq!(cfg.departments.fallback, "Other");
        assert_eq!(cfg.departments.rules.len(), 5);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(cfg.ai.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goalflow.yaml");
        std::fs::write(&path, "version: [not a number").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goalflow.yaml");
        let mut cfg = Config::default();
        cfg.departments.rules.push(DepartmentRule::new("ops", "Operations"));
        cfg.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.departments.rules.len(), 6);
        assert_eq!(loaded.departments.rules[5].name, "Operations");
    }

    #[test]
    fn department_rule_order_is_kept() {
        let rules = default_department_rules();
        assert_eq!(rules[0].keyword, "sales");
        assert_eq!(rules[4].keyword, "engineering");
    }
}

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mdtext_core::{DisplayTextPolicy, Engine, Rule, RuleError, RuleSet, StyleOp};
use serde::Deserialize;

/// Which rules an engine starts from before custom `[[rule]]` tables are
/// appended.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RuleSource {
    /// Built-in rules followed by any custom rules
    #[default]
    Default,
    /// Only the custom rules
    Custom,
}

/// A custom rule as written in a config file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RuleConfig {
    pub id: String,
    pub pattern: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub style: Vec<StyleOp>,
}

fn default_template() -> String {
    "$0".to_string()
}

impl RuleConfig {
    pub fn to_rule(&self) -> Result<Rule, RuleError> {
        Rule::try_new(
            self.id.as_str(),
            self.pattern.as_str(),
            self.template.as_str(),
            self.style.clone(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display_text: DisplayTextPolicy,
    pub preprocess: bool,
    pub rules: RuleSource,
    #[serde(rename = "rule")]
    pub custom_rules: Vec<RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_text: DisplayTextPolicy::default(),
            preprocess: true,
            rules: RuleSource::Default,
            custom_rules: Vec::new(),
        }
    }
}

impl Config {
    /// The ordered rule set this config describes.
    pub fn rule_set(&self) -> Result<RuleSet, RuleError> {
        let mut rules = match self.rules {
            RuleSource::Default => RuleSet::default_rules().rules().to_vec(),
            RuleSource::Custom => Vec::new(),
        };
        for custom in &self.custom_rules {
            rules.push(custom.to_rule()?);
        }
        RuleSet::new(rules)
    }

    pub fn engine(&self) -> Result<Engine, RuleError> {
        Ok(Engine::new(self.rule_set()?)
            .with_policy(self.display_text)
            .with_preprocess(self.preprocess))
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn display_text(mut self, policy: DisplayTextPolicy) -> Self {
        self.config.display_text = policy;
        self
    }

    pub fn preprocess(mut self, enabled: bool) -> Self {
        self.config.preprocess = enabled;
        self
    }

    pub fn rules(mut self, source: RuleSource) -> Self {
        self.config.rules = source;
        self
    }

    pub fn rule(mut self, rule: RuleConfig) -> Self {
        self.config.custom_rules.push(rule);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".mdtext.toml", "mdtext.toml"];

fn invalid_config(path: &Path, e: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid config {}: {e}", path.display()),
    )
}

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    let config = toml::from_str::<Config>(s).map_err(|e| invalid_config(path, e))?;
    // Surface bad patterns and duplicate ids at load time rather than as
    // rules that silently never match.
    config.rule_set().map_err(|e| invalid_config(path, e))?;
    Ok(config)
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("mdtext").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    let p = dirs::home_dir()?
        .join(".config")
        .join("mdtext")
        .join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .mdtext.toml, mdtext.toml
/// 3) XDG: $XDG_CONFIG_HOME/mdtext/config.toml or ~/.config/mdtext/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {}", p.display(), e),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {}", p.display(), e),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}

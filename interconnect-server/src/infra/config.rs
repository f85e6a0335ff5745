use anyhow::{Context, anyhow, bail};
use interconnect_core::{
    CompatibilityChecker, FixedWindowPolicy, InterconnectEngine, StaticTargetCatalog,
    WindowSettings, catalog::DEFAULT_TARGET_ID, events::DEFAULT_EVENT_CAPACITY,
};
use interconnect_model::AntennaType;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Server configuration loaded from environment variables plus an optional
/// admission policy file.
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // CORS settings; empty allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// Admission policy handed to the engine.
    pub policy: PolicyConfig,

    /// Where the policy came from, for the startup log.
    pub policy_source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            cors_allowed_origins: Vec::new(),
            policy: PolicyConfig::default(),
            policy_source: None,
        }
    }
}

impl Config {
    /// Read the environment. `policy_path` (from the CLI) wins over
    /// `$INTERCONNECT_CONFIG_PATH`.
    pub fn from_env(policy_path: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT is not a valid port: {raw:?}"))?,
            Err(_) => defaults.server_port,
        };

        let (mut policy, policy_source) = PolicyConfig::load_from_env(policy_path)?;

        if let Ok(raw) = env::var("INTERCONNECT_REQUIRED_ANTENNA_TYPE") {
            policy.required_antenna_type = raw
                .parse()
                .context("invalid INTERCONNECT_REQUIRED_ANTENNA_TYPE")?;
        }
        if let Ok(raw) = env::var("INTERCONNECT_TARGETS") {
            policy.targets = split_list(&raw);
        }
        if let Ok(raw) = env::var("INTERCONNECT_EVENT_CAPACITY") {
            policy.event_capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid INTERCONNECT_EVENT_CAPACITY {raw:?}"))?;
        }

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            policy,
            policy_source,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_host.trim().is_empty() {
            bail!("server host must not be empty");
        }
        self.policy.validate()
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Admission policy. Every field is optional in the file; missing ones keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Antenna type both signal chains of a transceiver must declare.
    pub required_antenna_type: AntennaType,
    /// Raw target ids seeded at startup, named `target/<id>`.
    pub targets: Vec<String>,
    /// Buffered events per subscriber before it starts lagging.
    pub event_capacity: usize,
    /// Contact window span and spectrum envelope.
    pub window: WindowSettings,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            required_antenna_type: AntennaType::Optical,
            targets: vec![DEFAULT_TARGET_ID.to_string()],
            event_capacity: DEFAULT_EVENT_CAPACITY,
            window: WindowSettings::default(),
        }
    }
}

impl PolicyConfig {
    /// Load policy overrides. Evaluation order:
    /// 1) `explicit` (the `--config` flag) or `$INTERCONNECT_CONFIG_PATH`,
    /// 2) `$INTERCONNECT_CONFIG_JSON` (inline JSON),
    /// 3) `interconnect.toml` / `config/interconnect.toml` if present,
    /// 4) defaults.
    fn load_from_env(explicit: Option<&Path>) -> anyhow::Result<(Self, Option<PathBuf>)> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os("INTERCONNECT_CONFIG_PATH").map(PathBuf::from));
        if let Some(path) = path {
            return Ok((Self::load_from_file(&path)?, Some(path)));
        }

        if let Ok(raw) = env::var("INTERCONNECT_CONFIG_JSON") {
            let policy =
                Self::parse_json(&raw).context("failed to parse INTERCONNECT_CONFIG_JSON")?;
            return Ok((policy, None));
        }

        if let Some(path) = Self::find_default_file() {
            return Ok((Self::load_from_file(&path)?, Some(path)));
        }

        Ok((Self::default(), None))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read policy config from {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid policy config {}", path.display())),
            Some("toml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("invalid policy config {}: {}", path.display(), err)),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse policy config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid policy config json: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "interconnect.toml",
            "interconnect.json",
            "config/interconnect.toml",
            "config/interconnect.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.required_antenna_type == AntennaType::Unspecified {
            bail!("required antenna type must not be UNSPECIFIED");
        }
        if self.event_capacity == 0 {
            bail!("event capacity must be greater than zero");
        }
        self.window.validate()?;
        StaticTargetCatalog::from_ids(&self.targets)?;
        Ok(())
    }

    /// Wire an engine from this policy.
    pub fn build_engine(&self) -> anyhow::Result<InterconnectEngine> {
        let catalog = StaticTargetCatalog::from_ids(&self.targets)?;
        let windows = FixedWindowPolicy::new(self.window)?;

        let engine = InterconnectEngine::builder()
            .compatibility(CompatibilityChecker::new(self.required_antenna_type))
            .window_policy(Arc::new(windows))
            .target_catalog(Arc::new(catalog))
            .event_capacity(self.event_capacity)
            .build()?;
        Ok(engine)
    }
}

//! Binary settings read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Data bundled with the content crate, used when `AGENT_DATA_DIR` is unset.
const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");

#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Directory holding the world catalogs and, by default, the agent file.
    pub data_dir: PathBuf,
    /// Agent state file; `<data_dir>/agent.ron` when unset.
    pub state_file: Option<PathBuf>,
    /// Tunables file; `<data_dir>/config.toml` when unset.
    pub config_file: Option<PathBuf>,
    /// Number of selection passes before exiting.
    pub ticks: u64,
    pub tick_interval: Duration,
    /// Print each tick's report to stdout as JSON.
    pub report_json: bool,
    /// Daily rolling log files are written here when set.
    pub log_dir: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(BUNDLED_DATA_DIR),
            state_file: None,
            config_file: None,
            ticks: 1,
            tick_interval: Duration::from_millis(1000),
            report_json: false,
            log_dir: None,
        }
    }
}

impl AgentConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_DATA_DIR` - world data directory (default: bundled data)
    /// - `AGENT_STATE_FILE` - agent state RON file
    /// - `AGENT_CONFIG_FILE` - tunables TOML file
    /// - `AGENT_TICKS` - selection passes to run (default: 1)
    /// - `AGENT_TICK_INTERVAL_MS` - delay between passes (default: 1000)
    /// - `AGENT_REPORT_JSON` - emit JSON reports on stdout (default: false)
    /// - `AGENT_LOG_DIR` - directory for rolling log files
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("AGENT_DATA_DIR") {
            config.data_dir = dir;
        }
        config.state_file = read_env("AGENT_STATE_FILE");
        config.config_file = read_env("AGENT_CONFIG_FILE");

        if let Some(ticks) = read_env::<u64>("AGENT_TICKS") {
            config.ticks = ticks.max(1);
        }
        if let Some(millis) = read_env::<u64>("AGENT_TICK_INTERVAL_MS") {
            config.tick_interval = Duration::from_millis(millis.max(1));
        }

        if let Some(enable) = read_env::<bool>("AGENT_REPORT_JSON") {
            config.report_json = enable;
        } else if env::var("AGENT_REPORT_JSON").is_ok() {
            config.report_json = true;
        }

        config.log_dir = read_env("AGENT_LOG_DIR");
        config
    }

    pub fn state_path(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("agent.ron"))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_path_defaults_into_data_dir() {
        let config = AgentConfig {
            data_dir: PathBuf::from("/srv/agent"),
            ..AgentConfig::default()
        };
        assert_eq!(config.state_path(), PathBuf::from("/srv/agent/agent.ron"));

        let explicit = AgentConfig {
            state_file: Some(PathBuf::from("/tmp/hero.ron")),
            ..config
        };
        assert_eq!(explicit.state_path(), PathBuf::from("/tmp/hero.ron"));
    }
}

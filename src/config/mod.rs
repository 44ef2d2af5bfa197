use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Activity strictly later than this time of day counts as after-hours
    #[serde(default = "default_after_hours_cutoff")]
    pub after_hours_cutoff: String,
    /// Program names (compared trimmed and uppercased) dropped before any filter
    #[serde(default = "default_excluded_programs")]
    pub excluded_programs: Vec<String>,
    /// Role accounts are `1<suffix>` .. `<count><suffix>`
    #[serde(default = "default_role_account_suffix")]
    pub role_account_suffix: String,
    #[serde(default = "default_role_account_count")]
    pub role_account_count: u32,
    /// Pauses up to this many seconds are not reported
    #[serde(default = "default_min_gap_seconds")]
    pub min_gap_seconds: i64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_export_format")]
    pub default_export_format: ExportFormat,
}

fn default_after_hours_cutoff() -> String {
    "17:00:00".to_string()
}
fn default_excluded_programs() -> Vec<String> {
    vec!["MASUK KE SYSTEM".to_string(), "KELUAR DARI SYSTEM".to_string()]
}
fn default_role_account_suffix() -> String {
    "edpo".to_string()
}
fn default_role_account_count() -> u32 {
    13
}
fn default_min_gap_seconds() -> i64 {
    60
}
fn default_top_n() -> usize {
    5
}
fn default_export_format() -> ExportFormat {
    ExportFormat::Csv
}

impl Default for Config {
    fn default() -> Self {
        Self {
            after_hours_cutoff: default_after_hours_cutoff(),
            excluded_programs: default_excluded_programs(),
            role_account_suffix: default_role_account_suffix(),
            role_account_count: default_role_account_count(),
            min_gap_seconds: default_min_gap_seconds(),
            top_n: default_top_n(),
            default_export_format: default_export_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ractivitylog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ractivitylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ractivitylog.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        self.cutoff()?;
        if self.top_n == 0 {
            return Err(AppError::Config("top_n must be at least 1".into()));
        }
        if self.min_gap_seconds < 0 {
            return Err(AppError::Config(
                "min_gap_seconds must not be negative".into(),
            ));
        }
        self.min_gap()?;
        Ok(())
    }

    /// Shortest pause reported by the drill-down.
    pub fn min_gap(&self) -> AppResult<TimeDelta> {
        TimeDelta::try_seconds(self.min_gap_seconds).ok_or_else(|| {
            AppError::Config(format!(
                "min_gap_seconds {} is out of range",
                self.min_gap_seconds
            ))
        })
    }

    pub fn cutoff(&self) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.after_hours_cutoff, "%H:%M:%S").map_err(|_| {
            AppError::Config(format!(
                "after_hours_cutoff '{}' is not HH:MM:SS",
                self.after_hours_cutoff
            ))
        })
    }

    /// Normalized program names dropped by the exclusion stage.
    pub fn excluded_program_set(&self) -> HashSet<String> {
        self.excluded_programs
            .iter()
            .map(|p| p.trim().to_uppercase())
            .collect()
    }

    /// `{"1edpo", "2edpo", ..., "13edpo"}` with the default settings.
    pub fn role_account_set(&self) -> HashSet<String> {
        let suffix = self.role_account_suffix.trim().to_lowercase();
        (1..=self.role_account_count)
            .map(|i| format!("{i}{suffix}"))
            .collect()
    }
}

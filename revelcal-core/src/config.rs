//! Export configuration.
//!
//! Everything the engine needs to know about the operator (names, public
//! URLs, home timezone, where calendar files live) is carried by an explicit
//! [`ExportConfig`] value handed to the builders, never read from globals.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalExportError, CalExportResult};

const ENV_PREFIX: &str = "REVELCAL";

fn default_prod_id() -> String {
    "Revel Bus".into()
}

fn default_calendar_name() -> String {
    "Revel Bus Trips".into()
}

fn default_base_url() -> String {
    "http://www.revelbus.com".into()
}

fn default_timezone() -> String {
    "America/New_York".into()
}

fn default_refresh_interval() -> String {
    "PT12H".into()
}

fn default_uid_prefix() -> String {
    "REVBUS".into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_ics_dir() -> String {
    "ical".into()
}

fn default_trips_file() -> PathBuf {
    PathBuf::from("./trips.json")
}

fn default_listen() -> String {
    "127.0.0.1:4096".into()
}

/// How trip wall-clock times are rendered in third-party calendar links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTimePolicy {
    /// Format the stored wall-clock time as-is with a `Z` suffix.
    #[default]
    Verbatim,
    /// Interpret the stored time in the configured timezone and convert to UTC.
    Utc,
}

/// Operator configuration for calendar export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_prod_id")]
    pub prod_id: String,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    #[serde(default)]
    pub calendar_description: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Public URL of the trip listing; defaults to `<base_url>/trips`.
    #[serde(default)]
    pub calendar_url: Option<String>,

    /// Timezone tag attached to every exported event. Empty or `UTC` means
    /// times are written as UTC.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,

    #[serde(default = "default_uid_prefix")]
    pub uid_prefix: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_ics_dir")]
    pub ics_dir: String,

    #[serde(default = "default_timezone")]
    pub google_ctz: String,

    #[serde(default)]
    pub link_times: LinkTimePolicy,

    #[serde(default = "default_trips_file")]
    pub trips_file: PathBuf,

    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            prod_id: default_prod_id(),
            calendar_name: default_calendar_name(),
            calendar_description: String::new(),
            base_url: default_base_url(),
            calendar_url: None,
            timezone: default_timezone(),
            refresh_interval: default_refresh_interval(),
            uid_prefix: default_uid_prefix(),
            static_dir: default_static_dir(),
            ics_dir: default_ics_dir(),
            google_ctz: default_timezone(),
            link_times: LinkTimePolicy::default(),
            trips_file: default_trips_file(),
            listen: default_listen(),
        }
    }
}

impl ExportConfig {
    /// Default location: ~/.config/revelcal/config.toml
    pub fn config_path() -> CalExportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalExportError::Config("Could not determine config directory".into()))?
            .join("revelcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from a TOML file (explicit path, or the default
    /// location which is created on first use) layered under `REVELCAL_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> CalExportResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::config_path()?;
                if !p.exists() {
                    Self::create_default_config(&p)?;
                }
                p
            }
        };

        tracing::debug!(path = %config_path.display(), "loading export config");

        let config: ExportConfig = Config::builder()
            .add_source(File::from(config_path).required(path.is_some()))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| CalExportError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalExportError::Config(e.to_string()))?;

        config.validated()
    }

    /// Normalize and check values that would otherwise produce broken output.
    pub fn validated(mut self) -> CalExportResult<Self> {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }

        if !self.timezone.is_empty() && self.timezone != "UTC" {
            self.timezone.parse::<Tz>().map_err(|_| {
                CalExportError::Config(format!(
                    "Unknown timezone '{}'. Expected an IANA name such as America/New_York",
                    self.timezone
                ))
            })?;
        }

        Ok(self)
    }

    /// Parsed timezone, `None` when events are written as UTC.
    pub fn tz(&self) -> Option<Tz> {
        if self.timezone.is_empty() || self.timezone == "UTC" {
            return None;
        }
        self.timezone.parse().ok()
    }

    pub fn calendar_url(&self) -> String {
        self.calendar_url
            .clone()
            .unwrap_or_else(|| format!("{}/trips", self.base_url))
    }

    /// Public page of a single trip.
    pub fn trip_url(&self, slug: &str) -> String {
        format!("{}/trip/{}", self.base_url, slug)
    }

    /// Directory that holds exported `.ics` files.
    pub fn ics_path(&self) -> PathBuf {
        let static_dir = shellexpand::tilde(&self.static_dir.to_string_lossy()).into_owned();
        PathBuf::from(static_dir).join(&self.ics_dir)
    }

    /// URL prefix `.ics` files are published under: `/<ics_dir>`, or empty
    /// when they sit at the site root.
    pub fn ics_url_prefix(&self) -> String {
        match self.ics_dir.trim_matches('/') {
            "" => String::new(),
            dir => format!("/{dir}"),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalExportResult<()> {
        let defaults = ExportConfig::default();
        let contents = format!(
            "\
# revelcal configuration

# Calendar identity:
# prod_id = \"{}\"
# calendar_name = \"{}\"
# calendar_description = \"\"

# Public site (trip pages live at <base_url>/trip/<slug>):
# base_url = \"{}\"

# Timezone attached to exported events (\"UTC\" writes Z-suffixed times):
# timezone = \"{}\"
# refresh_interval = \"{}\"
# uid_prefix = \"{}\"

# Where .ics files are written (<static_dir>/<ics_dir>/<trip-id>.ics).
# ics_dir is also the URL prefix of calendar links and server downloads:
# static_dir = \"{}\"
# ics_dir = \"{}\"

# Third-party links (\"verbatim\" or \"utc\"):
# google_ctz = \"{}\"
# link_times = \"verbatim\"

# Trip data and server address:
# trips_file = \"{}\"
# listen = \"{}\"
",
            defaults.prod_id,
            defaults.calendar_name,
            defaults.base_url,
            defaults.timezone,
            defaults.refresh_interval,
            defaults.uid_prefix,
            defaults.static_dir.display(),
            defaults.ics_dir,
            defaults.google_ctz,
            defaults.trips_file.display(),
            defaults.listen,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalExportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalExportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_trims_trailing_slashes() {
        let config = ExportConfig {
            base_url: "https://example.com//".into(),
            ..ExportConfig::default()
        }
        .validated()
        .unwrap();

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.trip_url("fall-foliage"), "https://example.com/trip/fall-foliage");
        assert_eq!(config.calendar_url(), "https://example.com/trips");
    }

    #[test]
    fn validated_rejects_unknown_timezone() {
        let result = ExportConfig {
            timezone: "EDST".into(),
            ..ExportConfig::default()
        }
        .validated();

        assert!(matches!(result, Err(CalExportError::Config(_))));
    }

    #[test]
    fn utc_and_empty_timezone_have_no_tz() {
        for tz in ["", "UTC"] {
            let config = ExportConfig {
                timezone: tz.into(),
                ..ExportConfig::default()
            }
            .validated()
            .unwrap();
            assert!(config.tz().is_none());
        }
        assert_eq!(ExportConfig::default().tz(), Some(chrono_tz::America::New_York));
    }

    #[test]
    fn ics_url_prefix_normalizes_slashes() {
        let with_dir = |dir: &str| ExportConfig {
            ics_dir: dir.into(),
            ..ExportConfig::default()
        };

        assert_eq!(ExportConfig::default().ics_url_prefix(), "/ical");
        assert_eq!(with_dir("/assets/ical/").ics_url_prefix(), "/assets/ical");
        assert_eq!(with_dir("").ics_url_prefix(), "");
        assert_eq!(with_dir("/").ics_url_prefix(), "");
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "calendar_name = \"Weekend Trips\"\ntimezone = \"UTC\"\nlink_times = \"utc\"\n",
        )
        .unwrap();

        let config = ExportConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.calendar_name, "Weekend Trips");
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.link_times, LinkTimePolicy::Utc);
        assert_eq!(config.prod_id, "Revel Bus");
    }

    #[test]
    fn default_config_file_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ExportConfig::create_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(
            contents
                .lines()
                .all(|l| l.is_empty() || l.starts_with('#'))
        );

        let config = ExportConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.timezone, "America/New_York");
    }
}

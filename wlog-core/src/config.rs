use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::keywords::Keywords;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where daily work-log files live.
    pub log_dir: PathBuf,
    /// Hourly rate used for cost totals. Optional; without it summaries show
    /// hours only.
    pub rate: Option<f64>,
    /// Format used to display dates (and to read a date out of an explicit
    /// file's name). Default is "%m-%d-%Y", the recap-sheet convention.
    pub date_format: String,
    /// Date formats accepted on the command line, tried in order.
    pub input_date_formats: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    log_dir: Option<PathBuf>,
    rate: Option<f64>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    /// Optional table:
    /// [synonyms]
    /// ytd = "yesterday"
    /// ayer = "yesterday"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native),
    /// apply defaults, and extend the global Keywords registry with
    /// user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%m-%d-%Y".to_string());

        let input_date_formats = file_config
            .input_date_formats
            .unwrap_or_else(Self::default_input_formats);

        let log_dir = file_config.log_dir.unwrap_or_else(Self::default_log_dir);

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Ok(Self {
            log_dir,
            rate: file_config.rate,
            date_format,
            input_date_formats,
        })
    }

    fn default_input_formats() -> Vec<String> {
        vec!["%m-%d-%Y".to_string(), "%Y-%m-%d".to_string()]
    }

    /// Default log root: `{data_dir}/wlog`
    /// - macOS:   `~/Library/Application Support/wlog`
    /// - Linux:   `$XDG_DATA_HOME/wlog` or `~/.local/share/wlog`
    /// - Windows: `%APPDATA%\wlog`
    fn default_log_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("wlog");
            p
        } else {
            PathBuf::from("./wlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("wlog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("wlog").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with a canonical keyword (eg. "today").
    /// Lowercases both alias and target for case-insensitive behavior.
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::keywords::{Keyword, Keywords};
    use std::path::Path;
    use std::path::PathBuf;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(log_dir: PathBuf) -> Config {
        Config {
            log_dir,
            rate: None,
            date_format: "%m-%d-%Y".to_string(),
            input_date_formats: vec!["%m-%d-%Y".to_string(), "%Y-%m-%d".to_string()],
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("wlog")
                .join("config.toml");
            let expected_native = b.config_dir().join("wlog").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_log_dir_and_rate() {
        let toml = r#"
            log_dir = "/tmp/my-worklog"
            rate = 42.5
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.log_dir.as_deref(), Some(Path::new("/tmp/my-worklog")));
        assert_eq!(fc.rate, Some(42.5));
        assert!(fc.date_format.is_none());
    }

    #[test]
    fn parse_file_accepts_input_date_formats() {
        let toml = r#"
            input_date_formats = ["%d/%m/%Y"]
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.input_date_formats, Some(vec!["%d/%m/%Y".to_string()]));
    }

    #[test]
    fn parse_file_accepts_synonyms_and_extends_registry() {
        let toml = r#"
            log_dir = "/tmp/my-worklog"

            [synonyms]
            ytd = "yesterday"
            AYER = "yesterday"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());

        super::Config::load_synonyms(&fc.synonyms);

        assert!(Keywords::matches(Keyword::Yesterday, "ytd"));
        assert!(Keywords::matches(Keyword::Yesterday, "ayer"));
    }

    #[test]
    fn parse_file_no_accepts_canonical_synonyms() {
        let toml = r#"
            log_dir = "/tmp/my-worklog"

            [synonyms]
            today = "yesterday"
            ytd = "yesterday"
        "#;

        let fc = super::Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());

        super::Config::load_synonyms(&fc.synonyms);

        assert!(!Keywords::matches(Keyword::Yesterday, "today"));
        assert!(Keywords::matches(Keyword::Yesterday, "ytd"));
    }
}

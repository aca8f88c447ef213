//! The core `WorkLog` struct and its associated types, providing the primary API for interaction.

use crate::config::Config;
use crate::dates::get_dates_in_range;
use crate::entry::WorkLogEntry;
use crate::parse_date::DateFilter::{Range, Single};
use crate::parse_date::{ParseOptions, parse_date_token};
use crate::parse_entries::{RejectReason, find_header, parse_file_content};
use crate::paths::day_path;
use crate::summary::Summary;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The central struct for all work-log operations.
///
/// An instance of `WorkLog` holds the configuration and provides methods for
/// reading and aggregating the daily log files.
#[derive(Debug)]
pub struct WorkLog {
    pub config: Config,
}

/// One parsed log file. `date` is `None` when an explicit file's name does not
/// carry a recognizable date.
#[derive(Debug)]
pub struct DayLog {
    pub date: Option<NaiveDate>,
    pub path: PathBuf,
    pub entries: Vec<WorkLogEntry>,
}

impl DayLog {
    pub fn summary(&self) -> Summary {
        Summary::of(&self.entries)
    }
}

/// Represents a non-critical issue that occurred during a query.
///
/// This is used to report problems (e.g., rejected rows, unreadable files)
/// without stopping a larger query operation.
#[derive(Debug)]
pub enum QueryError {
    InvalidDate {
        input: String,
        error: String,
    },
    FileError {
        path: PathBuf,
        error: anyhow::Error,
    },
    /// The file carries none of the required column titles and was skipped.
    MissingHeader {
        path: PathBuf,
    },
    /// A row failed validation; the rest of the file was still parsed.
    RejectedRow {
        path: PathBuf,
        line_no: usize,
        line: String,
        reason: RejectReason,
    },
}

/// The complete result of a query, containing parsed days and any warnings.
#[derive(Debug)]
pub struct QueryResult {
    pub days: Vec<DayLog>,
    pub errors: Vec<QueryError>,
}

impl QueryResult {
    /// All accepted entries across the queried days, in input order.
    pub fn entries(&self) -> impl Iterator<Item = &WorkLogEntry> {
        self.days.iter().flat_map(|day| day.entries.iter())
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.entries())
    }
}

impl WorkLog {
    /// Creates a new `WorkLog` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `WorkLog` instance with a specific `Config`.
    ///
    /// This also ensures that the log's root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("creating {}", config.log_dir.display()))?;
        Ok(Self { config })
    }

    /// Reads all entries for a date or date range.
    ///
    /// This is the primary query function. It is designed to be resilient,
    /// returning a [`QueryResult`] that carries both parsed days and any
    /// warnings that occurred; a row or file that fails validation never
    /// aborts the query.
    ///
    /// # Arguments
    ///
    /// * `start_date` - A string that can be parsed into a date (e.g.,
    ///   "yesterday", "08-05-2026", "last week").
    /// * `end_date` - Optional closing date; with it the query covers the
    ///   inclusive range.
    /// * `reference_date` - Optional anchor for relative tokens (yesterday,
    ///   last week...).
    pub fn read_entries(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        reference_date: Option<NaiveDate>,
    ) -> QueryResult {
        let mut result = QueryResult {
            days: Vec::new(),
            errors: Vec::new(),
        };
        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();
        let opts = ParseOptions {
            reference_date,
            formats: Some(&format_strs),
        };

        match parse_date_token(start_date, end_date, Some(opts)) {
            Some(Single(date)) => self.read_day(date, &mut result),
            Some(Range(start, end)) => {
                for date in get_dates_in_range(start, end) {
                    self.read_day(date, &mut result);
                }
            }
            None => result.errors.push(QueryError::InvalidDate {
                input: start_date.to_string(),
                error: "Not a valid date or keyword.".to_string(),
            }),
        }
        result
    }

    /// Reads an explicit list of log files, in the given order.
    ///
    /// Unlike [`read_entries`](Self::read_entries), a path that does not exist
    /// is reported as a `FileError` rather than skipped: the caller named the
    /// file and should hear about the miss. The day's date is recovered from
    /// the file name when it carries one.
    pub fn read_files(&self, paths: &[PathBuf]) -> QueryResult {
        let mut result = QueryResult {
            days: Vec::new(),
            errors: Vec::new(),
        };
        for path in paths {
            if !path.exists() {
                result.errors.push(QueryError::FileError {
                    path: path.clone(),
                    error: anyhow::anyhow!("file not found"),
                });
                continue;
            }
            let date = self.date_from_file_name(path);
            self.read_file(path, date, &mut result);
        }
        result
    }

    /// Reads the day file for `date` from the log directory, if it exists.
    /// A day without a file is a day without entries, not an error.
    fn read_day(&self, date: NaiveDate, result: &mut QueryResult) {
        let path = day_path(&self.config.log_dir, date);
        if path.exists() {
            self.read_file(&path, Some(date), result);
        }
    }

    fn read_file(&self, path: &Path, date: Option<NaiveDate>, result: &mut QueryResult) {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                result.errors.push(QueryError::FileError {
                    path: path.to_path_buf(),
                    error: error.into(),
                });
                return;
            }
        };

        if find_header(&content).is_none() {
            warn!(path = %path.display(), "missing required column header, file skipped");
            result.errors.push(QueryError::MissingHeader {
                path: path.to_path_buf(),
            });
            return;
        }

        let parsed = parse_file_content(&content);
        debug!(
            path = %path.display(),
            entries = parsed.entries.len(),
            rejects = parsed.rejects.len(),
            "parsed day file"
        );
        for reject in parsed.rejects {
            result.errors.push(QueryError::RejectedRow {
                path: path.to_path_buf(),
                line_no: reject.line_no,
                line: reject.line,
                reason: reject.reason,
            });
        }
        result.days.push(DayLog {
            date,
            path: path.to_path_buf(),
            entries: parsed.entries,
        });
    }

    /// Recovers a date from a file name, trying the exact stem first and then
    /// any date-shaped token inside it (exports often decorate the name, e.g.
    /// `recap_08-05-2026_final.txt`).
    fn date_from_file_name(&self, path: &Path) -> Option<NaiveDate> {
        static DATE_TOKEN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\d{1,4}[-/]\d{1,2}[-/]\d{1,4}").unwrap());

        let stem = path.file_stem()?.to_str()?;
        for format in &self.config.input_date_formats {
            if let Ok(date) = NaiveDate::parse_from_str(stem, format) {
                return Some(date);
            }
        }
        let token = DATE_TOKEN.find(stem)?;
        for format in &self.config.input_date_formats {
            if let Ok(date) = NaiveDate::parse_from_str(token.as_str(), format) {
                return Some(date);
            }
        }
        None
    }
}

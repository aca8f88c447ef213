//! Parses the content of a tab-delimited work-log file into validated `WorkLogEntry` rows.
use crate::entry::WorkLogEntry;
use std::collections::HashSet;
use strum_macros::AsRefStr;

/// Column titles a header line must carry, in file order.
pub const HEADER_COLUMNS: [&str; 7] = [
    "Number",
    "Daily Work Description",
    "Hr",
    "Min",
    "Complete",
    "Follow up",
    "Supervisor Comments",
];

/// Why a row was refused. Validation stops at the first failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum RejectReason {
    /// The row does not split into exactly 7 tab-separated fields.
    MalformedRow,
    /// The first field is not a positive integer.
    InvalidNumber,
    /// Hours or minutes are not integers, or minutes fall outside 0-59.
    InvalidDuration,
    /// The completion field is not a yes/no token.
    InvalidCompletionFlag,
    /// The description field is empty after trimming.
    EmptyDescription,
    /// The task number already appeared earlier in the same file.
    DuplicateNumber,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::MalformedRow => "expected 7 tab-separated fields",
            RejectReason::InvalidNumber => "the task number must be a positive integer",
            RejectReason::InvalidDuration => {
                "hours must be an integer and minutes an integer between 0 and 59"
            }
            RejectReason::InvalidCompletionFlag => "the completion flag must be `yes` or `no`",
            RejectReason::EmptyDescription => "the work description is empty",
            RejectReason::DuplicateNumber => "the task number already appeared in this file",
        }
    }
}

/// A row that failed validation, with its 1-based line number in the parsed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line_no: usize,
    pub line: String,
    pub reason: RejectReason,
}

#[derive(Debug, Default)]
pub struct ParseResult {
    pub entries: Vec<WorkLogEntry>,
    pub rejects: Vec<Rejection>,
}

/// Returns the index of the first line carrying every required column title.
///
/// Exported files sometimes put recap rows (date, name, department) above the
/// column row, so the whole content is scanned rather than just line one.
pub fn find_header(content: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| HEADER_COLUMNS.iter().all(|col| line.contains(col)))
}

/// Parses a single data row.
///
/// Blank lines separate groups of records; they produce `None` rather than an
/// entry or a rejection. Every field is trimmed before validation, so trailing
/// whitespace never fails a row.
///
/// # Examples
///
/// ```
/// # use wlog_core::parse_entries::parse_line;
/// let entry = parse_line("5\tChecked batch insert status\t0\t50\tyes\tSchedule alert\tImportant check")
///     .unwrap()
///     .unwrap();
/// assert_eq!(entry.number, 5);
/// assert_eq!(entry.hours, 0);
/// assert_eq!(entry.minutes, 50);
/// assert!(entry.complete);
/// ```
pub fn parse_line(line: &str) -> Option<Result<WorkLogEntry, RejectReason>> {
    if line.trim().is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    // A surplus field shifts every column after it; short and long rows both
    // reject whole, never partially parse.
    if fields.len() != 7 {
        return Some(Err(RejectReason::MalformedRow));
    }

    let number = match fields[0].parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => return Some(Err(RejectReason::InvalidNumber)),
    };
    if fields[1].is_empty() {
        return Some(Err(RejectReason::EmptyDescription));
    }
    let hours = match fields[2].parse::<u32>() {
        Ok(h) => h,
        Err(_) => return Some(Err(RejectReason::InvalidDuration)),
    };
    let minutes = match fields[3].parse::<u32>() {
        Ok(m) if m <= 59 => m,
        _ => return Some(Err(RejectReason::InvalidDuration)),
    };
    let complete = match fields[4].to_ascii_lowercase().as_str() {
        "yes" => true,
        "no" => false,
        _ => return Some(Err(RejectReason::InvalidCompletionFlag)),
    };

    Some(Ok(WorkLogEntry {
        number,
        description: fields[1].to_string(),
        hours,
        minutes,
        complete,
        follow_up: fields[5].to_string(),
        supervisor_comment: fields[6].to_string(),
    }))
}

/// Parses a whole file's content into accepted entries and ordered rejections.
///
/// Lines up to and including the header are skipped; when no line carries the
/// required columns the first line is treated as the header. Task numbers must
/// be unique within one file: a repeat rejects the later row. This function
/// never fails; every problem lands in `rejects` and parsing continues.
pub fn parse_file_content(content: &str) -> ParseResult {
    let mut entries = Vec::new();
    let mut rejects = Vec::new();
    let mut seen = HashSet::new();

    let header_idx = find_header(content).unwrap_or(0);
    for (idx, line) in content.lines().enumerate() {
        if idx <= header_idx {
            continue;
        }
        let Some(row) = parse_line(line) else {
            continue;
        };
        match row {
            Ok(entry) => {
                if seen.insert(entry.number) {
                    entries.push(entry);
                } else {
                    rejects.push(Rejection {
                        line_no: idx + 1,
                        line: line.to_string(),
                        reason: RejectReason::DuplicateNumber,
                    });
                }
            }
            Err(reason) => rejects.push(Rejection {
                line_no: idx + 1,
                line: line.to_string(),
                reason,
            }),
        }
    }
    ParseResult { entries, rejects }
}

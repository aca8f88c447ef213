use super::theme::Gruvbox;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};
use wlog_core::{DayLog, QueryResult, Summary, WorkLogEntry};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Gruvbox::default_gruvbox_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%m-%d-%Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One line per entry: number, time spent, status, description.
    pub fn print_entry_line(&self, entry: &WorkLogEntry) {
        let mut number = format!("#{}", entry.number);
        let mut time = format!("{}:{:02}", entry.hours, entry.minutes);
        let mut status = if entry.complete { "done" } else { "open" }.to_string();
        if self.opts.use_color {
            number = number.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            status = if entry.complete {
                status.with(Gruvbox::GREEN).to_string()
            } else {
                status.with(Gruvbox::RED).to_string()
            };
        }
        println!("{} {} {} {}", number, time, status, entry.description);
    }

    pub fn print_day(&self, day: &DayLog) {
        let summary = day.summary();
        let (hours, minutes) = summary.clock();
        let label = self.day_label(day);
        let heading = format!(
            "## {} ({} tasks, {}:{:02})",
            label, summary.tasks, hours, minutes
        );
        self.print_md(&heading);

        for entry in &day.entries {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }
            let status = if entry.complete { "done" } else { "open" };
            let mut md = format!(
                "**{}. {}** ({}:{:02}, {})\n",
                entry.number, entry.description, entry.hours, entry.minutes, status
            );
            if !entry.follow_up.is_empty() {
                md.push_str(&format!("* Follow up: {}\n", entry.follow_up));
            }
            if !entry.supervisor_comment.is_empty() {
                md.push_str(&format!("* Supervisor: {}\n", entry.supervisor_comment));
            }
            self.print_md(&md);
        }
    }

    pub fn print_days(&self, result: &QueryResult) {
        for day in &result.days {
            if day.entries.is_empty() {
                continue;
            }
            self.print_day(day);
        }
    }

    /// Per-day totals plus a grand total, the way the recap workbook's Total
    /// sheet lays them out. The cost column only appears when a rate is known.
    pub fn print_summary(&self, result: &QueryResult, rate: Option<f64>) {
        let mut md = String::from("\n");
        if rate.is_some() {
            md.push_str("|:-|-:|-:|-:|-:|\n");
            md.push_str("|**Date**|**Tasks**|**Done**|**Hours**|**Cost**|\n");
        } else {
            md.push_str("|:-|-:|-:|-:|\n");
            md.push_str("|**Date**|**Tasks**|**Done**|**Hours**|\n");
        }
        md.push_str("|-|\n");
        for day in &result.days {
            if day.entries.is_empty() {
                continue;
            }
            let summary = day.summary();
            md.push_str(&self.summary_row(&self.day_label(day), &summary, rate));
        }
        md.push_str("|-|\n");
        let total = result.summary();
        md.push_str(&self.summary_row("**Total**", &total, rate));
        md.push_str("|-|\n");
        self.print_md(&md);
    }

    fn summary_row(&self, label: &str, summary: &Summary, rate: Option<f64>) -> String {
        match rate {
            Some(rate) => format!(
                "|{}|{}|{}|{:.2}|{:.2}|\n",
                label,
                summary.tasks,
                summary.completed,
                summary.total_hours(),
                summary.cost(rate)
            ),
            None => format!(
                "|{}|{}|{}|{:.2}|\n",
                label,
                summary.tasks,
                summary.completed,
                summary.total_hours()
            ),
        }
    }

    fn day_label(&self, day: &DayLog) -> String {
        match day.date {
            Some(date) => date.format(&self.opts.date_format).to_string(),
            None => day.path.display().to_string(),
        }
    }
}

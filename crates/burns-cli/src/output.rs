//! Output formatting for the CLI.

use crate::chart;
use crate::config::OutputFormat;
use crate::error::Result;
use burns_domain::{
    Rating, SessionRecord, SeverityBand, Submission, TrendPoint, TrendSummary, QUESTIONS,
};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a submitted checklist.
    pub fn format_submission(&self, submission: &Submission) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": submission.id.value(),
                "score": submission.score.value(),
                "depression_level": submission.band.label(),
            }))?),
            OutputFormat::Table => Ok(format!(
                "Your total score is: {}\nDepression Level: {}",
                submission.score,
                self.band(submission.band)
            )),
            OutputFormat::Quiet => Ok(submission.score.to_string()),
        }
    }

    /// Format stored sessions.
    pub fn format_sessions(&self, sessions: &[SessionRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_sessions_json(sessions),
            OutputFormat::Table => Ok(self.format_sessions_table(sessions)),
            OutputFormat::Quiet => Ok(sessions
                .iter()
                .map(|s| s.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format sessions as JSON.
    fn format_sessions_json(&self, sessions: &[SessionRecord]) -> Result<String> {
        let json_sessions: Vec<serde_json::Value> = sessions
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id.value(),
                    "score": s.score.value(),
                    "depression_level": s.band.label(),
                    "timestamp": s.recorded_at.to_string(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_sessions)?)
    }

    /// Format sessions as a table.
    fn format_sessions_table(&self, sessions: &[SessionRecord]) -> String {
        if sessions.is_empty() {
            return self.colorize("No sessions recorded yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Recorded At", "Score", "Depression Level"]);

        for session in sessions {
            builder.push_record([
                session.id.to_string(),
                session.recorded_at.to_string(),
                session.score.to_string(),
                session.band.label().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Footer for a history listing cut short by `--limit`; tables only.
    pub fn truncation_note(&self, shown: usize, total: usize) -> Option<String> {
        if self.format != OutputFormat::Table || shown >= total {
            return None;
        }
        Some(self.info(&format!("Showing {} of {} sessions", shown, total)))
    }

    /// Format a trend: chart and summary for tables, raw points otherwise.
    ///
    /// `points` are expected oldest first.
    pub fn format_trend(&self, points: &[TrendPoint], width: usize) -> Result<String> {
        let summary = TrendSummary::from_points(points);

        match self.format {
            OutputFormat::Json => {
                let json_points: Vec<serde_json::Value> = points
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "score": p.score.value(),
                            "timestamp": p.recorded_at.to_string(),
                        })
                    })
                    .collect();
                let json_summary = summary.map(|s| {
                    serde_json::json!({
                        "count": s.count,
                        "min": s.min.value(),
                        "max": s.max.value(),
                        "mean": s.mean,
                        "change": s.change(),
                        "latest_depression_level": s.latest_band().label(),
                    })
                });
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "points": json_points,
                    "summary": json_summary,
                }))?)
            }
            OutputFormat::Table => match summary {
                None => Ok(self.colorize("No sessions in this range.", "yellow")),
                Some(summary) => Ok(format!(
                    "{}\n\n{}",
                    chart::render(points, width),
                    self.trend_summary(&summary)
                )),
            },
            OutputFormat::Quiet => Ok(points
                .iter()
                .map(|p| format!("{}\t{}", p.recorded_at, p.score))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// One-paragraph summary under a trend chart.
    fn trend_summary(&self, summary: &TrendSummary) -> String {
        let change = match summary.change() {
            0 => "no change".to_string(),
            c if c < 0 => self.colorize(&format!("{} (improved)", c), "green"),
            c => self.colorize(&format!("+{} (worsened)", c), "red"),
        };
        format!(
            "Sessions: {}  Min: {}  Max: {}  Mean: {:.1}\nLatest: {} ({})  Change since first: {}",
            summary.count,
            summary.min,
            summary.max,
            summary.mean,
            summary.latest.score,
            self.band(summary.latest_band()),
            change
        )
    }

    /// Format the questionnaire and rating scale.
    pub fn format_questions(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "scale": Rating::ALL
                    .iter()
                    .map(|r| serde_json::json!({ "points": r.points(), "label": r.label() }))
                    .collect::<Vec<_>>(),
                "questions": QUESTIONS,
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => {
                let mut out = format!("{}\n\n", self.rating_scale());
                for (i, question) in QUESTIONS.iter().enumerate() {
                    out.push_str(&format!("{:>2}. {}\n", i + 1, question));
                }
                Ok(out.trim_end().to_string())
            }
        }
    }

    /// The rating scale as a single line.
    pub fn rating_scale(&self) -> String {
        let scale: Vec<String> = Rating::ALL.iter().map(ToString::to_string).collect();
        format!("Rating Scale: {}", scale.join(", "))
    }

    /// Colorize a severity band label.
    pub fn band(&self, band: SeverityBand) -> String {
        let color = match band {
            SeverityBand::NoDepression => "green",
            SeverityBand::NormalButUnhappy => "cyan",
            SeverityBand::Mild => "yellow",
            SeverityBand::Moderate => "magenta",
            SeverityBand::Severe | SeverityBand::Extreme => "red",
        };
        self.colorize(band.label(), color)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

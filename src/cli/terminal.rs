//! Terminal styling for hospital output

use hospital::Report;
use owo_colors::{OwoColorize, colors::css};

/// Detects whether coloured output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// How a line of output should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A new booking
    Success,
    /// A change to an existing booking
    Warning,
    /// A clinical note
    Info,
}

impl Tone {
    /// The tone a report is shown in.
    pub const fn of(report: &Report) -> Self {
        match report {
            Report::Scheduled { .. } => Self::Success,
            Report::Rescheduled { .. } | Report::Cancelled { .. } => Self::Warning,
            Report::Diagnosed { .. } | Report::Checked { .. } | Report::StatusUpdated { .. } => {
                Self::Info
            }
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.success(),
            Self::Warning => text.warning(),
            Self::Info => text.info(),
        }
    }
}

/// Renders a report in the colour of its [`Tone`].
pub fn report(report: &Report) -> String {
    Tone::of(report).paint(&report.to_string())
}

/// A dimmed section heading with the number of records beneath it.
pub fn heading(title: &str, count: usize) -> String {
    format!("{title} ({count})").dim()
}

/// Extension trait for colourising output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn info(&self) -> String {
        if supports_color() {
            self.fg::<css::LightBlue>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use hospital::PersonId;

    use super::*;

    #[test]
    fn bookings_changes_and_clinical_notes_have_distinct_tones() {
        let scheduled = Report::Scheduled {
            appointment: 4001,
            patient: PersonId::new(1),
            doctor: PersonId::new(2),
            date_time: "noon".to_string(),
        };
        let rescheduled = Report::Rescheduled {
            appointment: 4001,
            date_time: "dusk".to_string(),
        };
        let cancelled = Report::Cancelled { appointment: 4001 };
        let checked = Report::Checked {
            nurse: PersonId::new(3),
            patient: PersonId::new(1),
        };

        assert_eq!(Tone::of(&scheduled), Tone::Success);
        assert_eq!(Tone::of(&rescheduled), Tone::Warning);
        assert_eq!(Tone::of(&cancelled), Tone::Warning);
        assert_eq!(Tone::of(&checked), Tone::Info);
    }

    #[test]
    fn styled_report_keeps_its_text() {
        let report = Report::Cancelled { appointment: 4001 };
        assert!(super::report(&report).contains("Cancelled appointment #4001"));
    }
}

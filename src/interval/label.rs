use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interval::types::{BucketKey, Granularity};
use crate::shared::datetime::{Calendar, Instant};

/// Label for totals and anything without a calendar anchor.
pub const NOT_APPLICABLE: &str = "n/a";

/// Line-break convention of an output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Single line, ` - ` between heading and detail.
    #[default]
    Plain,
    /// Browser output, `<br />` markup.
    Markup,
    /// Plain-text output, literal CR/LF.
    Newline,
}

impl LabelStyle {
    pub fn separator(&self) -> &'static str {
        match self {
            LabelStyle::Plain => " - ",
            LabelStyle::Markup => " <br />",
            LabelStyle::Newline => " \r\n",
        }
    }
}

impl FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(LabelStyle::Plain),
            "markup" | "br" => Ok(LabelStyle::Markup),
            "newline" | "nobr" => Ok(LabelStyle::Newline),
            other => Err(format!("Unknown label style: {other}")),
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LabelStyle::Plain => "plain",
            LabelStyle::Markup => "markup",
            LabelStyle::Newline => "newline",
        };
        f.write_str(name)
    }
}

/// Human-readable bucket name: a heading, plus a date-range line for weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub heading: String,
    pub detail: Option<String>,
}

impl Label {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            detail: None,
        }
    }

    /// Compute the label of a merged entry. Weeks use the merged span for the
    /// date-range line; every other granularity only looks at the key.
    pub fn compute(
        cal: &dyn Calendar,
        granularity: Granularity,
        key: &BucketKey,
        span_start: Instant,
        span_end: Instant,
    ) -> Self {
        let Some(at) = key.instant() else {
            return Self::new(NOT_APPLICABLE);
        };
        match granularity {
            Granularity::Hour => Self::new(cal.format_datetime(at, "%H:%M")),
            Granularity::Day => Self::new(cal.format_datetime(at, "%a %d")),
            Granularity::Week => Self {
                heading: format!(
                    "Week {:02} {}",
                    cal.iso_week_number(at),
                    cal.format_datetime(at, "%Y")
                ),
                detail: Some(format!(
                    "{} - {}",
                    cal.format_datetime(span_start, "%d/%m"),
                    cal.format_datetime(span_end, "%d/%m")
                )),
            },
            Granularity::Month => Self::new(cal.format_datetime(at, "%B %Y")),
            Granularity::Year => Self::new(cal.format_datetime(at, "%Y")),
            Granularity::Total => Self::new(NOT_APPLICABLE),
        }
    }

    pub fn render(&self, style: LabelStyle) -> String {
        match &self.detail {
            Some(detail) => format!("{}{}{}", self.heading, style.separator(), detail),
            None => self.heading.clone(),
        }
    }
}

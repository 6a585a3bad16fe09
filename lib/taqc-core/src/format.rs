//! Value formatting shared by the reflective converter and generated code.
//!
//! Generated `ToQueryParams` implementations call these functions directly,
//! so both conversion paths always produce the same strings.

use std::fmt::Write;

use chrono::{DateTime, TimeZone, Utc};
use tracing::warn;

use crate::{Error, Result, Tag, UnixTimeUnit};

/// Value emitted for a `true` boolean.
pub const TRUE: &str = "1";

/// Format a string value (verbatim).
#[must_use]
pub fn string<S: AsRef<str> + ?Sized>(value: &S) -> String {
    value.as_ref().to_string()
}

/// Format a 64-bit integer in decimal.
#[must_use]
pub fn int64(value: i64) -> String {
    value.to_string()
}

/// Format a 64-bit float in fixed notation with six decimals.
///
/// Non-finite values render as `NaN`, `+Inf` and `-Inf`.
#[must_use]
pub fn float64(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value.is_sign_positive() { '+' } else { '-' };
        format!("{sign}Inf")
    } else {
        format!("{value:.6}")
    }
}

/// Format a timestamp as an epoch count in the given unit.
#[must_use]
pub fn unix_time<Tz: TimeZone>(value: &DateTime<Tz>, unit: UnixTimeUnit) -> String {
    match unit {
        UnixTimeUnit::Sec => value.timestamp().to_string(),
        UnixTimeUnit::Millisec => value.timestamp_millis().to_string(),
        UnixTimeUnit::Microsec => value.timestamp_micros().to_string(),
        UnixTimeUnit::Nanosec => {
            let nanos = i128::from(value.timestamp()) * 1_000_000_000
                + i128::from(value.timestamp_subsec_nanos());
            nanos.to_string()
        }
    }
}

/// Format a timestamp with a `strftime` layout.
///
/// The layout must have been accepted by [`check_time_layout`]. A layout
/// that cannot be formatted yields an empty string and a warning.
#[must_use]
pub fn time_layout<Tz>(value: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    try_time_layout(value, layout).unwrap_or_else(|err| {
        warn!(layout, %err, "time layout cannot be formatted");
        String::new()
    })
}

fn try_time_layout<Tz>(value: &DateTime<Tz>, layout: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", value.format(layout)).map_err(|_| Error::invalid_time_layout(layout))?;
    Ok(out)
}

/// Ensure `layout` is a `strftime` pattern that can be formatted.
///
/// Unknown specifiers are rejected, and so are parse-only ones like `%#z`.
pub fn check_time_layout(layout: &str) -> Result<()> {
    try_time_layout(&DateTime::<Utc>::UNIX_EPOCH.fixed_offset(), layout).map(|_| ())
}

/// How a field's timestamps are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// Calendar formatting with a `strftime` layout.
    Layout(String),
    /// Epoch count in the given unit.
    Unix(UnixTimeUnit),
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::Unix(UnixTimeUnit::Sec)
    }
}

impl TimeFormat {
    /// Resolve the time format declared by a tag.
    ///
    /// `timeLayout` takes priority over `unixTimeUnit`; a present unit is
    /// validated in any case.
    pub fn resolve(tag: &Tag) -> Result<Self> {
        let unit = tag
            .unix_time_unit()
            .map(str::parse::<UnixTimeUnit>)
            .transpose()?;

        if let Some(layout) = tag.time_layout() {
            check_time_layout(layout)?;
            return Ok(Self::Layout(layout.to_string()));
        }
        Ok(unit.map_or_else(Self::default, Self::Unix))
    }

    /// Format a timestamp.
    #[must_use]
    pub fn format<Tz>(&self, value: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            Self::Layout(layout) => time_layout(value, layout),
            Self::Unix(unit) => unix_time(value, *unit),
        }
    }
}

//! Parsing of `taqc` field tags.
//!
//! A tag has the shape `key[, option=value]*`:
//!
//! ```text
//! #[taqc("created_at, unixTimeUnit=millisec")]
//! #[taqc("day, timeLayout=%Y-%m-%d")]
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Name of the attribute carrying a tag.
pub const TAG_NAME: &str = "taqc";

const TIME_LAYOUT_OPTION: &str = "timeLayout=";
const UNIX_TIME_UNIT_OPTION: &str = "unixTimeUnit=";

/// Granularity of a numeric (epoch based) timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnixTimeUnit {
    /// Seconds since the epoch (default).
    #[default]
    Sec,
    /// Milliseconds since the epoch.
    Millisec,
    /// Microseconds since the epoch.
    Microsec,
    /// Nanoseconds since the epoch.
    Nanosec,
}

impl UnixTimeUnit {
    /// All supported units.
    pub const ALL: [Self; 4] = [Self::Sec, Self::Millisec, Self::Microsec, Self::Nanosec];

    /// The tag spelling of this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sec => "sec",
            Self::Millisec => "millisec",
            Self::Microsec => "microsec",
            Self::Nanosec => "nanosec",
        }
    }
}

impl fmt::Display for UnixTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnixTimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| Error::unsupported_unix_time_unit(s))
    }
}

/// A parsed `taqc` tag.
///
/// The unix time unit is kept as written; it is validated when the time
/// format gets resolved (see [`crate::TimeFormat::resolve`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    key: String,
    time_layout: Option<String>,
    unix_time_unit: Option<String>,
}

impl Tag {
    /// Parse a raw tag string.
    ///
    /// The first comma-separated segment is the key; the remaining segments
    /// are scanned for `timeLayout=` and `unixTimeUnit=`. Unknown segments are
    /// ignored, and a repeated option keeps its last value.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = raw.split(',');
        let key = segments.next().unwrap_or_default().trim();
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut time_layout = None;
        let mut unix_time_unit = None;
        for segment in segments.map(str::trim) {
            if let Some(layout) = option_value(segment, TIME_LAYOUT_OPTION) {
                time_layout = Some(layout.to_string());
            } else if let Some(unit) = option_value(segment, UNIX_TIME_UNIT_OPTION) {
                unix_time_unit = Some(unit.to_string());
            }
        }

        Ok(Self {
            key: key.to_string(),
            time_layout,
            unix_time_unit,
        })
    }

    /// The query parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The `timeLayout` option, if any.
    #[must_use]
    pub fn time_layout(&self) -> Option<&str> {
        self.time_layout.as_deref()
    }

    /// The raw `unixTimeUnit` option, if any.
    #[must_use]
    pub fn unix_time_unit(&self) -> Option<&str> {
        self.unix_time_unit.as_deref()
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Value of `option` in `segment`, only when non-empty.
fn option_value<'a>(segment: &'a str, option: &str) -> Option<&'a str> {
    segment
        .strip_prefix(option)
        .filter(|value| !value.is_empty())
}

//! File lifetimes and expiration times.
//!
//! A [`FileLifetime`] is relative ("how long may an upload live"), an
//! [`ExpirationTime`] is absolute ("when does it stop being served").
//! Both carry their sentinel as a dedicated variant.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Days in a presentation year.
pub const DAYS_PER_YEAR: u32 = 365;

/// Longest finite lifetime that may be configured: 100 presentation years.
pub const MAX_LIFETIME_DAYS: u32 = 100 * DAYS_PER_YEAR;

/// How long an upload may live from the moment it is created.
///
/// Ordering is total: finite lifetimes compare by day count and
/// [`FileLifetime::Infinite`] sorts after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileLifetime {
    /// A whole number of days.
    Days(u32),
    /// The upload never expires.
    Infinite,
}

impl FileLifetime {
    /// The "never expires" lifetime.
    pub const INFINITE: Self = Self::Infinite;

    /// A lifetime of `days` days.
    pub const fn from_days(days: u32) -> Self {
        Self::Days(days)
    }

    /// A lifetime of `years` presentation years (365 days each).
    pub const fn from_years(years: u32) -> Self {
        Self::Days(years.saturating_mul(DAYS_PER_YEAR))
    }

    /// Day count, or `None` for an infinite lifetime.
    pub fn days(&self) -> Option<u32> {
        match self {
            Self::Days(days) => Some(*days),
            Self::Infinite => None,
        }
    }

    /// Whether this is the infinite lifetime.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Whether a finite lifetime is longer than [`MAX_LIFETIME_DAYS`].
    pub fn exceeds_maximum(&self) -> bool {
        matches!(self, Self::Days(days) if *days > MAX_LIFETIME_DAYS)
    }

    /// Check that the lifetime can be configured as a default or a bound:
    /// at least one day and at most [`MAX_LIFETIME_DAYS`], or infinite.
    pub fn check_configurable(&self) -> Result<(), &'static str> {
        match self {
            Self::Days(0) => Err("lifetime must be at least one day"),
            _ if self.exceeds_maximum() => Err("lifetime must be at most 100 years"),
            _ => Ok(()),
        }
    }

    /// Whether the lifetime is a non-zero whole number of years.
    pub fn is_year_boundary(&self) -> bool {
        match self {
            Self::Days(days) => *days > 0 && days % DAYS_PER_YEAR == 0,
            Self::Infinite => false,
        }
    }

    /// Whole years, when the lifetime sits on a year boundary.
    pub fn years(&self) -> Option<u32> {
        if self.is_year_boundary() {
            self.days().map(|days| days / DAYS_PER_YEAR)
        } else {
            None
        }
    }

    /// Human-friendly label, e.g. `"7 days"`, `"1 year"`, `"Never"`.
    pub fn friendly_name(&self) -> String {
        match (self, self.years()) {
            (Self::Infinite, _) => "Never".to_string(),
            (_, Some(1)) => "1 year".to_string(),
            (_, Some(years)) => format!("{years} years"),
            (Self::Days(1), None) => "1 day".to_string(),
            (Self::Days(days), None) => format!("{days} days"),
        }
    }

    /// Derive the absolute expiration of an upload created at `now`.
    ///
    /// An infinite lifetime always yields [`ExpirationTime::Never`]. A
    /// finite lifetime always yields a finite instant; one too large for
    /// the calendar clamps to the latest representable time.
    pub fn expiration_from(&self, now: DateTime<Utc>) -> ExpirationTime {
        match self {
            Self::Infinite => ExpirationTime::Never,
            Self::Days(days) => ExpirationTime::At(
                now.checked_add_signed(Duration::days(i64::from(*days)))
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            ),
        }
    }
}

impl fmt::Display for FileLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.friendly_name())
    }
}

/// An absolute point at which an upload becomes inaccessible.
///
/// `At(_)` sorts before `Never`. Serialized as an RFC 3339 timestamp, or
/// the string `"never"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpirationTime {
    /// Expires at this instant.
    At(DateTime<Utc>),
    /// Never expires.
    Never,
}

impl ExpirationTime {
    /// Whether this is the "never expires" sentinel.
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// The concrete instant, if finite.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(*at),
            Self::Never => None,
        }
    }

    /// Whether the expiration is at or before `now`.
    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::At(at) => *at <= now,
            Self::Never => false,
        }
    }
}

impl From<Option<DateTime<Utc>>> for ExpirationTime {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map(Self::At).unwrap_or(Self::Never)
    }
}

impl From<ExpirationTime> for Option<DateTime<Utc>> {
    fn from(value: ExpirationTime) -> Self {
        value.as_datetime()
    }
}

impl fmt::Display for ExpirationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(at) => write!(f, "{}", at.to_rfc3339()),
            Self::Never => f.write_str("never"),
        }
    }
}

impl Serialize for ExpirationTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpirationTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("never") {
            return Ok(Self::Never);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| Self::At(at.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

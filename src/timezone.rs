//! Time-zone offset resolution.
//!
//! Resolution runs in two steps. The input is first looked up as a region,
//! in the host's zoneinfo database and then in the IANA data bundled with
//! `chrono-tz` for hosts that have none; if both miss, the input itself is
//! taken as a literal offset and passed through untouched. A misspelled
//! region therefore reaches the search engine as-is instead of failing here.

use chrono::{FixedOffset, Local, Offset, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZoneSpec {
    /// The offset of the running process.
    Local,
    /// A region name such as `America/Los_Angeles`, or a literal offset such
    /// as `-08:00`.
    Named(String),
}

/// Outcome of [`resolve`].
///
/// Offsets are captured for the instant of resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Local(FixedOffset),
    Region { name: String, offset: FixedOffset },
    /// Not found in any database; used verbatim.
    Literal(String),
}

impl Resolution {
    /// The offset string, e.g. `+09:00`.
    ///
    /// Literal resolutions return their input unchanged.
    pub fn offset(&self) -> String {
        match self {
            Resolution::Local(offset) | Resolution::Region { offset, .. } => {
                Utc::now().with_timezone(offset).format("%:z").to_string()
            }
            Resolution::Literal(s) => s.clone(),
        }
    }
}

/// Resolves a [`TimeZoneSpec`] against the time-zone database.
pub fn resolve(spec: &TimeZoneSpec) -> Resolution {
    match spec {
        TimeZoneSpec::Local => Resolution::Local(*Local::now().offset()),
        TimeZoneSpec::Named(name) => match lookup_region(name) {
            Some(resolution) => resolution,
            None => {
                debug!(name = %name, "time zone not in database, using it as a literal offset");
                Resolution::Literal(name.clone())
            }
        },
    }
}

/// Shorthand for `resolve(&TimeZoneSpec::Named(name)).offset()`.
pub fn resolve_offset(name: &str) -> String {
    resolve(&TimeZoneSpec::Named(name.to_string())).offset()
}

// An empty name and "UTC" both mean UTC; "Local" means the process zone.
fn lookup_region(name: &str) -> Option<Resolution> {
    let offset = match name {
        "" | "UTC" => Some(Utc.fix()),
        "Local" => return Some(Resolution::Local(*Local::now().offset())),
        _ => host_offset(name).or_else(|| bundled_offset(name)),
    }?;

    Some(Resolution::Region {
        name: if name.is_empty() { "UTC".to_string() } else { name.to_string() },
        offset,
    })
}

fn host_offset(name: &str) -> Option<FixedOffset> {
    let tz = jiff::tz::TimeZone::get(name).ok()?;
    let seconds = jiff::Timestamp::now().to_zoned(tz).offset().seconds();
    FixedOffset::east_opt(seconds)
}

fn bundled_offset(name: &str) -> Option<FixedOffset> {
    let tz = name.parse::<Tz>().ok()?;
    debug!(name = %name, "time zone not in host database, using bundled data");
    Some(Utc::now().with_timezone(&tz).offset().fix())
}

//! Resolve a time zone the way the `time_zone` constructors do

use crate::timezone::{Resolution, TimeZoneSpec, resolve};

/// Returns the offset for `name` (or the local zone when `None`) together
/// with a short description of how it was resolved.
pub fn execute_tz(name: Option<&str>) -> String {
    let spec = match name {
        Some(n) => TimeZoneSpec::Named(n.to_string()),
        None => TimeZoneSpec::Local,
    };

    let resolution = resolve(&spec);
    let source = match &resolution {
        Resolution::Local(_) => "local".to_string(),
        Resolution::Region { name, .. } => format!("region {}", name),
        Resolution::Literal(_) => "literal".to_string(),
    };
    format!("{} ({})", resolution.offset(), source)
}

pub mod convert;
pub mod dsl;
pub mod fragment;
pub mod normalize;
pub mod output;
pub mod timezone;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use fragment::{Fragment, join, quote, when};
pub use normalize::{NormalizeError, compact, parse, pretty, try_compact, try_pretty};
pub use output::{to_json, to_json_pretty};
pub use timezone::{Resolution, TimeZoneSpec};
pub use value::Value;

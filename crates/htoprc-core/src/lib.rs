//! # htoprc-core
//!
//! Parser, serializer and customization scorer for **htoprc**, the line-oriented
//! `key=value` configuration file of the htop process monitor.
//!
//! The format is forgiving: there is no grammar error, only warnings. Unknown
//! options are kept verbatim so a file written by a newer htop survives a
//! parse → serialize round trip without losing anything.
//!
//! ## Quick start
//!
//! ```rust
//! use htoprc_core::{parse, serialize, MeterMode, SerializeOptions};
//!
//! let text = "column_meters_0=CPU Memory\ncolumn_meter_modes_0=1 2\ntree_view=1";
//! let result = parse(text);
//! assert_eq!(result.config.left_meters[1].mode, MeterMode::Text);
//! assert_eq!(result.score, 10);
//!
//! // Only what differs from stock htop:
//! let options = SerializeOptions { only_non_defaults: true, ..Default::default() };
//! let diff = serialize(&result.config, &options);
//! assert_eq!(
//!     diff,
//!     "tree_view=1\ncolumn_meters_0=CPU Memory\ncolumn_meter_modes_0=1 2\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: raw text → `(line, key, value)` entries
//! - [`classifier`]: key → option kind (scalar, screen, meter column, ...)
//! - [`coerce`]: raw value → bool / integer / lists
//! - [`parser`]: the scan loop and screen-context state machine
//! - [`meters`]: zips meter names with modes after the scan
//! - [`version`]: v2 / v3 / unknown detection
//! - [`scorer`]: customization score
//! - [`serializer`]: `Configuration` → htoprc text
//! - [`types`]: the configuration model
//! - [`error`]: warnings and the reserved parse error

pub mod classifier;
pub mod coerce;
pub mod error;
pub mod meters;
pub mod parser;
mod scalar;
pub mod scanner;
pub mod scorer;
pub mod serializer;
pub mod types;
pub mod version;

pub use classifier::{classify, Classification, OptionKind, ScalarKey};
pub use error::{ParseError, ParseWarning, WarningKind};
pub use parser::parse;
pub use scorer::{score, score_breakdown, ScoreRule};
pub use serializer::{serialize, SerializeOptions};
pub use types::{
    Configuration, HeaderLayout, Meter, MeterMode, ParseResult, RawMeterColumn, RawOptions,
    ScreenDefinition, SortDirection,
};
pub use version::FormatVersion;

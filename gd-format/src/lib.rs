//! # gd-format
//!
//! Parser for the delimiter-based text format returned by the Geometry Dash
//! servers. There is no official specification; the format below is what the
//! live service actually emits.
//!
//! ## Format Structure
//!
//! A response body is a flat list of positional fields. Entities are encoded
//! as alternating index/value pairs separated by a one-character delimiter
//! (usually `:`), lists of entities are separated by `|`, and browse
//! endpoints append a `#`-separated pagination trailer:
//!
//! ```text
//! 1:Alex:2:98006:13:149|1:RobTop:2:71:13:10#9999:0:10
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use gd_format::IndexedMap;
//!
//! let map = IndexedMap::parse("1:RobTop:2:16:13:149", ':')?;
//! assert_eq!(map.require(1)?, "RobTop");
//! assert_eq!(map.require_parsed::<u64>(2)?, 16);
//! # Ok::<(), gd_format::Error>(())
//! ```
//!
//! All parsing is defensive: malformed input yields an [`Error`] carrying the
//! offending fragment, never a panic.

pub mod error;
pub mod indexed;
pub mod page;

pub use error::{Error, Result};
pub use indexed::{IndexedMap, split_entities};
pub use page::PageInfo;

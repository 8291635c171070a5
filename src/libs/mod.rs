//! Core library modules for breaktime.
//!
//! ## Layers
//!
//! - **Data**: tolerant record decoding and dataset loading (`records`, `source`)
//! - **Engine**: duration normalization, formatting, aggregation, live status
//!   and pagination (`duration`, `formatter`, `report`, `status`, `pagination`)
//! - **Infrastructure**: configuration, data storage, messaging
//! - **Output**: console tables and file export (`view`, `export`)
//!
//! ```rust
//! use breaktime::libs::duration::parse_clock;
//! use breaktime::libs::formatter::format_duration;
//!
//! let seconds = parse_clock("1:01:01").unwrap_or(0);
//! assert_eq!(format_duration(seconds), "01:01:01");
//! ```

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod pagination;
pub mod records;
pub mod report;
pub mod source;
pub mod status;
pub mod view;

//! # Breaktime - employee break reporting
//!
//! Turns break data exported by a workforce backend into reports: per-employee
//! totals and averages, a live "who is on break" view, and paginated lists.
//!
//! ## Features
//!
//! - **Duration normalization**: seconds, minutes, `HH:MM:SS` or a start/end
//!   interval, resolved in a fixed order of precedence
//! - **Two report modes**: detailed records in `HH:MM:SS` and pre-aggregated
//!   rows in `Xh Ym`
//! - **Live status**: who is on break right now and for how long
//! - **Pagination**: page bars with first/last anchors and ellipses
//! - **Data export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use breaktime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;

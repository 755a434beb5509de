//! Fleet poller
//!
//! Drives one poll run: fetch every source in id order, reduce each
//! dataset, fold it into the fleet aggregate and build the report.
//!
//! # Modules
//! - `cli`: Command-line arguments
//! - `config`: Validated run configuration and client selection
//! - `driver`: The poll loop

pub mod cli;
pub mod config;
pub mod driver;

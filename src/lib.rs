pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::build_engine;
pub use app::export::{LocalStorage, ReportExporter};
pub use config::settings::{Overrides, Settings};
pub use core::engine::{SalaryEngine, SourceRun};
pub use utils::error::{Result, SalaryError};

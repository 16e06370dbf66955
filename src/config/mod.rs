//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the labour-time policy and any hand-authored holiday
//! tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Night window starts at {}:00", config.policy().night_start_hour);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, HolidayTableConfig, TimePolicy};

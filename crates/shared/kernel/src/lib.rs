//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the repository layout
//! and JSON file access.
//!
//! ## Config loading
//! ```rust,no_run
//! use rescs_kernel::config::load_nexus_settings;
//!
//! let settings = load_nexus_settings(None::<&str>).unwrap();
//! println!("{}", settings.org);
//! ```
pub mod config;
pub mod files;
mod workspace;

pub use rescs_domain as domain;
pub use workspace::Workspace;

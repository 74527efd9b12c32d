//! # Composite views
//!
//! Assembles composite view documents from `compositeviews/` and registers
//! them on Nexus: a view already stored is updated at its current `_rev`,
//! an unknown view is created.

mod error;
pub mod register;
pub mod source;

pub use crate::error::{Result, ViewsError, ViewsErrorExt};
pub use crate::register::{Action, Outcome, Registration, Target, register, register_or_update};
pub use crate::source::CompositeViewSource;

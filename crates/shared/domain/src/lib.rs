//! # Domain Models
//!
//! Pure data shared by every crate of the build tools: vocabulary IRIs, the
//! fixed JSON-LD output context, file-layout constants and configuration models.
//! Keep it lean: no I/O, networking, or heavy logic.

pub mod config;
pub mod constants;
pub mod context;
pub mod vocab;

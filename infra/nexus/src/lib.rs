//! # Nexus
//!
//! Client for the three views endpoints the registration step needs:
//!
//! * `GET  {nexus}/views/{org}/{project}/{id}`
//! * `POST {nexus}/views/{org}/{project}`
//! * `PUT  {nexus}/views/{org}/{project}/{resource-iri}?rev={rev}`
//!
//! Every request carries the bearer token. Create and update hand back the
//! service's answer whatever its status; nothing is retried.

mod client;
mod error;

pub use crate::client::{NexusClient, NexusResponse, form_encode};
pub use crate::error::{NexusError, NexusErrorExt, Result};
pub use reqwest::StatusCode;

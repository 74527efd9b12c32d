//! Creating or updating composite views on Nexus.

use crate::error::{Result, ViewsError};
use crate::source::CompositeViewSource;
use rescs_kernel::Workspace;
use rescs_nexus::{NexusClient, NexusResponse};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
        })
    }
}

/// Where assembled views go.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Assemble only.
    DryRun,
    Nexus(&'a NexusClient),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    DryRun(Value),
    Uploaded { action: Action, response: NexusResponse },
}

/// Result for one named view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub outcome: Outcome,
}

/// `_rev` of a stored view, as an integer, an integral float or a numeric string.
///
/// # Errors
/// [`ViewsError::MissingRevision`] when absent or not a non-negative integer.
pub fn revision(stored: &Value, id: &str) -> Result<u64> {
    let rev = match stored.get("_rev") {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    rev.ok_or_else(|| ViewsError::MissingRevision { id: id.to_owned(), context: None })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral(rev: f64) -> Option<u64> {
    // 2^64, the first float above u64::MAX
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    (rev.fract() == 0.0 && (0.0..LIMIT).contains(&rev)).then_some(rev as u64)
}

/// Updates the view when Nexus already has it, creates it otherwise.
///
/// A rejected create or update is returned, not raised.
///
/// # Errors
/// [`ViewsError::InvalidView`] without an `@id`, [`ViewsError::MissingRevision`],
/// or any transport error.
pub async fn register_or_update(client: &NexusClient, view: &Value) -> Result<(Action, NexusResponse)> {
    let Some(id) = view.get("@id").and_then(Value::as_str) else {
        return Err(ViewsError::InvalidView { message: "composite view has no @id".into(), context: None });
    };

    match client.fetch_view(id).await? {
        Some(stored) => {
            let rev = revision(&stored, id)?;
            debug!(id, rev, "View exists");
            let response = client.update_view(id, rev, view).await?;
            Ok((Action::Updated, response))
        },
        None => {
            debug!(id, "View does not exist");
            let response = client.create_view(view).await?;
            Ok((Action::Created, response))
        },
    }
}

/// Assembles every named view in order and sends it to `target`.
///
/// Stops at the first error; views handled before it stay registered.
///
/// # Errors
/// See [`CompositeViewSource::assemble`] and [`register_or_update`].
pub async fn register(workspace: &Workspace, names: &[String], target: Target<'_>) -> Result<Vec<Registration>> {
    let views_dir = workspace.composite_views_dir();
    let mut registrations = Vec::with_capacity(names.len());

    for name in names {
        let view = CompositeViewSource::new(&views_dir, name.as_str()).assemble()?;
        let outcome = match target {
            Target::DryRun => Outcome::DryRun(view),
            Target::Nexus(client) => {
                let (action, response) = register_or_update(client, &view).await?;
                info!(view = %name, %action, status = response.status.as_u16(), "Registered composite view");
                Outcome::Uploaded { action, response }
            },
        };
        registrations.push(Registration { name: name.clone(), outcome });
    }
    Ok(registrations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn revision_accepts_integers_and_numeric_strings() {
        assert_eq!(revision(&json!({ "_rev": 4 }), "v").unwrap(), 4);
        assert_eq!(revision(&json!({ "_rev": "12" }), "v").unwrap(), 12);
    }

    #[test]
    fn revision_accepts_integral_floats() {
        assert_eq!(revision(&json!({ "_rev": 3.0 }), "v").unwrap(), 3);
        for rev in [json!(3.5), json!(-2.0), json!(1e20)] {
            assert!(revision(&json!({ "_rev": rev }), "v").is_err(), "{rev}");
        }
    }

    #[test]
    fn revision_rejects_missing_or_malformed_values() {
        for stored in [json!({}), json!({ "_rev": "four" }), json!({ "_rev": -1 }), json!({ "_rev": null })] {
            let err = revision(&stored, "view").unwrap_err();
            assert!(matches!(err, ViewsError::MissingRevision { ref id, .. } if id == "view"));
        }
    }
}

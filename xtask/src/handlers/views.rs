use anyhow::{Context, Result};
use rescs_kernel::Workspace;
use rescs_kernel::config::load_nexus_settings;
use rescs_nexus::NexusClient;
use rescs_views::{Outcome, Target};
use std::path::Path;

/// Registers the named composite views, or prints them with `dry_run`.
///
/// Nexus settings are only loaded when uploading.
///
/// # Errors
/// Returns an error on invalid settings, unreadable views, a missing `_rev`
/// or a transport failure. Rejected uploads are printed, not raised.
pub fn register(workspace: &Workspace, names: &[String], dry_run: bool, config: Option<&Path>) -> Result<()> {
    let client = if dry_run {
        None
    } else {
        let settings = load_nexus_settings(config).context("Loading Nexus settings")?;
        Some(NexusClient::new(&settings)?)
    };
    let target = client.as_ref().map_or(Target::DryRun, Target::Nexus);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let registrations = runtime.block_on(rescs_views::register(workspace, names, target))?;

    for registration in registrations {
        println!("{}", registration.name);
        match registration.outcome {
            Outcome::DryRun(view) => println!("{}", serde_json::to_string_pretty(&view)?),
            Outcome::Uploaded { action, response } => println!("{action}: {response}"),
        }
    }
    Ok(())
}

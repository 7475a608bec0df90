//! Notification dispatch.
//!
//! The notify template is a format string for building an argument vector,
//! not a shell command line: `%s` is replaced by the bundle hash, the
//! result is split with shell-word rules (quoting and escaping honored),
//! and the first word is executed directly with the rest as arguments. No
//! shell ever runs, so bundle contents and template words are passed as
//! literal argv entries.

use std::collections::BTreeSet;
use std::process::Command;

use tracing::{info, warn};

use txnotify_types::BundleHash;

/// Placeholder replaced by the bundle hash in the notify template.
const BUNDLE_TOKEN: &str = "%s";

/// Why a single notify command could not be run.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The substituted template failed shell-word splitting.
    #[error("notify template did not tokenize: {0}")]
    Tokenize(#[from] shell_words::ParseError),

    /// The substituted template tokenized to zero words.
    #[error("notify template produced an empty command")]
    EmptyCommand,

    /// The program could not be spawned.
    #[error("failed to run {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited unsuccessfully.
    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// A dispatch pass that stopped early.
///
/// Commands already executed are neither retried nor undone; their captured
/// outputs ride along so the caller still sees the partial results.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct DispatchFailure {
    /// Stdout captures of the commands that completed before the failure.
    pub outputs: Vec<String>,
    /// The failure that stopped the pass.
    #[source]
    pub error: DispatchError,
}

/// Run the notify command once per pending bundle, in sorted bundle order.
///
/// An empty template disables dispatch entirely: no subprocess runs and an
/// empty output list is returned. The first failing bundle aborts the
/// remaining pass; each bundle is attempted at most once per cycle.
pub fn dispatch_notifications(
    template: &str,
    pending: &BTreeSet<BundleHash>,
) -> Result<Vec<String>, DispatchFailure> {
    if template.is_empty() {
        return Ok(Vec::new());
    }
    let mut outputs = Vec::with_capacity(pending.len());
    for bundle in pending {
        match run_notify_command(template, bundle) {
            Ok(stdout) => {
                info!(bundle = bundle.short(), "notify command executed");
                outputs.push(stdout);
            }
            Err(error) => {
                warn!(bundle = bundle.short(), error = %error, "notify command failed, aborting dispatch");
                return Err(DispatchFailure { outputs, error });
            }
        }
    }
    Ok(outputs)
}

/// Build the argv for one bundle and execute it, capturing stdout.
fn run_notify_command(template: &str, bundle: &BundleHash) -> Result<String, DispatchError> {
    let command_line = template.replace(BUNDLE_TOKEN, bundle.as_str());
    let argv = shell_words::split(&command_line)?;
    let (program, args) = argv.split_first().ok_or(DispatchError::EmptyCommand)?;
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| DispatchError::Exec {
            program: program.clone(),
            source,
        })?;
    if !output.status.success() {
        return Err(DispatchError::Failed {
            program: program.clone(),
            status: output.status,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

use serde::Deserialize;

use crate::error::WalletError;

/// Configuration consumed by the notify cycle.
///
/// `notify` is a command template containing `%s` placeholders for the
/// bundle hash. An empty template disables dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Notify command template, e.g. `walletnotify.sh %s`.
    pub notify: String,
}

impl NotifyConfig {
    /// Config with the given command template.
    pub fn new(notify: impl Into<String>) -> Self {
        Self {
            notify: notify.into(),
        }
    }

    /// Config with dispatch disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns `true` if no notify command is configured.
    pub fn is_disabled(&self) -> bool {
        self.notify.is_empty()
    }

    /// Parse from TOML, e.g. the relevant section of a wallet config file.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }
}

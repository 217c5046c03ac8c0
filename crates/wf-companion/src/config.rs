//! Companion configuration

/// Settings for a companion session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionConfig {
    /// URL of the remote configuration page opened on `showConfiguration`
    pub settings_url: String,
}

impl CompanionConfig {
    /// The configuration page the watchface ships with
    pub const DEFAULT_SETTINGS_URL: &'static str =
        "https://rawgit.com/nikojo/modern/master/config/index.html";
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            settings_url: Self::DEFAULT_SETTINGS_URL.to_string(),
        }
    }
}

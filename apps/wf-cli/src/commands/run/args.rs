//! Arguments for the run command

/// Arguments for the run command
pub struct RunArgs {
    /// Host to run against ("stdio" or "sim"), defaulting to stdio
    pub host: Option<String>,
    /// Override for the configuration page URL
    pub settings_url: Option<String>,
    /// Sim host: minute hand color in the synthesized result
    pub minute_color: String,
    /// Sim host: hour hand color in the synthesized result
    pub hour_color: String,
    /// Sim host: reject the app message instead of acknowledging it
    pub fail_send: bool,
    /// Sim host: really open the settings URL
    pub open_browser: bool,
}

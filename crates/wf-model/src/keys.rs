//! Fixed message keys for the configuration payload.
//!
//! Both mappings here are part of the device contract: the numeric ids
//! index the watchface binary's message dictionary, and the wire names
//! key the JSON object the companion hands to the host transport.

/// One of the six configuration payload keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKey {
    MinuteColorR,
    MinuteColorG,
    MinuteColorB,
    HourColorR,
    HourColorG,
    HourColorB,
}

impl AppKey {
    /// All keys in key-id order
    pub const ALL: [AppKey; 6] = [
        AppKey::MinuteColorR,
        AppKey::MinuteColorG,
        AppKey::MinuteColorB,
        AppKey::HourColorR,
        AppKey::HourColorG,
        AppKey::HourColorB,
    ];

    /// Numeric id used by the watchface binary's dictionary
    pub fn id(self) -> u32 {
        match self {
            AppKey::MinuteColorR => 0,
            AppKey::MinuteColorG => 1,
            AppKey::MinuteColorB => 2,
            AppKey::HourColorR => 3,
            AppKey::HourColorG => 4,
            AppKey::HourColorB => 5,
        }
    }

    /// Wire name used by the companion-side dictionary
    pub fn wire_name(self) -> &'static str {
        match self {
            AppKey::MinuteColorR => "KEY_MINUTE_COLOR_R",
            AppKey::MinuteColorG => "KEY_MINUTE_COLOR_G",
            AppKey::MinuteColorB => "KEY_MINUTE_COLOR_B",
            AppKey::HourColorR => "KEY_HOUR_COLOR_R",
            AppKey::HourColorG => "KEY_HOUR_COLOR_G",
            AppKey::HourColorB => "KEY_HOUR_COLOR_B",
        }
    }

    /// Look up a key by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }
}

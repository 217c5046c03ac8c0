//! The configuration payload sent to the watchface binary.

use crate::color::Rgb;
use crate::config::HandColors;
use crate::keys::AppKey;
use serde::{Deserialize, Serialize};

/// The flat six-key integer mapping handed to the host transport.
///
/// Built fresh from a [`HandColors`] on each configuration result and
/// discarded once the send attempt resolves. Serializes as a flat JSON
/// object keyed by the wire names:
///
/// ```json
/// {"KEY_MINUTE_COLOR_R":255,"KEY_MINUTE_COLOR_G":255,"KEY_MINUTE_COLOR_B":255,
///  "KEY_HOUR_COLOR_R":0,"KEY_HOUR_COLOR_G":0,"KEY_HOUR_COLOR_B":0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPayload {
    #[serde(rename = "KEY_MINUTE_COLOR_R")]
    pub minute_r: u8,
    #[serde(rename = "KEY_MINUTE_COLOR_G")]
    pub minute_g: u8,
    #[serde(rename = "KEY_MINUTE_COLOR_B")]
    pub minute_b: u8,
    #[serde(rename = "KEY_HOUR_COLOR_R")]
    pub hour_r: u8,
    #[serde(rename = "KEY_HOUR_COLOR_G")]
    pub hour_g: u8,
    #[serde(rename = "KEY_HOUR_COLOR_B")]
    pub hour_b: u8,
}

impl ConfigPayload {
    /// The six `(key, value)` pairs in key-id order
    pub fn entries(&self) -> [(AppKey, u8); 6] {
        [
            (AppKey::MinuteColorR, self.minute_r),
            (AppKey::MinuteColorG, self.minute_g),
            (AppKey::MinuteColorB, self.minute_b),
            (AppKey::HourColorR, self.hour_r),
            (AppKey::HourColorG, self.hour_g),
            (AppKey::HourColorB, self.hour_b),
        ]
    }

    /// Value for one key
    pub fn get(&self, key: AppKey) -> u8 {
        match key {
            AppKey::MinuteColorR => self.minute_r,
            AppKey::MinuteColorG => self.minute_g,
            AppKey::MinuteColorB => self.minute_b,
            AppKey::HourColorR => self.hour_r,
            AppKey::HourColorG => self.hour_g,
            AppKey::HourColorB => self.hour_b,
        }
    }
}

impl From<&HandColors> for ConfigPayload {
    fn from(colors: &HandColors) -> Self {
        let HandColors { minute, hour } = *colors;
        let Rgb { r: mr, g: mg, b: mb } = minute;
        let Rgb { r: hr, g: hg, b: hb } = hour;
        Self {
            minute_r: mr,
            minute_g: mg,
            minute_b: mb,
            hour_r: hr,
            hour_g: hg,
            hour_b: hb,
        }
    }
}

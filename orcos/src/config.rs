//! Display configuration

use orcos_core::{LinkTiming, PowerConfig};

/// Panel link and power settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub link: LinkTiming,
    pub power: PowerConfig,
}

impl Config {
    pub const DEFAULT: Self = Self {
        link: LinkTiming::DEFAULT,
        power: PowerConfig::DEFAULT,
    };
}

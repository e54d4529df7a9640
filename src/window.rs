//! Window classification.
//!
//! The host reports its viewport size together with an orientation flag.
//! [`classify`] turns that report into the descriptor the layout controller
//! works from. The flag is authoritative: a host that says "portrait" for a
//! wide viewport gets a portrait layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Raw configuration pushed by the host on every resize or rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub width: u16,
    pub height: u16,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub width_units: u16,
    pub height_units: u16,
    pub orientation: Orientation,
}

pub fn classify(host: &HostConfig) -> WindowDescriptor {
    WindowDescriptor {
        width_units: host.width,
        height_units: host.height,
        orientation: host.orientation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_copies_dimensions() {
        let descriptor = classify(&HostConfig {
            width: 120,
            height: 40,
            orientation: Orientation::Landscape,
        });
        assert_eq!(descriptor.width_units, 120);
        assert_eq!(descriptor.height_units, 40);
        assert_eq!(descriptor.orientation, Orientation::Landscape);
    }

    #[test]
    fn host_flag_wins_over_geometry() {
        let descriptor = classify(&HostConfig {
            width: 300,
            height: 10,
            orientation: Orientation::Portrait,
        });
        assert_eq!(descriptor.orientation, Orientation::Portrait);
    }

    #[test]
    fn flipped_is_involution() {
        assert_eq!(Orientation::Portrait.flipped(), Orientation::Landscape);
        assert_eq!(Orientation::Portrait.flipped().flipped(), Orientation::Portrait);
    }
}

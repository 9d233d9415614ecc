use serde::{Deserialize, Serialize};

use crate::utils::constants::DME_VALID_THRESHOLD;

/// Signed beam deviation reported by one receiver channel.
///
/// Positive deviation means the aircraft is right of (or above) the beam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub valid: bool,
    /// Angular deviation from the beam centre (rad)
    pub deviation: f64,
}

impl Deviation {
    pub fn new(valid: bool, deviation: f64) -> Self {
        Self { valid, deviation }
    }

    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Navigation radio snapshot read by the flight director once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NavReceiver {
    /// VOR course deviation
    pub nav: Deviation,
    /// ILS localizer deviation
    pub localizer: Deviation,
    /// ILS glideslope deviation
    pub glideslope: Deviation,
    /// Slant range to the tuned station (m)
    pub dme_distance: Option<f64>,
}

impl NavReceiver {
    /// Slant range when the DME reading is usable.
    pub fn dme(&self) -> Option<f64> {
        self.dme_distance
            .filter(|distance| distance.is_finite() && *distance > DME_VALID_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dme_is_unavailable() {
        let mut receiver = NavReceiver::default();
        assert_eq!(receiver.dme(), None);

        receiver.dme_distance = Some(0.0);
        assert_eq!(receiver.dme(), None);

        receiver.dme_distance = Some(1852.0);
        assert_eq!(receiver.dme(), Some(1852.0));
    }
}

use flyer_core::resources::{Deviation, NavReceiver};

pub fn nav_signal(valid: bool, deviation: f64) -> NavReceiver {
    NavReceiver {
        nav: Deviation::new(valid, deviation),
        ..Default::default()
    }
}

/// Localizer on the centreline with the given glideslope deviation.
pub fn ils_signal(glideslope: f64) -> NavReceiver {
    NavReceiver {
        localizer: Deviation::new(true, 0.0),
        glideslope: Deviation::new(true, glideslope),
        ..Default::default()
    }
}

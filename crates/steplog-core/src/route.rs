//! Route points from the high-frequency location track.

/// One raw location ping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
    /// Capture instant, epoch seconds.
    pub time: f64,
}

impl RoutePoint {
    /// `[lat, lon]` pair as used by map polylines.
    pub fn lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

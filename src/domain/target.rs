use serde::{Deserialize, Serialize};

/// Tracked object position supplied fresh every tick.
///
/// The engine never owns targets; adapters that massage external position
/// objects (`lon`/`lng` aliases etc.) into this shape live with the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub longitude: f64,
    pub latitude: f64,
}

impl Target {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Both coordinates finite
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Decode `[lon0, lat0, lon1, lat1, ...]`; a trailing odd value is ignored.
    pub fn from_interleaved(coords: &[f64]) -> Vec<Target> {
        coords
            .chunks_exact(2)
            .map(|pair| Target::new(pair[0], pair[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_pairs_decode_in_order() {
        let targets = Target::from_interleaved(&[10.0, -5.0, 20.0, 7.5, 99.0]);
        assert_eq!(targets, vec![Target::new(10.0, -5.0), Target::new(20.0, 7.5)]);
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(Target::new(0.0, 0.0).is_valid());
        assert!(!Target::new(f64::NAN, 0.0).is_valid());
        assert!(!Target::new(0.0, f64::INFINITY).is_valid());
    }
}

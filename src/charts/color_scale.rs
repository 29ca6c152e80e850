//! Continuous color scales for the map.

use serde::Serialize;

/// Viridis, sampled at ten evenly spaced stops.
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    Viridis,
}

impl ColorScale {
    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Viridis => &VIRIDIS,
        }
    }

    /// Color at position `t` in `[0, 1]`; out-of-range values are clamped.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (stops.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(stops.len() - 1);
        let frac = scaled - lower as f64;

        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            let a = stops[lower][i] as f64;
            let b = stops[upper][i] as f64;
            *channel = (a + (b - a) * frac).round() as u8;
        }
        rgb
    }

    /// Color for `value` on the continuous range `[min, max]`.
    pub fn color_for(&self, value: f64, min: f64, max: f64) -> [u8; 3] {
        if max <= min {
            // single-valued range sits at the top unless it is the floor
            return if value > min {
                self.sample(1.0)
            } else {
                self.sample(0.0)
            };
        }
        self.sample((value - min) / (max - min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(ColorScale::Viridis.sample(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(ColorScale::Viridis.sample(1.0), [0xfd, 0xe7, 0x25]);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(ColorScale::Viridis.sample(-3.0), ColorScale::Viridis.sample(0.0));
        assert_eq!(ColorScale::Viridis.sample(7.0), ColorScale::Viridis.sample(1.0));
        assert_eq!(ColorScale::Viridis.sample(f64::NAN), ColorScale::Viridis.sample(0.0));
    }

    #[test]
    fn interpolates_between_stops() {
        assert_eq!(ColorScale::Viridis.sample(1.0 / 9.0), [0x48, 0x28, 0x78]);
        let [r, g, b] = ColorScale::Viridis.sample(0.25 / 9.0);
        assert!((68..=72).contains(&r));
        assert!((1..=40).contains(&g));
        assert!((84..=120).contains(&b));
    }

    #[test]
    fn single_value_range() {
        let scale = ColorScale::Viridis;
        assert_eq!(scale.color_for(10.0, 0.0, 10.0), scale.sample(1.0));
        assert_eq!(scale.color_for(0.0, 0.0, 0.0), scale.sample(0.0));
    }
}

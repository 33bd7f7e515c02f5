use std::f64::consts::TAU;

use crate::foundation::core::Point;

/// `n` angles evenly spanning one full turn, starting at 0 (the endpoint is excluded).
pub fn theta_samples(n: usize) -> Vec<f64> {
    (0..n).map(|i| TAU * i as f64 / n as f64).collect()
}

/// Polar coordinates to a point in the unit-disc frame.
pub fn polar(radius: f64, theta: f64) -> Point {
    Point::new(radius * theta.cos(), radius * theta.sin())
}

/// One sinusoid of a radial profile: `weight * sin(freq * theta + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonic {
    pub weight: f64,
    pub freq: u32,
    pub phase: f64,
}

/// Radius as a function of angle: `base + amp * Σ harmonics`, optionally clamped.
///
/// With every harmonic frequency a multiple of `n`, the profile has exact `n`-fold rotational
/// symmetry.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialWave {
    pub base: f64,
    pub amp: f64,
    pub harmonics: Vec<Harmonic>,
    pub clamp: Option<(f64, f64)>,
}

impl RadialWave {
    pub fn radius_at(&self, theta: f64) -> f64 {
        let wave: f64 = self
            .harmonics
            .iter()
            .map(|h| h.weight * (f64::from(h.freq) * theta + h.phase).sin())
            .sum();
        let r = self.base + self.amp * wave;
        match self.clamp {
            Some((lo, hi)) => r.clamp(lo, hi),
            None => r,
        }
    }

    pub fn outline(&self, thetas: &[f64]) -> Vec<Point> {
        thetas
            .iter()
            .map(|&t| polar(self.radius_at(t), t))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/radial.rs"]
mod tests;

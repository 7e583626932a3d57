//! RGBA colors and concentration tinting

use nalgebra::Vector4;
use std::fmt;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn to_vector(self) -> Vector4<f64> {
        Vector4::new(self.r as f64, self.g as f64, self.b as f64, self.a as f64)
    }

    fn from_vector(v: &Vector4<f64>) -> Self {
        let channel = |x: f64| x.round().clamp(0.0, 255.0) as u8;
        Self::rgba(channel(v.x), channel(v.y), channel(v.z), channel(v.w))
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1)
    ///
    /// `t` is clamped to `[0, 1]`, each channel is rounded to the nearest integer.
    pub fn interpolate(self, other: Color, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self::from_vector(&self.to_vector().lerp(&other.to_vector(), t))
    }

    /// CSS-style hex representation (`#rrggbb`, alpha dropped when opaque)
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_endpoints() {
        let low = Color::rgb(255, 225, 225);
        let high = Color::rgb(255, 0, 0);

        assert_eq!(low.interpolate(high, 0.0), low);
        assert_eq!(low.interpolate(high, 1.0), high);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let low = Color::rgb(0, 0, 0);
        let high = Color::rgba(200, 100, 50, 255);

        let mid = low.interpolate(high, 0.5);
        assert_eq!(mid, Color::rgba(100, 50, 25, 255));
    }

    #[test]
    fn test_interpolate_clamps_parameter() {
        let low = Color::rgb(10, 10, 10);
        let high = Color::rgb(20, 20, 20);

        assert_eq!(low.interpolate(high, 3.0), high);
        assert_eq!(low.interpolate(high, -1.0), low);
        assert_eq!(low.interpolate(high, f64::NAN), low);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::rgb(224, 255, 255).to_hex(), "#e0ffff");
        assert_eq!(Color::rgba(255, 0, 0, 128).to_hex(), "#ff000080");
    }
}

//! The two coloring schemes.  Each takes a function on the complex
//! plane and composes it with a color model, yielding a new function
//! that maps a sampled plane point directly to an RGBA color.  Both
//! compositions are pure: no state, no side effects, safe to call from
//! any number of threads at once.

use num::clamp;
use num::Complex;

/// A single RGBA pixel.  Each channel is an 8-bit value; alpha 255 is
/// fully opaque.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Constructor, in RGBA order.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// The channels as a fixed RGBA byte array, the layout image
    /// encoders want.
    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Round half-up and clamp to the u8 range.  The clamp is the NaN
/// policy: a NaN channel fails both comparisons and the saturating
/// cast takes it to 0, rather than letting a wrapping truncation
/// produce an arbitrary byte.
fn round_channel(num: f64) -> u8 {
    clamp((num + 0.5).floor(), 0.0, 255.0) as u8
}

/// Stereographic projection of a value onto the unit Riemann sphere.
/// Returns Cartesian (x, y, z), each in [-1, 1].  An infinite value is
/// the north pole (0, 0, 1); zero is the south pole (0, 0, -1).
fn sphere_point(val: Complex<f64>) -> (f64, f64, f64) {
    let add = val.norm_sqr();
    if add.is_infinite() {
        return (0.0, 0.0, 1.0);
    }
    let div = 1.0 + add;
    ((2.0 * val.re) / div, (2.0 * val.im) / div, (add - 1.0) / div)
}

/// Nonlinear map of a squared magnitude onto [0, 1): zero stays zero,
/// and the result saturates toward 1 as the magnitude grows.
fn lightness(norm_sqr: f64) -> f64 {
    if norm_sqr.is_infinite() {
        1.0
    } else {
        norm_sqr / (norm_sqr + 1.0)
    }
}

/// Generates a color map from a complex function, using the Riemann
/// sphere.  The function's value is projected stereographically onto
/// the unit sphere, and red, green, and blue are respectively the x,
/// y, and z coordinates, mapped uniformly from [-1, 1] to [0, 255].
///
/// A pole of the function (infinite magnitude) lands on the north pole
/// of the sphere and renders as (128, 128, 255).  A zero lands on the
/// south pole and renders as (128, 128, 0).
pub fn riemann_map<F>(fnc: F) -> impl Fn(Complex<f64>) -> Color
where
    F: Fn(Complex<f64>) -> Complex<f64>,
{
    move |point| {
        let (x, y, z) = sphere_point(fnc(point));
        Color::new(
            round_channel(255.0 * ((x + 1.0) / 2.0)),
            round_channel(255.0 * ((y + 1.0) / 2.0)),
            round_channel(255.0 * ((z + 1.0) / 2.0)),
            255,
        )
    }
}

/// Generates a color map from a complex function, using the HSL color
/// space with the argument of the *sampled point* as the hue and a
/// nonlinear map of the function's magnitude as the lightness.  Hue
/// therefore encodes where in the domain a pixel sits, while
/// lightness encodes how large the function is there: zeroes render
/// black, poles render white, and the color wheel turns once around
/// every circuit of the origin.
///
/// Saturation is fixed at maximum.  The hexcone evaluation follows the
/// standard HSL-to-RGB construction.
pub fn hsl_wheel_map<F>(fnc: F) -> impl Fn(Complex<f64>) -> Color
where
    F: Fn(Complex<f64>) -> Complex<f64>,
{
    move |point| {
        let val = fnc(point);
        let l = lightness(val.norm_sqr());

        // arg() is in (-pi, pi], so h lands in [0, 6].
        let h = (3.0 * point.arg() / std::f64::consts::PI) + 3.0;

        let c = 1.0 - (2.0 * l - 1.0).abs();
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());

        let (r1, g1, b1) = match h.floor() as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            5 => (c, 0.0, x),
            // The h == 6.0 boundary, and nothing else.
            _ => (0.0, 0.0, 0.0),
        };

        // m is the "minimum" value of each channel.
        let m = l - c / 2.0;
        Color::new(
            round_channel(255.0 * (r1 + m)),
            round_channel(255.0 * (g1 + m)),
            round_channel(255.0 * (b1 + m)),
            255,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn sphere_points_have_unit_norm() {
        let vals = [
            Complex::new(0.0, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(-0.5, 2.5),
            Complex::new(1e-9, -1e-9),
            Complex::new(1e9, 1e9),
            Complex::new(-3.25, 0.125),
        ];
        for &val in vals.iter() {
            let (x, y, z) = sphere_point(val);
            assert_close(x * x + y * y + z * z, 1.0);
        }
    }

    #[test]
    fn sphere_poles() {
        assert_eq!(sphere_point(Complex::new(0.0, 0.0)), (0.0, 0.0, -1.0));
        assert_eq!(
            sphere_point(Complex::new(std::f64::INFINITY, 0.0)),
            (0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn riemann_zero_is_dark_yellow() {
        let map = riemann_map(|_| Complex::new(0.0, 0.0));
        assert_eq!(map(Complex::new(0.3, 0.7)), Color::new(128, 128, 0, 255));
    }

    #[test]
    fn riemann_pole_limit() {
        let map = riemann_map(|_| Complex::new(std::f64::INFINITY, 0.0));
        assert_eq!(map(Complex::new(0.0, 0.0)), Color::new(128, 128, 255, 255));
    }

    #[test]
    fn riemann_unit_value() {
        // val = 1: x = 1, y = 0, z = 0.
        let map = riemann_map(|_| Complex::new(1.0, 0.0));
        assert_eq!(map(Complex::new(0.0, 0.0)), Color::new(255, 128, 128, 255));
    }

    #[test]
    fn riemann_nan_collapses_to_zero_channels() {
        let map = riemann_map(|_| Complex::new(std::f64::NAN, 0.0));
        assert_eq!(map(Complex::new(1.0, 1.0)), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn lightness_is_monotone_and_saturating() {
        let mut last = lightness(0.0);
        assert_eq!(last, 0.0);
        for m in [0.1, 0.5, 1.0, 10.0, 1e6, 1e12].iter() {
            let next = lightness(*m);
            assert!(next > last);
            assert!(next < 1.0);
            last = next;
        }
        assert_eq!(lightness(std::f64::INFINITY), 1.0);
    }

    #[test]
    fn hsl_zero_value_is_black() {
        // Positive real axis: hue sector 3, but lightness 0 wins.
        let map = hsl_wheel_map(|_| Complex::new(0.0, 0.0));
        assert_eq!(map(Complex::new(1.0, 0.0)), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn hsl_pole_is_white() {
        let map = hsl_wheel_map(|_| Complex::new(std::f64::INFINITY, 0.0));
        assert_eq!(
            map(Complex::new(1.0, 0.0)),
            Color::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn hsl_unit_magnitude_on_positive_real_axis_is_cyan() {
        // |val|^2 = 1 gives L = 1/2, C = 1, and arg 0 gives H = 3,
        // selecting (0, X, C) with X = C.
        let map = hsl_wheel_map(|_| Complex::new(1.0, 0.0));
        assert_eq!(map(Complex::new(2.0, 0.0)), Color::new(0, 255, 255, 255));
    }

    #[test]
    fn hsl_unit_magnitude_on_positive_imaginary_axis() {
        // arg pi/2 gives H = 4.5, sector 4: (X, 0, C), X = C/2.  The
        // pi division leaves H a few ulps shy of 4.5, so the red
        // channel may round either side of 127.5.
        let map = hsl_wheel_map(|_| Complex::new(0.0, 1.0));
        let col = map(Complex::new(0.0, 2.0));
        assert!(col.r == 127 || col.r == 128);
        assert_eq!((col.g, col.b, col.a), (0, 255, 255));
    }

    #[test]
    fn hsl_hue_depends_on_point_not_value() {
        let map = hsl_wheel_map(|_| Complex::new(1.0, 0.0));
        // Same value everywhere, but different sampled points give
        // different hues.
        assert_ne!(map(Complex::new(1.0, 0.0)), map(Complex::new(-1.0, 0.1)));
    }
}

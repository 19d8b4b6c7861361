//! Contains the ComplexRect struct, which describes an axis-aligned
//! rectangle on the complex plane by an arbitrary pair of opposite
//! corners, treating the real part of each corner as the x-component
//! and the imaginary part as the y-component.
use num::Complex;

/// A rectangle in the complex plane, defined by two opposite corners.
/// The corners may be given in any order; the rectangle's extent and
/// its lower-left corner are derived from them, never stored.  A
/// degenerate rectangle (zero width or height) is legal and simply
/// collapses sampling along that axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexRect {
    a: Complex<f64>,
    b: Complex<f64>,
}

impl ComplexRect {
    /// Constructor.  Takes the two corners.  No ordering between them
    /// is required, and no validation is performed; non-finite corners
    /// are a caller error.
    pub fn new(a: Complex<f64>, b: Complex<f64>) -> ComplexRect {
        ComplexRect { a, b }
    }

    /// The horizontal extent of the rectangle.  Always non-negative.
    pub fn width(&self) -> f64 {
        (self.a.re - self.b.re).abs()
    }

    /// The vertical extent of the rectangle.  Always non-negative.
    pub fn height(&self) -> f64 {
        (self.a.im - self.b.im).abs()
    }

    /// The imaginary part of the lower edge.
    pub fn bottom(&self) -> f64 {
        if self.a.im < self.b.im {
            self.a.im
        } else {
            self.b.im
        }
    }

    /// The real part of the left edge.
    pub fn left(&self) -> f64 {
        if self.a.re < self.b.re {
            self.a.re
        } else {
            self.b.re
        }
    }
}

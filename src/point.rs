// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains ComplexPoint, a plain real/imaginary pair, and `step`,
//! which advances a point one iteration of z ← z² + c.

use num::Complex;

/// A point on the complex plane.  The real part is the x-component
/// and the imaginary part the y-component.  Every iteration builds a
/// fresh one; nothing mutates a point in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPoint {
    /// The real (x) component.
    pub real: f64,
    /// The imaginary (y) component.
    pub imag: f64,
}

impl ComplexPoint {
    /// Constructor.
    pub fn new(real: f64, imag: f64) -> Self {
        ComplexPoint { real, imag }
    }

    /// The origin, where every orbit starts.
    pub fn zero() -> Self {
        ComplexPoint::new(0.0, 0.0)
    }

    /// Euclidean distance from the origin, computed as the square root
    /// of the sum of squares rather than with `hypot`.
    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }
}

impl From<Complex<f64>> for ComplexPoint {
    fn from(c: Complex<f64>) -> Self {
        ComplexPoint::new(c.re, c.im)
    }
}

impl From<ComplexPoint> for Complex<f64> {
    fn from(p: ComplexPoint) -> Self {
        Complex::new(p.real, p.imag)
    }
}

/// One iteration of the Mandelbrot recurrence: given z = a + bi and
/// c = x + yi, returns (a² − b² + x) + (2ab + y)i.
///
/// If either component of the result would leave the range of an
/// f64, the input is returned unchanged; the point freezes at its
/// last representable value instead of becoming `inf` or `NaN`.
pub fn step(z: ComplexPoint, c: ComplexPoint) -> ComplexPoint {
    let (a, b) = (z.real, z.imag);
    let real = a * a - b * b + c.real;
    let imag = 2.0 * (a * b) + c.imag;
    if real.is_finite() && imag.is_finite() {
        ComplexPoint::new(real, imag)
    } else {
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_from_origin_lands_on_constant() {
        let c = ComplexPoint::new(-0.75, 0.25);
        assert_eq!(step(ComplexPoint::zero(), c), c);
    }

    #[test]
    fn step_squares_and_adds() {
        // (1 + 2i)² = -3 + 4i
        let z = ComplexPoint::new(1.0, 2.0);
        let c = ComplexPoint::new(0.5, -1.0);
        assert_eq!(step(z, c), ComplexPoint::new(-2.5, 3.0));
    }

    #[test]
    fn step_agrees_with_num_complex() {
        let z = ComplexPoint::new(0.3, -0.7);
        let c = ComplexPoint::new(-0.1, 0.65);
        let zc: Complex<f64> = z.into();
        let cc: Complex<f64> = c.into();
        let expected: ComplexPoint = (zc * zc + cc).into();
        let got = step(z, c);
        assert!((got.real - expected.real).abs() < 1e-15);
        assert!((got.imag - expected.imag).abs() < 1e-15);
    }

    #[test]
    fn overflow_freezes_the_point() {
        let z = ComplexPoint::new(1e200, 1e200);
        let c = ComplexPoint::new(1.0, 1.0);
        assert_eq!(step(z, c), z);

        let z = ComplexPoint::new(1e200, 0.0);
        assert_eq!(step(z, ComplexPoint::zero()), z);
    }

    #[test]
    fn magnitude_is_euclidean() {
        assert_eq!(ComplexPoint::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(ComplexPoint::new(-2.0, 0.0).magnitude(), 2.0);
        assert_eq!(ComplexPoint::zero().magnitude(), 0.0);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Region struct, which describes a rectangle on the
//! complex plane and the fixed step at which it is sampled, and maps
//! pixels of the resulting integral grid back onto the complex plane.
//!
//! Sample positions are always computed as `min + index * step` rather
//! than by repeated addition.  The number of samples along an axis is
//! `floor((max - min) / step) + 1`, with a quotient that is a rounding
//! error away from a whole number taken as that whole number, so the
//! far edge is neither lost nor duplicated.
use errors::{RenderError, Result};
use num::Complex;
use point::ComplexPoint;

/// Describes the column and row of a sample in a region.  Row 0 is
/// the top of the region, i.e. the largest imaginary part.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// A validated rectangle on the complex plane together with the
/// spacing between samples.  Once built, a Region is always walkable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    step: f64,
    columns: usize,
    rows: usize,
}

impl Region {
    /// Constructor.  Takes the real range, the imaginary range and the
    /// step size.  Rejects anything that is not finite, a step that is
    /// not positive, a maximum below its minimum, and a step so fine
    /// that the sample count cannot be represented.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, step: f64) -> Result<Region> {
        let named = [
            ("x_min", x_min),
            ("x_max", x_max),
            ("y_min", y_min),
            ("y_max", y_max),
            ("step", step),
        ];
        if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RenderError::InvalidRegion(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if step <= 0.0 {
            return Err(RenderError::InvalidRegion(format!(
                "step must be positive, got {}",
                step
            )));
        }

        if x_max < x_min {
            return Err(RenderError::InvalidRegion(format!(
                "x_max ({}) is less than x_min ({})",
                x_max, x_min
            )));
        }

        if y_max < y_min {
            return Err(RenderError::InvalidRegion(format!(
                "y_max ({}) is less than y_min ({})",
                y_max, y_min
            )));
        }

        let too_many = || {
            RenderError::InvalidRegion(format!(
                "too many samples at step {} over [{}, {}] x [{}, {}]",
                step, x_min, x_max, y_min, y_max
            ))
        };
        let columns = samples_between(x_min, x_max, step).ok_or_else(too_many)?;
        let rows = samples_between(y_min, y_max, step).ok_or_else(too_many)?;
        columns.checked_mul(rows).ok_or_else(too_many)?;

        Ok(Region {
            x_min,
            x_max,
            y_min,
            y_max,
            step,
            columns,
            rows,
        })
    }

    /// Builds a region from its left-lower and right-upper corners,
    /// treating the real part as x and the imaginary part as y.
    pub fn from_corners(
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        step: f64,
    ) -> Result<Region> {
        Region::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im, step)
    }

    /// Spacing between neighbouring samples on both axes.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples along the real axis.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of samples along the imaginary axis.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The total number of samples in the region.  Cannot overflow;
    /// `new` has already checked the product.
    pub fn len(&self) -> usize {
        self.columns() * self.rows()
    }

    /// A validated region always holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real part of the sample in column `column`, walking left to right.
    pub fn x_at(&self, column: usize) -> f64 {
        self.x_min + (column as f64) * self.step
    }

    /// Imaginary part of the sample in row `row`, walking top to bottom.
    pub fn y_at(&self, row: usize) -> f64 {
        self.y_max - (row as f64) * self.step
    }

    /// Given a pixel of the sample grid, return the constant sampled
    /// there.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> ComplexPoint {
        ComplexPoint::new(self.x_at(pixel.0), self.y_at(pixel.1))
    }
}

/// Relative distance from a whole number within which a quotient is
/// taken to be that whole number.
const SNAP_TOLERANCE: f64 = 1e-9;

/// Samples from `min` to `max` inclusive.  A quotient that lands a
/// rounding error short of a whole number, as 0.3 / 0.1 does, still
/// counts the sample at `max`.  None if the count does not fit a usize.
fn samples_between(min: f64, max: f64, step: f64) -> Option<usize> {
    let q = (max - min) / step;
    let steps = if (q - q.round()).abs() <= q.abs() * SNAP_TOLERANCE {
        q.round()
    } else {
        q.floor()
    };
    if !steps.is_finite() || steps >= usize::max_value() as f64 {
        return None;
    }
    (steps as usize).checked_add(1)
}

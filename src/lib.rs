#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot animation renderer
//!
//! The Mandelbrot set is the set of constants c for which the orbit
//! of 0 under z ← z² + c stays bounded.  No finite computation can
//! decide that exactly; instead, every point of a grid laid over the
//! complex plane is iterated a fixed number of times (the
//! "precision"), and any point whose orbit reaches a magnitude of 2 is
//! known to escape.  Everything else is, as far as we can tell at that
//! precision, inside.
//!
//! Rendering the same grid at precision 0, 1, 2, ... gives a sequence
//! of black and white frames that starts as a solid block and shows
//! the set slowly resolving out of it.  This crate computes those
//! frames in memory (`animate`) and can encode them as a looping GIF
//! (`encoder`).

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate tempfile;

pub mod animate;
pub mod encoder;
pub mod errors;
pub mod escape;
pub mod field;
pub mod planes;
pub mod point;
pub mod sampler;

pub use animate::{animate, animate_config, AnimationConfig};
pub use errors::{RenderError, Result};
pub use escape::{evaluate, Orbit, Verdict};
pub use field::{Field, FrameSequence};
pub use planes::Region;
pub use point::{step, ComplexPoint};
pub use sampler::{sample, sample_region, sample_threaded};

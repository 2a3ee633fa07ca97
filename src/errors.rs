// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by the sampler, the animation driver and the
//! encoder.  Numeric overflow during iteration is never an error; see
//! `point::step`.

use image::ImageError;
use std::io;

/// Everything that can go wrong between describing a region and
/// writing the finished animation to disk.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The region handed to the sampler cannot be walked: a
    /// non-positive or non-finite step, or a maximum below its minimum.
    #[fail(display = "invalid region: {}", _0)]
    InvalidRegion(String),

    /// The encoder was handed no frames at all.
    #[fail(display = "cannot encode an empty frame sequence")]
    EmptySequence,

    /// The image library refused a frame.
    #[fail(display = "image encoding failed: {}", _0)]
    Image(#[cause] ImageError),

    /// The output could not be written.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<ImageError> for RenderError {
    fn from(err: ImageError) -> Self {
        RenderError::Image(err)
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = ::std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_region_names_the_problem() {
        let e = RenderError::InvalidRegion("step must be positive".to_string());
        assert_eq!(format!("{}", e), "invalid region: step must be positive");
    }

    #[test]
    fn io_errors_convert() {
        let e: RenderError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        match e {
            RenderError::Io(_) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a FrameSequence into a looping animated GIF.  Points inside
//! the set are drawn black and points that escaped are drawn white.

use errors::{RenderError, Result};
use field::{Field, FrameSequence};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Colour of a point that stayed bounded.
pub const INSIDE: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Colour of a point that escaped.
pub const OUTSIDE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Paints a field, one pixel per verdict, row 0 at the top.
pub fn frame_image(field: &Field) -> RgbaImage {
    let (columns, rows) = field.dimensions();
    RgbaImage::from_fn(columns as u32, rows as u32, |x, y| {
        match field.get(y as usize, x as usize) {
            Some(true) => INSIDE,
            _ => OUTSIDE,
        }
    })
}

/// Encodes the frames, in order, as an endlessly looping GIF showing
/// each frame for `delay_ms` milliseconds.
pub fn write_gif<W: Write>(writer: W, frames: &FrameSequence, delay_ms: u32) -> Result<()> {
    let (columns, rows) = frames.dimensions().ok_or(RenderError::EmptySequence)?;
    debug!(
        "encoding {} frames of {}x{} at {}ms",
        frames.len(),
        columns,
        rows,
        delay_ms
    );

    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    for field in frames {
        encoder.encode_frame(Frame::from_parts(frame_image(field), 0, 0, delay))?;
    }
    Ok(())
}

/// Encodes through a buffer and flushes it, so a failure to write the
/// tail of the file is reported rather than lost when the buffer drops.
fn write_buffered<W: Write>(sink: W, frames: &FrameSequence, delay_ms: u32) -> Result<()> {
    let mut output = BufWriter::new(sink);
    write_gif(&mut output, frames, delay_ms)?;
    output.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the animation
/// into it.
pub fn save_gif<P: AsRef<Path>>(path: P, frames: &FrameSequence, delay_ms: u32) -> Result<()> {
    write_buffered(File::create(path.as_ref())?, frames, delay_ms)?;
    info!("wrote {} frames to {}", frames.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(fields: Vec<Field>) -> FrameSequence {
        let mut frames = FrameSequence::new();
        for f in fields {
            frames.push(f);
        }
        frames
    }

    #[test]
    fn verdicts_map_to_fixed_colours() {
        let field = Field::from_rows(vec![vec![true, false], vec![false, false], vec![true, true]]);
        let img = frame_image(&field);
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(*img.get_pixel(0, 0), INSIDE);
        assert_eq!(*img.get_pixel(1, 0), OUTSIDE);
        assert_eq!(*img.get_pixel(0, 1), OUTSIDE);
        assert_eq!(*img.get_pixel(1, 2), INSIDE);
    }

    #[test]
    fn empty_sequence_is_refused() {
        let mut out: Vec<u8> = vec![];
        match write_gif(&mut out, &FrameSequence::new(), 100) {
            Err(RenderError::EmptySequence) => (),
            other => panic!("unexpected {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn writes_a_gif() {
        let frames = sequence(vec![
            Field::filled(3, 4, true),
            Field::from_rows(vec![vec![true, false, false, true]; 3]),
        ]);
        let mut out: Vec<u8> = vec![];
        write_gif(&mut out, &frames, 250).unwrap();
        assert!(out.starts_with(b"GIF89a"));
        assert_eq!(out.last(), Some(&0x3b));
    }

    #[test]
    fn saves_to_disk() {
        let dir = ::tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.gif");
        let frames = sequence(vec![Field::filled(2, 2, false)]);
        save_gif(&path, &frames, 100).unwrap();
        let bytes = ::std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
    }

    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> ::std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> ::std::io::Result<()> {
            Err(::std::io::Error::new(::std::io::ErrorKind::Other, "device full"))
        }
    }

    #[test]
    fn failed_final_flush_is_reported() {
        let frames = sequence(vec![Field::filled(2, 2, true)]);
        match write_buffered(FailingFlush(vec![]), &frames, 100) {
            Err(RenderError::Io(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn buffered_output_keeps_the_trailer() {
        let frames = sequence(vec![Field::filled(2, 2, true)]);
        let mut out: Vec<u8> = vec![];
        write_buffered(&mut out, &frames, 100).unwrap();
        assert!(out.starts_with(b"GIF89a"));
        assert_eq!(out.last(), Some(&0x3b));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = ::tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frames.gif");
        let frames = sequence(vec![Field::filled(2, 2, false)]);
        match save_gif(&path, &frames, 100) {
            Err(RenderError::Io(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}

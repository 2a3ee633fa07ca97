// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid sampler.  Walks a region top to bottom and left to right,
//! evaluating every sample point with a fixed iteration budget and
//! keeping only the verdicts.
//!
//! Every point is independent of every other, so rows can be handed
//! out to worker threads freely; the threaded sampler reassembles the
//! rows by index and produces exactly the field the single-threaded
//! one does.

use crossbeam;
use errors::Result;
use escape::{is_bounded, Verdict};
use field::Field;
use itertools::iproduct;
use planes::{Pixel, Region};
use std::ops::Range;
use std::panic;
use std::sync::{Arc, Mutex};

type RowQueue = Arc<Mutex<Range<usize>>>;

/// Validates the region described by the five numbers and samples it
/// at `precision` iterations per point.  Fails with
/// `RenderError::InvalidRegion` before sampling anything if the step
/// is not positive or either range is inverted.
pub fn sample(
    precision: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    step: f64,
) -> Result<Field> {
    let region = Region::new(x_min, x_max, y_min, y_max, step)?;
    Ok(sample_region(precision, &region))
}

/// Samples an already validated region on the calling thread.
pub fn sample_region(precision: usize, region: &Region) -> Field {
    let columns = region.columns();
    let verdicts: Vec<Verdict> = iproduct!(0..region.rows(), 0..columns)
        .map(|(row, column)| is_bounded(precision, region.pixel_to_point(&Pixel(column, row))))
        .collect();
    debug!(
        "sampled {}x{} field at precision {}",
        columns,
        region.rows(),
        precision
    );
    Field::from_rows(verdicts.chunks(columns).map(|r| r.to_vec()).collect())
}

fn sample_row(precision: usize, region: &Region, row: usize) -> Vec<Verdict> {
    (0..region.columns())
        .map(|column| is_bounded(precision, region.pixel_to_point(&Pixel(column, row))))
        .collect()
}

/// Samples a region with `threads` workers pulling rows from a shared
/// queue.  One thread (or zero) samples on the calling thread instead.
pub fn sample_threaded(precision: usize, region: &Region, threads: usize) -> Field {
    if threads <= 1 {
        return sample_region(precision, region);
    }

    let rows: RowQueue = Arc::new(Mutex::new(0..region.rows()));
    debug!(
        "sampling {} rows at precision {} on {} threads",
        region.rows(),
        precision,
        threads
    );

    let mut collected: Vec<(usize, Vec<Verdict>)> = crossbeam::scope(|spawner| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let rows = rows.clone();
                spawner.spawn(move |_| {
                    let mut done: Vec<(usize, Vec<Verdict>)> = vec![];
                    loop {
                        let row = { rows.lock().map(|mut r| r.next()).unwrap_or(None) };
                        match row {
                            Some(row) => done.push((row, sample_row(precision, region, row))),
                            None => break,
                        }
                    }
                    done
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
    .unwrap_or_else(|e| panic::resume_unwind(e));

    collected.sort_by_key(|&(row, _)| row);
    Field::from_rows(collected.into_iter().map(|(_, verdicts)| verdicts).collect())
}

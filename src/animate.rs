// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The animation driver.  Samples the same region once per precision
//! level, from zero iterations up, so that played in order the frames
//! show the set resolving out of a solid block.

use errors::Result;
use field::FrameSequence;
use planes::Region;
use sampler::sample_threaded;

/// Everything the driver needs to produce an animation.  Built once
/// and passed in; there is no global configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// The area of the complex plane to sample, and how finely.
    pub region: Region,
    /// Number of frames.  Frame `p` is sampled with `p` iterations.
    pub max_precision: usize,
    /// Worker threads used to sample each frame.
    pub threads: usize,
}

impl AnimationConfig {
    /// A single-threaded configuration.
    pub fn new(region: Region, max_precision: usize) -> Self {
        AnimationConfig {
            region,
            max_precision,
            threads: 1,
        }
    }

    /// Sets the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for AnimationConfig {
    /// The classic view of the whole set, x in [-2, 1] and y in
    /// [-1.25, 1.25], every 0.01, over thirty frames.
    fn default() -> Self {
        AnimationConfig {
            region: Region::new(-2.0, 1.0, -1.25, 1.25, 0.01)
                .unwrap_or_else(|e| unreachable!("default region rejected: {}", e)),
            max_precision: 30,
            threads: 1,
        }
    }
}

/// Validates the region described by the five numbers and animates it
/// over `max_precision` frames on the calling thread.
pub fn animate(
    max_precision: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    step: f64,
) -> Result<FrameSequence> {
    let region = Region::new(x_min, x_max, y_min, y_max, step)?;
    Ok(animate_config(&AnimationConfig::new(region, max_precision)))
}

/// Produces one field per precision level 0..max_precision, each
/// computed from scratch, in order of increasing precision.
pub fn animate_config(config: &AnimationConfig) -> FrameSequence {
    let mut frames = FrameSequence::new();
    for precision in 0..config.max_precision {
        let field = sample_threaded(precision, &config.region, config.threads);
        info!(
            "frame {}/{}: {}x{}, {} points inside",
            precision + 1,
            config.max_precision,
            field.columns(),
            field.rows(),
            field.count_inside()
        );
        frames.push(field);
    }
    frames
}

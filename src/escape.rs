// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Starting from z = 0, repeatedly applies
//! `step` with a fixed constant, checking before every step whether
//! the orbit has reached the escape radius.

use point::{step, ComplexPoint};

/// The iterates actually visited, in order, starting with z₀ = 0.
pub type Orbit = Vec<ComplexPoint>;

/// `true` if the point stayed bounded for the whole iteration budget,
/// `false` if it was seen to escape.
pub type Verdict = bool;

/// The radius at which an orbit is considered to have escaped.  The
/// bound is closed: a magnitude of exactly 2.0 has escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Walks the orbit of `c` for at most `limit` iterations, handing every
/// visited iterate to `visit`.  Returns the index of the iterate that
/// reached the escape radius, or None if none did.
fn walk<F>(limit: usize, c: ComplexPoint, mut visit: F) -> Option<usize>
where
    F: FnMut(ComplexPoint),
{
    let mut z = ComplexPoint::zero();
    for i in 0..limit {
        visit(z);
        if z.magnitude() >= ESCAPE_RADIUS {
            return Some(i);
        }
        z = step(z, c);
    }
    None
}

/// Evaluates `c` for `limit` iterations and returns the orbit together
/// with the verdict.  The orbit holds one entry per iteration
/// performed, so it is never longer than `limit`, and stops with the
/// iterate that escaped, if any.  A limit of zero performs no
/// iterations and is vacuously bounded.
pub fn evaluate(limit: usize, c: ComplexPoint) -> (Orbit, Verdict) {
    let mut orbit = Vec::with_capacity(limit.min(1024));
    let escaped = walk(limit, c, |z| orbit.push(z));
    (orbit, escaped.is_none())
}

/// The verdict of `evaluate` without keeping the orbit around.  This
/// is what the grid sampler calls once per point.
pub fn is_bounded(limit: usize, c: ComplexPoint) -> Verdict {
    walk(limit, c, |_| ()).is_none()
}

/// The iteration at which `c` was seen to escape, if it did within
/// `limit` iterations.
pub fn escape_time(limit: usize, c: ComplexPoint) -> Option<usize> {
    walk(limit, c, |_| ())
}

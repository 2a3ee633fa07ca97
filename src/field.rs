// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Field, one rectangular grid of verdicts, and FrameSequence, the
//! ordered fields of an animation.  Both keep their shape invariant
//! with assertions: a ragged field is a bug in the sampler, not
//! something a caller can recover from.

use escape::Verdict;
use std::slice;

/// A rectangular grid of verdicts, stored row-major.  Row 0 is the top
/// of the sampled region.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    rows: Vec<Vec<Verdict>>,
    columns: usize,
}

impl Field {
    /// Wraps the given rows.  Panics if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Verdict>>) -> Field {
        let columns = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == columns,
                "ragged field: row {} has {} columns, row 0 has {}",
                i,
                row.len(),
                columns
            );
        }
        Field { rows, columns }
    }

    /// A field of the given shape with every cell set to `verdict`.
    pub fn filled(rows: usize, columns: usize, verdict: Verdict) -> Field {
        Field {
            rows: vec![vec![verdict; columns]; rows],
            columns,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of verdicts in every row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// (columns, rows), the same order an image reports its size in.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows.len())
    }

    /// The verdict at `row`, `column`, if it is inside the field.
    pub fn get(&self, row: usize, column: usize) -> Option<Verdict> {
        self.rows.get(row).and_then(|r| r.get(column)).cloned()
    }

    /// Rows, top to bottom.
    pub fn iter_rows(&self) -> slice::Iter<Vec<Verdict>> {
        self.rows.iter()
    }

    /// How many cells stayed bounded.
    pub fn count_inside(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|v| **v).count())
            .sum()
    }
}

/// The fields of an animation, in order of increasing precision.
/// Every field in a sequence has the same shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Field>,
}

impl FrameSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        FrameSequence { frames: Vec::new() }
    }

    /// Appends a field.  Panics if its shape differs from the fields
    /// already in the sequence.
    pub fn push(&mut self, field: Field) {
        if let Some(first) = self.frames.first() {
            assert!(
                first.dimensions() == field.dimensions(),
                "frame {} is {:?}, sequence is {:?}",
                self.frames.len(),
                field.dimensions(),
                first.dimensions()
            );
        }
        self.frames.push(field);
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frame has been added.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Shape shared by every frame, or None for an empty sequence.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.frames.first().map(|f| f.dimensions())
    }

    /// Frames in order of increasing precision.
    pub fn iter(&self) -> slice::Iter<Field> {
        self.frames.iter()
    }

    /// Frames as a slice.
    pub fn frames(&self) -> &[Field] {
        &self.frames
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_reports_shape() {
        let f = Field::from_rows(vec![vec![true, false, true], vec![false, false, true]]);
        assert_eq!(f.rows(), 2);
        assert_eq!(f.columns(), 3);
        assert_eq!(f.dimensions(), (3, 2));
        assert_eq!(f.get(1, 2), Some(true));
        assert_eq!(f.get(0, 1), Some(false));
        assert_eq!(f.get(2, 0), None);
        assert_eq!(f.count_inside(), 3);
    }

    #[test]
    #[should_panic(expected = "ragged field")]
    fn ragged_rows_panic() {
        Field::from_rows(vec![vec![true, true], vec![true]]);
    }

    #[test]
    fn filled_is_uniform() {
        let f = Field::filled(4, 5, true);
        assert_eq!(f.dimensions(), (5, 4));
        assert_eq!(f.count_inside(), 20);
        assert!(f.iter_rows().all(|r| r.len() == 5));
    }

    #[test]
    fn sequence_keeps_insertion_order() {
        let mut seq = FrameSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.dimensions(), None);
        seq.push(Field::filled(2, 2, true));
        seq.push(Field::filled(2, 2, false));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.dimensions(), Some((2, 2)));
        let counts: Vec<usize> = seq.iter().map(|f| f.count_inside()).collect();
        assert_eq!(counts, vec![4, 0]);
    }

    #[test]
    #[should_panic]
    fn sequence_rejects_other_shapes() {
        let mut seq = FrameSequence::new();
        seq.push(Field::filled(2, 2, true));
        seq.push(Field::filled(2, 3, true));
    }
}

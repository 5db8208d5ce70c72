use std::ops;

use serde::{Deserialize, Serialize};

use crate::dims::CellPos;

/// Row-major 2D buffer indexed by [`CellPos`].
///
/// Deserializing checks that the buffer holds exactly `rows * columns` items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawArray2D<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    #[error("array of {rows}x{columns} items doesn't fit in memory")]
    Overflow { rows: usize, columns: usize },
    #[error("buffer holds {len} items, a {rows}x{columns} array needs {expected}")]
    Length {
        len: usize,
        rows: usize,
        columns: usize,
        expected: usize,
    },
}

#[derive(Deserialize)]
struct RawArray2D<T> {
    buf: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> TryFrom<RawArray2D<T>> for Array2D<T> {
    type Error = ArrayError;

    fn try_from(raw: RawArray2D<T>) -> Result<Self, Self::Error> {
        let RawArray2D { buf, rows, columns } = raw;
        let expected = rows
            .checked_mul(columns)
            .ok_or(ArrayError::Overflow { rows, columns })?;
        if buf.len() != expected {
            return Err(ArrayError::Length {
                len: buf.len(),
                rows,
                columns,
                expected,
            });
        }

        Ok(Self { buf, rows, columns })
    }
}

impl<T> Array2D<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn pos_to_idx(&self, pos: CellPos) -> Option<usize> {
        let CellPos(r, c) = pos;
        if r < 0 || c < 0 {
            return None;
        }

        let (r, c) = (r as usize, c as usize);
        if r >= self.rows || c >= self.columns {
            return None;
        }

        Some(r * self.columns + c)
    }

    pub fn idx_to_pos(&self, idx: usize) -> Option<CellPos> {
        if idx >= self.buf.len() {
            return None;
        }

        let r = idx / self.columns;
        let c = idx % self.columns;

        Some(CellPos(r as i32, c as i32))
    }

    pub fn get(&self, pos: CellPos) -> Option<&T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_pos(i))
    }

    pub fn all(&self, f: impl Fn(&T) -> bool) -> bool {
        self.buf.iter().all(f)
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, columns: usize) -> Self {
        Self {
            buf: vec![item; rows * columns],
            rows,
            columns,
        }
    }
}

impl Array2D<bool> {
    pub fn count_true(&self) -> usize {
        self.buf.iter().filter(|&&b| b).count()
    }
}

impl<T> ops::Index<CellPos> for Array2D<T> {
    type Output = T;

    fn index(&self, index: CellPos) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<CellPos> for Array2D<T> {
    fn index_mut(&mut self, index: CellPos) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

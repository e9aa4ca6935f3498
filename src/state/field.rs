//! Ghosted grid storage.
//!
//! [`CellField`] stores a multi-component state per cell in interleaved
//! layout, `data[(i * qy + j) * nvar + var]`, so every variable of a cell is
//! contiguous (the access pattern of every flux kernel) and one `i`-row of
//! cells is a contiguous chunk (the unit of parallel work).
//!
//! [`ScalarField`] stores one value per cell for face-centered normal fields,
//! EMFs and corner values.

use crate::error::{MhdError, Result};
use crate::state::VariableLayout;
use crate::types::GridShape;

/// Multi-component cell-centered (or interface-centered) field.
#[derive(Clone, Debug, PartialEq)]
pub struct CellField {
    /// Values in interleaved layout
    pub data: Vec<f64>,
    shape: GridShape,
    nvar: usize,
}

impl CellField {
    /// Create a zero-initialized field.
    pub fn zeros(shape: GridShape, nvar: usize) -> Self {
        Self {
            data: vec![0.0; shape.n_cells() * nvar],
            shape,
            nvar,
        }
    }

    /// Create a field from raw interleaved data.
    pub fn from_data(shape: GridShape, nvar: usize, data: Vec<f64>) -> Result<Self> {
        let expected = shape.n_cells() * nvar;
        if data.len() != expected {
            return Err(MhdError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, shape, nvar })
    }

    /// Create a field holding the same state in every cell.
    pub fn uniform(shape: GridShape, state: &[f64]) -> Self {
        let mut data = Vec::with_capacity(shape.n_cells() * state.len());
        for _ in 0..shape.n_cells() {
            data.extend_from_slice(state);
        }
        Self {
            data,
            shape,
            nvar: state.len(),
        }
    }

    /// Create a field by evaluating `f(i, j)` in every cell.
    pub fn from_fn<F>(shape: GridShape, nvar: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Vec<f64>,
    {
        let mut field = Self::zeros(shape, nvar);
        for i in 0..shape.qx() {
            for j in 0..shape.qy() {
                let state = f(i, j);
                field.state_mut(i, j).copy_from_slice(&state);
            }
        }
        field
    }

    /// Grid shape.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Components per cell.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Length of one contiguous `i`-row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.shape.qy() * self.nvar
    }

    #[inline(always)]
    fn base(&self, i: usize, j: usize) -> usize {
        (i * self.shape.qy() + j) * self.nvar
    }

    /// All components of cell `(i, j)`.
    #[inline(always)]
    pub fn state(&self, i: usize, j: usize) -> &[f64] {
        let base = self.base(i, j);
        &self.data[base..base + self.nvar]
    }

    /// Mutable view of cell `(i, j)`.
    #[inline(always)]
    pub fn state_mut(&mut self, i: usize, j: usize) -> &mut [f64] {
        let base = self.base(i, j);
        &mut self.data[base..base + self.nvar]
    }

    /// Single component of cell `(i, j)`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize, var: usize) -> f64 {
        self.data[self.base(i, j) + var]
    }

    /// Set a single component of cell `(i, j)`.
    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, var: usize, value: f64) {
        let base = self.base(i, j);
        self.data[base + var] = value;
    }

    /// Extract one component as a scalar field.
    pub fn component(&self, var: usize) -> ScalarField {
        let mut out = ScalarField::zeros(self.shape);
        for (dst, cell) in out.data.iter_mut().zip(self.data.chunks_exact(self.nvar)) {
            *dst = cell[var];
        }
        out
    }

    /// Maximum absolute value over all cells and components.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().map(|&x| x.abs()).fold(0.0, f64::max)
    }

    /// Maximum absolute value of one component over the interior widened by
    /// `margin` cells.
    pub fn max_abs_var(&self, var: usize, margin: usize) -> f64 {
        let mut max_val: f64 = 0.0;
        for i in self.shape.i_range(margin) {
            for j in self.shape.j_range(margin) {
                max_val = max_val.max(self.get(i, j, var).abs());
            }
        }
        max_val
    }

    /// Check grid and component count against the layout used for a sweep.
    pub fn check(
        &self,
        field: &'static str,
        shape: &GridShape,
        layout: &VariableLayout,
    ) -> Result<()> {
        shape.check_same(field, &self.shape)?;
        if self.nvar != layout.nvar() {
            return Err(MhdError::LayoutMismatch {
                field,
                expected: layout.nvar(),
                actual: self.nvar,
            });
        }
        Ok(())
    }
}

/// One value per cell, face or corner.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    /// Values in row-major order, `data[i * qy + j]`
    pub data: Vec<f64>,
    shape: GridShape,
}

impl ScalarField {
    /// Create a zero-initialized field.
    pub fn zeros(shape: GridShape) -> Self {
        Self {
            data: vec![0.0; shape.n_cells()],
            shape,
        }
    }

    /// Create a field holding `value` everywhere.
    pub fn uniform(shape: GridShape, value: f64) -> Self {
        Self {
            data: vec![value; shape.n_cells()],
            shape,
        }
    }

    /// Create a field from raw row-major data.
    pub fn from_data(shape: GridShape, data: Vec<f64>) -> Result<Self> {
        if data.len() != shape.n_cells() {
            return Err(MhdError::DataLength {
                expected: shape.n_cells(),
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Create a field by evaluating `f(i, j)` everywhere.
    pub fn from_fn<F>(shape: GridShape, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(shape.n_cells());
        for i in 0..shape.qx() {
            for j in 0..shape.qy() {
                data.push(f(i, j));
            }
        }
        Self { data, shape }
    }

    /// Grid shape.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Value at `(i, j)`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.shape.qy() + j]
    }

    /// Set the value at `(i, j)`.
    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let qy = self.shape.qy();
        self.data[i * qy + j] = value;
    }

    /// Check the grid against the sweep shape.
    pub fn check(&self, field: &'static str, shape: &GridShape) -> Result<()> {
        shape.check_same(field, &self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> GridShape {
        GridShape::new(4, 3, 4)
    }

    #[test]
    fn test_interleaved_layout() {
        let mut u = CellField::zeros(shape(), 6);
        u.set(2, 5, 3, 7.0);
        assert_eq!(u.get(2, 5, 3), 7.0);
        assert_eq!(u.data[(2 * 11 + 5) * 6 + 3], 7.0);
        assert_eq!(u.state(2, 5)[3], 7.0);
        assert_eq!(u.row_len(), 11 * 6);
    }

    #[test]
    fn test_uniform_and_component() {
        let u = CellField::uniform(shape(), &[1.0, 2.0, 3.0]);
        assert_eq!(u.nvar(), 3);
        let c = u.component(1);
        assert!(c.data.iter().all(|&v| v == 2.0));
        assert_eq!(u.max_abs(), 3.0);
    }

    #[test]
    fn test_from_data_length_checked() {
        let err = CellField::from_data(shape(), 6, vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, MhdError::DataLength { actual: 5, .. }));
        assert!(ScalarField::from_data(shape(), vec![0.0; 12 * 11]).is_ok());
    }

    #[test]
    fn test_layout_check() {
        let layout = VariableLayout::standard(1);
        let u = CellField::zeros(shape(), 6);
        let err = u.check("u", &shape(), &layout).unwrap_err();
        assert_eq!(
            err,
            MhdError::LayoutMismatch {
                field: "u",
                expected: 7,
                actual: 6
            }
        );
    }

    #[test]
    fn test_scalar_from_fn() {
        let f = ScalarField::from_fn(shape(), |i, j| (i * 100 + j) as f64);
        assert_eq!(f.get(3, 7), 307.0);
    }
}

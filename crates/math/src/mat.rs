use core::fmt;

use crate::error::{MathError, MathResult};
use crate::value::{Scalar, Variant};
use crate::vec::Vector;

/// Builds a [`Matrix`] from rows of anything convertible into a
/// [`Scalar`], returning an error when rows have different lengths
///
/// ```
/// use math::matrix;
/// let m = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
/// assert_eq!((m.rows(), m.cols()), (2, 2));
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($e: expr),* $(,)?]),* $(,)?) => {
        $crate::mat::Matrix::new(::std::vec![
            $(::std::vec![$($crate::value::Scalar::from($e)),*]),*
        ])
    };
}

/// Immutable row-major matrix of real and complex entries
///
/// Every accessor that "modifies" a matrix returns a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    variant: Variant,
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Scalar>>,
}

impl Matrix {
    // Shape must already be consistent with `cells`.
    fn from_parts(rows: usize, cols: usize, cells: Vec<Vec<Scalar>>) -> Matrix {
        let variant = if rows == 0 || cols == 0 {
            Variant::Empty
        } else {
            Variant::of(cells.iter().flatten())
        };
        Matrix { variant, rows, cols, cells }
    }

    /// Shape is inferred from the rows
    pub fn new(cells: Vec<Vec<Scalar>>) -> MathResult<Matrix> {
        Matrix::with_shape(None, None, cells)
    }

    /// Validates declared dimensions against the inferred ones
    pub fn with_shape(rows: Option<usize>, cols: Option<usize>,
                      cells: Vec<Vec<Scalar>>) -> MathResult<Matrix> {
        let n = cells.len();
        if let Some(rows) = rows {
            if rows != n {
                return Err(MathError::dimension_mismatch(format!(
                    "{} rows declared, {} given", rows, n
                )));
            }
        }

        let m = match (cols, cells.first()) {
            (Some(cols), _) => cols,
            (None, Some(first)) => first.len(),
            (None, None) => 0,
        };
        if let Some((i, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != m) {
            return Err(MathError::dimension_mismatch(format!(
                "row {} has {} columns, expected {}", i, row.len(), m
            )));
        }

        Ok(Matrix::from_parts(n, m, cells))
    }

    pub fn from_fn(rows: usize, cols: usize,
                   mut f: impl FnMut(usize, usize) -> Scalar) -> Matrix {
        let cells = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect())
            .collect();
        Matrix::from_parts(rows, cols, cells)
    }

    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::from_fn(rows, cols, |_, _| Scalar::ZERO)
    }

    #[inline]
    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::from_fn(rows, cols, |_, _| Scalar::ONE)
    }

    #[inline]
    pub fn identity(size: usize) -> Matrix {
        Matrix::from_fn(size, size, |i, j| if i == j { Scalar::ONE } else { Scalar::ZERO })
    }

    /// Square matrix with `values` on the diagonal
    pub fn diag(size: usize, values: &[Scalar]) -> MathResult<Matrix> {
        if values.len() != size {
            return Err(MathError::dimension_mismatch(format!(
                "{} diagonal values for a {}x{} matrix", values.len(), size, size
            )));
        }
        Ok(Matrix::from_fn(size, size, |i, j| if i == j { values[i] } else { Scalar::ZERO }))
    }

    /// `1 x n` matrix holding `v`
    pub fn row(v: &Vector) -> Matrix {
        Matrix::from_parts(1, v.size(), vec![v.elements().to_vec()])
    }

    /// `n x 1` matrix holding `v`
    pub fn col(v: &Vector) -> Matrix {
        Matrix::from_parts(v.size(), 1, v.iter().map(|e| vec![*e]).collect())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn cells(&self) -> &[Vec<Scalar>] {
        &self.cells
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variant == Variant::Empty
    }

    pub fn get(&self, i: usize, j: usize) -> MathResult<Scalar> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(self.cells[i][j])
    }

    pub fn set(&self, i: usize, j: usize, value: impl Into<Scalar>) -> MathResult<Matrix> {
        self.check_row(i)?;
        self.check_col(j)?;
        let mut cells = self.cells.clone();
        cells[i][j] = value.into();
        Ok(Matrix::from_parts(self.rows, self.cols, cells))
    }

    pub fn get_row(&self, i: usize) -> MathResult<Vector> {
        self.check_row(i)?;
        Ok(Vector::new(self.cells[i].clone()))
    }

    pub fn set_row(&self, i: usize, v: &Vector) -> MathResult<Matrix> {
        self.check_row(i)?;
        if v.size() != self.cols {
            return Err(MathError::dimension_mismatch(format!(
                "row of length {} set into a matrix with {} columns", v.size(), self.cols
            )));
        }
        let mut cells = self.cells.clone();
        cells[i] = v.elements().to_vec();
        Ok(Matrix::from_parts(self.rows, self.cols, cells))
    }

    pub fn get_col(&self, j: usize) -> MathResult<Vector> {
        self.check_col(j)?;
        Ok(self.cells.iter().map(|row| row[j]).collect())
    }

    pub fn set_col(&self, j: usize, v: &Vector) -> MathResult<Matrix> {
        self.check_col(j)?;
        if v.size() != self.rows {
            return Err(MathError::dimension_mismatch(format!(
                "column of length {} set into a matrix with {} rows", v.size(), self.rows
            )));
        }
        let mut cells = self.cells.clone();
        for (row, e) in cells.iter_mut().zip(v.iter()) {
            row[j] = *e;
        }
        Ok(Matrix::from_parts(self.rows, self.cols, cells))
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols, self.rows, |i, j| self.cells[j][i])
    }

    /// Drops row `i` and column `j`
    pub fn minor(&self, i: usize, j: usize) -> MathResult<Matrix> {
        self.check_row(i)?;
        self.check_col(j)?;
        let cells = self.cells.iter()
            .enumerate()
            .filter(|(r, _)| *r != i)
            .map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(c, _)| *c != j)
                    .map(|(_, e)| *e)
                    .collect()
            })
            .collect();
        Ok(Matrix::from_parts(self.rows - 1, self.cols - 1, cells))
    }

    /// `(−1)^(i+j) · det(minor(i, j))`
    pub fn cofactor(&self, i: usize, j: usize) -> MathResult<Scalar> {
        let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
        Ok(Scalar::Real(sign) * self.minor(i, j)?.det()?)
    }

    /// Determinant by cofactor expansion along the first row
    ///
    /// Factorial in the matrix size; meant for the small matrices of 3D
    /// transforms.
    pub fn det(&self) -> MathResult<Scalar> {
        self.check_square()?;
        let a = &self.cells;
        match self.rows {
            0 => Ok(Scalar::ONE),
            1 => Ok(a[0][0]),
            2 => Ok(a[0][0] * a[1][1] - a[0][1] * a[1][0]),
            n => {
                if n > 4 {
                    log::debug!("determinant of {}x{} matrix by cofactor expansion", n, n);
                }
                let mut det = Scalar::ZERO;
                for j in 0..n {
                    det = det + a[0][j] * self.cofactor(0, j)?;
                }
                Ok(det)
            }
        }
    }

    /// Transpose of the cofactor matrix
    pub fn adjugate(&self) -> MathResult<Matrix> {
        self.check_square()?;
        let n = self.rows;
        let mut cells = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                row.push(self.cofactor(i, j)?);
            }
            cells.push(row);
        }
        Ok(Matrix::from_parts(n, n, cells).transpose())
    }

    /// `(1 / det) · adjugate`; a determinant of exactly zero is singular
    pub fn inverse(&self) -> MathResult<Matrix> {
        let det = self.det()?;
        if det.is_zero() {
            log::debug!("{}x{} matrix has zero determinant", self.rows, self.cols);
            return Err(MathError::SingularMatrix);
        }
        let k = det.recip();
        Ok(self.adjugate()?.map(|e| k * e))
    }

    /// Matrix product; `self.cols` must equal `b.rows`
    pub fn mul(&self, b: &Matrix) -> MathResult<Matrix> {
        if self.cols != b.rows {
            return Err(MathError::dimension_mismatch(format!(
                "cannot multiply {}x{} by {}x{}", self.rows, self.cols, b.rows, b.cols
            )));
        }
        Ok(Matrix::from_fn(self.rows, b.cols, |i, j| {
            (0..self.cols).fold(Scalar::ZERO, |acc, k| acc + self.cells[i][k] * b.cells[k][j])
        }))
    }

    /// Integer power by repeated squaring; negative powers invert first
    pub fn powi(&self, n: i64) -> MathResult<Matrix> {
        self.check_square()?;
        if n < 0 {
            return self.inverse()?.pow_unsigned(n.unsigned_abs());
        }
        self.pow_unsigned(n as u64)
    }

    /// Integer power given as a float, so exponents past the `i64` range
    /// are raised exactly instead of saturating
    pub fn pow_integral(&self, n: f64) -> MathResult<Matrix> {
        self.check_square()?;
        if n.fract() != 0.0 {
            return Err(MathError::unsupported(format!("{} is not an integer exponent", n)));
        }
        let mut base = if n < 0.0 { self.inverse()? } else { self.clone() };
        let mut result = Matrix::identity(self.rows);
        let mut e = n.abs();
        while e > 0.0 {
            if e % 2.0 == 1.0 {
                result = result.mul(&base)?;
            }
            e = (e / 2.0).floor();
            if e > 0.0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }

    fn pow_unsigned(&self, mut e: u64) -> MathResult<Matrix> {
        match e {
            0 => return Ok(Matrix::identity(self.rows)),
            1 => return Ok(self.clone()),
            _ => {}
        }
        let mut result = Matrix::identity(self.rows);
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Frobenius norm, `sqrt(Σ |cell|²)`
    pub fn norm(&self) -> f64 {
        self.cells.iter().flatten().map(|e| e.norm2()).sum::<f64>().sqrt()
    }

    /// Entries `a[i][i]` for `i < min(rows, cols)`
    pub fn diag_of(&self) -> Vector {
        (0..self.rows.min(self.cols)).map(|i| self.cells[i][i]).collect()
    }

    pub fn trace(&self) -> MathResult<Scalar> {
        self.check_square()?;
        Ok((0..self.rows).fold(Scalar::ZERO, |acc, i| acc + self.cells[i][i]))
    }

    /// Eigenvalues and eigenvectors
    ///
    /// There is no eigensolver; every caller gets `NotImplemented`.
    pub fn eigen_decomposition(&self) -> MathResult<(Vector, Matrix)> {
        log::debug!("eigendecomposition requested for {}x{} matrix", self.rows, self.cols);
        Err(MathError::not_implemented("eigendecomposition"))
    }

    pub fn map(&self, mut f: impl FnMut(Scalar) -> Scalar) -> Matrix {
        Matrix::from_fn(self.rows, self.cols, |i, j| f(self.cells[i][j]))
    }

    /// Combines entries position by position; shapes must match
    pub fn zip_with(&self, b: &Matrix,
                    mut f: impl FnMut(Scalar, Scalar) -> Scalar) -> MathResult<Matrix> {
        if self.rows != b.rows || self.cols != b.cols {
            return Err(MathError::dimension_mismatch(format!(
                "elementwise operation on {}x{} and {}x{} matrices",
                self.rows, self.cols, b.rows, b.cols
            )));
        }
        Ok(Matrix::from_fn(self.rows, self.cols, |i, j| f(self.cells[i][j], b.cells[i][j])))
    }

    fn check_square(&self) -> MathResult<()> {
        if !self.is_square() {
            return Err(MathError::NotSquare { rows: self.rows, cols: self.cols });
        }
        Ok(())
    }

    fn check_row(&self, i: usize) -> MathResult<()> {
        if i >= self.rows {
            return Err(MathError::out_of_bounds(i, self.rows));
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> MathResult<()> {
        if j >= self.cols {
            return Err(MathError::out_of_bounds(j, self.cols));
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        let rows: Vec<String> = self.cells.iter()
            .map(|row| {
                let row: Vec<String> = row.iter()
                    .map(|e| format!("{:.prec$}", e, prec = prec))
                    .collect();
                format!("[{}]", row.join(", "))
            })
            .collect();
        write!(f, "Matrix({})", rows.join(", "))
    }
}

fn from_rows<const N: usize>(rows: [[f64; N]; N]) -> Matrix {
    Matrix::from_fn(N, N, |i, j| Scalar::Real(rows[i][j]))
}

// Transform builders use row vectors: a point `p` maps to `p * M`, with the
// translation in the last row.

/// Homogeneous 3x3 transforms for the plane
pub mod d2 {
    use super::{from_rows, Matrix};
    use crate::error::MathResult;

    /// Pixel space of a `w x h` canvas to clip space, y pointing down
    pub fn projection(w: f64, h: f64) -> Matrix {
        from_rows([
            [2.0 / w, 0.0, 0.0],
            [0.0, -2.0 / h, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    pub fn identity() -> Matrix {
        Matrix::identity(3)
    }

    pub fn translate(x: f64, y: f64) -> Matrix {
        from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [x, y, 1.0],
        ])
    }

    pub fn scale(x: f64, y: f64) -> Matrix {
        from_rows([
            [x, 0.0, 0.0],
            [0.0, y, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    pub fn rotate(radians: f64) -> Matrix {
        let (s, c) = radians.sin_cos();
        from_rows([
            [c, -s, 0.0],
            [s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Scale, then rotate, then translate
    pub fn transform(translate: (f64, f64), rotation: f64, scale: (f64, f64)) -> MathResult<Matrix> {
        self::scale(scale.0, scale.1)
            .mul(&rotate(rotation))?
            .mul(&self::translate(translate.0, translate.1))
    }
}

/// Homogeneous 4x4 transforms for space
pub mod d3 {
    use super::{from_rows, Matrix};

    pub fn identity() -> Matrix {
        Matrix::identity(4)
    }

    pub fn translate(x: f64, y: f64, z: f64) -> Matrix {
        from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    pub fn scale(x: f64, y: f64, z: f64) -> Matrix {
        from_rows([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotate_x(radians: f64) -> Matrix {
        let (s, c) = radians.sin_cos();
        from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotate_y(radians: f64) -> Matrix {
        let (s, c) = radians.sin_cos();
        from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotate_z(radians: f64) -> Matrix {
        let (s, c) = radians.sin_cos();
        from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Box `[0, width] x [0, height] x [0, depth]` to clip space, y pointing down
    pub fn projection(width: f64, height: f64, depth: f64) -> Matrix {
        from_rows([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, -2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 2.0 / depth, 0.0],
            [-1.0, 1.0, 0.0, 1.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::complex;
    use crate::vector;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: &Matrix, b: &Matrix) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        for (x, y) in a.cells().iter().flatten().zip(b.cells().iter().flatten()) {
            assert_abs_diff_eq!(x.re(), y.re(), epsilon = 1e-9);
            assert_abs_diff_eq!(x.im(), y.im(), epsilon = 1e-9);
        }
    }

    fn apply(p: &[f64], m: &Matrix) -> Vec<f64> {
        let row = Matrix::row(&Vector::from_slice(p));
        row.mul(m).unwrap().get_row(0).unwrap().iter().map(|e| e.re()).collect()
    }

    fn assert_point(p: Vec<f64>, expected: &[f64]) {
        assert_eq!(p.len(), expected.len());
        for (a, b) in p.iter().zip(expected) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn plane_transforms() {
        assert_eq!(d2::identity(), Matrix::identity(3));
        assert_point(apply(&[1., 2., 1.], &d2::translate(3., 4.)), &[4., 6., 1.]);
        assert_point(apply(&[1., 2., 1.], &d2::scale(2., 3.)), &[2., 6., 1.]);
        assert_point(apply(&[1., 0., 1.], &d2::rotate(FRAC_PI_2)), &[0., -1., 1.]);
        assert_point(apply(&[0., 1., 1.], &d2::rotate(FRAC_PI_2)), &[1., 0., 1.]);
        assert_point(apply(&[800., 600., 1.], &d2::projection(800., 600.)), &[2., -2., 1.]);

        let m = d2::transform((1., 1.), 0., (2., 2.)).unwrap();
        assert_point(apply(&[0., 0., 1.], &m), &[1., 1., 1.]);
        assert_point(apply(&[1., 0., 1.], &m), &[3., 1., 1.]);

        let m = d2::transform((0., 0.), FRAC_PI_2, (2., 1.)).unwrap();
        assert_point(apply(&[1., 0., 1.], &m), &[0., -2., 1.]);
    }

    #[test]
    fn space_transforms() {
        assert_eq!(d3::identity(), Matrix::identity(4));
        assert_point(apply(&[1., 2., 3., 1.], &d3::translate(1., -1., 2.)), &[2., 1., 5., 1.]);
        assert_point(apply(&[1., 2., 3., 1.], &d3::scale(2., 3., 4.)), &[2., 6., 12., 1.]);
        assert_point(apply(&[0., 1., 0., 1.], &d3::rotate_x(FRAC_PI_2)), &[0., 0., 1., 1.]);
        assert_point(apply(&[0., 0., 1., 1.], &d3::rotate_y(FRAC_PI_2)), &[1., 0., 0., 1.]);
        assert_point(apply(&[1., 0., 0., 1.], &d3::rotate_z(FRAC_PI_2)), &[0., 1., 0., 1.]);

        let p = d3::projection(800., 600., 400.);
        assert_point(apply(&[0., 0., 0., 1.], &p), &[-1., 1., 0., 1.]);
        assert_point(apply(&[800., 600., 400., 1.], &p), &[1., -1., 2., 1.]);
    }

    #[test]
    fn rotations_are_orthonormal() {
        for r in [d3::rotate_x(0.3), d3::rotate_y(-1.2), d3::rotate_z(2.5)] {
            assert_close(&r.mul(&r.transpose()).unwrap(), &Matrix::identity(4));
            assert_abs_diff_eq!(r.det().unwrap().re(), 1., epsilon = 1e-12);
        }
    }

    #[test]
    fn construction_validates_shape() {
        let m = matrix![[1., 2., 3.], [4., 5., 6.]].unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.variant(), Variant::Real);

        assert!(matches!(matrix![[1., 2.], [3.]], Err(MathError::DimensionMismatch(_))));
        assert!(matches!(
            Matrix::with_shape(Some(3), None, vec![vec![Scalar::ONE]]),
            Err(MathError::DimensionMismatch(_))
        ));
        assert!(matches!(
            Matrix::with_shape(None, Some(2), vec![vec![Scalar::ONE]]),
            Err(MathError::DimensionMismatch(_))
        ));
        assert!(Matrix::with_shape(Some(1), Some(2), vec![vec![Scalar::ONE; 2]]).is_ok());
    }

    #[test]
    fn zero_dimensions_collapse_to_empty() {
        assert_eq!(matrix![].unwrap().variant(), Variant::Empty);
        assert_eq!(matrix![[], []].unwrap().variant(), Variant::Empty);
        assert_eq!(Matrix::zeros(0, 3).variant(), Variant::Empty);
        assert!(Matrix::zeros(2, 0).is_empty());
        assert_eq!(Matrix::zeros(2, 0).cells().len(), 2);
    }

    #[test]
    fn complex_entries_tag_the_matrix() {
        let m = matrix![[1., complex(0., 1.)], [2., 3.]].unwrap();
        assert_eq!(m.variant(), Variant::Complex);
        // real entries stay real
        assert_eq!(m.get(0, 0).unwrap(), Scalar::Real(1.));
    }

    #[test]
    fn special_matrices() {
        assert_eq!(Matrix::zeros(2, 2), matrix![[0., 0.], [0., 0.]].unwrap());
        assert_eq!(Matrix::ones(1, 2), matrix![[1., 1.]].unwrap());
        assert_eq!(Matrix::identity(2), matrix![[1., 0.], [0., 1.]].unwrap());

        let d = Matrix::diag(2, &[Scalar::Real(2.), Scalar::Real(3.)]).unwrap();
        assert_eq!(d, matrix![[2., 0.], [0., 3.]].unwrap());
        assert!(Matrix::diag(3, &[Scalar::ONE]).is_err());

        let v = vector![1., 2., 3.];
        assert_eq!(Matrix::row(&v), matrix![[1., 2., 3.]].unwrap());
        assert_eq!(Matrix::col(&v), matrix![[1.], [2.], [3.]].unwrap());
    }

    #[test]
    fn accessors_copy_on_write() {
        let m = matrix![[1., 2.], [3., 4.]].unwrap();

        let s = m.set(0, 1, 9.).unwrap();
        assert_eq!(s, matrix![[1., 9.], [3., 4.]].unwrap());
        assert_eq!(m.get(0, 1).unwrap(), Scalar::Real(2.));

        let c = m.set(1, 1, complex(0., 1.)).unwrap();
        assert_eq!(c.variant(), Variant::Complex);
        assert_eq!(m.variant(), Variant::Real);

        assert_eq!(m.get_row(1).unwrap(), vector![3., 4.]);
        assert_eq!(m.get_col(0).unwrap(), vector![1., 3.]);
        assert_eq!(
            m.set_row(0, &vector![7., 8.]).unwrap(),
            matrix![[7., 8.], [3., 4.]].unwrap()
        );
        assert_eq!(
            m.set_col(1, &vector![7., 8.]).unwrap(),
            matrix![[1., 7.], [3., 8.]].unwrap()
        );

        assert_eq!(m.get(2, 0), Err(MathError::out_of_bounds(2, 2)));
        assert!(matches!(m.set_row(0, &vector![1.]), Err(MathError::DimensionMismatch(_))));
        assert!(matches!(m.set_col(0, &vector![1., 2., 3.]), Err(MathError::DimensionMismatch(_))));
    }

    #[test]
    fn transpose_swaps_indices() {
        let m = matrix![[1., 2., 3.], [4., 5., 6.]].unwrap();
        let t = m.transpose();
        assert_eq!(t, matrix![[1., 4.], [2., 5.], [3., 6.]].unwrap());
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn minor_and_cofactor() {
        let m = matrix![[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]].unwrap();
        assert_eq!(m.minor(1, 1).unwrap(), matrix![[1., 3.], [7., 9.]].unwrap());
        assert_eq!(m.cofactor(0, 1).unwrap(), Scalar::Real(6.));
        assert_eq!(m.cofactor(0, 0).unwrap(), Scalar::Real(-3.));
        assert!(m.minor(3, 0).is_err());
    }

    #[test]
    fn determinants() {
        assert_eq!(matrix![[1., 2.], [3., 4.]].unwrap().det().unwrap(), Scalar::Real(-2.));
        assert_eq!(matrix![[1., 2.], [2., 4.]].unwrap().det().unwrap(), Scalar::Real(0.));
        assert_eq!(matrix![[7.]].unwrap().det().unwrap(), Scalar::Real(7.));
        assert_eq!(
            matrix![[6., 1., 1.], [4., -2., 5.], [2., 8., 7.]].unwrap().det().unwrap(),
            Scalar::Real(-306.)
        );
        for n in 0..6 {
            assert_eq!(Matrix::identity(n).det().unwrap(), Scalar::Real(1.));
        }

        let c = matrix![[complex(1., 1.), 0.], [0., complex(1., -1.)]].unwrap();
        assert_eq!(c.det().unwrap(), Scalar::Complex(complex(2., 0.)));

        assert_eq!(
            Matrix::zeros(2, 3).det(),
            Err(MathError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn adjugate_of_2x2() {
        let m = matrix![[1., 2.], [3., 4.]].unwrap();
        assert_eq!(m.adjugate().unwrap(), matrix![[4., -2.], [-3., 1.]].unwrap());
        assert!(Matrix::zeros(1, 2).adjugate().is_err());
    }

    #[test]
    fn inverse() {
        let m = matrix![[1., 2.], [3., 4.]].unwrap();
        assert_eq!(m.inverse().unwrap(), matrix![[-2., 1.], [1.5, -0.5]].unwrap());

        let a = matrix![[2., 0., 1.], [1., 3., 2.], [1., 1., 2.]].unwrap();
        assert_close(&a.mul(&a.inverse().unwrap()).unwrap(), &Matrix::identity(3));

        assert_eq!(
            matrix![[1., 2.], [2., 4.]].unwrap().inverse(),
            Err(MathError::SingularMatrix)
        );
    }

    #[test]
    fn product() {
        let a = matrix![[1., 2., 3.], [4., 5., 6.]].unwrap();
        let b = matrix![[7., 8.], [9., 10.], [11., 12.]].unwrap();
        assert_eq!(a.mul(&b).unwrap(), matrix![[58., 64.], [139., 154.]].unwrap());
        assert!(matches!(a.mul(&a), Err(MathError::DimensionMismatch(_))));
    }

    #[test]
    fn integer_powers() {
        let m = matrix![[1., 1.], [0., 1.]].unwrap();
        assert_eq!(m.powi(5).unwrap(), matrix![[1., 5.], [0., 1.]].unwrap());
        assert_eq!(m.powi(0).unwrap(), Matrix::identity(2));
        assert_eq!(m.powi(1).unwrap(), m);

        let d = matrix![[2., 0.], [0., 4.]].unwrap();
        assert_eq!(d.powi(-1).unwrap(), matrix![[0.5, 0.], [0., 0.25]].unwrap());
        assert_eq!(d.powi(3).unwrap(), matrix![[8., 0.], [0., 64.]].unwrap());

        assert!(matches!(Matrix::zeros(2, 3).powi(2), Err(MathError::NotSquare { .. })));
    }

    #[test]
    fn integral_powers_past_i64_range() {
        let m = matrix![[1., 1.], [0., 1.]].unwrap();
        let p = m.pow_integral(1e19).unwrap();
        assert_eq!(p.get(0, 1).unwrap(), Scalar::Real(1e19));
        assert_eq!(p.get(1, 1).unwrap(), Scalar::Real(1.));

        let p = m.pow_integral(-1e19).unwrap();
        assert_eq!(p.get(0, 1).unwrap(), Scalar::Real(-1e19));

        assert_eq!(m.pow_integral(5.).unwrap(), m.powi(5).unwrap());
        assert_eq!(m.pow_integral(0.).unwrap(), Matrix::identity(2));
        assert!(matches!(m.pow_integral(0.5), Err(MathError::Unsupported(_))));
        assert!(matches!(m.pow_integral(f64::INFINITY), Err(MathError::Unsupported(_))));
        assert!(matches!(Matrix::zeros(2, 3).pow_integral(2.), Err(MathError::NotSquare { .. })));
    }

    #[test]
    fn norm_diag_trace() {
        let m = matrix![[1., 2.], [2., 4.]].unwrap();
        assert_eq!(m.norm(), 5.);
        assert_eq!(matrix![[complex(3., 4.)]].unwrap().norm(), 5.);

        let r = matrix![[1., 2., 3.], [4., 5., 6.]].unwrap();
        assert_eq!(r.diag_of(), vector![1., 5.]);
        assert_eq!(m.trace().unwrap(), Scalar::Real(5.));
        assert!(r.trace().is_err());
    }

    #[test]
    fn eigen_decomposition_is_not_implemented() {
        assert!(matches!(
            Matrix::identity(2).eigen_decomposition(),
            Err(MathError::NotImplemented(_))
        ));
    }

    #[test]
    fn display() {
        let m = matrix![[1., 2.], [3., 4.]].unwrap();
        assert_eq!(format!("{:.0}", m), "Matrix([1, 2], [3, 4])");
    }
}

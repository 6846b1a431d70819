use core::fmt;

use crate::error::{MathError, MathResult};
use crate::value::{Scalar, Variant};

/// Builds a [`Vector`] from anything convertible into a [`Scalar`]
///
/// ```
/// use math::{complex, vector};
/// let v = vector![1.0, complex(0.0, 1.0)];
/// assert_eq!(v.size(), 2);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vec::Vector::new(::std::vec::Vec::new())
    };
    ($($e: expr),+ $(,)?) => {
        $crate::vec::Vector::new(::std::vec![$($crate::value::Scalar::from($e)),+])
    };
}

/// Immutable vector of real and complex entries
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    variant: Variant,
    elements: Vec<Scalar>,
}

impl Vector {
    #[inline]
    pub fn new(elements: Vec<Scalar>) -> Vector {
        Vector {
            variant: Variant::of(&elements),
            elements,
        }
    }

    /// Like [`Vector::new`] but checks the entry count against `len`
    pub fn with_len(len: usize, elements: Vec<Scalar>) -> MathResult<Vector> {
        if elements.len() != len {
            return Err(MathError::dimension_mismatch(format!(
                "{} is not equal to {}", len, elements.len()
            )));
        }
        Ok(Vector::new(elements))
    }

    #[inline]
    pub fn from_scalar(len: usize, a: Scalar) -> Vector {
        Vector::new(vec![a; len])
    }

    #[inline]
    pub fn from_slice(a: &[f64]) -> Vector {
        a.iter().copied().map(Scalar::Real).collect()
    }

    #[inline]
    pub fn zeros(len: usize) -> Vector {
        Vector::from_scalar(len, Scalar::ZERO)
    }

    #[inline]
    pub fn ones(len: usize) -> Vector {
        Vector::from_scalar(len, Scalar::ONE)
    }

    /// `index`-th standard basis vector of length `len`
    pub fn basis(len: usize, index: usize) -> MathResult<Vector> {
        Vector::zeros(len).set(index, Scalar::ONE)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn elements(&self) -> &[Scalar] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.elements.iter()
    }

    pub fn get(&self, i: usize) -> MathResult<Scalar> {
        self.elements
            .get(i)
            .copied()
            .ok_or_else(|| MathError::out_of_bounds(i, self.size()))
    }

    /// Copy of `self` with entry `i` replaced
    ///
    /// Setting a complex entry into a real vector only changes the tag,
    /// the other entries stay as they are.
    pub fn set(&self, i: usize, value: impl Into<Scalar>) -> MathResult<Vector> {
        if i >= self.size() {
            return Err(MathError::out_of_bounds(i, self.size()));
        }
        let mut elements = self.elements.clone();
        elements[i] = value.into();
        Ok(Vector::new(elements))
    }

    /// `Σ |e|²`
    pub fn norm2(&self) -> f64 {
        self.iter().map(|e| e.norm2()).sum()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    /// Scales every entry by `1 / norm`; a zero vector comes back unchanged
    pub fn unit(&self) -> Vector {
        let norm = self.norm();
        if norm == 0.0 {
            return self.clone();
        }
        self.map(|e| e / Scalar::Real(norm))
    }

    /// Inner product accumulated into a real
    ///
    /// Only the complex side's real part meets a real entry, and two
    /// complex entries pair real with real and imag with imag.
    pub fn dot(&self, b: &Vector) -> MathResult<f64> {
        self.check_len(b, "dot")?;
        let sum = self.iter().zip(b.iter()).fold(0.0, |sum, (x, y)| match (*x, *y) {
            (Scalar::Real(x), Scalar::Real(y)) => sum + x * y,
            (Scalar::Real(x), Scalar::Complex(y)) => sum + x * y.real + x * y.imag,
            (Scalar::Complex(x), Scalar::Real(y)) => sum + x.real * y,
            (Scalar::Complex(x), Scalar::Complex(y)) => sum + x.real * y.real + x.imag * y.imag,
        });
        Ok(sum)
    }

    /// Signed area spanned by two 2-vectors
    pub fn cross2d(&self, b: &Vector) -> MathResult<Scalar> {
        let (a, b) = match (self.elements(), b.elements()) {
            ([a0, a1], [b0, b1]) => ([*a0, *a1], [*b0, *b1]),
            _ => {
                return Err(MathError::dimension_mismatch(format!(
                    "cross2d needs two vectors of length 2, got {} and {}",
                    self.size(), b.size()
                )))
            }
        };
        Ok(a[0] * b[1] - a[1] * b[0])
    }

    pub fn cross3d(&self, b: &Vector) -> MathResult<Vector> {
        let (a, b) = match (self.elements(), b.elements()) {
            ([a0, a1, a2], [b0, b1, b2]) => ([*a0, *a1, *a2], [*b0, *b1, *b2]),
            _ => {
                return Err(MathError::dimension_mismatch(format!(
                    "cross3d needs two vectors of length 3, got {} and {}",
                    self.size(), b.size()
                )))
            }
        };
        Ok(Vector::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn map(&self, f: impl FnMut(Scalar) -> Scalar) -> Vector {
        self.iter().copied().map(f).collect()
    }

    /// Combines entries position by position; lengths must match
    pub fn zip_with(&self, b: &Vector, mut f: impl FnMut(Scalar, Scalar) -> Scalar) -> MathResult<Vector> {
        self.check_len(b, "elementwise operation")?;
        Ok(self.iter().zip(b.iter()).map(|(x, y)| f(*x, *y)).collect())
    }

    fn check_len(&self, b: &Vector, op: &str) -> MathResult<()> {
        if self.size() != b.size() {
            return Err(MathError::dimension_mismatch(format!(
                "{} on vectors of length {} and {}", op, self.size(), b.size()
            )));
        }
        Ok(())
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        write!(f, "Vector({})",
                self.iter()
                    .map(|e| format!("{:.prec$}", e, prec = prec))
                    .collect::<Vec<_>>()
                    .join(", "))
    }
}

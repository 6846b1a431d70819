use core::ops;
use core::fmt;

use crate::complex::Complex;
use crate::mat::Matrix;
use crate::vec::Vector;

/// Position of a value kind in the promotion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Real,
    Complex,
    Vector,
    Matrix,
}

impl Rank {
    /// Kind of the result of a mixed binary operation
    #[inline]
    pub fn promote(a: Rank, b: Rank) -> Rank {
        a.max(b)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Real => "Real",
            Rank::Complex => "Complex",
            Rank::Vector => "Vector",
            Rank::Matrix => "Matrix",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marks whether a container holds any complex entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Empty,
    Real,
    Complex,
}

impl Variant {
    /// Recomputes the tag from a container's entries
    ///
    /// Entries are not homogenized: a `Complex` container may still hold
    /// raw real entries next to complex ones.
    pub fn of<'a>(elements: impl IntoIterator<Item = &'a Scalar>) -> Variant {
        let mut variant = Variant::Empty;
        for e in elements {
            match e {
                Scalar::Complex(_) => return Variant::Complex,
                Scalar::Real(_) => variant = Variant::Real,
            }
        }
        variant
    }
}

/// Entry of a vector or matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Real(f64),
    Complex(Complex),
}

impl Scalar {
    pub const ZERO: Scalar = Scalar::Real(0.0);
    pub const ONE: Scalar = Scalar::Real(1.0);

    /// Real part; a real entry is its own real part
    #[inline]
    pub fn re(self) -> f64 {
        match self {
            Scalar::Real(x) => x,
            Scalar::Complex(z) => z.real,
        }
    }

    #[inline]
    pub fn im(self) -> f64 {
        match self {
            Scalar::Real(_) => 0.0,
            Scalar::Complex(z) => z.imag,
        }
    }

    #[inline]
    pub fn is_complex(self) -> bool {
        matches!(self, Scalar::Complex(_))
    }

    /// `|x|²`
    #[inline]
    pub fn norm2(self) -> f64 {
        match self {
            Scalar::Real(x) => x * x,
            Scalar::Complex(z) => z.norm2(),
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Scalar::Real(x) => x == 0.0,
            Scalar::Complex(z) => z.is_zero(),
        }
    }

    /// Field inverse
    #[inline]
    pub fn recip(self) -> Scalar {
        match self {
            Scalar::Real(x) => Scalar::Real(1.0 / x),
            Scalar::Complex(z) => Scalar::Complex(z.recip()),
        }
    }

    /// Field power; complex entries go through the polar form
    #[inline]
    pub fn powf(self, exponent: f64) -> Scalar {
        match self {
            Scalar::Real(x) => Scalar::Real(x.powf(exponent)),
            Scalar::Complex(z) => Scalar::Complex(z.powf(exponent)),
        }
    }

    /// Equality with a real and a complex of zero imaginary part
    /// comparing equal in either order
    pub fn coerced_eq(self, other: Scalar) -> bool {
        match (self, other) {
            (Scalar::Real(a), Scalar::Real(b)) => a == b,
            (Scalar::Real(a), Scalar::Complex(b)) | (Scalar::Complex(b), Scalar::Real(a)) => {
                a == b.real && b.imag == 0.0
            }
            (Scalar::Complex(a), Scalar::Complex(b)) => a == b,
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::ZERO
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Real(x)
    }
}

impl From<Complex> for Scalar {
    fn from(z: Complex) -> Self {
        Scalar::Complex(z)
    }
}

impl ops::Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Real(a), Scalar::Real(b)) => Scalar::Real(a + b),
            (Scalar::Real(a), Scalar::Complex(b)) | (Scalar::Complex(b), Scalar::Real(a)) => {
                Scalar::Complex(Complex::new(b.real + a, b.imag))
            }
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a + b),
        }
    }
}

impl ops::Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        self + (-rhs)
    }
}

impl ops::Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Real(a), Scalar::Real(b)) => Scalar::Real(a * b),
            (Scalar::Real(a), Scalar::Complex(b)) | (Scalar::Complex(b), Scalar::Real(a)) => {
                Scalar::Complex(b * a)
            }
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a * b),
        }
    }
}

impl ops::Div for Scalar {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Real(a), Scalar::Real(b)) => Scalar::Real(a / b),
            (Scalar::Real(a), Scalar::Complex(b)) => Scalar::Complex(b.recip() * a),
            (Scalar::Complex(a), Scalar::Real(b)) => Scalar::Complex(a / b),
            (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a / b),
        }
    }
}

impl ops::Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Real(x) => Scalar::Real(-x),
            Scalar::Complex(z) => Scalar::Complex(-z),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Real(x) => write!(f, "{:.prec$}", x, prec = f.precision().unwrap_or(3)),
            Scalar::Complex(z) => fmt::Display::fmt(z, f),
        }
    }
}

/// Any value the kernel operates on
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Real(f64),
    Complex(Complex),
    Vector(Vector),
    Matrix(Matrix),
}

impl Value {
    #[inline]
    pub fn rank(&self) -> Rank {
        match self {
            Value::Real(_) => Rank::Real,
            Value::Complex(_) => Rank::Complex,
            Value::Vector(_) => Rank::Vector,
            Value::Matrix(_) => Rank::Matrix,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Value::Complex(z) => Some(*z),
            _ => None,
        }
    }

    /// Real or complex payload as a container entry
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Real(x) => Some(Scalar::Real(*x)),
            Value::Complex(z) => Some(Scalar::Complex(*z)),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<Complex> for Value {
    fn from(z: Complex) -> Self {
        Value::Complex(z)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Real(x) => Value::Real(x),
            Scalar::Complex(z) => Value::Complex(z),
        }
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Real(x) => fmt::Display::fmt(&Scalar::Real(*x), f),
            Value::Complex(z) => fmt::Display::fmt(z, f),
            Value::Vector(v) => fmt::Display::fmt(v, f),
            Value::Matrix(m) => fmt::Display::fmt(m, f),
        }
    }
}

use crate::complex::Complex;
use crate::error::{MathError, MathResult};
use crate::mat::Matrix;
use crate::value::{Scalar, Value};

pub const EULER: f64 = std::f64::consts::E;

fn unsupported(op: &str, a: &Value, b: &Value) -> MathError {
    MathError::unsupported(format!("{} between {} and {}", op, a.rank(), b.rank()))
}

fn scalars(op: &str, a: &Value, b: &Value) -> MathResult<(Scalar, Scalar)> {
    match (a.as_scalar(), b.as_scalar()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(unsupported(op, a, b)),
    }
}

pub fn add(a: &Value, b: &Value) -> MathResult<Value> {
    let (x, y) = scalars("add", a, b)?;
    Ok((x + y).into())
}

pub fn sub(a: &Value, b: &Value) -> MathResult<Value> {
    let (x, y) = scalars("sub", a, b)?;
    Ok((x - y).into())
}

/// Scalar product, or the matrix product when both operands are matrices
pub fn mul(a: &Value, b: &Value) -> MathResult<Value> {
    if let (Value::Matrix(x), Value::Matrix(y)) = (a, b) {
        return Ok(x.mul(y)?.into());
    }
    let (x, y) = scalars("mul", a, b)?;
    Ok((x * y).into())
}

/// Scalar division; matrices are divided with `mul(a, inv(b))`
pub fn div(a: &Value, b: &Value) -> MathResult<Value> {
    let (x, y) = scalars("div", a, b)?;
    Ok((x / y).into())
}

pub fn inv(a: &Value) -> MathResult<Value> {
    match a {
        Value::Real(x) => Ok(Value::Real(1.0 / x)),
        Value::Complex(z) => Ok(Value::Complex(z.recip())),
        Value::Matrix(m) => Ok(m.inverse()?.into()),
        Value::Vector(_) => Err(MathError::unsupported("inverse of a vector")),
    }
}

pub fn neg(a: &Value) -> Value {
    match a {
        Value::Real(x) => Value::Real(-x),
        Value::Complex(z) => Value::Complex(-*z),
        Value::Vector(v) => Value::Vector(v.map(|e| -e)),
        Value::Matrix(m) => Value::Matrix(m.map(|e| -e)),
    }
}

/// `base^exponent`
///
/// Complex bases use the polar form. A matrix base must be square; integer
/// exponents are computed by repeated squaring (negative ones invert
/// first), anything else goes through the eigenbasis.
pub fn pow(base: &Value, exponent: f64) -> MathResult<Value> {
    match base {
        Value::Real(x) => Ok(Value::Real(x.powf(exponent))),
        Value::Complex(z) => Ok(Value::Complex(z.powf(exponent))),
        Value::Matrix(m) => {
            if !m.is_square() {
                return Err(MathError::NotSquare { rows: m.rows(), cols: m.cols() });
            }
            if exponent.fract() == 0.0 {
                Ok(m.pow_integral(exponent)?.into())
            } else {
                Ok(spectral(m, |l| l.powf(exponent))?.into())
            }
        }
        Value::Vector(_) => Err(MathError::unsupported("power of a vector")),
    }
}

/// `n`-th root
pub fn nrt(value: &Value, n: f64) -> MathResult<Value> {
    pow(value, 1.0 / n)
}

pub fn sqrt(value: &Value) -> MathResult<Value> {
    nrt(value, 2.0)
}

/// Natural exponential
pub fn exp(x: &Value) -> MathResult<Value> {
    match x {
        Value::Real(x) => Ok(Value::Real(x.exp())),
        Value::Complex(z) => Ok(Value::Complex(z.exp())),
        Value::Matrix(m) => Ok(spectral(m, scalar_exp)?.into()),
        Value::Vector(_) => Err(MathError::unsupported("exponential of a vector")),
    }
}

/// `base^x` for an arbitrary base
pub fn exp_base(x: &Value, base: &Value) -> MathResult<Value> {
    match (base, x) {
        (Value::Vector(_), _) | (_, Value::Vector(_)) => Err(unsupported("exp", base, x)),
        (Value::Real(b), Value::Real(x)) => Ok(Value::Real(b.powf(*x))),
        (Value::Real(b), Value::Complex(z)) => {
            Ok(Complex::from_mag_angle(b.powf(z.real), z.imag * b.ln()).into())
        }
        (Value::Complex(b), Value::Real(x)) => Ok(b.powf(*x).into()),
        (Value::Complex(b), Value::Complex(z)) => Ok((*z * b.ln()).exp().into()),
        (Value::Matrix(_), Value::Real(x)) => pow(base, *x),
        (Value::Matrix(_), Value::Complex(_)) => {
            Err(MathError::not_implemented("matrix logarithm"))
        }
        (Value::Matrix(_), Value::Matrix(_)) => Err(unsupported("exp", base, x)),
        (Value::Real(b), Value::Matrix(m)) => {
            let ln_b = Scalar::Real(b.ln());
            Ok(spectral(m, |l| scalar_exp(l * ln_b))?.into())
        }
        (Value::Complex(b), Value::Matrix(m)) => {
            let ln_b = Scalar::Complex(b.ln());
            Ok(spectral(m, |l| scalar_exp(l * ln_b))?.into())
        }
    }
}

/// Natural logarithm, principal branch for complex values
pub fn log(x: &Value) -> MathResult<Value> {
    match x {
        Value::Real(x) => Ok(Value::Real(x.ln())),
        Value::Complex(z) => Ok(Value::Complex(z.ln())),
        Value::Matrix(m) => Ok(spectral(m, scalar_ln)?.into()),
        Value::Vector(_) => Err(MathError::unsupported("logarithm of a vector")),
    }
}

/// `ln(x) / ln(base)`
pub fn log_base(x: &Value, base: &Value) -> MathResult<Value> {
    match (base, x) {
        (Value::Matrix(_), _) => Err(MathError::unsupported("matrix as logarithm base")),
        (Value::Vector(_), _) | (_, Value::Vector(_)) => Err(unsupported("log", base, x)),
        (Value::Real(b), Value::Real(x)) => Ok(Value::Real(x.ln() / b.ln())),
        (Value::Real(b), Value::Complex(z)) => Ok((z.ln() / b.ln()).into()),
        (Value::Complex(b), Value::Real(_) | Value::Complex(_)) => {
            div(&log(x)?, &Value::Complex(b.ln()))
        }
        (Value::Real(b), Value::Matrix(m)) => {
            let ln_b = Scalar::Real(b.ln());
            Ok(spectral(m, |l| scalar_ln(l) / ln_b)?.into())
        }
        (Value::Complex(b), Value::Matrix(m)) => {
            let ln_b = Scalar::Complex(b.ln());
            Ok(spectral(m, |l| scalar_ln(l) / ln_b)?.into())
        }
    }
}

/// Structural equality where a real equals a complex with zero imaginary
/// part. Values of different kinds or shapes are simply unequal.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Vector(x), Value::Vector(y)) => {
            x.size() == y.size() && x.iter().zip(y.iter()).all(|(p, q)| p.coerced_eq(*q))
        }
        (Value::Matrix(x), Value::Matrix(y)) => {
            x.rows() == y.rows()
                && x.cols() == y.cols()
                && x.cells()
                    .iter()
                    .flatten()
                    .zip(y.cells().iter().flatten())
                    .all(|(p, q)| p.coerced_eq(*q))
        }
        _ => match (a.as_scalar(), b.as_scalar()) {
            (Some(x), Some(y)) => x.coerced_eq(y),
            _ => false,
        },
    }
}

fn scalar_exp(s: Scalar) -> Scalar {
    match s {
        Scalar::Real(x) => Scalar::Real(x.exp()),
        Scalar::Complex(z) => Scalar::Complex(z.exp()),
    }
}

fn scalar_ln(s: Scalar) -> Scalar {
    match s {
        Scalar::Real(x) => Scalar::Real(x.ln()),
        Scalar::Complex(z) => Scalar::Complex(z.ln()),
    }
}

/// Applies `f` to a square matrix through its eigenbasis, `V·f(Λ)·V⁻¹`
fn spectral(m: &Matrix, f: impl Fn(Scalar) -> Scalar) -> MathResult<Matrix> {
    if !m.is_square() {
        return Err(MathError::NotSquare { rows: m.rows(), cols: m.cols() });
    }
    let (values, vectors) = m.eigen_decomposition()?;
    let mapped: Vec<Scalar> = values.iter().map(|&l| f(l)).collect();
    let d = Matrix::diag(mapped.len(), &mapped)?;
    vectors.mul(&d)?.mul(&vectors.inverse()?)
}

use crate::error::{MathError, MathResult};
use crate::field;
use crate::value::{Scalar, Value};

/// How one elementwise operator treats each operand pairing
struct Rule {
    name: &'static str,
    /// Component operator for top-level scalar pairs
    component: fn(f64, f64) -> f64,
    /// Entry operator when a scalar is broadcast over a container
    broadcast: fn(Scalar, Scalar) -> Scalar,
    /// Entry operator between two containers
    pairwise: fn(Scalar, Scalar) -> Scalar,
}

const ADD: Rule = Rule {
    name: "add",
    component: |a, b| a + b,
    broadcast: |a, b| a + b,
    pairwise: |a, b| a + b,
};

const MUL: Rule = Rule {
    name: "mul",
    component: |a, b| a * b,
    broadcast: |a, b| a * b,
    pairwise: |a, b| a * b,
};

const DIV: Rule = Rule {
    name: "div",
    component: |a, b| a / b,
    broadcast: |a, b| a / b,
    pairwise: |a, b| componentwise(a, b, |x, y| x / y),
};

const REM: Rule = Rule {
    name: "mod",
    component: |a, b| a % b,
    broadcast: |a, b| componentwise(a, b, |x, y| x % y),
    pairwise: |a, b| componentwise(a, b, |x, y| x % y),
};

/// Applies `f` to real pairs directly and to each component when a
/// complex is involved
fn componentwise(a: Scalar, b: Scalar, f: impl Fn(f64, f64) -> f64) -> Scalar {
    match (a, b) {
        (Scalar::Real(a), Scalar::Real(b)) => Scalar::Real(f(a, b)),
        (Scalar::Real(a), Scalar::Complex(b)) => Scalar::Complex(b.map(|y| f(a, y))),
        (Scalar::Complex(a), Scalar::Real(b)) => Scalar::Complex(a.map(|x| f(x, b))),
        (Scalar::Complex(a), Scalar::Complex(b)) => Scalar::Complex(a.zip_with(b, &f)),
    }
}

fn apply(rule: &Rule, a: &Value, b: &Value) -> MathResult<Value> {
    let out = match (a, b) {
        (Value::Vector(x), Value::Vector(y)) => Value::Vector(x.zip_with(y, rule.pairwise)?),
        (Value::Matrix(x), Value::Matrix(y)) => Value::Matrix(x.zip_with(y, rule.pairwise)?),
        _ => match (a.as_scalar(), b.as_scalar()) {
            (Some(s), Some(t)) => componentwise(s, t, rule.component).into(),
            (None, Some(t)) => map_entries(a, |e| (rule.broadcast)(e, t)),
            (Some(s), None) => map_entries(b, |e| (rule.broadcast)(s, e)),
            (None, None) => {
                return Err(MathError::unsupported(format!(
                    "elementwise {} between {} and {}",
                    rule.name,
                    a.rank(),
                    b.rank()
                )));
            }
        },
    };
    Ok(out)
}

/// Applies `f` to every entry, a scalar being its own single entry
fn map_entries(v: &Value, mut f: impl FnMut(Scalar) -> Scalar) -> Value {
    match v {
        Value::Real(x) => f(Scalar::Real(*x)).into(),
        Value::Complex(z) => f(Scalar::Complex(*z)).into(),
        Value::Vector(x) => Value::Vector(x.map(f)),
        Value::Matrix(m) => Value::Matrix(m.map(f)),
    }
}

pub fn add(a: &Value, b: &Value) -> MathResult<Value> {
    apply(&ADD, a, b)
}

/// `add(a, neg(b))`
pub fn sub(a: &Value, b: &Value) -> MathResult<Value> {
    apply(&ADD, a, &field::neg(b))
}

pub fn mul(a: &Value, b: &Value) -> MathResult<Value> {
    apply(&MUL, a, b)
}

pub fn div(a: &Value, b: &Value) -> MathResult<Value> {
    apply(&DIV, a, b)
}

/// Truncated remainder; the result takes the sign of the dividend
pub fn rem(a: &Value, b: &Value) -> MathResult<Value> {
    apply(&REM, a, b)
}

/// Raises every entry to `exponent`
///
/// A complex value is raised component by component, while complex
/// entries of a container use the polar form.
pub fn pow(base: &Value, exponent: f64) -> Value {
    match base {
        Value::Real(x) => Value::Real(x.powf(exponent)),
        Value::Complex(z) => Value::Complex(z.map(|c| c.powf(exponent))),
        Value::Vector(v) => Value::Vector(v.map(|e| e.powf(exponent))),
        Value::Matrix(m) => Value::Matrix(m.map(|e| e.powf(exponent))),
    }
}

/// Reciprocal of every entry
///
/// A complex value is inverted component by component, while complex
/// entries of a container get the field inverse.
pub fn inv(a: &Value) -> Value {
    match a {
        Value::Real(x) => Value::Real(1.0 / x),
        Value::Complex(z) => Value::Complex(z.map(|c| 1.0 / c)),
        Value::Vector(v) => Value::Vector(v.map(Scalar::recip)),
        Value::Matrix(m) => Value::Matrix(m.map(Scalar::recip)),
    }
}

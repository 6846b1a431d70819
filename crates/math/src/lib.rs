pub mod error;
pub mod value;
pub mod complex;
pub mod vec;
pub mod mat;
pub mod el;
pub mod field;

pub use complex::{complex, Complex};
pub use error::{MathError, MathResult};
pub use field::{add, div, equals, exp, exp_base, inv, log, log_base, mul, neg, nrt, pow, sqrt, sub, EULER};
pub use mat::Matrix;
pub use value::{Rank, Scalar, Value, Variant};
pub use vec::Vector;

/// Binds the first operand of a two-operand function
///
/// `partial(op, a)(&b)` behaves exactly like `op(&a, &b)`.
///
/// ```
/// use math::{el, partial, Value};
/// let double = partial(el::mul, 2.0);
/// assert_eq!(double(&Value::Real(21.0)), Ok(Value::Real(42.0)));
/// ```
pub fn partial<T>(op: impl Fn(&Value, &Value) -> T, a: impl Into<Value>) -> impl Fn(&Value) -> T {
    let a = a.into();
    move |b| op(&a, b)
}

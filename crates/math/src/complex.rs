use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};

macro_rules! complex_op_impl {
    ($trait: ident, $func: ident) => {
        impl ops::$trait<Complex> for Complex {
            type Output = Complex;

            #[inline]
            fn $func(self, rhs: Complex) -> Complex {
                Complex {
                    real: ops::$trait::$func(self.real, rhs.real),
                    imag: ops::$trait::$func(self.imag, rhs.imag),
                }
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident) => {
        impl ops::$trait<f64> for Complex {
            type Output = Complex;

            #[inline]
            fn $func(self, rhs: f64) -> Complex {
                Complex {
                    real: ops::$trait::$func(self.real, rhs),
                    imag: ops::$trait::$func(self.imag, rhs),
                }
            }
        }
    }
}

/// Complex number `real + imag·i`
///
/// `#[repr(C)]` and `Pod`, so slices of it can be cast straight into
/// upload buffers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

/// Shorthand for [`Complex::new`]
#[inline]
pub fn complex(real: f64, imag: f64) -> Complex {
    Complex::new(real, imag)
}

impl Complex {
    #[inline]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Builds `m·cos θ + m·sin θ·i`
    #[inline]
    pub fn from_mag_angle(magnitude: f64, angle: f64) -> Self {
        Self {
            real: magnitude * angle.cos(),
            imag: magnitude * angle.sin(),
        }
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Also known as the argument, `atan2(imag, real)`
    #[inline]
    pub fn phase(self) -> f64 {
        self.imag.atan2(self.real)
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// `real² + imag²`
    #[inline]
    pub fn norm2(self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.real == 0.0 && self.imag == 0.0
    }

    /// Field inverse, `conj(z) / |z|²`
    #[inline]
    pub fn recip(self) -> Self {
        let d = self.norm2();
        Self {
            real: self.real / d,
            imag: -self.imag / d,
        }
    }

    /// `z^e` through the polar form
    pub fn powf(self, exponent: f64) -> Self {
        Self::from_mag_angle(
            self.magnitude().powf(exponent),
            self.phase() * exponent,
        )
    }

    /// `e^a·(cos b + i sin b)`
    pub fn exp(self) -> Self {
        Self::from_mag_angle(self.real.exp(), self.imag)
    }

    /// Principal logarithm, `ln|z| + i·arg(z)` with `arg ∈ (−π, π]`
    pub fn ln(self) -> Self {
        let arg = self.phase();
        let arg = if arg == -std::f64::consts::PI { std::f64::consts::PI } else { arg };
        Self {
            real: self.magnitude().ln(),
            imag: arg,
        }
    }

    /// Applies `f` to both components independently
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            real: f(self.real),
            imag: f(self.imag),
        }
    }

    /// Pairs real with real and imag with imag
    #[inline]
    pub fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            real: f(self.real, rhs.real),
            imag: f(self.imag, rhs.imag),
        }
    }

    #[inline]
    pub fn to_slice(self) -> [f64; 2] {
        [self.real, self.imag]
    }
}

complex_op_impl!(Add, add);
complex_op_impl!(Sub, sub);

scalar_op_impl!(Mul, mul);
scalar_op_impl!(Div, div);

impl ops::Mul<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            real: self.real * rhs.real - self.imag * rhs.imag,
            imag: self.real * rhs.imag + self.imag * rhs.real,
        }
    }
}

impl ops::Div<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        let d = rhs.norm2();
        Complex {
            real: (self.real * rhs.real + self.imag * rhs.imag) / d,
            imag: (self.imag * rhs.real - self.real * rhs.imag) / d,
        }
    }
}

impl ops::Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

impl ops::Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        let sign = if self.imag.is_sign_negative() { '-' } else { '+' };
        write!(f, "{:.prec$}{}{:.prec$}i", self.real, sign, self.imag.abs(), prec = prec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn magnitude_and_phase() {
        assert_eq!(complex(3., 4.).magnitude(), 5.);
        assert_eq!(complex(-3., -4.).magnitude(), 5.);
        assert_abs_diff_eq!(complex(0., 1.).phase(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(complex(1., 1.).phase(), FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(complex(-1., 0.).phase(), PI);
        assert_eq!(complex(0., 0.).phase(), 0.);
    }

    #[test]
    fn conj_twice_is_identity() {
        let z = complex(3., -4.);
        assert_eq!(z.conj(), complex(3., 4.));
        assert_eq!(z.conj().conj(), z);
        assert_eq!(z * z.conj(), complex(z.norm2(), 0.));
    }

    #[test]
    fn mag_angle_round_trip() {
        let z = Complex::from_mag_angle(2., FRAC_PI_4);
        assert_abs_diff_eq!(z.magnitude(), 2., epsilon = 1e-12);
        assert_abs_diff_eq!(z.phase(), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn field_algebra() {
        assert_eq!(complex(1., 2.) * complex(3., 4.), complex(-5., 10.));
        assert_eq!(complex(-5., 10.) / complex(3., 4.), complex(1., 2.));
        assert_eq!(complex(1., 2.) + complex(3., 4.), complex(4., 6.));
        assert_eq!(2. * complex(1., -2.), complex(2., -4.));

        let z = complex(2., 4.);
        let one = z * z.recip();
        assert_abs_diff_eq!(one.real, 1., epsilon = 1e-12);
        assert_abs_diff_eq!(one.imag, 0., epsilon = 1e-12);
    }

    #[test]
    fn ln_folds_negative_pi() {
        let z = complex(-1., -0.0).ln();
        assert_eq!(z.imag, PI);
        assert_eq!(z.real, 0.);
    }

    #[test]
    fn exp_of_i_pi_is_minus_one() {
        let z = complex(0., PI).exp();
        assert_abs_diff_eq!(z.real, -1., epsilon = 1e-12);
        assert_abs_diff_eq!(z.imag, 0., epsilon = 1e-12);
    }

    #[test]
    fn display_uses_precision() {
        assert_eq!(format!("{}", complex(1., -2.)), "1.000-2.000i");
        assert_eq!(format!("{:.1}", complex(0.26, 3.)), "0.3+3.0i");
    }
}

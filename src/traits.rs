use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for values an integrand may return.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point values: abscissas, limits, tolerances
/// and error estimates.
///
/// Implies `QuadScalar<Real = Self>` since real floats are their own real type.
pub trait FloatScalar: Scalar + Float + QuadScalar<Real = Self> {}

impl<T: Scalar + Float + QuadScalar<Real = T>> FloatScalar for T {}

/// Convert an `f64` constant into `T`.
///
/// Every `FloatScalar` can represent (a rounding of) any finite `f64`.
#[inline]
pub(crate) fn c<T: FloatScalar>(x: f64) -> T {
    T::from(x).unwrap()
}

/// Trait for integrand values accepted by the extrapolating integrators.
///
/// Covers both real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`, with the `complex` feature). Limits and error estimates
/// always live in [`QuadScalar::Real`].
pub trait QuadScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Real part.
    fn re(self) -> Self::Real;

    /// `true` when no component is NaN or infinite.
    fn is_finite_value(self) -> bool;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;

    /// Multiply by a real factor.
    #[inline]
    fn scale(self, r: Self::Real) -> Self {
        self * Self::from_real(r)
    }
}

macro_rules! impl_quad_scalar_real {
    ($($t:ty),*) => {
        $(
            impl QuadScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn is_finite_value(self) -> bool { Float::is_finite(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_quad_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> QuadScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}

use std::{
    f32::consts::TAU,
    hash::{Hash, Hasher},
};

use ordered_float::OrderedFloat;

use crate::{error::FunctionError, function::core::FunctionResult};

/// A primitive scalar formula.
///
/// Every term maps an input `x` to a single `f32`. Terms are the payload of a
/// [`Function`](crate::function::core::Function); they never combine with each
/// other directly, that is the job of the
/// [`Combinator`](crate::function::combinator::Combinator) attached to them.
///
/// Equality and hashing compare parameters through [`OrderedFloat`], so two
/// terms holding `NaN` in the same place are equal.
#[derive(Debug, Clone, Copy)]
pub enum Term {
    /// `(x * scale + offset) * slope`
    Linear {
        /// Factor applied to the input.
        scale:  f32,
        /// Added after scaling.
        offset: f32,
        /// Factor applied to the shifted input.
        slope:  f32,
    },
    /// `amplitude * (x * scale + offset) ^ exp`
    Power {
        /// Factor applied to the input.
        scale:     f32,
        /// Added after scaling.
        offset:    f32,
        /// Factor applied to the power.
        amplitude: f32,
        /// The exponent.
        exp:       f32,
    },
    /// `amplitude * sin(2π * (x * periods - offset))`
    Sine {
        /// Number of full periods per unit of input.
        periods:   f32,
        /// Phase shift, in periods.
        offset:    f32,
        /// Peak value.
        amplitude: f32,
    },
    /// A fixed value, independent of the input.
    Constant {
        /// The value returned for every input.
        value: f32,
    },
    /// Placeholder for "no function". Carries no payload and cannot be
    /// evaluated.
    Void,
}

impl Term {
    /// Evaluates the term at `x`.
    ///
    /// Floating-point special values are returned as they arise: a negative
    /// base raised to a fractional exponent yields `NaN`, for instance.
    ///
    /// # Errors
    /// Returns [`FunctionError::InvalidOperand`] for [`Term::Void`].
    ///
    /// # Example
    /// ```
    /// use fnchain::{error::FunctionError, function::term::Term};
    ///
    /// let line = Term::Linear { scale:  2.0,
    ///                           offset: 1.0,
    ///                           slope:  3.0, };
    /// assert_eq!(line.sample(4.0).unwrap(), 27.0);
    ///
    /// assert_eq!(Term::Void.sample(0.0), Err(FunctionError::InvalidOperand));
    /// ```
    pub fn sample(&self, x: f32) -> FunctionResult<f32> {
        match *self {
            Self::Linear { scale, offset, slope } => Ok((x * scale + offset) * slope),
            Self::Power { scale,
                          offset,
                          amplitude,
                          exp, } => Ok(amplitude * (x * scale + offset).powf(exp)),
            Self::Sine { periods,
                         offset,
                         amplitude, } => Ok(amplitude * (TAU * (x * periods - offset)).sin()),
            Self::Constant { value } => Ok(value),
            Self::Void => Err(FunctionError::InvalidOperand),
        }
    }

    /// Returns `true` for the [`Term::Void`] placeholder.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Kind tag plus parameters, padded with zeros.
    fn key(&self) -> (u8, [OrderedFloat<f32>; 4]) {
        let o = OrderedFloat;
        match *self {
            Self::Linear { scale, offset, slope } => (0, [o(scale), o(offset), o(slope), o(0.0)]),
            Self::Power { scale,
                          offset,
                          amplitude,
                          exp, } => (1, [o(scale), o(offset), o(amplitude), o(exp)]),
            Self::Sine { periods,
                         offset,
                         amplitude, } => (2, [o(periods), o(offset), o(amplitude), o(0.0)]),
            Self::Constant { value } => (3, [o(value), o(0.0), o(0.0), o(0.0)]),
            Self::Void => (4, [o(0.0); 4]),
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear { scale, offset, slope } => write!(f, "(x*{scale} + {offset})*{slope}"),
            Self::Power { scale,
                          offset,
                          amplitude,
                          exp, } => write!(f, "{amplitude}*(x*{scale} + {offset})^{exp}"),
            Self::Sine { periods,
                         offset,
                         amplitude, } => write!(f, "{amplitude}*sin(2π(x*{periods} - {offset}))"),
            Self::Constant { value } => write!(f, "{value}"),
            Self::Void => write!(f, "void"),
        }
    }
}

use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::function::{core::FunctionResult, term::Term};

/// How a term's value is folded into the running accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Seeds the accumulator with the term's value. Only ever used by the
    /// first part of a function.
    Base,
    /// `accumulator * value`
    Multiply,
    /// `accumulator + value`
    Add,
    /// `accumulator - value`
    Subtract,
    /// `accumulator / value`
    Divide,
}

impl Combinator {
    /// Folds `value` into `accumulator`.
    ///
    /// Division by zero is not guarded and follows IEEE 754.
    ///
    /// # Example
    /// ```
    /// use fnchain::function::combinator::Combinator;
    ///
    /// assert_eq!(Combinator::Base.apply(7.0, 2.0), 2.0);
    /// assert_eq!(Combinator::Subtract.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Combinator::Divide.apply(1.0, 0.0), f32::INFINITY);
    /// ```
    #[must_use]
    pub const fn apply(self, accumulator: f32, value: f32) -> f32 {
        match self {
            Self::Base => value,
            Self::Multiply => accumulator * value,
            Self::Add => accumulator + value,
            Self::Subtract => accumulator - value,
            Self::Divide => accumulator / value,
        }
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Base => "=",
            Self::Multiply => "*",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Divide => "/",
        };
        write!(f, "{symbol}")
    }
}

/// One stored element of a function.
#[derive(Debug, Clone, Copy)]
pub enum Part {
    /// Evaluates `term` and folds it into the accumulator with `combinator`.
    Term {
        /// How the term's value joins the accumulator.
        combinator: Combinator,
        /// The formula to evaluate.
        term:       Term,
    },
    /// Restricts the accumulator to `[low, high]`. Evaluates no term.
    Clamp {
        /// Lower bound.
        low:  f32,
        /// Upper bound.
        high: f32,
    },
}

impl Part {
    /// Applies this part to the accumulator for input `x`.
    ///
    /// A clamp computes `max(low, min(high, accumulator))`, so inverted bounds
    /// (`low > high`) always produce `low`. A `NaN` accumulator passes through
    /// a clamp unchanged.
    ///
    /// # Errors
    /// Returns [`FunctionError::InvalidOperand`](crate::error::FunctionError)
    /// if the part holds a void term.
    ///
    /// # Example
    /// ```
    /// use fnchain::function::{
    ///     combinator::{Combinator, Part},
    ///     term::Term,
    /// };
    ///
    /// let add = Part::Term { combinator: Combinator::Add,
    ///                        term:       Term::Constant { value: 2.0 }, };
    /// assert_eq!(add.fold(3.0, 0.0).unwrap(), 5.0);
    ///
    /// let clamp = Part::Clamp { low:  -1.0,
    ///                           high: 1.0, };
    /// assert_eq!(clamp.fold(5.0, 0.0).unwrap(), 1.0);
    /// assert!(clamp.fold(f32::NAN, 0.0).unwrap().is_nan());
    /// ```
    pub fn fold(&self, accumulator: f32, x: f32) -> FunctionResult<f32> {
        match *self {
            Self::Term { combinator, term } => Ok(combinator.apply(accumulator, term.sample(x)?)),
            // `f32::min`/`max` discard NaN, so it has to skip the bounds.
            Self::Clamp { .. } if accumulator.is_nan() => Ok(accumulator),
            // Not `f32::clamp`: that panics when `low > high`.
            Self::Clamp { low, high } => Ok(low.max(high.min(accumulator))),
        }
    }

    /// Returns a copy of this part folded in with `combinator` instead of its
    /// current one. Clamp parts carry no combinator and are returned as-is.
    #[must_use]
    pub const fn with_combinator(self, combinator: Combinator) -> Self {
        match self {
            Self::Term { term, .. } => Self::Term { combinator, term },
            Self::Clamp { .. } => self,
        }
    }

    /// Returns `true` if the part holds a void term.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        match self {
            Self::Term { term, .. } => term.is_void(),
            Self::Clamp { .. } => false,
        }
    }
}

impl PartialEq for Part {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Term { combinator: a, term: s }, Self::Term { combinator: b, term: t }) => {
                a == b && s == t
            },
            (Self::Clamp { low: a, high: b }, Self::Clamp { low: c, high: d }) => {
                OrderedFloat(*a) == OrderedFloat(*c) && OrderedFloat(*b) == OrderedFloat(*d)
            },
            _ => false,
        }
    }
}

impl Eq for Part {}

impl Hash for Part {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Term { combinator, term } => {
                combinator.hash(state);
                term.hash(state);
            },
            Self::Clamp { low, high } => {
                OrderedFloat(*low).hash(state);
                OrderedFloat(*high).hash(state);
            },
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Term { combinator: Combinator::Base,
                         term, } => write!(f, "{term}"),
            Self::Term { combinator, term } => write!(f, "{combinator} {term}"),
            Self::Clamp { low, high } => write!(f, "clamped to [{low}, {high}]"),
        }
    }
}

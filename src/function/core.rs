use std::hash::{Hash, Hasher};

use log::trace;

use crate::{
    error::FunctionError,
    function::{
        combinator::{Combinator, Part},
        term::Term,
    },
};

/// Result type used by function operations.
///
/// Every fallible operation returns either a value of type `T` or a
/// [`FunctionError`] describing the violated precondition.
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Maximum number of parts a single function can hold.
pub const CAPACITY: usize = 4;

/// A scalar function of one input.
///
/// A function is an ordered, fixed-capacity sequence of [`Part`]s, evaluated
/// left to right into a single `f32`. It is created from one primitive term
/// and can then be extended with clamps and combined with other functions
/// until [`CAPACITY`] parts are in use.
///
/// `Function` is `Copy`. Operations that extend a function consume it by value
/// and return the extended copy, so values held elsewhere never change.
///
/// ## Invariants
/// - It holds between 1 and [`CAPACITY`] parts.
/// - The first part always folds with [`Combinator::Base`].
///
/// # Example
/// ```
/// use fnchain::function::core::Function;
///
/// let f = Function::linear(1.0, 0.0, 2.0).multiply(Function::constant(3.0))
///                                        .unwrap();
///
/// assert_eq!(f.sample(5.0).unwrap(), 30.0);
/// ```
#[derive(Clone, Copy)]
pub struct Function {
    /// Storage for all parts. Slots at `len` and beyond are never read.
    parts: [Part; CAPACITY],
    len:   usize,
}

impl Function {
    /// Creates a single-part function seeded by `term`.
    ///
    /// # Example
    /// ```
    /// use fnchain::function::{core::Function, term::Term};
    ///
    /// let f = Function::from_term(Term::Constant { value: 4.0 });
    /// assert_eq!(f, Function::constant(4.0));
    /// ```
    #[must_use]
    pub const fn from_term(term: Term) -> Self {
        let base = Part::Term { combinator: Combinator::Base,
                                term };
        Self { parts: [base; CAPACITY],
               len:   1, }
    }

    /// Creates `(x * scale + offset) * slope`.
    #[must_use]
    pub const fn linear(scale: f32, offset: f32, slope: f32) -> Self {
        Self::from_term(Term::Linear { scale, offset, slope })
    }

    /// Creates `amplitude * (x * scale + offset) ^ exp`.
    #[must_use]
    pub const fn power(scale: f32, offset: f32, amplitude: f32, exp: f32) -> Self {
        Self::from_term(Term::Power { scale,
                                      offset,
                                      amplitude,
                                      exp })
    }

    /// Creates `amplitude * sin(2π * (x * periods - offset))`.
    #[must_use]
    pub const fn sine(periods: f32, offset: f32, amplitude: f32) -> Self {
        Self::from_term(Term::Sine { periods,
                                     offset,
                                     amplitude })
    }

    /// Creates a function that returns `value` for every input.
    #[must_use]
    pub const fn constant(value: f32) -> Self {
        Self::from_term(Term::Constant { value })
    }

    /// Creates the "no function" placeholder.
    ///
    /// A void function can be stored and inspected, but sampling, clamping or
    /// combining it fails with [`FunctionError::InvalidOperand`]. Check
    /// [`Function::is_void`] before using one.
    #[must_use]
    pub const fn void() -> Self {
        Self::from_term(Term::Void)
    }

    /// Evaluates the function at `x`.
    ///
    /// The accumulator starts at `0.0` and every part is folded into it in
    /// stored order. Division by zero and other floating-point edge cases
    /// yield infinities or `NaN`; they are not errors.
    ///
    /// # Errors
    /// Returns [`FunctionError::InvalidOperand`] if the function holds a void
    /// term.
    ///
    /// # Example
    /// ```
    /// use fnchain::{error::FunctionError, function::core::Function};
    ///
    /// let f = Function::sine(1.0, 0.0, 10.0).clamp(-5.0, 5.0).unwrap();
    /// assert_eq!(f.sample(0.25).unwrap(), 5.0);
    ///
    /// assert_eq!(Function::void().sample(0.0), Err(FunctionError::InvalidOperand));
    /// ```
    pub fn sample(&self, x: f32) -> FunctionResult<f32> {
        let value = self.parts()
                        .iter()
                        .try_fold(0.0, |accumulator, part| part.fold(accumulator, x))?;
        trace!("sampled {self} at {x}: {value}");
        Ok(value)
    }

    /// Returns the live parts in evaluation order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts[..self.len]
    }

    /// Returns the number of live parts, between 1 and [`CAPACITY`].
    #[must_use]
    pub const fn part_count(&self) -> usize {
        self.len
    }

    /// Returns `true` if any part holds a void term.
    ///
    /// # Example
    /// ```
    /// use fnchain::function::core::Function;
    ///
    /// assert!(Function::void().is_void());
    /// assert!(!Function::constant(0.0).is_void());
    /// ```
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.parts().iter().any(Part::is_void)
    }

    /// Fails with [`FunctionError::InvalidOperand`] if the function is void.
    pub(super) fn ensure_operand(&self) -> FunctionResult<()> {
        if self.is_void() {
            return Err(FunctionError::InvalidOperand);
        }
        Ok(())
    }

    /// Fails with [`FunctionError::CapacityExceeded`] unless `additional`
    /// more parts fit.
    pub(super) const fn reserve(&self, additional: usize) -> FunctionResult<()> {
        let requested = self.len + additional;
        if requested > CAPACITY {
            return Err(FunctionError::CapacityExceeded { capacity: CAPACITY,
                                                         requested });
        }
        Ok(())
    }

    /// Appends `part`. Callers must [`reserve`](Self::reserve) first.
    pub(super) fn append(&mut self, part: Part) {
        self.parts[self.len] = part;
        self.len += 1;
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parts() == other.parts()
    }
}

impl Eq for Function {}

impl Hash for Function {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts().hash(state);
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function").field("parts", &self.parts()).finish()
    }
}

impl std::fmt::Display for Function {
    /// Writes the parts left-nested in evaluation order, e.g.
    /// `((x*1 + 0)*2 * 3) clamped to [-5, 5]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last = self.len - 1;

        for _ in 1..last {
            write!(f, "(")?;
        }

        for (index, part) in self.parts().iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{part}")?;

            if index > 0 && index < last {
                write!(f, ")")?;
            }
        }

        Ok(())
    }
}

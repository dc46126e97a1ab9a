use log::{debug, warn};

use crate::function::{
    combinator::{Combinator, Part},
    core::{Function, FunctionResult},
};

impl Function {
    /// Appends a clamp that restricts the result so far to `[low, high]`.
    ///
    /// The bounds are not validated. With `low > high` every sample past this
    /// point evaluates to `low`.
    ///
    /// # Errors
    /// - [`FunctionError::InvalidOperand`](crate::error::FunctionError) if the
    ///   function is void.
    /// - [`FunctionError::CapacityExceeded`](crate::error::FunctionError) if
    ///   all parts are already in use.
    ///
    /// # Example
    /// ```
    /// use fnchain::function::core::Function;
    ///
    /// let f = Function::linear(1.0, 0.0, 1.0).clamp(0.0, 1.0).unwrap();
    ///
    /// assert_eq!(f.sample(-3.0).unwrap(), 0.0);
    /// assert_eq!(f.sample(0.5).unwrap(), 0.5);
    /// assert_eq!(f.sample(3.0).unwrap(), 1.0);
    /// ```
    pub fn clamp(mut self, low: f32, high: f32) -> FunctionResult<Self> {
        self.ensure_operand()?;
        self.reserve(1)?;

        if low > high {
            warn!("clamp bounds are inverted ({low} > {high}); samples will always be {low}");
        }

        self.append(Part::Clamp { low, high });
        debug!("appended clamp [{low}, {high}], {} parts in use", self.part_count());

        Ok(self)
    }

    /// Multiplies the result of `self` by `other`.
    ///
    /// # Errors
    /// See [`Function::add`].
    pub fn multiply(self, other: Self) -> FunctionResult<Self> {
        self.combine(other, Combinator::Multiply)
    }

    /// Adds `other` to the result of `self`.
    ///
    /// `self` is evaluated completely first. `other`'s first term is then added
    /// to that intermediate result and `other`'s remaining parts continue from
    /// there, each with its own combinator.
    ///
    /// # Errors
    /// - [`FunctionError::InvalidOperand`](crate::error::FunctionError) if
    ///   either function is void.
    /// - [`FunctionError::CapacityExceeded`](crate::error::FunctionError) if
    ///   the two functions together hold more than
    ///   [`CAPACITY`](crate::function::core::CAPACITY) parts.
    ///
    /// # Example
    /// ```
    /// use fnchain::{
    ///     error::FunctionError,
    ///     function::core::{CAPACITY, Function},
    /// };
    ///
    /// let a = Function::linear(1.0, 0.0, 1.0);
    /// let b = Function::constant(2.0).clamp(0.0, 1.0).unwrap();
    ///
    /// // The clamp carried over from `b` now restricts `x + 2`.
    /// let f = a.add(b).unwrap();
    /// assert_eq!(f.sample(0.25).unwrap(), 1.0);
    ///
    /// let err = f.add(b).unwrap_err();
    /// assert_eq!(err,
    ///            FunctionError::CapacityExceeded { capacity:  CAPACITY,
    ///                                              requested: 5, });
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> FunctionResult<Self> {
        self.combine(other, Combinator::Add)
    }

    /// Subtracts `other` from the result of `self`.
    ///
    /// # Errors
    /// See [`Function::add`].
    pub fn subtract(self, other: Self) -> FunctionResult<Self> {
        self.combine(other, Combinator::Subtract)
    }

    /// Divides the result of `self` by `other`.
    ///
    /// Division by a zero-valued `other` yields an infinity (or `NaN` for
    /// `0 / 0`), not an error.
    ///
    /// # Errors
    /// See [`Function::add`].
    ///
    /// # Example
    /// ```
    /// use fnchain::function::core::Function;
    ///
    /// let f = Function::constant(1.0).divide(Function::constant(0.0)).unwrap();
    /// assert_eq!(f.sample(0.0).unwrap(), f32::INFINITY);
    /// ```
    pub fn divide(self, other: Self) -> FunctionResult<Self> {
        self.combine(other, Combinator::Divide)
    }

    /// Appends all of `other`'s parts, with its first part re-tagged to fold in
    /// with `combinator`.
    fn combine(mut self, other: Self, combinator: Combinator) -> FunctionResult<Self> {
        self.ensure_operand()?;
        other.ensure_operand()?;
        self.reserve(other.part_count())?;

        for (index, part) in other.parts().iter().enumerate() {
            if index == 0 {
                self.append(part.with_combinator(combinator));
            } else {
                self.append(*part);
            }
        }

        debug!("combined with {combinator} into {self}, {} parts in use",
               self.part_count());

        Ok(self)
    }
}

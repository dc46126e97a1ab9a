//! # fnchain
//!
//! fnchain represents scalar functions as a short, fixed-capacity chain of
//! primitive terms (linear, power, sine and constant). Each term is folded into
//! a running accumulator with multiply, add, subtract or divide, and the
//! result so far can be clamped. Functions are plain `Copy` values that are
//! built once and then sampled any number of times, e.g. once per animation
//! frame.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::descriptor::{StepSpec, TermSpec, build};

/// Command-line descriptors for terms and steps.
///
/// This module decodes compact descriptors such as `linear:1,0,2`,
/// `mul:constant:3` or `clamp:-5,5` and folds them into a `Function`. Each
/// descriptor names exactly one term or one step; there is no operator
/// grammar.
///
/// # Responsibilities
/// - Decodes term kinds and their parameter lists.
/// - Decodes combining and clamping steps.
/// - Builds a function by applying the steps in order.
pub mod descriptor;
/// Provides unified error types for function operations and descriptors.
///
/// This module defines the failures that building or sampling a function can
/// raise, together with the errors for malformed descriptors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (capacity, void operands,
///   descriptor decoding).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// The function engine.
///
/// This module declares the `Function` value type, its primitive terms and
/// combinators, and the operations that construct, extend, combine and sample
/// functions.
///
/// # Responsibilities
/// - Defines terms, combinators and the fixed-capacity part storage.
/// - Evaluates functions left to right into a single `f32`.
/// - Enforces the capacity limit and rejects void operands.
pub mod function;

/// Builds a function from descriptors and samples it at `x`.
///
/// `base` is a term descriptor and every entry of `steps` is a step
/// descriptor, applied in order.
///
/// # Errors
/// Returns an error if a descriptor is malformed, if the steps exceed the
/// function capacity, or if a void term would have to be evaluated.
///
/// # Examples
/// ```
/// use fnchain::evaluate;
///
/// // (5 * 1 + 0) * 2 * 3
/// let y = evaluate("linear:1,0,2", &["mul:constant:3"], 5.0).unwrap();
/// assert_eq!(y, 30.0);
///
/// // Example with an intentional error (too many steps).
/// let steps = ["add:constant:1", "add:constant:1", "add:constant:1", "add:constant:1"];
/// assert!(evaluate("constant:0", &steps, 0.0).is_err());
/// ```
pub fn evaluate(base: &str, steps: &[&str], x: f32) -> Result<f32, Box<dyn std::error::Error>> {
    let TermSpec(base) = base.parse()?;
    let steps = steps.iter()
                     .map(|step| step.parse::<StepSpec>())
                     .collect::<Result<Vec<_>, _>>()?;

    Ok(build(base, &steps)?.sample(x)?)
}

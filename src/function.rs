/// Primitive terms.
///
/// Defines the `Term` enum (linear, power, sine, constant and the void
/// placeholder) and evaluates a single term at a given input.
pub mod term;
/// Combinators and stored parts.
///
/// Defines how a term's value joins the running accumulator (`Combinator`)
/// and the `Part` type a function is made of, including the clamp part.
pub mod combinator;
/// The `Function` value type.
///
/// Contains the fixed-capacity part storage, the primitive constructors,
/// left-to-right evaluation, and equality, hashing and formatting.
///
/// # Responsibilities
/// - Keeps the part count between 1 and `CAPACITY`.
/// - Guarantees the first part always seeds the accumulator.
/// - Evaluates the parts in stored order without mutating the function.
pub mod core;
/// Clamping and combining functions.
///
/// Implements `clamp`, `multiply`, `add`, `subtract` and `divide`, all of
/// which check capacity and reject void operands before appending parts.
pub mod combine;

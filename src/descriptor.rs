use std::str::FromStr;

use crate::{
    error::DescriptorError,
    function::{
        core::{Function, FunctionResult},
        term::Term,
    },
};

/// A single term, decoded from `<kind>:<parameters>`.
///
/// Parameters are comma separated and must match the kind:
///
/// | Descriptor | Term |
/// |---|---|
/// | `linear:scale,offset,slope` | [`Term::Linear`] |
/// | `power:scale,offset,amplitude,exp` | [`Term::Power`] |
/// | `sine:periods,offset,amplitude` | [`Term::Sine`] |
/// | `constant:value` | [`Term::Constant`] |
/// | `void` | [`Term::Void`] |
///
/// # Example
/// ```
/// use fnchain::{descriptor::TermSpec, function::term::Term};
///
/// let TermSpec(term) = "sine:1,0.5,10".parse().unwrap();
/// assert_eq!(term,
///            Term::Sine { periods:   1.0,
///                         offset:    0.5,
///                         amplitude: 10.0, });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSpec(pub Term);

/// One step applied after the base term, decoded from `<op>:<argument>`.
///
/// `mul`, `add`, `sub` and `div` take a term descriptor; `clamp` takes
/// `low,high`. For example `mul:constant:3` or `clamp:-5,5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSpec {
    /// Multiply by a term.
    Multiply(Term),
    /// Add a term.
    Add(Term),
    /// Subtract a term.
    Subtract(Term),
    /// Divide by a term.
    Divide(Term),
    /// Clamp the result so far.
    Clamp {
        /// Lower bound.
        low:  f32,
        /// Upper bound.
        high: f32,
    },
}

impl FromStr for TermSpec {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "void" {
            return Ok(Self(Term::Void));
        }

        let (kind, params) = split_descriptor(s)?;
        let values = parse_params(params)?;

        let term = match kind {
            "linear" => {
                let [scale, offset, slope] = expect_params(kind, &values)?;
                Term::Linear { scale, offset, slope }
            },
            "power" => {
                let [scale, offset, amplitude, exp] = expect_params(kind, &values)?;
                Term::Power { scale,
                              offset,
                              amplitude,
                              exp }
            },
            "sine" => {
                let [periods, offset, amplitude] = expect_params(kind, &values)?;
                Term::Sine { periods,
                             offset,
                             amplitude }
            },
            "constant" => {
                let [value] = expect_params(kind, &values)?;
                Term::Constant { value }
            },
            "void" => {
                expect_params::<0>(kind, &values)?;
                Term::Void
            },
            _ => return Err(DescriptorError::UnknownKind { name: kind.to_string() }),
        };

        Ok(Self(term))
    }
}

impl FromStr for StepSpec {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, argument) = split_descriptor(s.trim())?;

        let step = match op {
            "mul" => Self::Multiply(argument.parse::<TermSpec>()?.0),
            "add" => Self::Add(argument.parse::<TermSpec>()?.0),
            "sub" => Self::Subtract(argument.parse::<TermSpec>()?.0),
            "div" => Self::Divide(argument.parse::<TermSpec>()?.0),
            "clamp" => {
                let [low, high] = expect_params(op, &parse_params(argument)?)?;
                Self::Clamp { low, high }
            },
            _ => return Err(DescriptorError::UnknownKind { name: op.to_string() }),
        };

        Ok(step)
    }
}

impl StepSpec {
    /// Applies the step to `function` through the matching function operation.
    ///
    /// # Errors
    /// Propagates the operation's capacity and void checks.
    pub fn apply(self, function: Function) -> FunctionResult<Function> {
        match self {
            Self::Multiply(term) => function.multiply(Function::from_term(term)),
            Self::Add(term) => function.add(Function::from_term(term)),
            Self::Subtract(term) => function.subtract(Function::from_term(term)),
            Self::Divide(term) => function.divide(Function::from_term(term)),
            Self::Clamp { low, high } => function.clamp(low, high),
        }
    }
}

/// Builds a function from a base term followed by steps, in order.
///
/// # Errors
/// Returns the first error raised by a step.
///
/// # Example
/// ```
/// use fnchain::descriptor::{StepSpec, TermSpec, build};
///
/// let TermSpec(base) = "linear:1,0,2".parse().unwrap();
/// let steps = ["mul:constant:3".parse::<StepSpec>().unwrap()];
///
/// let f = build(base, &steps).unwrap();
/// assert_eq!(f.sample(5.0).unwrap(), 30.0);
/// ```
pub fn build(base: Term, steps: &[StepSpec]) -> FunctionResult<Function> {
    steps.iter()
         .try_fold(Function::from_term(base), |function, step| step.apply(function))
}

/// Splits `name:rest` at the first `:`, trimming the name.
fn split_descriptor(s: &str) -> Result<(&str, &str), DescriptorError> {
    s.split_once(':')
     .map(|(name, rest)| (name.trim(), rest))
     .ok_or_else(|| DescriptorError::MissingSeparator { descriptor: s.to_string() })
}

/// Reads a comma-separated parameter list. An empty list has no parameters.
fn parse_params(params: &str) -> Result<Vec<f32>, DescriptorError> {
    if params.trim().is_empty() {
        return Ok(Vec::new());
    }

    params.split(',')
          .map(|text| {
              let text = text.trim();
              text.parse::<f32>()
                  .map_err(|_| DescriptorError::InvalidNumber { text: text.to_string() })
          })
          .collect()
}

/// Checks that exactly `N` parameters were given to `kind`.
fn expect_params<const N: usize>(kind: &str,
                                 values: &[f32])
                                 -> Result<[f32; N], DescriptorError> {
    <[f32; N]>::try_from(values).map_err(|_| {
                                    DescriptorError::WrongParameterCount { kind:     kind.to_string(),
                                                                           expected: N,
                                                                           found:    values.len(), }
                                })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all precondition violations a function operation can report.
///
/// Both variants signal a bug in the calling code rather than a recoverable
/// runtime condition. Floating-point special values (infinity, NaN) produced
/// while sampling are never reported here.
pub enum FunctionError {
    /// Appending parts would exceed the fixed part capacity.
    CapacityExceeded {
        /// The maximum number of parts a function can hold.
        capacity:  usize,
        /// The number of parts the operation would have produced.
        requested: usize,
    },
    /// A void term reached an operation that needs its numeric payload.
    InvalidOperand,
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity, requested } => write!(f,
                                                                     "Function capacity exceeded: {requested} parts requested, but at most {capacity} are allowed."),
            Self::InvalidOperand => {
                write!(f, "Invalid operand: a void function cannot be sampled or composed.")
            },
        }
    }
}

impl std::error::Error for FunctionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while decoding a term or step
/// descriptor.
pub enum DescriptorError {
    /// The descriptor has no `:` between its name and its parameters.
    MissingSeparator {
        /// The full descriptor as given.
        descriptor: String,
    },
    /// The term kind or step operator is not recognised.
    UnknownKind {
        /// The unrecognised name.
        name: String,
    },
    /// The number of parameters does not match the term kind.
    WrongParameterCount {
        /// The term kind or step operator.
        kind:     String,
        /// The number of parameters the kind takes.
        expected: usize,
        /// The number of parameters that were supplied.
        found:    usize,
    },
    /// A parameter could not be read as a floating-point number.
    InvalidNumber {
        /// The offending parameter text.
        text: String,
    },
}

impl std::fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator { descriptor } => write!(f,
                                                            "Descriptor '{descriptor}' is missing ':'. Example: linear:1,0,2"),
            Self::UnknownKind { name } => write!(f, "Unknown term or step '{name}'."),
            Self::WrongParameterCount { kind,
                                        expected,
                                        found, } => write!(f,
                                                           "'{kind}' takes {expected} parameters, but {found} were given."),
            Self::InvalidNumber { text } => write!(f, "'{text}' is not a valid number."),
        }
    }
}

impl std::error::Error for DescriptorError {}

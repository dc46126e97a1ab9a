/// Function engine errors.
///
/// Defines the precondition violations that sampling, clamping and combining
/// can report: exceeding the fixed part capacity, and using a void function
/// where a numeric payload is required.
pub mod function_error;
/// Descriptor errors.
///
/// Contains all error types that can be raised while decoding command-line
/// term and step descriptors, such as unknown term kinds, wrong parameter
/// counts, or malformed numbers.
pub mod descriptor_error;

pub use descriptor_error::DescriptorError;
pub use function_error::FunctionError;

//! Error types for field, polynomial and Reed-Solomon operations

use thiserror::Error;

/// Invalid input or misuse of the arithmetic API.
///
/// These are programming errors on the caller's side and are never expected
/// with well-formed inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Field size is not a supported power of two
    #[error("Field size {0} is not a power of two between 2 and 65536")]
    InvalidFieldSize(u32),

    /// Primitive polynomial degree does not match the field size
    #[error("Primitive polynomial {primitive:#x} does not have degree log2({size})")]
    PrimitiveDegreeMismatch { primitive: u32, size: u32 },

    /// Primitive polynomial does not generate every nonzero element
    #[error("Polynomial {primitive:#x} is not primitive over GF({size})")]
    NotPrimitive { primitive: u32, size: u32 },

    /// Polynomial built from an empty coefficient list
    #[error("Polynomial requires at least one coefficient")]
    EmptyCoefficients,

    /// Coefficient magnitude is not an element of the field
    #[error("Coefficient {value} is outside GF({size})")]
    CoefficientOutOfRange { value: i32, size: u32 },

    /// Polynomial division by the zero polynomial
    #[error("Division by the zero polynomial")]
    DivisionByZero,

    /// Multiplicative inverse of zero
    #[error("Zero has no multiplicative inverse")]
    ZeroInverse,

    /// Logarithm of zero
    #[error("Logarithm of zero is undefined")]
    LogOfZero,

    /// Encode or decode requested without any error correction symbols
    #[error("No error correction symbols requested")]
    NoErrorCorrection,

    /// Encode or decode requested without any data symbols
    #[error("No data symbols provided")]
    NoData,

    /// Operands belong to different fields
    #[error("Polynomials belong to different fields: {left} and {right}")]
    FieldMismatch { left: String, right: String },
}

/// The received word carries more errors than the code can correct.
///
/// Callers treat this as a failed read, not a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UncorrectableError {
    /// Euclidean algorithm hit a zero remainder before converging
    #[error("Euclidean algorithm remainder r_(i-1) was zero")]
    RemainderVanished,

    /// Error locator has a zero constant term
    #[error("Error locator sigma(0) was zero")]
    LocatorConstantZero,

    /// Locator degree exceeds the correction capacity
    #[error("Error locator implies {found} errors, but at most {capacity} are correctable")]
    TooManyErrors { found: usize, capacity: usize },

    /// Error evaluator is not of lower degree than the locator
    #[error("Error evaluator degree {evaluator} is not below locator degree {locator}")]
    EvaluatorDegree { evaluator: usize, locator: usize },

    /// Syndromes are nonzero but the locator has degree 0
    #[error("Error locator has no roots although syndromes are nonzero")]
    LocatorWithoutRoots,

    /// Locator root count differs from its degree
    #[error("Error locator degree {expected} does not match number of roots {found}")]
    RootCountMismatch { expected: usize, found: usize },

    /// Error location falls outside the received word
    #[error("Bad error location {position} in word of length {length}")]
    BadErrorLocation { position: i64, length: usize },
}

/// Errors returned by the Reed-Solomon codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Uncorrectable codeword: {0}")]
    Uncorrectable(#[from] UncorrectableError),
}

impl RsError {
    /// True when the failure means "this read failed" rather than misuse
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, RsError::Uncorrectable(_))
    }
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;

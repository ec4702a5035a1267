//! Galois Field GF(2^k) arithmetic for barcode Reed-Solomon codes
//!
//! ## Field parameters
//!
//! A field is described by its size (2^k), the primitive polynomial used to
//! reduce products, and the generator base `b`: the Reed-Solomon generator
//! polynomial of a code over the field has roots `α^b, α^(b+1), ...`.
//!
//! The barcode symbologies fix these well-known fields:
//!
//! - **QR Code**: GF(256), 0x11D (x⁸ + x⁴ + x³ + x² + 1), b = 0
//! - **Data Matrix / Aztec 8-bit**: GF(256), 0x12D (x⁸ + x⁵ + x³ + x² + 1), b = 1
//! - **Aztec 12/10/6-bit, MaxiCode**: 0x1069, 0x409, 0x43, b = 1
//! - **Aztec mode message**: GF(16), 0x13 (x⁴ + x + 1), b = 1
//!
//! ## Implementation Notes
//!
//! Arithmetic is table driven: `exp_table[i] = α^i` and
//! `log_table[exp_table[i]] = i` are built once at construction and never
//! mutated, so a field can be shared freely between threads.

use super::error::DomainError;
use super::polynomial::Polynomial;
use std::fmt;
use std::sync::OnceLock;

/// Smallest supported field, GF(2)
const MIN_FIELD_SIZE: u32 = 2;

/// Largest supported field, GF(2^16); table entries must fit in u16
const MAX_FIELD_SIZE: u32 = 1 << 16;

/// Parameters identifying one GF(2^k) field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldParameters {
    /// Number of field elements, a power of two
    pub size: u32,
    /// Primitive (irreducible) reduction polynomial, including the x^k term
    pub primitive: u32,
    /// Exponent of the first root of Reed-Solomon generator polynomials
    pub generator_base: u32,
}

impl FieldParameters {
    pub const fn new(size: u32, primitive: u32, generator_base: u32) -> Self {
        Self {
            size,
            primitive,
            generator_base,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        if !self.size.is_power_of_two() || !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.size)
        {
            return Err(DomainError::InvalidFieldSize(self.size));
        }
        // x^k must be the highest term of the reduction polynomial
        if self.primitive < self.size || self.primitive >= self.size << 1 {
            return Err(DomainError::PrimitiveDegreeMismatch {
                primitive: self.primitive,
                size: self.size,
            });
        }
        Ok(())
    }
}

/// Aztec 12-bit data codewords: x^12 + x^6 + x^5 + x^3 + 1
pub const AZTEC_DATA_12: FieldParameters = FieldParameters::new(4096, 0x1069, 1);
/// Aztec 10-bit data codewords: x^10 + x^3 + 1
pub const AZTEC_DATA_10: FieldParameters = FieldParameters::new(1024, 0x409, 1);
/// Aztec 6-bit data codewords: x^6 + x + 1
pub const AZTEC_DATA_6: FieldParameters = FieldParameters::new(64, 0x43, 1);
/// Aztec mode message: x^4 + x + 1
pub const AZTEC_PARAM: FieldParameters = FieldParameters::new(16, 0x13, 1);
/// QR Code: x^8 + x^4 + x^3 + x^2 + 1
pub const QR_CODE_FIELD_256: FieldParameters = FieldParameters::new(256, 0x011D, 0);
/// Data Matrix: x^8 + x^5 + x^3 + x^2 + 1
pub const DATA_MATRIX_FIELD_256: FieldParameters = FieldParameters::new(256, 0x012D, 1);
/// Aztec 8-bit data codewords share the Data Matrix field
pub const AZTEC_DATA_8: FieldParameters = DATA_MATRIX_FIELD_256;
/// MaxiCode shares the Aztec 6-bit field
pub const MAXICODE_FIELD_64: FieldParameters = AZTEC_DATA_6;

/// Coefficients of the cached zero and unit polynomials
const ZERO_COEFFICIENTS: &[i32] = &[0];
const ONE_COEFFICIENTS: &[i32] = &[1];

/// Magnitude of a field element; `-a == a` in characteristic 2
#[inline]
pub(crate) fn magnitude(a: i32) -> usize {
    a.unsigned_abs() as usize
}

/// One instance of GF(2^k) with precomputed exp/log tables
pub struct GaloisField {
    params: FieldParameters,
    exp_table: Vec<u16>,
    log_table: Vec<u16>,
}

impl GaloisField {
    /// Create a field, validating that `primitive` really generates GF(size)
    pub fn new(params: FieldParameters) -> Result<Self, DomainError> {
        params.validate()?;
        let field = Self::build(params);
        field.verify_primitive()?;
        Ok(field)
    }

    /// Build tables without validation; only for parameters known to be good
    fn build(params: FieldParameters) -> Self {
        let size = params.size as usize;
        let mut field = GaloisField {
            params,
            exp_table: vec![0; size],
            log_table: vec![0; size],
        };
        field.build_tables();
        field
    }

    fn build_tables(&mut self) {
        let size = self.params.size;
        let mut x = 1u32;

        for i in 0..size as usize {
            self.exp_table[i] = x as u16;
            x <<= 1;
            if x >= size {
                x ^= self.params.primitive;
                x &= size - 1;
            }
        }

        // log_table[0] stays 0 and is never read
        for i in 0..(size - 1) as usize {
            self.log_table[self.exp_table[i] as usize] = i as u16;
        }
    }

    /// α must cycle through every nonzero element exactly once
    fn verify_primitive(&self) -> Result<(), DomainError> {
        let limit = self.limit();
        let mut seen = vec![false; self.params.size as usize];
        let full_cycle = self.exp_table[..limit].iter().all(|&value| {
            let first = value != 0 && !seen[value as usize];
            seen[value as usize] = true;
            first
        });

        if full_cycle && self.exp_table[limit] == 1 {
            Ok(())
        } else {
            Err(DomainError::NotPrimitive {
                primitive: self.params.primitive,
                size: self.params.size,
            })
        }
    }

    /// Order of the multiplicative group, `size - 1`
    #[inline]
    fn limit(&self) -> usize {
        self.params.size as usize - 1
    }

    #[inline]
    pub(crate) fn log_of(&self, magnitude: usize) -> usize {
        self.log_table[magnitude] as usize
    }

    /// Check that `value` (or its negation) is an element of this field
    pub fn check_element(&self, value: i32) -> Result<(), DomainError> {
        if magnitude(value) < self.params.size as usize {
            Ok(())
        } else {
            Err(DomainError::CoefficientOutOfRange {
                value,
                size: self.params.size,
            })
        }
    }

    /// Parameters the field was built from
    pub fn parameters(&self) -> FieldParameters {
        self.params
    }

    /// Number of elements, `2^k`
    pub fn size(&self) -> u32 {
        self.params.size
    }

    /// Primitive polynomial as a bit mask
    pub fn primitive(&self) -> u32 {
        self.params.primitive
    }

    /// First exponent `b` of the generator roots `α^b, α^(b+1), ...`
    pub fn generator_base(&self) -> u32 {
        self.params.generator_base
    }

    /// The zero polynomial of this field
    pub fn zero(&self) -> Polynomial<'_> {
        Polynomial::from_canonical(self, ZERO_COEFFICIENTS)
    }

    /// The unit polynomial of this field
    pub fn one(&self) -> Polynomial<'_> {
        Polynomial::from_canonical(self, ONE_COEFFICIENTS)
    }

    /// `coefficient * x^degree`; the zero polynomial when `coefficient` is 0
    pub fn build_monomial(
        &self,
        degree: usize,
        coefficient: i32,
    ) -> Result<Polynomial<'_>, DomainError> {
        self.check_element(coefficient)?;
        if coefficient == 0 {
            return Ok(self.zero());
        }
        let mut coefficients = vec![0; degree + 1];
        coefficients[0] = coefficient;
        Ok(Polynomial::from_canonical_vec(self, coefficients))
    }

    /// Addition and subtraction coincide in characteristic 2 (XOR)
    #[inline]
    pub fn add_or_subtract(a: i32, b: i32) -> i32 {
        (a.unsigned_abs() ^ b.unsigned_abs()) as i32
    }

    /// α^a, with the exponent taken modulo `size - 1`
    #[inline]
    pub fn exp(&self, a: usize) -> i32 {
        self.exp_table[a % self.limit()] as i32
    }

    /// Discrete logarithm base α
    pub fn log(&self, a: i32) -> Result<usize, DomainError> {
        self.check_element(a)?;
        if a == 0 {
            return Err(DomainError::LogOfZero);
        }
        Ok(self.log_of(magnitude(a)))
    }

    /// Multiplicative inverse
    pub fn inverse(&self, a: i32) -> Result<i32, DomainError> {
        self.check_element(a)?;
        if a == 0 {
            return Err(DomainError::ZeroInverse);
        }
        Ok(self.exp_table[self.limit() - self.log_of(magnitude(a))] as i32)
    }

    /// Product of two field elements
    ///
    /// # Panics
    ///
    /// Panics if either operand is not an element of the field.
    #[inline]
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = (self.log_of(magnitude(a)) + self.log_of(magnitude(b))) % self.limit();
        self.exp_table[log_sum] as i32
    }

    /// QR Code field, GF(256) / 0x11D, b = 0
    pub fn qr_code_256() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| GaloisField::build(QR_CODE_FIELD_256))
    }

    /// Data Matrix and Aztec 8-bit field, GF(256) / 0x12D, b = 1
    pub fn data_matrix_256() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| GaloisField::build(DATA_MATRIX_FIELD_256))
    }

    /// Aztec 12-bit field, GF(4096) / 0x1069, b = 1
    pub fn aztec_data_12() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| GaloisField::build(AZTEC_DATA_12))
    }

    /// Aztec 10-bit field, GF(1024) / 0x409, b = 1
    pub fn aztec_data_10() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| GaloisField::build(AZTEC_DATA_10))
    }

    /// Aztec 6-bit and MaxiCode field, GF(64) / 0x43, b = 1
    pub fn aztec_data_6() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| GaloisField::build(AZTEC_DATA_6))
    }

    /// Aztec mode message field, GF(16) / 0x13, b = 1
    pub fn aztec_param() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| GaloisField::build(AZTEC_PARAM))
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.params == other.params
    }
}

impl Eq for GaloisField {}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("size", &self.params.size)
            .field("primitive", &format_args!("{:#x}", self.params.primitive))
            .field("generator_base", &self.params.generator_base)
            .finish()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({:#x},{})", self.params.primitive, self.params.size)
    }
}

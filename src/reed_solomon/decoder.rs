//! Reed-Solomon decoder
//!
//! ## Algorithm
//!
//! 1. Syndromes: evaluate the received word at each generator root
//!    `α^(b+i)`. All zero means no detectable error.
//! 2. Euclidean algorithm on `x^ec` and the syndrome polynomial, stopped once
//!    the remainder degree drops below `ec / 2` (rounded down), yields the
//!    error locator σ(x) and error evaluator ω(x). A valid pair has
//!    `deg ω < deg σ <= ec / 2`.
//! 3. Chien-style search: every nonzero field element is tried as a root of σ.
//!    The inverses of the roots are the error locators `X_i`.
//! 4. Forney: each magnitude is `ω(X_i⁻¹) / Π_(j≠i)(1 + X_j X_i⁻¹)`, times
//!    `X_i⁻¹` when the generator base is nonzero.
//!
//! An uncorrectable pattern whose syndromes happen to be all zero is
//! indistinguishable from a clean word; that is inherent to the code.

use super::error::{DomainError, RsResult, UncorrectableError};
use super::galois::GaloisField;
use super::polynomial::Polynomial;
use log::{debug, trace};
use smallvec::SmallVec;

/// Error locators or magnitudes; a typical barcode block corrects few symbols
type ErrorValues = SmallVec<[i32; 16]>;

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Corrected codeword, same length as the received word
    pub codeword: Vec<i32>,
    /// Number of symbols that were corrected
    pub errors_corrected: usize,
}

/// Reed-Solomon decoder over one field
#[derive(Debug, Clone, Copy)]
pub struct ReedSolomonDecoder<'f> {
    field: &'f GaloisField,
}

impl<'f> ReedSolomonDecoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Decode a copy of `received`, which ends in `num_ec_codewords`
    /// redundancy symbols
    pub fn decode(&self, received: &[i32], num_ec_codewords: usize) -> RsResult<DecodeOutcome> {
        let mut codeword = received.to_vec();
        let errors_corrected = self.decode_in_place(&mut codeword, num_ec_codewords)?;
        Ok(DecodeOutcome {
            codeword,
            errors_corrected,
        })
    }

    /// Correct `received` in place, returning the number of corrected symbols
    pub fn decode_in_place(
        &self,
        received: &mut [i32],
        num_ec_codewords: usize,
    ) -> RsResult<usize> {
        if num_ec_codewords == 0 {
            return Err(DomainError::NoErrorCorrection.into());
        }
        if received.is_empty() {
            return Err(DomainError::NoData.into());
        }

        let field = self.field;
        let poly = Polynomial::new(field, received)?;

        let mut syndrome_coefficients = vec![0; num_ec_codewords];
        let mut no_error = true;
        for i in 0..num_ec_codewords {
            let eval = poly.evaluate_at(field.exp(i + field.generator_base() as usize));
            syndrome_coefficients[num_ec_codewords - 1 - i] = eval;
            if eval != 0 {
                no_error = false;
            }
        }
        if no_error {
            trace!("All {} syndromes zero, nothing to correct", num_ec_codewords);
            return Ok(0);
        }

        let syndrome = Polynomial::from_vec(field, syndrome_coefficients)?;
        let (sigma, omega) = self
            .run_euclidean_algorithm(
                field.build_monomial(num_ec_codewords, 1)?,
                syndrome,
                num_ec_codewords,
            )
            .inspect_err(|e| debug!("Euclidean algorithm failed: {}", e))?;

        let capacity = num_ec_codewords / 2;
        if sigma.degree() > capacity {
            debug!("Locator degree {} exceeds capacity {}", sigma.degree(), capacity);
            return Err(UncorrectableError::TooManyErrors {
                found: sigma.degree(),
                capacity,
            }
            .into());
        }
        if sigma.degree() > 0 && omega.degree() >= sigma.degree() {
            debug!(
                "Evaluator degree {} not below locator degree {}",
                omega.degree(),
                sigma.degree()
            );
            return Err(UncorrectableError::EvaluatorDegree {
                evaluator: omega.degree(),
                locator: sigma.degree(),
            }
            .into());
        }

        let error_locations = self.find_error_locations(&sigma)?;
        let error_magnitudes = self.find_error_magnitudes(&omega, &error_locations)?;

        // All positions are resolved before `received` is modified
        let mut positions = SmallVec::<[usize; 16]>::with_capacity(error_locations.len());
        for &location in &error_locations {
            let position = received.len() as i64 - 1 - field.log(location)? as i64;
            if position < 0 {
                debug!(
                    "Error location {} outside word of length {}",
                    position,
                    received.len()
                );
                return Err(UncorrectableError::BadErrorLocation {
                    position,
                    length: received.len(),
                }
                .into());
            }
            positions.push(position as usize);
        }
        for (&position, &magnitude) in positions.iter().zip(error_magnitudes.iter()) {
            received[position] = GaloisField::add_or_subtract(received[position], magnitude);
        }

        debug!(
            "Corrected {} errors with {} EC codewords",
            error_locations.len(),
            num_ec_codewords
        );
        Ok(error_locations.len())
    }

    /// Returns `(σ, ω)` normalised so that σ(0) = 1
    fn run_euclidean_algorithm(
        &self,
        a: Polynomial<'f>,
        b: Polynomial<'f>,
        r_bound: usize,
    ) -> RsResult<(Polynomial<'f>, Polynomial<'f>)> {
        let field = self.field;
        let (a, b) = if a.degree() < b.degree() { (b, a) } else { (a, b) };

        let mut r_last = a;
        let mut r = b;
        let mut t_last = field.zero();
        let mut t = field.one();

        // Run until r's degree is less than r_bound / 2, rounded down
        while r.degree() >= r_bound / 2 {
            let r_last_last = r_last;
            let t_last_last = t_last;
            r_last = r;
            t_last = t;

            if r_last.is_zero() {
                return Err(UncorrectableError::RemainderVanished.into());
            }
            r = r_last_last;
            let mut q = field.zero();
            let dlt_inverse = field.inverse(r_last.leading_coefficient())?;
            while r.degree() >= r_last.degree() && !r.is_zero() {
                let degree_diff = r.degree() - r_last.degree();
                let scale = field.multiply(r.leading_coefficient(), dlt_inverse);
                q = q.add_or_subtract(&field.build_monomial(degree_diff, scale)?)?;
                r = r.add_or_subtract(&r_last.multiply_by_monomial(degree_diff, scale))?;
            }

            t = q.multiply(&t_last)?.add_or_subtract(&t_last_last)?;
        }

        let sigma_tilde_at_zero = t.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(UncorrectableError::LocatorConstantZero.into());
        }

        let inverse = field.inverse(sigma_tilde_at_zero)?;
        let sigma = t.multiply_scalar(inverse);
        let omega = r.multiply_scalar(inverse);
        Ok((sigma, omega))
    }

    fn find_error_locations(&self, error_locator: &Polynomial<'f>) -> RsResult<ErrorValues> {
        let num_errors = error_locator.degree();
        if num_errors == 0 {
            return Err(UncorrectableError::LocatorWithoutRoots.into());
        }
        if num_errors == 1 {
            // σ(x) = 1 + X·x
            return Ok(smallvec::smallvec![error_locator.coefficient(1)]);
        }

        let mut result = ErrorValues::with_capacity(num_errors);
        for i in 1..self.field.size() as i32 {
            if result.len() >= num_errors {
                break;
            }
            if error_locator.evaluate_at(i) == 0 {
                result.push(self.field.inverse(i)?);
            }
        }

        if result.len() != num_errors {
            debug!("Locator of degree {} has {} roots", num_errors, result.len());
            return Err(UncorrectableError::RootCountMismatch {
                expected: num_errors,
                found: result.len(),
            }
            .into());
        }
        Ok(result)
    }

    fn find_error_magnitudes(
        &self,
        error_evaluator: &Polynomial<'f>,
        error_locations: &[i32],
    ) -> RsResult<ErrorValues> {
        let field = self.field;
        let mut result = ErrorValues::with_capacity(error_locations.len());

        for (i, &location) in error_locations.iter().enumerate() {
            let xi_inverse = field.inverse(location)?;
            let denominator = error_locations
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1, |acc, (_, &other)| {
                    let term = field.multiply(other, xi_inverse);
                    field.multiply(acc, GaloisField::add_or_subtract(term, 1))
                });

            let mut magnitude = field.multiply(
                error_evaluator.evaluate_at(xi_inverse),
                field.inverse(denominator)?,
            );
            if field.generator_base() != 0 {
                magnitude = field.multiply(magnitude, xi_inverse);
            }
            result.push(magnitude);
        }
        Ok(result)
    }
}

//! Polynomials with coefficients in a GF(2^k) field
//!
//! Coefficients are stored highest degree first in canonical form: the
//! leading coefficient is nonzero unless the polynomial is zero, which is
//! stored as the single coefficient `[0]`. Every operation returns a new
//! polynomial; operands are never mutated.
//!
//! Coefficients are signed so that the diagnostic rendering can show a
//! `-` sign. Arithmetic ignores the sign since `-a == a` in characteristic 2.

use super::error::DomainError;
use super::galois::{magnitude, GaloisField};
use std::borrow::Cow;
use std::fmt;

/// Polynomial over one `GaloisField`
#[derive(Debug, Clone)]
pub struct Polynomial<'f> {
    field: &'f GaloisField,
    coefficients: Cow<'f, [i32]>,
}

impl<'f> Polynomial<'f> {
    /// Build a polynomial from raw coefficients, highest degree first.
    ///
    /// Leading zeros are stripped; `[0, 0, 1, 0, 123]` becomes `[1, 0, 123]`.
    pub fn new(field: &'f GaloisField, coefficients: &[i32]) -> Result<Self, DomainError> {
        Self::from_vec(field, coefficients.to_vec())
    }

    /// Like [`Polynomial::new`], taking ownership of the coefficients
    pub fn from_vec(field: &'f GaloisField, coefficients: Vec<i32>) -> Result<Self, DomainError> {
        if coefficients.is_empty() {
            return Err(DomainError::EmptyCoefficients);
        }
        for &c in &coefficients {
            field.check_element(c)?;
        }
        Ok(Self::simplified(field, coefficients))
    }

    /// Coefficients already canonical and in range
    pub(crate) fn from_canonical(field: &'f GaloisField, coefficients: &'f [i32]) -> Self {
        Polynomial {
            field,
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    pub(crate) fn from_canonical_vec(field: &'f GaloisField, coefficients: Vec<i32>) -> Self {
        Polynomial {
            field,
            coefficients: Cow::Owned(coefficients),
        }
    }

    /// Strip leading zeros from a non-empty, in-range coefficient list
    fn simplified(field: &'f GaloisField, mut coefficients: Vec<i32>) -> Self {
        if coefficients.len() > 1 && coefficients[0] == 0 {
            match coefficients.iter().position(|&c| c != 0) {
                Some(first_non_zero) => {
                    coefficients.drain(..first_non_zero);
                }
                None => return field.zero(),
            }
        }
        Self::from_canonical_vec(field, coefficients)
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Canonical coefficients, highest degree first
    pub fn coefficients(&self) -> &[i32] {
        &self.coefficients
    }

    /// Degree of the polynomial; 0 for both the zero and unit polynomials
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of `x^degree`, 0 beyond the polynomial's degree
    pub fn coefficient(&self, degree: usize) -> i32 {
        match self.degree().checked_sub(degree) {
            Some(index) => self.coefficients[index],
            None => 0,
        }
    }

    pub fn leading_coefficient(&self) -> i32 {
        self.coefficients[0]
    }

    /// Evaluate at `a` using Horner's method
    ///
    /// # Panics
    ///
    /// Panics if `a` is not an element of the field.
    pub fn evaluate_at(&self, a: i32) -> i32 {
        if a == 0 {
            return self.coefficient(0);
        }
        if magnitude(a) == 1 {
            // Sum of all coefficients
            return self
                .coefficients
                .iter()
                .fold(0, |acc, &c| GaloisField::add_or_subtract(acc, c));
        }
        let mut result = self.coefficients[0];
        for &c in &self.coefficients[1..] {
            result = GaloisField::add_or_subtract(self.field.multiply(a, result), c);
        }
        result
    }

    fn check_same_field(&self, other: &Polynomial<'_>) -> Result<(), DomainError> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(DomainError::FieldMismatch {
                left: self.field.to_string(),
                right: other.field.to_string(),
            })
        }
    }

    /// Sum (equivalently difference) of two polynomials
    pub fn add_or_subtract(&self, other: &Polynomial<'f>) -> Result<Self, DomainError> {
        self.check_same_field(other)?;
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        let (smaller, larger) = if self.coefficients.len() > other.coefficients.len() {
            (&other.coefficients, &self.coefficients)
        } else {
            (&self.coefficients, &other.coefficients)
        };
        let length_diff = larger.len() - smaller.len();

        let mut sum = Vec::with_capacity(larger.len());
        sum.extend_from_slice(&larger[..length_diff]);
        sum.extend(
            larger[length_diff..]
                .iter()
                .zip(smaller.iter())
                .map(|(&a, &b)| GaloisField::add_or_subtract(a, b)),
        );

        Ok(Self::simplified(self.field, sum))
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &Polynomial<'f>) -> Result<Self, DomainError> {
        self.check_same_field(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(self.field.zero());
        }

        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0; a.len() + b.len() - 1];
        for (i, &a_coeff) in a.iter().enumerate() {
            for (j, &b_coeff) in b.iter().enumerate() {
                product[i + j] = GaloisField::add_or_subtract(
                    product[i + j],
                    self.field.multiply(a_coeff, b_coeff),
                );
            }
        }

        Ok(Self::simplified(self.field, product))
    }

    /// Multiply every coefficient by `scalar`
    ///
    /// # Panics
    ///
    /// Panics if `scalar` is not an element of the field.
    pub fn multiply_scalar(&self, scalar: i32) -> Self {
        if scalar == 0 {
            return self.field.zero();
        }
        if scalar == 1 {
            return self.clone();
        }
        let product = self
            .coefficients
            .iter()
            .map(|&c| self.field.multiply(c, scalar))
            .collect();
        Self::simplified(self.field, product)
    }

    /// Multiply by `coefficient * x^degree`
    ///
    /// # Panics
    ///
    /// Panics if `coefficient` is not an element of the field.
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: i32) -> Self {
        if coefficient == 0 {
            return self.field.zero();
        }
        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        product.extend(
            self.coefficients
                .iter()
                .map(|&c| self.field.multiply(c, coefficient)),
        );
        product.resize(self.coefficients.len() + degree, 0);
        Self::simplified(self.field, product)
    }

    /// Long division, returning `(quotient, remainder)`
    pub fn divide(&self, divisor: &Polynomial<'f>) -> Result<(Self, Self), DomainError> {
        self.check_same_field(divisor)?;
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero);
        }

        let mut quotient = self.field.zero();
        let mut remainder = self.clone();

        let inverse_leading_term = self.field.inverse(divisor.leading_coefficient())?;

        while remainder.degree() >= divisor.degree() && !remainder.is_zero() {
            let degree_difference = remainder.degree() - divisor.degree();
            let scale = self
                .field
                .multiply(remainder.leading_coefficient(), inverse_leading_term);
            let term = divisor.multiply_by_monomial(degree_difference, scale);
            let iteration_quotient = self.field.build_monomial(degree_difference, scale)?;
            quotient = quotient.add_or_subtract(&iteration_quotient)?;
            remainder = remainder.add_or_subtract(&term)?;
        }

        Ok((quotient, remainder))
    }
}

impl PartialEq for Polynomial<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coefficients == other.coefficients
    }
}

impl Eq for Polynomial<'_> {}

/// Renders terms as `a^<log>x^<degree>`, e.g. `a^25x^4 - ax^2 + x + 1`
impl fmt::Display for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut wrote_term = false;
        for degree in (0..=self.degree()).rev() {
            let coefficient = self.coefficient(degree);
            if coefficient == 0 {
                continue;
            }

            if coefficient < 0 {
                f.write_str(if degree == self.degree() { "-" } else { " - " })?;
            } else if wrote_term {
                f.write_str(" + ")?;
            }
            wrote_term = true;

            let value = magnitude(coefficient);
            if degree == 0 || value != 1 {
                match self.field.log_of(value) {
                    0 => f.write_str("1")?,
                    1 => f.write_str("a")?,
                    alpha_power => write!(f, "a^{}", alpha_power)?,
                }
            }

            match degree {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", degree)?,
            }
        }
        Ok(())
    }
}

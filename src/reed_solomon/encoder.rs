//! Reed-Solomon encoder
//!
//! Redundancy is the remainder of `message(x) * x^ec` divided by the
//! generator polynomial `g(x) = (x - α^b)(x - α^(b+1))...(x - α^(b+ec-1))`.
//! Generators are built incrementally and cached per encoder, so repeated
//! encodes with the same symbol count do not rebuild them.

use super::error::{DomainError, RsResult};
use super::galois::GaloisField;
use super::polynomial::Polynomial;
use log::{debug, warn};

/// Reed-Solomon encoder over one field
pub struct ReedSolomonEncoder<'f> {
    field: &'f GaloisField,
    cached_generators: Vec<Polynomial<'f>>,
}

impl<'f> ReedSolomonEncoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Self {
            field,
            cached_generators: vec![field.one()],
        }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Generator polynomial of the given degree
    pub fn generator(&mut self, degree: usize) -> Result<&Polynomial<'f>, DomainError> {
        let field = self.field;
        if self.cached_generators.len() <= degree {
            debug!(
                "Extending generator cache over {} from degree {} to {}",
                field,
                self.cached_generators.len() - 1,
                degree
            );
        }
        while self.cached_generators.len() <= degree {
            let d = self.cached_generators.len();
            let root = field.exp(d - 1 + field.generator_base() as usize);
            let factor = Polynomial::from_vec(field, vec![1, root])?;
            let last = &self.cached_generators[d - 1];
            let next = last.multiply(&factor)?;
            self.cached_generators.push(next);
        }
        Ok(&self.cached_generators[degree])
    }

    /// Append `num_ec_codewords` symbols of redundancy to `message`
    pub fn encode(&mut self, message: &[i32], num_ec_codewords: usize) -> RsResult<Vec<i32>> {
        if message.is_empty() {
            return Err(DomainError::NoData.into());
        }
        let mut codeword = Vec::with_capacity(message.len() + num_ec_codewords);
        codeword.extend_from_slice(message);
        codeword.resize(message.len() + num_ec_codewords, 0);
        self.encode_in_place(&mut codeword, num_ec_codewords)?;
        Ok(codeword)
    }

    /// Overwrite the last `num_ec_codewords` entries of `to_encode` with
    /// redundancy computed from the entries before them
    pub fn encode_in_place(
        &mut self,
        to_encode: &mut [i32],
        num_ec_codewords: usize,
    ) -> RsResult<()> {
        if num_ec_codewords == 0 {
            return Err(DomainError::NoErrorCorrection.into());
        }
        let data_codewords = match to_encode.len().checked_sub(num_ec_codewords) {
            Some(n) if n > 0 => n,
            _ => return Err(DomainError::NoData.into()),
        };

        let field = self.field;
        if to_encode.len() >= field.size() as usize {
            warn!(
                "Codeword length {} exceeds the {} symbols {} can locate uniquely",
                to_encode.len(),
                field.size() - 1,
                field
            );
        }

        let info = Polynomial::new(field, &to_encode[..data_codewords])?
            .multiply_by_monomial(num_ec_codewords, 1);
        let generator = self.generator(num_ec_codewords)?;
        let (_, remainder) = info.divide(generator)?;

        let coefficients = remainder.coefficients();
        let num_zero_coefficients = num_ec_codewords - coefficients.len();
        let (zeros, ec) = to_encode[data_codewords..].split_at_mut(num_zero_coefficients);
        zeros.fill(0);
        ec.copy_from_slice(coefficients);
        Ok(())
    }
}

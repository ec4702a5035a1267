//! GF(2^k) polynomial arithmetic and Reed-Solomon coding for barcodes
//!
//! The codec is consumed through two calls: encode a message with a number
//! of error correction codewords, and decode a received codeword back into
//! the corrected word (or an uncorrectable failure). Symbol geometry, bit
//! packing and image decoding live with the caller.

pub mod reed_solomon;

pub use reed_solomon::{
    DecodeOutcome, DomainError, FieldParameters, GaloisField, Polynomial, ReedSolomonDecoder,
    ReedSolomonEncoder, RsError, RsResult, UncorrectableError,
};

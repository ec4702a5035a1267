//! Reed-Solomon Error Correction Module
//!
//! This module provides the GF(2^k) field and polynomial arithmetic that
//! barcode symbologies (QR Code, Data Matrix, Aztec, MaxiCode) build their
//! error correction on, plus the encoder and decoder themselves.
//!
//! ```
//! use rscodec::reed_solomon::{GaloisField, ReedSolomonDecoder, ReedSolomonEncoder};
//!
//! let field = GaloisField::qr_code_256();
//! let mut encoder = ReedSolomonEncoder::new(field);
//! let mut codeword = encoder.encode(&[0x40, 0xd2, 0x75, 0x47], 6).unwrap();
//!
//! codeword[1] ^= 0x11;
//! codeword[7] ^= 0x80;
//!
//! let outcome = ReedSolomonDecoder::new(field).decode(&codeword, 6).unwrap();
//! assert_eq!(outcome.errors_corrected, 2);
//! assert_eq!(&outcome.codeword[..4], &[0x40, 0xd2, 0x75, 0x47]);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod polynomial;

pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use galois::*;
pub use polynomial::*;

//! Galois Field (GF(2^k)) Arithmetic Tests
//!
//! Tests for field construction, table lookups, multiplication, inverses
//! and the well-known barcode field presets.

use rscodec::reed_solomon::{
    DomainError, FieldParameters, GaloisField, AZTEC_DATA_10, AZTEC_DATA_12, AZTEC_DATA_6,
    AZTEC_PARAM, DATA_MATRIX_FIELD_256, QR_CODE_FIELD_256,
};

fn presets() -> Vec<&'static GaloisField> {
    vec![
        GaloisField::qr_code_256(),
        GaloisField::data_matrix_256(),
        GaloisField::aztec_data_12(),
        GaloisField::aztec_data_10(),
        GaloisField::aztec_data_6(),
        GaloisField::aztec_param(),
    ]
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_presets_pass_validation() {
    for params in [
        QR_CODE_FIELD_256,
        DATA_MATRIX_FIELD_256,
        AZTEC_DATA_12,
        AZTEC_DATA_10,
        AZTEC_DATA_6,
        AZTEC_PARAM,
    ] {
        let field = GaloisField::new(params).expect("preset must be primitive");
        assert_eq!(field.parameters(), params);
    }
}

#[test]
fn test_presets_are_shared_instances() {
    assert!(std::ptr::eq(
        GaloisField::qr_code_256(),
        GaloisField::qr_code_256()
    ));
}

#[test]
fn test_invalid_sizes() {
    for size in [0, 1, 3, 100, 255, 1 << 17] {
        assert_eq!(
            GaloisField::new(FieldParameters::new(size, 0x11D, 0)).unwrap_err(),
            DomainError::InvalidFieldSize(size),
            "size {}",
            size
        );
    }
}

#[test]
fn test_primitive_degree_must_match_size() {
    let err = GaloisField::new(FieldParameters::new(64, 0x11D, 0)).unwrap_err();
    assert_eq!(
        err,
        DomainError::PrimitiveDegreeMismatch {
            primitive: 0x11D,
            size: 64
        }
    );
}

#[test]
fn test_reducible_polynomial_rejected() {
    // x^4 + x^2 + 1 = (x^2 + x + 1)^2
    let err = GaloisField::new(FieldParameters::new(16, 0x15, 1)).unwrap_err();
    assert!(matches!(err, DomainError::NotPrimitive { .. }));
}

// ============================================================================
// Table Invariants
// ============================================================================

#[test]
fn test_exp_log_inverse_of_each_other() {
    for field in presets() {
        assert_eq!(field.exp(0), 1);
        for a in 1..field.size() as i32 {
            let log = field.log(a).unwrap();
            assert_eq!(field.exp(log), a, "{} a = {}", field, a);
        }
    }
}

#[test]
fn test_exp_wraps_modulo_group_order() {
    let field = GaloisField::aztec_param();
    assert_eq!(field.exp(15), 1);
    assert_eq!(field.exp(16), field.exp(1));
    assert_eq!(field.exp(31), field.exp(1));
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_or_subtract_is_xor() {
    assert_eq!(GaloisField::add_or_subtract(5, 3), 6);
    assert_eq!(GaloisField::add_or_subtract(0x12, 0x12), 0);
    assert_eq!(GaloisField::add_or_subtract(7, 0), 7);
}

#[test]
fn test_multiply_by_zero_and_one() {
    let field = GaloisField::qr_code_256();
    for a in 0..256 {
        assert_eq!(field.multiply(a, 0), 0);
        assert_eq!(field.multiply(0, a), 0);
        assert_eq!(field.multiply(a, 1), a);
    }
}

#[test]
fn test_multiply_known_values() {
    let field = GaloisField::qr_code_256();
    assert_eq!(field.multiply(2, 2), 4);
    assert_eq!(field.multiply(0x80, 2), 0x1D);
    assert_eq!(field.multiply(255, 7), 199);
}

#[test]
fn test_every_nonzero_element_has_inverse() {
    for field in presets() {
        for a in 1..field.size() as i32 {
            let inv = field.inverse(a).unwrap();
            assert_eq!(field.multiply(a, inv), 1, "{} a = {}", field, a);
        }
    }
}

#[test]
fn test_inverse_and_log_of_zero_fail() {
    let field = GaloisField::aztec_data_6();
    assert_eq!(field.inverse(0), Err(DomainError::ZeroInverse));
    assert_eq!(field.log(0), Err(DomainError::LogOfZero));
}

#[test]
fn test_out_of_range_elements_rejected() {
    let field = GaloisField::aztec_data_6();
    assert_eq!(
        field.inverse(64),
        Err(DomainError::CoefficientOutOfRange {
            value: 64,
            size: 64
        })
    );
    assert!(field.log(-64).is_err());
}

#[test]
fn test_display() {
    assert_eq!(GaloisField::qr_code_256().to_string(), "GF(0x11d,256)");
    assert_eq!(GaloisField::aztec_param().to_string(), "GF(0x13,16)");
}

#[test]
fn test_field_shared_across_threads() {
    let field = GaloisField::data_matrix_256();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..5)
            .map(|t| scope.spawn(move || (1..256).map(|a| field.multiply(a, t)).sum::<i32>()))
            .collect();
        let expected: Vec<i32> = (1..5)
            .map(|t| (1..256).map(|a| field.multiply(a, t)).sum())
            .collect();
        let results: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, expected);
    });
}

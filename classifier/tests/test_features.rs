//! Tests for feature vectors
//!
//! The marshaling order produced by `as_ordered` is the positional contract
//! with the Python classifier; these tests pin it field by field.

use proptest::prelude::*;
use stability_classifier_core_rs::{ThreePlusOneFeatures, TwoPlusTwoFeatures};

#[test]
fn test_two_plus_two_ordering() {
    let features = TwoPlusTwoFeatures {
        mratio_inner1: 0.1,
        mratio_inner2: 0.2,
        mratio_outer: 0.3,
        aratio_inner1_outer: 0.4,
        aratio_inner2_outer: 0.5,
        ecc_inner1: 0.6,
        ecc_inner2: 0.7,
        ecc_outer: 0.8,
        inc_inner1_inner2: 0.9,
        inc_inner1_outer: 1.0,
        inc_inner2_outer: 1.1,
    };

    assert_eq!(
        features.as_ordered(),
        [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1]
    );
}

#[test]
fn test_three_plus_one_ordering() {
    let features = ThreePlusOneFeatures {
        mratio_inner: 0.1,
        mratio_intermediate: 0.2,
        mratio_outer: 0.3,
        aratio_inner_intermediate: 0.4,
        aratio_intermediate_outer: 0.5,
        ecc_inner: 0.6,
        ecc_intermediate: 0.7,
        ecc_outer: 0.8,
        inc_inner_intermediate: 0.9,
        inc_inner_outer: 1.0,
        inc_intermediate_outer: 1.1,
    };

    assert_eq!(
        features.as_ordered(),
        [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1]
    );
}

#[test]
fn test_two_plus_two_reference_defaults() {
    // Shipped example: two equal-mass circular binaries at one fifth of the
    // outer separation
    assert_eq!(
        TwoPlusTwoFeatures::default().as_ordered(),
        [1.0, 1.0, 0.5, 0.2, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    );
}

#[test]
fn test_three_plus_one_reference_defaults() {
    assert_eq!(
        ThreePlusOneFeatures::default().as_ordered(),
        [1.0, 0.5, 0.33, 0.2, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    );
}

#[test]
fn test_two_plus_two_json_field_names() {
    let features: TwoPlusTwoFeatures = serde_json::from_str(
        r#"{
            "mratio_inner1": 1.0,
            "mratio_inner2": 1.0,
            "mratio_outer": 0.5,
            "aratio_inner1_outer": 0.2,
            "aratio_inner2_outer": 0.2,
            "ecc_inner1": 0.0,
            "ecc_inner2": 0.0,
            "ecc_outer": 0.0,
            "inc_inner1_inner2": 0.0,
            "inc_inner1_outer": 0.0,
            "inc_inner2_outer": 0.0
        }"#,
    )
    .expect("reference field names must deserialize");

    assert_eq!(features, TwoPlusTwoFeatures::default());
}

proptest! {
    /// Every parameter keeps its position regardless of value
    #[test]
    fn prop_two_plus_two_order_is_positional(values in any::<[f64; 11]>()) {
        let features = TwoPlusTwoFeatures {
            mratio_inner1: values[0],
            mratio_inner2: values[1],
            mratio_outer: values[2],
            aratio_inner1_outer: values[3],
            aratio_inner2_outer: values[4],
            ecc_inner1: values[5],
            ecc_inner2: values[6],
            ecc_outer: values[7],
            inc_inner1_inner2: values[8],
            inc_inner1_outer: values[9],
            inc_inner2_outer: values[10],
        };

        let ordered = features.as_ordered();
        for (index, value) in values.iter().enumerate() {
            // bit comparison so NaN inputs are covered too
            prop_assert_eq!(ordered[index].to_bits(), value.to_bits());
        }
    }
}

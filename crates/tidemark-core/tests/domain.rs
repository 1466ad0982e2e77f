// File: crates/tidemark-core/tests/domain.rs
// Purpose: Extents and category sets over record slices.

use tidemark_core::{compute_categories, compute_domain, Categories, ChartError, CountryTemperature, Extent, SeaLevel};

fn countries(pairs: &[(&str, f64)]) -> Vec<CountryTemperature> {
    pairs.iter().map(|&(c, v)| CountryTemperature::new(c, v)).collect()
}

#[test]
fn extent_of_two_records() {
    let recs = countries(&[("A", 1.0), ("B", 3.0)]);
    let d = compute_domain(&recs, CountryTemperature::TEMPERATURE_CHANGE).expect("domain");
    assert_eq!((d.min(), d.max()), (1.0, 3.0));
}

#[test]
fn extent_bounds_are_attained_values() {
    // deterministic pseudo-random sequences of varying length and sign
    let mut seed = 0x2545_f491_u64;
    for len in 1..40 {
        let values: Vec<f64> = (0..len)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((seed >> 11) as f64 / (1u64 << 53) as f64 - 0.5) * 200.0
            })
            .collect();
        let recs: Vec<_> = values.iter().map(|&v| CountryTemperature::new("X", v)).collect();
        let d = compute_domain(&recs, CountryTemperature::TEMPERATURE_CHANGE).expect("domain");
        assert!(d.min() <= d.max());
        assert!(values.contains(&d.min()) && values.contains(&d.max()));
        assert!(values.iter().all(|&v| d.contains(v)));
    }
}

#[test]
fn empty_input_is_an_error() {
    let none: Vec<SeaLevel> = Vec::new();
    let err = compute_domain(&none, SeaLevel::YEAR).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset { field: "year" }), "got {err:?}");
    let err = compute_categories(&none, SeaLevel::SEA_NAME).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset { field: "sea_name" }), "got {err:?}");
}

#[test]
fn single_record_gives_degenerate_extent() {
    let recs = countries(&[("Solo", 0.75)]);
    let d = compute_domain(&recs, CountryTemperature::TEMPERATURE_CHANGE).expect("domain");
    assert!(d.is_degenerate());
    assert_eq!(d.span(), 0.0);
}

#[test]
fn categories_keep_first_seen_order() {
    let recs = countries(&[("Latvia", 1.0), ("Estonia", 2.0), ("Latvia", 3.0), ("Finland", 0.5), ("Estonia", 9.0)]);
    let cats = compute_categories(&recs, CountryTemperature::COUNTRY).expect("categories");
    assert_eq!(cats.iter().collect::<Vec<_>>(), ["Latvia", "Estonia", "Finland"]);
    assert_eq!(cats.index_of("Finland"), Some(2));
    assert_eq!(cats.get(1), Some("Estonia"));
    assert!(!cats.contains("Narnia"));
}

#[test]
fn categories_from_values_rejects_empty() {
    assert!(Categories::from_values(Vec::<String>::new()).is_none());
}

#[test]
fn extent_validation_and_widening() {
    assert!(matches!(Extent::new(3.0, 1.0), Err(ChartError::InvalidExtent { .. })));
    assert!(Extent::new(f64::NAN, 1.0).is_err());
    assert!(Extent::new(0.0, f64::INFINITY).is_err());

    let e = Extent::new(0.16, 0.66).expect("extent").including(0.0);
    assert_eq!((e.min(), e.max()), (0.0, 0.66));
    let e = Extent::new(-2.0, -1.0).expect("extent").including(0.0);
    assert_eq!((e.min(), e.max()), (-2.0, 0.0));
    assert_eq!(e.including(f64::NAN), e);
    assert_eq!(e.clamp(5.0), 0.0);
}

#[test]
fn extent_skips_non_finite_values() {
    let e = Extent::from_values([f64::NAN, 2.0, f64::INFINITY, -1.0]).expect("extent");
    assert_eq!((e.min(), e.max()), (-1.0, 2.0));
    assert!(Extent::from_values([f64::NAN]).is_none());
}

#[test]
fn huge_values_from_records_stay_usable() {
    let recs = countries(&[("Low", -1e308), ("High", 1e308)]);
    let d = compute_domain(&recs, CountryTemperature::TEMPERATURE_CHANGE).expect("domain");
    assert_eq!((d.normalize(-1e308), d.normalize(1e308)), (0.0, 1.0));
    assert_eq!(d.midpoint(), 0.0);
    assert_eq!(d.lerp(1.0), 1e308);
}

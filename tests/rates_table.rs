//! 금리 테이블 검증/로드 테스트.
use installment_simulator::rates::{self, RateEntry, RateTable, RateTableError};

#[test]
fn built_in_has_18_ascending_entries() {
    let table = RateTable::built_in();
    assert_eq!(table.len(), 18);

    let entries = table.entries();
    assert_eq!(entries[0].installments, 1);
    assert_eq!(entries[0].rate_percent, 8.082258064516135);
    assert_eq!(entries[17].installments, 18);
    assert_eq!(entries[17].rate_percent, 22.453548387096774);

    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.installments, i as u32 + 1);
    }
    for pair in entries.windows(2) {
        assert!(pair[1].rate_percent >= pair[0].rate_percent);
    }
}

#[test]
fn rejects_zero_installments() {
    let result = RateTable::new(vec![RateEntry {
        installments: 0,
        rate_percent: 5.0,
    }]);
    assert!(matches!(result, Err(RateTableError::ZeroInstallments)));
}

#[test]
fn rejects_negative_or_non_finite_rate() {
    let negative = RateTable::new(vec![RateEntry {
        installments: 3,
        rate_percent: -0.1,
    }]);
    assert!(matches!(
        negative,
        Err(RateTableError::InvalidRate {
            installments: 3,
            ..
        })
    ));

    let nan = RateTable::new(vec![RateEntry {
        installments: 4,
        rate_percent: f64::NAN,
    }]);
    assert!(matches!(nan, Err(RateTableError::InvalidRate { .. })));
}

#[test]
fn rejects_duplicate_installments() {
    let result = RateTable::new(vec![
        RateEntry {
            installments: 6,
            rate_percent: 10.0,
        },
        RateEntry {
            installments: 6,
            rate_percent: 11.0,
        },
    ]);
    assert!(matches!(result, Err(RateTableError::Duplicate(6))));
}

#[test]
fn empty_table_is_allowed_at_construction() {
    let table = RateTable::new(Vec::new()).expect("empty table");
    assert!(table.is_empty());
}

#[test]
fn parses_rates_toml() {
    let src = r#"
[[rates]]
installments = 1
rate_percent = 2.5

[[rates]]
installments = 2
rate_percent = 4.75
"#;
    let table = rates::from_toml_str(src).expect("parse");
    assert_eq!(table.len(), 2);
    assert_eq!(table.entries()[1].installments, 2);
    assert_eq!(table.entries()[1].rate_percent, 4.75);
}

#[test]
fn rejects_malformed_or_invalid_toml() {
    assert!(matches!(
        rates::from_toml_str("rates = 3"),
        Err(RateTableError::Parse(_))
    ));

    let bad_rate = r#"
[[rates]]
installments = 1
rate_percent = -2.0
"#;
    assert!(matches!(
        rates::from_toml_str(bad_rate),
        Err(RateTableError::InvalidRate { .. })
    ));
}

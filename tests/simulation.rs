//! 핵심 시뮬레이션 계약에 대한 회귀 테스트.
use installment_simulator::rates::{RateEntry, RateTable};
use installment_simulator::simulation::{self, SimulationError};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn reference_values_for_price_1000() {
    let table = RateTable::built_in();
    let run = simulation::simulate(1000.0, &table).expect("simulate");
    assert_eq!(run.len(), 18);

    let first = &run[0];
    assert_eq!(first.installments, 1);
    assert!(close(first.total, 1080.8225806451613));
    assert!(close(first.monthly_payment, 1080.8225806451613));

    let twelfth = run
        .iter()
        .find(|q| q.installments == 12)
        .expect("12x entry");
    assert!(close(twelfth.total, 1168.1935483870968));
    assert!(close(twelfth.monthly_payment, 97.34946236559140));

    let last = run.last().expect("18x entry");
    assert_eq!(last.installments, 18);
    assert!(close(last.total, 1224.5354838709677));
    assert!(close(last.monthly_payment, 68.02974910394265));
}

#[test]
fn one_quote_per_entry_in_table_order() {
    let table = RateTable::built_in();
    let run = simulation::simulate(350.0, &table).expect("simulate");
    assert_eq!(run.len(), table.len());
    for (entry, quote) in table.entries().iter().zip(&run) {
        assert_eq!(entry.installments, quote.installments);
        assert_eq!(entry.rate_percent, quote.rate_percent);
    }
}

#[test]
fn preserves_declaration_order_of_unsorted_tables() {
    let table = RateTable::new(vec![
        RateEntry {
            installments: 12,
            rate_percent: 16.81935483870968,
        },
        RateEntry {
            installments: 1,
            rate_percent: 8.082258064516135,
        },
        RateEntry {
            installments: 6,
            rate_percent: 12.158064516129035,
        },
    ])
    .expect("table");
    let run = simulation::simulate(900.0, &table).expect("simulate");
    let order: Vec<u32> = run.iter().map(|q| q.installments).collect();
    assert_eq!(order, vec![12, 1, 6]);
}

#[test]
fn payment_times_count_matches_total() {
    let table = RateTable::built_in();
    let run = simulation::simulate(4999.90, &table).expect("simulate");
    for quote in &run {
        let rebuilt = quote.monthly_payment * f64::from(quote.installments);
        assert!(
            (rebuilt - quote.total).abs() <= 1e-9 * quote.total,
            "{}x: {} != {}",
            quote.installments,
            rebuilt,
            quote.total
        );
    }
}

#[test]
fn total_at_least_price_and_equal_only_at_zero_rate() {
    let table = RateTable::new(vec![
        RateEntry {
            installments: 1,
            rate_percent: 0.0,
        },
        RateEntry {
            installments: 2,
            rate_percent: 3.5,
        },
    ])
    .expect("table");
    let run = simulation::simulate(250.0, &table).expect("simulate");
    assert_eq!(run[0].total, 250.0);
    assert!(run[1].total > 250.0);
}

#[test]
fn totals_monotonic_on_built_in_table() {
    let table = RateTable::built_in();
    let run = simulation::simulate(1200.0, &table).expect("simulate");
    for pair in run.windows(2) {
        assert!(pair[1].total >= pair[0].total);
    }
}

#[test]
fn identical_inputs_give_bit_identical_runs() {
    let table = RateTable::built_in();
    let a = simulation::simulate(777.77, &table).expect("simulate");
    let b = simulation::simulate(777.77, &table).expect("simulate");
    assert_eq!(a, b);
    for (qa, qb) in a.iter().zip(&b) {
        assert_eq!(qa.monthly_payment.to_bits(), qb.monthly_payment.to_bits());
        assert_eq!(qa.total.to_bits(), qb.total.to_bits());
    }
}

#[test]
fn rejects_non_positive_and_non_finite_prices() {
    let table = RateTable::built_in();
    for price in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        match simulation::simulate(price, &table) {
            Err(SimulationError::InvalidPrice(_)) => {}
            other => panic!("price {price}: expected InvalidPrice, got {other:?}"),
        }
    }
}

#[test]
fn rejects_empty_table() {
    let table = RateTable::new(Vec::new()).expect("empty table is constructible");
    match simulation::simulate(500.0, &table) {
        Err(SimulationError::EmptyTable) => {}
        other => panic!("expected EmptyTable, got {other:?}"),
    }
}

#[test]
fn summary_derives_from_last_entry() {
    let table = RateTable::built_in();
    let run = simulation::simulate(1000.0, &table).expect("simulate");
    let summary = simulation::summarize(&run, 1000.0).expect("summary");
    assert_eq!(summary.max_installments, 18);
    assert!(close(summary.max_monthly_payment, 68.02974910394265));
    assert!(close(summary.total_interest, 224.5354838709677));
    assert!(close(summary.interest_percent_of_price, 22.45354838709677));

    assert!(simulation::summarize(&[], 1000.0).is_none());
}

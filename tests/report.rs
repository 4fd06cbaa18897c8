//! 내보내기 보고서 렌더링 테스트. 고정된 생성 시각으로 결정적으로 검증한다.
use chrono::{Local, TimeZone};
use installment_simulator::i18n::Translator;
use installment_simulator::rates::RateTable;
use installment_simulator::report::{self, ReportContext};
use installment_simulator::simulation;

#[test]
fn pt_report_contains_all_fields() {
    let table = RateTable::built_in();
    let run = simulation::simulate(1000.0, &table).expect("simulate");
    let ctx = ReportContext {
        product_name: "iPhone 13 Pro",
        price: 1000.0,
        run: &run,
    };
    let tr = Translator::new("pt-br");
    let generated = Local
        .with_ymd_and_hms(2026, 3, 14, 15, 9, 0)
        .single()
        .expect("timestamp");
    let doc = report::render_at(&ctx, &tr, generated);

    assert!(doc.contains("Alfa Prime"));
    assert!(doc.contains("Simulação de Pagamento"));
    assert!(doc.contains("Relatório detalhado de parcelamento"));
    assert!(doc.contains("iPhone 13 Pro"));
    assert!(doc.contains("R$ 1.000,00"));
    assert!(doc.contains("18x de R$ 68,03"));
    assert!(doc.contains("R$ 224,54 (22,45%)"));
    assert!(doc.contains("14/03/2026 15:09"));
    assert!(doc.contains("não representa um contrato de venda"));

    for quote in &run {
        assert!(doc.contains(&format!("{}x", quote.installments)));
    }
}

#[test]
fn en_report_uses_english_strings_and_formats() {
    let table = RateTable::built_in();
    let run = simulation::simulate(1000.0, &table).expect("simulate");
    let ctx = ReportContext {
        product_name: "Galaxy S24",
        price: 1000.0,
        run: &run,
    };
    let tr = Translator::new("en-us");
    let generated = Local
        .with_ymd_and_hms(2026, 3, 14, 15, 9, 0)
        .single()
        .expect("timestamp");
    let doc = report::render_at(&ctx, &tr, generated);

    assert!(doc.contains("Payment Simulation"));
    assert!(doc.contains("Galaxy S24"));
    assert!(doc.contains("R$1,000.00"));
    assert!(doc.contains("18x of R$68.03"));
    assert!(doc.contains("does not represent a sales contract"));
}

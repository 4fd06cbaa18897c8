//! 통화/백분율 표시 형식 테스트.
use installment_simulator::currency::{format_brl, format_percent};
use installment_simulator::i18n::Language;

#[test]
fn pt_currency_grouping_and_rounding() {
    assert_eq!(format_brl(1234.56, Language::Pt), "R$ 1.234,56");
    assert_eq!(format_brl(1080.8225806451613, Language::Pt), "R$ 1.080,82");
    assert_eq!(format_brl(0.5, Language::Pt), "R$ 0,50");
    assert_eq!(format_brl(1234567.891, Language::Pt), "R$ 1.234.567,89");
    assert_eq!(format_brl(68.02974910394265, Language::Pt), "R$ 68,03");
}

#[test]
fn en_currency_grouping() {
    assert_eq!(format_brl(1234.56, Language::En), "R$1,234.56");
    assert_eq!(format_brl(1000.0, Language::En), "R$1,000.00");
    assert_eq!(format_brl(0.5, Language::En), "R$0.50");
}

#[test]
fn negative_values_keep_sign() {
    assert_eq!(format_brl(-5.25, Language::Pt), "-R$ 5,25");
    assert_eq!(format_brl(-5.25, Language::En), "-R$5.25");
}

#[test]
fn percent_uses_language_decimal_separator() {
    assert_eq!(format_percent(8.082258064516135, Language::Pt), "8,08%");
    assert_eq!(format_percent(8.082258064516135, Language::En), "8.08%");
    assert_eq!(format_percent(22.453548387096774, Language::Pt), "22,45%");
    assert_eq!(format_percent(0.0, Language::En), "0.00%");
}

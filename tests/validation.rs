//! 폼 입력 검증 테스트. 두 필드는 독립적으로 검증된다.
use installment_simulator::validate::validate;

#[test]
fn accepts_trimmed_product_and_parsed_price() {
    let input = validate("  iPhone 13 Pro  ", " 4999.90 ").expect("valid input");
    assert_eq!(input.product_name, "iPhone 13 Pro");
    assert_eq!(input.price, 4999.90);
}

#[test]
fn flags_missing_product_alone() {
    let errors = validate("   ", "100").expect_err("missing product");
    assert!(errors.missing_product);
    assert!(!errors.invalid_price);
}

#[test]
fn flags_invalid_price_alone() {
    for price_text in ["abc", "", "0", "-10", "NaN", "inf", "1,5"] {
        let errors = validate("TV 55\"", price_text).expect_err("invalid price");
        assert!(!errors.missing_product, "price text {price_text:?}");
        assert!(errors.invalid_price, "price text {price_text:?}");
    }
}

#[test]
fn flags_both_errors_at_once() {
    let errors = validate("", "-1").expect_err("both invalid");
    assert!(errors.missing_product);
    assert!(errors.invalid_price);
    assert!(!errors.is_empty());
}

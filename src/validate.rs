/// 검증을 통과한 폼 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// trim된 제품명
    pub product_name: String,
    /// 해석된 현금가 [R$]
    pub price: f64,
}

/// 필드별 검증 실패 플래그. 두 필드는 독립적으로 검증되므로 동시에 설정될 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    /// 제품명이 비어 있음
    pub missing_product: bool,
    /// 가격이 유한한 양수로 해석되지 않음
    pub invalid_price: bool,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        !self.missing_product && !self.invalid_price
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.missing_product {
            parts.push("produto ausente");
        }
        if self.invalid_price {
            parts.push("preço inválido");
        }
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// 제품명과 가격 문자열을 검증한다. 성공 시 trim된 제품명과 f64 가격을 돌려준다.
/// 제어 흐름을 위해 패닉하지 않고 항상 구조화된 결과를 반환한다.
pub fn validate(product_name: &str, price_text: &str) -> Result<ValidatedInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let name = product_name.trim();
    if name.is_empty() {
        errors.missing_product = true;
    }
    let price = parse_price(price_text);
    if price.is_none() {
        errors.invalid_price = true;
    }
    match (price, errors.is_empty()) {
        (Some(price), true) => Ok(ValidatedInput {
            product_name: name.to_string(),
            price,
        }),
        _ => Err(errors),
    }
}

/// 가격 문자열을 f64로 해석한다. 유한한 양수만 허용한다.
fn parse_price(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

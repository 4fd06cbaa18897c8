use crate::rates::RateTable;

/// 할부 조건 하나에 대한 견적.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentQuote {
    /// 할부 개월 수
    pub installments: u32,
    /// 월 납입액 [R$]
    pub monthly_payment: f64,
    /// 총 납입액 [R$]
    pub total: f64,
    /// 적용 월 금리 [%]
    pub rate_percent: f64,
}

/// 시뮬레이션 전제조건 위반 오류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// 현금가가 0 이하이거나 유한하지 않음
    InvalidPrice(f64),
    /// 금리 테이블이 비어 있음
    EmptyTable,
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidPrice(v) => {
                write!(f, "preço inválido para simulação: {v}")
            }
            SimulationError::EmptyTable => write!(f, "tabela de juros vazia"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// 현금가에 대해 테이블의 모든 할부 조건을 계산한다.
/// 금리는 원금에 1회만 적용되는 플랫 방식이며 기간별 복리가 아니다.
/// 결과는 테이블 순서대로 항목당 하나씩이고, 여기서는 반올림하지 않는다.
/// 표시용 2자리 반올림은 표현 계층(currency)의 몫이다.
pub fn simulate(price: f64, table: &RateTable) -> Result<Vec<InstallmentQuote>, SimulationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(SimulationError::InvalidPrice(price));
    }
    if table.is_empty() {
        return Err(SimulationError::EmptyTable);
    }
    let run = table
        .entries()
        .iter()
        .map(|entry| {
            let fraction = entry.rate_percent / 100.0;
            let total = price * (1.0 + fraction);
            InstallmentQuote {
                installments: entry.installments,
                monthly_payment: total / f64::from(entry.installments),
                total,
                rate_percent: entry.rate_percent,
            }
        })
        .collect();
    Ok(run)
}

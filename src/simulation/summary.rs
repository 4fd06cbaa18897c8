use crate::simulation::installment::InstallmentQuote;

/// 시뮬레이션 실행 전체에서 파생되는 요약 값.
/// 대화형 화면과 보고서가 같은 숫자를 쓰도록 계산을 이곳 한 군데에 모은다.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    /// 최대 할부 개월 수
    pub max_installments: u32,
    /// 최대 할부 시 월 납입액 [R$]
    pub max_monthly_payment: f64,
    /// 총 이자액 [R$] (최대 할부 총액 - 현금가)
    pub total_interest: f64,
    /// 현금가 대비 총 이자 비율 [%]
    pub interest_percent_of_price: f64,
}

/// 마지막(최대 할부) 항목과 현금가로 요약을 만든다. 빈 실행이면 None.
pub fn summarize(run: &[InstallmentQuote], price: f64) -> Option<QuoteSummary> {
    let last = run.last()?;
    let total_interest = last.total - price;
    Some(QuoteSummary {
        max_installments: last.installments,
        max_monthly_payment: last.monthly_payment,
        total_interest,
        interest_percent_of_price: total_interest / price * 100.0,
    })
}

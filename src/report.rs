use chrono::{DateTime, Local};

use crate::currency;
use crate::i18n::{self, keys, Translator};
use crate::simulation::{summarize, InstallmentQuote};

/// 보고서 머리글과 창 제목에 쓰는 브랜드명.
pub const BRAND: &str = "Alfa Prime";

/// 내보내기 기본 파일명.
pub const DEFAULT_REPORT_FILE: &str = "simulacao-alfa-prime.txt";

const WIDTH: usize = 72;

/// 보고서 렌더링에 필요한 입력.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub product_name: &'a str,
    /// 현금가 [R$]
    pub price: f64,
    pub run: &'a [InstallmentQuote],
}

/// 현재 시각을 찍어 보고서를 만든다.
pub fn render(ctx: &ReportContext<'_>, tr: &Translator) -> String {
    render_at(ctx, tr, Local::now())
}

/// 지정한 생성 시각으로 인쇄용 텍스트 보고서를 만든다.
/// 요약 줄의 숫자는 전부 summarize에서 나오므로 화면 표시와 어긋날 수 없다.
pub fn render_at(
    ctx: &ReportContext<'_>,
    tr: &Translator,
    generated_at: DateTime<Local>,
) -> String {
    let lang = tr.language();
    let stamp = generated_at.format("%d/%m/%Y %H:%M").to_string();

    let mut doc = String::new();
    push_rule(&mut doc);
    push_centered(&mut doc, BRAND);
    push_centered(&mut doc, tr.t(keys::REPORT_TITLE));
    push_centered(&mut doc, tr.t(keys::REPORT_SUBTITLE));
    push_rule(&mut doc);

    push_kv(&mut doc, tr.t(keys::SUMMARY_PRODUCT), ctx.product_name);
    push_kv(
        &mut doc,
        tr.t(keys::SUMMARY_CASH_PRICE),
        &currency::format_brl(ctx.price, lang),
    );
    if let Some(summary) = summarize(ctx.run, ctx.price) {
        let per_month = i18n::fill_template(
            tr.t(keys::SUMMARY_PER_MONTH),
            &[
                ("n", summary.max_installments.to_string()),
                ("value", currency::format_brl(summary.max_monthly_payment, lang)),
            ],
        );
        push_kv(&mut doc, tr.t(keys::SUMMARY_MAX_INSTALLMENTS), &per_month);
        let interest = format!(
            "{} ({})",
            currency::format_brl(summary.total_interest, lang),
            currency::format_percent(summary.interest_percent_of_price, lang)
        );
        push_kv(&mut doc, tr.t(keys::SUMMARY_TOTAL_INTEREST), &interest);
    }
    doc.push('\n');

    doc.push_str(&format!(
        "{:>10}  {:>16}  {:>16}  {:>10}\n",
        tr.t(keys::RESULT_COL_INSTALLMENTS),
        tr.t(keys::RESULT_COL_MONTHLY),
        tr.t(keys::RESULT_COL_TOTAL),
        tr.t(keys::RESULT_COL_RATE)
    ));
    for quote in ctx.run {
        doc.push_str(&format!(
            "{:>9}x  {:>16}  {:>16}  {:>10}\n",
            quote.installments,
            currency::format_brl(quote.monthly_payment, lang),
            currency::format_brl(quote.total, lang),
            currency::format_percent(quote.rate_percent, lang)
        ));
    }

    doc.push('\n');
    push_rule(&mut doc);
    push_centered(
        &mut doc,
        &i18n::fill_template(tr.t(keys::REPORT_GENERATED), &[("datetime", stamp)]),
    );
    push_centered(&mut doc, tr.t(keys::REPORT_LEGAL1));
    push_centered(&mut doc, tr.t(keys::REPORT_LEGAL2));
    doc
}

fn push_rule(doc: &mut String) {
    doc.push_str(&"=".repeat(WIDTH));
    doc.push('\n');
}

/// 한 줄을 보고서 너비에 맞춰 가운데 정렬한다. 너비를 넘으면 그대로 둔다.
fn push_centered(doc: &mut String, line: &str) {
    let len = line.chars().count();
    if len < WIDTH {
        doc.push_str(&" ".repeat((WIDTH - len) / 2));
    }
    doc.push_str(line);
    doc.push('\n');
}

fn push_kv(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!("{label:<18} {value}\n"));
}

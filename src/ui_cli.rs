use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, Theme};
use crate::currency;
use crate::i18n::{self, keys, Translator};
use crate::rates::RateTable;
use crate::report::{self, ReportContext};
use crate::simulation::{self, InstallmentQuote};
use crate::validate;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simulate,
    ExportReport,
    Settings,
    Exit,
}

/// 마지막 시뮬레이션 실행. 보고서 내보내기에 쓰인다.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub product_name: String,
    pub price: f64,
    pub run: Vec<InstallmentQuote>,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIMULATE));
    println!("{}", tr.t(keys::MAIN_MENU_EXPORT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Simulate),
            "2" => return Ok(MenuChoice::ExportReport),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 시뮬레이션 메뉴를 처리한다: 입력 → 검증 → 계산 → 표 출력.
/// 검증 실패 시 필드별 메시지를 보여주고 다시 입력받는다.
pub fn handle_simulate(
    tr: &Translator,
    table: &RateTable,
) -> Result<SimulationOutcome, AppError> {
    println!("{}", tr.t(keys::SIMULATE_HEADING));
    let input = loop {
        let product = read_line(tr.t(keys::PROMPT_PRODUCT))?;
        let price_text = read_line(tr.t(keys::PROMPT_PRICE))?;
        match validate::validate(&product, &price_text) {
            Ok(input) => break input,
            Err(errors) => {
                println!("{}", tr.t(keys::VALIDATION_FIX_FORM));
                if errors.missing_product {
                    println!("- {}", tr.t(keys::VALIDATION_MISSING_PRODUCT));
                }
                if errors.invalid_price {
                    println!("- {}", tr.t(keys::VALIDATION_INVALID_PRICE));
                }
            }
        }
    };
    let run = simulation::simulate(input.price, table)?;
    print_results(tr, &input.product_name, input.price, &run);
    println!("{}", tr.t(keys::RESULT_SUCCESS));
    Ok(SimulationOutcome {
        product_name: input.product_name,
        price: input.price,
        run,
    })
}

/// 결과 표와 요약 블록을 출력한다. 대화형 메뉴와 simulate 서브커맨드가 같이 쓴다.
pub fn print_results(tr: &Translator, product_name: &str, price: f64, run: &[InstallmentQuote]) {
    let lang = tr.language();
    println!();
    println!(
        "{:>10}  {:>16}  {:>16}  {:>10}",
        tr.t(keys::RESULT_COL_INSTALLMENTS),
        tr.t(keys::RESULT_COL_MONTHLY),
        tr.t(keys::RESULT_COL_TOTAL),
        tr.t(keys::RESULT_COL_RATE)
    );
    for quote in run {
        println!(
            "{:>9}x  {:>16}  {:>16}  {:>10}",
            quote.installments,
            currency::format_brl(quote.monthly_payment, lang),
            currency::format_brl(quote.total, lang),
            currency::format_percent(quote.rate_percent, lang)
        );
    }
    println!();
    println!("{} {}", tr.t(keys::SUMMARY_PRODUCT), product_name);
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_CASH_PRICE),
        currency::format_brl(price, lang)
    );
    if let Some(summary) = simulation::summarize(run, price) {
        let per_month = i18n::fill_template(
            tr.t(keys::SUMMARY_PER_MONTH),
            &[
                ("n", summary.max_installments.to_string()),
                ("value", currency::format_brl(summary.max_monthly_payment, lang)),
            ],
        );
        println!("{} {}", tr.t(keys::SUMMARY_MAX_INSTALLMENTS), per_month);
        println!(
            "{} {} ({})",
            tr.t(keys::SUMMARY_TOTAL_INTEREST),
            currency::format_brl(summary.total_interest, lang),
            currency::format_percent(summary.interest_percent_of_price, lang)
        );
    }
}

/// 내보내기 메뉴를 처리한다. 저장할 실행이 없으면 안내만 하고 돌아간다.
pub fn handle_export(
    tr: &Translator,
    outcome: Option<&SimulationOutcome>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXPORT_HEADING));
    let outcome = match outcome {
        Some(o) => o,
        None => {
            println!("{}", tr.t(keys::EXPORT_NOTHING));
            return Ok(());
        }
    };
    let path_input = read_line(tr.t(keys::EXPORT_PROMPT_PATH))?;
    let path = if path_input.trim().is_empty() {
        report::DEFAULT_REPORT_FILE
    } else {
        path_input.trim()
    };
    let ctx = ReportContext {
        product_name: &outcome.product_name,
        price: outcome.price,
        run: &outcome.run,
    };
    std::fs::write(path, report::render(&ctx, tr))?;
    println!("{} {}", tr.t(keys::EXPORT_SAVED), path);
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true를 돌려줘 번역기를 다시 만들게 한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let theme_label = match cfg.theme {
        Theme::Light => tr.t(keys::THEME_LIGHT),
        Theme::Dark => tr.t(keys::THEME_DARK),
    };
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_THEME), theme_label);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            let changed = match lang.trim() {
                "1" => {
                    cfg.language = "pt-br".to_string();
                    true
                }
                "2" => {
                    cfg.language = "en-us".to_string();
                    true
                }
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    false
                }
            };
            if changed {
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            Ok(changed)
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_THEME_OPTIONS));
            let theme = read_line(tr.t(keys::PROMPT_SELECT))?;
            match theme.trim() {
                "1" => {
                    cfg.theme = Theme::Light;
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                }
                "2" => {
                    cfg.theme = Theme::Dark;
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                }
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
            Ok(false)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

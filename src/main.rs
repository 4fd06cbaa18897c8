use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use installment_simulator::i18n::{self, keys, Translator};
use installment_simulator::rates::RateTable;
use installment_simulator::report::{self, ReportContext};
use installment_simulator::{app, config, rates, simulation, ui_cli, validate};

/// Alfa Prime 할부 시뮬레이터의 CLI 진입점.
#[derive(Debug, Parser)]
#[command(
    name = "installment_simulator_cli",
    about = "Alfa Prime — Simulador de Pagamentos",
    version
)]
struct Cli {
    /// UI 언어 (auto/pt-br/en-us)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 (기본: locales/)
    #[arg(long)]
    lang_pack_dir: Option<String>,
    /// 금리 테이블 TOML 파일 경로 (기본: rates.toml 또는 내장 테이블)
    #[arg(long)]
    rates: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 한 번 시뮬레이션하고 결과를 출력한다.
    Simulate {
        /// 제품명
        product: String,
        /// 현금가 (예: 5000 또는 4999.90)
        price: String,
        /// 보고서를 저장할 파일 경로
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Erro: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let code = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let pack_dir = cli.lang_pack_dir.as_deref();
    let tr = Translator::new_with_pack(&code, pack_dir);

    let rates_path = cli
        .rates
        .clone()
        .or_else(|| cfg.rates_file.clone().map(PathBuf::from));
    let table = rates::load_or_built_in(rates_path.as_deref())?;

    match cli.command {
        Some(Command::Simulate {
            product,
            price,
            out,
        }) => run_once(&tr, &table, &product, &price, out.as_deref()),
        None => {
            app::run(&mut cfg, tr, &table, pack_dir)?;
            Ok(())
        }
    }
}

/// 비대화형 시뮬레이션: 검증 → 계산 → 표 출력 → 필요 시 보고서 저장.
fn run_once(
    tr: &Translator,
    table: &RateTable,
    product: &str,
    price: &str,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = match validate::validate(product, price) {
        Ok(input) => input,
        Err(errors) => {
            if errors.missing_product {
                eprintln!("{}", tr.t(keys::VALIDATION_MISSING_PRODUCT));
            }
            if errors.invalid_price {
                eprintln!("{}", tr.t(keys::VALIDATION_INVALID_PRICE));
            }
            return Err(Box::new(errors));
        }
    };
    let run = simulation::simulate(input.price, table)?;
    ui_cli::print_results(tr, &input.product_name, input.price, &run);
    if let Some(path) = out {
        let ctx = ReportContext {
            product_name: &input.product_name,
            price: input.price,
            run: &run,
        };
        fs::write(path, report::render(&ctx, tr))?;
        println!("{} {}", tr.t(keys::EXPORT_SAVED), path.display());
    }
    Ok(())
}

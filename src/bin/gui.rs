#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use std::{env, fs};

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;

use installment_simulator::{
    config::{self, Theme},
    currency,
    i18n::{self, keys, Translator},
    rates::{self, RateTable},
    report::{self, ReportContext},
    simulation::{self, InstallmentQuote},
    validate::{self, ValidatedInput, ValidationErrors},
};

const TOAST_DURATION: Duration = Duration::from_secs(3);

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/pt-br/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([720.0, 640.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        report::BRAND,
        native,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["alfa_prime.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 화면 하단에 잠시 표시되는 알림.
struct Toast {
    message: String,
    is_error: bool,
    expires_at: Instant,
}

/// 표시 대기 중인 계산. simulated_latency_ms가 0이면 다음 프레임에 바로 끝난다.
struct Pending {
    input: ValidatedInput,
    ready_at: Instant,
}

/// 마지막 계산 결과.
struct Outcome {
    product_name: String,
    price: f64,
    run: Vec<InstallmentQuote>,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    table: RateTable,
    /// 테이블 파일 로드 실패 시 내장 테이블로 대체했다는 안내
    rates_note: Option<String>,
    product_input: String,
    price_input: String,
    errors: ValidationErrors,
    outcome: Option<Outcome>,
    pending: Option<Pending>,
    toast: Option<Toast>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = Translator::new_with_pack(&code, None);
        let rates_path = config.rates_file.clone().map(PathBuf::from);
        let (table, rates_note) = match rates::load_or_built_in(rates_path.as_deref()) {
            Ok(table) => (table, None),
            Err(err) => (RateTable::built_in(), Some(err.to_string())),
        };
        Self {
            config,
            tr,
            table,
            rates_note,
            product_input: String::new(),
            price_input: String::new(),
            errors: ValidationErrors::default(),
            outcome: None,
            pending: None,
            toast: None,
        }
    }

    /// 테마를 전환하고 곧바로 config.toml에 저장한다.
    fn toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        if let Err(err) = self.config.save() {
            self.push_toast(err.to_string(), true);
        }
    }

    fn push_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error,
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    fn start_calculation(&mut self) {
        match validate::validate(&self.product_input, &self.price_input) {
            Ok(input) => {
                self.errors = ValidationErrors::default();
                let delay = Duration::from_millis(self.config.simulated_latency_ms);
                self.pending = Some(Pending {
                    input,
                    ready_at: Instant::now() + delay,
                });
            }
            Err(errors) => {
                self.errors = errors;
                let message = self.tr.t(keys::VALIDATION_FIX_FORM).to_string();
                self.push_toast(message, true);
            }
        }
    }

    /// 지연이 끝난 대기 계산을 마무리한다.
    fn poll_pending(&mut self, ctx: &egui::Context) {
        let ready = match &self.pending {
            Some(p) if Instant::now() >= p.ready_at => true,
            Some(p) => {
                ctx.request_repaint_after(p.ready_at.saturating_duration_since(Instant::now()));
                false
            }
            None => false,
        };
        if !ready {
            return;
        }
        if let Some(pending) = self.pending.take() {
            match simulation::simulate(pending.input.price, &self.table) {
                Ok(run) => {
                    self.outcome = Some(Outcome {
                        product_name: pending.input.product_name,
                        price: pending.input.price,
                        run,
                    });
                    let message = self.tr.t(keys::RESULT_SUCCESS).to_string();
                    self.push_toast(message, false);
                }
                Err(err) => self.push_toast(err.to_string(), true),
            }
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(report::BRAND);
            ui.label(egui::RichText::new(self.tr.t(keys::GUI_TAGLINE)).small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.config.theme {
                    Theme::Light => self.tr.t(keys::GUI_THEME_DARK),
                    Theme::Dark => self.tr.t(keys::GUI_THEME_LIGHT),
                };
                if ui.button(label).clicked() {
                    self.toggle_theme();
                }
            });
        });
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(self.tr.t(keys::GUI_LABEL_PRODUCT));
        let product_resp = ui.add(
            egui::TextEdit::singleline(&mut self.product_input)
                .hint_text(self.tr.t(keys::GUI_HINT_PRODUCT)),
        );
        if product_resp.changed() {
            self.errors.missing_product = false;
        }
        if self.errors.missing_product {
            ui.colored_label(
                egui::Color32::from_rgb(245, 101, 101),
                self.tr.t(keys::VALIDATION_MISSING_PRODUCT),
            );
        }
        ui.add_space(6.0);
        ui.label(self.tr.t(keys::GUI_LABEL_PRICE));
        let price_resp = ui.add(
            egui::TextEdit::singleline(&mut self.price_input)
                .hint_text(self.tr.t(keys::GUI_HINT_PRICE)),
        );
        if price_resp.changed() {
            sanitize_price_input(&mut self.price_input);
            self.errors.invalid_price = false;
        }
        if self.errors.invalid_price {
            ui.colored_label(
                egui::Color32::from_rgb(245, 101, 101),
                self.tr.t(keys::VALIDATION_INVALID_PRICE),
            );
        }
        if let Some(note) = &self.rates_note {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(note.as_str()).small());
        }
        ui.add_space(10.0);
        let calc_enabled = self.pending.is_none();
        if ui
            .add_enabled(calc_enabled, egui::Button::new(self.tr.t(keys::GUI_CALCULATE)))
            .clicked()
        {
            self.start_calculation();
        }
    }

    fn results(&mut self, ui: &mut egui::Ui) {
        let mut export_clicked = false;
        if let Some(outcome) = &self.outcome {
            let lang = self.tr.language();
            ui.add_space(16.0);
            egui::Grid::new("quotes")
                .striped(true)
                .min_col_width(100.0)
                .show(ui, |ui| {
                    ui.strong(self.tr.t(keys::RESULT_COL_INSTALLMENTS));
                    ui.strong(self.tr.t(keys::RESULT_COL_MONTHLY));
                    ui.strong(self.tr.t(keys::RESULT_COL_TOTAL));
                    ui.strong(self.tr.t(keys::RESULT_COL_RATE));
                    ui.end_row();
                    for quote in &outcome.run {
                        ui.label(format!("{}x", quote.installments));
                        ui.label(currency::format_brl(quote.monthly_payment, lang));
                        ui.label(currency::format_brl(quote.total, lang));
                        ui.label(currency::format_percent(quote.rate_percent, lang));
                        ui.end_row();
                    }
                });
            if let Some(summary) = simulation::summarize(&outcome.run, outcome.price) {
                ui.add_space(10.0);
                ui.label(format!(
                    "{} {}",
                    self.tr.t(keys::SUMMARY_PRODUCT),
                    outcome.product_name
                ));
                ui.label(format!(
                    "{} {}",
                    self.tr.t(keys::SUMMARY_CASH_PRICE),
                    currency::format_brl(outcome.price, lang)
                ));
                let per_month = i18n::fill_template(
                    self.tr.t(keys::SUMMARY_PER_MONTH),
                    &[
                        ("n", summary.max_installments.to_string()),
                        ("value", currency::format_brl(summary.max_monthly_payment, lang)),
                    ],
                );
                ui.label(format!(
                    "{} {}",
                    self.tr.t(keys::SUMMARY_MAX_INSTALLMENTS),
                    per_month
                ));
                ui.label(format!(
                    "{} {} ({})",
                    self.tr.t(keys::SUMMARY_TOTAL_INTEREST),
                    currency::format_brl(summary.total_interest, lang),
                    currency::format_percent(summary.interest_percent_of_price, lang)
                ));
            }
            ui.add_space(10.0);
            if ui.button(self.tr.t(keys::GUI_EXPORT)).clicked() {
                export_clicked = true;
            }
        }
        if export_clicked {
            self.export_report();
        }
    }

    /// 저장 대화상자를 띄우고 보고서를 파일로 쓴다.
    fn export_report(&mut self) {
        let (message, is_error) = match &self.outcome {
            None => (self.tr.t(keys::EXPORT_NOTHING).to_string(), true),
            Some(outcome) => {
                let picked = FileDialog::new()
                    .set_file_name(report::DEFAULT_REPORT_FILE)
                    .save_file();
                match picked {
                    None => return,
                    Some(path) => {
                        let ctx = ReportContext {
                            product_name: &outcome.product_name,
                            price: outcome.price,
                            run: &outcome.run,
                        };
                        match fs::write(&path, report::render(&ctx, &self.tr)) {
                            Ok(()) => (
                                format!(
                                    "{} {}",
                                    self.tr.t(keys::EXPORT_SAVED),
                                    path.display()
                                ),
                                false,
                            ),
                            Err(err) => (
                                format!("{} ({err})", self.tr.t(keys::GUI_EXPORT_FAILED)),
                                true,
                            ),
                        }
                    }
                }
            }
        };
        self.push_toast(message, is_error);
    }

    fn show_toast(&mut self, ctx: &egui::Context) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| Instant::now() >= t.expires_at)
        {
            self.toast = None;
        }
        if let Some(toast) = &self.toast {
            egui::TopBottomPanel::bottom("toast_bar").show(ctx, |ui| {
                let color = if toast.is_error {
                    egui::Color32::from_rgb(197, 48, 48)
                } else {
                    egui::Color32::from_rgb(56, 161, 105)
                };
                ui.colored_label(color, toast.message.as_str());
            });
            ctx.request_repaint_after(toast.expires_at.saturating_duration_since(Instant::now()));
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        match self.config.theme {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        }
        self.poll_pending(ctx);
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.top_bar(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.form(ui);
                if self.pending.is_some() {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(self.tr.t(keys::GUI_CALCULATING));
                    });
                }
                self.results(ui);
            });
        });
        self.show_toast(ctx);
    }
}

/// 가격 입력을 숫자와 소수점 하나로 제한한다.
fn sanitize_price_input(text: &mut String) {
    let mut cleaned = String::with_capacity(text.len());
    let mut seen_dot = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            cleaned.push(ch);
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
            cleaned.push(ch);
        }
    }
    if cleaned != *text {
        *text = cleaned;
    }
}

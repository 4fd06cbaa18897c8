use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIMULATE: &str = "main_menu.simulate";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const SIMULATE_HEADING: &str = "simulate.heading";
    pub const PROMPT_PRODUCT: &str = "prompt.product";
    pub const PROMPT_PRICE: &str = "prompt.price";

    pub const VALIDATION_MISSING_PRODUCT: &str = "validation.missing_product";
    pub const VALIDATION_INVALID_PRICE: &str = "validation.invalid_price";
    pub const VALIDATION_FIX_FORM: &str = "validation.fix_form";

    pub const RESULT_SUCCESS: &str = "result.success";
    pub const RESULT_COL_INSTALLMENTS: &str = "result.col_installments";
    pub const RESULT_COL_MONTHLY: &str = "result.col_monthly";
    pub const RESULT_COL_TOTAL: &str = "result.col_total";
    pub const RESULT_COL_RATE: &str = "result.col_rate";

    pub const SUMMARY_PRODUCT: &str = "summary.product";
    pub const SUMMARY_CASH_PRICE: &str = "summary.cash_price";
    pub const SUMMARY_MAX_INSTALLMENTS: &str = "summary.max_installments";
    pub const SUMMARY_TOTAL_INTEREST: &str = "summary.total_interest";
    pub const SUMMARY_PER_MONTH: &str = "summary.per_month";

    pub const EXPORT_HEADING: &str = "export.heading";
    pub const EXPORT_NOTHING: &str = "export.nothing";
    pub const EXPORT_PROMPT_PATH: &str = "export.prompt_path";
    pub const EXPORT_SAVED: &str = "export.saved";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_SUBTITLE: &str = "report.subtitle";
    pub const REPORT_GENERATED: &str = "report.generated";
    pub const REPORT_LEGAL1: &str = "report.legal1";
    pub const REPORT_LEGAL2: &str = "report.legal2";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_THEME: &str = "settings.current_theme";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_THEME_OPTIONS: &str = "settings.theme_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const THEME_LIGHT: &str = "settings.theme_light";
    pub const THEME_DARK: &str = "settings.theme_dark";

    pub const GUI_TAGLINE: &str = "gui.tagline";
    pub const GUI_LABEL_PRODUCT: &str = "gui.label_product";
    pub const GUI_LABEL_PRICE: &str = "gui.label_price";
    pub const GUI_HINT_PRODUCT: &str = "gui.hint_product";
    pub const GUI_HINT_PRICE: &str = "gui.hint_price";
    pub const GUI_CALCULATE: &str = "gui.calculate";
    pub const GUI_CALCULATING: &str = "gui.calculating";
    pub const GUI_EXPORT: &str = "gui.export";
    pub const GUI_EXPORT_FAILED: &str = "gui.export_failed";
    pub const GUI_THEME_DARK: &str = "gui.theme_dark";
    pub const GUI_THEME_LIGHT: &str = "gui.theme_light";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(pt/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 pt로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 포르투갈어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// "{key}" 자리표시자를 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "pt" => Some("pt".into()),
        "pt-br" => Some("pt-br".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "pt-br" | "pt" => parse_toml_to_map(include_str!("../locales/pt-br.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando o aplicativo.",
        MAIN_MENU_TITLE => "\n=== Alfa Prime — Simulador de Pagamentos ===",
        MAIN_MENU_SIMULATE => "1) Simular parcelamento",
        MAIN_MENU_EXPORT => "2) Exportar última simulação",
        MAIN_MENU_SETTINGS => "3) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Selecione uma opção: ",
        PROMPT_SELECT => "Selecione: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        SIMULATE_HEADING => "\n-- Simulação de Parcelamento --",
        PROMPT_PRODUCT => "Modelo do produto: ",
        PROMPT_PRICE => "Preço à vista [R$]: ",
        VALIDATION_MISSING_PRODUCT => "Por favor, insira o modelo do produto",
        VALIDATION_INVALID_PRICE => "Por favor, insira um preço válido",
        VALIDATION_FIX_FORM => "Por favor, corrija os erros no formulário",
        RESULT_SUCCESS => "Cálculo realizado com sucesso!",
        RESULT_COL_INSTALLMENTS => "Parcelas",
        RESULT_COL_MONTHLY => "Valor Mensal",
        RESULT_COL_TOTAL => "Total",
        RESULT_COL_RATE => "Taxa",
        SUMMARY_PRODUCT => "Produto:",
        SUMMARY_CASH_PRICE => "Valor à Vista:",
        SUMMARY_MAX_INSTALLMENTS => "Máx. Parcelas:",
        SUMMARY_TOTAL_INTEREST => "Juros Total:",
        SUMMARY_PER_MONTH => "{n}x de {value}",
        EXPORT_HEADING => "\n-- Exportar Simulação --",
        EXPORT_NOTHING => "Nenhuma simulação para exportar. Calcule primeiro.",
        EXPORT_PROMPT_PATH => "Arquivo de destino (Enter = simulacao-alfa-prime.txt): ",
        EXPORT_SAVED => "Relatório salvo em:",
        REPORT_TITLE => "Simulação de Pagamento",
        REPORT_SUBTITLE => "Relatório detalhado de parcelamento",
        REPORT_GENERATED => "Simulação gerada por Alfa Prime em {datetime}",
        REPORT_LEGAL1 => {
            "Este documento é apenas uma simulação e não representa um contrato de venda."
        }
        REPORT_LEGAL2 => "Valores e condições sujeitos a alteração sem aviso prévio.",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT_LANGUAGE => "Idioma atual:",
        SETTINGS_CURRENT_THEME => "Tema atual:",
        SETTINGS_OPTIONS => "1) Idioma  2) Tema",
        SETTINGS_PROMPT_CHANGE => "Número para alterar (Enter cancela): ",
        SETTINGS_LANGUAGE_OPTIONS => "1) pt-br  2) en-us",
        SETTINGS_THEME_OPTIONS => "1) Claro  2) Escuro",
        SETTINGS_INVALID => "Entrada inválida; nada foi alterado.",
        SETTINGS_SAVED => "Configuração salva.",
        THEME_LIGHT => "Claro",
        THEME_DARK => "Escuro",
        GUI_TAGLINE => "Simulador de Pagamentos",
        GUI_LABEL_PRODUCT => "Modelo do Produto",
        GUI_LABEL_PRICE => "Preço",
        GUI_HINT_PRODUCT => "Ex: iPhone 13 Pro",
        GUI_HINT_PRICE => "Ex: 5000",
        GUI_CALCULATE => "Calcular Parcelas",
        GUI_CALCULATING => "Calculando...",
        GUI_EXPORT => "Exportar Relatório",
        GUI_EXPORT_FAILED => "Erro ao salvar o relatório",
        GUI_THEME_DARK => "🌙 Modo Escuro",
        GUI_THEME_LIGHT => "☀️ Modo Claro",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Alfa Prime — Payment Simulator ===",
        MAIN_MENU_SIMULATE => "1) Simulate installments",
        MAIN_MENU_EXPORT => "2) Export last simulation",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select an option: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid option. Please try again.",
        SIMULATE_HEADING => "\n-- Installment Simulation --",
        PROMPT_PRODUCT => "Product model: ",
        PROMPT_PRICE => "Cash price [R$]: ",
        VALIDATION_MISSING_PRODUCT => "Please enter the product model",
        VALIDATION_INVALID_PRICE => "Please enter a valid price",
        VALIDATION_FIX_FORM => "Please fix the errors in the form",
        RESULT_SUCCESS => "Calculation completed successfully!",
        RESULT_COL_INSTALLMENTS => "Installments",
        RESULT_COL_MONTHLY => "Monthly",
        RESULT_COL_TOTAL => "Total",
        RESULT_COL_RATE => "Rate",
        SUMMARY_PRODUCT => "Product:",
        SUMMARY_CASH_PRICE => "Cash Price:",
        SUMMARY_MAX_INSTALLMENTS => "Max. Installments:",
        SUMMARY_TOTAL_INTEREST => "Total Interest:",
        SUMMARY_PER_MONTH => "{n}x of {value}",
        EXPORT_HEADING => "\n-- Export Simulation --",
        EXPORT_NOTHING => "No simulation to export. Calculate first.",
        EXPORT_PROMPT_PATH => "Target file (Enter = simulacao-alfa-prime.txt): ",
        EXPORT_SAVED => "Report saved to:",
        REPORT_TITLE => "Payment Simulation",
        REPORT_SUBTITLE => "Detailed installment report",
        REPORT_GENERATED => "Simulation generated by Alfa Prime at {datetime}",
        REPORT_LEGAL1 => "This document is a simulation only and does not represent a sales contract.",
        REPORT_LEGAL2 => "Values and conditions are subject to change without notice.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_THEME => "Current theme:",
        SETTINGS_OPTIONS => "1) Language  2) Theme",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter cancels): ",
        SETTINGS_LANGUAGE_OPTIONS => "1) pt-br  2) en-us",
        SETTINGS_THEME_OPTIONS => "1) Light  2) Dark",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        THEME_LIGHT => "Light",
        THEME_DARK => "Dark",
        GUI_TAGLINE => "Payment Simulator",
        GUI_LABEL_PRODUCT => "Product Model",
        GUI_LABEL_PRICE => "Price",
        GUI_HINT_PRODUCT => "Ex: iPhone 13 Pro",
        GUI_HINT_PRICE => "Ex: 5000",
        GUI_CALCULATE => "Calculate Installments",
        GUI_CALCULATING => "Calculating...",
        GUI_EXPORT => "Export Report",
        GUI_EXPORT_FAILED => "Failed to save the report",
        GUI_THEME_DARK => "🌙 Dark Mode",
        GUI_THEME_LIGHT => "☀️ Light Mode",
        _ => return None,
    })
}

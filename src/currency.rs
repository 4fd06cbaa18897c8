use crate::i18n::Language;

/// BRL 금액을 언어별 관례로 표기한다. 표시용 2자리 반올림은 여기서만 일어나고
/// 계산에 저장된 값에는 절대 되돌아가지 않는다.
/// pt-BR: "R$ 1.234,56" / en-US: "R$1,234.56"
pub fn format_brl(value: f64, lang: Language) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match lang {
        Language::Pt => {
            let grouped = group_thousands(integer, '.');
            format!("{sign}R$ {grouped},{fraction:02}")
        }
        Language::En => {
            let grouped = group_thousands(integer, ',');
            format!("{sign}R${grouped}.{fraction:02}")
        }
    }
}

/// 백분율을 소수 2자리로 표기한다 (pt-BR은 쉼표 구분).
pub fn format_percent(value: f64, lang: Language) -> String {
    let text = format!("{value:.2}");
    match lang {
        Language::Pt => format!("{}%", text.replace('.', ",")),
        Language::En => format!("{text}%"),
    }
}

fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

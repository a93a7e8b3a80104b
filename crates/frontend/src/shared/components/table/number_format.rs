//! Утилиты форматирования чисел для таблиц и итогов

/// Вставляет пробел между группами из трёх цифр целой части
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    format!("{}{}", sign, result)
}

/// Число с разделителем тысяч и заданным количеством знаков после точки
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// Денежное значение: 2 знака и код валюты
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", format_number_with_decimals(value, 2), currency)
}

/// Количество в штуках
pub fn format_quantity(value: u64) -> String {
    group_thousands(&value.to_string())
}

use crate::models::Transaction;

/// `1234.5` -> `"$ 1,234.50"`, negatives get a leading `-`
pub fn format_price(value: f64, currency_symbol: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{} {}.{:02}", sign, currency_symbol, grouped, cents % 100)
}

/// `dd/mm/yyyy` when the timestamp parses, the raw text otherwise
pub fn format_date(transaction: &Transaction) -> String {
    match transaction.created_at_utc() {
        Some(at) => at.format("%d/%m/%Y").to_string(),
        None => transaction.created_at.clone(),
    }
}

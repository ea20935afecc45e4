//! 金額表示（インド式桁区切り: 1,23,456.00）

/// `₹1,23,456.00`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format_currency(0.0);
    }
    let paise = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, group_digits(paise / 100), paise % 100)
}

/// 価格帯ラベル用（小数なし）
pub fn format_whole(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.max(0.0).round() as u64 } else { 0 };
    format!("₹{}", group_digits(rounded))
}

/// 下3桁、以降2桁ごとにカンマ
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

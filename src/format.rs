pub const TITLE_WIDTH: usize = 30;
pub const DESCRIPTION_WIDTH: usize = 23;
pub const AMOUNT_WIDTH: usize = 7;

pub fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// An odd leftover goes to the right.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;

    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

pub fn right_justify_amount(amount: f64, width: usize) -> String {
    format!("{:>width$.2}", amount, width = width)
}

pub fn ledger_line(description: &str, amount: f64) -> String {
    let mut line = pad_right(truncate(description, DESCRIPTION_WIDTH), DESCRIPTION_WIDTH);
    line.push_str(&right_justify_amount(amount, AMOUNT_WIDTH));
    line
}

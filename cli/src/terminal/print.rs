use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Target for report lines; the formatter writes these to stdout verbatim.
pub const PRINT_TARGET: &str = "domval::print";
pub const RAW_MSG_FIELD: &str = "raw_msg";

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ DOMVAL v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// Sets the dot padding used by [`aligned_line`] to fit the longest key.
pub fn set_key_width(keys: &[&str]) {
    let width: usize = keys.iter().map(|key| key.chars().count()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.chars().count()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(key_width + 1 - key.chars().count());
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_width_tracks_longest_key_in_chars() {
        set_key_width(&["Reasoning", "Estimated value", "Ω"]);
        assert_eq!(GLOBAL_KEY_WIDTH.get(), 15);

        set_key_width(&[]);
        assert_eq!(GLOBAL_KEY_WIDTH.get(), 0);
    }

    #[test]
    fn plain_and_colored_values_keep_or_take_default_color() {
        let plain: ColoredString = "value".with_default(Color::Red);
        assert_eq!(plain.fgcolor, Some(Color::Red));

        let styled: ColoredString = "value".green().with_default(Color::Red);
        assert_eq!(styled.fgcolor, Some(Color::Green));
    }
}

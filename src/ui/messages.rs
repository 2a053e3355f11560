//! User-facing status lines. Results go to stdout, failures to stderr.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{FG_GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{FG_YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{FG_RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

/// Indented secondary line under a status message (e.g. one import error).
pub fn detail<T: fmt::Display>(msg: T) {
    println!("   {DIM}•{RESET} {msg}");
}

/// Section title followed by a rule of `sep` characters.
pub fn header<T: fmt::Display>(title: T, sep: &str) {
    let title = title.to_string();
    let rule_char = sep.chars().next().unwrap_or('-');
    let width = unicode_width::UnicodeWidthStr::width(title.as_str()).max(20);
    println!("\n{FG_BLUE}{BOLD}{title}{RESET}");
    println!("{}", rule_char.to_string().repeat(width));
}

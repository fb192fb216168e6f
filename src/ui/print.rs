//! One-line status messages printed outside any dialog.

use colored::{ColoredString, Colorize};

/// Forces colour on or off for every message below.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

pub fn success(message: &str) -> ColoredString {
    format!("✓ {message}").green()
}

pub fn error(message: &str) -> ColoredString {
    format!("✗ {message}").red()
}

pub fn warning(message: &str) -> ColoredString {
    format!("⚠ {message}").yellow()
}

pub fn info(message: &str) -> ColoredString {
    format!("ℹ {message}").blue()
}

pub fn status(message: &str) -> ColoredString {
    format!("• {message}").green()
}

/// `[step/total] message`
pub fn step(step: usize, total: usize, message: &str) -> String {
    format!("[{step}/{total}] {message}")
}

pub fn print_success(message: &str) {
    println!("{}", success(message));
}

pub fn print_error(message: &str) {
    eprintln!("{}", error(message));
}

pub fn print_warning(message: &str) {
    println!("{}", warning(message));
}

pub fn print_info(message: &str) {
    println!("{}", info(message));
}

pub fn print_status(message: &str) {
    println!("{}", status(message));
}

pub fn print_step(current: usize, total: usize, message: &str) {
    println!("{}", step(current, total, message));
}

//! Colored terminal message helpers.

use std::fmt;

use colored::Colorize;

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[\u{2713}]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", title.to_string().bold());
}

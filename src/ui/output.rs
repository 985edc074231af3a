use crate::ast::Location;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn file_header(path: &str) {
    println!("{} {}", Icons::FILE, path.style(theme().header.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

/// `start-end` span of a node, padded for alignment
pub fn location(loc: &Location) -> String {
    format!("{:<12}", loc.to_string()).style(theme().location.clone()).to_string()
}

/// One extracted comment, continuation lines indented under the first
pub fn comment(loc: &Location, text: &str) {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    println!("  {} {}", location(loc), first.style(theme().text.clone()));
    for line in lines {
        println!("  {:<12} {}", "", line.style(theme().text.clone()));
    }
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}

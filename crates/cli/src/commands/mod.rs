//! Command implementations.
//!
//! Each command builds its services from the shared [`Site`], performs one
//! page action, and returns the text to print.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod customize;
pub mod header;
pub mod menu;

use std::fmt::Write;

use askama::Template;

use jeen_storefront::db::FileStore;
use jeen_storefront::views::CartView;
use jeen_storefront::{AppError, Storefront};

/// The storefront backed by the data directory.
pub type Site = Storefront<FileStore>;

/// Render an askama template.
fn render(template: &impl Template) -> Result<String, AppError> {
    Ok(template.render()?)
}

/// Serialize a value for `--json`.
fn to_json(value: &impl serde::Serialize) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Convert a 1-based line number into a cart index.
fn line_index(line: usize, len: usize) -> Result<usize, AppError> {
    match line.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(AppError::BadRequest(format!(
            "No cart line {line} (the cart has {len} lines)."
        ))),
    }
}

/// Plain-text cart: item lines, summary and total.
fn cart_text(view: &CartView) -> String {
    if view.is_empty() {
        return format!("{}\n{}\nTotal: {}", view.empty_message(), view.summary_header, view.total);
    }

    let mut out = String::new();
    for item in &view.items {
        let _ = writeln!(
            out,
            "{}. {} - {} (qty {}) {}",
            item.index + 1,
            item.name,
            item.description,
            item.quantity,
            item.price
        );
    }
    let _ = writeln!(out, "\n{}", view.summary_header);
    for row in &view.summary {
        let _ = writeln!(out, "  {:<30} {}", row.label, row.line_total);
    }
    let _ = write!(out, "Total: {}", view.total);
    out
}

//! Formatted output helpers for CLI commands.
//!
//! Renders documents as indented resource trees and one-line summaries.

use tfleet_template::fragment::Fragment;

/// Formats a count with a singular or plural noun (e.g., "1 module", "3 modules").
#[must_use]
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// One-line summary of resources and modules, nested modules included.
#[must_use]
pub fn summary(fragment: &Fragment) -> String {
    format!(
        "{} in {}",
        format_count(fragment.total_resource_count(), "resource"),
        format_count(module_count(fragment), "module")
    )
}

fn module_count(fragment: &Fragment) -> usize {
    fragment.module.len() + fragment.module.values().map(module_count).sum::<usize>()
}

/// Renders every resource and module as an indented tree, one line each.
#[must_use]
pub fn render_tree(fragment: &Fragment) -> Vec<String> {
    let mut lines = Vec::new();
    render_level(fragment, 0, &mut lines);
    lines
}

fn render_level(fragment: &Fragment, depth: usize, lines: &mut Vec<String>) {
    let indent = "    ".repeat(depth);
    for (kind, blocks) in &fragment.resource {
        for name in blocks.keys() {
            lines.push(format!("{indent}+ {kind}.{name}"));
        }
    }
    for (name, body) in &fragment.module {
        lines.push(format!("{indent}module.{name}"));
        render_level(body, depth + 1, lines);
    }
}

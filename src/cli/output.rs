//! Output formatting and progress indicators for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::BoardState;

/// Create a spinner for long-running tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render the board as a 3x3 grid with column and row separators
pub fn render_board(state: &BoardState) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            out.push(state.get(row * 3 + col).to_char());
            if col < 2 {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---------\n");
        }
    }
    out
}

/// Render the cell-index grid shown before an interactive game
pub fn render_index_grid() -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            out.push_str(&(row * 3 + col).to_string());
            if col < 2 {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---------\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(986410), "986,410");
    }

    #[test]
    fn test_render_board() {
        let state = BoardState::from_string("XOX.O.X..").unwrap();
        let rendered = render_board(&state);
        assert!(rendered.starts_with("X | O | X\n"));
        assert!(rendered.contains(". | O | .\n"));
    }

    #[test]
    fn test_render_index_grid() {
        let grid = render_index_grid();
        assert!(grid.starts_with("0 | 1 | 2\n"));
        assert!(grid.contains("6 | 7 | 8"));
    }
}

/// Greedy word wrap for the error panel. Always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Shortens `text` to at most `width` characters, marking the cut with `…`.
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Formats a dataset number, showing `-` where the dataset has no value.
pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(wrap("failed to parse periodic-table.json", 16), vec![
            "failed to parse",
            "periodic-table.json"
        ]);
    }

    #[test]
    fn wrap_empty_text_yields_one_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn fit_keeps_short_text() {
        assert_eq!(fit("H-O Bonds", 20), "H-O Bonds");
    }

    #[test]
    fn fit_counts_characters_not_bytes() {
        assert_eq!(fit("Length (Å)", 10), "Length (Å)");
        assert_eq!(fit("Pauling χ value", 9), "Pauling …");
    }

    #[test]
    fn format_optional_marks_missing_values() {
        assert_eq!(format_optional(Some(6.94), 2), "6.94");
        assert_eq!(format_optional(None, 2), "-");
    }
}

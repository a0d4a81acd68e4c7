// ABOUTME: Small string helpers shared by config parsing and the API client
// ABOUTME: Comma-list splitting and UTF-8 safe truncation for error previews

/// Splits a comma-separated value, trimming each token and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.len() <= max_chars {
        return s.to_string();
    }

    // Find a valid UTF-8 boundary at or before max_chars
    let mut boundary = max_chars;
    while boundary > 0 && !s.is_char_boundary(boundary) {
        boundary -= 1;
    }

    if boundary == 0 {
        return String::new();
    }

    format!("{}...", &s[..boundary])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(split_list("en, es ,,fr"), vec!["en", "es", "fr"]);
    }

    #[test]
    fn test_split_list_preserves_order() {
        assert_eq!(split_list("fr,en,de"), vec!["fr", "en", "de"]);
    }

    #[test]
    fn test_split_list_blank() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn test_truncate_str_short() {
        assert_eq!(truncate_str("hello", 100), "hello");
    }

    #[test]
    fn test_truncate_str_long() {
        let result = truncate_str("hello world", 7);
        assert!(result.starts_with("hello"));
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_str_utf8() {
        let text = "Fehler: Übersetzung nicht gefunden für español";
        let result = truncate_str(text, 9);
        // 'Ü' straddles byte 9, so the cut moves back to byte 8
        assert_eq!(result, "Fehler: ...");
    }
}

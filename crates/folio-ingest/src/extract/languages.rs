//! Language extraction

use crate::items::dedup_case_insensitive;

const LANGUAGE_SEPARATORS: &[char] = &[',', '/', ';', '\n'];

fn is_edge_noise(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '•' | '*' | '·' | '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'')
}

/// Split the languages section into individual entries.
pub fn extract_languages(text: &str) -> Vec<String> {
    dedup_case_insensitive(
        text.split(LANGUAGE_SEPARATORS)
            .map(|token| token.trim_matches(is_edge_noise))
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_trim() {
        let text = "English - Fluent, Russian - Native; Kazakh - Native\n- German (A2).";
        assert_eq!(
            extract_languages(text),
            vec!["English - Fluent", "Russian - Native", "Kazakh - Native", "German (A2)"]
        );
    }

    #[test]
    fn test_empty_tokens_dropped() {
        assert!(extract_languages(" , ;\n/ ").is_empty());
        assert!(extract_languages("").is_empty());
    }
}

use console::style;
use similar::{ChangeTag, TextDiff};

/// Character-level diff from `query` to `matched`.
///
/// Text only in the query is shown as removed, text only in the matched
/// question as inserted. Without color the markers are `[-...-]` and
/// `{+...+}`.
pub fn render_inline_diff(query: &str, matched: &str, colored: bool) -> String {
    let diff = TextDiff::from_chars(query, matched);

    // Merge consecutive changes with the same tag.
    let mut runs: Vec<(ChangeTag, String)> = Vec::new();
    for change in diff.iter_all_changes() {
        match runs.last_mut() {
            Some((tag, text)) if *tag == change.tag() => text.push_str(change.value()),
            _ => runs.push((change.tag(), change.value().to_string())),
        }
    }

    let mut out = String::new();
    for (tag, text) in runs {
        let piece = match (tag, colored) {
            (ChangeTag::Equal, _) => text,
            (ChangeTag::Delete, true) => style(text).red().strikethrough().to_string(),
            (ChangeTag::Insert, true) => style(text).green().underlined().to_string(),
            (ChangeTag::Delete, false) => format!("[-{}-]", text),
            (ChangeTag::Insert, false) => format!("{{+{}+}}", text),
        };
        out.push_str(&piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_has_no_markers() {
        assert_eq!(render_inline_diff("La Tierra", "La Tierra", false), "La Tierra");
    }

    #[test]
    fn test_plain_markers() {
        let out = render_inline_diff("abXd", "abYd", false);
        assert!(out.starts_with("ab"));
        assert!(out.ends_with('d'));
        assert!(out.contains("[-X-]"));
        assert!(out.contains("{+Y+}"));
    }

    #[test]
    fn test_pure_insertion() {
        assert_eq!(render_inline_diff("ab", "abc", false), "ab{+c+}");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(render_inline_diff("", "abc", false), "{+abc+}");
    }
}

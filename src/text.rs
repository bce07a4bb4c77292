//! Small string helpers shared by the URL functions.

/// First character of `s` as a string slice, or `""` for empty input.
#[must_use]
pub fn first_char(s: &str) -> &str {
    s.chars().next().map_or(s, |c| &s[..c.len_utf8()])
}

/// Last character of `s` as a string slice, or `""` for empty input.
#[must_use]
pub fn last_char(s: &str) -> &str {
    s.char_indices().next_back().map_or(s, |(i, _)| &s[i..])
}

/// Append `/` unless `s` already ends with one.
///
/// Empty input becomes `"/"`. For URLs use
/// [`ensure_trailing_slash`](crate::url_utils::ensure_trailing_slash), which
/// leaves file resources and empty strings alone.
#[must_use]
pub fn add_trailing_slash(s: &str) -> String {
    if last_char(s) == "/" {
        s.to_string()
    } else {
        format!("{s}/")
    }
}

/// Case-insensitive check for any of `suffixes` at the end of `s`.
///
/// `suffixes` must be lowercase.
pub(crate) fn ends_with_any_ignore_case(s: &str, suffixes: &[&str]) -> bool {
    let lower = s.to_lowercase();
    suffixes.iter().any(|suffix| lower.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_char() {
        assert_eq!(first_char("https://x"), "h");
        assert_eq!(first_char("é/"), "é");
        assert_eq!(first_char(""), "");
    }

    #[test]
    fn test_last_char() {
        assert_eq!(last_char("https://x/"), "/");
        assert_eq!(last_char("naïve"), "e");
        assert_eq!(last_char("caf\u{e9}"), "\u{e9}");
        assert_eq!(last_char(""), "");
    }

    #[test]
    fn test_add_trailing_slash() {
        assert_eq!(add_trailing_slash("a/b"), "a/b/");
        assert_eq!(add_trailing_slash("a/b/"), "a/b/");
        assert_eq!(add_trailing_slash(""), "/");
    }

    #[test]
    fn test_ends_with_any_ignore_case() {
        assert!(ends_with_any_ignore_case("X.PNG", &[".png"]));
        assert!(!ends_with_any_ignore_case("x.png/", &[".png"]));
        assert!(!ends_with_any_ignore_case("", &[".png"]));
    }
}

/// Name used when nothing valid is left of a tag
pub const FALLBACK_TAG: &str = "node";

/// Prefix for sanitized names that do not start with a letter
pub const PREFIX_MARKER: &str = "t_";

/// Normalize an arbitrary label into a valid element name.
///
/// Leading characters up to the first ASCII letter are dropped, every
/// remaining character outside `[A-Za-z0-9_\-:.]` becomes `_`. Never fails,
/// and applying it twice gives the same result as applying it once.
pub fn sanitize_tag(raw: &str) -> String {
    let stripped = raw.trim_start_matches(|c: char| !c.is_ascii_alphabetic());
    if stripped.is_empty() {
        return FALLBACK_TAG.to_string();
    }

    let sanitized: String = stripped
        .chars()
        .map(|c| if is_name_char(c) { c } else { '_' })
        .collect();

    if sanitized.starts_with(|c: char| c.is_ascii_alphabetic()) {
        sanitized
    } else {
        format!("{PREFIX_MARKER}{sanitized}")
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case("p", "p")]
    #[case("my tag", "my_tag")]
    #[case("123abc", "abc")]
    #[case("--x--", "x--")]
    #[case("ns:item.v2", "ns:item.v2")]
    #[case("über", "ber")]
    #[case("a/b\\c", "a_b_c")]
    #[case("tag<script>", "tag_script_")]
    #[case("", FALLBACK_TAG)]
    #[case("   ", FALLBACK_TAG)]
    #[case("1234", FALLBACK_TAG)]
    #[case("日本語", FALLBACK_TAG)]
    #[case("a日本", "a__")]
    fn test_sanitize_tag(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_tag(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("hello world")]
    #[case("9lives")]
    #[case("::a::")]
    #[case("x\u{0}y")]
    #[case("_private")]
    #[case("ñandú")]
    fn test_sanitize_is_idempotent_and_valid(#[case] raw: &str) {
        let valid = Regex::new(r"^[A-Za-z][A-Za-z0-9_\-:.]*$").unwrap();
        let once = sanitize_tag(raw);
        assert_eq!(sanitize_tag(&once), once);
        assert!(valid.is_match(&once), "{once:?} is not a valid tag");
    }
}

//! `:shortcode:` emoji substitution for text runs.

use regex::Regex;
use std::sync::LazyLock;

use super::tokens::InlineToken;

static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-z0-9_+\-]+):").unwrap());

const SHORTCODES: &[(&str, &str)] = &[
    ("+1", "👍"),
    ("-1", "👎"),
    ("bulb", "💡"),
    ("eyes", "👀"),
    ("fire", "🔥"),
    ("grin", "😁"),
    ("heart", "❤️"),
    ("laughing", "😆"),
    ("rocket", "🚀"),
    ("smile", "😄"),
    ("smiley", "😃"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("tada", "🎉"),
    ("thinking", "🤔"),
    ("thumbsdown", "👎"),
    ("thumbsup", "👍"),
    ("warning", "⚠️"),
    ("white_check_mark", "✅"),
    ("wink", "😉"),
    ("x", "❌"),
];

fn lookup(name: &str) -> Option<&'static str> {
    SHORTCODES
        .binary_search_by(|(code, _)| (*code).cmp(name))
        .ok()
        .map(|i| SHORTCODES[i].1)
}

/// Split `text` into text and emoji tokens; unknown shortcodes stay text
pub fn substitute(text: &str, out: &mut Vec<InlineToken>) {
    let mut last = 0;
    for caps in SHORTCODE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(symbol) = lookup(&caps[1]) else {
            continue;
        };
        if whole.start() > last {
            out.push(InlineToken::Text(text[last..whole.start()].to_string()));
        }
        out.push(InlineToken::Emoji(symbol.to_string()));
        last = whole.end();
    }
    if last < text.len() || last == 0 {
        out.push(InlineToken::Text(text[last..].to_string()));
    }
}

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use hacktrack_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<t>\"hi\"</t>"), "&lt;t&gt;&quot;hi&quot;&lt;/t&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_xml("plain text"), "plain text");
    }

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
    }

    #[test]
    fn test_escape_preserves_unicode() {
        assert_eq!(escape_xml("📌 bullets & arrows"), "📌 bullets &amp; arrows");
    }
}

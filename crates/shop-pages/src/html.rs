//! HTML escaping for untrusted text.

/// Escape `&`, `<` and `>` so text cannot open markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text placed inside a double-quoted attribute.
pub(crate) fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_script() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("Tom & Jerry &lt;"), "Tom &amp; Jerry &amp;lt;");
    }

    #[test]
    fn test_attr_quotes() {
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
    }
}

//! Reflection of a query parameter back into the page.
//!
//! Escaping uses the template engine's own HTML escaper, so the text echoed
//! here and the text rendered through `{{ }}` are neutralised identically.

use handlebars::html_escape;
use serde::Serialize;

/// Entities produced by [`html_escape`], paired with the character they stand for
const ENTITIES: [(&str, char); 7] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#x27;", '\''),
    ("&#x60;", '`'),
    ("&#x3D;", '='),
];

/// Text that is safe to embed verbatim in an HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EchoResult {
    pub sanitized_text: String,
}

/// Escapes every HTML-significant character in `raw`
pub fn echo(raw: &str) -> EchoResult {
    EchoResult {
        sanitized_text: html_escape(raw),
    }
}

/// Reverses [`echo`]. Ampersands that do not start a known entity are kept as is.
pub fn unescape(escaped: &str) -> String {
    let mut output = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(pos) = rest.find('&') {
        output.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, c)) => {
                output.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                output.push('&');
                rest = &rest[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_neutralised() {
        let result = echo("<script>alert(1)</script>");
        assert!(!result.sanitized_text.contains("<script>"));
        assert_eq!(
            result.sanitized_text,
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_quotes_and_ampersand() {
        let result = echo(r#"a & "b" 'c'"#);
        assert_eq!(result.sanitized_text, "a &amp; &quot;b&quot; &#x27;c&#x27;");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(echo(""), EchoResult::default());
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(echo("alice").sanitized_text, "alice");
        assert_eq!(echo("héllo wörld").sanitized_text, "héllo wörld");
    }

    #[test]
    fn test_unescape_then_escape_is_identity() {
        let inputs = [
            "<script>alert(1)</script>",
            r#"<img src="x" onerror='alert(1)'>"#,
            "&amp; already escaped",
            "a=b`c`",
            "",
        ];

        for raw in inputs {
            let escaped = echo(raw).sanitized_text;
            assert_eq!(unescape(&escaped), raw);
            assert_eq!(echo(&unescape(&escaped)).sanitized_text, escaped);
        }
    }

    #[test]
    fn test_unescape_keeps_unknown_entities() {
        assert_eq!(unescape("&nbsp;&lt;&"), "&nbsp;<&");
    }
}

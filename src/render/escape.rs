pub fn escape_xml_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_xml_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_ntriples_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes characters IRIREF cannot hold as `\uXXXX`; the IRI itself is not
/// normalized or percent-encoded.
pub fn escape_ntriples_iri(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\u{0}'..='\u{20}' => {
                escaped.push_str(&format!("\\u{:04X}", ch as u32));
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml_attr() {
        assert_eq!(escape_xml_attr("a\"b<c>d&e\n"), "a&quot;b&lt;c&gt;d&amp;e&#10;");
    }

    #[test]
    fn test_escape_xml_text_keeps_quotes() {
        assert_eq!(escape_xml_text("\"R&D\" <1>"), "\"R&amp;D\" &lt;1&gt;");
    }

    #[test]
    fn test_escape_ntriples_literal() {
        assert_eq!(escape_ntriples_literal("say \"hi\"\n\\"), "say \\\"hi\\\"\\n\\\\");
    }

    #[test]
    fn test_escape_ntriples_iri() {
        assert_eq!(
            escape_ntriples_iri("http://data.ox.ac.uk/id/course/A B"),
            "http://data.ox.ac.uk/id/course/A\\u0020B"
        );
    }
}

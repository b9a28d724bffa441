use crate::domain::completion::entities::TopLevel;

/// Substring of completion text believed to delimit a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedPayload<'a> {
    pub text: &'a str,
    /// `false` when no delimiter pair was found and `text` is the raw input
    pub located: bool,
}

/// Locate the JSON payload inside conversational prose or markdown fencing.
///
/// Takes the first opening delimiter and the *last* closing delimiter of the
/// expected kind. This is not a balanced-bracket scan: a stray closing bracket in
/// prose after the payload is swallowed into the result and will fail to parse.
/// When no pair is found the raw text is returned unchanged.
pub fn extract(raw_text: &str, expected: TopLevel) -> ExtractedPayload<'_> {
    let start = raw_text.find(expected.open());
    let end = raw_text.rfind(expected.close());

    match (start, end) {
        (Some(start), Some(end)) if end > start => ExtractedPayload {
            text: &raw_text[start..=end],
            located: true,
        },
        _ => ExtractedPayload {
            text: raw_text,
            located: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_array_from_prose() {
        let raw = "Sure! Here you go: [\"Mapo Tofu\", \"Bibimbap\"]  Hope that helps!";
        let payload = extract(raw, TopLevel::Array);
        assert!(payload.located);
        assert_eq!(payload.text, "[\"Mapo Tofu\", \"Bibimbap\"]");
    }

    #[test]
    fn test_extract_object_from_markdown_fence() {
        let raw = "```json\n{\"title\": \"Pad See Ew\", \"steps\": [1, 2]}\n```";
        let payload = extract(raw, TopLevel::Object);
        assert!(payload.located);
        assert_eq!(payload.text, "{\"title\": \"Pad See Ew\", \"steps\": [1, 2]}");
    }

    #[test]
    fn test_extract_whole_text_when_already_json() {
        let raw = "{\"a\":{\"b\":1}}";
        assert_eq!(extract(raw, TopLevel::Object).text, raw);
    }

    #[test]
    fn test_extract_returns_raw_text_when_missing_delimiters() {
        let raw = "I could not find any restaurants.";
        let payload = extract(raw, TopLevel::Array);
        assert!(!payload.located);
        assert_eq!(payload.text, raw);
    }

    #[test]
    fn test_extract_returns_raw_text_when_close_precedes_open() {
        let raw = "] nothing here [";
        let payload = extract(raw, TopLevel::Array);
        assert!(!payload.located);
        assert_eq!(payload.text, raw);
    }

    #[test]
    fn test_extract_empty_text() {
        let payload = extract("", TopLevel::Object);
        assert!(!payload.located);
        assert_eq!(payload.text, "");
    }

    #[test]
    fn test_extract_swallows_trailing_stray_bracket() {
        // Known limitation of the first-open/last-close heuristic.
        let raw = "[\"Ramen\"] (see [1]";
        assert_eq!(extract(raw, TopLevel::Array).text, "[\"Ramen\"] (see [1]");
    }

    #[test]
    fn test_extract_is_byte_exact_with_multibyte_prose() {
        let raw = "好的：[\"麻婆豆腐\"] 祝你用餐愉快";
        assert_eq!(extract(raw, TopLevel::Array).text, "[\"麻婆豆腐\"]");
    }
}

use crate::pipeline::generate::Palette;

use super::SnippetFormat;

/// Pretty-printed JSON array of hex strings.
pub struct JsonArray;

impl SnippetFormat for JsonArray {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, palette: &Palette) -> String {
        let value = serde_json::Value::from(palette.to_hex_list());
        let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::generate::generate_palette;

    #[test]
    fn parses_back_to_hex_list() {
        let palette = generate_palette(&[], 3);
        let output = JsonArray.render(&palette);
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, palette.to_hex_list());
    }

    #[test]
    fn pretty_printed_with_trailing_newline() {
        let palette = generate_palette(&[], 1);
        assert_eq!(JsonArray.render(&palette), "[\n  \"#ffffff\"\n]\n");
    }
}

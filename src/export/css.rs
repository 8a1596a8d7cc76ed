use crate::pipeline::generate::Palette;

use super::SnippetFormat;

/// `:root` block declaring one custom property per palette entry.
pub struct CssVariables;

impl SnippetFormat for CssVariables {
    fn name(&self) -> &str {
        "css"
    }

    fn render(&self, palette: &Palette) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in palette.css_variables() {
            out.push_str(&format!("  {name}: {value};\n"));
        }
        out.push_str("}\n");
        out
    }
}

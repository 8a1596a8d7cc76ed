use crate::pipeline::generate::Palette;

use super::SnippetFormat;

/// React component source that passes the palette to `GradientBanner`.
pub struct JsxBanner;

impl SnippetFormat for JsxBanner {
    fn name(&self) -> &str {
        "jsx"
    }

    fn render(&self, palette: &Palette) -> String {
        let colors = palette
            .iter()
            .map(|c| format!("'{c}'"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        out.push_str("import GradientBanner from './gradientbanner';\n");
        out.push('\n');
        out.push_str("const Banner = () => {\n");
        out.push_str("  return (\n");
        out.push_str(&format!("    <GradientBanner colors={{[{colors}]}}>\n"));
        out.push_str("      //insert content here\n");
        out.push_str("    </GradientBanner>\n");
        out.push_str("  );\n");
        out.push_str("};\n");
        out.push_str("export default Banner;\n");
        out
    }
}

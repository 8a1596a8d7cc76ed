pub mod css;
pub mod json;
pub mod jsx;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::generate::Palette;

/// A textual rendering of a palette that can be pasted into another project.
pub trait SnippetFormat {
    fn name(&self) -> &str;

    fn render(&self, palette: &Palette) -> String;

    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.render(palette);
        std::fs::write(path, content).with_context(|| {
            format!(
                "failed to write {} snippet to {}",
                self.name(),
                path.display()
            )
        })?;
        info!(snippet = self.name(), path = %path.display(), "wrote snippet");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// One hex color per line
    #[default]
    Plain,
    /// React `Banner` component wrapping `GradientBanner`
    Jsx,
    /// `:root` block of `--gradient-color-N` custom properties
    Css,
    /// JSON array of hex strings
    Json,
}

impl ExportFormat {
    pub fn snippet(self) -> Box<dyn SnippetFormat> {
        match self {
            ExportFormat::Plain => Box::new(PlainList),
            ExportFormat::Jsx => Box::new(jsx::JsxBanner),
            ExportFormat::Css => Box::new(css::CssVariables),
            ExportFormat::Json => Box::new(json::JsonArray),
        }
    }
}

/// Newline-separated hex colors.
pub struct PlainList;

impl SnippetFormat for PlainList {
    fn name(&self) -> &str {
        "plain"
    }

    fn render(&self, palette: &Palette) -> String {
        let mut out = String::new();
        for hex in palette.to_hex_list() {
            out.push_str(&hex);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::pipeline::generate::generate_palette;

    fn test_palette() -> Palette {
        generate_palette(&[Color::new(0, 0, 0), Color::new(255, 255, 255)], 3)
    }

    #[test]
    fn plain_lists_one_color_per_line() {
        let output = PlainList.render(&test_palette());
        assert_eq!(output, "#000000\n#808080\n#ffffff\n");
    }

    #[test]
    fn format_names_match_value_enum() {
        for (format, name) in [
            (ExportFormat::Plain, "plain"),
            (ExportFormat::Jsx, "jsx"),
            (ExportFormat::Css, "css"),
            (ExportFormat::Json, "json"),
        ] {
            assert_eq!(format.snippet().name(), name);
        }
    }

    #[test]
    fn write_to_creates_file() {
        let palette = test_palette();
        let dir = std::env::temp_dir().join("chameleon-test-export");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("palette.txt");

        PlainList.write_to(&palette, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, PlainList.render(&palette));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_to_missing_directory_fails_with_context() {
        let path = std::env::temp_dir()
            .join("chameleon-test-missing-dir")
            .join("nested")
            .join("palette.txt");
        let err = PlainList.write_to(&test_palette(), &path).unwrap_err();
        assert!(
            err.to_string().contains("failed to write plain snippet"),
            "unexpected error: {err}"
        );
    }
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::pipeline::generate::Palette;

/// Width of one swatch cell, wide enough for `#rrggbb` plus padding.
pub const SWATCH_WIDTH: usize = 9;

/// A widget that renders the palette as a row of colored swatches labelled
/// with their one-based position, with each hex value underneath.
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
    title: &'a str,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            title: "Palette",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Area the widget needs to show every swatch without clipping.
    pub fn size(&self) -> (u16, u16) {
        let swatches = self.palette.len().max(1);
        // 2 border columns, 2 leading spaces, 1 gap after each swatch
        let width = 4 + swatches * (SWATCH_WIDTH + 1);
        // 2 border rows, swatch row, hex row
        (width as u16, 4)
    }
}

fn to_color(c: &AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: &AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

fn build_swatch_row(palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, c) in palette.iter().enumerate() {
        let label = format!("{:^width$}", i + 1, width = SWATCH_WIDTH);
        let style = Style::default().bg(to_color(c)).fg(contrast_fg(c));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn build_hex_row(palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for c in palette {
        let label = format!("{:^width$}", c.to_hex(), width = SWATCH_WIDTH);
        spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = if self.palette.is_empty() {
            vec![Line::from("  (empty)")]
        } else {
            vec![build_swatch_row(self.palette), build_hex_row(self.palette)]
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::generate::generate_palette;

    fn render(palette: &Palette) -> Buffer {
        let widget = PaletteWidget::new(palette);
        let (width, height) = widget.size();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn swatches_use_palette_colors() {
        let palette = generate_palette(&[AppColor::new(255, 0, 0), AppColor::new(0, 0, 255)], 2);
        let buf = render(&palette);

        // first swatch starts after the border and two spaces
        assert_eq!(buf[(3, 1)].bg, Color::Rgb(255, 0, 0));
        let second_x = 3 + SWATCH_WIDTH as u16 + 1;
        assert_eq!(buf[(second_x, 1)].bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn labels_are_one_based_and_hex_is_shown() {
        let palette = generate_palette(&[], 2);
        let buf = render(&palette);

        let swatch_row = row_text(&buf, 1);
        assert!(swatch_row.contains('1') && swatch_row.contains('2'));
        let hex_row = row_text(&buf, 2);
        assert_eq!(hex_row.matches("#ffffff").count(), 2);
    }

    #[test]
    fn light_swatch_gets_dark_label() {
        let palette = generate_palette(&[], 1);
        let buf = render(&palette);
        assert_eq!(buf[(3, 1)].fg, Color::Black);
    }

    #[test]
    fn title_is_drawn_on_border() {
        let palette = generate_palette(&[], 1);
        let buf = render(&palette);
        assert!(row_text(&buf, 0).contains("Palette"));
    }
}

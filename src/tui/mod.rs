pub mod widgets;

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::QueueableCommand;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::pipeline::generate::Palette;

use widgets::PaletteWidget;

/// Print a colored swatch preview of the palette to stdout.
pub fn print_preview(palette: &Palette, title: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_preview(&mut out, palette, title).context("failed to print palette preview")
}

/// Render the palette widget off-screen and replay the buffer as styled text.
pub fn write_preview<W: Write>(out: &mut W, palette: &Palette, title: &str) -> Result<()> {
    let widget = PaletteWidget::new(palette).title(title);
    let (width, height) = widget.size();
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    for y in 0..area.height {
        let mut current = None;
        for x in 0..area.width {
            let cell = &buf[(x, y)];
            // only emit escapes when the style changes so text stays contiguous
            if current != Some((cell.fg, cell.bg)) {
                out.queue(SetForegroundColor(to_term_color(cell.fg)))?
                    .queue(SetBackgroundColor(to_term_color(cell.bg)))?;
                current = Some((cell.fg, cell.bg));
            }
            out.queue(Print(cell.symbol()))?;
        }
        out.queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}

fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Black => TermColor::Black,
        Color::White => TermColor::White,
        Color::DarkGray => TermColor::DarkGrey,
        _ => TermColor::Reset,
    }
}

pub mod cli;
pub mod color;
pub mod export;
pub mod hsl;
pub mod pipeline;
pub mod tui;

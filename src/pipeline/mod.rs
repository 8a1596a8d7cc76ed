pub mod generate;
pub mod interpolate;
pub mod rotate;

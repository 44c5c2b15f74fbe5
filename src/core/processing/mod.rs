pub mod dimensions;
pub mod resize;

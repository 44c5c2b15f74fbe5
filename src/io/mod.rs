//! I/O layer: decoding source images, output naming, and `writers` for
//! encoded images and JSON metadata sidecars.
pub mod naming;
pub mod reader;
pub use reader::open_image;

pub mod writers;
pub use writers::encode::save_image;

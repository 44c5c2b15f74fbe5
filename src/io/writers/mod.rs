pub mod encode;
pub mod metadata;

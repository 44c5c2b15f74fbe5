//! Core scaling building blocks: dimension computation, resampling, and the
//! serializable parameter set. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;

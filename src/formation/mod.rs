//! Pure formation generators.
//!
//! Each submodule produces position tables for one formation shape. The
//! generators mutate nothing, take the RNG explicitly, and are computed
//! once at startup; only the scene's live positions change afterwards.

pub mod scatter;
pub mod spiral;
pub mod star;
pub mod tree;

pub use spiral::SpiralParams;

//! The functional core: pure transforms from loaded documents to outputs.
//!
//! Only the strip compositor touches the filesystem, and only to read parts.
pub mod hitbox;
pub mod strip;
pub mod tiles;

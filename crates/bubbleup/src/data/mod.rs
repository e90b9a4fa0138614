//! Serializable configuration and the on-disk data directory.

pub mod keybindings_data;
pub mod storage;

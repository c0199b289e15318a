//! Command implementations for rootsync CLI

pub mod completions;
pub mod show;
pub mod sync;
pub mod version;

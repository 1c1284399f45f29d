//! ECS components for stage entities.
//!
//! Submodules overview:
//! - [`playback`] – frame cursor and run state for the active clip
//! - [`sheetslot`] – the active sprite sheet and its load ticket

pub mod playback;
pub mod sheetslot;

//! Event types exchanged with collaborators.
//!
//! Submodules:
//! - [`playback`] – run-state transition and clip completion notifications

pub mod playback;

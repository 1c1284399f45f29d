//! Engine systems.
//!
//! Submodules overview
//! - [`playback`] – advance the frame cursor and settle loop-vs-stop on cycle end
//! - [`time`] – update simulation time and delta

pub mod playback;
pub mod time;

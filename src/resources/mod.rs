//! ECS resources made available to systems.
//!
//! Overview
//! - `characters` – character registry loaded from JSON, addressable by slug
//! - `cliplibrary` – immutable clip definitions for the active character
//! - `stageconfig` – INI-backed demo shell configuration
//! - `surfacesize` – drawing surface dimensions in pixels
//! - `worldtime` – simulation time and delta

pub mod characters;
pub mod cliplibrary;
pub mod stageconfig;
pub mod surfacesize;
pub mod worldtime;

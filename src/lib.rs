//! Spritestage library.
//!
//! A headless sprite-sheet clip playback engine: clip definitions and the
//! frame-index state machine live in a small ECS world behind the
//! [`Player`](crate::player::Player) facade, while rendering and UI stay with
//! collaborators behind the [`Surface`](crate::driver::Surface) trait and the
//! playback notification events.

pub mod components;
pub mod driver;
pub mod events;
pub mod framerect;
pub mod player;
pub mod resources;
pub mod systems;

//! Playback notification events.
//!
//! The engine never touches UI handles. Collaborators that need to react to
//! playback — enabling or disabling run/pause/stop affordances, flagging
//! "no clip selected" style errors — subscribe to these events instead.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<RunStateChanged>| {
//!     if trigger.to == RunState::Stopped {
//!         // restore the run button
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::components::playback::Playback`] – the state being reported
//! - [`crate::systems::playback::advance_playback`] – triggers these on
//!   automatic completion of a play-once clip

use bevy_ecs::prelude::*;

use crate::components::playback::RunState;

/// Event emitted on every run-state transition, whether requested through
/// the player (run/pause/stop/select) or automatic (play-once cycle end).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStateChanged {
    /// The stage entity whose playback changed.
    pub entity: Entity,
    pub from: RunState,
    pub to: RunState,
}

/// Event emitted when a play-once clip completes its single pass.
///
/// Always accompanied by a [`RunStateChanged`] to [`RunState::Stopped`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipFinished {
    /// The stage entity that finished playing.
    pub entity: Entity,
    /// Index of the clip that completed.
    pub clip_index: usize,
}

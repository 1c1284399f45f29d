//! Playback cursor component.
//!
//! [`Playback`] is the mutable state of the one active clip: which cell of
//! the sprite-sheet grid is showing, how much of the current frame interval
//! has elapsed, and whether the clip is running. It is replaced wholesale
//! whenever a different clip is selected.

use bevy_ecs::prelude::Component;

/// Whether ticks advance frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Frame cursor for the active clip.
///
/// Invariants (upheld by [`advance_playback`]): `column` stays below the
/// clip's column count, `row` below its row count, and `elapsed_ms >= 0`.
///
/// [`advance_playback`]: crate::systems::playback::advance_playback
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Playback {
    /// Index into the [`ClipLibrary`](crate::resources::cliplibrary::ClipLibrary).
    pub clip_index: usize,
    pub column: u32,
    pub row: u32,
    /// Time accumulated towards the next frame boundary, in milliseconds.
    pub elapsed_ms: f32,
    pub run_state: RunState,
}

impl Playback {
    /// Fresh cursor at cell (0, 0), stopped.
    pub fn new(clip_index: usize) -> Self {
        Playback {
            clip_index,
            column: 0,
            row: 0,
            elapsed_ms: 0.0,
            run_state: RunState::Stopped,
        }
    }

    /// Stopped or Paused -> Playing. Returns true if the run state changed.
    pub fn run(&mut self) -> bool {
        if self.run_state == RunState::Playing {
            return false;
        }
        self.run_state = RunState::Playing;
        true
    }

    /// Playing -> Paused, keeping the cursor where it is.
    /// Returns true if the run state changed.
    pub fn pause(&mut self) -> bool {
        if self.run_state != RunState::Playing {
            return false;
        }
        self.run_state = RunState::Paused;
        true
    }

    /// Any state -> Stopped, rewinding the cursor to cell (0, 0).
    /// Returns true if the run state changed; the rewind happens regardless.
    pub fn stop(&mut self) -> bool {
        self.column = 0;
        self.row = 0;
        self.elapsed_ms = 0.0;
        if self.run_state == RunState::Stopped {
            return false;
        }
        self.run_state = RunState::Stopped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playback_is_stopped_at_origin() {
        let p = Playback::new(3);
        assert_eq!(p.clip_index, 3);
        assert_eq!((p.column, p.row), (0, 0));
        assert_eq!(p.elapsed_ms, 0.0);
        assert_eq!(p.run_state, RunState::Stopped);
    }

    #[test]
    fn run_from_stopped_and_paused() {
        let mut p = Playback::new(0);
        assert!(p.run());
        assert_eq!(p.run_state, RunState::Playing);
        assert!(!p.run()); // already playing

        p.pause();
        assert!(p.run());
        assert_eq!(p.run_state, RunState::Playing);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut p = Playback::new(0);
        p.run();
        p.column = 2;
        p.elapsed_ms = 40.0;

        assert!(p.pause());
        let snapshot = p.clone();
        assert!(!p.pause());
        assert_eq!(p, snapshot);
        // pause keeps the cursor, unlike stop
        assert_eq!(p.column, 2);
        assert_eq!(p.elapsed_ms, 40.0);
    }

    #[test]
    fn pause_does_nothing_when_stopped() {
        let mut p = Playback::new(0);
        assert!(!p.pause());
        assert_eq!(p.run_state, RunState::Stopped);
    }

    #[test]
    fn stop_rewinds_from_any_state() {
        for setup in [RunState::Playing, RunState::Paused, RunState::Stopped] {
            let mut p = Playback::new(0);
            p.run_state = setup;
            p.column = 3;
            p.row = 1;
            p.elapsed_ms = 99.0;
            let changed = p.stop();
            assert_eq!(changed, setup != RunState::Stopped);
            assert_eq!((p.column, p.row), (0, 0));
            assert_eq!(p.elapsed_ms, 0.0);
            assert_eq!(p.run_state, RunState::Stopped);
        }
    }
}

//! Playback advance system.
//!
//! [`advance_playback`] is the frame-index state machine: it consumes the
//! frame delta from [`WorldTime`], walks the active clip's cell grid column
//! by column, wraps columns into rows, and on a completed cycle either loops
//! or stops according to the clip's [`LoopMode`].
//!
//! # Playback Flow
//!
//! 1. Clip data is defined in [`ClipLibrary`](crate::resources::cliplibrary::ClipLibrary)
//! 2. The stage entity has a [`Playback`](crate::components::playback::Playback) cursor
//! 3. `advance_playback` advances the cursor once per elapsed 125 ms interval
//! 4. Collaborators observe [`RunStateChanged`] / [`ClipFinished`]
//!
//! # Related
//!
//! - [`crate::player::Player`] – facade that runs this system per tick
//! - [`crate::framerect::resolve`] – maps the cursor to draw rectangles

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::playback::{Playback, RunState};
use crate::events::playback::{ClipFinished, RunStateChanged};
use crate::resources::cliplibrary::{ClipLibrary, LoopMode};
use crate::resources::worldtime::WorldTime;

/// Time each frame cell stays visible: 8 frames per second.
pub const FRAME_INTERVAL_MS: f32 = 1000.0 / 8.0;

/// Advance playback cursors by the current frame delta.
///
/// Contract
/// - Reads [`WorldTime`] for the sanitized delta (never negative).
/// - No-op for cursors that are not [`RunState::Playing`].
/// - Advances exactly one cell per elapsed [`FRAME_INTERVAL_MS`], repeating
///   until the accumulator drops below one interval so a large delta (tab
///   resumed from background) starves no frames.
/// - A completed cycle of a [`LoopMode::PlayOnce`] clip stops playback,
///   rewinds the cursor to (0, 0), and triggers [`ClipFinished`] plus
///   [`RunStateChanged`]; the stop pre-empts any further advance this tick.
pub fn advance_playback(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Playback)>,
    library: Res<ClipLibrary>,
    time: Res<WorldTime>,
) {
    for (entity, mut playback) in query.iter_mut() {
        if playback.run_state != RunState::Playing {
            continue;
        }
        let Some(clip) = library.get(playback.clip_index) else {
            warn!(
                "playback cursor points at missing clip index {}",
                playback.clip_index
            );
            continue;
        };

        playback.elapsed_ms += time.delta_ms;

        while playback.elapsed_ms >= FRAME_INTERVAL_MS {
            playback.elapsed_ms -= FRAME_INTERVAL_MS;
            playback.column += 1;
            if playback.column == clip.columns {
                playback.column = 0;
                playback.row += 1;
                if playback.row == clip.rows {
                    match clip.loop_mode {
                        LoopMode::Loop => playback.row = 0,
                        LoopMode::PlayOnce => {
                            playback.stop();
                            commands.trigger(ClipFinished {
                                entity,
                                clip_index: playback.clip_index,
                            });
                            commands.trigger(RunStateChanged {
                                entity,
                                from: RunState::Playing,
                                to: RunState::Stopped,
                            });
                            break;
                        }
                    }
                }
            }
        }
    }
}

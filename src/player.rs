//! Player facade.
//!
//! [`Player`] is the controller collaborators talk to: it owns the ECS world
//! holding the clip library, the stage entity, and the playback schedule, and
//! exposes the selection and transport operations (`select_clip`, `run`,
//! `pause`, `stop`, `tick`). It knows nothing about rendering or UI; run-state
//! changes reach collaborators through
//! [`RunStateChanged`](crate::events::playback::RunStateChanged) and
//! [`ClipFinished`](crate::events::playback::ClipFinished) observers.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::playback::{Playback, RunState};
use crate::components::sheetslot::{SheetSlot, SheetTicket};
use crate::events::playback::{ClipFinished, RunStateChanged};
use crate::framerect::{self, FramePlacement};
use crate::resources::cliplibrary::{AnimationClip, ClipLibrary};
use crate::resources::surfacesize::SurfaceSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::playback::advance_playback;
use crate::systems::time::update_world_time;

/// Controller for one stage: exactly one clip is active at a time, and its
/// playback cursor and sheet slot live on the stage entity together. Both
/// are discarded and recreated whenever a clip is selected.
pub struct Player {
    world: World,
    schedule: Schedule,
    stage: Entity,
    next_ticket: u64,
}

impl Player {
    pub fn new(library: ClipLibrary, surface: SurfaceSize) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(surface);
        world.insert_resource(library);
        let stage = world.spawn_empty().id();

        let mut schedule = Schedule::default();
        schedule.add_systems(advance_playback);

        Player {
            world,
            schedule,
            stage,
            next_ticket: 0,
        }
    }

    /// The stage entity carried by the notification events, for observers
    /// that filter on it.
    pub fn stage(&self) -> Entity {
        self.stage
    }

    /// Make the clip at `index` active.
    ///
    /// Out-of-range indices are a caller error and reported immediately.
    /// The playback cursor is replaced with a fresh stopped one and a new
    /// sheet slot is created — even when the same clip is re-selected — so
    /// the returned [`SheetTicket`] always identifies the load the
    /// collaborator should now perform.
    pub fn select_clip(&mut self, index: usize) -> Result<SheetTicket, String> {
        let sheet_path = {
            let library = self.world.resource::<ClipLibrary>();
            let clip = library.get(index).ok_or_else(|| {
                format!("clip index {} out of range (0..{})", index, library.len())
            })?;
            clip.sheet_path.clone()
        };

        let from = self
            .world
            .get::<Playback>(self.stage)
            .map(|p| p.run_state);

        let ticket = SheetTicket(self.next_ticket);
        self.next_ticket += 1;
        debug!("selecting clip {} (sheet {}, {:?})", index, sheet_path, ticket);
        self.world
            .entity_mut(self.stage)
            .insert((Playback::new(index), SheetSlot::new(sheet_path, ticket)));

        if let Some(from) = from
            && from != RunState::Stopped
        {
            self.world.trigger(RunStateChanged {
                entity: self.stage,
                from,
                to: RunState::Stopped,
            });
        }
        Ok(ticket)
    }

    /// Start or resume playback.
    pub fn run(&mut self) -> Result<(), String> {
        self.transition(Playback::run, RunState::Playing)
    }

    /// Pause playback, keeping the cursor where it is.
    pub fn pause(&mut self) -> Result<(), String> {
        self.transition(Playback::pause, RunState::Paused)
    }

    /// Stop playback and rewind the cursor to cell (0, 0).
    pub fn stop(&mut self) -> Result<(), String> {
        self.transition(Playback::stop, RunState::Stopped)
    }

    fn transition(
        &mut self,
        apply: fn(&mut Playback) -> bool,
        to: RunState,
    ) -> Result<(), String> {
        let Some(mut playback) = self.world.get_mut::<Playback>(self.stage) else {
            return Err("no clip selected".to_string());
        };
        let from = playback.run_state;
        let changed = apply(&mut playback);
        if changed {
            self.world.trigger(RunStateChanged {
                entity: self.stage,
                from,
                to,
            });
        }
        Ok(())
    }

    /// Feed elapsed time into the engine and advance the cursor.
    ///
    /// Negative or non-finite deltas are clamped to zero and produce no
    /// advance. Safe to call with no clip selected.
    pub fn tick(&mut self, delta_ms: f32) {
        update_world_time(&mut self.world, delta_ms);
        self.schedule.run(&mut self.world);
    }

    /// Report that the sheet identified by `ticket` finished decoding.
    ///
    /// Returns false (and leaves state untouched) when the ticket no longer
    /// matches the active slot, i.e. the sheet was superseded while loading.
    pub fn complete_sheet_load(&mut self, ticket: SheetTicket) -> bool {
        let Some(mut slot) = self.world.get_mut::<SheetSlot>(self.stage) else {
            warn!("sheet load completion {:?} with no clip selected", ticket);
            return false;
        };
        let accepted = slot.complete(ticket);
        if !accepted {
            warn!(
                "ignoring stale sheet load completion {:?} (current {:?})",
                ticket, slot.ticket
            );
        }
        accepted
    }

    /// Current run state; [`RunState::Stopped`] before any selection.
    pub fn run_state(&self) -> RunState {
        self.world
            .get::<Playback>(self.stage)
            .map(|p| p.run_state)
            .unwrap_or_default()
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.world.get::<Playback>(self.stage)
    }

    pub fn active_clip(&self) -> Option<&AnimationClip> {
        let playback = self.world.get::<Playback>(self.stage)?;
        self.world
            .resource::<ClipLibrary>()
            .get(playback.clip_index)
    }

    pub fn sheet(&self) -> Option<&SheetSlot> {
        self.world.get::<SheetSlot>(self.stage)
    }

    pub fn sheet_loaded(&self) -> bool {
        self.sheet().is_some_and(|s| s.loaded)
    }

    /// Source and destination rectangles for the current frame.
    ///
    /// Computed regardless of sheet load state; None only before the first
    /// selection. Callers skip the blit until [`Self::sheet_loaded`].
    pub fn frame_placement(&self) -> Option<FramePlacement> {
        let playback = self.world.get::<Playback>(self.stage)?;
        let clip = self
            .world
            .resource::<ClipLibrary>()
            .get(playback.clip_index)?;
        let surface = self.world.resource::<SurfaceSize>();
        Some(framerect::resolve(clip, playback, surface))
    }

    /// Subscribe to run-state transitions.
    pub fn observe_run_state(
        &mut self,
        mut f: impl FnMut(RunStateChanged) + Send + Sync + 'static,
    ) {
        self.world
            .add_observer(move |trigger: On<RunStateChanged>| f(*trigger));
        self.world.flush();
    }

    /// Subscribe to play-once clip completions.
    pub fn observe_finished(&mut self, mut f: impl FnMut(ClipFinished) + Send + Sync + 'static) {
        self.world
            .add_observer(move |trigger: On<ClipFinished>| f(*trigger));
        self.world.flush();
    }

    /// Direct world access for collaborators that register richer observers
    /// or resources than the convenience methods cover.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

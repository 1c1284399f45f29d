//! Draw loop driver.
//!
//! [`DrawLoop`] connects a [`Player`] to the host's refresh callback: each
//! [`DrawLoop::frame`] turns the host timestamp into a delta, ticks the
//! player, clears the surface, and blits the resolved frame once the sheet
//! is decoded. The host keeps scheduling frames for as long as `frame`
//! returns true; the owned [`CancelHandle`] ends that from anywhere, so a
//! loop can never outlive its owner.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::framerect::Rect;
use crate::player::Player;

/// Drawing capability the engine needs from its collaborator: wipe the
/// surface, and copy one rectangle of a decoded sheet onto it.
pub trait Surface {
    fn clear(&mut self);
    fn blit(&mut self, sheet_path: &str, src: Rect, dst: Rect);
}

/// Cancellation token for a [`DrawLoop`].
///
/// Cloneable so UI code can keep one wherever teardown happens. After
/// [`CancelHandle::cancel`], the next `frame` call returns false without
/// ticking or drawing.
#[derive(Clone, Debug)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-refresh driver around a player and its drawing surface.
pub struct DrawLoop<S: Surface> {
    player: Player,
    surface: S,
    previous_ms: f64,
    cancelled: Arc<AtomicBool>,
}

impl<S: Surface> DrawLoop<S> {
    pub fn new(player: Player, surface: S) -> Self {
        DrawLoop {
            player,
            surface,
            // The first frame sees one artificially large delta. The time
            // sanitizer and the bounded advance loop absorb it.
            previous_ms: 0.0,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Token that stops this loop; hand it to whoever owns teardown.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancelled.clone())
    }

    /// Run one frame at host timestamp `now_ms`.
    ///
    /// Returns false once cancelled, signalling the host to stop scheduling.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return false;
        }

        let delta_ms = (now_ms - self.previous_ms) as f32;
        self.previous_ms = now_ms;
        self.player.tick(delta_ms);

        self.surface.clear();
        if self.player.sheet_loaded()
            && let Some(placement) = self.player.frame_placement()
            && let Some(sheet) = self.player.sheet()
        {
            self.surface.blit(&sheet.path, placement.src, placement.dst);
        }
        true
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear the loop apart, keeping the player.
    pub fn into_player(self) -> Player {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::playback::RunState;
    use crate::resources::cliplibrary::{ClipLibrary, ClipRecord};
    use crate::resources::surfacesize::SurfaceSize;
    use crate::systems::playback::FRAME_INTERVAL_MS;

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        blits: Vec<(String, Rect, Rect)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn blit(&mut self, sheet_path: &str, src: Rect, dst: Rect) {
            self.blits.push((sheet_path.to_string(), src, dst));
        }
    }

    fn player() -> Player {
        let records = vec![ClipRecord {
            name: "Idle".to_string(),
            width: 64.0,
            height: 64.0,
            frame_x: 4,
            frame_y: 1,
            sprite: "idle.png".to_string(),
        }];
        let library = ClipLibrary::from_records(records, "hero").unwrap();
        Player::new(library, SurfaceSize { w: 256.0, h: 256.0 })
    }

    #[test]
    fn first_frame_large_delta_is_harmless() {
        let mut draw_loop = DrawLoop::new(player(), RecordingSurface::default());
        // previous timestamp starts at 0, so a host already minutes in
        // produces a huge first delta with nothing selected or playing
        assert!(draw_loop.frame(600_000.0));
        assert_eq!(draw_loop.player().run_state(), RunState::Stopped);
        assert_eq!(draw_loop.surface().clears, 1);
        assert!(draw_loop.surface().blits.is_empty());
    }

    #[test]
    fn blit_waits_for_the_sheet_to_load() {
        let mut draw_loop = DrawLoop::new(player(), RecordingSurface::default());
        let ticket = draw_loop.player_mut().select_clip(0).unwrap();

        draw_loop.frame(16.0);
        assert!(draw_loop.surface().blits.is_empty());

        draw_loop.player_mut().complete_sheet_load(ticket);
        draw_loop.frame(32.0);
        let (path, src, dst) = &draw_loop.surface().blits[0];
        assert_eq!(path, "hero/idle.png");
        assert_eq!(src.x, 0.0);
        assert_eq!(dst.x, 96.0);
    }

    #[test]
    fn deltas_advance_playback_between_frames() {
        let mut draw_loop = DrawLoop::new(player(), RecordingSurface::default());
        let ticket = draw_loop.player_mut().select_clip(0).unwrap();
        draw_loop.player_mut().complete_sheet_load(ticket);
        draw_loop.player_mut().run().unwrap();

        draw_loop.frame(1000.0); // establishes the previous timestamp
        let column_before = draw_loop.player().playback().unwrap().column;
        draw_loop.frame(1000.0 + FRAME_INTERVAL_MS as f64);
        let column_after = draw_loop.player().playback().unwrap().column;
        assert_eq!(column_after, (column_before + 1) % 4);
    }

    #[test]
    fn cancel_stops_future_frames() {
        let mut draw_loop = DrawLoop::new(player(), RecordingSurface::default());
        let handle = draw_loop.cancel_handle();

        assert!(draw_loop.frame(16.0));
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(!draw_loop.frame(32.0));
        // cancelled frames do not touch the surface
        assert_eq!(draw_loop.surface().clears, 1);
    }
}

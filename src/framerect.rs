//! Frame rectangle resolver.
//!
//! Pure mapping from a clip definition and a playback cursor to the source
//! cell rectangle on the sprite sheet and the centered destination rectangle
//! on the drawing surface. No side effects; safe to call every tick, even
//! while the sheet is still decoding — the caller gates the actual blit on
//! the sheet being loaded.

use crate::components::playback::Playback;
use crate::resources::cliplibrary::AnimationClip;
use crate::resources::surfacesize::SurfaceSize;

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Where to read from the sheet and where to place the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlacement {
    pub src: Rect,
    pub dst: Rect,
}

/// Compute the sheet cell for the cursor and center it on the surface.
///
/// The destination is recomputed every call, so a clip switch that changes
/// the frame size stays centered without extra bookkeeping.
pub fn resolve(clip: &AnimationClip, playback: &Playback, surface: &SurfaceSize) -> FramePlacement {
    FramePlacement {
        src: Rect {
            x: playback.column as f32 * clip.frame_width,
            y: playback.row as f32 * clip.frame_height,
            w: clip.frame_width,
            h: clip.frame_height,
        },
        dst: Rect {
            x: surface.w / 2.0 - clip.frame_width / 2.0,
            y: surface.h / 2.0 - clip.frame_height / 2.0,
            w: clip.frame_width,
            h: clip.frame_height,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::cliplibrary::LoopMode;

    fn clip(frame_width: f32, frame_height: f32) -> AnimationClip {
        AnimationClip {
            name: "Idle".to_string(),
            frame_width,
            frame_height,
            columns: 4,
            rows: 2,
            sheet_path: "idle.png".to_string(),
            loop_mode: LoopMode::Loop,
        }
    }

    #[test]
    fn source_follows_the_cursor() {
        let clip = clip(64.0, 48.0);
        let mut playback = Playback::new(0);
        playback.column = 2;
        playback.row = 1;
        let surface = SurfaceSize { w: 256.0, h: 256.0 };

        let placement = resolve(&clip, &playback, &surface);
        assert_eq!(
            placement.src,
            Rect {
                x: 128.0,
                y: 48.0,
                w: 64.0,
                h: 48.0
            }
        );
    }

    #[test]
    fn destination_is_centered_at_natural_size() {
        let clip = clip(64.0, 64.0);
        let playback = Playback::new(0);
        let surface = SurfaceSize { w: 256.0, h: 200.0 };

        let placement = resolve(&clip, &playback, &surface);
        assert_eq!(
            placement.dst,
            Rect {
                x: 96.0,
                y: 68.0,
                w: 64.0,
                h: 64.0
            }
        );
    }

    #[test]
    fn destination_recenters_when_frame_size_changes() {
        let playback = Playback::new(0);
        let surface = SurfaceSize { w: 256.0, h: 256.0 };

        let small = resolve(&clip(64.0, 64.0), &playback, &surface);
        let large = resolve(&clip(128.0, 128.0), &playback, &surface);
        assert_eq!(small.dst.x, 96.0);
        assert_eq!(large.dst.x, 64.0);
    }
}

use bevy_ecs::prelude::Resource;

/// Drawing surface dimensions in pixels.
///
/// Only read by the frame rect resolver to center the sprite; the surface
/// itself lives with the collaborator.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub w: f32,
    pub h: f32,
}

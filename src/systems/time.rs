//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta milliseconds on the `WorldTime` resource.
///
/// `delta_ms` is the raw frame delta reported by the host. Negative or
/// non-finite values (first callback, resumed session) are clamped to zero
/// so they produce no frame advance instead of corrupting the cursor.
pub fn update_world_time(world: &mut World, delta_ms: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let delta_ms = if delta_ms.is_finite() && delta_ms > 0.0 {
        delta_ms
    } else {
        0.0
    };
    let scaled = delta_ms * wt.time_scale;
    wt.elapsed_ms += scaled;
    wt.delta_ms = scaled;
}

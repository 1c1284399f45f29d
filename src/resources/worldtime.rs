use bevy_ecs::prelude::Resource;

/// Simulation clock, in milliseconds.
///
/// `delta_ms` is what the advance system consumes each tick; it is written by
/// [`update_world_time`](crate::systems::time::update_world_time), which
/// sanitizes the raw host delta first.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed_ms: f32,
    pub delta_ms: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed_ms: 0.0,
            delta_ms: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

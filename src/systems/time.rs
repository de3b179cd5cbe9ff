//! Simulation clock and the fixed-tick driver.
//!
//! The core never reads a clock: the frame loop hands real elapsed time to
//! [`run_fixed_ticks`], which turns it into whole ticks of
//! [`FixedTimestep::step`] seconds and runs the update schedule once per tick
//! with [`WorldTime::delta`] set to that step (scaled by `time_scale`).
use bevy_ecs::prelude::*;

use crate::resources::framestep::FixedTimestep;
use crate::resources::worldtime::WorldTime;

/// Advance [`WorldTime`] by one tick of `dt` unscaled seconds.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Feed `real_dt` seconds into the [`FixedTimestep`] and run `schedule` once
/// for every tick that became due. Returns the number of ticks run.
pub fn run_fixed_ticks(world: &mut World, schedule: &mut Schedule, real_dt: f32) -> u32 {
    let (ticks, step) = {
        let mut timestep = world.resource_mut::<FixedTimestep>();
        (timestep.advance(real_dt), timestep.step)
    };
    for _ in 0..ticks {
        update_world_time(world, step);
        schedule.run(world);
        world.clear_trackers();
    }
    ticks
}

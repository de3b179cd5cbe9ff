//! Fixed-timestep bookkeeping for the frame loop.
//!
//! The loop feeds real elapsed time into [`FixedTimestep::advance`] and runs the
//! update schedule once per returned tick, always with the same `step`. A slow
//! frame just yields more ticks on the next call. [`FrameStats`] counts rendered
//! frames for the statistics overlay.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct FixedTimestep {
    /// Duration of a single simulation tick in seconds.
    pub step: f32,
    /// Real time not yet consumed by ticks.
    pub accumulator: f32,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add `real_dt` seconds and return how many whole ticks are due.
    pub fn advance(&mut self, real_dt: f32) -> u32 {
        self.accumulator += real_dt.max(0.0);
        let mut ticks = 0;
        while self.accumulator > self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }
}

/// Frames-per-second and time-per-update counters, refreshed once per second.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FrameStats {
    pub update_time: f32,
    pub num_frames: u32,
    pub fps: u32,
    pub micros_per_frame: u64,
}

impl FrameStats {
    /// Record a rendered frame that took `dt` seconds.
    pub fn record(&mut self, dt: f32) {
        self.update_time += dt;
        self.num_frames += 1;
        if self.update_time >= 1.0 {
            self.fps = self.num_frames;
            self.micros_per_frame = (self.update_time * 1_000_000.0 / self.num_frames as f32) as u64;
            self.update_time -= 1.0;
            self.num_frames = 0;
        }
    }

    pub fn text(&self) -> String {
        format!("FPS: {}\nTime/Update: {}us", self.fps, self.micros_per_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_yields_whole_ticks_and_keeps_remainder() {
        let mut ts = FixedTimestep::new(4);
        assert_eq!(ts.advance(0.1), 0);
        assert_eq!(ts.advance(0.5), 2);
        assert!(ts.accumulator < ts.step);
    }

    #[test]
    fn advance_ignores_negative_time() {
        let mut ts = FixedTimestep::new(60);
        assert_eq!(ts.advance(-1.0), 0);
        assert_eq!(ts.accumulator, 0.0);
    }

    #[test]
    fn stats_refresh_once_per_second() {
        let mut stats = FrameStats::default();
        for _ in 0..3 {
            stats.record(0.25);
        }
        assert_eq!(stats.fps, 0);
        stats.record(0.25);
        assert_eq!(stats.fps, 4);
        assert_eq!(stats.micros_per_frame, 250_000);
        assert_eq!(stats.num_frames, 0);
    }
}

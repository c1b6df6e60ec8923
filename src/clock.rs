//! Frame pacing between simulated time and wall-clock time.

use std::thread;
use std::time::{Duration, Instant};

/// What the render loop should do to keep simulated time on the wall clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// Simulation is ahead: wait this long
    Sleep(Duration),
    /// Simulation fell behind: move the wall clock back to simulated time
    Rebase,
    OnTime,
}

/// Decide how to pace a frame.
///
/// Falling behind is never made up with larger steps; the wall clock is
/// rebased instead, so the simulation runs slower than real time.
pub fn pacing(sim_time_s: f32, wall_time_s: f32) -> Pacing {
    if sim_time_s > wall_time_s {
        Pacing::Sleep(Duration::from_secs_f32(sim_time_s - wall_time_s))
    } else if sim_time_s < wall_time_s {
        Pacing::Rebase
    } else {
        Pacing::OnTime
    }
}

/// Wall clock the simulation is synchronized against
pub struct FramePacer {
    origin: Instant,
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds on the (possibly rebased) wall clock
    pub fn wall_time_s(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }

    /// Sleep or rebase so that wall-clock time matches `sim_time_s`
    pub fn pace(&mut self, sim_time_s: f32) -> Pacing {
        let decision = pacing(sim_time_s, self.wall_time_s());

        match decision {
            Pacing::Sleep(duration) => thread::sleep(duration),
            Pacing::Rebase => self.rebase(sim_time_s),
            Pacing::OnTime => {}
        }

        decision
    }

    fn rebase(&mut self, sim_time_s: f32) {
        let now = Instant::now();
        self.origin = now
            .checked_sub(Duration::from_secs_f32(sim_time_s))
            .unwrap_or(now);
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacing_ahead_sleeps_for_difference() {
        match pacing(1.5, 1.25) {
            Pacing::Sleep(d) => assert!((d.as_secs_f32() - 0.25).abs() < 1e-6),
            other => panic!("expected sleep, got {:?}", other),
        }
    }

    #[test]
    fn test_pacing_behind_rebases() {
        assert_eq!(pacing(1.0, 3.0), Pacing::Rebase);
        assert_eq!(pacing(0.5, 0.5), Pacing::OnTime);
    }

    #[test]
    fn test_rebase_moves_wall_clock_back() {
        let mut pacer = FramePacer::new();
        thread::sleep(Duration::from_millis(30));

        assert_eq!(pacer.pace(0.001), Pacing::Rebase);
        // Rebased to 1 ms; allow for scheduler delay
        assert!(pacer.wall_time_s() < 0.02, "wall {}", pacer.wall_time_s());
    }

    #[test]
    fn test_pace_waits_for_wall_clock() {
        let mut pacer = FramePacer::new();
        pacer.pace(0.02);

        assert!(pacer.wall_time_s() >= 0.0199);
    }
}

//! Loading screen animation state
//!
//! The timer is owned by whoever holds the `SplashState`; it only moves
//! when `update` is called and is cancelled with `skip`.

use std::time::{Duration, Instant};

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo shown while the progress bar fills
    Loading,
    /// Logo sliding off the top
    Exit,
    /// Animation finished
    Complete,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the loading screen started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Progress bar fill (0.0 to 1.0)
    pub progress: f32,
    /// Current vertical offset (for exit animation)
    pub scroll_offset: f32,
    /// Which of the three pulsing dots is lit
    pub active_dot: usize,
}

impl SplashState {
    /// Progress bar fill time (1.5 seconds)
    const LOADING_DURATION: Duration = Duration::from_millis(1500);
    /// Exit slide duration
    const EXIT_DURATION: Duration = Duration::from_millis(500);
    /// Time each loading dot stays lit
    const DOT_INTERVAL: Duration = Duration::from_millis(200);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Loading,
            progress: 0.0,
            scroll_offset: 0.0,
            active_dot: 0,
        }
    }

    /// Update animation state from the wall clock
    pub fn update(&mut self, terminal_height: u16) {
        self.update_elapsed(self.start_time.elapsed(), terminal_height);
    }

    /// Update animation state for a given time since start
    pub fn update_elapsed(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }

        self.active_dot = ((elapsed.as_millis() / Self::DOT_INTERVAL.as_millis()) % 3) as usize;

        if elapsed < Self::LOADING_DURATION {
            self.phase = SplashPhase::Loading;
            let t = elapsed.as_secs_f32() / Self::LOADING_DURATION.as_secs_f32();
            self.progress = simple_easing::cubic_in_out(t).clamp(0.0, 1.0);
            self.scroll_offset = 0.0;
        } else if elapsed < Self::LOADING_DURATION + Self::EXIT_DURATION {
            self.phase = SplashPhase::Exit;
            self.progress = 1.0;
            let exit_elapsed = elapsed - Self::LOADING_DURATION;
            let t = exit_elapsed.as_secs_f32() / Self::EXIT_DURATION.as_secs_f32();
            // Cubic ease-out: fast start, slow finish
            self.scroll_offset = simple_easing::cubic_out(t) * (terminal_height as f32);
        } else {
            self.progress = 1.0;
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.progress = 1.0;
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

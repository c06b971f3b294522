use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_WINDOW: usize = 60;

/// Frames per second averaged over the last few frame times.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: VecDeque<Duration>,
    window: usize,
    last_frame: Option<Instant>,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new(window: usize) -> Self {
        let window = window.max(1);

        Self {
            frame_times: VecDeque::with_capacity(window),
            window,
            last_frame: None,
        }
    }

    pub fn frame_presented(&mut self, now: Instant) {
        if let Some(last) = self.last_frame.replace(now) {
            if self.frame_times.len() == self.window {
                self.frame_times.pop_front();
            }
            self.frame_times.push_back(now.saturating_duration_since(last));
        }
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        let total: Duration = self.frame_times.iter().sum();

        if total.is_zero() {
            return 0.0;
        }

        self.frame_times.len() as f64 / total.as_secs_f64()
    }
}

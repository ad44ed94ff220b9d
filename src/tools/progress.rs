use std::io::{self, Write};
use std::time::Instant;

/// In-place progress line for the encode and decode passes: percent done
/// plus an ETA projected from elapsed wall time. Repaints at most once per
/// second. A total of zero (empty input) keeps it silent, so there is no
/// division by zero to guard at the call sites.
pub struct Progress {
    total: u64,
    start: Instant,
    last_paint: Option<Instant>,
    enabled: bool,
}

impl Progress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            start: Instant::now(),
            last_paint: None,
            enabled: true,
        }
    }

    /// A reporter that never paints. For library callers and tests.
    pub fn silent() -> Self {
        Self {
            total: 0,
            start: Instant::now(),
            last_paint: None,
            enabled: false,
        }
    }

    /// Report the running byte count. Callers pass monotonically increasing
    /// values; anything past `total` paints as 100%.
    pub fn update(&mut self, done: u64) {
        if !self.enabled || self.total == 0 || done == 0 {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_paint {
            if now.duration_since(last).as_secs() < 1 {
                return;
            }
        }
        let elapsed = now.duration_since(self.start).as_secs();
        if elapsed == 0 {
            return;
        }
        self.last_paint = Some(now);
        let done = done.min(self.total);
        let percent = done * 100 / self.total;
        let eta = (elapsed * self.total / done).saturating_sub(elapsed);
        print!("\rProgress: {}% | ETA: {} seconds", percent, eta);
        let _ = io::stdout().flush();
    }

    /// End the progress line if one was painted.
    pub fn finish(&mut self) {
        if self.enabled && self.last_paint.is_some() {
            println!();
        }
    }
}

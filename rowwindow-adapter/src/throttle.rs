/// Default minimum spacing between two handled scroll events.
pub const DEFAULT_THROTTLE_MS: u64 = 20;

/// A time-based gate for bursty events (e.g. scroll).
///
/// The first event after a quiet period passes immediately. Events arriving inside the
/// interval are not handled individually: they collapse into a single trailing event that
/// [`Throttle::poll`] releases once the interval has elapsed.
///
/// Time is supplied by the caller in milliseconds, so the gate works with any clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
    pending: bool,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
            pending: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns `true` if an event pushed back by [`Self::admit`] is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Offers an event at `now_ms`.
    ///
    /// Returns `true` when the event should be handled now. Otherwise the event is folded into
    /// the pending trailing event.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        if self.ready(now_ms) {
            self.fire(now_ms);
            return true;
        }
        self.pending = true;
        false
    }

    /// Releases the pending trailing event once the interval has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.pending || !self.ready(now_ms) {
            return false;
        }
        self.fire(now_ms);
        true
    }

    /// Forgets the last fire time and drops any pending event.
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
        self.pending = false;
    }

    fn ready(&self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    fn fire(&mut self, now_ms: u64) {
        self.last_fire_ms = Some(now_ms);
        self.pending = false;
    }
}

//! Boot-progress lamps.
//!
//! Cosmetic by contract: a board without status outputs can pass
//! [`NoIndicator`] and lose nothing.

use embedded_hal::digital::OutputPin;

/// Status outputs driven while the loader is active.
pub trait Indicator {
    fn boot_in_progress(&mut self);
}

/// No lamps attached.
pub struct NoIndicator;

impl Indicator for NoIndicator {
    fn boot_in_progress(&mut self) {}
}

/// Two status lamps, both lit for the duration of the boot attempt.
pub struct LampPair<A, B> {
    first: A,
    second: B,
}

impl<A: OutputPin, B: OutputPin> LampPair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: OutputPin, B: OutputPin> Indicator for LampPair<A, B> {
    fn boot_in_progress(&mut self) {
        // Indication is best effort; a lamp that cannot be driven is skipped.
        let _ = self.first.set_high();
        let _ = self.second.set_high();
    }
}

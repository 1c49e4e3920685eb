//! Bring-up of RAM that is not usable straight out of reset.

use serde::{Deserialize, Serialize};

use crate::{Bus, WordAddr};

/// Brings a RAM region into a usable electrical and timing state.
///
/// `initialize` blocks until the region is ready. There is no failure
/// signal and no timeout: if the hardware never reports ready, the call
/// never returns. Callers must treat it as an infinite wait, not a fallible
/// operation.
pub trait RamInit {
    fn initialize(&self, bus: &mut impl Bus);
}

/// One memory-controller register write.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RegisterWrite {
    pub register: WordAddr,
    pub value: u32,
}

/// A fixed register sequence ending in a ready poll.
///
/// The writes are an opaque calibration blob supplied per target board; do
/// not derive them, take them from the vendor's bring-up sequence verbatim.
pub struct RegisterScript<'a> {
    pub writes: &'a [RegisterWrite],
    /// Status register that reads non-zero once the controller is ready.
    pub ready: WordAddr,
}

impl RamInit for RegisterScript<'_> {
    fn initialize(&self, bus: &mut impl Bus) {
        for write in self.writes {
            bus.write_word(write.register, write.value);
        }

        // Busy-poll; no scheduler exists to yield to.
        while bus.read_word(self.ready) == 0 {}
    }
}

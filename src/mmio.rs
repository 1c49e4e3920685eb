//! Direct access to the physical address space.

use serde::{Deserialize, Serialize};

use crate::{Bus, RemapMode, WordAddr, launch::RemapControl};

/// The platform's remap register and the value that makes external RAM
/// answer at address zero. Both are board data, like the bring-up tables.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RemapRegister {
    pub register: WordAddr,
    pub external_ram: u32,
}

/// The one real memory bus: reads and writes go straight to physical
/// addresses as volatile word accesses.
pub struct Mmio {
    remap: RemapRegister,
}

impl Mmio {
    /// # Safety
    ///
    /// The caller must be the only execution context touching physical
    /// memory, and every address later passed through [`Bus`] must be
    /// valid to access as a `u32`. True for a loader running alone out of
    /// reset with a map describing real regions.
    pub const unsafe fn new(remap: RemapRegister) -> Self {
        Self { remap }
    }
}

impl Bus for Mmio {
    fn read_word(&mut self, addr: WordAddr) -> u32 {
        unsafe { core::ptr::read_volatile(addr.get() as *const u32) }
    }

    fn write_word(&mut self, addr: WordAddr, value: u32) {
        unsafe { core::ptr::write_volatile(addr.get() as *mut u32, value) }
    }
}

impl RemapControl for Mmio {
    fn remap(&mut self, mode: RemapMode) {
        let RemapRegister {
            register,
            external_ram,
        } = self.remap;

        match mode {
            RemapMode::None => {}
            RemapMode::ExternalRam => self.write_word(register, external_ram),
        }
    }
}

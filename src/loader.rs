//! The linear boot sequence: bring up RAM, read the boot line, relocate, launch.

use embedded_hal::digital::InputPin;

use crate::{
    Bus,
    bringup::RamInit,
    indicator::Indicator,
    launch::{Handoff, Launcher, RemapControl},
    map::MemoryMap,
    select::Selector,
};

/// One complete boot attempt, composed the only way the pieces fit:
/// selector, then relocator, then launcher.
pub struct Loader<S, P> {
    system: S,
    line: P,
    map: MemoryMap,
}

impl<S: Bus + RemapControl, P: InputPin> Loader<S, P> {
    pub const fn new(system: S, line: P, map: MemoryMap) -> Self {
        Self { system, line, map }
    }

    /// Run to the handoff. Never returns.
    ///
    /// External RAM is brought up first, unconditionally: it must be usable
    /// before any image targets it, and the sequence has no branch that
    /// skips it.
    ///
    /// # Safety
    ///
    /// The image stores described by the map must hold valid images for
    /// this platform; whatever their leading words encode is jumped to.
    pub unsafe fn run<H: Handoff>(
        mut self,
        ram: &impl RamInit,
        lamps: &mut impl Indicator,
        handoff: H,
    ) -> ! {
        ram.initialize(&mut self.system);

        lamps.boot_in_progress();

        let image = Selector::new(self.map).select(&mut self.line);
        let launcher = Launcher::new(self.system);
        unsafe { launcher.launch(&image, handoff) }
    }
}

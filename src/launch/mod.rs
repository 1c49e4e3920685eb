//! The one-way handoff from loader to image.

#[cfg(feature = "cortex_m")]
pub mod cortex_m;

use crate::{BootImage, Bus, LaunchVector, RemapMode, relocate::relocate};

/// Progress of a launch. Transitions are strictly sequential; there is no
/// path back from any stage.
///
/// `Transferred` is never observed by loader code: reaching the entry point
/// destroys the observer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Stage {
    Idle,
    Copying,
    Remapping,
    StackSwitched,
    Transferred,
}

/// The system-level remap write that changes which memory answers at address zero.
///
/// Owned by the platform; the launcher only invokes it for modes other than
/// [`RemapMode::None`], and at most once per boot attempt.
pub trait RemapControl {
    fn remap(&mut self, mode: RemapMode);
}

/// Replace the active stack pointer and branch to the entry point.
///
/// This consumes the execution context: after `transfer`, none of the
/// loader's stack frames may be touched again. Implementations whose entry
/// invocation is an ordinary call must end in [`park`] in case the image
/// returns despite the contract.
pub trait Handoff {
    /// # Safety
    ///
    /// `vector` must have been read from a valid image for this platform;
    /// control transfers to whatever address `entry_point` holds.
    unsafe fn transfer(self, vector: LaunchVector) -> !;
}

/// Holding pattern for an image that returns despite the contract.
///
/// There is no caller left to fall through to once the stack has been
/// switched, so the only defined behavior is to spin.
pub fn park() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Drives one image from its store to running code.
pub struct Launcher<S> {
    system: S,
    stage: Stage,
}

impl<S: Bus + RemapControl> Launcher<S> {
    pub const fn new(system: S) -> Self {
        Self {
            system,
            stage: Stage::Idle,
        }
    }

    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Everything that must happen before the stack switch: copy the image,
    /// extract its vector, rearrange the address space.
    ///
    /// The vector is live at the destination only once the copy is done, and
    /// is read through the pre-remap address; the remap write comes after,
    /// so the image finds the map it was linked for.
    pub fn prepare(&mut self, image: &BootImage) -> LaunchVector {
        self.stage = Stage::Copying;
        relocate(&mut self.system, image);

        let vector = LaunchVector::read(&mut self.system, image.destination);

        self.stage = Stage::Remapping;
        if image.remap != RemapMode::None {
            self.system.remap(image.remap);
        }

        vector
    }

    /// Run the full sequence and transfer control. Never returns.
    ///
    /// # Safety
    ///
    /// The store described by `image` must hold a valid image for this
    /// platform: two leading vector words followed by code linked to run at
    /// the destination (post-remap) address.
    pub unsafe fn launch<H: Handoff>(mut self, image: &BootImage, handoff: H) -> ! {
        let vector = self.prepare(image);

        // Past this point every input the image needs is committed; the
        // loader's own frames die with the stack switch.
        self.stage = Stage::StackSwitched;
        unsafe { handoff.transfer(vector) }
    }
}

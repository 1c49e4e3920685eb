//! Building blocks for a second-stage boot loader: pick an image, move it into place, jump to it.
#![no_std]

pub mod bringup;
pub mod indicator;
pub mod launch;
pub mod loader;
pub mod map;
pub mod mmio;
pub mod relocate;
pub mod select;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod mock;

use serde::{Deserialize, Serialize};

/// Size of one machine word in bytes.
pub const WORD_BYTES: u32 = 4;

/// A word-aligned physical address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct WordAddr(pub(crate) u32);

impl WordAddr {
    /// Returns `None` if `addr` is not word-aligned.
    pub const fn new(addr: u32) -> Option<Self> {
        if addr % WORD_BYTES == 0 {
            Some(Self(addr))
        } else {
            None
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Offset by a whole number of words, staying aligned.
    pub const fn add_words(self, words: u32) -> Self {
        Self(self.0 + words * WORD_BYTES)
    }
}

/// Which memory answers at address zero once the image is in place.
///
/// Extend with further variants for platforms that can map other regions
/// to the bottom of the address space.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RemapMode {
    /// Leave the reset memory map alone.
    None,
    /// Make external RAM visible at address zero.
    ExternalRam,
}

/// One boot attempt, fully described.
///
/// Built fresh by the selector for every attempt; nothing holds on to it
/// past the launch. `length_words * 4` must not exceed the capacity of the
/// destination region — the selector derives both from the same
/// [`MemoryMap`](map::MemoryMap), and nothing re-checks this at copy time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BootImage {
    pub source: WordAddr,
    pub destination: WordAddr,
    pub length_words: u32,
    pub remap: RemapMode,
}

/// The first two words of a relocated image: initial stack pointer, then entry point.
///
/// This is the whole image format contract, analogous to the first two
/// entries of a vector table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LaunchVector {
    pub initial_stack_pointer: u32,
    pub entry_point: u32,
}

impl LaunchVector {
    /// Read the vector out of an image at `image_base`.
    ///
    /// Only meaningful once the copy to `image_base` has completed; the
    /// words read before that belong to whatever occupied the region.
    pub fn read(bus: &mut impl Bus, image_base: WordAddr) -> Self {
        Self {
            initial_stack_pointer: bus.read_word(image_base),
            entry_point: bus.read_word(image_base.add_words(1)),
        }
    }
}

/// Word-granular access to the physical address space.
///
/// The loader runs before caches or DMA are configured, so implementations
/// must issue plain word accesses, one per call.
pub trait Bus {
    fn read_word(&mut self, addr: WordAddr) -> u32;
    fn write_word(&mut self, addr: WordAddr, value: u32);
}

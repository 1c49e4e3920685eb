//! Boot-source selection from a single input line.

use embedded_hal::digital::InputPin;

use crate::{BootImage, RemapMode, map::MemoryMap};

/// The two firmware images the loader can start.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BootChoice {
    /// Main application, run out of external RAM with the map rearranged.
    Application,
    /// Service image for in-system programming and recovery, run out of fast RAM.
    Service,
}

impl BootChoice {
    /// An asserted boot line selects the application, anything else the service image.
    pub const fn from_signal(asserted: bool) -> Self {
        if asserted {
            Self::Application
        } else {
            Self::Service
        }
    }
}

/// Maps the boot input to one of exactly two fixed [`BootImage`]s.
pub struct Selector {
    map: MemoryMap,
}

impl Selector {
    pub const fn new(map: MemoryMap) -> Self {
        Self { map }
    }

    /// Read the boot line and produce the image to start.
    pub fn select(&self, line: &mut impl InputPin) -> BootImage {
        // An unreadable line behaves like an unconnected one.
        let asserted = line.is_high().unwrap_or(false);
        self.image(BootChoice::from_signal(asserted))
    }

    /// The fixed image for `choice`. Same choice, same image; there is no other state.
    ///
    /// Nothing verifies that the store content actually fits the
    /// destination; stores and regions are sized together per board.
    pub const fn image(&self, choice: BootChoice) -> BootImage {
        match choice {
            BootChoice::Application => BootImage {
                source: self.map.app_store.base,
                destination: self.map.external_ram.base,
                length_words: self.map.app_store.length_words,
                remap: RemapMode::ExternalRam,
            },
            BootChoice::Service => BootImage {
                // Skip the RAM the loader itself occupies; the copy must not
                // land on the code performing it.
                source: self.map.service_store.base,
                destination: self
                    .map
                    .fast_ram
                    .base
                    .add_words(self.map.loader_reserved_words),
                length_words: self.map.fast_ram.length_words - self.map.loader_reserved_words,
                remap: RemapMode::None,
            },
        }
    }
}

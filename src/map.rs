//! The platform's memory geography, fixed at link time and supplied as data.

use serde::{Deserialize, Serialize};

use crate::{WORD_BYTES, WordAddr};

/// Layout revision of [`MemoryMap`]. Bump when fields change meaning.
pub const MEMORY_MAP_VERSION: u16 = 1;

/// One physically distinct memory area.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Region {
    pub base: WordAddr,
    pub length_words: u32,
}

impl Region {
    pub const fn length_bytes(&self) -> u32 {
        self.length_words * WORD_BYTES
    }
}

/// Every address the loader needs, gathered from one board's linker script.
///
/// Kept as a value rather than compiled-in globals so the whole boot
/// sequence can run against synthetic regions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MemoryMap {
    /// The [`MEMORY_MAP_VERSION`] this map was authored against.
    pub version: u16,
    /// On-chip RAM the loader itself executes from.
    pub fast_ram: Region,
    /// External RAM. Usable as a copy destination only after bring-up.
    pub external_ram: Region,
    /// Non-volatile store holding the application image.
    pub app_store: Region,
    /// Non-volatile store holding the service image.
    pub service_store: Region,
    /// Words at the bottom of fast RAM occupied by the running loader.
    /// Must match the loader's own linker script.
    pub loader_reserved_words: u32,
}

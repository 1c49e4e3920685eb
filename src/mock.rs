//! Instrumented stand-ins for the hardware seams.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
    vec::Vec,
};

use embedded_hal::digital::{ErrorType, InputPin};

use crate::{
    Bus, LaunchVector, RemapMode, WordAddr,
    launch::{Handoff, RemapControl},
    map::{MEMORY_MAP_VERSION, MemoryMap, Region},
};

/// Small synthetic memory geography, unrelated to any real board.
pub fn test_map() -> MemoryMap {
    MemoryMap {
        version: MEMORY_MAP_VERSION,
        fast_ram: Region {
            base: WordAddr::new(0x2000_0000).unwrap(),
            length_words: 16,
        },
        external_ram: Region {
            base: WordAddr::new(0x0000_0000).unwrap(),
            length_words: 32,
        },
        app_store: Region {
            base: WordAddr::new(0x6000_0000).unwrap(),
            length_words: 8,
        },
        service_store: Region {
            base: WordAddr::new(0x6002_0000).unwrap(),
            length_words: 12,
        },
        loader_reserved_words: 4,
    }
}

/// Everything observable that happens to the mock system, in order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    Read(WordAddr),
    Write(WordAddr, u32),
    Remap(RemapMode),
    Transfer(LaunchVector),
}

#[derive(Default)]
struct Inner {
    words: BTreeMap<u32, u32>,
    events: Vec<Event>,
}

/// Word-addressed memory backed by a map, with an ordered event log.
///
/// Shared through clones so a test keeps a handle on the memory and the log
/// across a launch that consumes the bus.
#[derive(Clone, Default)]
pub struct SharedBus(Arc<Mutex<Inner>>);

impl SharedBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, base: WordAddr, words: &[u32]) {
        let mut inner = self.0.lock().unwrap();
        for (i, word) in words.iter().enumerate() {
            inner.words.insert(base.add_words(i as u32).get(), *word);
        }
    }

    /// Current content at `addr`; untouched memory reads as zero.
    pub fn word(&self, addr: WordAddr) -> u32 {
        *self.0.lock().unwrap().words.get(&addr.get()).unwrap_or(&0)
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().events.clone()
    }

    /// Addresses written so far, in write order.
    pub fn written(&self) -> Vec<WordAddr> {
        self.0
            .lock()
            .unwrap()
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Write(addr, _) => Some(*addr),
                _ => None,
            })
            .collect()
    }

    pub fn record_transfer(&self, vector: LaunchVector) {
        self.0.lock().unwrap().events.push(Event::Transfer(vector));
    }
}

impl Bus for SharedBus {
    fn read_word(&mut self, addr: WordAddr) -> u32 {
        let mut inner = self.0.lock().unwrap();
        inner.events.push(Event::Read(addr));
        *inner.words.get(&addr.get()).unwrap_or(&0)
    }

    fn write_word(&mut self, addr: WordAddr, value: u32) {
        let mut inner = self.0.lock().unwrap();
        inner.events.push(Event::Write(addr, value));
        inner.words.insert(addr.get(), value);
    }
}

impl RemapControl for SharedBus {
    fn remap(&mut self, mode: RemapMode) {
        self.0.lock().unwrap().events.push(Event::Remap(mode));
    }
}

/// Boot line stuck at a fixed level.
pub struct MockPin {
    pub asserted: bool,
}

impl ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.asserted)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.asserted)
    }
}

/// Records the handoff and unwinds instead of jumping, so a test can
/// inspect everything that led up to it.
pub struct MockHandoff {
    pub bus: SharedBus,
}

impl Handoff for MockHandoff {
    unsafe fn transfer(self, vector: LaunchVector) -> ! {
        self.bus.record_transfer(vector);
        panic!("control transferred");
    }
}

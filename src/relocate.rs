//! Moving an image from its store into the region it will run from.

use crate::{BootImage, Bus};

/// Copy `image.length_words` words from source to destination, one word at a
/// time in ascending address order.
///
/// There is no overlap check, no partial-copy recovery, and no validation of
/// the words moved; source readability is assumed. The window written is
/// exactly `[destination, destination + 4 * length_words)`. Overlap with
/// memory the loader is executing from is undefined by contract — the
/// selector's fixed images are arranged so it cannot happen.
pub fn relocate(bus: &mut impl Bus, image: &BootImage) {
    let mut from = image.source;
    let mut to = image.destination;

    for _ in 0..image.length_words {
        let word = bus.read_word(from);
        bus.write_word(to, word);
        from = from.add_words(1);
        to = to.add_words(1);
    }
}

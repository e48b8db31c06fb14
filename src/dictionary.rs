//! Fixed-capacity code table used while decoding.
//!
//! Entries live in one byte arena; each slot records the span of its
//! string. Slots below [`Dictionary::next_code`] are defined, the rest are
//! free. The first [`BASE_SIZE`] slots always hold the single-byte base
//! alphabet.

use std::ops::Range;

use crate::Code;

/// Number of base-alphabet entries (one per byte value).
pub const BASE_SIZE: usize = 256;
/// Maximum number of entries a 12-bit code can address.
pub const MAX_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    start: u32,
    len: u32,
}

impl Slot {
    fn range(self) -> Range<usize> {
        let start = self.start as usize;
        start..start + self.len as usize
    }
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    arena: Vec<u8>,
    slots: Box<[Slot]>,
    next: usize,
}

impl Dictionary {
    /// Build a dictionary holding only the base alphabet.
    pub fn new() -> Self {
        let mut slots = vec![Slot::default(); MAX_SIZE].into_boxed_slice();
        for (value, slot) in slots.iter_mut().take(BASE_SIZE).enumerate() {
            *slot = Slot {
                start: value as u32,
                len: 1,
            };
        }
        Self {
            arena: (0..=u8::MAX).collect(),
            slots,
            next: BASE_SIZE,
        }
    }

    /// Drop every compound entry, leaving the base alphabet.
    ///
    /// Base slots point at the first `BASE_SIZE` arena bytes, which are
    /// never overwritten, so truncating the arena is enough.
    pub fn reset(&mut self) {
        self.arena.truncate(BASE_SIZE);
        self.next = BASE_SIZE;
    }

    /// Number of defined entries.
    pub fn len(&self) -> usize {
        self.next
    }

    /// Always false: the base alphabet is present from construction.
    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    /// True once every 12-bit slot is taken.
    pub fn is_full(&self) -> bool {
        self.next >= MAX_SIZE
    }

    /// Code the next call to [`Dictionary::define`] will assign.
    pub fn next_code(&self) -> Code {
        self.next as Code
    }

    /// String for `code`, if that slot is defined.
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        let index = code as usize;
        if index >= self.next {
            return None;
        }
        Some(&self.arena[self.slots[index].range()])
    }

    /// Define the next slot as the string for `prefix` followed by `suffix`.
    ///
    /// Returns the assigned code, or `None` when the table is full or
    /// `prefix` is undefined.
    pub fn define(&mut self, prefix: Code, suffix: u8) -> Option<Code> {
        if self.is_full() || prefix as usize >= self.next {
            return None;
        }
        let source = self.slots[prefix as usize].range();
        let start = self.arena.len();
        self.arena.extend_from_within(source);
        self.arena.push(suffix);
        let code = self.next_code();
        self.slots[self.next] = Slot {
            start: start as u32,
            len: (self.arena.len() - start) as u32,
        };
        self.next += 1;
        Some(code)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

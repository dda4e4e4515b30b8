//! Cache line metadata.
//!
//! A line moves between three states: invalid, valid-clean, and valid-dirty.
//! Fills and replacements always overwrite the whole line; the only in-place
//! changes are a recency refresh and setting the dirty bit on a write hit.

/// Metadata of a single cache slot.
///
/// When `valid` is false the tag and dirty bit carry no meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    valid: bool,
    dirty: bool,
    tag: u64,
    last_call: u64,
}

impl CacheLine {
    /// Creates a freshly filled valid line.
    ///
    /// # Arguments
    ///
    /// * `tag` - Tag of the block being installed.
    /// * `call` - Logical clock value of the access that installed it.
    /// * `dirty` - Whether the block is installed by a write.
    #[inline]
    pub const fn filled(tag: u64, call: u64, dirty: bool) -> Self {
        Self {
            valid: true,
            dirty,
            tag,
            last_call: call,
        }
    }

    /// Whether the line holds a block.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the held block differs from memory.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.valid && self.dirty
    }

    /// Tag of the held block, if any.
    #[inline]
    pub const fn tag(&self) -> Option<u64> {
        if self.valid { Some(self.tag) } else { None }
    }

    /// Logical time of the last access to this line.
    #[inline]
    pub const fn last_call(&self) -> u64 {
        self.last_call
    }

    /// Whether this line is valid and holds `tag`.
    #[inline]
    pub const fn holds(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Replacement ordering key; the smallest key is evicted first.
    ///
    /// `false < true`, so any invalid line sorts before every valid one.
    #[inline]
    pub const fn lru_key(&self) -> (bool, u64) {
        (self.valid, self.last_call)
    }

    #[inline]
    pub(crate) const fn touch(&mut self, call: u64) {
        self.last_call = call;
    }

    #[inline]
    pub(crate) const fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

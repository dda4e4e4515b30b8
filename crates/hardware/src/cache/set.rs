//! A single associative set.
//!
//! The set resolves tag lookups across its ways and, on a miss, replaces the
//! LRU victim with a whole new line. Evicting a dirty line is counted as a
//! memory push (a deferred write-back) but costs nothing here; the cache
//! charges those transfers lazily when its total time is queried.

use std::num::NonZeroUsize;

use super::line::CacheLine;
use super::lru;

/// A fixed group of `ways` lines sharing one line size.
#[derive(Clone, Debug)]
pub struct CacheSet {
    lines: Box<[CacheLine]>,
    line_bytes: u64,
    mem_pushes: u64,
}

impl CacheSet {
    /// Creates a set of `ways` invalid lines of `line_bytes` bytes each.
    pub fn new(ways: NonZeroUsize, line_bytes: u64) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways.get()].into_boxed_slice(),
            line_bytes,
            mem_pushes: 0,
        }
    }

    /// Looks up `tag` for a read at logical time `call`.
    ///
    /// A hit refreshes the line's recency. A miss fills the LRU victim with a
    /// clean line holding `tag`.
    ///
    /// # Returns
    ///
    /// `true` on a hit, `false` on a miss.
    pub fn read(&mut self, tag: u64, call: u64) -> bool {
        if let Some(line) = self.find_mut(tag) {
            line.touch(call);
            return true;
        }
        self.replace_victim(CacheLine::filled(tag, call, false));
        false
    }

    /// Records a write of `tag` at logical time `call`.
    ///
    /// A hit marks the line dirty and refreshes its recency. A miss fills the
    /// LRU victim with a dirty line holding `tag`.
    pub fn write(&mut self, tag: u64, call: u64) {
        if let Some(line) = self.find_mut(tag) {
            line.mark_dirty();
            line.touch(call);
            return;
        }
        self.replace_victim(CacheLine::filled(tag, call, true));
    }

    /// Number of dirty lines evicted from this set so far.
    #[inline]
    pub const fn mem_pushes(&self) -> u64 {
        self.mem_pushes
    }

    /// Whether a valid line holds `tag`.
    pub fn contains(&self, tag: u64) -> bool {
        self.lines.iter().any(|line| line.holds(tag))
    }

    /// The set's lines in way order.
    #[inline]
    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    /// Line size shared by every way of this set.
    #[inline]
    pub const fn line_bytes(&self) -> u64 {
        self.line_bytes
    }

    fn find_mut(&mut self, tag: u64) -> Option<&mut CacheLine> {
        self.lines.iter_mut().find(|line| line.holds(tag))
    }

    /// Overwrites the LRU victim with `line`, counting a push if it was dirty.
    fn replace_victim(&mut self, line: CacheLine) {
        let way = lru::victim_way(&self.lines);
        let victim = self.lines[way];
        debug_assert!(
            line.tag().is_none_or(|tag| !self.contains(tag)),
            "tag installed twice in one set"
        );
        if victim.is_dirty() {
            self.mem_pushes += 1;
            tracing::debug!(
                way,
                victim_tag = victim.tag(),
                "dirty line evicted, write-back deferred"
            );
        }
        self.lines[way] = line;
    }
}

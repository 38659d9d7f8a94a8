//! Snippet feed: the mock "live transcription" source for the curator.
//!
//! Injected so tests drive deterministic ticks instead of real timers and
//! real randomness.

use quorum_core::{now_ms, LIVE_SNIPPET_POOL};

/// Source of transcription snippets, polled once per recording tick.
/// `None` means no line arrived on this tick.
pub trait SnippetFeed: Send {
    fn poll(&mut self) -> Option<&'static str>;
}

/// Production feed: emits a pool line on roughly a third of ticks, chosen by
/// a small xorshift generator seeded from the wall clock.
pub struct MockPoolFeed {
    rng_state: u64,
}

impl MockPoolFeed {
    pub fn new() -> Self {
        Self::with_seed(now_ms() as u64 | 1)
    }

    /// Fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng_state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state = x;
        x
    }
}

impl Default for MockPoolFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetFeed for MockPoolFeed {
    fn poll(&mut self) -> Option<&'static str> {
        if self.next_u64() % 10 < 3 {
            let idx = (self.next_u64() % LIVE_SNIPPET_POOL.len() as u64) as usize;
            Some(LIVE_SNIPPET_POOL[idx])
        } else {
            None
        }
    }
}

/// Scripted feed for tests: yields the given lines in order, then `None`.
pub struct ScriptedFeed {
    lines: std::vec::IntoIter<&'static str>,
}

impl ScriptedFeed {
    pub fn new(lines: Vec<&'static str>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl SnippetFeed for ScriptedFeed {
    fn poll(&mut self) -> Option<&'static str> {
        self.lines.next()
    }
}

#![forbid(unsafe_code)]

//! The repaint loop behind obfuscated runs.
//!
//! Each mounted obfuscated run owns one [`ObfuscationAnimator`] and one
//! [`AnimatorHandle`]. The display loop pulls a fresh frame with
//! [`ObfuscationAnimator::tick`] once per refresh opportunity; stopping the
//! handle guarantees no further frame is produced. Animators for different
//! runs are fully independent and share nothing but the immutable glyph
//! table.

use crate::glyph::{GLYPHS, GlyphTable};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic xorshift64 stream for glyph selection.
#[derive(Debug, Clone)]
pub struct FrameRng {
    state: u64,
}

impl FrameRng {
    /// Create a generator from a seed. Equal seeds yield equal streams.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        // xorshift state must be nonzero.
        Self { state: seed | 1 }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Draw one glyph uniformly from a non-empty pool.
    fn pick(&mut self, pool: &[char]) -> char {
        pool[(self.next_u64() % pool.len() as u64) as usize]
    }
}

/// Produce one scramble frame for `text`.
///
/// Pure in everything but the RNG: every space is kept, every other character
/// is replaced by a random glyph from its own width class. The frame has the
/// same character count and the same space positions as `text`.
#[must_use]
pub fn scramble_frame(text: &str, table: &GlyphTable, rng: &mut FrameRng) -> String {
    text.chars()
        .map(|ch| match table.classify(ch) {
            Some(class) => rng.pick(table.pool(class)),
            None => ch,
        })
        .collect()
}

/// An unbounded, cancelable source of scramble frames for one run.
///
/// Ticks are independent: no frame is memoized, and the sequence is
/// equivalent to an unbounded lazy stream of strings the length of the
/// source. The source text itself is never mutated.
#[derive(Debug)]
pub struct ObfuscationAnimator {
    source: String,
    rng: FrameRng,
    live: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
}

/// Handle owned by the display unit showing an obfuscated run.
///
/// `stop` is idempotent and may be called from wherever the display unit
/// lives; once it returns, the paired animator produces nothing more.
/// Dropping the handle stops the animator too.
#[derive(Debug)]
pub struct AnimatorHandle {
    live: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
}

impl ObfuscationAnimator {
    /// Create an animator over `source` with a time-derived seed.
    #[must_use]
    pub fn new(source: impl Into<String>) -> (Self, AnimatorHandle) {
        Self::with_seed(source, entropy_seed())
    }

    /// Create an animator with an explicit seed, for reproducible frames.
    #[must_use]
    pub fn with_seed(source: impl Into<String>, seed: u64) -> (Self, AnimatorHandle) {
        let live = Arc::new(AtomicBool::new(true));
        let ticks = Arc::new(AtomicU64::new(0));
        let animator = Self {
            source: source.into(),
            rng: FrameRng::new(seed),
            live: Arc::clone(&live),
            ticks: Arc::clone(&ticks),
        };
        tracing::trace!(len = animator.source.len(), "obfuscation animator started");
        (animator, AnimatorHandle { live, ticks })
    }

    /// Produce the next frame, or `None` once the handle has been stopped.
    ///
    /// Intended to be called once per display refresh; each call is a short
    /// synchronous computation bounded by the source length.
    pub fn tick(&mut self) -> Option<String> {
        if !self.live.load(Ordering::Acquire) {
            return None;
        }
        self.ticks.fetch_add(1, Ordering::Relaxed);
        Some(scramble_frame(&self.source, &GLYPHS, &mut self.rng))
    }

    /// The untouched source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Iterator for ObfuscationAnimator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tick()
    }
}

impl AnimatorHandle {
    /// Stop the paired animator. Safe to call any number of times.
    pub fn stop(&self) {
        if self.live.swap(false, Ordering::Release) {
            tracing::trace!("obfuscation animator stopped");
        }
    }

    /// Whether the animator has been stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        !self.live.load(Ordering::Acquire)
    }

    /// Number of frames produced so far. Stops increasing after [`stop`].
    ///
    /// [`stop`]: AnimatorHandle::stop
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn entropy_seed() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    // Distinct even for animators created within the same clock tick.
    nanos ^ COUNTER
        .fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed)
        .wrapping_add(0x9E37_79B9_7F4A_7C15)
}

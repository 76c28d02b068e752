#![forbid(unsafe_code)]

//! Renderer glue: one display unit per styled run.
//!
//! [`mount`] turns a parsed run sequence into display units, attaching one
//! [`ObfuscationAnimator`] to each obfuscated run. Unmounting (or dropping) a
//! unit stops its animator; no frame is produced afterwards. Run sequences
//! are immutable once mounted — when the source text changes, tear the old
//! units down and mount a fresh parse.

use mcfmt_anim::{AnimatorHandle, ObfuscationAnimator};
use mcfmt_text::{StyledRun, clip_lines, parse, purify};

/// A mounted display unit for one styled run.
#[derive(Debug)]
pub struct MountedRun {
    run: StyledRun,
    animator: Option<(ObfuscationAnimator, AnimatorHandle)>,
}

impl MountedRun {
    fn new(run: StyledRun) -> Self {
        let animator = run
            .is_obfuscated()
            .then(|| ObfuscationAnimator::new(run.text.clone()));
        Self { run, animator }
    }

    /// The run backing this unit.
    #[must_use]
    pub fn run(&self) -> &StyledRun {
        &self.run
    }

    /// The text to draw on this refresh.
    ///
    /// Obfuscated runs yield a fresh scramble frame per call; everything else
    /// yields the literal text. The backing run is never modified.
    #[must_use]
    pub fn display_text(&mut self) -> String {
        match &mut self.animator {
            Some((animator, _)) => animator
                .tick()
                .unwrap_or_else(|| self.run.text.clone()),
            None => self.run.text.clone(),
        }
    }

    /// The animator handle, if this run is obfuscated.
    #[must_use]
    pub fn handle(&self) -> Option<&AnimatorHandle> {
        self.animator.as_ref().map(|(_, handle)| handle)
    }

    /// Tear the unit down, stopping its animator.
    pub fn unmount(self) {
        // Dropping the handle cancels the repaint task.
    }
}

/// Mount parsed runs as display units.
#[must_use]
pub fn mount(runs: Vec<StyledRun>) -> Vec<MountedRun> {
    let obfuscated = runs.iter().filter(|r| r.is_obfuscated()).count();
    if obfuscated > 0 {
        tracing::debug!(runs = runs.len(), obfuscated, "mounting styled runs");
    }
    runs.into_iter().map(MountedRun::new).collect()
}

/// Sanitize, clip to at most `max_lines` visible lines, parse, and mount.
///
/// The line limit is renderer policy: lines past the limit are silently
/// discarded, never re-flowed, and never an error.
#[must_use]
pub fn present(raw: &str, max_lines: usize) -> Vec<MountedRun> {
    let clean = purify(raw);
    mount(parse(clip_lines(&clean, max_lines)))
}

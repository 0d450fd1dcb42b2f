//! Context Accumulator
//!
//! [`DebateContext`] is the single source of truth for everything said so far
//! in one session. Its snapshot is the `context` input of the next worker call.

use super::stance::Stance;

/// Append-only shared debate transcript threaded between worker calls.
///
/// The buffer only ever grows: [`DebateContext::append`] is the sole mutator
/// and never truncates or reorders earlier content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateContext {
    seed: String,
    buffer: String,
    entries: usize,
}

impl DebateContext {
    /// Start the buffer at `seed` (possibly empty)
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        Self {
            buffer: seed.clone(),
            seed,
            entries: 0,
        }
    }

    /// Append a labeled entry for `stance`, separated from prior content by a newline
    pub fn append(&mut self, stance: Stance, argument: &str) {
        self.buffer.push('\n');
        self.buffer.push_str(stance.context_label());
        self.buffer.push_str(": ");
        self.buffer.push_str(argument);
        self.entries += 1;
    }

    /// Current buffer contents, including every append made so far
    pub fn snapshot(&self) -> &str {
        &self.buffer
    }

    /// The caller-supplied context the buffer started from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of arguments appended
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DebateContext {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_seed() {
        let ctx = DebateContext::new("Background facts");
        assert_eq!(ctx.snapshot(), "Background facts");
        assert_eq!(ctx.seed(), "Background facts");
        assert_eq!(ctx.entries(), 0);
    }

    #[test]
    fn test_append_formats_labeled_entry() {
        let mut ctx = DebateContext::new("seed");
        ctx.append(Stance::Supporting, "S1");
        assert_eq!(ctx.snapshot(), "seed\nSupporting argument: S1");
    }

    #[test]
    fn test_append_on_empty_seed_still_separates_with_newline() {
        let mut ctx = DebateContext::default();
        ctx.append(Stance::Supporting, "S1");
        ctx.append(Stance::Opposing, "O1");
        assert_eq!(
            ctx.snapshot(),
            "\nSupporting argument: S1\nOpposing argument: O1"
        );
        assert_eq!(ctx.entries(), 2);
        assert_eq!(ctx.seed(), "");
    }

    #[test]
    fn test_buffer_is_monotonic() {
        let mut ctx = DebateContext::new("seed");
        let mut previous = ctx.snapshot().to_string();
        for (i, stance) in [Stance::Supporting, Stance::Opposing, Stance::Supporting]
            .into_iter()
            .enumerate()
        {
            ctx.append(stance, &format!("arg {}", i));
            let current = ctx.snapshot();
            assert!(current.starts_with(&previous));
            assert!(current.len() > previous.len());
            previous = current.to_string();
        }
    }
}

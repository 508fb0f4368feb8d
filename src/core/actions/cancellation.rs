use std::sync::atomic::{AtomicU64, Ordering};

/// Polled between units of work; once true, the work is abandoned.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled as soon as the shared counter moves past the generation it
/// was created for.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    current: &'a AtomicU64,
    generation: u64,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(current: &'a AtomicU64, generation: u64) -> Self {
        Self {
            current,
            generation,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn never_cancel_always_returns_false() {
        let token = NeverCancel;
        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn generation_token_is_live_while_generation_matches() {
        let current = AtomicU64::new(3);
        let token = GenerationToken::new(&current, 3);

        assert!(!token.is_cancelled());
        assert_eq!(token.generation(), 3);
    }

    #[test]
    fn generation_token_cancels_once_superseded() {
        let current = AtomicU64::new(3);
        let token = GenerationToken::new(&current, 3);

        current.fetch_add(1, Ordering::SeqCst);

        assert!(token.is_cancelled());
    }
}

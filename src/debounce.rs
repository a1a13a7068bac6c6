//! Generation-based debounce.
//!
//! Every call to [`Debouncer::bump`] supersedes the previous one. Callers
//! sleep for the quiet period and only act if their ticket is still current,
//! so a burst of keystrokes results in a single reload.

use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Debouncer {
    pub fn bump(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Wait out the quiet period
pub async fn quiet_period(ms: u32) {
    TimeoutFuture::new(ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.bump();
        let second = debouncer.bump();
        let third = debouncer.bump();
        assert!(!debouncer.is_current(first));
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }
}

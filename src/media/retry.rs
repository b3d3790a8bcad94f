use std::future::Future;

use log::debug;

use crate::config::timing::SOUND_RETRY_BACKOFF_MS;
use crate::error::FunnelError;

/// Bounded retry: one immediate attempt, then one more per backoff entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    backoff_ms: &'static [u32],
}

impl RetryPolicy {
    pub const fn new(backoff_ms: &'static [u32]) -> Self {
        Self { backoff_ms }
    }

    pub fn notification_sound() -> Self {
        Self::new(&SOUND_RETRY_BACKOFF_MS)
    }

    pub fn attempts(&self) -> usize {
        self.backoff_ms.len() + 1
    }

    /// Wait before `attempt` (0-based); the first attempt goes straight out.
    pub fn delay_before(&self, attempt: usize) -> Option<u32> {
        attempt.checked_sub(1).and_then(|i| self.backoff_ms.get(i).copied())
    }
}

/// Runs `attempt` until it succeeds or the policy is spent.
///
/// `attempt` gets the 0-based attempt number so callers can swap in a fresh
/// resource after the first failure. Returns the 1-based number of the
/// attempt that succeeded.
pub async fn retry<A, AF, S, SF>(
    policy: RetryPolicy,
    mut attempt: A,
    mut sleep: S,
) -> Result<usize, FunnelError>
where
    A: FnMut(usize) -> AF,
    AF: Future<Output = Result<(), FunnelError>>,
    S: FnMut(u32) -> SF,
    SF: Future<Output = ()>,
{
    let mut last = None;
    for n in 0..policy.attempts() {
        if let Some(delay) = policy.delay_before(n) {
            sleep(delay).await;
        }
        match attempt(n).await {
            Ok(()) => return Ok(n + 1),
            Err(e) => {
                debug!("Attempt {} failed: {}", n + 1, e);
                last = Some(e);
            }
        }
    }
    Err(FunnelError::PlaybackExhausted {
        attempts: policy.attempts(),
        last: last.map(|e| e.to_string()).unwrap_or_default(),
    })
}

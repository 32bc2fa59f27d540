//! Nonce generation for Kraken API authentication.
//!
//! Kraken rejects a signed request whose nonce is not greater than the last
//! one it accepted for the key, so every value handed out by a provider must
//! be strictly larger than all earlier ones from the same instance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be strictly greater than any previously returned value.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider based on wall-clock time at microsecond resolution.
///
/// When the clock does not advance between calls (or moves backwards), the
/// last issued value plus one is used instead, so concurrent callers sharing
/// one instance never observe a duplicate.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    fn current_time_micros() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = Self::current_time_micros();

        // fetch_update retries the CAS until our candidate wins, so each
        // caller gets a distinct value even under contention.
        let previous = self
            .last_nonce
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(time_nonce.max(last + 1))
            })
            .unwrap_or_default();

        time_nonce.max(previous + 1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;

    #[test]
    fn test_nonce_strictly_increasing() {
        let provider = IncreasingNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(IncreasingNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            for nonce in nonces {
                assert!(
                    all_nonces.insert(nonce),
                    "Nonce must be unique across threads"
                );
            }
        }
    }

    #[test]
    fn test_nonce_is_roughly_wall_clock() {
        let provider = IncreasingNonce::new();
        let before = IncreasingNonce::current_time_micros();
        let nonce = provider.next_nonce();
        assert!(nonce >= before);
    }
}

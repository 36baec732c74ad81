use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use fbref_model::PacingOptions;

use crate::error::Result;

use super::DocumentSource;

/// Random pause between consecutive fetches.
///
/// The first fetch of a run is never delayed.
pub struct Pacer {
    options: PacingOptions,
    rng: StdRng,
    started: bool,
}

impl Pacer {
    pub fn new(options: PacingOptions) -> Self {
        Self {
            options,
            rng: StdRng::from_entropy(),
            started: false,
        }
    }

    /// Deterministic pacer for tests.
    pub fn with_seed(options: PacingOptions, seed: u64) -> Self {
        Self {
            options,
            rng: StdRng::seed_from_u64(seed),
            started: false,
        }
    }

    /// Delay to apply before the next fetch.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if !self.started {
            self.started = true;
            return None;
        }
        if self.options.is_disabled() {
            return None;
        }
        let max = self.options.max_secs;
        let min = self.options.min_secs.min(max);
        Some(Duration::from_secs(self.rng.gen_range(min..=max)))
    }

    /// Sleeps for [`Pacer::next_delay`].
    pub fn wait(&mut self) {
        if let Some(delay) = self.next_delay() {
            debug!(delay_secs = delay.as_secs(), "pacing before next fetch");
            thread::sleep(delay);
        }
    }
}

/// Waits on a [`Pacer`] before every fetch of the wrapped source.
///
/// Placed under a cache so that documents served from disk are never paced.
pub struct PacedFetcher<S> {
    inner: S,
    pacer: Pacer,
}

impl<S: DocumentSource> PacedFetcher<S> {
    pub fn new(inner: S, pacer: Pacer) -> Self {
        Self { inner, pacer }
    }
}

impl<S: DocumentSource> DocumentSource for PacedFetcher<S> {
    fn fetch(&mut self, source: &str) -> Result<String> {
        self.pacer.wait();
        self.inner.fetch(source)
    }
}

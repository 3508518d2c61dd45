//! Health-weighted round-robin host selection
//!
//! Each host carries a weight in `[0, init_weight]`; weight 0 marks the
//! host as down. Upload outcomes adjust weights through
//! [`HostSelector::penalize`] and [`HostSelector::reward`], steering
//! rotation away from failing hosts without ever gating on them strictly.

use parking_lot::Mutex;
use rand::Rng;

/// Round-robin picker over a fixed host list with per-host health weights
///
/// Shared by all upload workers; weight-vector mutations are serialized on
/// an internal lock. The rotation cursor starts at a random position so
/// processes started in lockstep spread load across the pool.
pub struct HostSelector {
    hosts: Vec<String>,
    init_weight: u32,
    state: Mutex<SelectorState>,
}

struct SelectorState {
    weights: Vec<u32>,
    cursor: usize,
}

impl HostSelector {
    /// Create a selector over `hosts`, every weight starting at `init_weight`
    pub fn new(hosts: Vec<String>, init_weight: u32) -> Self {
        let count = hosts.len();
        let cursor = if count == 0 {
            0
        } else {
            rand::rng().random_range(0..count)
        };
        Self {
            init_weight,
            state: Mutex::new(SelectorState {
                weights: vec![init_weight; count],
                cursor,
            }),
            hosts,
        }
    }

    #[cfg(test)]
    fn with_cursor(hosts: Vec<String>, init_weight: u32, cursor: usize) -> Self {
        let count = hosts.len();
        Self {
            init_weight,
            state: Mutex::new(SelectorState {
                weights: vec![init_weight; count],
                cursor,
            }),
            hosts,
        }
    }

    /// Pick the next host in rotation
    ///
    /// Returns `None` only when every host has weight 0, and in that case
    /// restores all weights to `init_weight` so the next call succeeds.
    ///
    /// The cursor advances unconditionally: a host whose own weight is 0
    /// may still be returned while another host is up. Callers treat the
    /// result as a hint; the following `penalize` steers the rotation.
    pub fn select(&self) -> Option<String> {
        let mut state = self.state.lock();
        if state.weights.iter().all(|&w| w == 0) {
            let init = self.init_weight;
            for w in &mut state.weights {
                *w = init;
            }
            return None;
        }
        state.cursor = (state.cursor + 1) % self.hosts.len();
        Some(self.hosts[state.cursor].clone())
    }

    /// Decrement the host's weight, clamped at 0
    ///
    /// Only the first host matching the URL is updated.
    pub fn penalize(&self, host: &str) {
        let mut state = self.state.lock();
        if let Some(i) = self.hosts.iter().position(|h| h == host) {
            state.weights[i] = state.weights[i].saturating_sub(1);
        }
    }

    /// Increment the host's weight, clamped at `init_weight`
    ///
    /// Only the first host matching the URL is updated.
    pub fn reward(&self, host: &str) {
        let mut state = self.state.lock();
        if let Some(i) = self.hosts.iter().position(|h| h == host) {
            state.weights[i] = (state.weights[i] + 1).min(self.init_weight);
        }
    }

    /// Current weight of a host, for observability
    pub fn current_weight(&self, host: &str) -> Option<u32> {
        let state = self.state.lock();
        self.hosts
            .iter()
            .position(|h| h == host)
            .map(|i| state.weights[i])
    }

    /// Number of hosts in the pool
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }
}

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Monotonic request generations for the listings grid, tracked per
/// browsing client.
///
/// Filter changes re-fetch the grid, and nothing cancels an in-flight
/// fetch when the criteria change again, so a slow response could land
/// after a newer one and overwrite it. Each grid request draws a
/// generation for its client when it starts; before responding it checks
/// that the same client has drawn nothing newer, and answers 204 (no
/// swap) if it has. Clients are independent: one user's filter changes
/// never invalidate another's in-flight request.
#[derive(Debug, Default)]
pub struct Generations {
    latest: Mutex<HashMap<String, u64>>,
}

/// Upper bound on tracked clients. Past it the table is reset, which at
/// worst drops one in-flight render per active client.
const MAX_TRACKED_CLIENTS: usize = 4096;

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next generation for `client`. Call once at the start of
    /// a request.
    pub fn draw(&self, client: &str) -> u64 {
        let mut latest = self.lock();
        if latest.len() >= MAX_TRACKED_CLIENTS && !latest.contains_key(client) {
            latest.clear();
        }
        let counter = latest.entry(client.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// True while `generation` is still the newest drawn for `client`.
    pub fn is_current(&self, client: &str, generation: u64) -> bool {
        self.lock().get(client).copied() == Some(generation)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        match self.latest.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

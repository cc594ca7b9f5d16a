use dashmap::DashMap;

/// Sliding-window rate limiter keyed by caller-chosen strings.
///
/// Each key maps to the timestamps (milliseconds) of its attempts inside
/// the current window. The prune-check-append in `is_allowed` runs under
/// the map's entry lock, so concurrent checks on the same key cannot
/// under- or over-count. State is in-memory and advisory only; nothing
/// survives a restart.
pub struct RateLimiter {
    attempts: DashMap<String, Vec<i64>>,
    max_attempts: u32,
    window_ms: i64,
}

impl RateLimiter {
    pub fn new(max_attempts: u32, window_ms: i64) -> Self {
        Self {
            attempts: DashMap::new(),
            max_attempts,
            window_ms,
        }
    }

    /// Record an attempt for `key` unless the window is already full.
    ///
    /// Timestamps older than the window are discarded first. Returns false
    /// without recording when `max_attempts` timestamps remain inside the
    /// window; otherwise records `now_ms` and returns true. Keys never
    /// seen before start from an empty history.
    pub fn is_allowed(&self, key: &str, now_ms: i64) -> bool {
        let window_start = now_ms - self.window_ms;

        let mut entry = self.attempts.entry(key.to_string()).or_insert_with(Vec::new);
        entry.retain(|&ts| ts > window_start);

        if entry.len() >= self.max_attempts as usize {
            return false;
        }

        entry.push(now_ms);
        true
    }

    /// Forget all recorded attempts for `key`.
    pub fn reset(&self, key: &str) {
        self.attempts.remove(key);
    }

    /// Drop keys whose attempts have all aged out of the window.
    /// Returns the number of keys removed.
    pub fn cleanup_stale(&self, now_ms: i64) -> usize {
        let window_start = now_ms - self.window_ms;
        let before = self.attempts.len();

        self.attempts
            .retain(|_, stamps| stamps.iter().any(|&ts| ts > window_start));

        before - self.attempts.len()
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

//! Client liveness tracking.
//!
//! A front end pings periodically; the owner checks at a fixed interval and
//! shuts down once no ping has arrived within the timeout. Only a
//! long-running front end needs this; see [`crate::session`].

use std::time::{Duration, Instant};

/// How long without a ping before the session counts as abandoned.
pub const HEARTBEAT_TIMEOUT: Duration = Duration::from_secs(60);
/// How often the owner should call [`Liveness::is_expired`].
pub const CHECK_INTERVAL: Duration = Duration::from_secs(10);
/// How often a client is expected to ping.
pub const CLIENT_PING_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy)]
pub struct Liveness {
    last_ping: Instant,
    timeout: Duration,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new(HEARTBEAT_TIMEOUT)
    }
}

impl Liveness {
    pub fn new(timeout: Duration) -> Self {
        Self::starting_at(Instant::now(), timeout)
    }

    pub fn starting_at(now: Instant, timeout: Duration) -> Self {
        Self {
            last_ping: now,
            timeout,
        }
    }

    pub fn ping(&mut self) {
        self.ping_at(Instant::now());
    }

    pub fn ping_at(&mut self, now: Instant) {
        if now > self.last_ping {
            self.last_ping = now;
        }
    }

    pub fn last_ping(&self) -> Instant {
        self.last_ping
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// True once strictly more than the timeout has passed since the last ping.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_ping) > self.timeout
    }
}

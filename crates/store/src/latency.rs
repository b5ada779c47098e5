//! Simulated round-trip latency.

use std::time::Duration;

/// Switch for the simulated network round-trip applied by repository and
/// auth operations. Disabled by default so tests run at full speed; the
/// runtime enables it from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    /// Latency that sleeps for each operation's nominal duration.
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    /// Latency that returns immediately.
    pub fn none() -> Self {
        Self { enabled: false }
    }

    pub fn from_config(simulate: bool) -> Self {
        Self { enabled: simulate }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Suspend the caller for `nominal` when simulation is enabled.
    pub async fn simulate(&self, nominal: Duration) {
        if self.enabled {
            tokio::time::sleep(nominal).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_latency_returns_immediately() {
        let latency = Latency::none();
        let started = std::time::Instant::now();
        latency.simulate(Duration::from_secs(10)).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn from_config_matches_switch() {
        assert!(Latency::from_config(true).is_enabled());
        assert!(!Latency::from_config(false).is_enabled());
        assert!(!Latency::default().is_enabled());
    }
}

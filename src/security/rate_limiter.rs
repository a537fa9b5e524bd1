use std::net::IpAddr;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use dashmap::DashMap;

/// Fixed-window request counter per client address. Blunt abuse
/// prevention, not a scheduler: the first request in a window resets the
/// counter, everything past the ceiling inside the window is rejected.
pub struct RateLimiter {
    windows: DashMap<IpAddr, (AtomicU32, AtomicI64)>,
    max_requests: u32,
    window_secs: i64,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_secs: i64) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window_secs,
        }
    }

    /// Count one request from `ip` at unix time `now`; false means reject.
    pub fn allow(&self, ip: IpAddr, now: i64) -> bool {
        let entry = self
            .windows
            .entry(ip)
            .or_insert_with(|| (AtomicU32::new(0), AtomicI64::new(now)));
        let (count, window_start) = entry.value();

        if now - window_start.load(Ordering::Relaxed) >= self.window_secs {
            window_start.store(now, Ordering::Relaxed);
            count.store(1, Ordering::Relaxed);
            return true;
        }

        count.fetch_add(1, Ordering::Relaxed) + 1 <= self.max_requests
    }

    /// Drop windows that expired before `now`; run periodically so idle
    /// clients do not accumulate.
    pub fn evict_expired(&self, now: i64) {
        self.windows
            .retain(|_, (_, window_start)| now - window_start.load(Ordering::Relaxed) < self.window_secs);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[test]
    fn allows_up_to_the_ceiling_then_blocks() {
        let limiter = RateLimiter::new(3, 60);
        for _ in 0..3 {
            assert!(limiter.allow(ip(1), 1000));
        }
        assert!(!limiter.allow(ip(1), 1000));
    }

    #[test]
    fn window_resets_after_expiry() {
        let limiter = RateLimiter::new(2, 60);
        assert!(limiter.allow(ip(1), 1000));
        assert!(limiter.allow(ip(1), 1000));
        assert!(!limiter.allow(ip(1), 1030));
        assert!(limiter.allow(ip(1), 1060));
    }

    #[test]
    fn clients_are_limited_independently() {
        let limiter = RateLimiter::new(1, 60);
        assert!(limiter.allow(ip(1), 1000));
        assert!(!limiter.allow(ip(1), 1000));
        assert!(limiter.allow(ip(2), 1000));
    }

    #[test]
    fn eviction_drops_only_expired_windows() {
        let limiter = RateLimiter::new(10, 60);
        limiter.allow(ip(1), 1000);
        limiter.allow(ip(2), 1040);
        assert_eq!(limiter.tracked_clients(), 2);

        limiter.evict_expired(1070);
        assert_eq!(limiter.tracked_clients(), 1);

        limiter.evict_expired(1200);
        assert_eq!(limiter.tracked_clients(), 0);
    }

    #[test]
    fn concurrent_counting_respects_the_ceiling() {
        use std::sync::Arc;
        use std::thread;

        let limiter = Arc::new(RateLimiter::new(100, 60));
        let mut handles = vec![];
        for _ in 0..10 {
            let limiter = Arc::clone(&limiter);
            handles.push(thread::spawn(move || {
                for _ in 0..10 {
                    limiter.allow(ip(1), 1000);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(!limiter.allow(ip(1), 1000));
    }
}

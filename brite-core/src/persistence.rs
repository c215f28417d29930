//! Deferred persistence of the active color.
//!
//! Non-volatile cells wear out, so the active color is not written on every
//! change. A change arms a settle timer; only when the timer runs a full
//! window without another change is the index written, once, to address 0.
//! The value written is the index active when the window closes.

use crate::config::ACTIVE_COLOR_ADDRESS;
use crate::hal::{NvStorage, PersistenceError};

/// Settle timer for the active color write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceScheduler {
    armed: bool,
    elapsed_ticks: u32,
    wait_ticks: u32,
}

impl PersistenceScheduler {
    /// Create a disarmed scheduler that writes after `wait_ticks` quiet ticks.
    #[must_use]
    pub const fn new(wait_ticks: u32) -> Self {
        Self {
            armed: false,
            elapsed_ticks: 0,
            wait_ticks,
        }
    }

    /// Restart the settle window.
    pub fn on_color_changed(&mut self) {
        self.elapsed_ticks = 0;
        self.armed = true;
    }

    /// Count one tick and write `active_index` when the window closes.
    ///
    /// Returns `Ok(true)` on the tick that wrote. A failed write leaves the
    /// scheduler armed with a fresh window, so it is retried later.
    pub fn on_tick<S: NvStorage>(
        &mut self,
        active_index: u8,
        storage: &mut S,
    ) -> Result<bool, PersistenceError> {
        if !self.armed {
            return Ok(false);
        }

        self.elapsed_ticks += 1;
        if self.elapsed_ticks < self.wait_ticks {
            return Ok(false);
        }

        match storage.write_slot(ACTIVE_COLOR_ADDRESS, active_index) {
            Ok(()) => {
                self.armed = false;
                self.elapsed_ticks = 0;
                debug!("persisted active color {}", active_index);
                Ok(true)
            }
            Err(e) => {
                self.elapsed_ticks = 0;
                Err(e)
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    #[must_use]
    pub const fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    #[inline]
    #[must_use]
    pub const fn wait_ticks(&self) -> u32 {
        self.wait_ticks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockStorage {
        writes: Vec<(u8, u8)>,
        fail_next_write: bool,
    }

    impl NvStorage for MockStorage {
        fn read_slot(&mut self, _addr: u8) -> Result<u8, PersistenceError> {
            Ok(0xFF)
        }

        fn write_slot(&mut self, addr: u8, value: u8) -> Result<(), PersistenceError> {
            if self.fail_next_write {
                self.fail_next_write = false;
                return Err(PersistenceError::Write);
            }
            self.writes.push((addr, value));
            Ok(())
        }
    }

    #[test]
    fn test_disarmed_never_writes() {
        let mut sched = PersistenceScheduler::new(10);
        let mut storage = MockStorage::default();
        for _ in 0..100 {
            assert_eq!(sched.on_tick(3, &mut storage), Ok(false));
        }
        assert!(storage.writes.is_empty());
    }

    #[test]
    fn test_writes_once_after_window() {
        let mut sched = PersistenceScheduler::new(10);
        let mut storage = MockStorage::default();
        sched.on_color_changed();
        for _ in 0..9 {
            assert_eq!(sched.on_tick(3, &mut storage), Ok(false));
        }
        assert_eq!(sched.on_tick(3, &mut storage), Ok(true));
        assert!(!sched.is_armed());
        for _ in 0..50 {
            sched.on_tick(3, &mut storage).unwrap();
        }
        assert_eq!(storage.writes, [(ACTIVE_COLOR_ADDRESS, 3)]);
    }

    #[test]
    fn test_change_restarts_window() {
        let mut sched = PersistenceScheduler::new(10);
        let mut storage = MockStorage::default();
        sched.on_color_changed();
        for _ in 0..8 {
            sched.on_tick(1, &mut storage).unwrap();
        }
        sched.on_color_changed();
        assert_eq!(sched.elapsed_ticks(), 0);
        for _ in 0..9 {
            sched.on_tick(2, &mut storage).unwrap();
        }
        assert!(storage.writes.is_empty());
        sched.on_tick(2, &mut storage).unwrap();
        assert_eq!(storage.writes, [(ACTIVE_COLOR_ADDRESS, 2)]);
    }

    #[test]
    fn test_writes_value_current_at_expiry() {
        let mut sched = PersistenceScheduler::new(3);
        let mut storage = MockStorage::default();
        sched.on_color_changed();
        sched.on_tick(1, &mut storage).unwrap();
        sched.on_tick(1, &mut storage).unwrap();
        sched.on_tick(5, &mut storage).unwrap();
        assert_eq!(storage.writes, [(ACTIVE_COLOR_ADDRESS, 5)]);
    }

    #[test]
    fn test_failed_write_retries_next_window() {
        let mut sched = PersistenceScheduler::new(4);
        let mut storage = MockStorage {
            fail_next_write: true,
            ..Default::default()
        };
        sched.on_color_changed();
        for _ in 0..3 {
            sched.on_tick(2, &mut storage).unwrap();
        }
        assert_eq!(
            sched.on_tick(2, &mut storage),
            Err(PersistenceError::Write)
        );
        assert!(sched.is_armed());
        for _ in 0..3 {
            assert_eq!(sched.on_tick(2, &mut storage), Ok(false));
        }
        assert_eq!(sched.on_tick(2, &mut storage), Ok(true));
        assert_eq!(storage.writes, [(ACTIVE_COLOR_ADDRESS, 2)]);
    }
}

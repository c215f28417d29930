//! Byte-addressed non-volatile store emulated on the last flash sector.
//!
//! The RP2040 has no EEPROM. The store is a 256-byte image kept in RAM and
//! mirrored to one 4 KiB flash sector. Reads come from RAM. A write that
//! changes a byte erases the sector and programs the whole image back.
//!
//! An erased sector reads as `0xFF`, matching an erased EEPROM cell.
//!
//! Erase and program run blocking inside the dispatch task. While they run
//! (tens of milliseconds for the erase) no other task is polled, so received
//! bytes wait in the UART FIFO and ticks are caught up afterwards by the
//! ticker. The deferred active color write happens at most once per settle
//! window; explicit Save commands reprogram the sector each time they change
//! a byte.

use brite_core::{NvStorage, PersistenceError};
use defmt::{debug, warn};
use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;

use crate::config::{FLASH_SIZE, STORE_LEN, STORE_OFFSET};

/// Flash-backed byte store.
pub struct FlashEeprom<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
    image: [u8; STORE_LEN],
}

impl<'d> FlashEeprom<'d> {
    /// Take the flash peripheral and load the stored image.
    ///
    /// If the sector cannot be read, the store starts out erased.
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        let mut store = Self {
            flash: Flash::new_blocking(flash),
            image: [brite_core::ERASED; STORE_LEN],
        };
        if let Err(e) = store.flash.blocking_read(STORE_OFFSET, &mut store.image) {
            warn!("store read failed, starting erased: {:?}", e);
            store.image = [brite_core::ERASED; STORE_LEN];
        }
        store
    }

    fn commit(&mut self, image: &[u8; STORE_LEN]) -> Result<(), PersistenceError> {
        self.flash
            .blocking_erase(STORE_OFFSET, STORE_OFFSET + ERASE_SIZE as u32)
            .map_err(|e| {
                warn!("store erase failed: {:?}", e);
                PersistenceError::Write
            })?;
        self.flash
            .blocking_write(STORE_OFFSET, image)
            .map_err(|e| {
                warn!("store program failed: {:?}", e);
                PersistenceError::Write
            })
    }
}

impl NvStorage for FlashEeprom<'_> {
    fn read_slot(&mut self, addr: u8) -> Result<u8, PersistenceError> {
        self.image
            .get(usize::from(addr))
            .copied()
            .ok_or(PersistenceError::OutOfRange)
    }

    fn write_slot(&mut self, addr: u8, value: u8) -> Result<(), PersistenceError> {
        let index = usize::from(addr);
        let current = *self.image.get(index).ok_or(PersistenceError::OutOfRange)?;
        if current == value {
            return Ok(());
        }

        let mut next = self.image;
        next[index] = value;
        self.commit(&next)?;
        self.image = next;
        debug!("store[{=u8:#x}] = {=u8}", addr, value);
        Ok(())
    }
}

#![doc = r#"
Bus module: CPU address-space router.

Overview
- `Bus` owns the 2 KiB system RAM, the attached `Cartridge` (which in turn
  owns all cartridge storage and its mapper) and an optional host-supplied
  handler for the reserved I/O-register window.
- Every CPU read/write goes through `cpu_interface`, the single address
  decoder. No route ever fails: unmapped reads return 0, unmapped writes
  are discarded.

Modules and responsibilities
- cpu_interface: CPU-visible address decoder (read/write, word helpers).
- ram: 2 KiB internal RAM with 0x0800 mirroring.
- interfaces: `IoRegisters`, the injectable $2000-$401F handler.
- tests: bus-level routing tests.
"#]

use log::debug;

use crate::cartridge::Cartridge;

mod cpu_interface;
/// Injectable handler for the I/O-register window.
pub mod interfaces;
/// 2 KiB internal RAM with mirroring.
pub mod ram;

#[cfg(test)]
mod tests;

pub use interfaces::IoRegisters;
pub use ram::{CPU_RAM_SIZE, Ram};

/// The CPU-visible bus.
#[derive(Default)]
pub struct Bus {
    ram: Ram,
    cartridge: Option<Cartridge>,
    io: Option<Box<dyn IoRegisters>>,
}

impl Bus {
    /// Empty bus: zeroed RAM, no cartridge, no I/O handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear RAM. The cartridge (including save storage) and the I/O handler
    /// stay attached.
    pub fn reset(&mut self) {
        self.ram.reset();
    }

    // -----------------------------
    // Attachments
    // -----------------------------

    pub fn attach_cartridge(&mut self, cart: Cartridge) {
        debug!(
            "bus: cartridge attached (mapper {}, PRG {} bytes)",
            cart.mapper_id(),
            cart.prg_len()
        );
        self.cartridge = Some(cart);
    }

    /// Remove and return the cartridge, e.g. to persist its save storage.
    pub fn detach_cartridge(&mut self) -> Option<Cartridge> {
        self.cartridge.take()
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    pub fn cartridge_mut(&mut self) -> Option<&mut Cartridge> {
        self.cartridge.as_mut()
    }

    /// Route $2000-$401F to `io`, replacing any previous handler.
    pub fn attach_io(&mut self, io: Box<dyn IoRegisters>) {
        self.io = Some(io);
    }

    pub fn detach_io(&mut self) -> Option<Box<dyn IoRegisters>> {
        self.io.take()
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    #[inline]
    pub fn read(&mut self, addr: u16) -> u8 {
        cpu_interface::cpu_read(self, addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        cpu_interface::cpu_write(self, addr, value);
    }

    /// Little-endian word read (low byte at `addr`).
    #[inline]
    pub fn read_word(&mut self, addr: u16) -> u16 {
        cpu_interface::cpu_read_word(self, addr)
    }

    /// Little-endian word write (low byte first).
    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        cpu_interface::cpu_write_word(self, addr, value);
    }
}

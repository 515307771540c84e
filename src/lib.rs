#![doc = r#"
famicore library crate.

The CPU-side core of an NES: a cycle-counted 6502 (2A03) interpreter, the
CPU address bus and iNES cartridge loading with mapper translation.
Graphics, audio and input live outside this crate and plug into the bus
through `bus::IoRegisters`.

Modules:
- bus: CPU address-space router (RAM mirroring, I/O window, cartridge)
- cartridge: iNES loader, header metadata, save storage; owns the Mapper
- cpu: 6502 engine (state + table + dispatch + execute modules)
- mapper: CartridgeMapper trait and NROM (mapper 0)

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

// Core modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod mapper;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, IoRegisters};
pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use cpu::core::Cpu;
pub use mapper::{CartridgeMapper, Mapper};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

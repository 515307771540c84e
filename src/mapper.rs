/*!
Mapper subsystem: cartridge address translation.

Purpose:
- Decouple cartridge-space address mapping from the `Cartridge` so additional
  mappers can be added as new enum arms.
- Give the Bus one stable entry point for CPU transactions at $4020-$FFFF
  (and for pattern-table accesses below $2000 on behalf of the graphics side).

Ownership:
- `CartridgeMemory` holds the program / pattern / save arrays and is owned
  by the `Cartridge`. Mappers hold only their own banking state and borrow
  the arrays per access, so there is a single owner of cartridge storage.

Safety:
- No mapper panics on any 16-bit address. Out-of-window or out-of-array
  reads return 0 and such writes are dropped.
*/

use crate::cartridge::CartridgeError;

/// Program storage unit (header byte 4).
pub const PRG_UNIT: usize = 16 * 1024;
/// Pattern storage unit (header byte 5).
pub const CHR_UNIT: usize = 8 * 1024;
/// Save storage size, mapped at $6000-$7FFF.
pub const SAVE_RAM_SIZE: usize = 0x2000;

/// Byte arrays owned by a cartridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeMemory {
    prg: Vec<u8>,
    chr: Vec<u8>,
    sram: Vec<u8>,
}

impl CartridgeMemory {
    /// Wrap program and pattern data; save storage starts zeroed.
    pub fn new(prg: Vec<u8>, chr: Vec<u8>) -> Self {
        Self {
            prg,
            chr,
            sram: vec![0; SAVE_RAM_SIZE],
        }
    }

    pub fn prg(&self) -> &[u8] {
        &self.prg
    }

    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    pub fn sram(&self) -> &[u8] {
        &self.sram
    }

    pub fn sram_mut(&mut self) -> &mut [u8] {
        &mut self.sram
    }
}

/// Common interface all cartridge mappers implement.
///
/// Addresses are full, unmasked bus addresses.
pub trait CartridgeMapper {
    /// iNES mapper number.
    fn mapper_id(&self) -> u8;

    fn read(&self, mem: &CartridgeMemory, addr: u16) -> u8;

    fn write(&mut self, mem: &mut CartridgeMemory, addr: u16, value: u8);
}

/// NROM (mapper 0).
///
/// - $0000-$1FFF: pattern storage, readable and writable (boards with
///   pattern RAM rely on the writes).
/// - $6000-$7FFF: save storage.
/// - $8000-$FFFF: program storage. With a single 16 KiB unit the upper
///   window mirrors the lower one. Writes land at the same offset reads
///   use, so a write through either window is visible through both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nrom {
    prg_mirrored: bool,
}

impl Nrom {
    pub fn new(mem: &CartridgeMemory) -> Self {
        Self {
            prg_mirrored: mem.prg.len() == PRG_UNIT,
        }
    }

    /// True when $C000-$FFFF aliases $8000-$BFFF.
    pub fn prg_mirrored(&self) -> bool {
        self.prg_mirrored
    }

    #[inline]
    fn prg_offset(&self, addr: u16) -> usize {
        let rel = (addr - 0x8000) as usize;
        if self.prg_mirrored { rel & 0x3FFF } else { rel }
    }
}

impl CartridgeMapper for Nrom {
    fn mapper_id(&self) -> u8 {
        0
    }

    fn read(&self, mem: &CartridgeMemory, addr: u16) -> u8 {
        let byte = match addr {
            0x0000..=0x1FFF => mem.chr.get(addr as usize),
            0x6000..=0x7FFF => mem.sram.get((addr - 0x6000) as usize),
            0x8000..=0xFFFF => mem.prg.get(self.prg_offset(addr)),
            _ => None,
        };
        byte.copied().unwrap_or(0)
    }

    fn write(&mut self, mem: &mut CartridgeMemory, addr: u16, value: u8) {
        let slot = match addr {
            0x0000..=0x1FFF => mem.chr.get_mut(addr as usize),
            0x6000..=0x7FFF => mem.sram.get_mut((addr - 0x6000) as usize),
            0x8000..=0xFFFF => mem.prg.get_mut(self.prg_offset(addr)),
            _ => None,
        };
        if let Some(slot) = slot {
            *slot = value;
        }
    }
}

/// Closed set of supported mappers, selected once at cartridge construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapper {
    Nrom(Nrom),
}

impl Mapper {
    /// Build the mapper for header id `id`.
    pub fn from_id(id: u8, mem: &CartridgeMemory) -> Result<Self, CartridgeError> {
        match id {
            0 => Ok(Mapper::Nrom(Nrom::new(mem))),
            other => Err(CartridgeError::UnsupportedMapper(other)),
        }
    }
}

impl CartridgeMapper for Mapper {
    fn mapper_id(&self) -> u8 {
        match self {
            Mapper::Nrom(m) => m.mapper_id(),
        }
    }

    #[inline]
    fn read(&self, mem: &CartridgeMemory, addr: u16) -> u8 {
        match self {
            Mapper::Nrom(m) => m.read(mem, addr),
        }
    }

    #[inline]
    fn write(&mut self, mem: &mut CartridgeMemory, addr: u16, value: u8) {
        match self {
            Mapper::Nrom(m) => m.write(mem, addr, value),
        }
    }
}

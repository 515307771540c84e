/*!
Cartridge with iNES loader and Mapper integration (NROM/mapper 0).

Features:
- Parse the 16-byte iNES header from bytes
- Skip the optional 512-byte trainer, slice program and pattern storage
- Determine mirroring, battery-backed save storage, trainer presence,
  extended-format marker and mapper ID
- Construct the concrete Mapper and delegate every cartridge-space access
  through it
- Import / export the 8 KiB save storage so a host can persist it

Notes:
- Construction either fully succeeds or returns a `CartridgeError`; no
  partial cartridge is ever produced.
- A pattern size of 0 units leaves pattern storage empty (reads return 0).
- Mirroring and four-screen flags are carried for the graphics side; this
  core does not interpret them.
*/

use log::{info, warn};
use thiserror::Error;

use crate::mapper::{CHR_UNIT, CartridgeMapper, CartridgeMemory, Mapper, PRG_UNIT, SAVE_RAM_SIZE};

/// iNES signature, header bytes 0-3.
pub const INES_MAGIC: [u8; 4] = *b"NES\x1A";
pub const HEADER_LEN: usize = 16;
pub const TRAINER_LEN: usize = 512;

/// Errors raised while building a `Cartridge`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartridgeError {
    #[error("invalid image: missing iNES signature")]
    InvalidImage,
    #[error("truncated image: {section} needs {needed} bytes, {available} available")]
    TruncatedImage {
        section: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("unsupported mapper: {0}")]
    UnsupportedMapper(u8),
    #[error("save storage size mismatch: expected {expected} bytes, got {actual}")]
    SaveSizeMismatch { expected: usize, actual: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Decoded iNES header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub prg_units: u8,
    pub chr_units: u8,
    pub mapper_id: u8,
    pub mirroring: Mirroring,
    pub battery: bool,
    pub trainer: bool,
    pub extended: bool,
}

impl Header {
    /// Decode the first 16 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        if data.len() < INES_MAGIC.len() || data[..4] != INES_MAGIC {
            return Err(CartridgeError::InvalidImage);
        }
        if data.len() < HEADER_LEN {
            return Err(CartridgeError::TruncatedImage {
                section: "header",
                needed: HEADER_LEN,
                available: data.len(),
            });
        }

        let flags6 = data[6];
        let flags7 = data[7];

        let mirroring = if flags6 & 0b0000_1000 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        Ok(Self {
            prg_units: data[4],
            chr_units: data[5],
            mapper_id: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring,
            battery: flags6 & 0b0000_0010 != 0,
            trainer: flags6 & 0b0000_0100 != 0,
            extended: flags7 & 0b0000_1100 == 0b0000_1000,
        })
    }

    pub fn prg_len(&self) -> usize {
        self.prg_units as usize * PRG_UNIT
    }

    pub fn chr_len(&self) -> usize {
        self.chr_units as usize * CHR_UNIT
    }
}

#[derive(Debug, Clone)]
pub struct Cartridge {
    header: Header,
    memory: CartridgeMemory,
    mapper: Mapper,
}

/// Borrow `len` bytes at `offset`, or report which section ran short.
fn take_section<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    section: &'static str,
) -> Result<&'a [u8], CartridgeError> {
    data.get(offset..offset + len)
        .ok_or(CartridgeError::TruncatedImage {
            section,
            needed: len,
            available: data.len().saturating_sub(offset),
        })
}

impl Cartridge {
    // -------------- Construction --------------

    /// Load a cartridge from raw iNES bytes. Save storage starts zeroed.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        Self::build(data).inspect_err(|e| warn!("cartridge rejected: {e}"))
    }

    /// Load a cartridge and restore its save storage from `save`
    /// (exactly 8 KiB).
    pub fn from_ines_bytes_with_save(data: &[u8], save: &[u8]) -> Result<Self, CartridgeError> {
        let mut cart = Self::from_ines_bytes(data)?;
        cart.load_save_ram(save)?;
        Ok(cart)
    }

    fn build(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = Header::parse(data)?;

        let mut offset = HEADER_LEN;
        if header.trainer {
            take_section(data, offset, TRAINER_LEN, "trainer")?;
            offset += TRAINER_LEN;
        }

        let prg = take_section(data, offset, header.prg_len(), "program data")?.to_vec();
        offset += prg.len();
        let chr = take_section(data, offset, header.chr_len(), "pattern data")?.to_vec();

        let memory = CartridgeMemory::new(prg, chr);
        let mapper = Mapper::from_id(header.mapper_id, &memory)?;

        info!(
            "cartridge loaded: mapper {}, PRG {} KiB, CHR {} KiB, {:?} mirroring, battery={}, trainer={}, extended={}",
            header.mapper_id,
            header.prg_len() / 1024,
            header.chr_len() / 1024,
            header.mirroring,
            header.battery,
            header.trainer,
            header.extended
        );

        Ok(Self {
            header,
            memory,
            mapper,
        })
    }

    // -------------- Cartridge-space access (delegating to Mapper) --------------

    /// Read through the mapper. Covers $4020-$FFFF for the CPU and
    /// $0000-$1FFF pattern accesses.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.mapper.read(&self.memory, addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.mapper.write(&mut self.memory, addr, value);
    }

    // -------------- Save storage --------------

    pub fn save_ram(&self) -> &[u8] {
        self.memory.sram()
    }

    pub fn save_ram_mut(&mut self) -> &mut [u8] {
        self.memory.sram_mut()
    }

    /// Replace save storage with `data`, which must be exactly 8 KiB.
    pub fn load_save_ram(&mut self, data: &[u8]) -> Result<(), CartridgeError> {
        if data.len() != SAVE_RAM_SIZE {
            return Err(CartridgeError::SaveSizeMismatch {
                expected: SAVE_RAM_SIZE,
                actual: data.len(),
            });
        }
        self.memory.sram_mut().copy_from_slice(data);
        Ok(())
    }

    // -------------- Accessors --------------

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    pub fn mapper_id(&self) -> u8 {
        self.mapper.mapper_id()
    }

    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring
    }

    pub fn battery_backed(&self) -> bool {
        self.header.battery
    }

    pub fn has_trainer(&self) -> bool {
        self.header.trainer
    }

    pub fn is_extended_format(&self) -> bool {
        self.header.extended
    }

    pub fn prg_len(&self) -> usize {
        self.memory.prg().len()
    }

    pub fn chr_len(&self) -> usize {
        self.memory.chr().len()
    }
}

//! Shared test utilities for building minimal iNES ROM images.
//!
//! Used by the CPU, Bus and Cartridge tests. They support only what the
//! suite needs: NROM images with simple flags.
//!
//! iNES header fields written here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = program storage size in 16 KiB units
//! - byte 5 = pattern storage size in 8 KiB units (0 => no pattern data)
//! - byte 6 = Flags 6 (mirroring, battery, trainer, mapper low nibble)
//! - byte 7 = Flags 7 (extended-format marker, mapper high nibble)
//! - byte 8 = PRG RAM size in 8 KiB units (informational; save storage is always 8 KiB)
//! - bytes 9..15 = padding
//!
//! Vectors:
//! - 16 KiB program storage: vectors at offset 0x3FFA..=0x3FFF
//! - 32 KiB program storage: vectors at offset 0x7FFA..=0x7FFF

#![allow(dead_code)]

/// Build a minimal iNES image with configurable sizes and flags.
///
/// Program storage is filled with 0xAA, pattern storage with 0xCC.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    prg_ram_8k: u8,
    trainer: Option<&[u8; 512]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        16 + trainer.map_or(0, |_| 512) + prg_16k * 16 * 1024 + chr_8k * 8 * 1024,
    );

    // Header
    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.push(prg_ram_8k);
    bytes.extend_from_slice(&[0u8; 7]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }

    bytes.extend(std::iter::repeat_n(0xAA, prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat_n(0xCC, chr_8k * 8 * 1024));

    bytes
}

/// Build an NROM image whose single 16 KiB program bank starts with `prg`
/// and ends with the given vectors.
///
/// - `prg`: program bytes placed at $8000 (must fit in 16 KiB)
/// - `chr_8k`: pattern storage units
/// - `prg_ram_8k`: header byte 8
/// - `vectors`: optional (reset, nmi, irq); defaults to $8000 for all three
pub fn build_nrom_with_prg(
    prg: &[u8],
    chr_8k: usize,
    prg_ram_8k: u8,
    vectors: Option<(u16, u16, u16)>,
) -> Vec<u8> {
    assert!(
        prg.len() <= 16 * 1024,
        "Program must fit within a 16 KiB PRG bank"
    );

    let mut rom = build_ines(1, chr_8k, 0, 0, prg_ram_8k, None);

    let prg_start = 16;
    let prg_end = prg_start + 16 * 1024;
    rom[prg_start..(prg_start + prg.len())].copy_from_slice(prg);

    let (reset, nmi, irq) = vectors.unwrap_or((0x8000, 0x8000, 0x8000));
    set_vectors_in_prg(&mut rom[prg_start..prg_end], reset, nmi, irq);

    rom
}

/// Write NMI, RESET and IRQ/BRK vectors into a 16 KiB or 32 KiB program
/// image. Panics on any other length.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let base = match prg.len() {
        16384 => 0x3FFA,
        32768 => 0x7FFA,
        other => panic!(
            "Unsupported PRG length for vector placement: {} bytes (expected 16 KiB or 32 KiB)",
            other
        ),
    };
    write_le_u16(prg, base, nmi);
    write_le_u16(prg, base + 2, reset);
    write_le_u16(prg, base + 4, irq);
}

#[inline]
fn write_le_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset] = (value & 0x00FF) as u8;
    buf[offset + 1] = (value >> 8) as u8;
}

/// NROM image where only the RESET vector is chosen; NMI and IRQ point at
/// $8000. `reset` defaults to $8000 as well.
pub fn build_nrom_with_prg_reset_only(prg: &[u8], chr_8k: usize, reset: Option<u16>) -> Vec<u8> {
    let vectors = reset.map(|r| (r, 0x8000, 0x8000));
    build_nrom_with_prg(prg, chr_8k, 1, vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_ines() {
        let rom = build_ines(2, 1, 0x01, 0x00, 1, None);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(rom[4], 2);
        assert_eq!(rom[5], 1);
        assert_eq!(rom[6], 0x01);
        assert_eq!(rom[8], 1);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn writes_vectors_for_16k_prg() {
        let mut prg = vec![0u8; 16 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(prg[0x3FFA..], [0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn writes_vectors_for_32k_prg() {
        let mut prg = vec![0u8; 32 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(prg[0x7FFA..], [0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn reset_only_keeps_other_vectors_default() {
        let rom = build_nrom_with_prg_reset_only(&[0xEA], 1, Some(0x9234));
        let prg = &rom[16..16 + 16 * 1024];
        assert_eq!(prg[0], 0xEA);
        assert_eq!(prg[0x3FFA..], [0x00, 0x80, 0x34, 0x92, 0x00, 0x80]);
    }
}

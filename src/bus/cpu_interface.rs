/*!
CPU interface dispatcher

Purpose
- Centralize CPU-visible address decoding and delegate to the owning device.
- Keep the decode table in one place, apart from the Bus façade.

Address map:
- $0000-$07FF: 2KB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask & 0x07FF)
- $2000-$401F: Reserved I/O-register window, forwarded to the injected
               `IoRegisters` handler (reads 0 / writes dropped without one)
- $4020-$FFFF: Cartridge (expansion area, save RAM, program ROM), through
               its mapper (reads 0 / writes dropped without a cartridge)

Every address resolves to exactly one route and no access fails.
*/

use crate::bus::Bus;

/// CPU-visible read from the unified address space.
pub(in crate::bus) fn cpu_read(bus: &mut Bus, addr: u16) -> u8 {
    match addr {
        0x0000..=0x1FFF => bus.ram.read(addr),
        0x2000..=0x401F => match bus.io.as_deref_mut() {
            Some(io) => io.read(addr),
            None => 0,
        },
        0x4020..=0xFFFF => match &bus.cartridge {
            Some(cart) => cart.read(addr),
            None => 0,
        },
    }
}

/// CPU-visible write to the unified address space.
pub(in crate::bus) fn cpu_write(bus: &mut Bus, addr: u16, value: u8) {
    match addr {
        0x0000..=0x1FFF => bus.ram.write(addr, value),
        0x2000..=0x401F => {
            if let Some(io) = bus.io.as_deref_mut() {
                io.write(addr, value);
            }
        }
        0x4020..=0xFFFF => {
            if let Some(cart) = bus.cartridge.as_mut() {
                cart.write(addr, value);
            }
        }
    }
}

/// Little-endian word read used by CPU vectors and indirect addressing.
pub(in crate::bus) fn cpu_read_word(bus: &mut Bus, addr: u16) -> u16 {
    let lo = cpu_read(bus, addr) as u16;
    let hi = cpu_read(bus, addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}

/// Little-endian word write: low byte at `addr`, high byte at `addr + 1`.
pub(in crate::bus) fn cpu_write_word(bus: &mut Bus, addr: u16, value: u16) {
    cpu_write(bus, addr, (value & 0x00FF) as u8);
    cpu_write(bus, addr.wrapping_add(1), (value >> 8) as u8);
}

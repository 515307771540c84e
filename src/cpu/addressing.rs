/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
Provides canonical helpers for:
- Instruction stream byte/word fetch
- Effective address calculation for all 13 addressing modes
- Page-cross detection for the indexed modes (cycle penalty input)
- Emulation of the 6502 JMP (indirect) page-wrap quirk

Scope & Responsibilities
========================
- Pure address / operand resolution only. No cycle accounting happens here;
  `resolve` reports `page_crossed` and the dispatcher decides whether the
  opcode pays for it.
- `Relative` resolves to the branch target. Its `page_crossed` compares the
  target page with the page of the instruction that follows the branch.

Caller Assumptions
==================
- PC points at the first operand byte (the opcode has already been fetched).
- Callers advance PC exclusively via these helpers.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

/// The 13 documented 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Relative,
    Indirect,
    /// `(zp,X)`
    IndexedIndirect,
    /// `(zp),Y`
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// What an addressing mode produced. Exactly one form per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Effective 16-bit bus address.
    Address(u16),
    /// Literal byte from the instruction stream.
    Immediate(u8),
    /// Implicit / accumulator: the opcode knows where its operand lives.
    None,
}

/// Outcome of resolving one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    pub page_crossed: bool,
}

impl Resolved {
    #[inline]
    fn plain(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    #[inline]
    fn indexed(base: u16, addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: crosses_page(base, addr),
        }
    }

    /// Effective address, if the mode produced one.
    #[inline]
    pub fn address(&self) -> Option<u16> {
        match self.operand {
            Operand::Address(a) => Some(a),
            _ => None,
        }
    }
}

/// True when `a` and `b` live on different 256-byte pages.
#[inline]
pub(crate) fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u8 {
    let pc = cpu.pc();
    let v = bus.read(pc);
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Resolve the operand of the instruction whose opcode was just fetched.
pub(crate) fn resolve<C: CpuRegs>(mode: AddressingMode, cpu: &mut C, bus: &mut Bus) -> Resolved {
    match mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => Resolved::plain(Operand::None),
        AddressingMode::Immediate => Resolved::plain(Operand::Immediate(fetch_byte(cpu, bus))),
        AddressingMode::ZeroPage => {
            Resolved::plain(Operand::Address(fetch_byte(cpu, bus) as u16))
        }
        AddressingMode::ZeroPageX => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            Resolved::plain(Operand::Address(zp as u16))
        }
        AddressingMode::ZeroPageY => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.y());
            Resolved::plain(Operand::Address(zp as u16))
        }
        AddressingMode::Absolute => Resolved::plain(Operand::Address(fetch_word(cpu, bus))),
        AddressingMode::AbsoluteX => {
            let base = fetch_word(cpu, bus);
            Resolved::indexed(base, base.wrapping_add(cpu.x() as u16))
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(cpu, bus);
            Resolved::indexed(base, base.wrapping_add(cpu.y() as u16))
        }
        AddressingMode::Relative => {
            let offset = fetch_byte(cpu, bus) as i8;
            let next = cpu.pc();
            let target = next.wrapping_add(offset as i16 as u16);
            Resolved::indexed(next, target)
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            Resolved::plain(Operand::Address(read_word_indirect_bug(bus, ptr)))
        }
        AddressingMode::IndexedIndirect => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            Resolved::plain(Operand::Address(read_word_zp(bus, zp)))
        }
        AddressingMode::IndirectIndexed => {
            let zp = fetch_byte(cpu, bus);
            let base = read_word_zp(bus, zp);
            Resolved::indexed(base, base.wrapping_add(cpu.y() as u16))
        }
    }
}

/// Read the byte an operand designates. Implicit/accumulator operands read A.
#[inline]
pub(crate) fn load_operand<C: CpuRegs>(cpu: &C, bus: &mut Bus, operand: Operand) -> u8 {
    match operand {
        Operand::Address(a) => bus.read(a),
        Operand::Immediate(v) => v,
        Operand::None => cpu.a(),
    }
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a 16-bit little endian pointer from zero page; the high byte wraps
/// within page zero.
#[inline]
pub(crate) fn read_word_zp(bus: &mut Bus, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) hardware bug: the high byte of the target is read from
/// the same page as the low byte, so `$10FF` pairs with `$1000`.
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &mut Bus, ptr: u16) -> u16 {
    let lo = bus.read(ptr) as u16;
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

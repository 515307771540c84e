/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so every dispatch family
shares a single implementation. All helpers are generic over `CpuRegs` and
take the bus explicitly when they touch memory.

Scope (crate-visible)
---------------------
Flag & status helpers:
    set_flag, get_flag, update_zn

Stack helpers:
    push, pop, push_word, pop_word, push_status_with_break, pull_status
    php, plp, pha, pla

Interrupt entry:
    enter_interrupt (shared by BRK, IRQ and NMI)

Core ALU / register transfer:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
    and/ora/eor/bit
    inx/iny/dex/dey
    adc/sbc, cmp_generic

Shifts / rotates / INC / DEC:
    accumulator and memory versions; memory versions go through
    `rmw_memory` and return the written value so the undocumented
    combos (SLO, RLA, SRE, RRA, DCP, ISC) can chain a second operation.

Notes
=====
- Decimal mode is ignored: the NES ALU has no BCD path.
- Status pulls force UNUSED on and drop BREAK.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, IRQ_DISABLE, NEGATIVE, OVERFLOW, STACK_PAGE, UNUSED, ZERO};

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

#[inline]
pub(crate) fn update_zn<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

/// Write at $0100+SP, then decrement SP (wraps).
#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u8) {
    let sp = cpu.sp();
    bus.write(STACK_PAGE | sp as u16, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

/// Increment SP (wraps), then read $0100+SP.
#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(STACK_PAGE | sp as u16)
}

/// High byte first, so the low byte ends up at the lower address.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u16) {
    push(cpu, bus, (v >> 8) as u8);
    push(cpu, bus, (v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> u16 {
    let lo = pop(cpu, bus) as u16;
    let hi = pop(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Push P with control over Break flag semantics (BRK/PHP vs IRQ/NMI).
pub(crate) fn push_status_with_break<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, set_break: bool) {
    let v = cpu.compose_status_for_push(set_break);
    push(cpu, bus, v);
}

/// Pull P from the stack (PLP / RTI): UNUSED forced on, BREAK discarded.
pub(crate) fn pull_status<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let v = pop(cpu, bus);
    cpu.set_status((v | UNUSED) & !BREAK);
}

#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    push_status_with_break(cpu, bus, true);
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    pull_status(cpu, bus);
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let val = pop(cpu, bus);
    cpu.set_a(val);
    update_zn(cpu, val);
}

// ---------------------------------------------------------------------------
// Interrupt entry
// ---------------------------------------------------------------------------

/// Push PC (high, low) and P, set I, then load PC from `vector`.
///
/// `set_break` distinguishes BRK (B=1 in the pushed copy) from IRQ/NMI (B=0).
pub(crate) fn enter_interrupt<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, vector: u16, set_break: bool) {
    let pc = cpu.pc();
    push_word(cpu, bus, pc);
    push_status_with_break(cpu, bus, set_break);
    set_flag(cpu, IRQ_DISABLE, true);
    cpu.set_pc(bus.read_word(vector));
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.sp();
    ldx(cpu, v);
}

/// The only transfer that leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    cpu.set_sp(x);
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    set_flag(cpu, ZERO, (a & v) == 0);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// Shift / rotate cores (shared by accumulator and memory forms)
// ---------------------------------------------------------------------------

#[inline]
fn asl_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry((v & 0x80) != 0);
    let r = v << 1;
    update_zn(cpu, r);
    r
}

#[inline]
fn lsr_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    cpu.update_carry((v & 0x01) != 0);
    let r = v >> 1;
    update_zn(cpu, r);
    r
}

#[inline]
fn rol_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = u8::from(get_flag(cpu, CARRY));
    cpu.update_carry((v & 0x80) != 0);
    let r = (v << 1) | carry_in;
    update_zn(cpu, r);
    r
}

#[inline]
fn ror_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = if get_flag(cpu, CARRY) { 0x80 } else { 0 };
    cpu.update_carry((v & 0x01) != 0);
    let r = (v >> 1) | carry_in;
    update_zn(cpu, r);
    r
}

pub(crate) fn asl_acc<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    let r = asl_value(cpu, a);
    cpu.set_a(r);
}

pub(crate) fn lsr_acc<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    let r = lsr_value(cpu, a);
    cpu.set_a(r);
}

pub(crate) fn rol_acc<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    let r = rol_value(cpu, a);
    cpu.set_a(r);
}

pub(crate) fn ror_acc<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    let r = ror_value(cpu, a);
    cpu.set_a(r);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

/// A + v + C. Overflow when both inputs share a sign the result lacks.
#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = u16::from(get_flag(cpu, CARRY));
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    cpu.update_carry(sum16 > 0xFF);
    cpu.update_overflow(((!(a ^ v)) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

/// A - v - (1 - C), computed as A + !v + C.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn cmp_generic<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    update_zn(cpu, reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory)
// ---------------------------------------------------------------------------

/// Canonical 6502 RMW bus sequence: read, write the old value back, write
/// the new value. Returns the new value.
pub(crate) fn rmw_memory<C: CpuRegs, F>(cpu: &mut C, bus: &mut Bus, addr: u16, transform: F) -> u8
where
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = bus.read(addr);
    bus.write(addr, old);
    let newv = transform(cpu, old);
    bus.write(addr, newv);
    newv
}

pub(crate) fn asl_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    rmw_memory(cpu, bus, addr, asl_value)
}

pub(crate) fn lsr_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    rmw_memory(cpu, bus, addr, lsr_value)
}

pub(crate) fn rol_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    rmw_memory(cpu, bus, addr, rol_value)
}

pub(crate) fn ror_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    rmw_memory(cpu, bus, addr, ror_value)
}

pub(crate) fn inc_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    rmw_memory(cpu, bus, addr, |c, old| {
        let r = old.wrapping_add(1);
        update_zn(c, r);
        r
    })
}

pub(crate) fn dec_mem<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, addr: u16) -> u8 {
    rmw_memory(cpu, bus, addr, |c, old| {
        let r = old.wrapping_sub(1);
        update_zn(c, r);
        r
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

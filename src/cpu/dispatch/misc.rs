/*!
misc.rs - Transfers / Stack / Flag / NOP family handler

Overview
========
Small fixed-cycle instructions that move register values, manipulate the
stack, or set/clear individual status flags:

Transfers:
  TAX, TAY, TXA, TYA, TSX, TXS (TXS leaves the flags alone)

Register increment / decrement (wrap at 8 bits, update Z/N):
  INX, INY, DEX, DEY

Stack:
  PHA, PLA, PHP (pushes P with BREAK and UNUSED set), PLP (UNUSED forced
  on, BREAK dropped)

Flag operations:
  CLC/SEC, CLI/SEI, CLD/SED, CLV

NOP:
  Every NOP form, documented or not. The operand was already consumed
  during resolution (including the dummy read and page-cross penalty of
  the abs,X forms), so nothing remains to do here.

Return Contract
===============
handle(...) returns true when the mnemonic belongs to this family.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    _resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match mnemonic {
        // -------- Transfers --------
        Mnemonic::Tax => tax(cpu),
        Mnemonic::Tay => tay(cpu),
        Mnemonic::Txa => txa(cpu),
        Mnemonic::Tya => tya(cpu),
        Mnemonic::Tsx => tsx(cpu),
        Mnemonic::Txs => txs(cpu),

        // -------- Register inc / dec --------
        Mnemonic::Inx => inx(cpu),
        Mnemonic::Iny => iny(cpu),
        Mnemonic::Dex => dex(cpu),
        Mnemonic::Dey => dey(cpu),

        // -------- Stack --------
        Mnemonic::Pha => pha(cpu, bus),
        Mnemonic::Pla => pla(cpu, bus),
        Mnemonic::Php => php(cpu, bus),
        Mnemonic::Plp => plp(cpu, bus),

        // -------- Flags --------
        Mnemonic::Clc => set_flag(cpu, CARRY, false),
        Mnemonic::Sec => set_flag(cpu, CARRY, true),
        Mnemonic::Cli => set_flag(cpu, IRQ_DISABLE, false),
        Mnemonic::Sei => set_flag(cpu, IRQ_DISABLE, true),
        Mnemonic::Cld => set_flag(cpu, DECIMAL, false),
        Mnemonic::Sed => set_flag(cpu, DECIMAL, true),
        Mnemonic::Clv => set_flag(cpu, OVERFLOW, false),

        Mnemonic::Nop => {}
        _ => return false,
    }
    true
}

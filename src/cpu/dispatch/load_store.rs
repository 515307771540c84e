/*!
load_store.rs - Load / Store family handler

Overview
========
Loads (set Z/N flags; indexed read modes may pay a page-cross cycle):
    LDA, LDX, LDY

Stores (no flags changed, never pay a page-cross cycle):
    STA, STX, STY

Cycle Accounting
================
The page-cross penalty is already folded into *cycles by the dispatcher
from the descriptor's `page_cross` flag, so this handler never touches it.

Return Contract
===============
true if the mnemonic belongs to this family, false otherwise.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Operand, Resolved, load_operand};
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match mnemonic {
        Mnemonic::Lda => {
            let v = load_operand(cpu, bus, resolved.operand);
            lda(cpu, v);
        }
        Mnemonic::Ldx => {
            let v = load_operand(cpu, bus, resolved.operand);
            ldx(cpu, v);
        }
        Mnemonic::Ldy => {
            let v = load_operand(cpu, bus, resolved.operand);
            ldy(cpu, v);
        }
        Mnemonic::Sta => store(bus, resolved.operand, cpu.a()),
        Mnemonic::Stx => store(bus, resolved.operand, cpu.x()),
        Mnemonic::Sty => store(bus, resolved.operand, cpu.y()),
        _ => return false,
    }
    true
}

/// Write `v` to the resolved address. Non-address operands cannot occur for
/// store opcodes; they are ignored.
#[inline]
pub(super) fn store(bus: &mut Bus, operand: Operand, v: u8) {
    if let Operand::Address(addr) = operand {
        bus.write(addr, v);
    }
}

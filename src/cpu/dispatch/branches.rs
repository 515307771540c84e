/*!
branches.rs - Relative branch handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Overview
========
The operand was resolved in `Relative` mode, so it already holds the branch
target and whether that target sits on another page than the instruction
after the branch. This handler evaluates the condition, moves PC when taken
and adds the branch cycles:

  not taken               : +0
  taken, same page        : +1
  taken, page crossed     : +2
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::cycles::branch_extra;
use crate::cpu::execute::get_flag;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    _bus: &mut Bus,
    cycles: &mut u32,
) -> bool {
    let take = match mnemonic {
        Mnemonic::Bpl => !get_flag(cpu, NEGATIVE),
        Mnemonic::Bmi => get_flag(cpu, NEGATIVE),
        Mnemonic::Bvc => !get_flag(cpu, OVERFLOW),
        Mnemonic::Bvs => get_flag(cpu, OVERFLOW),
        Mnemonic::Bcc => !get_flag(cpu, CARRY),
        Mnemonic::Bcs => get_flag(cpu, CARRY),
        Mnemonic::Bne => !get_flag(cpu, ZERO),
        Mnemonic::Beq => get_flag(cpu, ZERO),
        _ => return false,
    };
    if take {
        if let Some(target) = resolved.address() {
            cpu.set_pc(target);
        }
    }
    *cycles += branch_extra(take, resolved.page_crossed);
    true
}

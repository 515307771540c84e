/*!
control_flow.rs - Control-flow / system family handler

Overview
========
  JMP abs / JMP (ind)   PC = resolved address (indirect page-wrap quirk is
                        applied during resolution)
  JSR abs               push (PC - 1), PC = target
  RTS                   pull PC, PC += 1
  RTI                   pull P (UNUSED on, BREAK dropped), then pull PC
  BRK                   skip the padding byte, push PC + 2 and P with
                        BREAK set, set I, PC = ($FFFE)

Execution never halts on BRK; the program continues at the IRQ/BRK vector.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::core::IRQ_VECTOR;
use crate::cpu::execute::{enter_interrupt, pop_word, pull_status, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

#[inline]
fn op_jsr<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, target: u16) {
    // PC already points past the operand; push the address of its last byte.
    let ret = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, ret);
    cpu.set_pc(target);
}

#[inline]
fn op_rts<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    let ret = pop_word(cpu, bus);
    cpu.set_pc(ret.wrapping_add(1));
}

#[inline]
fn op_rti<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    pull_status(cpu, bus);
    let return_pc = pop_word(cpu, bus);
    cpu.set_pc(return_pc);
}

#[inline]
fn op_brk<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) {
    cpu.advance_pc_one();
    enter_interrupt(cpu, bus, IRQ_VECTOR, true);
}

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match mnemonic {
        Mnemonic::Jmp => {
            if let Some(target) = resolved.address() {
                cpu.set_pc(target);
            }
        }
        Mnemonic::Jsr => {
            if let Some(target) = resolved.address() {
                op_jsr(cpu, bus, target);
            }
        }
        Mnemonic::Rts => op_rts(cpu, bus),
        Mnemonic::Rti => op_rti(cpu, bus),
        Mnemonic::Brk => op_brk(cpu, bus),
        _ => return false,
    }
    true
}

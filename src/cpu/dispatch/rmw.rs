/*!
rmw.rs - Shift / rotate / INC / DEC family handler

Overview
========
ASL, LSR, ROL, ROR operate on A in `Accumulator` mode and on memory
otherwise. INC and DEC are memory-only. Memory forms go through the
read -> write old -> write new sequence in `execute::rmw_memory`.

Indexed RMW forms (abs,X) have a fixed cost; their descriptors are not
page-cross sensitive, so no penalty ever reaches *cycles.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Operand, Resolved};
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, inc_mem, lsr_acc, lsr_mem, rol_acc, rol_mem, ror_acc, ror_mem,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match (mnemonic, resolved.operand) {
        (Mnemonic::Asl, Operand::Address(addr)) => {
            asl_mem(cpu, bus, addr);
        }
        (Mnemonic::Asl, _) => asl_acc(cpu),
        (Mnemonic::Lsr, Operand::Address(addr)) => {
            lsr_mem(cpu, bus, addr);
        }
        (Mnemonic::Lsr, _) => lsr_acc(cpu),
        (Mnemonic::Rol, Operand::Address(addr)) => {
            rol_mem(cpu, bus, addr);
        }
        (Mnemonic::Rol, _) => rol_acc(cpu),
        (Mnemonic::Ror, Operand::Address(addr)) => {
            ror_mem(cpu, bus, addr);
        }
        (Mnemonic::Ror, _) => ror_acc(cpu),
        (Mnemonic::Inc, Operand::Address(addr)) => {
            inc_mem(cpu, bus, addr);
        }
        (Mnemonic::Dec, Operand::Address(addr)) => {
            dec_mem(cpu, bus, addr);
        }
        // INC/DEC only exist with memory operands.
        (Mnemonic::Inc | Mnemonic::Dec, _) => {}
        _ => return false,
    }
    true
}

/*!
compare.rs - Compare family handler (CMP / CPX / CPY)

Reads the operand and compares it against A, X or Y through the shared
`cmp_generic` helper: C = reg >= M, Z/N from reg - M.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, load_operand};
use crate::cpu::execute::cmp_generic;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    let reg = match mnemonic {
        Mnemonic::Cmp => cpu.a(),
        Mnemonic::Cpx => cpu.x(),
        Mnemonic::Cpy => cpu.y(),
        _ => return false,
    };
    let v = load_operand(cpu, bus, resolved.operand);
    cmp_generic(cpu, reg, v);
    true
}

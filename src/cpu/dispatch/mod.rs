/*!
dispatch - Fetch / decode / resolve / execute for a single 6502 instruction.

Overview
========
`step` performs exactly one instruction:
1. Fetch the opcode at PC (PC += 1).
2. Decode it through the static table (`cpu::table`).
3. Resolve the operand for the descriptor's addressing mode (may advance PC
   by 0..=2 further bytes and report a page crossing).
4. Seed the cycle count with base cycles plus the indexed page-cross penalty.
5. Run the family handler chain keyed on the mnemonic. The first handler
   that recognizes the mnemonic executes it and may add dynamic cycles
   (branches).

Family Handlers
===============
load_store, logical, arithmetic, compare, branches, rmw, control_flow,
misc (transfers / stack / flags / NOP) and illegal (stable undocumented
combos). Every handler has the same shape:

```text
    fn handle<C: CpuRegs>(Mnemonic, &Resolved, &mut C, &mut Bus, &mut u32) -> bool
```

Undefined Opcodes
=================
`Mnemonic::Undefined` falls through the whole chain. It costs the table's
fixed two cycles and changes nothing except PC. The clock loop never halts.
*/

use log::debug;

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, fetch_byte, resolve};
use crate::cpu::cycles::base_cycles;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{Instruction, Mnemonic, decode};

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod illegal;
mod load_store;
mod logical;
mod misc;
mod rmw;

/// What one `step` executed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(not(feature = "trace"), allow(dead_code))]
pub(crate) struct Executed {
    pub opcode: u8,
    pub instruction: &'static Instruction,
    pub cycles: u32,
}

/// Execute one instruction at PC and report its total cycle cost.
pub(crate) fn step<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Executed {
    let pc = cpu.pc();
    let opcode = fetch_byte(cpu, bus);
    let ins = decode(opcode);
    let resolved = resolve(ins.mode, cpu, bus);
    let mut cycles = base_cycles(ins, resolved.page_crossed);

    if !run_family(ins.mnemonic, &resolved, cpu, bus, &mut cycles) {
        debug!("undefined opcode ${opcode:02X} at ${pc:04X}, treated as {cycles}-cycle no-op");
    }

    Executed {
        opcode,
        instruction: ins,
        cycles,
    }
}

/// Offer the instruction to each family in turn. False only for
/// `Mnemonic::Undefined`.
fn run_family<C: CpuRegs>(
    m: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    cycles: &mut u32,
) -> bool {
    load_store::handle(m, resolved, cpu, bus, cycles)
        || logical::handle(m, resolved, cpu, bus, cycles)
        || arithmetic::handle(m, resolved, cpu, bus, cycles)
        || compare::handle(m, resolved, cpu, bus, cycles)
        || branches::handle(m, resolved, cpu, bus, cycles)
        || rmw::handle(m, resolved, cpu, bus, cycles)
        || control_flow::handle(m, resolved, cpu, bus, cycles)
        || misc::handle(m, resolved, cpu, bus, cycles)
        || illegal::handle(m, resolved, cpu, bus, cycles)
}

/*!
illegal.rs - Stable undocumented opcode combinations

Overview
========
The 2A03 decodes several opcode slots into two documented operations fused
together. Only the stable ones are executed; the unstable slots
(ANC, ALR, ARR, AXS, SHY, ...) decode to `Mnemonic::Undefined` and never
reach this handler.

  SLO  ASL mem, then ORA result
  RLA  ROL mem, then AND result
  SRE  LSR mem, then EOR result
  RRA  ROR mem, then ADC result
  SAX  store A & X (no flags)
  LAX  load A and X with the same value
  DCP  DEC mem, then CMP A against result
  ISC  INC mem, then SBC result

The read-modify-write combos never pay an indexed page-cross penalty; their
table cost is already the fixed worst case.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Operand, Resolved, load_operand};
use crate::cpu::execute::{
    adc, and, asl_mem, cmp_generic, dec_mem, eor, inc_mem, lda, ldx, lsr_mem, ora, rol_mem,
    ror_mem, sbc,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

use super::load_store::store;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    match mnemonic {
        Mnemonic::Lax => {
            let v = load_operand(cpu, bus, resolved.operand);
            lda(cpu, v);
            ldx(cpu, v);
            return true;
        }
        Mnemonic::Sax => {
            let v = cpu.a() & cpu.x();
            store(bus, resolved.operand, v);
            return true;
        }
        Mnemonic::Slo
        | Mnemonic::Rla
        | Mnemonic::Sre
        | Mnemonic::Rra
        | Mnemonic::Dcp
        | Mnemonic::Isc => {}
        _ => return false,
    }

    // Every remaining combo is memory-only.
    let Operand::Address(addr) = resolved.operand else {
        return true;
    };
    match mnemonic {
        Mnemonic::Slo => {
            let r = asl_mem(cpu, bus, addr);
            ora(cpu, r);
        }
        Mnemonic::Rla => {
            let r = rol_mem(cpu, bus, addr);
            and(cpu, r);
        }
        Mnemonic::Sre => {
            let r = lsr_mem(cpu, bus, addr);
            eor(cpu, r);
        }
        Mnemonic::Rra => {
            let r = ror_mem(cpu, bus, addr);
            adc(cpu, r);
        }
        Mnemonic::Dcp => {
            let r = dec_mem(cpu, bus, addr);
            let a = cpu.a();
            cmp_generic(cpu, a, r);
        }
        Mnemonic::Isc => {
            let r = inc_mem(cpu, bus, addr);
            sbc(cpu, r);
        }
        _ => {}
    }
    true
}

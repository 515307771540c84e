/*!
logical.rs - Logical and bit-test family handler

Overview
========
AND, ORA, EOR update A and Z/N.
BIT sets Z from A & M, and copies M bits 7/6 into N/V.

Return Contract
===============
true  => mnemonic recognized, effects applied
false => not a member of this family
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, load_operand};
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(
    mnemonic: Mnemonic,
    resolved: &Resolved,
    cpu: &mut C,
    bus: &mut Bus,
    _cycles: &mut u32,
) -> bool {
    let op: fn(&mut C, u8) = match mnemonic {
        Mnemonic::And => and,
        Mnemonic::Ora => ora,
        Mnemonic::Eor => eor,
        Mnemonic::Bit => bit,
        _ => return false,
    };
    let v = load_operand(cpu, bus, resolved.operand);
    op(cpu, v);
    true
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cartridge::Cartridge;
    use crate::cpu::core::Cpu;
    use crate::cpu::state::{NEGATIVE, OVERFLOW, ZERO};
    use crate::test_utils::build_nrom_with_prg;

    fn setup(prg: &[u8]) -> (Cpu, Bus) {
        let rom = build_nrom_with_prg(prg, 1, 1, None);
        let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
        let mut bus = Bus::new();
        bus.attach_cartridge(cart);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        (cpu, bus)
    }

    #[test]
    fn and_ora_eor_immediate() {
        // LDA #$F0 ; AND #$3C ; ORA #$01 ; EOR #$31
        let (mut cpu, mut bus) = setup(&[0xA9, 0xF0, 0x29, 0x3C, 0x09, 0x01, 0x49, 0x31]);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x30);
        cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x31);
        cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.get_flag(ZERO));
    }

    #[test]
    fn bit_zero_page_copies_high_bits() {
        // LDA #$01 ; BIT $10
        let (mut cpu, mut bus) = setup(&[0xA9, 0x01, 0x24, 0x10]);
        bus.write(0x0010, 0xC0);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 3);
        assert!(cpu.get_flag(ZERO));
        assert!(cpu.get_flag(NEGATIVE));
        assert!(cpu.get_flag(OVERFLOW));
        assert_eq!(cpu.a(), 0x01);
    }

    #[test]
    fn ora_abs_y_page_cross() {
        // LDY #$FF ; ORA $0201,Y -> $0300
        let (mut cpu, mut bus) = setup(&[0xA0, 0xFF, 0x19, 0x01, 0x02]);
        bus.write(0x0300, 0x0F);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 5);
        assert_eq!(cpu.a(), 0x0F);
    }
}

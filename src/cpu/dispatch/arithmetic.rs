/*!
arithmetic.rs - ADC / SBC family handler

Overview
========
Binary add / subtract with carry. `$EB` decodes to SBC as well and runs the
same path. Decimal mode is not honored (NES 2A03 has no BCD unit).

Return Contract
===============
`handle` returns true if the mnemonic was recognized and executed, false
otherwise so the dispatcher can continue down the chain.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, load_operand};
use crate::cpu::execute::{adc, sbc};
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
        Mnemonic::Adc => {
            let v = load_operand(cpu, bus, resolved.operand);
            adc(cpu, v);
        }
        Mnemonic::Sbc => {
            let v = load_operand(cpu, bus, resolved.operand);
            sbc(cpu, v);
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cartridge::Cartridge;
    use crate::cpu::core::Cpu;
    use crate::cpu::state::{CARRY, DECIMAL, OVERFLOW};
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
    fn adc_immediate_overflow() {
        // LDA #$50 ; ADC #$50
        let (mut cpu, mut bus) = setup(&[0xA9, 0x50, 0x69, 0x50]);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.a(), 0xA0);
        assert!(cpu.get_flag(OVERFLOW));
        assert!(!cpu.get_flag(CARRY));
    }

    #[test]
    fn sbc_with_borrow() {
        // SEC ; LDA #$10 ; SBC #$01 ; CLC ; SBC #$01
        let (mut cpu, mut bus) = setup(&[0x38, 0xA9, 0x10, 0xE9, 0x01, 0x18, 0xE9, 0x01]);
        for _ in 0..3 {
            cpu.step(&mut bus);
        }
        assert_eq!(cpu.a(), 0x0F);
        assert!(cpu.get_flag(CARRY));
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(cpu.a(), 0x0D);
    }

    #[test]
    fn unofficial_sbc_alias_matches() {
        // SEC ; LDA #$05 ; .byte $EB,$03
        let (mut cpu, mut bus) = setup(&[0x38, 0xA9, 0x05, 0xEB, 0x03]);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.a(), 0x02);
    }

    #[test]
    fn decimal_flag_is_ignored() {
        // SED ; LDA #$09 ; ADC #$01
        let (mut cpu, mut bus) = setup(&[0xF8, 0xA9, 0x09, 0x69, 0x01]);
        for _ in 0..3 {
            cpu.step(&mut bus);
        }
        assert!(cpu.get_flag(DECIMAL));
        assert_eq!(cpu.a(), 0x0A);
    }
}

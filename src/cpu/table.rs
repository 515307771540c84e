/*!
table.rs - Static 256-entry opcode descriptor table.

Purpose
=======
Maps every opcode byte to its static metadata: mnemonic, addressing mode,
instruction length, base cycle count and whether an indexed page crossing
costs one extra cycle. The dispatcher decodes through this table and then
switches on the mnemonic, so the legal/illegal matrix can be audited here
against a hardware reference without reading any execution code.

Coverage
========
- All 151 documented opcodes.
- The stable undocumented read-modify-write combos (SLO, RLA, SRE, RRA,
  DCP, ISC), SAX and LAX, the multi-byte NOP variants and the SBC alias $EB.
- Everything else (JAM/KIL and the unstable combos) decodes to
  `Mnemonic::Undefined`: implicit, one byte, two cycles, no effect.

Branch penalties are not encoded here (they depend on runtime flags); see
`cycles.rs`.
*/

use std::fmt;

use crate::cpu::addressing::AddressingMode;
use crate::cpu::addressing::AddressingMode::*;

/// Instruction mnemonics understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Documented
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented, stable
    Slo,
    Rla,
    Sre,
    Rra,
    Sax,
    Lax,
    Dcp,
    Isc,
    /// Opcode with no emulated behavior.
    Undefined,
}

impl Mnemonic {
    /// Three-letter assembler name (`"???"` for undefined opcodes).
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Slo => "SLO",
            Rla => "RLA",
            Sre => "SRE",
            Rra => "RRA",
            Sax => "SAX",
            Lax => "LAX",
            Dcp => "DCP",
            Isc => "ISC",
            Undefined => "???",
        }
    }

    /// Conditional relative branches.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static metadata for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Total length including the opcode byte.
    pub bytes: u8,
    /// Cycles before page-cross and branch adjustments.
    pub cycles: u8,
    /// +1 cycle when the indexed address crosses a page.
    pub page_cross: bool,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        bytes: 1 + mode.operand_bytes(),
        cycles,
        page_cross: false,
    }
}

// Page-cross sensitive variant.
const fn opx(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Instruction {
    Instruction {
        page_cross: true,
        ..op(mnemonic, mode, cycles)
    }
}

// BRK is followed by a padding byte that the CPU skips.
const BRK: Instruction = Instruction {
    bytes: 2,
    ..op(Mnemonic::Brk, Implicit, 7)
};

const UND: Instruction = op(Mnemonic::Undefined, Implicit, 2);

/// Opcode byte -> descriptor. Built at compile time.
pub static INSTRUCTIONS: [Instruction; 256] = {
    use Mnemonic::*;
    [
        // 0x00
        BRK,
        op(Ora, IndexedIndirect, 6),
        UND,
        op(Slo, IndexedIndirect, 8),
        op(Nop, ZeroPage, 3),
        op(Ora, ZeroPage, 3),
        op(Asl, ZeroPage, 5),
        op(Slo, ZeroPage, 5),
        op(Php, Implicit, 3),
        op(Ora, Immediate, 2),
        op(Asl, Accumulator, 2),
        UND,
        op(Nop, Absolute, 4),
        op(Ora, Absolute, 4),
        op(Asl, Absolute, 6),
        op(Slo, Absolute, 6),
        // 0x10
        op(Bpl, Relative, 2),
        opx(Ora, IndirectIndexed, 5),
        UND,
        op(Slo, IndirectIndexed, 8),
        op(Nop, ZeroPageX, 4),
        op(Ora, ZeroPageX, 4),
        op(Asl, ZeroPageX, 6),
        op(Slo, ZeroPageX, 6),
        op(Clc, Implicit, 2),
        opx(Ora, AbsoluteY, 4),
        op(Nop, Implicit, 2),
        op(Slo, AbsoluteY, 7),
        opx(Nop, AbsoluteX, 4),
        opx(Ora, AbsoluteX, 4),
        op(Asl, AbsoluteX, 7),
        op(Slo, AbsoluteX, 7),
        // 0x20
        op(Jsr, Absolute, 6),
        op(And, IndexedIndirect, 6),
        UND,
        op(Rla, IndexedIndirect, 8),
        op(Bit, ZeroPage, 3),
        op(And, ZeroPage, 3),
        op(Rol, ZeroPage, 5),
        op(Rla, ZeroPage, 5),
        op(Plp, Implicit, 4),
        op(And, Immediate, 2),
        op(Rol, Accumulator, 2),
        UND,
        op(Bit, Absolute, 4),
        op(And, Absolute, 4),
        op(Rol, Absolute, 6),
        op(Rla, Absolute, 6),
        // 0x30
        op(Bmi, Relative, 2),
        opx(And, IndirectIndexed, 5),
        UND,
        op(Rla, IndirectIndexed, 8),
        op(Nop, ZeroPageX, 4),
        op(And, ZeroPageX, 4),
        op(Rol, ZeroPageX, 6),
        op(Rla, ZeroPageX, 6),
        op(Sec, Implicit, 2),
        opx(And, AbsoluteY, 4),
        op(Nop, Implicit, 2),
        op(Rla, AbsoluteY, 7),
        opx(Nop, AbsoluteX, 4),
        opx(And, AbsoluteX, 4),
        op(Rol, AbsoluteX, 7),
        op(Rla, AbsoluteX, 7),
        // 0x40
        op(Rti, Implicit, 6),
        op(Eor, IndexedIndirect, 6),
        UND,
        op(Sre, IndexedIndirect, 8),
        op(Nop, ZeroPage, 3),
        op(Eor, ZeroPage, 3),
        op(Lsr, ZeroPage, 5),
        op(Sre, ZeroPage, 5),
        op(Pha, Implicit, 3),
        op(Eor, Immediate, 2),
        op(Lsr, Accumulator, 2),
        UND,
        op(Jmp, Absolute, 3),
        op(Eor, Absolute, 4),
        op(Lsr, Absolute, 6),
        op(Sre, Absolute, 6),
        // 0x50
        op(Bvc, Relative, 2),
        opx(Eor, IndirectIndexed, 5),
        UND,
        op(Sre, IndirectIndexed, 8),
        op(Nop, ZeroPageX, 4),
        op(Eor, ZeroPageX, 4),
        op(Lsr, ZeroPageX, 6),
        op(Sre, ZeroPageX, 6),
        op(Cli, Implicit, 2),
        opx(Eor, AbsoluteY, 4),
        op(Nop, Implicit, 2),
        op(Sre, AbsoluteY, 7),
        opx(Nop, AbsoluteX, 4),
        opx(Eor, AbsoluteX, 4),
        op(Lsr, AbsoluteX, 7),
        op(Sre, AbsoluteX, 7),
        // 0x60
        op(Rts, Implicit, 6),
        op(Adc, IndexedIndirect, 6),
        UND,
        op(Rra, IndexedIndirect, 8),
        op(Nop, ZeroPage, 3),
        op(Adc, ZeroPage, 3),
        op(Ror, ZeroPage, 5),
        op(Rra, ZeroPage, 5),
        op(Pla, Implicit, 4),
        op(Adc, Immediate, 2),
        op(Ror, Accumulator, 2),
        UND,
        op(Jmp, Indirect, 5),
        op(Adc, Absolute, 4),
        op(Ror, Absolute, 6),
        op(Rra, Absolute, 6),
        // 0x70
        op(Bvs, Relative, 2),
        opx(Adc, IndirectIndexed, 5),
        UND,
        op(Rra, IndirectIndexed, 8),
        op(Nop, ZeroPageX, 4),
        op(Adc, ZeroPageX, 4),
        op(Ror, ZeroPageX, 6),
        op(Rra, ZeroPageX, 6),
        op(Sei, Implicit, 2),
        opx(Adc, AbsoluteY, 4),
        op(Nop, Implicit, 2),
        op(Rra, AbsoluteY, 7),
        opx(Nop, AbsoluteX, 4),
        opx(Adc, AbsoluteX, 4),
        op(Ror, AbsoluteX, 7),
        op(Rra, AbsoluteX, 7),
        // 0x80
        op(Nop, Immediate, 2),
        op(Sta, IndexedIndirect, 6),
        op(Nop, Immediate, 2),
        op(Sax, IndexedIndirect, 6),
        op(Sty, ZeroPage, 3),
        op(Sta, ZeroPage, 3),
        op(Stx, ZeroPage, 3),
        op(Sax, ZeroPage, 3),
        op(Dey, Implicit, 2),
        op(Nop, Immediate, 2),
        op(Txa, Implicit, 2),
        UND,
        op(Sty, Absolute, 4),
        op(Sta, Absolute, 4),
        op(Stx, Absolute, 4),
        op(Sax, Absolute, 4),
        // 0x90
        op(Bcc, Relative, 2),
        op(Sta, IndirectIndexed, 6),
        UND,
        UND,
        op(Sty, ZeroPageX, 4),
        op(Sta, ZeroPageX, 4),
        op(Stx, ZeroPageY, 4),
        op(Sax, ZeroPageY, 4),
        op(Tya, Implicit, 2),
        op(Sta, AbsoluteY, 5),
        op(Txs, Implicit, 2),
        UND,
        UND,
        op(Sta, AbsoluteX, 5),
        UND,
        UND,
        // 0xA0
        op(Ldy, Immediate, 2),
        op(Lda, IndexedIndirect, 6),
        op(Ldx, Immediate, 2),
        op(Lax, IndexedIndirect, 6),
        op(Ldy, ZeroPage, 3),
        op(Lda, ZeroPage, 3),
        op(Ldx, ZeroPage, 3),
        op(Lax, ZeroPage, 3),
        op(Tay, Implicit, 2),
        op(Lda, Immediate, 2),
        op(Tax, Implicit, 2),
        UND,
        op(Ldy, Absolute, 4),
        op(Lda, Absolute, 4),
        op(Ldx, Absolute, 4),
        op(Lax, Absolute, 4),
        // 0xB0
        op(Bcs, Relative, 2),
        opx(Lda, IndirectIndexed, 5),
        UND,
        opx(Lax, IndirectIndexed, 5),
        op(Ldy, ZeroPageX, 4),
        op(Lda, ZeroPageX, 4),
        op(Ldx, ZeroPageY, 4),
        op(Lax, ZeroPageY, 4),
        op(Clv, Implicit, 2),
        opx(Lda, AbsoluteY, 4),
        op(Tsx, Implicit, 2),
        UND,
        opx(Ldy, AbsoluteX, 4),
        opx(Lda, AbsoluteX, 4),
        opx(Ldx, AbsoluteY, 4),
        opx(Lax, AbsoluteY, 4),
        // 0xC0
        op(Cpy, Immediate, 2),
        op(Cmp, IndexedIndirect, 6),
        op(Nop, Immediate, 2),
        op(Dcp, IndexedIndirect, 8),
        op(Cpy, ZeroPage, 3),
        op(Cmp, ZeroPage, 3),
        op(Dec, ZeroPage, 5),
        op(Dcp, ZeroPage, 5),
        op(Iny, Implicit, 2),
        op(Cmp, Immediate, 2),
        op(Dex, Implicit, 2),
        UND,
        op(Cpy, Absolute, 4),
        op(Cmp, Absolute, 4),
        op(Dec, Absolute, 6),
        op(Dcp, Absolute, 6),
        // 0xD0
        op(Bne, Relative, 2),
        opx(Cmp, IndirectIndexed, 5),
        UND,
        op(Dcp, IndirectIndexed, 8),
        op(Nop, ZeroPageX, 4),
        op(Cmp, ZeroPageX, 4),
        op(Dec, ZeroPageX, 6),
        op(Dcp, ZeroPageX, 6),
        op(Cld, Implicit, 2),
        opx(Cmp, AbsoluteY, 4),
        op(Nop, Implicit, 2),
        op(Dcp, AbsoluteY, 7),
        opx(Nop, AbsoluteX, 4),
        opx(Cmp, AbsoluteX, 4),
        op(Dec, AbsoluteX, 7),
        op(Dcp, AbsoluteX, 7),
        // 0xE0
        op(Cpx, Immediate, 2),
        op(Sbc, IndexedIndirect, 6),
        op(Nop, Immediate, 2),
        op(Isc, IndexedIndirect, 8),
        op(Cpx, ZeroPage, 3),
        op(Sbc, ZeroPage, 3),
        op(Inc, ZeroPage, 5),
        op(Isc, ZeroPage, 5),
        op(Inx, Implicit, 2),
        op(Sbc, Immediate, 2),
        op(Nop, Implicit, 2),
        op(Sbc, Immediate, 2),
        op(Cpx, Absolute, 4),
        op(Sbc, Absolute, 4),
        op(Inc, Absolute, 6),
        op(Isc, Absolute, 6),
        // 0xF0
        op(Beq, Relative, 2),
        opx(Sbc, IndirectIndexed, 5),
        UND,
        op(Isc, IndirectIndexed, 8),
        op(Nop, ZeroPageX, 4),
        op(Sbc, ZeroPageX, 4),
        op(Inc, ZeroPageX, 6),
        op(Isc, ZeroPageX, 6),
        op(Sed, Implicit, 2),
        opx(Sbc, AbsoluteY, 4),
        op(Nop, Implicit, 2),
        op(Isc, AbsoluteY, 7),
        opx(Nop, AbsoluteX, 4),
        opx(Sbc, AbsoluteX, 4),
        op(Inc, AbsoluteX, 7),
        op(Isc, AbsoluteX, 7),
    ]
};

/// Look up the descriptor for `opcode`.
#[inline]
pub fn decode(opcode: u8) -> &'static Instruction {
    &INSTRUCTIONS[opcode as usize]
}

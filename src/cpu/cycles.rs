/*!
cycles.rs - Cycle accounting for one executed instruction.

Purpose
=======
total = base + page_cross_extra + branch_extra

  - `base`              : `Instruction::cycles` from the opcode table.
  - `page_cross_extra`  : 1 iff the descriptor is page-cross sensitive and
                          the resolved operand crossed a page.
  - `branch_extra`      : relative branches only. 0 when not taken, 1 when
                          taken, 2 when taken and the target lies on a
                          different page than the instruction after the
                          branch.

The dispatcher seeds its running count with `base_cycles` and family
handlers add the dynamic part (only `branches` does today).
*/

use crate::cpu::table::Instruction;

/// Base cycles plus the indexed page-cross penalty, if this opcode pays it.
#[inline]
pub(crate) fn base_cycles(ins: &Instruction, page_crossed: bool) -> u32 {
    ins.cycles as u32 + page_cross_extra(ins, page_crossed)
}

#[inline]
pub(crate) fn page_cross_extra(ins: &Instruction, page_crossed: bool) -> u32 {
    u32::from(ins.page_cross && page_crossed)
}

/// Extra cycles for a conditional branch.
#[inline]
pub(crate) fn branch_extra(taken: bool, target_page_differs: bool) -> u32 {
    match (taken, target_page_differs) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::table::decode;

    #[test]
    fn page_cross_only_where_flagged() {
        // LDA abs,X
        assert_eq!(base_cycles(decode(0xBD), false), 4);
        assert_eq!(base_cycles(decode(0xBD), true), 5);
        // STA abs,X never pays
        assert_eq!(base_cycles(decode(0x9D), true), 5);
        // LDA (zp),Y
        assert_eq!(base_cycles(decode(0xB1), true), 6);
        // ASL abs,X fixed 7
        assert_eq!(base_cycles(decode(0x1E), true), 7);
    }

    #[test]
    fn branch_penalties() {
        assert_eq!(branch_extra(false, false), 0);
        assert_eq!(branch_extra(false, true), 0);
        assert_eq!(branch_extra(true, false), 1);
        assert_eq!(branch_extra(true, true), 2);
    }
}

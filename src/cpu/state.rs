/*!
state.rs - 6502 architectural state (registers + flags) and small helpers.

Overview
========
`CpuState` owns the six programmer-visible registers. It intentionally excludes:
  - Bus / memory logic
  - Instruction decode / dispatch logic
  - Cycle accounting (owned by the `Cpu` engine in `cpu::core`)

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V U B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  U = UNUSED (forced to 1 whenever P is pushed or pulled)
  B = BREAK (only meaningful in pushed copies: BRK/PHP push 1, IRQ/NMI push 0)
  D = DECIMAL (toggled by CLD/SED; the NES ALU ignores it)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

The stored `status` byte is raw: after reset it is exactly 0x00. The UNUSED
bit is applied by `compose_status_for_push` and by the pull helpers.
*/

use crate::bus::Bus;
use crate::cpu::core::RESET_VECTOR;

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000; // Not used by NES hardware, still part of 6502.
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Base address of the fixed 256-byte stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value established by reset.
pub const RESET_SP: u8 = 0xFD;

/// Register file of the 6502.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    /// All registers zeroed (power-on register file before the first reset).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-initialize registers and load PC from the reset vector at $FFFC/$FFFD.
    ///
    /// A = X = Y = 0, P = 0x00, SP = 0xFD.
    pub fn reset(&mut self, bus: &mut Bus) {
        *self = Self {
            sp: RESET_SP,
            ..Self::default()
        };
        self.pc = bus.read_word(RESET_VECTOR);
    }

    // ---------------------------------------------------------------------
    // Basic Accessors (Read)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }

    // ---------------------------------------------------------------------
    // Mutators (Write)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v;
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// True when the `mask` bit is present in P: `(P & mask) != 0`.
    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    /// OR `mask` into P when `value`, AND its complement out otherwise.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    /// Compose the status byte for a stack push.
    ///
    /// - Bit 5 (UNUSED) always forced to 1.
    /// - BREAK included only if `set_break` (BRK/PHP), cleared for IRQ/NMI.
    pub fn compose_status_for_push(&self, set_break: bool) -> u8 {
        let v = self.status | UNUSED;
        if set_break { v | BREAK } else { v & !BREAK }
    }
}

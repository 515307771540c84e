/*!
core::Cpu - Cycle-driven 6502 engine wrapping `CpuState`.

Overview
========
`Cpu` owns the register file plus three counters:

- `remaining_cycles`: cycles still owed by the instruction (or interrupt
  sequence) in flight. Zero means idle, ready to fetch.
- `stall_cycles`: external stall ticks (DMA-style), consumed before anything
  else and not counted as elapsed CPU cycles.
- `total_cycles`: elapsed-cycle counter since the last reset.

Clocking
========
The host calls `clock` once per CPU cycle:

1. Pending stall: decrement and return.
2. Idle: execute one whole instruction through `dispatch::step` and owe its
   cost minus the current tick.
3. Otherwise pay one owed cycle.
4. Count the tick.

Instruction effects become visible on the first tick of the instruction;
the following ticks only burn time. `step` is a convenience for hosts that
advance by whole instructions.

Interrupts
==========
`irq` / `nmi` act between instructions. They push PC and P (B clear,
U set), set I, load the vector and add 7 owed cycles. `irq` is ignored
while I is set. `reset` owes 7 cycles before the first fetch.

Tracing
=======
With the `trace` feature every executed instruction emits one `trace!`
record with the pre-execution register file and elapsed cycle count.
*/

use log::debug;
#[cfg(feature = "trace")]
use log::trace;

use crate::bus::Bus;
use crate::cpu::dispatch;
use crate::cpu::execute::enter_interrupt;
use crate::cpu::state::{CpuState, IRQ_DISABLE};

/// NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// RESET vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ / BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles owed after reset and after IRQ / NMI entry.
const INTERRUPT_CYCLES: u32 = 7;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    remaining_cycles: u32,
    stall_cycles: u32,
    total_cycles: u64,
}

impl Cpu {
    /// Construct a CPU with a zeroed register file. Call `reset` before clocking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Re-initialize registers, load PC from the reset vector and owe 7 cycles.
    pub fn reset(&mut self, bus: &mut Bus) {
        self.state.reset(bus);
        self.remaining_cycles = INTERRUPT_CYCLES;
        self.stall_cycles = 0;
        self.total_cycles = 0;
        debug!("cpu reset: PC=${:04X}", self.state.pc);
    }

    /// Advance the CPU by one cycle.
    pub fn clock(&mut self, bus: &mut Bus) {
        if self.stall_cycles > 0 {
            self.stall_cycles -= 1;
            return;
        }

        if self.remaining_cycles == 0 {
            let cycles = self.execute_instruction(bus);
            self.remaining_cycles = cycles.saturating_sub(1);
        } else {
            self.remaining_cycles -= 1;
        }

        self.total_cycles += 1;
    }

    /// Run one whole instruction and return its cycle cost.
    ///
    /// Cycles still owed by a previous instruction, reset or interrupt entry,
    /// and any pending stall, are paid off first and are not part of the
    /// returned count.
    pub fn step(&mut self, bus: &mut Bus) -> u32 {
        while !self.is_idle() || self.stall_cycles > 0 {
            self.clock(bus);
        }
        self.clock(bus);
        let cycles = self.remaining_cycles + 1;
        while self.remaining_cycles > 0 {
            self.clock(bus);
        }
        cycles
    }

    /// Maskable interrupt request. Ignored while InterruptDisable is set.
    pub fn irq(&mut self, bus: &mut Bus) {
        if self.state.is_flag_set(IRQ_DISABLE) {
            return;
        }
        debug!("irq: PC=${:04X}", self.state.pc);
        enter_interrupt(&mut self.state, bus, IRQ_VECTOR, false);
        self.remaining_cycles += INTERRUPT_CYCLES;
    }

    /// Non-maskable interrupt. Always taken.
    pub fn nmi(&mut self, bus: &mut Bus) {
        debug!("nmi: PC=${:04X}", self.state.pc);
        enter_interrupt(&mut self.state, bus, NMI_VECTOR, false);
        self.remaining_cycles += INTERRUPT_CYCLES;
    }

    /// Queue `cycles` external stall ticks (e.g. a DMA transfer).
    pub fn stall(&mut self, cycles: u32) {
        self.stall_cycles = self.stall_cycles.saturating_add(cycles);
    }

    fn execute_instruction(&mut self, bus: &mut Bus) -> u32 {
        #[cfg(feature = "trace")]
        let before = self.state;

        let done = dispatch::step(&mut self.state, bus);

        #[cfg(feature = "trace")]
        trace!(
            "{:04X}  {:02X}  {:<4} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            before.pc,
            done.opcode,
            done.instruction.mnemonic.name(),
            before.a,
            before.x,
            before.y,
            before.status,
            before.sp,
            self.total_cycles
        );

        done.cycles
    }

    // ---------------------------------------------------------------------
    // Cycle inspection
    // ---------------------------------------------------------------------

    /// Cycles still owed before the next fetch.
    pub fn remaining_cycles(&self) -> u32 {
        self.remaining_cycles
    }

    /// Elapsed CPU cycles since reset (stall ticks excluded).
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// True when the next non-stall `clock` fetches a new opcode.
    pub fn is_idle(&self) -> bool {
        self.remaining_cycles == 0
    }

    /// External stall ticks not yet consumed.
    pub fn pending_stall(&self) -> u32 {
        self.stall_cycles
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;
    use crate::cpu::state::{BREAK, CARRY, UNUSED};
    use crate::test_utils::build_nrom_with_prg;

    fn setup_with(prg: &[u8], vectors: Option<(u16, u16, u16)>) -> (Cpu, Bus) {
        let rom = build_nrom_with_prg(prg, 1, 1, vectors);
        let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
        let mut bus = Bus::new();
        bus.attach_cartridge(cart);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        (cpu, bus)
    }

    fn setup() -> (Cpu, Bus) {
        setup_with(&[0xEA], None)
    }

    #[test]
    fn construction_and_reset() {
        let (cpu, _bus) = setup_with(&[0xEA], Some((0x8123, 0x8000, 0x8000)));
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.pc(), 0x8123);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
        assert_eq!(cpu.remaining_cycles(), 7);
        assert_eq!(cpu.total_cycles(), 0);
        assert!(!cpu.is_idle());
    }

    #[test]
    fn reset_owes_seven_cycles_before_fetch() {
        // LDA #$01 at the reset vector
        let (mut cpu, mut bus) = setup_with(&[0xA9, 0x01], None);
        for _ in 0..7 {
            cpu.clock(&mut bus);
            assert_eq!(cpu.pc(), 0x8000);
        }
        assert!(cpu.is_idle());
        cpu.clock(&mut bus);
        assert_eq!(cpu.pc(), 0x8002);
        assert_eq!(cpu.a(), 0x01);
        // LDA # costs 2: one tick spent, one owed
        assert_eq!(cpu.remaining_cycles(), 1);
        assert_eq!(cpu.total_cycles(), 8);
    }

    #[test]
    fn step_executes_nop() {
        let (mut cpu, mut bus) = setup();
        let pc_before = cpu.pc();
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.pc(), pc_before + 1);
        assert_eq!(cpu.total_cycles(), 7 + 2);
        assert!(cpu.is_idle());
    }

    #[test]
    fn undefined_opcode_never_stops_the_clock() {
        // KIL slot ; NOP
        let (mut cpu, mut bus) = setup_with(&[0x02, 0xEA], None);
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.step(&mut bus), 2);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn irq_masked_is_a_no_op() {
        // SEI
        let (mut cpu, mut bus) = setup_with(&[0x78], None);
        cpu.step(&mut bus);
        let before = *cpu.state();
        let remaining = cpu.remaining_cycles();
        cpu.irq(&mut bus);
        assert_eq!(*cpu.state(), before);
        assert_eq!(cpu.remaining_cycles(), remaining);
        assert_eq!(bus.read(0x01FD), 0x00);
    }

    #[test]
    fn irq_unmasked_pushes_frame_and_owes_seven() {
        let (mut cpu, mut bus) = setup_with(&[0x38, 0xEA], Some((0x8000, 0x8000, 0x9000)));
        cpu.step(&mut bus); // SEC
        cpu.irq(&mut bus);
        assert_eq!(cpu.remaining_cycles(), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(bus.read(0x01FD), 0x80);
        assert_eq!(bus.read(0x01FC), 0x01);
        let pushed = bus.read(0x01FB);
        assert_eq!(pushed, CARRY | UNUSED);
        assert_eq!(pushed & BREAK, 0);
        assert!(cpu.get_flag(IRQ_DISABLE));
    }

    #[test]
    fn irq_cycles_are_paid_before_next_fetch() {
        let (mut cpu, mut bus) = setup_with(&[0xEA], Some((0x8000, 0x8000, 0x8000)));
        cpu.step(&mut bus);
        cpu.irq(&mut bus);
        let start = cpu.total_cycles();
        for _ in 0..7 {
            cpu.clock(&mut bus);
        }
        assert!(cpu.is_idle());
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.total_cycles(), start + 7);
    }

    #[test]
    fn nmi_ignores_interrupt_disable() {
        // SEI
        let (mut cpu, mut bus) = setup_with(&[0x78], Some((0x8000, 0x8800, 0x9000)));
        cpu.step(&mut bus);
        cpu.nmi(&mut bus);
        assert_eq!(cpu.pc(), 0x8800);
        assert_eq!(cpu.remaining_cycles(), 7);
        assert_eq!(bus.read(0x01FB), IRQ_DISABLE | UNUSED);
    }

    #[test]
    fn stall_ticks_are_not_counted() {
        let (mut cpu, mut bus) = setup();
        cpu.step(&mut bus);
        let start = cpu.total_cycles();
        let pc = cpu.pc();
        cpu.stall(3);
        assert_eq!(cpu.pending_stall(), 3);
        for _ in 0..3 {
            cpu.clock(&mut bus);
        }
        assert_eq!(cpu.pending_stall(), 0);
        assert_eq!(cpu.total_cycles(), start);
        assert_eq!(cpu.pc(), pc);
        cpu.clock(&mut bus);
        assert_eq!(cpu.total_cycles(), start + 1);
    }

    #[test]
    fn elapsed_counter_tracks_every_tick() {
        // LDA #$01 (2) ; STA $0200 (4) ; INC $0200 (6)
        let (mut cpu, mut bus) = setup_with(&[0xA9, 0x01, 0x8D, 0x00, 0x02, 0xEE, 0x00, 0x02], None);
        let spent: u32 = (0..3).map(|_| cpu.step(&mut bus)).sum();
        assert_eq!(spent, 12);
        assert_eq!(cpu.total_cycles(), 7 + 12);
        assert_eq!(bus.read(0x0200), 0x02);
    }
}

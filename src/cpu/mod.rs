/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
    state.rs        - Register file (CpuState) and flag bit masks.
    regs.rs         - CpuRegs trait the execute / dispatch helpers are generic over.
    addressing.rs   - Addressing mode enum & operand resolution.
    table.rs        - 256-entry instruction descriptor table and `decode`.
    cycles.rs       - Base / page-cross / branch cycle arithmetic.
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, interrupts).
    dispatch/       - One-instruction step: fetch, decode, resolve, family handlers.
    core/           - `Cpu` engine: clock, step, reset, irq, nmi, stall.
```

The public surface is the `Cpu` engine plus the descriptor table. Internal
helpers stay crate-private.

Feature flags:

```text
    trace           - Per-instruction `log::trace!` records from `Cpu::clock`.
```

Usage:
```rust,ignore
use famicore::{Bus, Cpu};

let mut cpu = Cpu::new();
cpu.reset(&mut bus);
loop {
    cpu.clock(&mut bus);
}
```
*/

pub mod addressing;
pub mod core;
pub(crate) mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod regs;
pub mod state;
pub mod table;

// Re-exports:
// - Cpu (engine over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Flag constants (canonical bit masks)
// - Descriptor table surface
pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::core::{Cpu, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{INSTRUCTIONS, Instruction, Mnemonic, decode};

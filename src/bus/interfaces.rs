/*!
interfaces: the injectable handler for the reserved I/O-register window.

The CPU sees the graphics and audio register files (plus controller ports
and the test-mode block) at $2000-$401F. Their behavior lives outside this
core, so the Bus forwards every access in that window to an `IoRegisters`
implementation supplied by the host. Addresses are passed through
unmodified; any register mirroring is the handler's business.
*/

/// Host-side handler for CPU accesses to $2000-$401F.
pub trait IoRegisters {
    /// Read side. Register reads may have side effects, hence `&mut self`.
    fn read(&mut self, addr: u16) -> u8;

    fn write(&mut self, addr: u16, value: u8);
}

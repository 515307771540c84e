use famicore::{Bus, Cartridge, CartridgeError, Cpu};

fn build_test_ines() -> Vec<u8> {
    // iNES header
    let mut header = Vec::with_capacity(16);
    header.extend_from_slice(b"NES\x1A");
    header.push(1); // 1 x 16KB PRG
    header.push(1); // 1 x 8KB CHR
    header.push(0); // flags6 (horizontal mirroring, no trainer, no battery)
    header.push(0); // flags7
    header.push(1); // PRG-RAM size in 8KB units
    header.extend_from_slice(&[0u8; 7]); // padding

    // PRG ROM 16KB
    let mut prg = vec![0u8; 16 * 1024];

    // Program at $8000 (offset 0x0000 in PRG)
    let program: &[u8] = &[
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // loop: INX
        0xD0, 0xFD, // BNE loop, until X wraps to 0
        0x8E, 0x01, 0x02, // STX $0201
        0x4C, 0x0D, 0x80, // done: JMP done
    ];
    prg[..program.len()].copy_from_slice(program);

    // Vectors at the top of the 16KB bank, mirrored to $FFFA-$FFFF
    let reset: u16 = 0x8000;
    let nmi: u16 = 0x800D;
    let irq: u16 = 0x800D;
    prg[0x3FFA] = (nmi & 0xFF) as u8;
    prg[0x3FFB] = (nmi >> 8) as u8;
    prg[0x3FFC] = (reset & 0xFF) as u8;
    prg[0x3FFD] = (reset >> 8) as u8;
    prg[0x3FFE] = (irq & 0xFF) as u8;
    prg[0x3FFF] = (irq >> 8) as u8;

    // CHR ROM 8KB (zeros)
    let chr = vec![0u8; 8 * 1024];

    let mut rom = header;
    rom.extend_from_slice(&prg);
    rom.extend_from_slice(&chr);
    rom
}

fn main() -> Result<(), CartridgeError> {
    // Build a simple NROM cartridge with our demo program
    let rom = build_test_ines();
    let cart = Cartridge::from_ines_bytes(&rom)?;

    let mut bus = Bus::new();
    bus.attach_cartridge(cart);

    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    // Drive the clock like a host would, until the program parks in its
    // final JMP (with a safety cap).
    let max_cycles: u64 = 100_000;
    while cpu.total_cycles() < max_cycles {
        cpu.clock(&mut bus);
        if cpu.is_idle() && cpu.pc() == 0x800D {
            break;
        }
    }

    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status());
    println!("mem[0x0200]: 0x{:02X}", bus.read(0x0200));
    println!("mem[0x0201]: 0x{:02X}", bus.read(0x0201));
    println!("cycles: {}", cpu.total_cycles());
    Ok(())
}

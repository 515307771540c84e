use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::{Bus, IoRegisters};
use crate::cartridge::Cartridge;
use crate::test_utils::{build_ines, build_nrom_with_prg};

/// Records every access and answers reads with the low address byte.
#[derive(Default)]
struct RecordingIo {
    log: Rc<RefCell<Vec<(char, u16, u8)>>>,
}

impl IoRegisters for RecordingIo {
    fn read(&mut self, addr: u16) -> u8 {
        let v = (addr & 0x00FF) as u8;
        self.log.borrow_mut().push(('r', addr, v));
        v
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.log.borrow_mut().push(('w', addr, value));
    }
}

fn bus_with_nrom() -> Bus {
    let rom = build_nrom_with_prg(&[0xA9, 0x42], 1, 1, Some((0x8000, 0x8000, 0x8000)));
    let cart = Cartridge::from_ines_bytes(&rom).expect("parse");
    let mut bus = Bus::new();
    bus.attach_cartridge(cart);
    bus
}

#[test]
fn ram_mirroring() {
    let mut bus = Bus::new();

    bus.write(0x0001, 0xAA);
    assert_eq!(bus.read(0x0001), 0xAA);
    assert_eq!(bus.read(0x0801), 0xAA);
    assert_eq!(bus.read(0x1001), 0xAA);
    assert_eq!(bus.read(0x1801), 0xAA);

    // Write through a mirror
    bus.write(0x1802, 0x55);
    assert_eq!(bus.read(0x0002), 0x55);
}

#[test]
fn ram_mirroring_exhaustive() {
    let mut bus = Bus::new();
    for a in 0..=0x07FFu16 {
        for b in 0..=0xFFu8 {
            bus.write(a, b);
            assert_eq!(bus.read(a), b);
            assert_eq!(bus.read(a + 0x0800), b);
            assert_eq!(bus.read(a + 0x1000), b);
            assert_eq!(bus.read(a + 0x1800), b);
        }
    }
}

#[test]
fn word_access_is_little_endian() {
    let mut bus = Bus::new();
    bus.write_word(0x0010, 0xBEEF);
    assert_eq!(bus.read(0x0010), 0xEF);
    assert_eq!(bus.read(0x0011), 0xBE);
    assert_eq!(bus.read_word(0x0010), 0xBEEF);
}

#[test]
fn word_read_wraps_at_top_of_address_space() {
    let mut bus = Bus::new();
    bus.write(0x0000, 0x12);
    // $FFFF reads 0 with no cartridge; high byte comes from $0000
    assert_eq!(bus.read_word(0xFFFF), 0x1200);
}

#[test]
fn io_window_without_handler_is_open() {
    let mut bus = Bus::new();
    bus.write(0x2000, 0xFF);
    bus.write(0x4017, 0xFF);
    assert_eq!(bus.read(0x2000), 0);
    assert_eq!(bus.read(0x401F), 0);
    // RAM untouched
    assert!(bus.ram().as_slice().iter().all(|&b| b == 0));
}

#[test]
fn io_window_routes_to_handler_unmodified() {
    let io = RecordingIo::default();
    let log = Rc::clone(&io.log);
    let mut bus = Bus::new();
    bus.attach_io(Box::new(io));

    bus.write(0x2000, 0x80);
    bus.write(0x3FFF, 0x01);
    assert_eq!(bus.read(0x2002), 0x02);
    assert_eq!(bus.read(0x4016), 0x16);
    assert_eq!(bus.read(0x401F), 0x1F);

    // Boundaries on either side never reach the handler
    bus.write(0x1FFF, 0x00);
    bus.read(0x4020);

    assert_eq!(
        *log.borrow(),
        vec![
            ('w', 0x2000, 0x80),
            ('w', 0x3FFF, 0x01),
            ('r', 0x2002, 0x02),
            ('r', 0x4016, 0x16),
            ('r', 0x401F, 0x1F),
        ]
    );
}

#[test]
fn detach_io_restores_open_window() {
    let mut bus = Bus::new();
    bus.attach_io(Box::new(RecordingIo::default()));
    assert_eq!(bus.read(0x2005), 0x05);
    assert!(bus.detach_io().is_some());
    assert_eq!(bus.read(0x2005), 0);
}

#[test]
fn cartridge_routing() {
    let mut bus = bus_with_nrom();

    // Program storage, mirrored for a single 16 KiB unit
    assert_eq!(bus.read(0x8000), 0xA9);
    assert_eq!(bus.read(0xC000), 0xA9);
    assert_eq!(bus.read(0xC001), 0x42);
    assert_eq!(bus.read_word(0xFFFC), 0x8000);

    // Save storage
    bus.write(0x6000, 0x11);
    bus.write(0x7FFF, 0x22);
    assert_eq!(bus.read(0x6000), 0x11);
    assert_eq!(bus.read(0x7FFF), 0x22);

    // Expansion area is not mapped by NROM
    bus.write(0x5000, 0x33);
    assert_eq!(bus.read(0x4020), 0);
    assert_eq!(bus.read(0x5000), 0);

    // Program writes land in storage, visible through the mirror
    bus.write(0xC001, 0x99);
    assert_eq!(bus.read(0x8001), 0x99);
}

#[test]
fn no_cartridge_reads_zero() {
    let mut bus = Bus::new();
    assert_eq!(bus.read(0x6000), 0);
    assert_eq!(bus.read(0x8000), 0);
    assert_eq!(bus.read_word(0xFFFC), 0);
    bus.write(0x8000, 0x12);
    assert!(bus.cartridge().is_none());
}

#[test]
fn detach_cartridge_returns_save_storage() {
    let mut bus = bus_with_nrom();
    bus.write(0x6010, 0x5A);
    let cart = bus.detach_cartridge().expect("attached");
    assert_eq!(cart.save_ram()[0x10], 0x5A);
    assert_eq!(bus.read(0x6010), 0);
}

#[test]
fn cartridge_mut_reaches_mapper_storage() {
    let data = build_ines(2, 1, 0, 0, 1, None);
    let mut bus = Bus::new();
    bus.attach_cartridge(Cartridge::from_ines_bytes(&data).expect("parse"));
    if let Some(cart) = bus.cartridge_mut() {
        cart.save_ram_mut()[0] = 0x77;
    }
    assert_eq!(bus.read(0x6000), 0x77);
    // 32 KiB program: both windows read the filler directly
    assert_eq!(bus.read(0x8000), 0xAA);
    assert_eq!(bus.read(0xFFF0), 0xAA);
}

#[test]
fn reset_clears_ram_but_keeps_cartridge() {
    let mut bus = bus_with_nrom();
    bus.write(0x0100, 0x99);
    bus.write(0x6000, 0x44);
    bus.reset();
    assert_eq!(bus.read(0x0100), 0);
    assert_eq!(bus.read(0x6000), 0x44);
    assert_eq!(bus.read(0x8000), 0xA9);
}

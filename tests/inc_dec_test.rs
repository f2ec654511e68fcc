//! Tests for the increment and decrement instructions, memory and register
//! forms, including byte wraparound.

mod common;

use common::{load, run_one, setup_cpu};
use emu6502::BusDevice;

#[test]
fn test_inc_memory() {
    let (mut cpu, memory) = setup_cpu();
    memory.borrow_mut().write_byte(0x0010, 0x41);
    load(&memory, &[0xE6, 0x10]); // INC $10

    cpu.tick();
    assert_eq!(cpu.cycles_remaining(), 5); // 2 addressing + 3 execute
    run_one(&mut cpu);

    assert_eq!(memory.borrow().read_byte(0x0010), 0x42);
    assert!(!cpu.status().zero());
}

#[test]
fn test_inc_wraps_to_zero() {
    let (mut cpu, memory) = setup_cpu();
    memory.borrow_mut().write_byte(0x0010, 0xFF);
    load(&memory, &[0xE6, 0x10]); // INC $10

    run_one(&mut cpu);

    assert_eq!(memory.borrow().read_byte(0x0010), 0x00);
    assert!(cpu.status().zero());
    assert!(!cpu.status().negative());
}

#[test]
fn test_dec_memory_to_negative() {
    let (mut cpu, memory) = setup_cpu();
    memory.borrow_mut().write_byte(0x0010, 0x00);
    load(&memory, &[0xC6, 0x10]); // DEC $10

    run_one(&mut cpu);

    assert_eq!(memory.borrow().read_byte(0x0010), 0xFF);
    assert!(cpu.status().negative());
    assert!(!cpu.status().zero());
}

#[test]
fn test_inx_dex_round_trip() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0xE8, 0xCA]); // INX / DEX

    run_one(&mut cpu);
    assert_eq!(cpu.x(), 0x01);

    run_one(&mut cpu);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.status().zero());
}

#[test]
fn test_iny_wraps() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0xC8]); // INY

    cpu.set_y(0xFF);
    run_one(&mut cpu);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.status().zero());
}

#[test]
fn test_dey_from_zero_wraps_negative() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0x88]); // DEY

    run_one(&mut cpu);

    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.status().negative());
}

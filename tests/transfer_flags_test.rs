//! Tests for the register transfer and flag manipulation instructions.

mod common;

use common::{load, run_one, setup_cpu};

#[test]
fn test_tax_tay_copy_and_set_flags() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0xAA, 0xA8]); // TAX / TAY

    cpu.set_a(0x80);
    run_one(&mut cpu);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.status().negative());

    run_one(&mut cpu);
    assert_eq!(cpu.y(), 0x80);
}

#[test]
fn test_txa_tya() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0x8A, 0x98]); // TXA / TYA

    cpu.set_x(0x00);
    cpu.set_a(0x55);
    run_one(&mut cpu);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().zero());

    cpu.set_y(0x42);
    run_one(&mut cpu);
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.status().zero());
}

#[test]
fn test_tsx_reads_stack_pointer() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0xBA]); // TSX

    run_one(&mut cpu);

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.status().negative()); // 0xFD has bit 7 set
}

#[test]
fn test_txs_does_not_touch_flags() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0x9A]); // TXS

    cpu.set_x(0x80);
    let flags_before = cpu.status().as_byte();
    run_one(&mut cpu);

    assert_eq!(cpu.sp(), 0x80);
    assert_eq!(cpu.status().as_byte(), flags_before);
}

#[test]
fn test_carry_set_and_clear() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0x38, 0x18]); // SEC / CLC

    run_one(&mut cpu);
    assert!(cpu.status().carry());

    run_one(&mut cpu);
    assert!(!cpu.status().carry());
}

#[test]
fn test_decimal_set_and_clear() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0xF8, 0xD8]); // SED / CLD

    run_one(&mut cpu);
    assert!(cpu.status().decimal());

    run_one(&mut cpu);
    assert!(!cpu.status().decimal());
}

#[test]
fn test_interrupt_disable_set_and_clear() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0x78, 0x58]); // SEI / CLI

    run_one(&mut cpu);
    assert!(cpu.status().interrupt_disable());

    run_one(&mut cpu);
    assert!(!cpu.status().interrupt_disable());
}

#[test]
fn test_clv_clears_overflow() {
    let (mut cpu, memory) = setup_cpu();
    load(&memory, &[0xB8]); // CLV

    cpu.status_mut().set_overflow(true);
    run_one(&mut cpu);

    assert!(!cpu.status().overflow());
}

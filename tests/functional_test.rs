//! End-to-end tests: assemble source text, load the byte code, and run it
//! on the full machine.

mod common;

use common::{run_one, setup_cpu};
use emu6502::{assemble, BusDevice, RESET_VECTOR};

/// Assembles `source`, loads it at its origin, points the RESET vector at
/// it, and resets the CPU.
fn boot(source: &str) -> (emu6502::CPU, std::rc::Rc<std::cell::RefCell<emu6502::Memory>>) {
    let program = assemble(source);
    assert!(!program.is_empty(), "program failed to assemble");

    let (mut cpu, memory) = setup_cpu();
    {
        let mut mem = memory.borrow_mut();
        mem.write_bytes(program.origin, &program.bytecode);
        mem.write_word(RESET_VECTOR, program.origin);
    }
    cpu.reset();

    (cpu, memory)
}

#[test]
fn test_load_and_store() {
    let (mut cpu, memory) = boot(
        "LDA #$42\n\
         STA $10",
    );

    run_one(&mut cpu);
    run_one(&mut cpu);

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(memory.borrow().read_byte(0x0010), 0x42);
}

#[test]
fn test_countdown_loop() {
    let (mut cpu, _memory) = boot(
        "COUNT = 5\n\
         LDX #COUNT\n\
         LOOP: DEX\n\
         BNE LOOP\n\
         NOP",
    );

    run_one(&mut cpu); // LDX
    assert_eq!(cpu.x(), 5);

    for _ in 0..5 {
        run_one(&mut cpu); // DEX
        run_one(&mut cpu); // BNE
    }

    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.pc(), 0x0205); // past the branch, at the NOP
}

#[test]
fn test_subroutine_call() {
    // The subroutine sits right after the NOP: JSR is 3 bytes and NOP is 1,
    // so SEC lands at $0204.
    let (mut cpu, _memory) = boot(
        "JSR $0204\n\
         NOP\n\
         SEC\n\
         RTS",
    );

    run_one(&mut cpu); // JSR
    assert_eq!(cpu.pc(), 0x0204);

    run_one(&mut cpu); // SEC
    run_one(&mut cpu); // RTS

    assert_eq!(cpu.pc(), 0x0203); // back at the NOP
    assert!(cpu.status().carry());
}

#[test]
fn test_bundled_demo_program() {
    // The same source the driver ships with.
    let (mut cpu, memory) = boot(include_str!("../program.asm"));

    // LDX, LDA, then 10 iterations of CLC/ADC/DEX/BNE, then STA and NOP.
    for _ in 0..(2 + 10 * 4 + 2) {
        run_one(&mut cpu);
    }

    assert_eq!(memory.borrow().read_byte(0x0042), 0x14);
    assert_eq!(cpu.x(), 0x00);
}

#[test]
fn test_arithmetic_with_carry_chain() {
    let (mut cpu, _memory) = boot(
        "CLC\n\
         LDA #$FF\n\
         ADC #$01\n\
         ADC #$00",
    );

    for _ in 0..4 {
        run_one(&mut cpu);
    }

    // 0xFF + 1 = 0x00 carry, then 0 + 0 + carry = 1.
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.status().carry());
}

#[test]
fn test_listing_metadata_tracks_addresses() {
    let program = assemble(
        "LDA #$01\n\
         STA $0300\n\
         NOP",
    );

    assert_eq!(program.lines.len(), 3);
    assert_eq!(program.lines[0].pc, 0x0200);
    assert_eq!(program.lines[1].pc, 0x0202);
    assert_eq!(program.lines[2].pc, 0x0205);
    assert_eq!(program.lines[2].line_number, 3);
}

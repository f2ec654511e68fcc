//! Shared wiring helpers for the integration tests.
#![allow(dead_code)] // each test binary uses its own subset of the helpers

use std::cell::RefCell;
use std::rc::Rc;

use emu6502::{Bus, BusDevice, DeviceHandle, Memory, CPU, RESET_VECTOR};

/// Default program origin used across the tests.
pub const ORIGIN: u16 = 0x0200;

/// Builds a full machine (memory behind bus behind CPU) with the RESET
/// vector pointing at [`ORIGIN`], and resets the CPU. The concrete memory
/// handle is returned alongside so tests can inspect and preload it.
pub fn setup_cpu() -> (CPU, Rc<RefCell<Memory>>) {
    let memory = Rc::new(RefCell::new(Memory::new()));
    memory.borrow_mut().write_word(RESET_VECTOR, ORIGIN);

    let handle: DeviceHandle = memory.clone();
    let bus = Bus::new_handle(Some(handle));

    let mut cpu = CPU::new(Some(bus));
    cpu.reset();

    (cpu, memory)
}

/// Loads `bytes` at [`ORIGIN`].
pub fn load(memory: &Rc<RefCell<Memory>>, bytes: &[u8]) {
    memory.borrow_mut().write_bytes(ORIGIN, bytes);
}

/// Ticks the CPU through exactly one complete instruction.
pub fn run_one(cpu: &mut CPU) {
    while cpu.tick() {}
}

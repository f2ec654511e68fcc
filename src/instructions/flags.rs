//! # Flag Manipulation Instructions
//!
//! Single-flag sets and clears. None touch any other state.

use crate::cpu::CPU;

/// CLC - Clear the carry flag.
pub(crate) fn clc(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_carry(false);
    1
}

/// SEC - Set the carry flag.
pub(crate) fn sec(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_carry(true);
    1
}

/// CLD - Clear the decimal-mode flag.
pub(crate) fn cld(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_decimal(false);
    1
}

/// SED - Set the decimal-mode flag.
pub(crate) fn sed(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_decimal(true);
    1
}

/// CLI - Clear the interrupt-disable flag.
pub(crate) fn cli(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_interrupt_disable(false);
    1
}

/// SEI - Set the interrupt-disable flag.
pub(crate) fn sei(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_interrupt_disable(true);
    1
}

/// CLV - Clear the overflow flag. There is no matching set instruction.
pub(crate) fn clv(cpu: &mut CPU, _addr: u16) -> u8 {
    cpu.status.set_overflow(false);
    1
}

//! # MOS 6502 Emulator Core
//!
//! An instruction-level emulator for the MOS Technology 6502 8-bit
//! microprocessor, together with the single-pass assembler that feeds it.
//!
//! The crate models the machine the way the hardware is wired: a flat 64 KiB
//! [`Memory`] sits behind a routing [`Bus`], and the [`CPU`] reaches
//! everything through the bus one clock beat at a time. Programs are written
//! in 6502 assembly, compiled with [`assemble`], loaded at their origin, and
//! driven by calling [`CPU::tick`].
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{assemble, Bus, BusDevice, Memory, CPU, RESET_VECTOR};
//!
//! // Assemble a program: it loads at the default origin 0x0200.
//! let program = assemble("LDA #$42");
//!
//! // Load it and point the RESET vector at it.
//! let memory = Memory::new_handle();
//! memory.borrow_mut().write_bytes(program.origin, &program.bytecode);
//! memory.borrow_mut().write_word(RESET_VECTOR, program.origin);
//!
//! // Wire memory behind the bus, the bus behind the CPU, and run.
//! let bus = Bus::new_handle(Some(memory));
//! let mut cpu = CPU::new(Some(bus));
//! cpu.reset();
//! while cpu.tick() {}
//!
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Modules
//!
//! - [`cpu`] - Register file, flags, interrupts, and the tick loop
//! - [`memory`] - The `BusDevice` trait and the flat 64 KiB memory
//! - [`bus`] - Address-space routing between the CPU and memory
//! - [`opcodes`] - The 256-entry instruction metadata table
//! - [`addressing`] - Addressing mode enumeration
//! - [`status`] - The processor status register
//! - [`assembler`] - Assembly source to byte code
//!
//! ## Failure model
//!
//! The core never aborts emulation: illegal opcodes run as two-cycle NOPs,
//! out-of-range memory access clamps silently, and a missing bus reads as
//! zero. Diagnostics go to the [`log`] facade; hosts choose the sink.

pub mod addressing;
pub mod assembler;
pub mod bus;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction semantics (internal; dispatched from CPU::tick)
mod instructions;

// Re-export the public API
pub use addressing::AddressingMode;
pub use assembler::{assemble, Program};
pub use bus::Bus;
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use memory::{BusDevice, DeviceHandle, Memory};
pub use opcodes::{find_instruction, InstructionDetail, Mnemonic, INSTRUCTION_TABLE};
pub use status::Status;

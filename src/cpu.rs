//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute machinery driven one clock beat at a time.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register** (P): flag byte, see [`Status`]
//! - **Cycle counters**: per-instruction remaining cycles plus a running total
//!
//! ## Execution Model
//!
//! [`CPU::tick`] is the sole clock input. When no instruction is in flight it
//! fetches, decodes, and executes a whole instruction, then deposits the
//! instruction's total cycle cost into the remaining-cycles counter; further
//! ticks drain that counter one cycle per call. Side effects therefore commit
//! on the dispatching tick, and the drain only models the instruction's
//! duration. The [`CPU::reset`], [`CPU::irq`], and [`CPU::nmi`] interrupt
//! entry points may be called in either state.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::{BusDevice, DeviceHandle};
use crate::opcodes::{Mnemonic, INSTRUCTION_TABLE};
use crate::status::Status;

/// Base address of the stack page. SP supplies only the low byte.
pub const STACK_BASE: u16 = 0x0100;

/// Little-endian pointer to the NMI handler.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Little-endian pointer loaded into PC by RESET.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Little-endian pointer to the IRQ/BRK handler.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 6502 CPU state and execution context.
///
/// The CPU reaches memory exclusively through a mounted [`crate::Bus`] handle
/// (any [`BusDevice`] works, which keeps tests simple). With nothing mounted
/// it behaves like a part soldered to a dead board: reads return 0, writes
/// vanish, and a diagnostic is logged.
///
/// # Examples
///
/// ```
/// use emu6502::{Bus, BusDevice, Memory, CPU};
///
/// let memory = Memory::new_handle();
/// memory.borrow_mut().write_word(0xFFFC, 0x0200); // RESET vector
/// memory.borrow_mut().write_bytes(0x0200, &[0xA9, 0x42]); // LDA #$42
///
/// let bus = Bus::new_handle(Some(memory));
/// let mut cpu = CPU::new(Some(bus));
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x0200);
///
/// while cpu.tick() {}
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct CPU {
    /// Accumulator register.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Program counter (address of the next byte to fetch).
    pub(crate) pc: u16,

    /// Stack pointer; the full stack address is 0x0100 + SP.
    pub(crate) sp: u8,

    /// Processor status register.
    pub(crate) status: Status,

    /// Cycles left before the in-flight instruction completes.
    pub(crate) cycles_rem: u8,

    /// Total clock beats observed since construction.
    pub(crate) cycles_total: u32,

    /// Supplied-value latch: `Some(v)` when the current instruction's operand
    /// came from the accumulator or an immediate rather than memory. Cleared
    /// before every addressing-mode decode.
    pub(crate) supplied: Option<u8>,

    /// Mounted address bus.
    bus: Option<DeviceHandle>,
}

impl CPU {
    /// Creates a CPU wired to the given bus. Registers start zeroed; call
    /// [`CPU::reset`] to enter the defined power-on state.
    pub fn new(bus: Option<DeviceHandle>) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::new(),
            cycles_rem: 0,
            cycles_total: 0,
            supplied: None,
            bus,
        }
    }

    /// Swaps the mounted bus. Safe between ticks.
    pub fn mount_bus(&mut self, bus: DeviceHandle) {
        self.bus = Some(bus);
    }

    /// Reset interrupt: forces the CPU into its known power-on state.
    ///
    /// - A, X, and Y are cleared
    /// - PC is loaded from the RESET vector at 0xFFFC/0xFFFD
    /// - SP is set to 0xFD
    /// - P is cleared except for the unused bit
    ///
    /// Consumes no cycles visible to the counters; this event models a
    /// physical pin, not an instruction.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.pc = self.read_word(RESET_VECTOR);
        self.sp = 0xFD;
        self.status = Status::new();
    }

    /// Interrupt request. Ignored while the interrupt-disable flag is set.
    ///
    /// Pushes PC (high byte first) and the status byte, clears B, sets I,
    /// loads PC from the IRQ vector at 0xFFFE/0xFFFF, and adds 7 cycles.
    pub fn irq(&mut self) {
        if self.status.interrupt_disable() {
            return;
        }

        self.enter_interrupt(IRQ_VECTOR);
        self.cycles_rem = self.cycles_rem.wrapping_add(7);
    }

    /// Non-maskable interrupt. Same sequence as [`CPU::irq`] but cannot be
    /// masked, vectors through 0xFFFA/0xFFFB, and costs 8 cycles.
    pub fn nmi(&mut self) {
        self.enter_interrupt(NMI_VECTOR);
        self.cycles_rem = self.cycles_rem.wrapping_add(8);
    }

    fn enter_interrupt(&mut self, vector: u16) {
        self.push((self.pc >> 8) as u8);
        self.push((self.pc & 0xFF) as u8);

        self.status.set_brk(false);
        self.status.set_interrupt_disable(true);
        self.status.force_unused();
        self.push(self.status.as_byte());

        self.pc = self.read_word(vector);
    }

    /// Performs a single clock cycle.
    ///
    /// If cycles remain from a previous instruction, one is drained. When the
    /// counter reaches the ready state the next opcode is fetched, decoded,
    /// and executed in full, and its total cost (addressing + execution) is
    /// deposited into the remaining-cycles counter.
    ///
    /// Returns true while cycles remain on the current instruction, which
    /// lets a driver loop `while cpu.tick() {}` to complete it.
    pub fn tick(&mut self) -> bool {
        self.cycles_total = self.cycles_total.wrapping_add(1);

        // Still draining a previous instruction: results are already
        // committed, only the duration is being modeled.
        if self.cycles_rem > 0 {
            self.cycles_rem -= 1;
            return self.cycles_rem > 0;
        }

        let opcode = self.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let detail = &INSTRUCTION_TABLE[opcode as usize];
        log::trace!(
            "fetched ${:02X} ({} {}) at ${:04X}",
            opcode,
            detail.mnemonic,
            detail.mode,
            self.pc.wrapping_sub(1)
        );

        let (addr, addressing_cycles) = self.resolve_addressing(detail.mode);
        let execution_cycles = self.execute(detail.mnemonic, addr);

        self.cycles_rem = self
            .cycles_rem
            .wrapping_add(addressing_cycles.wrapping_add(execution_cycles));

        // The unused bit reads back as 1 after every instruction.
        self.status.force_unused();

        self.cycles_rem > 0
    }

    // ========== Addressing ==========

    /// Resolves the operand location for `mode`, consuming 0-2 operand bytes
    /// at PC and advancing it. Returns the effective address and the
    /// addressing portion of the cycle cost.
    pub(crate) fn resolve_addressing(&mut self, mode: AddressingMode) -> (u16, u8) {
        self.supplied = None;

        match mode {
            AddressingMode::Illegal => {
                log::warn!("attempted to decode an illegal addressing mode");
                (0, 1)
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_operand_word();
                (addr, 3)
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_operand_word();
                let addr = base.wrapping_add(self.x as u16);
                (addr, if pages_differ(base, addr) { 4 } else { 3 })
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_operand_word();
                let addr = base.wrapping_add(self.y as u16);
                (addr, if pages_differ(base, addr) { 4 } else { 3 })
            }
            AddressingMode::Accumulator => {
                self.supplied = Some(self.a);
                (self.pc, 1)
            }
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (addr, 1)
            }
            AddressingMode::Implicit => {
                self.supplied = Some(self.a);
                (0, 1)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_operand_word();
                let low = self.read_byte(pointer);
                // NMOS page-boundary bug: a pointer ending in 0xFF takes its
                // high byte from the start of the same page.
                let high = if pointer & 0x00FF == 0x00FF {
                    self.read_byte(pointer & 0xFF00)
                } else {
                    self.read_byte(pointer.wrapping_add(1))
                };
                (word(low, high), 4)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_operand_byte().wrapping_add(self.x);
                let low = self.read_byte(zp as u16);
                let high = self.read_byte(zp.wrapping_add(1) as u16);
                (word(low, high), 5)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_operand_byte();
                let low = self.read_byte(zp as u16);
                let high = self.read_byte(zp.wrapping_add(1) as u16);
                let base = word(low, high);
                let addr = base.wrapping_add(self.y as u16);
                (addr, if pages_differ(base, addr) { 5 } else { 4 })
            }
            AddressingMode::Relative => {
                // Sign-extend the offset; the branch itself applies it to PC
                // and determines the cost.
                let offset = self.fetch_operand_byte() as i8;
                (offset as i16 as u16, 1)
            }
            AddressingMode::ZeroPage => {
                let addr = self.fetch_operand_byte() as u16;
                (addr, 2)
            }
            AddressingMode::ZeroPageX => {
                let addr = self.fetch_operand_byte().wrapping_add(self.x) as u16;
                (addr, 3)
            }
            AddressingMode::ZeroPageY => {
                let addr = self.fetch_operand_byte().wrapping_add(self.y) as u16;
                (addr, 3)
            }
        }
    }

    fn fetch_operand_byte(&mut self) -> u8 {
        let value = self.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_operand_word(&mut self) -> u16 {
        let low = self.fetch_operand_byte();
        let high = self.fetch_operand_byte();
        word(low, high)
    }

    // ========== Execution ==========

    /// Runs the semantics for `mnemonic` against the resolved operand
    /// location and returns the execution portion of the cycle cost.
    pub(crate) fn execute(&mut self, mnemonic: Mnemonic, addr: u16) -> u8 {
        match mnemonic {
            Mnemonic::Ill => {
                log::warn!("attempted to execute an illegal instruction, treating as NOP");
                1
            }

            Mnemonic::Adc => instructions::alu::adc(self, addr),
            Mnemonic::And => instructions::alu::and(self, addr),
            Mnemonic::Asl => instructions::shifts::asl(self, addr),
            Mnemonic::Bcc => instructions::branches::bcc(self, addr),
            Mnemonic::Bcs => instructions::branches::bcs(self, addr),
            Mnemonic::Beq => instructions::branches::beq(self, addr),
            Mnemonic::Bit => instructions::alu::bit(self, addr),
            Mnemonic::Bmi => instructions::branches::bmi(self, addr),
            Mnemonic::Bne => instructions::branches::bne(self, addr),
            Mnemonic::Bpl => instructions::branches::bpl(self, addr),
            Mnemonic::Brk => instructions::control::brk(self, addr),
            Mnemonic::Bvc => instructions::branches::bvc(self, addr),
            Mnemonic::Bvs => instructions::branches::bvs(self, addr),
            Mnemonic::Clc => instructions::flags::clc(self, addr),
            Mnemonic::Cld => instructions::flags::cld(self, addr),
            Mnemonic::Cli => instructions::flags::cli(self, addr),
            Mnemonic::Clv => instructions::flags::clv(self, addr),
            Mnemonic::Cmp => instructions::alu::cmp(self, addr),
            Mnemonic::Cpx => instructions::alu::cpx(self, addr),
            Mnemonic::Cpy => instructions::alu::cpy(self, addr),
            Mnemonic::Dec => instructions::inc_dec::dec(self, addr),
            Mnemonic::Dex => instructions::inc_dec::dex(self, addr),
            Mnemonic::Dey => instructions::inc_dec::dey(self, addr),
            Mnemonic::Eor => instructions::alu::eor(self, addr),
            Mnemonic::Inc => instructions::inc_dec::inc(self, addr),
            Mnemonic::Inx => instructions::inc_dec::inx(self, addr),
            Mnemonic::Iny => instructions::inc_dec::iny(self, addr),
            Mnemonic::Jmp => instructions::control::jmp(self, addr),
            Mnemonic::Jsr => instructions::control::jsr(self, addr),
            Mnemonic::Lda => instructions::load_store::lda(self, addr),
            Mnemonic::Ldx => instructions::load_store::ldx(self, addr),
            Mnemonic::Ldy => instructions::load_store::ldy(self, addr),
            Mnemonic::Lsr => instructions::shifts::lsr(self, addr),
            Mnemonic::Nop => instructions::control::nop(self, addr),
            Mnemonic::Ora => instructions::alu::ora(self, addr),
            Mnemonic::Pha => instructions::stack::pha(self, addr),
            Mnemonic::Php => instructions::stack::php(self, addr),
            Mnemonic::Pla => instructions::stack::pla(self, addr),
            Mnemonic::Plp => instructions::stack::plp(self, addr),
            Mnemonic::Rol => instructions::shifts::rol(self, addr),
            Mnemonic::Ror => instructions::shifts::ror(self, addr),
            Mnemonic::Rti => instructions::control::rti(self, addr),
            Mnemonic::Rts => instructions::control::rts(self, addr),
            Mnemonic::Sbc => instructions::alu::sbc(self, addr),
            Mnemonic::Sec => instructions::flags::sec(self, addr),
            Mnemonic::Sed => instructions::flags::sed(self, addr),
            Mnemonic::Sei => instructions::flags::sei(self, addr),
            Mnemonic::Sta => instructions::load_store::sta(self, addr),
            Mnemonic::Stx => instructions::load_store::stx(self, addr),
            Mnemonic::Sty => instructions::load_store::sty(self, addr),
            Mnemonic::Tax => instructions::transfer::tax(self, addr),
            Mnemonic::Tay => instructions::transfer::tay(self, addr),
            Mnemonic::Tsx => instructions::transfer::tsx(self, addr),
            Mnemonic::Txa => instructions::transfer::txa(self, addr),
            Mnemonic::Txs => instructions::transfer::txs(self, addr),
            Mnemonic::Tya => instructions::transfer::tya(self, addr),
        }
    }

    // ========== Bus Access ==========

    pub(crate) fn read_byte(&self, addr: u16) -> u8 {
        match &self.bus {
            Some(bus) => bus.borrow().read_byte(addr),
            None => {
                log::error!("cpu read at ${:04X} with no bus mounted", addr);
                0
            }
        }
    }

    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        match &self.bus {
            Some(bus) => bus.borrow().read_word(addr),
            None => {
                log::error!("cpu word read at ${:04X} with no bus mounted", addr);
                0
            }
        }
    }

    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        match &self.bus {
            Some(bus) => bus.borrow_mut().write_byte(addr, value),
            None => {
                log::error!("cpu write at ${:04X} with no bus mounted", addr);
            }
        }
    }

    /// Fetches the operand for an instruction: the supplied-value latch when
    /// addressing put the operand in-register, otherwise the byte at `addr`.
    pub(crate) fn fetch_data(&self, addr: u16) -> u8 {
        match self.supplied {
            Some(value) => value,
            None => self.read_byte(addr),
        }
    }

    /// Whether the current instruction's operand was supplied in-register.
    pub(crate) fn was_supplied(&self) -> bool {
        self.supplied.is_some()
    }

    // ========== Stack ==========

    /// Writes a byte at the stack pointer (offset into the stack page) and
    /// decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        let pointer = STACK_BASE + self.sp as u16;
        self.sp = self.sp.wrapping_sub(1);
        self.write_byte(pointer, value);
    }

    /// Pre-increments SP and reads the byte at the new pointer.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(STACK_BASE + self.sp as u16)
    }

    // ========== Register Access ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the processor status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns a mutable reference to the status register, letting hosts and
    /// tests preload flags.
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Cycles left before the in-flight instruction completes; 0 means the
    /// next tick fetches a new opcode.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles_rem
    }

    /// Total clock beats observed since construction.
    pub fn cycles_total(&self) -> u32 {
        self.cycles_total
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }
}

impl fmt::Display for CPU {
    /// One-line register dump in the driver's prompt format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PS={} PC=${:04X} SP=${:02X} A=${:02X} X=${:02X} Y=${:02X} : CR={:02X} : CE={:08X}",
            self.status, self.pc, self.sp, self.a, self.x, self.y, self.cycles_rem, self.cycles_total
        )
    }
}

/// Little-endian byte pair to word.
pub(crate) fn word(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Whether two addresses fall on different 256-byte pages.
pub(crate) fn pages_differ(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::memory::Memory;

    fn setup() -> (CPU, DeviceHandle) {
        let memory = Memory::new_handle();
        memory.borrow_mut().write_word(RESET_VECTOR, 0x0200);
        let bus = Bus::new_handle(Some(memory.clone()));
        let mut cpu = CPU::new(Some(bus));
        cpu.reset();
        (cpu, memory)
    }

    #[test]
    fn test_busless_cpu_reads_zero() {
        let mut cpu = CPU::new(None);
        cpu.reset();
        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.read_byte(0x1234), 0);
        cpu.write_byte(0x1234, 0xFF); // dropped, must not panic
    }

    #[test]
    fn test_illegal_opcode_behaves_as_two_cycle_nop() {
        let (mut cpu, memory) = setup();
        memory.borrow_mut().write_byte(0x0200, 0x02);

        cpu.tick();
        assert_eq!(cpu.pc(), 0x0201);
        assert_eq!(cpu.cycles_remaining(), 2);
        while cpu.tick() {}
        assert_eq!(cpu.cycles_remaining(), 0);
    }

    #[test]
    fn test_tick_drains_one_cycle_per_call() {
        let (mut cpu, memory) = setup();
        memory.borrow_mut().write_byte(0x0200, 0xEA); // NOP: 2 cycles

        assert!(cpu.tick()); // dispatch, cost deposited
        assert_eq!(cpu.cycles_remaining(), 2);
        assert!(cpu.tick());
        assert_eq!(cpu.cycles_remaining(), 1);
        assert!(!cpu.tick());
        assert_eq!(cpu.cycles_remaining(), 0);
        assert_eq!(cpu.cycles_total(), 3);
    }

    #[test]
    fn test_unused_flag_forced_after_tick() {
        let (mut cpu, memory) = setup();
        memory.borrow_mut().write_byte(0x0200, 0xEA);

        cpu.tick();
        assert!(cpu.status().unused());
    }

    #[test]
    fn test_stack_push_pull_round_trip() {
        let (mut cpu, _memory) = setup();
        let sp_before = cpu.sp();

        cpu.push(0x11);
        cpu.push(0x22);
        assert_eq!(cpu.sp(), sp_before.wrapping_sub(2));
        assert_eq!(cpu.pull(), 0x22);
        assert_eq!(cpu.pull(), 0x11);
        assert_eq!(cpu.sp(), sp_before);
    }

    #[test]
    fn test_stack_lives_in_stack_page() {
        let (mut cpu, memory) = setup();

        cpu.push(0xAB);
        // SP was 0xFD after reset, so the byte landed at 0x01FD.
        assert_eq!(memory.borrow().read_byte(0x01FD), 0xAB);
    }

    #[test]
    fn test_irq_respects_interrupt_disable() {
        let (mut cpu, memory) = setup();
        memory.borrow_mut().write_word(IRQ_VECTOR, 0x3000);

        cpu.status_mut().set_interrupt_disable(true);
        cpu.irq();
        assert_eq!(cpu.pc(), 0x0200); // untouched

        cpu.status_mut().set_interrupt_disable(false);
        cpu.irq();
        assert_eq!(cpu.pc(), 0x3000);
        assert_eq!(cpu.cycles_remaining(), 7);
        assert!(cpu.status().interrupt_disable());
    }

    #[test]
    fn test_nmi_is_unconditional() {
        let (mut cpu, memory) = setup();
        memory.borrow_mut().write_word(NMI_VECTOR, 0x4000);

        cpu.status_mut().set_interrupt_disable(true);
        cpu.nmi();
        assert_eq!(cpu.pc(), 0x4000);
        assert_eq!(cpu.cycles_remaining(), 8);
    }

    #[test]
    fn test_interrupt_pushes_pc_then_status() {
        let (mut cpu, memory) = setup();
        memory.borrow_mut().write_word(IRQ_VECTOR, 0x3000);
        cpu.set_pc(0x1234);

        cpu.irq();

        let mem = memory.borrow();
        assert_eq!(mem.read_byte(0x01FD), 0x12); // PC high
        assert_eq!(mem.read_byte(0x01FC), 0x34); // PC low
        let pushed = mem.read_byte(0x01FB);
        assert_eq!(pushed & 0x10, 0); // B cleared
        assert_eq!(pushed & 0x20, 0x20); // U set
        assert_eq!(pushed & 0x04, 0x04); // I set
    }
}

//! # Addressing Modes
//!
//! The 6502 locates an instruction's operand in one of 13 ways, from "no
//! operand at all" up to double-indirection through the zero page. This
//! module defines the mode tags the instruction table and the CPU's decode
//! stage share; the actual address arithmetic lives in the CPU.
//!
//! An extra `Illegal` tag marks the undocumented opcodes, which have no
//! defined addressing at all.

use std::fmt;

/// How an instruction finds its operand.
///
/// The mode fixes how many bytes follow the opcode and what the CPU does
/// with them:
///
/// | operand bytes | modes |
/// |---|---|
/// | 0 | `Implicit`, `Accumulator` |
/// | 1 | `Immediate`, `ZeroPage`, `ZeroPageX`, `ZeroPageY`, `Relative`, `IndirectX`, `IndirectY` |
/// | 2 | `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Tag for undocumented opcodes. Decoding one is logged and charged the
    /// flat illegal-opcode cost; there is no operand to resolve.
    Illegal,

    /// The instruction needs nothing beyond its opcode byte - what it acts
    /// on is baked into the operation itself (CLC, RTS, NOP, the register
    /// transfers, ...).
    Implicit,

    /// The operand is the accumulator register, not a memory location. Used
    /// by the `A` forms of the shifts and rotates, e.g. `ASL A`.
    Accumulator,

    /// The byte after the opcode *is* the operand value, e.g. `LDA #$10`.
    /// No memory lookup happens beyond the instruction fetch itself.
    Immediate,

    /// One operand byte naming an address in the first 256 bytes of memory,
    /// e.g. `LDA $80`. The short form of `Absolute` for hot variables.
    ZeroPage,

    /// Zero-page address plus the X register, e.g. `LDA $80,X`. The sum
    /// stays inside the zero page: `$FF + 2` lands on `$01`, not `$0101`.
    ZeroPageX,

    /// Zero-page address plus the Y register, with the same in-page
    /// wraparound as `ZeroPageX`. The hardware only wires this up for LDX
    /// and STX.
    ZeroPageY,

    /// One signed byte giving a branch displacement from the address of the
    /// following instruction. Only the eight conditional branches use it;
    /// whether and how far the PC moves is the branch's decision.
    Relative,

    /// Two operand bytes forming a full little-endian 16-bit address, e.g.
    /// `JMP $1234`.
    Absolute,

    /// Absolute address plus the X register, e.g. `LDA $1234,X`. Costs one
    /// extra cycle when the indexed sum lands on a different 256-byte page
    /// than the base address.
    AbsoluteX,

    /// Absolute address plus the Y register, with the same page-crossing
    /// penalty as `AbsoluteX`.
    AbsoluteY,

    /// The two operand bytes point at a location holding the real 16-bit
    /// target, e.g. `JMP ($FFFC)`. JMP is the only user.
    ///
    /// Faithfully reproduces the NMOS silicon's page-boundary bug: a
    /// pointer whose low byte is `$FF` fetches its high byte from the
    /// *start* of the same page rather than the next page.
    Indirect,

    /// "Indexed indirect": the operand byte plus X (wrapping in the zero
    /// page) selects a zero-page pointer, and that pointer's target is the
    /// operand address. `LDA ($40,X)` with X = 4 dereferences the word at
    /// `$44`/`$45`.
    IndirectX,

    /// "Indirect indexed": the operand byte selects a zero-page pointer,
    /// and Y is added *after* dereferencing it. `LDA ($40),Y` reads the
    /// word at `$40`/`$41` and offsets it by Y. Adding Y across a page
    /// boundary costs one extra cycle.
    IndirectY,
}

impl fmt::Display for AddressingMode {
    /// Formats the mode as its conventional three-letter tag (ABS, ZPX, ...).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AddressingMode::Illegal => "ILL",
            AddressingMode::Implicit => "IMP",
            AddressingMode::Accumulator => "ACC",
            AddressingMode::Immediate => "IMM",
            AddressingMode::ZeroPage => "ZPG",
            AddressingMode::ZeroPageX => "ZPX",
            AddressingMode::ZeroPageY => "ZPY",
            AddressingMode::Relative => "REL",
            AddressingMode::Absolute => "ABS",
            AddressingMode::AbsoluteX => "ABX",
            AddressingMode::AbsoluteY => "ABY",
            AddressingMode::Indirect => "IND",
            AddressingMode::IndirectX => "INX",
            AddressingMode::IndirectY => "INY",
        };
        write!(f, "{}", tag)
    }
}

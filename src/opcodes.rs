//! # Instruction Metadata Table
//!
//! This module contains the opcode-indexed metadata table that serves as the
//! single source of truth for all 6502 instruction information, shared by the
//! CPU's decoder and the assembler's encoder.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Tagged `Mnemonic::Ill`
//!
//! Each entry carries the mnemonic, the addressing mode, the instruction
//! width in bytes, the published base cycle count, and whether indexed
//! addressing can add a page-crossing cycle.

use std::fmt;

use crate::addressing::AddressingMode;

/// Three-letter instruction mnemonic.
///
/// Covers the 56 documented 6502 instructions plus `Ill` for the
/// undocumented opcodes, which this emulator treats as two-cycle NOPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    /// Undocumented opcode.
    Ill,

    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Parses a mnemonic token, case-insensitively. Anything that is not one
    /// of the 56 documented mnemonics comes back as `Ill`, matching the
    /// hardware's indifference to unknown byte patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::Mnemonic;
    ///
    /// assert_eq!(Mnemonic::parse("LDA"), Mnemonic::Lda);
    /// assert_eq!(Mnemonic::parse("lda"), Mnemonic::Lda);
    /// assert_eq!(Mnemonic::parse("FOO"), Mnemonic::Ill);
    /// ```
    pub fn parse(token: &str) -> Mnemonic {
        match token.to_ascii_uppercase().as_str() {
            "ADC" => Mnemonic::Adc,
            "AND" => Mnemonic::And,
            "ASL" => Mnemonic::Asl,
            "BCC" => Mnemonic::Bcc,
            "BCS" => Mnemonic::Bcs,
            "BEQ" => Mnemonic::Beq,
            "BIT" => Mnemonic::Bit,
            "BMI" => Mnemonic::Bmi,
            "BNE" => Mnemonic::Bne,
            "BPL" => Mnemonic::Bpl,
            "BRK" => Mnemonic::Brk,
            "BVC" => Mnemonic::Bvc,
            "BVS" => Mnemonic::Bvs,
            "CLC" => Mnemonic::Clc,
            "CLD" => Mnemonic::Cld,
            "CLI" => Mnemonic::Cli,
            "CLV" => Mnemonic::Clv,
            "CMP" => Mnemonic::Cmp,
            "CPX" => Mnemonic::Cpx,
            "CPY" => Mnemonic::Cpy,
            "DEC" => Mnemonic::Dec,
            "DEX" => Mnemonic::Dex,
            "DEY" => Mnemonic::Dey,
            "EOR" => Mnemonic::Eor,
            "INC" => Mnemonic::Inc,
            "INX" => Mnemonic::Inx,
            "INY" => Mnemonic::Iny,
            "JMP" => Mnemonic::Jmp,
            "JSR" => Mnemonic::Jsr,
            "LDA" => Mnemonic::Lda,
            "LDX" => Mnemonic::Ldx,
            "LDY" => Mnemonic::Ldy,
            "LSR" => Mnemonic::Lsr,
            "NOP" => Mnemonic::Nop,
            "ORA" => Mnemonic::Ora,
            "PHA" => Mnemonic::Pha,
            "PHP" => Mnemonic::Php,
            "PLA" => Mnemonic::Pla,
            "PLP" => Mnemonic::Plp,
            "ROL" => Mnemonic::Rol,
            "ROR" => Mnemonic::Ror,
            "RTI" => Mnemonic::Rti,
            "RTS" => Mnemonic::Rts,
            "SBC" => Mnemonic::Sbc,
            "SEC" => Mnemonic::Sec,
            "SED" => Mnemonic::Sed,
            "SEI" => Mnemonic::Sei,
            "STA" => Mnemonic::Sta,
            "STX" => Mnemonic::Stx,
            "STY" => Mnemonic::Sty,
            "TAX" => Mnemonic::Tax,
            "TAY" => Mnemonic::Tay,
            "TSX" => Mnemonic::Tsx,
            "TXA" => Mnemonic::Txa,
            "TXS" => Mnemonic::Txs,
            "TYA" => Mnemonic::Tya,
            _ => Mnemonic::Ill,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Mnemonic::Ill => "ILL",
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        };
        write!(f, "{}", tag)
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Mnemonic, INSTRUCTION_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &INSTRUCTION_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.bytes, 2);
/// assert_eq!(lda_imm.base_cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDetail {
    /// The opcode byte itself, equal to the entry's table index.
    pub opcode: u8,

    /// Instruction mnemonic; `Mnemonic::Ill` for undocumented opcodes.
    pub mnemonic: Mnemonic,

    /// Addressing mode used to locate the operand.
    pub mode: AddressingMode,

    /// Total instruction width including the opcode byte (1-3).
    pub bytes: u8,

    /// Published base cycle count before page-crossing penalties.
    pub base_cycles: u8,

    /// Whether indexed addressing adds one cycle on a page crossing.
    pub page_cross_extra: bool,
}

const fn op(
    opcode: u8,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    bytes: u8,
    base_cycles: u8,
    page_cross_extra: bool,
) -> InstructionDetail {
    InstructionDetail {
        opcode,
        mnemonic,
        mode,
        bytes,
        base_cycles,
        page_cross_extra,
    }
}

// Undocumented opcodes decode to a one-byte, two-cycle NOP.
const fn ill(opcode: u8) -> InstructionDetail {
    op(opcode, Mnemonic::Ill, AddressingMode::Illegal, 1, 2, false)
}

use crate::addressing::AddressingMode as Am;
use self::Mnemonic as M;

/// Opcode metadata table indexed by the opcode byte.
///
/// The mapping for 0x00-0xFE reproduces the published NMOS 6502 references
/// verbatim; 151 entries are documented instructions and the rest are
/// `Mnemonic::Ill`. Indexing by any `u8` is always in bounds.
///
/// # Examples
///
/// ```
/// use emu6502::{Mnemonic, INSTRUCTION_TABLE};
///
/// let brk = &INSTRUCTION_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &INSTRUCTION_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, Mnemonic::Ill);
/// ```
pub static INSTRUCTION_TABLE: [InstructionDetail; 256] = [
    op(0x00, M::Brk, Am::Implicit, 1, 7, false),
    op(0x01, M::Ora, Am::IndirectX, 2, 6, false),
    ill(0x02),
    ill(0x03),
    ill(0x04),
    op(0x05, M::Ora, Am::ZeroPage, 2, 3, false),
    op(0x06, M::Asl, Am::ZeroPage, 2, 5, false),
    ill(0x07),
    op(0x08, M::Php, Am::Implicit, 1, 3, false),
    op(0x09, M::Ora, Am::Immediate, 2, 2, false),
    op(0x0A, M::Asl, Am::Accumulator, 1, 2, false),
    ill(0x0B),
    ill(0x0C),
    op(0x0D, M::Ora, Am::Absolute, 3, 4, false),
    op(0x0E, M::Asl, Am::Absolute, 3, 6, false),
    ill(0x0F),
    op(0x10, M::Bpl, Am::Relative, 2, 2, true),
    op(0x11, M::Ora, Am::IndirectY, 2, 5, true),
    ill(0x12),
    ill(0x13),
    ill(0x14),
    op(0x15, M::Ora, Am::ZeroPageX, 2, 4, false),
    op(0x16, M::Asl, Am::ZeroPageX, 2, 6, false),
    ill(0x17),
    op(0x18, M::Clc, Am::Implicit, 1, 2, false),
    op(0x19, M::Ora, Am::AbsoluteY, 3, 4, true),
    ill(0x1A),
    ill(0x1B),
    ill(0x1C),
    op(0x1D, M::Ora, Am::AbsoluteX, 3, 4, true),
    op(0x1E, M::Asl, Am::AbsoluteX, 3, 7, false),
    ill(0x1F),
    op(0x20, M::Jsr, Am::Absolute, 3, 6, false),
    op(0x21, M::And, Am::IndirectX, 2, 6, false),
    ill(0x22),
    ill(0x23),
    op(0x24, M::Bit, Am::ZeroPage, 2, 3, false),
    op(0x25, M::And, Am::ZeroPage, 2, 3, false),
    op(0x26, M::Rol, Am::ZeroPage, 2, 5, false),
    ill(0x27),
    op(0x28, M::Plp, Am::Implicit, 1, 4, false),
    op(0x29, M::And, Am::Immediate, 2, 2, false),
    op(0x2A, M::Rol, Am::Accumulator, 1, 2, false),
    ill(0x2B),
    op(0x2C, M::Bit, Am::Absolute, 3, 4, false),
    op(0x2D, M::And, Am::Absolute, 3, 4, false),
    op(0x2E, M::Rol, Am::Absolute, 3, 6, false),
    ill(0x2F),
    op(0x30, M::Bmi, Am::Relative, 2, 2, true),
    op(0x31, M::And, Am::IndirectY, 2, 5, true),
    ill(0x32),
    ill(0x33),
    ill(0x34),
    op(0x35, M::And, Am::ZeroPageX, 2, 4, false),
    op(0x36, M::Rol, Am::ZeroPageX, 2, 6, false),
    ill(0x37),
    op(0x38, M::Sec, Am::Implicit, 1, 2, false),
    op(0x39, M::And, Am::AbsoluteY, 3, 4, true),
    ill(0x3A),
    ill(0x3B),
    ill(0x3C),
    op(0x3D, M::And, Am::AbsoluteX, 3, 4, true),
    op(0x3E, M::Rol, Am::AbsoluteX, 3, 7, false),
    ill(0x3F),
    op(0x40, M::Rti, Am::Implicit, 1, 6, false),
    op(0x41, M::Eor, Am::IndirectX, 2, 6, false),
    ill(0x42),
    ill(0x43),
    ill(0x44),
    op(0x45, M::Eor, Am::ZeroPage, 2, 3, false),
    op(0x46, M::Lsr, Am::ZeroPage, 2, 5, false),
    ill(0x47),
    op(0x48, M::Pha, Am::Implicit, 1, 3, false),
    op(0x49, M::Eor, Am::Immediate, 2, 2, false),
    op(0x4A, M::Lsr, Am::Accumulator, 1, 2, false),
    ill(0x4B),
    op(0x4C, M::Jmp, Am::Absolute, 3, 3, false),
    op(0x4D, M::Eor, Am::Absolute, 3, 4, false),
    op(0x4E, M::Lsr, Am::Absolute, 3, 6, false),
    ill(0x4F),
    op(0x50, M::Bvc, Am::Relative, 2, 2, true),
    op(0x51, M::Eor, Am::IndirectY, 2, 5, true),
    ill(0x52),
    ill(0x53),
    ill(0x54),
    op(0x55, M::Eor, Am::ZeroPageX, 2, 4, false),
    op(0x56, M::Lsr, Am::ZeroPageX, 2, 6, false),
    ill(0x57),
    op(0x58, M::Cli, Am::Implicit, 1, 2, false),
    op(0x59, M::Eor, Am::AbsoluteY, 3, 4, true),
    ill(0x5A),
    ill(0x5B),
    ill(0x5C),
    op(0x5D, M::Eor, Am::AbsoluteX, 3, 4, true),
    op(0x5E, M::Lsr, Am::AbsoluteX, 3, 7, false),
    ill(0x5F),
    op(0x60, M::Rts, Am::Implicit, 1, 6, false),
    op(0x61, M::Adc, Am::IndirectX, 2, 6, false),
    ill(0x62),
    ill(0x63),
    ill(0x64),
    op(0x65, M::Adc, Am::ZeroPage, 2, 3, false),
    op(0x66, M::Ror, Am::ZeroPage, 2, 5, false),
    ill(0x67),
    op(0x68, M::Pla, Am::Implicit, 1, 4, false),
    op(0x69, M::Adc, Am::Immediate, 2, 2, false),
    op(0x6A, M::Ror, Am::Accumulator, 1, 2, false),
    ill(0x6B),
    op(0x6C, M::Jmp, Am::Indirect, 3, 5, false),
    op(0x6D, M::Adc, Am::Absolute, 3, 4, false),
    op(0x6E, M::Ror, Am::Absolute, 3, 6, false),
    ill(0x6F),
    op(0x70, M::Bvs, Am::Relative, 2, 2, true),
    op(0x71, M::Adc, Am::IndirectY, 2, 5, true),
    ill(0x72),
    ill(0x73),
    ill(0x74),
    op(0x75, M::Adc, Am::ZeroPageX, 2, 4, false),
    op(0x76, M::Ror, Am::ZeroPageX, 2, 6, false),
    ill(0x77),
    op(0x78, M::Sei, Am::Implicit, 1, 2, false),
    op(0x79, M::Adc, Am::AbsoluteY, 3, 4, true),
    ill(0x7A),
    ill(0x7B),
    ill(0x7C),
    op(0x7D, M::Adc, Am::AbsoluteX, 3, 4, true),
    op(0x7E, M::Ror, Am::AbsoluteX, 3, 7, false),
    ill(0x7F),
    ill(0x80),
    op(0x81, M::Sta, Am::IndirectX, 2, 6, false),
    ill(0x82),
    ill(0x83),
    op(0x84, M::Sty, Am::ZeroPage, 2, 3, false),
    op(0x85, M::Sta, Am::ZeroPage, 2, 3, false),
    op(0x86, M::Stx, Am::ZeroPage, 2, 3, false),
    ill(0x87),
    op(0x88, M::Dey, Am::Implicit, 1, 2, false),
    ill(0x89),
    op(0x8A, M::Txa, Am::Implicit, 1, 2, false),
    ill(0x8B),
    op(0x8C, M::Sty, Am::Absolute, 3, 4, false),
    op(0x8D, M::Sta, Am::Absolute, 3, 4, false),
    op(0x8E, M::Stx, Am::Absolute, 3, 4, false),
    ill(0x8F),
    op(0x90, M::Bcc, Am::Relative, 2, 2, true),
    op(0x91, M::Sta, Am::IndirectY, 2, 6, false),
    ill(0x92),
    ill(0x93),
    op(0x94, M::Sty, Am::ZeroPageX, 2, 4, false),
    op(0x95, M::Sta, Am::ZeroPageX, 2, 4, false),
    op(0x96, M::Stx, Am::ZeroPageY, 2, 4, false),
    ill(0x97),
    op(0x98, M::Tya, Am::Implicit, 1, 2, false),
    op(0x99, M::Sta, Am::AbsoluteY, 3, 5, false),
    op(0x9A, M::Txs, Am::Implicit, 1, 2, false),
    ill(0x9B),
    ill(0x9C),
    op(0x9D, M::Sta, Am::AbsoluteX, 3, 5, false),
    ill(0x9E),
    ill(0x9F),
    op(0xA0, M::Ldy, Am::Immediate, 2, 2, false),
    op(0xA1, M::Lda, Am::IndirectX, 2, 6, false),
    op(0xA2, M::Ldx, Am::Immediate, 2, 2, false),
    ill(0xA3),
    op(0xA4, M::Ldy, Am::ZeroPage, 2, 3, false),
    op(0xA5, M::Lda, Am::ZeroPage, 2, 3, false),
    op(0xA6, M::Ldx, Am::ZeroPage, 2, 3, false),
    ill(0xA7),
    op(0xA8, M::Tay, Am::Implicit, 1, 2, false),
    op(0xA9, M::Lda, Am::Immediate, 2, 2, false),
    op(0xAA, M::Tax, Am::Implicit, 1, 2, false),
    ill(0xAB),
    op(0xAC, M::Ldy, Am::Absolute, 3, 4, false),
    op(0xAD, M::Lda, Am::Absolute, 3, 4, false),
    op(0xAE, M::Ldx, Am::Absolute, 3, 4, false),
    ill(0xAF),
    op(0xB0, M::Bcs, Am::Relative, 2, 2, true),
    op(0xB1, M::Lda, Am::IndirectY, 2, 5, true),
    ill(0xB2),
    ill(0xB3),
    op(0xB4, M::Ldy, Am::ZeroPageX, 2, 4, false),
    op(0xB5, M::Lda, Am::ZeroPageX, 2, 4, false),
    op(0xB6, M::Ldx, Am::ZeroPageY, 2, 4, false),
    ill(0xB7),
    op(0xB8, M::Clv, Am::Implicit, 1, 2, false),
    op(0xB9, M::Lda, Am::AbsoluteY, 3, 4, true),
    op(0xBA, M::Tsx, Am::Implicit, 1, 2, false),
    ill(0xBB),
    op(0xBC, M::Ldy, Am::AbsoluteX, 3, 4, true),
    op(0xBD, M::Lda, Am::AbsoluteX, 3, 4, true),
    op(0xBE, M::Ldx, Am::AbsoluteY, 3, 4, true),
    ill(0xBF),
    op(0xC0, M::Cpy, Am::Immediate, 2, 2, false),
    op(0xC1, M::Cmp, Am::IndirectX, 2, 6, false),
    ill(0xC2),
    ill(0xC3),
    op(0xC4, M::Cpy, Am::ZeroPage, 2, 3, false),
    op(0xC5, M::Cmp, Am::ZeroPage, 2, 3, false),
    op(0xC6, M::Dec, Am::ZeroPage, 2, 5, false),
    ill(0xC7),
    op(0xC8, M::Iny, Am::Implicit, 1, 2, false),
    op(0xC9, M::Cmp, Am::Immediate, 2, 2, false),
    op(0xCA, M::Dex, Am::Implicit, 1, 2, false),
    ill(0xCB),
    op(0xCC, M::Cpy, Am::Absolute, 3, 4, false),
    op(0xCD, M::Cmp, Am::Absolute, 3, 4, false),
    op(0xCE, M::Dec, Am::Absolute, 3, 6, false),
    ill(0xCF),
    op(0xD0, M::Bne, Am::Relative, 2, 2, true),
    op(0xD1, M::Cmp, Am::IndirectY, 2, 5, true),
    ill(0xD2),
    ill(0xD3),
    ill(0xD4),
    op(0xD5, M::Cmp, Am::ZeroPageX, 2, 4, false),
    op(0xD6, M::Dec, Am::ZeroPageX, 2, 6, false),
    ill(0xD7),
    op(0xD8, M::Cld, Am::Implicit, 1, 2, false),
    op(0xD9, M::Cmp, Am::AbsoluteY, 3, 4, true),
    ill(0xDA),
    ill(0xDB),
    ill(0xDC),
    op(0xDD, M::Cmp, Am::AbsoluteX, 3, 4, true),
    op(0xDE, M::Dec, Am::AbsoluteX, 3, 7, false),
    ill(0xDF),
    op(0xE0, M::Cpx, Am::Immediate, 2, 2, false),
    op(0xE1, M::Sbc, Am::IndirectX, 2, 6, false),
    ill(0xE2),
    ill(0xE3),
    op(0xE4, M::Cpx, Am::ZeroPage, 2, 3, false),
    op(0xE5, M::Sbc, Am::ZeroPage, 2, 3, false),
    op(0xE6, M::Inc, Am::ZeroPage, 2, 5, false),
    ill(0xE7),
    op(0xE8, M::Inx, Am::Implicit, 1, 2, false),
    op(0xE9, M::Sbc, Am::Immediate, 2, 2, false),
    op(0xEA, M::Nop, Am::Implicit, 1, 2, false),
    ill(0xEB),
    op(0xEC, M::Cpx, Am::Absolute, 3, 4, false),
    op(0xED, M::Sbc, Am::Absolute, 3, 4, false),
    op(0xEE, M::Inc, Am::Absolute, 3, 6, false),
    ill(0xEF),
    op(0xF0, M::Beq, Am::Relative, 2, 2, true),
    op(0xF1, M::Sbc, Am::IndirectY, 2, 5, true),
    ill(0xF2),
    ill(0xF3),
    ill(0xF4),
    op(0xF5, M::Sbc, Am::ZeroPageX, 2, 4, false),
    op(0xF6, M::Inc, Am::ZeroPageX, 2, 6, false),
    ill(0xF7),
    op(0xF8, M::Sed, Am::Implicit, 1, 2, false),
    op(0xF9, M::Sbc, Am::AbsoluteY, 3, 4, true),
    ill(0xFA),
    ill(0xFB),
    ill(0xFC),
    op(0xFD, M::Sbc, Am::AbsoluteX, 3, 4, true),
    op(0xFE, M::Inc, Am::AbsoluteX, 3, 7, false),
    ill(0xFF),
];

/// Reverse lookup: the first table entry matching a mnemonic/mode pair.
///
/// Used by the assembler to turn a parsed line into an opcode byte. When no
/// documented instruction uses the pair, the ILL sentinel at opcode 0x02 is
/// returned.
///
/// # Examples
///
/// ```
/// use emu6502::{find_instruction, AddressingMode, Mnemonic};
///
/// let lda = find_instruction(Mnemonic::Lda, AddressingMode::Immediate);
/// assert_eq!(lda.opcode, 0xA9);
///
/// let bogus = find_instruction(Mnemonic::Lda, AddressingMode::Relative);
/// assert_eq!(bogus.mnemonic, Mnemonic::Ill);
/// assert_eq!(bogus.opcode, 0x02);
/// ```
pub fn find_instruction(mnemonic: Mnemonic, mode: AddressingMode) -> &'static InstructionDetail {
    INSTRUCTION_TABLE
        .iter()
        .find(|detail| detail.mnemonic == mnemonic && detail.mode == mode)
        .unwrap_or(&INSTRUCTION_TABLE[0x02])
}

//! # 6502 Assembler
//!
//! A single-pass assembler turning source text into machine code plus the
//! origin address to load it at.
//!
//! ## Source format
//!
//! - Tokens are whitespace separated; `;` starts an end-of-line comment.
//! - Input is case-insensitive (normalized to uppercase).
//! - `NAME:` declares a label bound to the current PC; a bare identifier on
//!   its own line does the same.
//! - `NAME = expr` (or `NAME expr`) binds a symbol to an evaluated
//!   expression; `* = expr` sets the current PC.
//! - Expression literals: `$HEX`, `%BIN`, decimal, and `*` for the current
//!   PC. Symbol names are substituted textually before expressions parse.
//! - Operand shapes select the addressing mode; see
//!   [`parser::detect_operand`].
//!
//! Because assembly is a single pass, a symbol must be defined before the
//! line that uses it; backward branch targets work, forward ones do not.
//!
//! ## Failure model
//!
//! The assembler never aborts. Malformed expressions and mnemonic/mode pairs
//! with no encoding are logged and the offending line emits nothing; whatever
//! assembled cleanly is returned.
//!
//! # Examples
//!
//! ```
//! use emu6502::assembler::assemble;
//!
//! let program = assemble("LOOP: LDA #$42\n    BNE LOOP");
//! assert_eq!(program.origin, 0x0200);
//! assert_eq!(program.bytecode, vec![0xA9, 0x42, 0xD0, 0xFC]);
//! ```

pub mod parser;
pub mod symbol_table;

pub use symbol_table::{Symbol, SymbolTable};

use crate::addressing::AddressingMode;
use crate::opcodes::{find_instruction, Mnemonic};

/// Load address used when the source never sets one with `* = expr`.
pub const DEFAULT_ORIGIN: u16 = 0x0200;

/// One assembled source line, retained for listing output. Informational;
/// the byte code alone is authoritative for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Source line number (1-indexed).
    pub line_number: usize,

    /// Address this line assembled to.
    pub pc: u16,

    /// Emitted opcode byte.
    pub opcode: u8,

    /// Parsed mnemonic.
    pub mnemonic: Mnemonic,

    /// Resolved addressing mode.
    pub mode: AddressingMode,

    /// Resolved operand value (0 for implied/accumulator).
    pub operand: u16,
}

/// Output of [`assemble`]: byte code, the origin to load it at, and per-line
/// metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Address of the first emitted instruction.
    pub origin: u16,

    /// Machine code: per line, an opcode byte then 0-2 operand bytes in
    /// little-endian order.
    pub bytecode: Vec<u8>,

    /// Per-line source metadata in emission order.
    pub lines: Vec<Line>,
}

impl Program {
    /// Whether assembly produced any byte code at all.
    pub fn is_empty(&self) -> bool {
        self.bytecode.is_empty()
    }
}

fn is_branch(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::Bcc
            | Mnemonic::Bcs
            | Mnemonic::Beq
            | Mnemonic::Bmi
            | Mnemonic::Bne
            | Mnemonic::Bpl
            | Mnemonic::Bvc
            | Mnemonic::Bvs
    )
}

/// Assembles source text into a [`Program`].
///
/// Lines that fail to parse are logged and dropped; the function itself
/// always returns.
pub fn assemble(source: &str) -> Program {
    let mut symbols = SymbolTable::new();
    let mut program = Program {
        origin: DEFAULT_ORIGIN,
        ..Program::default()
    };

    let mut pc = DEFAULT_ORIGIN;
    let mut origin_pinned = false;

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;

        // Comments run to end of line; everything else is case-insensitive.
        let text = raw_line.split(';').next().unwrap_or("");
        let text = text.to_ascii_uppercase();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        // Assignments: `NAME = expr` binds a symbol, `* = expr` moves PC.
        if let Some((lhs, rhs)) = text.split_once('=') {
            let lhs = lhs.trim();
            let rhs = symbols.substitute(rhs.trim());

            match parser::parse_number(&rhs, pc) {
                Ok(value) if lhs == "*" => pc = value,
                Ok(value) => symbols.define(lhs, value, line_number),
                Err(error) => {
                    log::warn!("line {}: {}", line_number, error);
                }
            }
            continue;
        }

        let mut tokens: Vec<&str> = text.split_whitespace().collect();

        // Leading labels: `LOOP: DEX` or a whole line of label definitions.
        while let Some(first) = tokens.first() {
            if let Some(name) = first.strip_suffix(':') {
                symbols.define(name, pc, line_number);
                tokens.remove(0);
            } else {
                break;
            }
        }

        let Some(&head) = tokens.first() else {
            continue;
        };

        let mnemonic = Mnemonic::parse(head);
        if mnemonic == Mnemonic::Ill {
            match tokens.len() {
                // A bare identifier becomes a label at the current PC.
                1 => symbols.define(head, pc, line_number),
                // `NAME expr` assignment without the equals sign.
                2 => {
                    let rhs = symbols.substitute(tokens[1]);
                    match parser::parse_number(&rhs, pc) {
                        Ok(value) => symbols.define(head, value, line_number),
                        Err(error) => log::warn!("line {}: {}", line_number, error),
                    }
                }
                _ => log::warn!("line {}: unknown mnemonic '{}'", line_number, head),
            }
            continue;
        }

        // Everything after the mnemonic is the operand; rejoin without
        // whitespace so `( $40 , X )` and `($40,X)` read the same.
        let operand_text = symbols.substitute(&tokens[1..].concat());

        let (mut mode, mut value) = match parser::detect_operand(&operand_text, pc) {
            Ok(parsed) => parsed,
            Err(error) => {
                log::warn!("line {}: {}", line_number, error);
                continue;
            }
        };

        // Branches address by relative offset from their own successor; an
        // absolute target within signed 8-bit reach is rewritten, anything
        // further keeps the parsed mode and fails the table lookup below.
        if is_branch(mnemonic) && mode != AddressingMode::Relative {
            let offset = value as i32 - (pc as i32 + 2);
            if (-128..=127).contains(&offset) {
                mode = AddressingMode::Relative;
                value = (offset as i8) as u8 as u16;
            }
        }

        let detail = find_instruction(mnemonic, mode);
        if detail.mnemonic == Mnemonic::Ill {
            log::warn!(
                "line {}: no {} encoding with {} addressing",
                line_number,
                mnemonic,
                mode
            );
            continue;
        }

        if !origin_pinned {
            program.origin = pc;
            origin_pinned = true;
        }

        program.bytecode.push(detail.opcode);
        match detail.bytes {
            2 => program.bytecode.push((value & 0xFF) as u8),
            3 => {
                program.bytecode.push((value & 0xFF) as u8);
                program.bytecode.push((value >> 8) as u8);
            }
            _ => {}
        }

        program.lines.push(Line {
            line_number,
            pc,
            opcode: detail.opcode,
            mnemonic,
            mode,
            operand: value,
        });

        pc = pc.wrapping_add(detail.bytes as u16);
    }

    program
}

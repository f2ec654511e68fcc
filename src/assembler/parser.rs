//! Expression and operand parsing for the assembler
//!
//! Operand text arriving here has already had symbols substituted, so the
//! grammar is small: numeric literals in three bases, the `*` current-PC
//! marker, and the handful of punctuation shapes that select an addressing
//! mode.

use std::fmt;

use crate::addressing::AddressingMode;

/// An expression the parser could not evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Empty expression where a value was required.
    Empty,

    /// A literal whose digits did not parse in its base.
    BadLiteral(String),

    /// Operand punctuation that matches no addressing-mode shape.
    BadOperand(String),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Empty => write!(f, "empty expression"),
            ExprError::BadLiteral(text) => write!(f, "failed to parse value \"{}\"", text),
            ExprError::BadOperand(text) => write!(f, "invalid operand \"{}\"", text),
        }
    }
}

/// Evaluates an expression literal: `$HEX`, `%BIN`, decimal (optionally
/// signed; negatives wrap to two's complement), or `*` for the current PC.
///
/// # Examples
///
/// ```
/// use emu6502::assembler::parser::parse_number;
///
/// assert_eq!(parse_number("$FFFC", 0), Ok(0xFFFC));
/// assert_eq!(parse_number("%1010", 0), Ok(10));
/// assert_eq!(parse_number("42", 0), Ok(42));
/// assert_eq!(parse_number("*", 0x0200), Ok(0x0200));
/// assert_eq!(parse_number("-2", 0), Ok(0xFFFE));
/// ```
pub fn parse_number(text: &str, pc: u16) -> Result<u16, ExprError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExprError::Empty);
    }

    if text == "*" {
        return Ok(pc);
    }

    if let Some(hex) = text.strip_prefix('$') {
        return u16::from_str_radix(hex, 16).map_err(|_| ExprError::BadLiteral(text.to_string()));
    }

    if let Some(bin) = text.strip_prefix('%') {
        return u16::from_str_radix(bin, 2).map_err(|_| ExprError::BadLiteral(text.to_string()));
    }

    // Signed decimals wrap, so relative offsets like -2 become 0xFFFE.
    text.parse::<i32>()
        .ok()
        .filter(|value| (-0x8000..=0xFFFF).contains(value))
        .map(|value| value as u16)
        .ok_or_else(|| ExprError::BadLiteral(text.to_string()))
}

/// Classifies an operand string into an addressing mode and value.
///
/// The shapes recognized, in the order tried:
///
/// - empty → Implicit, `A` → Accumulator
/// - `#v` → Immediate
/// - leading `*`, `+`, or `-` → Relative (explicit PC-relative offset)
/// - `(v,X)` → IndirectX, `(v),Y` → IndirectY, `(v)` → Indirect
/// - `v,X` / `v,Y` → zero-page or absolute indexed, by value range
/// - `v` → ZeroPage when the value fits a byte, Absolute otherwise
pub fn detect_operand(operand: &str, pc: u16) -> Result<(AddressingMode, u16), ExprError> {
    let operand = operand.trim();

    if operand.is_empty() {
        return Ok((AddressingMode::Implicit, 0));
    }

    if operand.eq_ignore_ascii_case("A") {
        return Ok((AddressingMode::Accumulator, 0));
    }

    if let Some(value) = operand.strip_prefix('#') {
        return Ok((AddressingMode::Immediate, parse_number(value, pc)?));
    }

    // Explicit relative offsets: *+5, +5, -3. The leading * is dropped; the
    // sign is part of the value.
    if let Some(rest) = operand.strip_prefix('*') {
        let value = parse_number(rest, pc)?;
        return Ok((AddressingMode::Relative, value & 0x00FF));
    }
    if operand.starts_with('+') || operand.starts_with('-') {
        let value = parse_number(operand.trim_start_matches('+'), pc)?;
        return Ok((AddressingMode::Relative, value & 0x00FF));
    }

    if let Some(inner) = operand.strip_prefix('(') {
        return detect_indirect(operand, inner, pc);
    }

    if let Some((base, index)) = operand.split_once(',') {
        let value = parse_number(base, pc)?;
        let mode = match (index.trim(), value > 0x00FF) {
            ("X", false) => AddressingMode::ZeroPageX,
            ("X", true) => AddressingMode::AbsoluteX,
            ("Y", false) => AddressingMode::ZeroPageY,
            ("Y", true) => AddressingMode::AbsoluteY,
            _ => return Err(ExprError::BadOperand(operand.to_string())),
        };
        return Ok((mode, value));
    }

    let value = parse_number(operand, pc)?;
    if value > 0x00FF {
        Ok((AddressingMode::Absolute, value))
    } else {
        Ok((AddressingMode::ZeroPage, value))
    }
}

/// The three parenthesized shapes: `(v)`, `(v,X)`, `(v),Y`.
fn detect_indirect(operand: &str, inner: &str, pc: u16) -> Result<(AddressingMode, u16), ExprError> {
    let close = inner
        .find(')')
        .ok_or_else(|| ExprError::BadOperand(operand.to_string()))?;

    match inner.find(',') {
        // Comma inside the parentheses: (v,X)
        Some(comma) if comma < close => {
            let value = parse_number(&inner[..comma], pc)?;
            if !inner[comma + 1..close].trim().eq_ignore_ascii_case("X") {
                return Err(ExprError::BadOperand(operand.to_string()));
            }
            Ok((AddressingMode::IndirectX, value))
        }
        // Comma after the closing parenthesis: (v),Y
        Some(_) => {
            let value = parse_number(&inner[..close], pc)?;
            if !inner[close + 1..].trim_start_matches(',').trim().eq_ignore_ascii_case("Y") {
                return Err(ExprError::BadOperand(operand.to_string()));
            }
            Ok((AddressingMode::IndirectY, value))
        }
        None => {
            let value = parse_number(&inner[..close], pc)?;
            Ok((AddressingMode::Indirect, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_bases() {
        assert_eq!(parse_number("$0200", 0), Ok(0x0200));
        assert_eq!(parse_number("$ff", 0), Ok(0xFF));
        assert_eq!(parse_number("%11111111", 0), Ok(255));
        assert_eq!(parse_number("1000", 0), Ok(1000));
        assert_eq!(parse_number("*", 0x0234), Ok(0x0234));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(parse_number("$XYZ", 0).is_err());
        assert!(parse_number("%234", 0).is_err());
        assert!(parse_number("12AB", 0).is_err());
        assert!(parse_number("", 0).is_err());
        assert!(parse_number("99999", 0).is_err());
    }

    #[test]
    fn test_detect_implied_and_accumulator() {
        assert_eq!(detect_operand("", 0), Ok((AddressingMode::Implicit, 0)));
        assert_eq!(detect_operand("A", 0), Ok((AddressingMode::Accumulator, 0)));
    }

    #[test]
    fn test_detect_immediate() {
        assert_eq!(
            detect_operand("#$42", 0),
            Ok((AddressingMode::Immediate, 0x42))
        );
        assert_eq!(
            detect_operand("#255", 0),
            Ok((AddressingMode::Immediate, 255))
        );
    }

    #[test]
    fn test_detect_zero_page_vs_absolute() {
        assert_eq!(detect_operand("$42", 0), Ok((AddressingMode::ZeroPage, 0x42)));
        assert_eq!(
            detect_operand("$0242", 0),
            Ok((AddressingMode::Absolute, 0x0242))
        );
    }

    #[test]
    fn test_detect_indexed() {
        assert_eq!(
            detect_operand("$42,X", 0),
            Ok((AddressingMode::ZeroPageX, 0x42))
        );
        assert_eq!(
            detect_operand("$42,Y", 0),
            Ok((AddressingMode::ZeroPageY, 0x42))
        );
        assert_eq!(
            detect_operand("$0242,X", 0),
            Ok((AddressingMode::AbsoluteX, 0x0242))
        );
        assert_eq!(
            detect_operand("$0242,Y", 0),
            Ok((AddressingMode::AbsoluteY, 0x0242))
        );
    }

    #[test]
    fn test_detect_indirect_shapes() {
        assert_eq!(
            detect_operand("($0200)", 0),
            Ok((AddressingMode::Indirect, 0x0200))
        );
        assert_eq!(
            detect_operand("($40,X)", 0),
            Ok((AddressingMode::IndirectX, 0x40))
        );
        assert_eq!(
            detect_operand("($40),Y", 0),
            Ok((AddressingMode::IndirectY, 0x40))
        );
    }

    #[test]
    fn test_detect_relative_prefixes() {
        assert_eq!(
            detect_operand("*+5", 0x0200),
            Ok((AddressingMode::Relative, 5))
        );
        assert_eq!(
            detect_operand("-3", 0x0200),
            Ok((AddressingMode::Relative, 0xFD))
        );
    }

    #[test]
    fn test_detect_rejects_malformed() {
        assert!(detect_operand("($40", 0).is_err());
        assert!(detect_operand("$40,Q", 0).is_err());
        assert!(detect_operand("($40,Y)", 0).is_err());
    }
}

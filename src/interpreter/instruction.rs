//! Befunge-93 instruction set
//!
//! The alphabet is closed, so decoding is a single exhaustive mapping from
//! a grid character to an [`Instruction`]. Anything outside the alphabet
//! (including the unimplemented input instructions `&` and `~`) decodes to
//! [`Instruction::Nop`].

use super::constants::TERMINATOR;
use super::pointer::Direction;

/// Binary arithmetic operators, applied as `b op a`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    /// Apply the operator. Division and remainder by zero yield `0`;
    /// overflow wraps.
    pub fn apply(self, b: i64, a: i64) -> i64 {
        match self {
            ArithOp::Add => b.wrapping_add(a),
            ArithOp::Sub => b.wrapping_sub(a),
            ArithOp::Mul => b.wrapping_mul(a),
            ArithOp::Div if a == 0 => 0,
            ArithOp::Div => b.wrapping_div(a),
            ArithOp::Rem if a == 0 => 0,
            ArithOp::Rem => b.wrapping_rem(a),
        }
    }
}

/// A decoded grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `0`-`9`
    Digit(u8),
    /// `+ - * / %`
    Arith(ArithOp),
    /// `!`
    Not,
    /// `` ` ``
    Greater,
    /// `> < ^ v`
    Go(Direction),
    /// `?`
    Random,
    /// `_`
    HorizontalIf,
    /// `|`
    VerticalIf,
    /// `"`
    StringMode,
    /// `:`
    Duplicate,
    /// `\`
    Swap,
    /// `$`
    Discard,
    /// `.`
    OutputInt,
    /// `,`
    OutputChar,
    /// `#`
    Trampoline,
    /// `p`
    Put,
    /// `g`
    Get,
    /// `@`
    Halt,
    /// Space and any unrecognised character
    Nop,
}

impl Instruction {
    pub fn decode(c: char) -> Self {
        match c {
            '0'..='9' => Instruction::Digit(c as u8 - b'0'),
            '+' => Instruction::Arith(ArithOp::Add),
            '-' => Instruction::Arith(ArithOp::Sub),
            '*' => Instruction::Arith(ArithOp::Mul),
            '/' => Instruction::Arith(ArithOp::Div),
            '%' => Instruction::Arith(ArithOp::Rem),
            '!' => Instruction::Not,
            '`' => Instruction::Greater,
            '>' => Instruction::Go(Direction::Right),
            '<' => Instruction::Go(Direction::Left),
            '^' => Instruction::Go(Direction::Up),
            'v' => Instruction::Go(Direction::Down),
            '?' => Instruction::Random,
            '_' => Instruction::HorizontalIf,
            '|' => Instruction::VerticalIf,
            '"' => Instruction::StringMode,
            ':' => Instruction::Duplicate,
            '\\' => Instruction::Swap,
            '$' => Instruction::Discard,
            '.' => Instruction::OutputInt,
            ',' => Instruction::OutputChar,
            '#' => Instruction::Trampoline,
            'p' => Instruction::Put,
            'g' => Instruction::Get,
            TERMINATOR => Instruction::Halt,
            _ => Instruction::Nop,
        }
    }

    /// Short human-readable name (for the status bar)
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Digit(_) => "push digit",
            Instruction::Arith(ArithOp::Add) => "add",
            Instruction::Arith(ArithOp::Sub) => "subtract",
            Instruction::Arith(ArithOp::Mul) => "multiply",
            Instruction::Arith(ArithOp::Div) => "divide",
            Instruction::Arith(ArithOp::Rem) => "modulo",
            Instruction::Not => "not",
            Instruction::Greater => "greater",
            Instruction::Go(_) => "go",
            Instruction::Random => "random direction",
            Instruction::HorizontalIf => "horizontal if",
            Instruction::VerticalIf => "vertical if",
            Instruction::StringMode => "string mode",
            Instruction::Duplicate => "duplicate",
            Instruction::Swap => "swap",
            Instruction::Discard => "discard",
            Instruction::OutputInt => "output int",
            Instruction::OutputChar => "output char",
            Instruction::Trampoline => "trampoline",
            Instruction::Put => "put",
            Instruction::Get => "get",
            Instruction::Halt => "halt",
            Instruction::Nop => "no-op",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_digits() {
        assert_eq!(Instruction::decode('0'), Instruction::Digit(0));
        assert_eq!(Instruction::decode('9'), Instruction::Digit(9));
    }

    #[test]
    fn test_decode_directions() {
        assert_eq!(Instruction::decode('>'), Instruction::Go(Direction::Right));
        assert_eq!(Instruction::decode('<'), Instruction::Go(Direction::Left));
        assert_eq!(Instruction::decode('^'), Instruction::Go(Direction::Up));
        assert_eq!(Instruction::decode('v'), Instruction::Go(Direction::Down));
    }

    #[test]
    fn test_unknown_and_input_are_nops() {
        for c in [' ', 'x', 'V', '&', '~', ';', 'é'] {
            assert_eq!(Instruction::decode(c), Instruction::Nop, "char {:?}", c);
        }
    }

    #[test]
    fn test_arith_operand_order() {
        assert_eq!(ArithOp::Sub.apply(3, 2), 1);
        assert_eq!(ArithOp::Div.apply(7, 2), 3);
        assert_eq!(ArithOp::Rem.apply(7, 3), 1);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(ArithOp::Div.apply(-7, 2), -3);
        assert_eq!(ArithOp::Rem.apply(-7, 2), -1);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(ArithOp::Div.apply(5, 0), 0);
        assert_eq!(ArithOp::Rem.apply(5, 0), 0);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(ArithOp::Add.apply(i64::MAX, 1), i64::MIN);
        assert_eq!(ArithOp::Div.apply(i64::MIN, -1), i64::MIN);
        assert_eq!(ArithOp::Rem.apply(i64::MIN, -1), 0);
    }
}

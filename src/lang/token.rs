// Tokens of the arithmetic text handed to CALC.

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(Literal),
    Operator(Operator),
    LParen,
    RParen,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    Decimal(String),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            _ => None,
        }
    }

    pub fn precedence(&self) -> usize {
        use Operator::*;
        match self {
            Multiply | Divide => 2,
            Plus | Minus => 1,
        }
    }
}

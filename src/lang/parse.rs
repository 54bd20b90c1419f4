use super::{ast::*, lex::*, token::*, Column, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// How many `if`/`rpl` bodies may be nested inside one line.
pub const MAX_NESTING: usize = 32;

/// Classify one command line.
///
/// Classification never fails. A line whose shape does not match its verb
/// becomes [`Command::Nop`] so it silently does nothing when executed.
pub fn parse(s: &str) -> Command {
    Classifier::classify(&lex(s), 0)
}

/// Parse the arithmetic text of CALC after variables were substituted.
pub fn parse_expression(s: &str) -> Result<Expression> {
    let tokens = lex_arithmetic(s)?;
    let mut parser = ExpressionParser {
        token_stream: tokens.iter(),
        peeked: None,
        col: 0..0,
        depth: 0,
    };
    let expr = parser.expression(0)?;
    match parser.next() {
        None => Ok(expr),
        Some(_) => Err(error!(SyntaxError, ..&parser.column(); "EXPECTED OPERATOR")),
    }
}

fn strip_dollar(s: &str) -> Rc<str> {
    s.strip_prefix('$').unwrap_or(s).into()
}

fn is_word(token: &str, word: &str) -> bool {
    token.eq_ignore_ascii_case(word)
}

struct Classifier;

impl Classifier {
    fn classify(tokens: &[String], depth: usize) -> Command {
        let verb = match tokens.first() {
            Some(verb) => verb.to_ascii_lowercase(),
            None => return Command::Nop,
        };
        match verb.as_str() {
            "print" => return Classifier::r#print(tokens),
            "input" => return Classifier::r#input(tokens),
            "chp" => return Classifier::r#chp(tokens),
            "end" if tokens.len() > 1 && is_word(&tokens[1], "chp") => {
                return Command::EndChapter
            }
            _ => {}
        }
        if tokens.len() >= 3 && tokens[1] == "=" {
            return Classifier::r#let(tokens);
        }
        match verb.as_str() {
            "if" => Classifier::r#if(tokens, depth),
            "calc" => Classifier::r#calc(tokens),
            "rpl" => Classifier::r#rpl(tokens, depth),
            "wait" => Classifier::r#wait(tokens),
            "exit" => Command::Exit,
            "random" => Classifier::r#random(tokens),
            "save" => Classifier::r#save(tokens),
            "con" => Classifier::r#con(tokens),
            "run" => Classifier::r#run(tokens),
            _ => Command::Nop,
        }
    }

    fn body(tokens: &[String], depth: usize) -> Rc<Command> {
        if depth >= MAX_NESTING {
            return Rc::new(Command::TooDeep);
        }
        Rc::new(Classifier::classify(&lex(&tokens.join(" ")), depth + 1))
    }

    fn operand(token: &str) -> Operand {
        match token.strip_prefix('$') {
            Some(name) => Operand::Var(name.into()),
            None => Operand::Literal(token.to_string()),
        }
    }

    fn r#print(tokens: &[String]) -> Command {
        let mut printers = vec![];
        let mut i = 1;
        while i < tokens.len() {
            let token = &tokens[i];
            if is_word(token, "nline") {
                printers.push(Printer::Newline);
            } else if is_word(token, "col") && i + 1 < tokens.len() {
                i += 1;
                printers.push(Printer::Colour(tokens[i].clone()));
            } else {
                printers.push(Printer::Text(token.clone()));
            }
            i += 1;
        }
        Command::Print(printers)
    }

    fn r#input(tokens: &[String]) -> Command {
        if tokens.len() < 2 {
            return Command::Nop;
        }
        let prompt_parts: Vec<&String> = match tokens.iter().skip(2).position(|t| t == "-") {
            Some(dash) => tokens[dash + 3..].iter().filter(|t| *t != "-").collect(),
            None => vec![],
        };
        let limit = prompt_parts
            .iter()
            .find(|part| {
                let mut chars = part.chars();
                matches!(chars.next(), Some('l') | Some('L'))
                    && !part[1..].is_empty()
                    && part[1..].chars().all(|c| c.is_ascii_digit())
            })
            .and_then(|part| part[1..].parse::<usize>().ok());
        let prompt = if prompt_parts.is_empty() {
            None
        } else {
            let parts: Vec<&str> = prompt_parts.iter().map(|s| s.as_str()).collect();
            Some(parts.join(" "))
        };
        Command::Input {
            var: strip_dollar(&tokens[1]),
            prompt,
            limit,
        }
    }

    fn r#chp(tokens: &[String]) -> Command {
        match tokens.get(1) {
            Some(name) => Command::Chapter(name.as_str().into()),
            None => Command::Nop,
        }
    }

    fn r#let(tokens: &[String]) -> Command {
        match tokens[0].strip_prefix('$') {
            Some(var) => Command::Let {
                var: var.into(),
                value: tokens[2..].join(" "),
            },
            None => Command::Nop,
        }
    }

    fn r#if(tokens: &[String], depth: usize) -> Command {
        if tokens.len() >= 4 && tokens[2] == "=" {
            return match tokens.iter().position(|t| t == "-") {
                Some(dash) if dash > 3 => Command::If {
                    var: strip_dollar(&tokens[1]),
                    value: tokens[3..dash].join(" "),
                    then: Classifier::body(&tokens[dash + 1..], depth),
                },
                _ => Command::Nop,
            };
        }
        if tokens.len() >= 4 && is_word(&tokens[1], "pressed") {
            return Command::IfPressed {
                key: tokens[2].trim_matches(|c| c == '{' || c == '}').to_string(),
                command: tokens[4..].join(" "),
                then: Classifier::body(&tokens[4..], depth),
            };
        }
        if tokens.len() >= 5
            && is_word(&tokens[1], "not")
            && is_word(&tokens[2], "found")
            && is_word(&tokens[3], "create")
        {
            return Command::IfNotFoundCreate(tokens[4..].join(" "));
        }
        Command::Nop
    }

    fn r#calc(tokens: &[String]) -> Command {
        if tokens.len() < 5 {
            return Command::Nop;
        }
        Command::Calc {
            expr: tokens[1..tokens.len() - 2].join(" "),
            var: strip_dollar(&tokens[tokens.len() - 1]),
        }
    }

    fn r#rpl(tokens: &[String], depth: usize) -> Command {
        if tokens.len() < 3 {
            return Command::Nop;
        }
        Command::Rpl {
            count: Classifier::operand(&tokens[1]),
            body: Classifier::body(&tokens[2..], depth),
        }
    }

    fn r#wait(tokens: &[String]) -> Command {
        match tokens.get(1) {
            Some(seconds) => Command::Wait(Classifier::operand(seconds)),
            None => Command::Nop,
        }
    }

    fn r#random(tokens: &[String]) -> Command {
        if tokens.len() < 4 || tokens[2] != "-" {
            return Command::Nop;
        }
        Command::Random {
            choices: tokens[1].clone(),
            var: strip_dollar(&tokens[3]),
        }
    }

    fn r#save(tokens: &[String]) -> Command {
        if tokens.len() < 5 {
            return Command::Nop;
        }
        let in_index = match tokens.iter().position(|t| t == "in") {
            Some(index) => index,
            None => return Command::Nop,
        };
        let dash_index = match tokens.iter().skip(in_index + 1).position(|t| t == "-") {
            Some(offset) => in_index + 1 + offset,
            None => return Command::Nop,
        };
        let location = &tokens[in_index + 1];
        Command::Save {
            var: strip_dollar(&tokens[1]),
            location: if is_word(location, "here") {
                Location::Here
            } else {
                Location::Path(location.clone())
            },
            filename: tokens[dash_index + 1..].join(" "),
        }
    }

    fn r#con(tokens: &[String]) -> Command {
        if tokens.len() < 2 {
            return Command::Nop;
        }
        let joined = tokens[1..].join(" ");
        match joined.strip_prefix('!') {
            Some(host_command) => Command::Con(host_command.to_string()),
            None => Command::Nop,
        }
    }

    fn r#run(tokens: &[String]) -> Command {
        match tokens.get(1) {
            Some(name) => Command::Run(name.as_str().into()),
            None => Command::Nop,
        }
    }
}

/// How deeply signs and parentheses may nest in CALC.
const MAX_EXPRESSION_DEPTH: usize = 128;

struct ExpressionParser<'a> {
    token_stream: std::slice::Iter<'a, (Column, Token)>,
    peeked: Option<&'a Token>,
    col: Column,
    depth: usize,
}

impl<'a> ExpressionParser<'a> {
    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        let (col, t) = self.token_stream.next()?;
        self.col = col.clone();
        Some(t)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked
    }

    fn expression(&mut self, precedence: usize) -> Result<Expression> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op)) => *op,
                _ => break,
            };
            if op.precedence() < precedence {
                break;
            }
            self.next();
            let column = self.column();
            let rhs = self.expression(op.precedence() + 1)?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expression> {
        self.depth += 1;
        if self.depth > MAX_EXPRESSION_DEPTH {
            return Err(error!(OutOfMemory, ..&self.column(); "EXPRESSION TOO COMPLEX"));
        }
        let expr = match self.next() {
            Some(Token::Operator(Operator::Minus)) => {
                let column = self.column();
                Expression::Negation(column, Box::new(self.unary()?))
            }
            Some(Token::Operator(Operator::Plus)) => self.unary()?,
            Some(Token::LParen) => {
                let expr = self.expression(0)?;
                match self.next() {
                    Some(Token::RParen) => expr,
                    _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED )")),
                }
            }
            Some(Token::Literal(lit)) => Expression::for_literal(self.column(), lit),
            _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED EXPRESSION")),
        };
        self.depth -= 1;
        Ok(expr)
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
        }
    }

    fn for_literal(col: Column, lit: &Literal) -> Expression {
        match lit {
            Literal::Integer(s) => match s.parse::<i64>() {
                Ok(n) => Expression::Integer(col, n),
                Err(_) => Expression::Decimal(col, s.parse::<f64>().unwrap_or(f64::INFINITY)),
            },
            Literal::Decimal(s) => Expression::Decimal(col, s.parse::<f64>().unwrap_or(0.0)),
        }
    }
}

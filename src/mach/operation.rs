use super::Val;
use crate::error;
use crate::lang::{ast::Expression, Error};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Evaluate a CALC expression tree.
    pub fn evaluate(expr: &Expression) -> Result<Val> {
        use Expression::*;
        match expr {
            Integer(_, n) => Ok(Val::Integer(*n)),
            Decimal(_, n) => Ok(Val::Decimal(*n)),
            Negation(_, e) => Operation::negate(Operation::evaluate(e)?),
            Multiply(_, l, r) => {
                Operation::multiply(Operation::evaluate(l)?, Operation::evaluate(r)?)
            }
            Divide(col, l, r) => {
                Operation::divide(Operation::evaluate(l)?, Operation::evaluate(r)?)
                    .map_err(|e| e.in_column(col))
            }
            Add(_, l, r) => Operation::sum(Operation::evaluate(l)?, Operation::evaluate(r)?),
            Subtract(_, l, r) => {
                Operation::subtract(Operation::evaluate(l)?, Operation::evaluate(r)?)
            }
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Ok(Decimal(-(n as f64))),
            },
            Decimal(n) => Ok(Decimal(-n)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Ok(Decimal(l as f64 * r as f64)),
            },
            (l, r) => Ok(Decimal(l.as_f64() * r.as_f64())),
        }
    }

    /// Division always produces a decimal, `4 / 2` is `2.0`.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let r = rhs.as_f64();
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Decimal(lhs.as_f64() / r))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Ok(Decimal(l as f64 + r as f64)),
            },
            (l, r) => Ok(Decimal(l.as_f64() + r.as_f64())),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Ok(Decimal(l as f64 - r as f64)),
            },
            (l, r) => Ok(Decimal(l.as_f64() - r.as_f64())),
        }
    }
}

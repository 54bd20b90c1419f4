/// ## Numbers produced by CALC

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i64),
    Decimal(f64),
}

impl Val {
    pub fn as_f64(self) -> f64 {
        match self {
            Val::Integer(n) => n as f64,
            Val::Decimal(n) => n,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Decimal(n) => {
                if n.is_nan() {
                    write!(f, "nan")
                } else if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Val::Integer(7).to_string(), "7");
        assert_eq!(Val::Decimal(2.0).to_string(), "2.0");
        assert_eq!(Val::Decimal(-3.5).to_string(), "-3.5");
        assert_eq!(Val::Decimal(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Val::Decimal(f64::NAN).to_string(), "nan");
        assert_eq!(Val::Decimal(f64::NEG_INFINITY).to_string(), "-inf");
    }
}

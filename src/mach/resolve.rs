//! Variable and brace interpolation.
//!
//! | Text          | Result                                           |
//! |---------------|--------------------------------------------------|
//! | `$name`       | Current value of `name`, empty when unset        |
//! | `{text}`      | `text` with `$name` substituted, braces removed  |
//! | `x{a {b}}`    | `xa {b}`, one level of braces per span           |
//! | `{unclosed`   | Kept literally                                   |
//! | `$` alone     | Kept literally                                   |
//!
//! Both entry points only read the variables.

use super::Var;

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Brace and variable interpolation used by PRINT, INPUT, IF, SAVE and
/// IF NOT FOUND CREATE.
pub fn resolve_text(s: &str, vars: &Var) -> String {
    let chars: Vec<char> = s.chars().collect();
    let chars = if is_wrapped(&chars) {
        &chars[1..chars.len() - 1]
    } else {
        &chars[..]
    };
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '{' => match matching_brace(chars, i) {
                Some(close) => {
                    substitute_into(&mut out, &chars[i + 1..close], vars);
                    i = close + 1;
                }
                None => {
                    out.push('{');
                    i += 1;
                }
            },
            '$' => i = substitute_var(&mut out, chars, i, vars),
            ch => {
                out.push(ch);
                i += 1;
            }
        }
    }
    out
}

/// Plain `$name` substitution used by assignment; braces stay as written.
pub fn resolve_value(s: &str, vars: &Var) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    substitute_into(&mut out, &chars, vars);
    out
}

fn is_wrapped(chars: &[char]) -> bool {
    chars.len() >= 2
        && chars[0] == '{'
        && chars[chars.len() - 1] == '}'
        && matching_brace(chars, 0) == Some(chars.len() - 1)
}

fn matching_brace(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0;
    for (index, ch) in chars.iter().enumerate().skip(open) {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

fn substitute_into(out: &mut String, chars: &[char], vars: &Var) {
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '$' {
            i = substitute_var(out, chars, i, vars);
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
}

/// Expand the `$` at `start`, returning the index after what was consumed.
fn substitute_var(out: &mut String, chars: &[char], start: usize, vars: &Var) -> usize {
    let mut end = start + 1;
    while end < chars.len() && is_ident_char(chars[end]) {
        end += 1;
    }
    if end == start + 1 {
        out.push('$');
        return end;
    }
    let name: String = chars[start + 1..end].iter().collect();
    out.push_str(vars.fetch(&name));
    end
}

use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// Every value is a string; verbs reconstruct numbers on demand.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<Rc<str>, String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<&str> {
        self.vars.get(var_name).map(|s| s.as_str())
    }

    /// Missing variables read as the empty string.
    pub fn fetch(&self, var_name: &str) -> &str {
        self.get(var_name).unwrap_or("")
    }

    pub fn store(&mut self, var_name: &str, value: String) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }

    /// Names ordered longest first, so `$ab` is never read as `$a` + `b`.
    pub fn names_longest_first(&self) -> Vec<Rc<str>> {
        let mut names: Vec<Rc<str>> = self.vars.keys().cloned().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names
    }
}

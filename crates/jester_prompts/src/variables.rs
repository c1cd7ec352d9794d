//! Values substituted into prompt templates.

use indexmap::IndexMap;

/// Name of the variable holding a function's primary input.
pub const INPUT: &str = "input";

/// Ordered map of variable names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextVariables {
    values: IndexMap<String, String>,
}

impl ContextVariables {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose `input` variable is `value`.
    #[must_use]
    pub fn from_input(value: impl Into<String>) -> Self {
        Self::new().with(INPUT, value)
    }

    /// Sets a variable, returning the context.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns a variable's value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the `input` variable.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.get(INPUT)
    }

    /// Returns the variable names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_sets_input() {
        let vars = ContextVariables::from_input("Snoop Dogg");
        assert_eq!(vars.input(), Some("Snoop Dogg"));
    }

    #[test]
    fn set_replaces_and_keeps_order() {
        let mut vars = ContextVariables::new().with("b", "1").with("a", "2");
        vars.set("b", "3");

        assert_eq!(vars.get("b"), Some("3"));
        assert_eq!(vars.names(), vec!["b", "a"]);
    }
}

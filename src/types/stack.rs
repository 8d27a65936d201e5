use super::Type;
use ahash::RandomState;
use indexmap::IndexMap;

/// The bindings visible at one instruction position.
///
/// Names keep the position of their first insertion; binding a name again
/// replaces its type in place. There is no removal: a stack only ever grows as
/// it is folded forward over the instruction list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    variables: IndexMap<String, Type, RandomState>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value_type`, overwriting any earlier binding of that name.
    pub fn set_variable(&mut self, name: impl Into<String>, value_type: Type) {
        self.variables.insert(name.into(), value_type);
    }

    /// Returns a new stack extended with one binding, leaving `self` untouched.
    pub fn with_variable(&self, name: impl Into<String>, value_type: Type) -> Stack {
        let mut next = self.clone();
        next.set_variable(name, value_type);
        next
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.variables.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

use std::{collections::HashMap, rc::Rc};

/// The value stored in a signal.
///
/// Any integer can be assigned with `SET`; gates only ever write 0 or 1.
pub type Value = i64;

/// A stable handle to a signal in a [`SignalRegistry`].
///
/// Handles are indices in creation order and are never invalidated,
/// since signals are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalId(usize);

/// Owns all named signals of a circuit.
///
/// Signals are created on first reference with value 0 and are
/// reported in creation order.
#[derive(Clone, Debug, Default)]
pub struct SignalRegistry {
    names: Vec<Rc<str>>,
    values: Vec<Value>,
    by_name: HashMap<Rc<str>, SignalId>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the signal called `name`, creating it with value 0 if it
    /// does not exist yet.
    pub fn resolve(&mut self, name: &str) -> SignalId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = SignalId(self.names.len());
        let name: Rc<str> = Rc::from(name);
        self.names.push(Rc::clone(&name));
        self.values.push(0);
        self.by_name.insert(name, id);
        id
    }

    /// Returns the signal called `name` without creating it.
    pub fn get(&self, name: &str) -> Option<SignalId> {
        self.by_name.get(name).copied()
    }

    pub fn value(&self, id: SignalId) -> Value {
        self.values[id.0]
    }

    pub fn set_value(&mut self, id: SignalId, value: Value) {
        self.values[id.0] = value;
    }

    pub fn name(&self, id: SignalId) -> &str {
        &self.names[id.0]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(name, value)` pairs in the order the signals were
    /// first referenced.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, &value)| (&**name, value))
    }
}

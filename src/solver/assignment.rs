use im::{HashMap, Vector};

use crate::solver::{value::Value, variable::VariableId};

/// A persistent partial assignment: one node of the search tree.
///
/// An `Assignment` holds two overlays: the values decided so far, and the
/// restricted candidate sets of variables narrowed by propagation but not yet
/// decided. Both overlays are persistent (immutable) data structures, so
/// deriving a child state with [`assign`](Assignment::assign) shares
/// structure with the parent instead of deep-copying it, and operations on
/// the child can never be observed through the parent or through any sibling.
/// That isolation is what lets the search abandon a branch by simply dropping
/// its assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<V: Value> {
    values: HashMap<VariableId, V>,
    restricted: HashMap<VariableId, Vector<V>>,
}

impl<V: Value> Default for Assignment<V> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            restricted: HashMap::new(),
        }
    }
}

impl<V: Value> Assignment<V> {
    /// Creates an empty assignment: nothing decided, nothing restricted.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Returns a new assignment in which `variable` is bound to `value`.
    ///
    /// Both overlays are carried over by structural sharing; the receiver is
    /// left untouched.
    #[must_use]
    pub fn assign(&self, variable: VariableId, value: V) -> Self {
        Self {
            values: self.values.update(variable, value),
            restricted: self.restricted.clone(),
        }
    }

    /// The value bound to `variable`, or `None` if it is undecided.
    pub fn value(&self, variable: VariableId) -> Option<&V> {
        self.values.get(&variable)
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.values.contains_key(&variable)
    }

    /// Records a narrowed candidate set for `variable` in this assignment's
    /// own restriction overlay.
    pub fn restrict_domain(&mut self, variable: VariableId, candidates: Vector<V>) {
        self.restricted.insert(variable, candidates);
    }

    /// The narrowed candidate set for `variable`, if propagation has recorded
    /// one here.
    pub fn restricted_domain(&self, variable: VariableId) -> Option<&Vector<V>> {
        self.restricted.get(&variable)
    }

    /// The number of variables decided so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

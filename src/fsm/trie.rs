use hashbrown::HashMap;
use log::debug;

use super::engine::Fsm;
use super::error::FsmError;
use super::sequence::IntoSequence;
use super::symbol::StateId;
use super::table::Transitions;

/// An [`Fsm`] with a value attached to each terminal state.
///
/// The automaton and the value map are only ever cloned, swapped, moved or
/// cleared together, so a state id always refers to the same entry in both.
///
/// # Examples
///
/// ```
/// use libfsm::fsm::{CharTable, Trie};
///
/// let mut trie = Trie::<usize, CharTable>::new();
/// trie.insert("banana", 0).unwrap();
/// trie.insert("banan", 1).unwrap();
///
/// assert_eq!(trie.get("banana").unwrap(), Some(&0));
/// assert_eq!(trie.get("banan").unwrap(), Some(&1));
/// assert_eq!(trie.get("bana").unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Trie<V, T: Transitions> {
    fsm: Fsm<T>,
    values: HashMap<T::State, V>,
}

impl<V, T: Transitions> Trie<V, T> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie {
            fsm: Fsm::new(),
            values: HashMap::new(),
        }
    }

    /// Creates an empty trie with room for `capacity` states before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Trie {
            fsm: Fsm::with_capacity(capacity),
            values: HashMap::new(),
        }
    }

    /// Returns the underlying automaton.
    pub fn fsm(&self) -> &Fsm<T> {
        &self.fsm
    }

    /// The state every walk starts from.
    #[inline]
    pub fn begin(&self) -> T::State {
        self.fsm.begin()
    }

    /// The "no such state" sentinel.
    #[inline]
    pub fn invalid(&self) -> T::State {
        self.fsm.invalid()
    }

    /// Returns the number of state slots, including the invalid and begin states.
    #[inline]
    pub fn size(&self) -> usize {
        self.fsm.size()
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no value is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reserves room for at least `additional` more states.
    pub fn reserve(&mut self, additional: usize) {
        self.fsm.reserve(additional);
    }

    /// Removes every sequence and value.
    pub fn clear(&mut self) {
        debug!("trie: clearing {} values", self.values.len());
        self.fsm.clear();
        self.values.clear();
    }

    /// Exchanges the contents of two tries.
    pub fn swap(&mut self, other: &mut Self) {
        self.fsm.swap(&mut other.fsm);
        std::mem::swap(&mut self.values, &mut other.values);
    }

    /// True if a sequence ending in `state` is recognized.
    #[inline]
    pub fn is_terminal(&self, state: T::State) -> bool {
        self.fsm.is_terminal(state)
    }

    /// Returns the state reached from `state` on `symbol`, or the invalid id.
    #[inline]
    pub fn follow(&self, state: T::State, symbol: T::Symbol) -> T::State {
        self.fsm.follow(state, symbol)
    }

    /// True if `sequence` was inserted.
    pub fn accepts(&self, sequence: impl IntoSequence<T::Symbol>) -> bool {
        self.fsm.accepts(sequence)
    }

    /// Adds a transition on `symbol` from `from` to a newly allocated state.
    ///
    /// See [`Fsm::insert_transition`]. No value is recorded; pair a terminal
    /// state with [`set_value`](Trie::set_value) before looking it up.
    pub fn insert_transition(
        &mut self,
        from: T::State,
        symbol: T::Symbol,
        terminal: bool,
    ) -> T::State {
        self.fsm.insert_transition(from, symbol, terminal)
    }

    /// Inserts `sequence` with `value`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`FsmError::TransitionRejected`] if a missing transition could not
    /// be created. Nothing is recorded for `sequence` in that case.
    pub fn insert(
        &mut self,
        sequence: impl IntoSequence<T::Symbol>,
        value: V,
    ) -> Result<Option<V>, FsmError<T::Symbol>> {
        let state = self.fsm.insert(sequence)?;
        Ok(self.values.insert(state, value))
    }

    /// Records `value` for `state`, returning the value it replaced.
    ///
    /// The terminal flag of `state` is left as it is.
    pub fn set_value(&mut self, state: T::State, value: V) -> Option<V> {
        debug_assert!(
            state.is_valid() && state.index() < self.fsm.size(),
            "Trie::set_value(): invalid state {state:?}"
        );
        self.values.insert(state, value)
    }

    /// Returns the value recorded for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`FsmError::MissingValue`] if `state` has no value.
    pub fn value(&self, state: T::State) -> Result<&V, FsmError<T::Symbol>> {
        self.values.get(&state).ok_or(FsmError::MissingValue {
            state: state.index(),
        })
    }

    /// Looks up the value of `sequence`.
    ///
    /// Returns `Ok(None)` if `sequence` is not recognized.
    ///
    /// # Errors
    ///
    /// Returns [`FsmError::MissingValue`] if `sequence` ends in a terminal state
    /// without a value, which can only happen when states were marked terminal
    /// through [`insert_transition`](Trie::insert_transition).
    pub fn get(
        &self,
        sequence: impl IntoSequence<T::Symbol>,
    ) -> Result<Option<&V>, FsmError<T::Symbol>> {
        match self.terminal_state(sequence) {
            Some(state) => self.value(state).map(Some),
            None => Ok(None),
        }
    }

    /// Like [`get`](Trie::get), but returns a mutable reference.
    pub fn get_mut(
        &mut self,
        sequence: impl IntoSequence<T::Symbol>,
    ) -> Result<Option<&mut V>, FsmError<T::Symbol>> {
        match self.terminal_state(sequence) {
            Some(state) => self
                .values
                .get_mut(&state)
                .map(Some)
                .ok_or(FsmError::MissingValue {
                    state: state.index(),
                }),
            None => Ok(None),
        }
    }

    fn terminal_state(&self, sequence: impl IntoSequence<T::Symbol>) -> Option<T::State> {
        let state = self.fsm.walk(sequence);
        (state.is_valid() && self.fsm.is_terminal(state)).then_some(state)
    }
}

impl<V, T: Transitions> Default for Trie<V, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts all pairs into a fresh trie; a later pair overrides an earlier one
/// for the same sequence.
///
/// Panics if a sequence cannot be inserted; use [`Trie::insert`] to handle that case.
impl<V, T: Transitions, W: IntoSequence<T::Symbol>> FromIterator<(W, V)> for Trie<V, T> {
    fn from_iter<I: IntoIterator<Item = (W, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Panics if a sequence cannot be inserted; use [`Trie::insert`] to handle that case.
impl<V, T: Transitions, W: IntoSequence<T::Symbol>> Extend<(W, V)> for Trie<V, T> {
    fn extend<I: IntoIterator<Item = (W, V)>>(&mut self, iter: I) {
        for (sequence, value) in iter {
            if let Err(e) = self.insert(sequence, value) {
                panic!("Trie::extend(): {e}");
            }
        }
    }
}

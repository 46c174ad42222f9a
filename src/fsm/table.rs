use std::fmt::Debug;
use std::marker::PhantomData;

use hashbrown::HashMap;

use super::symbol::{DenseSymbol, StateId, Symbol};

/// The outgoing transitions of a single state.
///
/// An [`Fsm`](super::Fsm) is generic over its table type, so the choice between
/// [`DenseTable`] and [`SparseTable`] is made at compile time.
pub trait Transitions: Clone + Default + Debug {
    /// The symbol labelling each transition.
    type Symbol: Symbol;
    /// The state id type transitions point to.
    type State: StateId;

    /// Returns the state `symbol` leads to, or [`StateId::INVALID`] if there is none.
    fn follow(&self, symbol: Self::Symbol) -> Self::State;

    /// Adds the transition `symbol -> state`. Returns `false` if the table refused it.
    ///
    /// Whether an existing transition for `symbol` is replaced or kept depends
    /// on the implementation; see [`DenseTable::insert`] and [`SparseTable::insert`].
    fn insert(&mut self, symbol: Self::Symbol, state: Self::State) -> bool;

    /// Returns the number of transitions in the table.
    fn transition_count(&self) -> usize;
}

/// A transition table backed by a fixed-size array indexed by symbol value.
///
/// `N` bounds the alphabet: only symbols whose [`dense_index`](DenseSymbol::dense_index)
/// is below `N` can have a transition.
#[derive(Clone, PartialEq, Eq)]
pub struct DenseTable<C: DenseSymbol, S: StateId, const N: usize> {
    slots: Box<[S]>,
    _symbol: PhantomData<fn(C)>,
}

impl<C: DenseSymbol, S: StateId, const N: usize> DenseTable<C, S, N> {
    /// Creates a table with no transitions.
    pub fn new() -> Self {
        DenseTable {
            slots: vec![S::INVALID; N].into_boxed_slice(),
            _symbol: PhantomData,
        }
    }

    #[inline]
    fn slot(symbol: C) -> Option<usize> {
        symbol.dense_index().filter(|&i| i < N)
    }
}

impl<C: DenseSymbol, S: StateId, const N: usize> Default for DenseTable<C, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DenseSymbol, S: StateId, const N: usize> Debug for DenseTable<C, S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .enumerate()
                    .filter(|(_, st)| st.is_valid()),
            )
            .finish()
    }
}

impl<C: DenseSymbol, S: StateId, const N: usize> Transitions for DenseTable<C, S, N> {
    type Symbol = C;
    type State = S;

    /// Symbols outside the alphabet bound have no transition.
    #[inline]
    fn follow(&self, symbol: C) -> S {
        Self::slot(symbol)
            .map(|i| self.slots[i])
            .unwrap_or(S::INVALID)
    }

    /// Stores the transition, overwriting any previous target for `symbol`.
    ///
    /// Fails only if `symbol` is outside the alphabet bound.
    #[inline]
    fn insert(&mut self, symbol: C, state: S) -> bool {
        match Self::slot(symbol) {
            Some(i) => {
                self.slots[i] = state;
                true
            }
            None => false,
        }
    }

    fn transition_count(&self) -> usize {
        self.slots.iter().filter(|st| st.is_valid()).count()
    }
}

/// A transition table backed by a hash map, for large or sparse alphabets.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseTable<C: Symbol, S: StateId> {
    edges: HashMap<C, S>,
}

impl<C: Symbol, S: StateId> SparseTable<C, S> {
    /// Creates a table with no transitions.
    pub fn new() -> Self {
        SparseTable {
            edges: HashMap::new(),
        }
    }
}

impl<C: Symbol, S: StateId> Default for SparseTable<C, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol, S: StateId> Debug for SparseTable<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut edges: Vec<_> = self.edges.iter().collect();
        edges.sort_unstable();
        f.debug_map().entries(edges).finish()
    }
}

impl<C: Symbol, S: StateId> Transitions for SparseTable<C, S> {
    type Symbol = C;
    type State = S;

    #[inline]
    fn follow(&self, symbol: C) -> S {
        self.edges.get(&symbol).copied().unwrap_or(S::INVALID)
    }

    /// Stores the transition only if `symbol` has none yet.
    ///
    /// A second insert for the same symbol leaves the table unchanged and returns `false`.
    #[inline]
    fn insert(&mut self, symbol: C, state: S) -> bool {
        match self.edges.entry(symbol) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(state);
                true
            }
        }
    }

    fn transition_count(&self) -> usize {
        self.edges.len()
    }
}

/// Dense table over 7-bit ASCII `char`s.
pub type AsciiTable = DenseTable<char, u32, 128>;

/// Dense table over all byte values.
pub type ByteTable = DenseTable<u8, u32, 256>;

/// Sparse table over any `char`.
pub type CharTable = SparseTable<char, u32>;

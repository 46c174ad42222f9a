use log::{debug, trace, warn};

use super::error::FsmError;
use super::sequence::IntoSequence;
use super::symbol::StateId;
use super::table::Transitions;

/// A state of the automaton: its outgoing transitions and whether a sequence
/// ending here is recognized.
#[derive(Clone, Debug, Default)]
struct State<T: Transitions> {
    table: T,
    terminal: bool,
}

/// A deterministic prefix automaton over sequences of `T::Symbol`.
///
/// States live in a single vector and are addressed by id. Id `0` is the
/// invalid sentinel and id `1` the begin state; every inserted state gets the
/// next free id and is never removed.
///
/// # Examples
///
/// ```
/// use libfsm::fsm::{AsciiTable, Fsm};
///
/// let mut fsm = Fsm::<AsciiTable>::new();
/// fsm.insert("apple").unwrap();
/// fsm.insert("apply").unwrap();
///
/// assert!(fsm.accepts("apple"));
/// assert!(!fsm.accepts("appl"));
/// assert_eq!(fsm.size(), 2 + "apple".len() + 1);
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<T: Transitions> {
    states: Vec<State<T>>,
}

impl<T: Transitions> Fsm<T> {
    /// Creates an automaton holding only the invalid and begin states.
    pub fn new() -> Self {
        Fsm {
            states: vec![State::default(), State::default()],
        }
    }

    /// Creates an automaton with room for `capacity` states before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut states = Vec::with_capacity(capacity.max(2));
        states.push(State::default()); // invalid 0
        states.push(State::default()); // begin 1
        Fsm { states }
    }

    /// The state every walk starts from.
    #[inline]
    pub fn begin(&self) -> T::State {
        T::State::BEGIN
    }

    /// The "no such state" sentinel.
    #[inline]
    pub fn invalid(&self) -> T::State {
        T::State::INVALID
    }

    /// Returns the number of state slots, including the invalid and begin states.
    #[inline]
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Reserves room for at least `additional` more states.
    pub fn reserve(&mut self, additional: usize) {
        debug!("fsm: reserving {additional} states beyond {}", self.states.len());
        self.states.reserve(additional);
    }

    /// Drops every inserted state, leaving only the invalid and begin states.
    pub fn clear(&mut self) {
        debug!("fsm: clearing {} states", self.states.len());
        self.states.truncate(2);
        self.states[0] = State::default();
        self.states[1] = State::default();
    }

    /// Exchanges the contents of two automatons.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.states, &mut other.states);
    }

    /// Appends an empty, non-terminal state and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `T::State` cannot represent the new id.
    pub fn allocate_state(&mut self) -> T::State {
        let id = T::State::from_index(self.states.len())
            .expect("state id type is too narrow for another state");
        self.states.push(State::default());
        trace!("fsm: allocated state {id:?}");
        id
    }

    /// Marks `state` so that sequences ending there are recognized.
    #[inline]
    pub fn make_terminal(&mut self, state: T::State) {
        debug_assert!(
            state.index() < self.states.len(),
            "Fsm::make_terminal(): invalid state {state:?}"
        );
        self.states[state.index()].terminal = true;
    }

    /// True if a sequence ending in `state` is recognized.
    #[inline]
    pub fn is_terminal(&self, state: T::State) -> bool {
        debug_assert!(
            state.index() < self.states.len(),
            "Fsm::is_terminal(): invalid state {state:?}"
        );
        self.states[state.index()].terminal
    }

    /// Returns the state reached from `state` on `symbol`, or the invalid id.
    #[inline]
    pub fn follow(&self, state: T::State, symbol: T::Symbol) -> T::State {
        debug_assert!(
            state.index() < self.states.len(),
            "Fsm::follow(): invalid state {state:?}"
        );
        self.states[state.index()].table.follow(symbol)
    }

    /// Walks `sequence` from the begin state and returns where it ends.
    ///
    /// Stops at the first symbol without a transition and returns the invalid id.
    /// The returned state need not be terminal.
    pub fn walk(&self, sequence: impl IntoSequence<T::Symbol>) -> T::State {
        let mut state = T::State::BEGIN;
        for symbol in sequence.into_symbols() {
            state = self.follow(state, symbol);
            if !state.is_valid() {
                return state;
            }
        }
        state
    }

    /// True if `sequence` was inserted.
    ///
    /// A proper prefix of an inserted sequence is not accepted unless it was
    /// inserted itself.
    pub fn accepts(&self, sequence: impl IntoSequence<T::Symbol>) -> bool {
        let state = self.walk(sequence);
        state.is_valid() && self.is_terminal(state)
    }

    /// Adds a transition on `symbol` from `from` to a newly allocated state.
    ///
    /// Returns the new state, or the invalid id if `from`'s table refused the
    /// transition. The new state is allocated either way, so a refused
    /// transition leaves an unreachable state behind.
    pub fn insert_transition(
        &mut self,
        from: T::State,
        symbol: T::Symbol,
        terminal: bool,
    ) -> T::State {
        debug_assert!(
            from.index() < self.states.len(),
            "Fsm::insert_transition(): invalid state 'from' {from:?}"
        );
        let to = self.allocate_state();
        if !self.states[from.index()].table.insert(symbol, to) {
            warn!("fsm: state {from:?} refused a transition on {symbol:?}");
            return T::State::INVALID;
        }
        trace!("fsm: {from:?} --{symbol:?}--> {to:?}");
        self.states[to.index()].terminal = terminal;
        to
    }

    /// Inserts `sequence`, sharing any prefix already present, and returns its
    /// final state.
    ///
    /// # Errors
    ///
    /// Returns [`FsmError::TransitionRejected`] if a missing transition could not
    /// be created, e.g. a symbol outside a [`DenseTable`](super::DenseTable)'s
    /// alphabet. States created before the failure stay allocated, and the
    /// sequence is not recognized afterwards.
    pub fn insert(
        &mut self,
        sequence: impl IntoSequence<T::Symbol>,
    ) -> Result<T::State, FsmError<T::Symbol>> {
        let state = self.extend_path(sequence)?;
        self.make_terminal(state);
        Ok(state)
    }

    /// Walks `sequence`, creating transitions as needed, without marking the end.
    fn extend_path(
        &mut self,
        sequence: impl IntoSequence<T::Symbol>,
    ) -> Result<T::State, FsmError<T::Symbol>> {
        let mut state = T::State::BEGIN;
        for symbol in sequence.into_symbols() {
            let mut next = self.follow(state, symbol);
            if !next.is_valid() {
                next = self.insert_transition(state, symbol, false);
                if !next.is_valid() {
                    return Err(FsmError::TransitionRejected {
                        from: state.index(),
                        symbol,
                    });
                }
            }
            state = next;
        }
        Ok(state)
    }

    /// Returns the number of transitions over all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.table.transition_count()).sum()
    }

    /// Returns the number of terminal states.
    pub fn terminal_count(&self) -> usize {
        self.states.iter().filter(|s| s.terminal).count()
    }
}

impl<T: Transitions> Default for Fsm<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts all sequences into a fresh automaton.
///
/// Panics if a sequence cannot be inserted; use [`Fsm::insert`] to handle that case.
impl<T: Transitions, W: IntoSequence<T::Symbol>> FromIterator<W> for Fsm<T> {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut fsm = Fsm::new();
        fsm.extend(iter);
        fsm
    }
}

/// Panics if a sequence cannot be inserted; use [`Fsm::insert`] to handle that case.
impl<T: Transitions, W: IntoSequence<T::Symbol>> Extend<W> for Fsm<T> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for sequence in iter {
            if let Err(e) = self.insert(sequence) {
                panic!("Fsm::extend(): {e}");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::table::{AsciiTable, ByteTable, CharTable, DenseTable, SparseTable};
    use super::*;

    const SEED: [&str; 5] = ["abcd", "abce", "apple", "banana", "banan"];

    fn check_seed<T: Transitions<Symbol = char>>() {
        let mut fsm = Fsm::<T>::new();
        assert_eq!(fsm.size(), 2);
        for word in SEED {
            assert!(fsm.insert(word).is_ok(), "{word}");
        }

        assert!(!fsm.accepts("a"));
        assert!(!fsm.accepts("ab"));
        assert!(!fsm.accepts("abc"));

        for word in SEED {
            assert!(fsm.accepts(word), "{word}");
        }
    }

    #[test]
    fn seed_words_dense() {
        check_seed::<AsciiTable>();
    }

    #[test]
    fn seed_words_sparse() {
        check_seed::<CharTable>();
    }

    #[test]
    fn fresh_fsm_has_sentinels_only() {
        let fsm = Fsm::<CharTable>::new();
        assert_eq!(fsm.size(), 2);
        assert_eq!(fsm.begin(), 1);
        assert_eq!(fsm.invalid(), 0);
        assert!(!fsm.is_terminal(fsm.begin()));
        assert!(!fsm.accepts(""));
        assert!(!fsm.accepts("a"));

        let fsm = Fsm::<CharTable>::with_capacity(100);
        assert_eq!(fsm.size(), 2);
        let fsm = Fsm::<CharTable>::with_capacity(0);
        assert_eq!(fsm.size(), 2);
    }

    #[test]
    fn size_grows_by_unshared_suffix() {
        let mut fsm = Fsm::<AsciiTable>::new();
        fsm.insert("banana").unwrap();
        assert_eq!(fsm.size(), 2 + 6);
        fsm.insert("banan").unwrap();
        assert_eq!(fsm.size(), 2 + 6);
        fsm.insert("bandana").unwrap();
        assert_eq!(fsm.size(), 2 + 6 + 4);
        fsm.insert("banana").unwrap();
        assert_eq!(fsm.size(), 2 + 6 + 4);
        assert_eq!(fsm.transition_count(), fsm.size() - 2);
        assert_eq!(fsm.terminal_count(), 3);
    }

    #[test]
    fn insert_returns_final_state() {
        let mut fsm = Fsm::<CharTable>::new();
        let st = fsm.insert("ab").unwrap();
        assert_eq!(st, 3);
        assert_eq!(fsm.walk("ab"), st);
        assert_eq!(fsm.insert("ab").unwrap(), st);
        assert_eq!(fsm.walk("a"), 2);
        assert_eq!(fsm.walk("ax"), fsm.invalid());
    }

    #[test]
    fn empty_sequence_marks_begin() {
        let mut fsm = Fsm::<CharTable>::new();
        assert_eq!(fsm.insert("").unwrap(), fsm.begin());
        assert!(fsm.accepts(""));
        assert!(!fsm.accepts("a"));
        assert_eq!(fsm.size(), 2);
    }

    #[test]
    fn diverging_symbol_stops_walk() {
        let mut fsm = Fsm::<CharTable>::new();
        fsm.insert("abc").unwrap();
        assert!(!fsm.accepts("abd"));
        assert!(!fsm.accepts("xbc"));
        assert!(!fsm.accepts("abcd"));
        assert_eq!(fsm.walk("xbc"), 0);
    }

    #[test]
    fn single_step_follow() {
        let mut fsm = Fsm::<ByteTable>::new();
        fsm.insert([1u8, 2]).unwrap();
        let a = fsm.follow(fsm.begin(), 1);
        assert!(a.is_valid());
        assert!(!fsm.is_terminal(a));
        let b = fsm.follow(a, 2);
        assert!(fsm.is_terminal(b));
        assert_eq!(fsm.follow(b, 2), fsm.invalid());
        assert_eq!(fsm.follow(fsm.begin(), 2), fsm.invalid());
    }

    #[test]
    fn low_level_build() {
        let mut fsm = Fsm::<CharTable>::new();
        let a = fsm.insert_transition(fsm.begin(), 'a', false);
        let b = fsm.insert_transition(a, 'b', true);
        assert_eq!((a, b), (2, 3));
        assert!(!fsm.accepts("a"));
        assert!(fsm.accepts("ab"));

        fsm.make_terminal(a);
        assert!(fsm.accepts("a"));
        fsm.make_terminal(a);
        assert!(fsm.is_terminal(a));
    }

    #[test]
    fn low_level_sparse_duplicate_orphans_state() {
        let mut fsm = Fsm::<CharTable>::new();
        let a = fsm.insert_transition(fsm.begin(), 'a', true);
        let again = fsm.insert_transition(fsm.begin(), 'a', true);
        assert_eq!(again, fsm.invalid());
        assert_eq!(fsm.size(), 4);
        assert_eq!(fsm.follow(fsm.begin(), 'a'), a);
        assert!(!fsm.is_terminal(3));
    }

    #[test]
    fn low_level_dense_duplicate_overwrites() {
        let mut fsm = Fsm::<AsciiTable>::new();
        let a = fsm.insert_transition(fsm.begin(), 'a', true);
        let again = fsm.insert_transition(fsm.begin(), 'a', false);
        assert_ne!(again, fsm.invalid());
        assert_ne!(again, a);
        assert_eq!(fsm.follow(fsm.begin(), 'a'), again);
        assert!(!fsm.accepts("a"));
    }

    #[test]
    fn dense_out_of_alphabet_is_reported() {
        let mut fsm = Fsm::<AsciiTable>::new();
        let err = fsm.insert("caré").unwrap_err();
        assert_eq!(
            err,
            FsmError::TransitionRejected {
                from: 4,
                symbol: 'é'
            }
        );
        assert!(!fsm.accepts("caré"));
        assert!(!fsm.accepts("car"));
        // "car" states plus the orphan allocated for 'é'.
        assert_eq!(fsm.size(), 2 + 3 + 1);

        let mut sparse = Fsm::<CharTable>::new();
        assert!(sparse.insert("caré").is_ok());
        assert!(sparse.accepts("caré"));
    }

    #[test]
    fn clear_resets_to_fresh() {
        let mut fsm = Fsm::<AsciiTable>::new();
        fsm.insert("").unwrap();
        fsm.insert("abc").unwrap();
        fsm.clear();
        assert_eq!(fsm.size(), 2);
        assert!(!fsm.accepts(""));
        assert!(!fsm.accepts("abc"));
        fsm.insert("xy").unwrap();
        assert!(fsm.accepts("xy"));
        assert_eq!(fsm.size(), 4);
    }

    #[test]
    fn reserve_keeps_contents() {
        let mut fsm = Fsm::<CharTable>::new();
        fsm.insert("abc").unwrap();
        fsm.reserve(1000);
        assert!(fsm.accepts("abc"));
        assert_eq!(fsm.size(), 5);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Fsm::<CharTable>::new();
        original.insert("abc").unwrap();
        let mut copy = original.clone();
        copy.insert("xyz").unwrap();
        original.insert("uvw").unwrap();

        assert!(copy.accepts("abc"));
        assert!(copy.accepts("xyz"));
        assert!(!copy.accepts("uvw"));
        assert!(original.accepts("uvw"));
        assert!(!original.accepts("xyz"));
    }

    #[test]
    fn swap_exchanges_languages() {
        let mut a: Fsm<AsciiTable> = ["one", "two"].into_iter().collect();
        let mut b: Fsm<AsciiTable> = ["three"].into_iter().collect();
        a.swap(&mut b);
        assert!(a.accepts("three"));
        assert!(!a.accepts("one"));
        assert!(!a.accepts("two"));
        assert!(b.accepts("one"));
        assert!(b.accepts("two"));
        assert!(!b.accepts("three"));
    }

    #[test]
    fn take_leaves_fresh_source() {
        let mut a: Fsm<CharTable> = ["one"].into_iter().collect();
        let b = std::mem::take(&mut a);
        assert!(b.accepts("one"));
        assert!(!a.accepts("one"));
        assert_eq!(a.size(), 2);
        a.insert("two").unwrap();
        assert!(a.accepts("two"));
    }

    #[test]
    fn generic_symbols_and_ids() {
        let mut fsm = Fsm::<SparseTable<u32, u16>>::new();
        fsm.insert(vec![100_000u32, 7, 42]).unwrap();
        assert!(fsm.accepts([100_000u32, 7, 42]));
        assert!(!fsm.accepts(&[100_000u32, 7][..]));

        let mut bytes = Fsm::<DenseTable<u8, u64, 256>>::new();
        bytes.insert("hi").unwrap();
        assert!(bytes.accepts(b"hi"));
    }

    #[test]
    #[should_panic(expected = "too narrow")]
    fn narrow_state_ids_run_out() {
        let mut fsm = Fsm::<SparseTable<u16, u8>>::new();
        for i in 0..300u16 {
            let _ = fsm.insert([i]);
        }
    }

    #[test]
    #[should_panic(expected = "transition rejected")]
    fn extend_panics_on_rejected_sequence() {
        let _: Fsm<AsciiTable> = ["ok", "naïve"].into_iter().collect();
    }
}

/// Automaton engine: state storage, insertion and recognition.
pub mod engine;
/// Error type shared by the automaton and the trie.
pub mod error;
/// Conversions from strings, slices and arrays into symbol sequences.
pub mod sequence;
/// Traits for symbol and state id types.
pub mod symbol;
/// Dense and sparse transition tables.
pub mod table;
/// Automaton with a value attached to each recognized sequence.
pub mod trie;

pub use engine::Fsm;
pub use error::FsmError;
pub use sequence::IntoSequence;
pub use symbol::{DenseSymbol, StateId, Symbol};
pub use table::{AsciiTable, ByteTable, CharTable, DenseTable, SparseTable, Transitions};
pub use trie::Trie;

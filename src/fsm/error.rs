use thiserror::Error;

use super::symbol::Symbol;

/// Errors that can occur when building or querying an automaton.
///
/// A sequence that is simply not recognized is never an error; lookups report
/// it as `false` or `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsmError<C: Symbol> {
    /// The transition table of `from` refused a new transition on `symbol`.
    ///
    /// A dense table refuses symbols outside its alphabet bound; a sparse table
    /// refuses a symbol that already has a transition.
    #[error("transition rejected: state {from} cannot take a new edge on {symbol:?}")]
    TransitionRejected {
        /// Index of the state the transition was to leave from.
        from: usize,
        /// The rejected symbol.
        symbol: C,
    },

    /// A terminal state has no value recorded for it.
    #[error("missing value: terminal state {state} has no recorded value")]
    MissingValue {
        /// Index of the terminal state.
        state: usize,
    },
}

use std::str::{Bytes, Chars};

use smallvec::SmallVec;

use super::symbol::Symbol;

/// Trait for types that can be fed to an automaton as a sequence of symbols.
///
/// Implemented for common string and sequence types so that
/// [`Fsm::insert`](super::Fsm::insert), [`Fsm::accepts`](super::Fsm::accepts) and
/// the [`Trie`](super::Trie) lookups accept them directly without manual conversion.
pub trait IntoSequence<C: Symbol> {
    /// Iterator over the symbols, in order.
    type Symbols: Iterator<Item = C>;

    /// Turns this value into its symbols.
    fn into_symbols(self) -> Self::Symbols;
}

// String types → char

impl<'a> IntoSequence<char> for &'a str {
    type Symbols = Chars<'a>;

    fn into_symbols(self) -> Self::Symbols {
        self.chars()
    }
}

impl<'a> IntoSequence<char> for &'a String {
    type Symbols = Chars<'a>;

    fn into_symbols(self) -> Self::Symbols {
        self.chars()
    }
}

impl IntoSequence<char> for String {
    type Symbols = smallvec::IntoIter<[char; 32]>;

    fn into_symbols(self) -> Self::Symbols {
        self.chars().collect::<SmallVec<[char; 32]>>().into_iter()
    }
}

// String types → u8

impl<'a> IntoSequence<u8> for &'a str {
    type Symbols = Bytes<'a>;

    fn into_symbols(self) -> Self::Symbols {
        self.bytes()
    }
}

impl<'a> IntoSequence<u8> for &'a String {
    type Symbols = Bytes<'a>;

    fn into_symbols(self) -> Self::Symbols {
        self.bytes()
    }
}

// Generic sequence types → C

impl<'a, C: Symbol> IntoSequence<C> for &'a [C] {
    type Symbols = std::iter::Copied<std::slice::Iter<'a, C>>;

    fn into_symbols(self) -> Self::Symbols {
        self.iter().copied()
    }
}

impl<C: Symbol> IntoSequence<C> for Vec<C> {
    type Symbols = std::vec::IntoIter<C>;

    fn into_symbols(self) -> Self::Symbols {
        self.into_iter()
    }
}

impl<'a, C: Symbol> IntoSequence<C> for &'a Vec<C> {
    type Symbols = std::iter::Copied<std::slice::Iter<'a, C>>;

    fn into_symbols(self) -> Self::Symbols {
        self.iter().copied()
    }
}

impl<C: Symbol, const N: usize> IntoSequence<C> for [C; N] {
    type Symbols = std::array::IntoIter<C, N>;

    fn into_symbols(self) -> Self::Symbols {
        self.into_iter()
    }
}

impl<'a, C: Symbol, const N: usize> IntoSequence<C> for &'a [C; N] {
    type Symbols = std::iter::Copied<std::slice::Iter<'a, C>>;

    fn into_symbols(self) -> Self::Symbols {
        self.iter().copied()
    }
}

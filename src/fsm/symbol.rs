use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can label a transition of an [`Fsm`](super::Fsm).
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, token enums, etc.).
///
/// - `Copy`: tables store symbols by value
/// - `Eq + Ord`: comparing symbols
/// - `Hash`: keys of a [`SparseTable`](super::SparseTable)
/// - `Debug`: error messages and debug printing of tables
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Symbol for T {}

/// A symbol with an integer value, usable as an index into a [`DenseTable`](super::DenseTable).
pub trait DenseSymbol: Symbol {
    /// Returns the slot this symbol occupies, or `None` if it has no
    /// non-negative integer value.
    fn dense_index(self) -> Option<usize>;
}

macro_rules! impl_dense_symbol {
    ($($t:ty),*) => {
        $(
            impl DenseSymbol for $t {
                #[inline]
                fn dense_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_dense_symbol!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl DenseSymbol for char {
    #[inline]
    fn dense_index(self) -> Option<usize> {
        usize::try_from(u32::from(self)).ok()
    }
}

/// An unsigned integer identifying a state.
///
/// `0` is reserved as [`INVALID`](StateId::INVALID) and `1` as
/// [`BEGIN`](StateId::BEGIN); real states start at `2`.
pub trait StateId: Copy + Eq + Ord + Hash + Debug + Default {
    /// The "no such state" sentinel.
    const INVALID: Self;
    /// The state every walk starts from.
    const BEGIN: Self;

    /// Converts a slot index into a state id, or `None` if the id type is too narrow.
    fn from_index(index: usize) -> Option<Self>;

    /// Returns the slot index of this state id.
    fn index(self) -> usize;

    /// True unless this is the invalid sentinel.
    #[inline]
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

macro_rules! impl_state_id {
    ($($t:ty),*) => {
        $(
            impl StateId for $t {
                const INVALID: Self = 0;
                const BEGIN: Self = 1;

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$t>::try_from(index).ok()
                }

                #[inline]
                fn index(self) -> usize {
                    // Only reachable for ids produced by `from_index`.
                    self as usize
                }
            }
        )*
    };
}

impl_state_id!(u8, u16, u32, u64, usize);

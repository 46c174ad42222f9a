//! # libfsm
//!
//! A deterministic prefix automaton and a value trie for Rust, generic over the
//! symbol type.
//!
//! Inserted sequences share their common prefixes, so membership testing and
//! value lookup take time proportional to the length of the probed sequence,
//! however many sequences were inserted.
//!
//! ## Features
//!
//! - **Generic over symbol type**: `char`, `u8`, `u16`, token enums, or any type
//!   implementing [`Symbol`](fsm::Symbol)
//! - **Two table strategies**, chosen at compile time: [`DenseTable`](fsm::DenseTable)
//!   for small bounded alphabets and [`SparseTable`](fsm::SparseTable) for everything else
//! - **Index-based states**: states live in one vector and are addressed by
//!   integer id, so the whole automaton is one owned value that can be cloned,
//!   swapped and moved freely
//! - **Low-level building**: add transitions one at a time with
//!   [`Fsm::insert_transition`](fsm::Fsm::insert_transition)
//!
//! ## Quick Start
//!
//! ```
//! use libfsm::fsm::{AsciiTable, Fsm};
//!
//! let mut fsm = Fsm::<AsciiTable>::new();
//! for word in ["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"] {
//!     fsm.insert(word).unwrap();
//! }
//! assert!(fsm.accepts("CAKE"));
//! assert!(!fsm.accepts("CAK"));
//! ```
//!
//! A [`Trie`](fsm::Trie) also keeps a value per sequence:
//!
//! ```
//! use libfsm::fsm::{CharTable, Trie};
//!
//! let mut trie = Trie::<u32, CharTable>::new();
//! trie.insert("授人以鱼", 1).unwrap();
//! trie.insert("授人以渔", 2).unwrap();
//! assert_eq!(trie.get("授人以渔").unwrap(), Some(&2));
//! assert_eq!(trie.get("授人以").unwrap(), None);
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over both the symbol and the state id type:
//!
//! ```
//! use libfsm::fsm::{Fsm, SparseTable};
//!
//! let mut fsm = Fsm::<SparseTable<u16, u16>>::new();
//! fsm.insert([1, 2, 3]).unwrap();
//! fsm.insert(vec![1, 2, 4]).unwrap();
//!
//! assert!(fsm.accepts(&[1, 2, 3]));
//! assert!(!fsm.accepts(&[1, 2]));
//! ```
//!
//! ## Logging
//!
//! State allocation, rejected transitions, `clear` and `reserve` are reported
//! through the [`log`] facade. The crate never installs a logger.

#![warn(missing_docs)]

/// Automaton, trie, transition tables and supporting traits.
pub mod fsm;

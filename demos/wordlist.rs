//! Example: a word list with per-word definitions on top of `Trie`.
//!
//! This shows how to wrap the trie in a small domain type that offers word
//! lookup, prefix checking and definition retrieval.
//!
//! Run with: cargo run --example wordlist

use libfsm::fsm::{AsciiTable, StateId, Trie};

/// A word list mapping each word to a short definition.
struct Wordlist {
    trie: Trie<&'static str, AsciiTable>,
}

impl Wordlist {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        let mut trie = Trie::with_capacity(256);
        for &(word, definition) in entries {
            trie.insert(word, definition)
                .unwrap_or_else(|e| panic!("cannot add {word}: {e}"));
        }
        Wordlist { trie }
    }

    /// Returns true if the word is in the word list.
    fn is_word(&self, word: &str) -> bool {
        self.trie.accepts(word)
    }

    /// Returns true if any word in the word list starts with the given prefix.
    fn has_prefix(&self, prefix: &str) -> bool {
        self.trie.fsm().walk(prefix).is_valid()
    }

    fn define(&self, word: &str) -> Option<&'static str> {
        self.trie.get(word).ok().flatten().copied()
    }
}

fn main() {
    let wordlist = Wordlist::new(&[
        ("BAKE", "cook by dry heat"),
        ("BAKED", "cooked by dry heat"),
        ("BAKER", "one who bakes"),
        ("CAKE", "a sweet baked food"),
        ("FAKE", "not genuine"),
        ("LAKE", "a body of water"),
    ]);

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Definitions
    println!("\nDefinitions:");
    for word in ["BAKER", "LAKE", "LAK"] {
        match wordlist.define(word) {
            Some(definition) => println!("  {word}: {definition}"),
            None => println!("  {word}: -"),
        }
    }

    println!("\n{} states for {} words", wordlist.trie.size(), wordlist.trie.len());
}

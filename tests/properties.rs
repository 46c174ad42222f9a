use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use proptest::prelude::*;

use libfsm::fsm::{AsciiTable, CharTable, Fsm, Transitions, Trie};

const SEED: [&str; 5] = ["abcd", "abce", "apple", "banana", "banan"];

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,6}", 0..24)
}

fn probes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]{0,7}", 0..48)
}

fn build<T: Transitions<Symbol = char>>(words: &[String]) -> Trie<usize, T> {
    let mut trie = Trie::new();
    for (i, word) in words.iter().enumerate() {
        trie.insert(word, i).unwrap();
    }
    trie
}

#[test]
fn insertion_order_does_not_change_language() {
    let expected: BTreeSet<&str> = SEED.into_iter().collect();
    let mut sizes = BTreeSet::new();
    for order in SEED.iter().permutations(SEED.len()) {
        let fsm: Fsm<AsciiTable> = order.into_iter().copied().collect();
        for probe in [
            "", "a", "ab", "abc", "abcd", "abce", "abcf", "app", "apple", "ban", "banan", "banana",
            "bananas",
        ] {
            assert_eq!(fsm.accepts(probe), expected.contains(probe), "{probe}");
        }
        sizes.insert(fsm.size());
    }
    // The prefix tree has the same shape whatever the order.
    assert_eq!(sizes.len(), 1);
}

proptest! {
    #[test]
    fn inserted_words_are_found_with_latest_value(words in words()) {
        let trie = build::<CharTable>(&words);
        let mut latest = BTreeMap::new();
        for (i, word) in words.iter().enumerate() {
            latest.insert(word.as_str(), i);
        }
        for (word, i) in &latest {
            prop_assert!(trie.accepts(*word));
            prop_assert_eq!(trie.get(*word).unwrap(), Some(i));
        }
        prop_assert_eq!(trie.len(), latest.len());
    }

    #[test]
    fn only_inserted_words_are_accepted(words in words(), probes in probes()) {
        let fsm: Fsm<CharTable> = words.iter().collect();
        let inserted: BTreeSet<&String> = words.iter().collect();
        for probe in &probes {
            prop_assert_eq!(fsm.accepts(probe), inserted.contains(probe), "{}", probe);
        }
    }

    #[test]
    fn dense_and_sparse_agree(words in words(), probes in probes()) {
        let dense = build::<AsciiTable>(&words);
        let sparse = build::<CharTable>(&words);
        prop_assert_eq!(dense.size(), sparse.size());
        for probe in probes.iter().chain(&words) {
            prop_assert_eq!(dense.accepts(probe), sparse.accepts(probe));
            prop_assert_eq!(dense.get(probe).unwrap(), sparse.get(probe).unwrap());
        }
    }

    #[test]
    fn size_grows_by_at_most_word_length(words in words()) {
        let mut fsm = Fsm::<AsciiTable>::new();
        prop_assert_eq!(fsm.size(), 2);
        for word in &words {
            let before = fsm.size();
            fsm.insert(word).unwrap();
            prop_assert!(fsm.size() <= before + word.chars().count());
        }
    }

    #[test]
    fn clone_and_swap_keep_tries_apart(left in words(), right in words(), extra in "[a-e]{1,6}") {
        let mut a = build::<CharTable>(&left);
        let mut b = build::<CharTable>(&right);
        let a_before = a.clone();
        let b_before = b.clone();

        a.swap(&mut b);
        for word in left.iter().chain(&right) {
            prop_assert_eq!(a.get(word).unwrap(), b_before.get(word).unwrap());
            prop_assert_eq!(b.get(word).unwrap(), a_before.get(word).unwrap());
        }

        let mut copy = a.clone();
        copy.insert(&extra, usize::MAX).unwrap();
        prop_assert_eq!(a.get(&extra).unwrap(), b_before.get(&extra).unwrap());
        prop_assert_eq!(copy.get(&extra).unwrap(), Some(&usize::MAX));
    }
}

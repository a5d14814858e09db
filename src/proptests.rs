use crate::Trie;

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
enum Op {
    Put(Vec<u8>, u64),
    Remove(Vec<u8>),
    Get(Vec<u8>),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // Short keys over a tiny alphabet collide constantly, which is what
    // exercises the overwrite, shared-prefix, and prune paths.
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'd']), 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        5 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Put(k, v)),
        3 => key.clone().prop_map(Op::Remove),
        2 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=120)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_matches_btreemap(ops in ops_strategy()) {
        let mut trie = Trie::new();
        let mut model: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in &ops {
            match op {
                Op::Put(key, value) => {
                    trie = trie.put(key, *value);
                    model.insert(key.clone(), *value);
                }
                Op::Remove(key) => {
                    let next = trie.remove(key);
                    let existed = model.remove(key).is_some();
                    // Removing an absent key must return the identical
                    // root, removing a present one must not.
                    prop_assert_eq!(!next.ptr_eq(&trie), existed);
                    trie = next;
                }
                Op::Get(key) => {
                    prop_assert_eq!(trie.get::<u64>(key), model.get(key));
                }
            }
        }

        for (key, value) in &model {
            prop_assert_eq!(trie.get::<u64>(key), Some(value));
        }
    }

    #[test]
    fn prop_history_stays_frozen(ops in ops_strategy()) {
        let mut trie = Trie::new();
        let mut model: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
        let mut history = vec![(trie.clone(), model.clone())];
        let mut touched: BTreeSet<Vec<u8>> = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Put(key, value) => {
                    touched.insert(key.clone());
                    trie = trie.put(key, *value);
                    model.insert(key.clone(), *value);
                    history.push((trie.clone(), model.clone()));
                }
                Op::Remove(key) => {
                    touched.insert(key.clone());
                    trie = trie.remove(key);
                    model.remove(key);
                    history.push((trie.clone(), model.clone()));
                }
                Op::Get(_) => {}
            }
        }

        // Every historical snapshot still answers exactly as it did
        // when it was taken, no matter what happened afterwards.
        for (snapshot, frozen) in &history {
            for key in &touched {
                prop_assert_eq!(snapshot.get::<u64>(key), frozen.get(key));
            }
        }
    }
}

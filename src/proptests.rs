use crate::trie::tests::census;
use crate::{ByteTrie, TrieError};

use proptest::prelude::*;
use std::collections::BTreeMap;

const MEMBER_SIZE: usize = 4;

fn validate_trie(t: &ByteTrie) {
    let (nodes, values) = census(t);
    assert_eq!(nodes, t.node_count(), "reachable nodes must match node_count");
    assert_eq!(values, t.len(), "valued nodes must match ByteTrie::len");
}

#[derive(Clone, Debug)]
enum Op {
    Add(Vec<u8>, [u8; MEMBER_SIZE]),
    Remove(Vec<u8>),
    Get(Vec<u8>),
    Set(Vec<u8>, [u8; MEMBER_SIZE]),
    Recreate,
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A small alphabet keeps collisions and shared prefixes frequent. The
    // high bytes catch any signed indexing of child slots.
    let byte = prop::sample::select(vec![0x00u8, 0x01, 0x7f, 0x80, 0xfe, 0xff]);
    prop::collection::vec(byte, 0..=5)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        40 => (key.clone(), any::<[u8; MEMBER_SIZE]>()).prop_map(|(k, v)| Op::Add(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        20 => key.clone().prop_map(Op::Get),
        14 => (key.clone(), any::<[u8; MEMBER_SIZE]>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => Just(Op::Recreate),
    ];
    prop::collection::vec(op, 0..=1000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t = ByteTrie::new(MEMBER_SIZE);
        let mut m: BTreeMap<Vec<u8>, [u8; MEMBER_SIZE]> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Add(key, value) => {
                    prop_assert_eq!(t.add(&key, &value), Ok(()));
                    m.insert(key, value);
                }
                Op::Remove(key) => {
                    let expected = m.remove(&key).map(drop).ok_or(TrieError::AccessOutOfBound);
                    prop_assert_eq!(t.remove(&key), expected);
                }
                Op::Get(key) => {
                    let mut out = [0u8; MEMBER_SIZE];
                    let got = t.get(&key, &mut out).map(|()| out);
                    let expected = m.get(&key).copied().ok_or(TrieError::AccessOutOfBound);
                    prop_assert_eq!(got, expected);
                }
                Op::Set(key, value) => {
                    let expected = match m.get_mut(&key) {
                        Some(slot) => {
                            *slot = value;
                            Ok(())
                        }
                        None => Err(TrieError::AccessOutOfBound),
                    };
                    prop_assert_eq!(t.set(&key, &value), expected);
                }
                Op::Recreate => {
                    t.destroy();
                    prop_assert_eq!(t.node_count(), 0);
                    t.create(MEMBER_SIZE);
                    m.clear();
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_trie(&t);
        for (key, value) in &m {
            prop_assert_eq!(t.get_ref(key), Ok(&value[..]));
        }
    }

    #[test]
    fn prop_distinct_keys_counted_once(keys in prop::collection::btree_set(key_strategy(), 1..64)) {
        let mut t = ByteTrie::new(0);
        for key in &keys {
            t.add(key, &[]).unwrap();
            t.add(key, &[]).unwrap();
        }
        prop_assert_eq!(t.len(), keys.len());

        let first = keys.iter().next().unwrap();
        t.remove(first).unwrap();
        prop_assert_eq!(t.len(), keys.len() - 1);
        prop_assert!(!t.contains_key(first));
        validate_trie(&t);
    }
}

#[test]
fn exhaustive_remove_order_small_set() {
    fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
        fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
            if out.len() == items.len() {
                f(out.clone());
                return;
            }
            for i in 0..items.len() {
                if used[i] {
                    continue;
                }
                used[i] = true;
                out.push(items[i].clone());
                rec(items, used, out, f);
                out.pop();
                used[i] = false;
            }
        }

        let mut used = vec![false; items.len()];
        let mut out = Vec::with_capacity(items.len());
        rec(items, &mut used, &mut out, &mut f);
    }

    let keys: Vec<Vec<u8>> = vec![
        b"".to_vec(),
        b"a".to_vec(),
        b"ab".to_vec(),
        b"abc".to_vec(),
        b"b".to_vec(),
        vec![0xff],
    ];

    for_each_permutation(&keys, |perm| {
        let mut t = ByteTrie::new(1);
        let mut m: BTreeMap<Vec<u8>, u8> = BTreeMap::new();
        for (i, k) in keys.iter().enumerate() {
            t.add(k, &[i as u8]).unwrap();
            m.insert(k.clone(), i as u8);
        }
        let nodes = t.node_count();

        for k in perm {
            assert_eq!(t.remove(&k), Ok(()));
            m.remove(&k);
            assert_eq!(t.len(), m.len());
            for (key, value) in &m {
                assert_eq!(t.get_ref(key), Ok(&[*value][..]));
            }
            validate_trie(&t);
        }
        assert!(t.is_empty());
        assert_eq!(t.node_count(), nodes);
    });
}

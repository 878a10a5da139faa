use crate::avl_tree::AvlSet;
use crate::splay_tree::SplaySet;

use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    Remove(u16),
    Contains(u16),
    Clear,
}

// A narrow key range so that removals and duplicate inserts hit existing keys often.
fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = 0u16..512;
    let op = prop_oneof![
        50 => key.clone().prop_map(Op::Insert),
        30 => key.clone().prop_map(Op::Remove),
        19 => key.prop_map(Op::Contains),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=1000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_avl_equivalence(ops in ops_strategy()) {
        let mut set = AvlSet::new();
        let mut expected = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(set.insert(key), expected.insert(key));
                },
                Op::Remove(key) => {
                    let len = set.len();
                    let removed = set.remove(&key);
                    prop_assert_eq!(removed, expected.remove(&key));
                    prop_assert!(!set.contains(&key));
                    if !removed {
                        prop_assert_eq!(set.len(), len);
                    }
                },
                Op::Contains(key) => {
                    prop_assert_eq!(set.contains(&key), expected.contains(&key));
                    prop_assert_eq!(set.get(&key), expected.get(&key));
                },
                Op::Clear => {
                    set.clear();
                    expected.clear();
                },
            }
            set.check_consistency();
            prop_assert_eq!(set.len(), expected.len());
        }

        prop_assert!(set.iter().eq(expected.iter()));
        // An avl tree with n nodes is never taller than 1.44 * log2(n + 2).
        let bound = 1.45 * ((set.len() + 2) as f64).log2();
        prop_assert!((set.height() as f64) <= bound);
    }

    #[test]
    fn prop_splay_equivalence(ops in ops_strategy()) {
        let mut set = SplaySet::new();
        let mut expected = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(set.insert(key), expected.insert(key));
                    prop_assert_eq!(set.root(), Some(&key));
                },
                Op::Remove(key) => {
                    let len = set.len();
                    let removed = set.remove(&key);
                    prop_assert_eq!(removed, expected.remove(&key));
                    prop_assert!(!set.contains(&key));
                    if !removed {
                        prop_assert_eq!(set.len(), len);
                    }
                },
                Op::Contains(key) => {
                    let present = expected.contains(&key);
                    prop_assert_eq!(set.contains(&key), present);
                    if present {
                        prop_assert_eq!(set.root(), Some(&key));
                    }
                    prop_assert_eq!(set.get(&key).cloned(), expected.get(&key).cloned());
                },
                Op::Clear => {
                    set.clear();
                    expected.clear();
                },
            }
            set.check_consistency();
            prop_assert_eq!(set.len(), expected.len());
        }

        prop_assert!(set.iter().eq(expected.iter()));
    }

    #[test]
    fn prop_floor_ceil(keys in prop::collection::vec(0u16..1024, 0..=200), probe in 0u16..1024) {
        let expected: BTreeSet<u16> = keys.iter().cloned().collect();
        let mut avl = AvlSet::new();
        let mut splay = SplaySet::new();
        for key in keys {
            avl.insert(key);
            splay.insert(key);
        }

        let floor = expected.range(..=probe).next_back();
        let ceil = expected.range(probe..).next();
        prop_assert_eq!(avl.floor(&probe), floor);
        prop_assert_eq!(avl.ceil(&probe), ceil);
        prop_assert_eq!(splay.floor(&probe), floor);
        prop_assert_eq!(splay.ceil(&probe), ceil);
        prop_assert_eq!(avl.min(), expected.iter().next());
        prop_assert_eq!(splay.max(), expected.iter().next_back());
    }
}

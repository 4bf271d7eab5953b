use mirror_core::{NullLogger, ReconcileOptions, Reconciler};
use mirror_test_utils::MirrorPair;
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    // Small name space so source and destination overlap often
    btree_map("[a-f]{1,2}\\.txt", vec(any::<u8>(), 0..64), 0..8)
}

fn build(source: &BTreeMap<String, Vec<u8>>, dest: &BTreeMap<String, Vec<u8>>) -> MirrorPair {
    let pair = MirrorPair::new();
    for (name, content) in source {
        pair.write_source(name, content);
    }
    for (name, content) in dest {
        pair.write_dest(name, content);
    }
    pair
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn one_pass_converges(source in tree(), dest in tree()) {
        let pair = build(&source, &dest);
        let mut reconciler = Reconciler::new(ReconcileOptions::default(), NullLogger);

        let pass = reconciler.reconcile(pair.source(), pair.destination()).unwrap();

        prop_assert!(pass.is_clean());
        prop_assert_eq!(pair.dest_files(), source);
    }

    #[test]
    fn second_pass_is_idempotent(source in tree(), dest in tree()) {
        let pair = build(&source, &dest);
        let mut reconciler = Reconciler::new(ReconcileOptions::default(), NullLogger);

        reconciler.reconcile(pair.source(), pair.destination()).unwrap();
        let second = reconciler.reconcile(pair.source(), pair.destination()).unwrap();

        prop_assert_eq!(second.operation_count(), 0);
    }

    #[test]
    fn identical_entries_are_never_copied(source in tree(), dest in tree()) {
        let pair = build(&source, &dest);
        let mut reconciler = Reconciler::new(ReconcileOptions::default(), NullLogger);

        let pass = reconciler.reconcile(pair.source(), pair.destination()).unwrap();

        for op in &pass.applied {
            let name = op.name().to_string_lossy().into_owned();
            if let (Some(s), Some(d)) = (source.get(&name), dest.get(&name)) {
                prop_assert_ne!(s, d, "{} was copied despite equal content", name);
            }
        }
        let expected_ops = source
            .iter()
            .filter(|(name, content)| dest.get(*name) != Some(*content))
            .count()
            + dest.keys().filter(|name| !source.contains_key(*name)).count();
        prop_assert_eq!(pass.operation_count(), expected_ops);
    }
}

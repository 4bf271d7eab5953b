//! End-to-end tests of the poll loop
//!
//! These drive several passes through [`Driver`] and mutate the trees
//! between passes, the way external writers would while the mirror runs.

use mirror_core::{Driver, FileLogger, NullLogger, OperationKind, ReconcileOptions, Reconciler};
use mirror_test_utils::MirrorPair;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(5);

#[test]
fn changes_between_passes_are_picked_up_next_pass() {
    let pair = MirrorPair::new().with_source_file("a.txt", "v1");
    let source = pair.source().to_path_buf();
    let counts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&counts);
    let mut pass_no = 0u32;

    let mut driver = Driver::new(
        Reconciler::new(
            ReconcileOptions::default(),
            FileLogger::new(pair.root().join("sync.log")),
        ),
        pair.source(),
        pair.destination(),
        TICK,
    )
    .unwrap()
    .with_observer(move |pass| {
        sink.borrow_mut().push((
            pass.count(OperationKind::Create),
            pass.count(OperationKind::Update),
            pass.count(OperationKind::Delete),
        ));
        pass_no += 1;
        match pass_no {
            1 => fs::write(source.join("a.txt"), "v2").unwrap(),
            2 => fs::remove_file(source.join("a.txt")).unwrap(),
            _ => {}
        }
    });

    driver.run_passes(4).unwrap();

    assert_eq!(
        *counts.borrow(),
        vec![(1, 0, 0), (0, 1, 0), (0, 0, 1), (0, 0, 0)]
    );
    pair.assert_mirrored();
    assert!(pair.dest_files().is_empty());
}

#[test]
fn diverged_destination_is_overwritten() {
    let pair = MirrorPair::new().with_source_file("config.ini", "mode=source");
    let destination = pair.destination().to_path_buf();
    let mut pass_no = 0u32;

    let mut driver = Driver::new(
        Reconciler::new(ReconcileOptions::default(), NullLogger),
        pair.source(),
        pair.destination(),
        TICK,
    )
    .unwrap()
    .with_observer(move |_| {
        pass_no += 1;
        if pass_no == 1 {
            fs::write(destination.join("config.ini"), "mode=local-edit").unwrap();
            fs::write(destination.join("extra.tmp"), "scratch").unwrap();
        }
    });

    driver.run_passes(2).unwrap();

    pair.assert_dest_file("config.ini", "mode=source");
    pair.assert_dest_missing("extra.tmp");
}

#[test]
fn destination_removed_mid_run_stops_the_driver() {
    let pair = MirrorPair::new().with_source_file("a.txt", "a");
    let destination = pair.destination().to_path_buf();

    let mut driver = Driver::new(
        Reconciler::new(ReconcileOptions::default(), NullLogger),
        pair.source(),
        pair.destination(),
        TICK,
    )
    .unwrap()
    .with_observer(move |_| {
        let _ = fs::remove_dir_all(&destination);
    });

    let err = driver.run_passes(3).unwrap_err();

    assert!(matches!(
        err,
        mirror_core::Error::Fs(mirror_fs::Error::DirectoryAccess { .. })
    ));
}

#[test]
fn log_records_every_pass() {
    let pair = MirrorPair::new().with_source_file("a.txt", "a");
    let log = pair.root().join("sync.log");

    let mut driver = Driver::new(
        Reconciler::new(ReconcileOptions::default(), FileLogger::new(&log)),
        pair.source(),
        pair.destination(),
        TICK,
    )
    .unwrap();
    driver.run_passes(3).unwrap();

    let content = fs::read_to_string(&log).unwrap();
    assert_eq!(content.matches("Syncing files from").count(), 3);
    assert_eq!(content.matches("Sync completed from").count(), 3);
    assert_eq!(content.matches("Copying a.txt").count(), 1);
}

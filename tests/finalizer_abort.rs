//! A finalizer which panics in the middle of a removal takes the whole process down when `unwind_safety` is enabled.
#![cfg(feature = "unwind_safety")]

use bitree::{Finalizer, Forest};
use std::{env, process::Command};

const CHILD_VAR: &str = "BITREE_FINALIZER_ABORT_CHILD";

fn remove_with_panicking_finalizer() {
    let mut forest = Forest::<_>::new();
    let root = forest.create(Some(Finalizer::new(|_: u8| panic!("finalizer refused"))), 0);
    forest.insert_left(root, 1).unwrap();
    forest.remove(root);
}

#[test]
fn panicking_finalizer_aborts() {
    if env::var_os(CHILD_VAR).is_some() {
        remove_with_panicking_finalizer();
        // Only reached if the panic was swallowed.
        std::process::exit(0);
    }
    let status = Command::new(env::current_exe().unwrap())
        .args(["--exact", "panicking_finalizer_aborts", "--nocapture", "--test-threads=1"])
        .env(CHILD_VAR, "1")
        .status()
        .unwrap();
    assert!(!status.success());
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(status.signal(), Some(6), "expected SIGABRT, got {:?}", status);
    }
}

/// Runs a closure supplied by the user, aborting the process if it panics while the `unwind_safety` feature is enabled.
///
/// Finalizers run in the middle of removals, when the forest is only partially updated, so unwinding out of them would leave dangling links behind.
#[inline]
pub(crate) fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
            .unwrap_or_else(|_| std::process::abort())
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}

/// Reports a link between nodes which points nowhere, or a node whose tree record is gone.
///
/// Keys reached by following links inside the forest are always valid unless the forest itself is broken, so this is a bug in the crate rather than in the caller.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn corrupted(what: &str) -> ! {
    panic!("forest corruption: {}", what)
}

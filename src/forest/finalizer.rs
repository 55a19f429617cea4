use alloc::rc::Rc;
use core::{
    fmt::{self, Formatter, Debug},
    ptr,
};
use crate::util::abort_on_panic;

/// A shared callback which receives the payload of every node removed from a tree.
///
/// All nodes of a tree share the finalizer given to [`Forest::create`] for its root. Without a finalizer, payloads are simply dropped.
///
/// Finalizers are compared by *identity*: two finalizers are the same if one is a clone of the other, no matter what the callbacks do. This is what [`Forest::merge`] checks before combining two trees.
///
/// # Example
/// ```rust
/// use bitree::Finalizer;
///
/// let finalizer = Finalizer::new(|payload: String| println!("removing {}", payload));
/// let same = finalizer.clone();
/// let lookalike = Finalizer::new(|payload: String| println!("removing {}", payload));
/// assert!(finalizer.same_as(&same));
/// assert!(!finalizer.same_as(&lookalike));
/// ```
///
/// # Panics
/// Finalizers run while a removal is halfway through relinking the tree. With the `unwind_safety` feature enabled, a panicking finalizer aborts the process instead of unwinding out of the forest. Without it, the panic propagates to the caller of the removal, and the forest must not be used afterwards.
///
/// [`Forest::create`]: struct.Forest.html#method.create " "
/// [`Forest::merge`]: struct.Forest.html#method.merge " "
pub struct Finalizer<T>(Rc<dyn Fn(T)>);
impl<T> Finalizer<T> {
    /// Wraps a closure into a finalizer.
    #[inline]
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }
    /// Returns `true` if both finalizers were created by the same call to [`new`], `false` otherwise.
    ///
    /// [`new`]: #method.new " "
    #[inline]
    pub fn same_as(&self, other: &Self) -> bool {
        // Only the data pointers are compared, vtable pointers are not unique
        ptr::eq(
            Rc::as_ptr(&self.0).cast::<u8>(),
            Rc::as_ptr(&other.0).cast::<u8>(),
        )
    }
    /// Compares optional finalizers, treating the absence of both as a match.
    #[inline]
    pub(crate) fn same_or_both_absent(a: Option<&Self>, b: Option<&Self>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.same_as(b),
            (None, None) => true,
            _ => false,
        }
    }
    /// Runs the finalizer on a payload.
    #[inline]
    pub(crate) fn finalize(&self, payload: T) {
        abort_on_panic(|| (self.0)(payload))
    }
}
impl<T> Clone for Finalizer<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<T> Debug for Finalizer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Finalizer")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

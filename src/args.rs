//! Helpers for variadic-style argument lists.

use std::any::Any;

/// Returns the last argument of callable type `F`.
///
/// Scans `args` from the back and returns the first value whose concrete
/// type is `F`, or `None` if there is no such value. This is useful for
/// signatures which take a trailing completion callback after a variable
/// number of other arguments.
///
/// Closures have unnameable types, so callables are usually passed as
/// function pointers or boxed trait objects.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use seriatim::args::last_fn;
///
/// fn answer() -> i32 {
///     77
/// }
///
/// let done: fn() -> i32 = answer;
/// let args: [&dyn Any; 4] = [&1, &"two", &done, &4.0];
/// let f = last_fn::<fn() -> i32>(&args).unwrap();
/// assert_eq!(f(), 77);
/// ```
pub fn last_fn<'a, F: Any>(args: &[&'a dyn Any]) -> Option<&'a F> {
    args.iter().rev().find_map(|arg| arg.downcast_ref::<F>())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_lists_have_no_callable() {
        assert!(last_fn::<fn()>(&[]).is_none());
    }

    #[test]
    fn other_callable_types_are_skipped() {
        fn unit() {}
        let f: fn() = unit;
        let args: [&dyn Any; 2] = [&f, &"not callable"];
        assert!(last_fn::<fn() -> u8>(&args).is_none());
        assert!(last_fn::<fn()>(&args).is_some());
    }
}

//! Extensions for [`Option`].

#[allow(unused)]
pub(crate) trait OptionExtension<T> {
    /// Unwraps a value which the surrounding structure guarantees is present, such as the link of
    /// a node that is known to be in a list.
    ///
    /// This is not a substitute for [`Option::unwrap`] on user input: reaching the [`None`] branch
    /// means an internal invariant has been broken, so it panics with [`unreachable!`] rather than
    /// producing an error.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("linked structure invariant broken"),
        }
    }
}

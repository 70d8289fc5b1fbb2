//! Extensions for [`Result`].

use std::error::Error;

#[allow(unused)]
pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise panics with the [`Display`](std::fmt::Display) message
    /// of the contained error. This is how the panicking counterparts of `try_*` methods are
    /// written, so that both report the same problem in the same words.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}

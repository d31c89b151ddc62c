use std::error::Error;

/// Turns the typed errors of the `try_*` methods into panics for their plain counterparts.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the success value. An error becomes a panic whose message is the error's
    /// [`Display`](std::fmt::Display) text, reported at the caller's location.
    ///
    /// `push`, `insert`, `remove` and `with_cap` are all `try_*(..).throw()`.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

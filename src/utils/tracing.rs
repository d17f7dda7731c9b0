/// Log a snafu error with its full source chain at the error level. Used at
/// collaborator boundaries where a failure is recorded but never propagated.
#[macro_export]
macro_rules! tracing_report {
    ($error:expr) => {
        tracing::error!(err = %snafu::Report::from_error(&$error));
    };
}

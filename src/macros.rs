/// A nice wrapper for handling errors in the `main()`.
/// Must be called from a `main()` that returns `ExitCode`.
#[macro_export]
macro_rules! err {
    (@private, $result:expr, $format_string:literal, $exit_code:expr) => {
        match $result {
            Ok(v) => v,
            Err(err) => {
                eprintln!($format_string, err);
                return $exit_code;
            }
        }
    };
    ($result:expr, $exit_code:expr) => {
        $crate::err!(@private, $result, "{}", ::std::process::ExitCode::from($exit_code))
    };
    ($result:expr) => {
        $crate::err!(@private, $result, "{}", ::std::process::ExitCode::FAILURE)
    };
}

/// Like `err!()`, but you can directly specify the error message with `&str`/`String`.
/// Must be called from a `main()` that returns `ExitCode`.
#[macro_export]
macro_rules! err_str {
    ($error_string:expr, $exit_code:expr) => {
        $crate::err!(
            ::std::result::Result::<(), _>::Err($crate::Error::OtherError($error_string.into())),
            $exit_code
        )
    };
    ($error_string:expr) => {
        $crate::err!(::std::result::Result::<(), _>::Err($crate::Error::OtherError(
            $error_string.into()
        )))
    };
}

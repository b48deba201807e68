/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!(
                    "expected `Err` from `{}`; actual={:?}",
                    stringify!($e),
                    actual
                );

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's `Display` output otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok` from `{}`; error={}", stringify!($e), e),
        }
    };
}

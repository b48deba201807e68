mod mapping_test;
pub use mapping_test::MappingTest;

pub use std_util::*;

/// Collects column names for comparison against a literal list.
pub fn columns<'a>(iter: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    iter.into_iter().collect()
}

/// Declares a `#[test]` for each test function, each with its own
/// `MappingTest`.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        mod mappings {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::MappingTest::new();
                    super::$f(&mut test);
                }
            )*
        }
    };
}

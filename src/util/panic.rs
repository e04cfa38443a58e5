/// Asserts that the provided block panics. The panic message still gets printed by the default
/// hook, which is fine for tests.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
    };
}

pub(crate) use assert_panics;

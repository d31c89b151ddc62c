/// Asserts that a block panics, catching the unwind so the test can keep inspecting whatever the
/// block borrowed. Used to check that a panicking operation leaves a Sequence intact.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expected the block to panic")
    };
    ($run:block, $msg:literal) => {{
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

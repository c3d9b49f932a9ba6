/// Asserts that a block panics, optionally checking that the panic message contains some text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "block failed to panic");
    };
    ($run:block, contains $text:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("block failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($text),
                    "panic message {:?} doesn't contain {:?}",
                    message,
                    $text
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

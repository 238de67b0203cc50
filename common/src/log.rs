//! Log targets understood by the CLI formatter.

/// Events on this target are rendered with the success symbol.
pub const SUCCESS_TARGET: &str = "crtgen::success";

/// Events on this target carry a `raw_msg` field that is printed verbatim.
pub const PRINT_TARGET: &str = "crtgen::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

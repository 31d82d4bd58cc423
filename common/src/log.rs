/// Target that the terminal formatter renders as a highlighted success line.
pub const SUCCESS_TARGET: &str = "domval::success";

/// Emits an info event on [`SUCCESS_TARGET`].
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "domval::success", $($arg)*)
    };
}

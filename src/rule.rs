/// A scoped setup/teardown around a block of test code.
///
/// [`before`](TestRule::before) performs the setup and returns a guard; dropping
/// the guard performs the teardown. Because the teardown lives in `Drop`, it
/// also runs when the test body panics.
///
/// ```rust
/// # #[cfg(feature = "time-machine")]
/// # fn main() {
/// use cherry::{TestRule, TimeMachine, clock};
///
/// let time_machine = TimeMachine::new();
/// time_machine.apply(|| {
///     time_machine.go_to_and_stay_at(42);
///     assert_eq!(clock::current_time_millis(), 42);
/// });
/// assert!(!clock::is_fixed());
/// # }
/// # #[cfg(not(feature = "time-machine"))]
/// # fn main() {}
/// ```
pub trait TestRule {
    type Guard;

    fn before(&self) -> Self::Guard;

    /// Runs `body` between setup and teardown, returning its result.
    fn apply<R>(&self, body: impl FnOnce() -> R) -> R {
        let _guard = self.before();
        body()
    }
}

// Resilience layer for calls to the external AI provider.
// One retry policy for the whole service — individual flows must not
// hand-roll their own loops or constants.

pub mod backoff;
pub mod classify;
pub mod retry;
pub mod translate;

pub use backoff::BackoffSchedule;
pub use classify::{ErrorClass, Classify};
pub use retry::{invoke_with_retry, RetryPolicy};
pub use translate::{translate, UserMessage};

// Run-once guard for startup work (store seeding)

use crate::error::{AppError, Result};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

type Attempt = Shared<BoxFuture<'static, std::result::Result<(), String>>>;

enum State {
    Pending { next_attempt: u64 },
    Running { attempt: u64, fut: Attempt },
    Done,
}

/// Runs an async initializer at most once successfully.
///
/// - Concurrent callers join the in-flight attempt and all receive its outcome.
/// - A failed attempt leaves the guard pending, so the next call retries.
/// - After success every call returns `Ok(())` without running anything.
///
/// The attempt is a shared future: if the caller that started it is dropped,
/// whoever calls next keeps driving the same attempt.
pub struct InitOnce {
    state: Mutex<State>,
}

impl Default for InitOnce {
    fn default() -> Self {
        Self::new()
    }
}

impl InitOnce {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Pending { next_attempt: 1 }),
        }
    }

    #[cfg(test)]
    fn is_done(&self) -> bool {
        matches!(*self.lock(), State::Done)
    }

    /// Run `init` unless a previous call already succeeded
    pub async fn call<F, Fut>(&self, init: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let (attempt, fut) = {
            let mut state = self.lock();
            match &*state {
                State::Done => return Ok(()),
                State::Running { attempt, fut } => {
                    debug!(attempt, "Joining in-flight initialization");
                    (*attempt, fut.clone())
                }
                State::Pending { next_attempt } => {
                    let attempt = *next_attempt;
                    debug!(attempt, "Starting initialization");
                    let fut = init()
                        .map(|res| res.map_err(failure_message))
                        .boxed()
                        .shared();
                    *state = State::Running {
                        attempt,
                        fut: fut.clone(),
                    };
                    (attempt, fut)
                }
            }
        };

        let outcome = fut.await;

        {
            let mut state = self.lock();
            // Only the first waiter to get here settles this attempt
            if matches!(&*state, State::Running { attempt: current, .. } if *current == attempt) {
                *state = match &outcome {
                    Ok(()) => State::Done,
                    Err(msg) => {
                        warn!(attempt, error = %msg, "Initialization failed; next call will retry");
                        State::Pending {
                            next_attempt: attempt + 1,
                        }
                    }
                };
            }
        }

        outcome.map_err(AppError::SeedFailure)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn failure_message(err: AppError) -> String {
    match err {
        AppError::SeedFailure(msg) => msg,
        other => other.to_string(),
    }
}

use std::time::Duration;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for service methods providing retry logic
///
/// `T` is state kept between attempts so an attempt can skip work an earlier one already did,
/// use `()` when there is nothing worth keeping.
pub struct RetryContext<T> {
    /// State shared between attempts
    cache: T,
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts, doubled after every failure
    initial_backoff: Duration,
}

impl<T> RetryContext<T>
where
    T: Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);

    pub fn new() -> Self {
        Self {
            cache: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Execute a method with automatic retry logic
    ///
    /// Errors classified as [`ErrorRetryStrategy::Retry`] are retried with exponential backoff
    /// up to the max attempts, every other error is returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "attendance request for event ID 3")
    /// - `operation`: Async function performing one attempt, receiving the state shared between attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation(&mut self.cache).await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Not retrying {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T: Default> Default for RetryContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

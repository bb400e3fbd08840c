use sea_orm::{DbErr, SqlErr};

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, expected rejection)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = db_err.sql_err() {
                    // Two first registrations of the same user raced on the (event, user) key,
                    // the next attempt sees the winner's row and takes the update path.
                    return ErrorRetryStrategy::Retry;
                }

                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (check constraints, syntax errors, etc.)
                    // - Type conversion errors
                    // - Schema/migration errors
                    // - Record not found/inserted/updated
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - permanent failures (missing session, missing permission)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Domain rejections - the answer won't change by asking again
            Self::EventError(_) => ErrorRetryStrategy::Fail,
            Self::RegistrationError(_) => ErrorRetryStrategy::Fail,
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // I/O errors - only raised while starting the server
            Self::IoError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within Barrio's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

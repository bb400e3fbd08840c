use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves user information from session and then from database
///
/// Inactive users are signed out, their session user ID is removed.
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserModel)`: Active user found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session, or the user is inactive
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    // Get user from session
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    // Get user from database
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    if !user.is_active {
        SessionUserId::remove(session).await?;

        tracing::debug!("Signed out inactive user ID {}", user_id);

        return Err(Error::AuthError(AuthError::UserNotInSession));
    }

    Ok(user)
}

/// Like [`get_user_from_session`] but anonymous visitors resolve to `None`
///
/// A session pointing at a missing or inactive user also resolves to `None`.
pub async fn get_optional_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<Option<UserModel>, Error> {
    match get_user_from_session(state, session).await {
        Ok(user) => Ok(Some(user)),
        Err(Error::AuthError(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

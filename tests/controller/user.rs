//! Tests for the signed-in user's registration list.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use barrio::{
    model::registration::UserRegistrationDto,
    server::{controller::user::get_user_registrations, model::session::user::SessionUserId},
};
use entity::sea_orm_active_enums::Role;

use super::*;

/// Expect only the user's own registrations, with event and total cost
#[tokio::test]
async fn lists_own_registrations() -> Result<(), TestError> {
    let test = test_setup_with_barrio_tables!()?;
    let user = test.user().insert_user("alice", Role::Resident).await?;
    let other = test.user().insert_user("bob", Role::Resident).await?;
    let first = test.event().insert_approved_event(other.id, 10).await?;
    let second = test.event().insert_approved_event(other.id, 10).await?;
    test.registration()
        .insert_registration(first.id, user.id, 2)
        .await?;
    test.registration()
        .insert_registration(second.id, other.id, 1)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_user_registrations(State(test.state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let registrations: Vec<UserRegistrationDto> = body_json(resp).await;
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].event.id, first.id);
    assert_eq!(registrations[0].registration.quantity, 2);

    Ok(())
}

/// Expect 401 without a signed-in user
#[tokio::test]
async fn unauthorized_when_not_signed_in() -> Result<(), TestError> {
    let test = test_setup_with_barrio_tables!()?;

    let result = get_user_registrations(State(test.state()), test.session.clone()).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}

/// Expect 404 and a cleared session when the session points at a deleted user
#[tokio::test]
async fn not_found_when_user_missing() -> Result<(), TestError> {
    let test = test_setup_with_barrio_tables!()?;
    SessionUserId::insert(&test.session, 99).await.unwrap();

    let result = get_user_registrations(State(test.state()), test.session.clone()).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

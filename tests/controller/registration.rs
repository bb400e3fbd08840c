//! Tests for the attendance endpoints: quote, request and own registration.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use barrio::{
    model::registration::{
        AttendanceQuery, AttendanceQuoteDto, AttendanceRequestDto, RegistrationDto,
    },
    server::{
        controller::registration::{
            get_attendance_quote, get_own_registration, request_attendance,
        },
        model::session::user::SessionUserId,
        util::time::today,
    },
};
use barrio_test_utils::model::{EventModel, UserModel};
use entity::sea_orm_active_enums::{EventStatus, Role};

use super::*;

fn checkout(quantity: i32) -> AttendanceRequestDto {
    AttendanceRequestDto {
        quantity: Some(quantity),
        name: "Alice Doe".to_string(),
        email: "alice@example.com".to_string(),
        email_confirmation: "Alice@Example.com".to_string(),
        phone: None,
    }
}

mod request_attendance {
    use super::*;

    /// Expect the registration to be stored with its total cost
    #[tokio::test]
    async fn stores_registration_with_total_cost() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test
            .event()
            .insert(EventModel {
                capacity: 10,
                price: 2500,
                ..factory::event(user.id)
            })
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(checkout(3)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let registration: RegistrationDto = body_json(resp).await;
        assert_eq!(registration.quantity, 3);
        assert_eq!(registration.total_cost, 7500);

        Ok(())
    }

    /// Expect a second request to overwrite, not add to, the stored quantity
    #[tokio::test]
    async fn overwrites_existing_quantity() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        for quantity in [4, 1] {
            let result = request_attendance(
                State(test.state()),
                test.session.clone(),
                Path(event.id),
                Json(checkout(quantity)),
            )
            .await;
            assert!(result.is_ok());
        }

        let result =
            get_own_registration(State(test.state()), test.session.clone(), Path(event.id)).await;
        let registration: RegistrationDto = body_json(result.unwrap()).await;
        assert_eq!(registration.quantity, 1);

        Ok(())
    }

    /// Expect 409 when the event is sold out
    #[tokio::test]
    async fn conflict_when_sold_out() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let other = test.user().insert_user("bob", Role::Resident).await?;
        let event = test.event().insert_approved_event(other.id, 2).await?;
        test.registration()
            .insert_registration(event.id, other.id, 2)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(checkout(1)),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 409 for an event awaiting review
    #[tokio::test]
    async fn conflict_when_pending() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test
            .event()
            .insert_event_with_status(user.id, EventStatus::Pending)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(checkout(1)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 403 for a minor requesting an adults only event
    #[tokio::test]
    async fn forbidden_for_minor_on_adults_only_event() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test
            .user()
            .insert_user_born("teen", factory::birth_date_for_age(today(), 16))
            .await?;
        let event = test
            .event()
            .insert(EventModel {
                adults_only: true,
                ..factory::event(user.id)
            })
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(checkout(1)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 422 when the email confirmation does not match
    #[tokio::test]
    async fn rejects_mismatched_email_confirmation() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(AttendanceRequestDto {
                email_confirmation: "someone@example.com".to_string(),
                ..checkout(1)
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }

    /// Expect 401 without a signed-in user
    #[tokio::test]
    async fn unauthorized_when_not_signed_in() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(checkout(1)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 for a deactivated account and the session to be cleared
    #[tokio::test]
    async fn unauthorized_for_inactive_user() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test
            .user()
            .insert(UserModel {
                is_active: false,
                ..factory::user("alice")
            })
            .await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = request_attendance(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(checkout(1)),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}

mod get_attendance_quote {
    use super::*;

    /// Expect the quote to clamp to remaining seats without writing
    #[tokio::test]
    async fn clamps_without_writing() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let other = test.user().insert_user("bob", Role::Resident).await?;
        let event = test
            .event()
            .insert(EventModel {
                capacity: 4,
                price: 1000,
                ..factory::event(other.id)
            })
            .await?;
        test.registration()
            .insert_registration(event.id, other.id, 2)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = get_attendance_quote(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Query(AttendanceQuery { quantity: Some(5) }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let quote: AttendanceQuoteDto = body_json(resp).await;
        assert_eq!(quote.quantity, 2);
        assert_eq!(quote.total_cost, 2000);
        assert_eq!(quote.remaining, Some(2));
        assert!(!quote.already_registered);

        let result =
            get_own_registration(State(test.state()), test.session.clone(), Path(event.id)).await;
        assert_eq!(result.unwrap().status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_own_registration {
    use super::*;

    /// Expect 404 when the user holds no seats
    #[tokio::test]
    async fn not_found_without_registration() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result =
            get_own_registration(State(test.state()), test.session.clone(), Path(event.id)).await;

        assert_eq!(result.unwrap().status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect the stored quantity and total cost
    #[tokio::test]
    async fn returns_registration() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test
            .event()
            .insert(EventModel {
                price: 300,
                ..factory::event(user.id)
            })
            .await?;
        test.registration()
            .insert_registration(event.id, user.id, 4)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result =
            get_own_registration(State(test.state()), test.session.clone(), Path(event.id)).await;

        let resp = result.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let registration: RegistrationDto = body_json(resp).await;
        assert_eq!(registration.quantity, 4);
        assert_eq!(registration.total_cost, 1200);

        Ok(())
    }
}

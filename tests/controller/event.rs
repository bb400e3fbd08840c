//! Tests for the event endpoints: listing, submission, edit, delete, detail and availability.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use barrio::{
    model::event::{AvailabilityDto, EventDetailDto, EventDto, EventFormDto, EventListQuery},
    server::{
        controller::event::{
            create_event, delete_event, get_availability, get_event, list_events,
            list_localities, update_event,
        },
        model::session::user::SessionUserId,
    },
};
use barrio_test_utils::model::EventModel;
use entity::sea_orm_active_enums::{EventStatus, Role};

use super::*;

fn form(title: &str) -> EventFormDto {
    EventFormDto {
        title: title.to_string(),
        description: "Bring your own mug".to_string(),
        address: "Calle Larga 12".to_string(),
        locality: Some("Ñuñoa".to_string()),
        capacity: 20,
        ..Default::default()
    }
}

mod list_events {
    use super::*;

    /// Expect only approved events to be listed
    #[tokio::test]
    async fn lists_only_approved_events() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let approved = test.event().insert_approved_event(user.id, 0).await?;
        test.event()
            .insert_event_with_status(user.id, EventStatus::Pending)
            .await?;
        test.event()
            .insert_event_with_status(user.id, EventStatus::Rejected)
            .await?;

        let result = list_events(
            State(test.state()),
            test.session.clone(),
            Query(EventListQuery::default()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let events: Vec<EventDto> = body_json(resp).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, approved.id);

        Ok(())
    }

    /// Expect the text filter to match case-insensitively
    #[tokio::test]
    async fn filters_by_text() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let market = test
            .event()
            .insert(EventModel {
                title: "Farmers Market".to_string(),
                ..factory::event(user.id)
            })
            .await?;
        test.event()
            .insert(EventModel {
                title: "Chess night".to_string(),
                description: "Boards provided".to_string(),
                ..factory::event(user.id)
            })
            .await?;

        let result = list_events(
            State(test.state()),
            test.session.clone(),
            Query(EventListQuery {
                q: Some("farmers".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        let events: Vec<EventDto> = body_json(resp).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, market.id);

        Ok(())
    }

    /// Expect `mine` to keep only events the signed-in user registered for
    #[tokio::test]
    async fn filters_own_registrations() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let joined = test.event().insert_approved_event(user.id, 10).await?;
        test.event().insert_approved_event(user.id, 10).await?;
        test.registration()
            .insert_registration(joined.id, user.id, 2)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = list_events(
            State(test.state()),
            test.session.clone(),
            Query(EventListQuery {
                mine: Some(true),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        let events: Vec<EventDto> = body_json(resp).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, joined.id);

        Ok(())
    }

    /// Expect `mine` to be ignored for anonymous viewers
    #[tokio::test]
    async fn ignores_mine_for_anonymous_viewer() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        test.event().insert_approved_event(user.id, 10).await?;
        test.event().insert_approved_event(user.id, 10).await?;

        let result = list_events(
            State(test.state()),
            test.session.clone(),
            Query(EventListQuery {
                mine: Some(true),
                ..Default::default()
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        let events: Vec<EventDto> = body_json(resp).await;
        assert_eq!(events.len(), 2);

        Ok(())
    }
}

mod list_localities {
    use super::*;

    /// Expect distinct localities
    #[tokio::test]
    async fn returns_distinct_localities() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        test.event().insert_approved_event(user.id, 0).await?;
        test.event().insert_approved_event(user.id, 0).await?;
        test.event()
            .insert(EventModel {
                locality: Some("Maipú".to_string()),
                ..factory::event(user.id)
            })
            .await?;

        let result = list_localities(State(test.state())).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let mut localities: Vec<String> = body_json(resp).await;
        localities.sort();
        assert_eq!(localities, vec!["Maipú".to_string(), "Providencia".to_string()]);

        Ok(())
    }
}

mod create_event {
    use super::*;

    /// Expect 201 and a pending event regardless of the submitter's role
    #[tokio::test]
    async fn stores_event_as_pending() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("mod", Role::Moderator).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result =
            create_event(State(test.state()), test.session.clone(), Json(form("Tea"))).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let event: EventDto = body_json(resp).await;
        assert_eq!(event.status, EventStatus::Pending);
        assert_eq!(event.created_by, user.id);

        Ok(())
    }

    /// Expect 401 without a signed-in user
    #[tokio::test]
    async fn fails_when_not_signed_in() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;

        let result =
            create_event(State(test.state()), test.session.clone(), Json(form("Tea"))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 422 when the end date precedes the start date
    #[tokio::test]
    async fn rejects_inverted_dates() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let today = barrio::server::util::time::today();
        let result = create_event(
            State(test.state()),
            test.session.clone(),
            Json(EventFormDto {
                start_date: Some(today + chrono::Days::new(3)),
                end_date: Some(today + chrono::Days::new(1)),
                ..form("Tea")
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }

    /// Expect 422 for a negative capacity
    #[tokio::test]
    async fn rejects_negative_capacity() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_event(
            State(test.state()),
            test.session.clone(),
            Json(EventFormDto {
                capacity: -1,
                ..form("Tea")
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}

mod update_event {
    use super::*;

    /// Expect the creator to be able to edit their event
    #[tokio::test]
    async fn creator_can_edit() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = update_event(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(form("Renamed")),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: EventDto = body_json(resp).await;
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.status, EventStatus::Approved);

        Ok(())
    }

    /// Expect 403 for another resident
    #[tokio::test]
    async fn other_resident_is_forbidden() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let owner = test.user().insert_user("alice", Role::Resident).await?;
        let other = test.user().insert_user("bob", Role::Resident).await?;
        let event = test.event().insert_approved_event(owner.id, 10).await?;
        SessionUserId::insert(&test.session, other.id).await.unwrap();

        let result = update_event(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(form("Renamed")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect a moderator to edit events they did not create
    #[tokio::test]
    async fn moderator_can_edit() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let owner = test.user().insert_user("alice", Role::Resident).await?;
        let moderator = test.user().insert_user("mod", Role::Moderator).await?;
        let event = test.event().insert_approved_event(owner.id, 10).await?;
        SessionUserId::insert(&test.session, moderator.id)
            .await
            .unwrap();

        let result = update_event(
            State(test.state()),
            test.session.clone(),
            Path(event.id),
            Json(form("Renamed")),
        )
        .await;

        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }
}

mod delete_event {
    use super::*;

    /// Expect 204 for the creator and 404 on a later detail request
    #[tokio::test]
    async fn creator_can_delete() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = delete_event(State(test.state()), test.session.clone(), Path(event.id)).await;
        assert_eq!(
            result.unwrap().into_response().status(),
            StatusCode::NO_CONTENT
        );

        let result = get_event(State(test.state()), test.session.clone(), Path(event.id)).await;
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }

    /// Expect 403 for another resident
    #[tokio::test]
    async fn other_resident_is_forbidden() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let owner = test.user().insert_user("alice", Role::Resident).await?;
        let other = test.user().insert_user("bob", Role::Resident).await?;
        let event = test.event().insert_approved_event(owner.id, 10).await?;
        SessionUserId::insert(&test.session, other.id).await.unwrap();

        let result = delete_event(State(test.state()), test.session.clone(), Path(event.id)).await;

        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::FORBIDDEN
        );

        Ok(())
    }
}

mod get_event {
    use super::*;

    /// Expect availability and the viewer's registration in the detail
    #[tokio::test]
    async fn includes_availability_and_registration() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let other = test.user().insert_user("bob", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 10).await?;
        test.registration()
            .insert_registration(event.id, user.id, 2)
            .await?;
        test.registration()
            .insert_registration(event.id, other.id, 3)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = get_event(State(test.state()), test.session.clone(), Path(event.id)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let detail: EventDetailDto = body_json(resp).await;
        assert_eq!(detail.availability.occupied, 5);
        assert_eq!(detail.availability.available, Some(5));
        assert_eq!(detail.registration.map(|r| r.quantity), Some(2));
        assert!(detail.eligible_by_age);

        Ok(())
    }

    /// Expect pending events to look missing to residents
    #[tokio::test]
    async fn hides_pending_event_from_resident() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test
            .event()
            .insert_event_with_status(user.id, EventStatus::Pending)
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = get_event(State(test.state()), test.session.clone(), Path(event.id)).await;

        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }

    /// Expect moderators to see pending events
    #[tokio::test]
    async fn shows_pending_event_to_moderator() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let moderator = test.user().insert_user("mod", Role::Moderator).await?;
        let event = test
            .event()
            .insert_event_with_status(user.id, EventStatus::Pending)
            .await?;
        SessionUserId::insert(&test.session, moderator.id)
            .await
            .unwrap();

        let result = get_event(State(test.state()), test.session.clone(), Path(event.id)).await;

        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        Ok(())
    }
}

mod get_availability {
    use super::*;

    /// Expect an unlimited event to report no remaining count and never be full
    #[tokio::test]
    async fn unlimited_event() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 0).await?;
        test.registration()
            .insert_registration(event.id, user.id, 5)
            .await?;

        let result =
            get_availability(State(test.state()), test.session.clone(), Path(event.id)).await;

        let resp = result.unwrap().into_response();
        let availability: AvailabilityDto = body_json(resp).await;
        assert_eq!(
            availability,
            AvailabilityDto {
                event_id: event.id,
                occupied: 5,
                available: None,
                is_full: false,
            }
        );

        Ok(())
    }

    /// Expect a sold out event to be full
    #[tokio::test]
    async fn sold_out_event() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;
        let user = test.user().insert_user("alice", Role::Resident).await?;
        let event = test.event().insert_approved_event(user.id, 3).await?;
        test.registration()
            .insert_registration(event.id, user.id, 3)
            .await?;

        let result =
            get_availability(State(test.state()), test.session.clone(), Path(event.id)).await;

        let resp = result.unwrap().into_response();
        let availability: AvailabilityDto = body_json(resp).await;
        assert_eq!(availability.available, Some(0));
        assert!(availability.is_full);

        Ok(())
    }

    /// Expect 404 for an unknown event
    #[tokio::test]
    async fn unknown_event() -> Result<(), TestError> {
        let test = test_setup_with_barrio_tables!()?;

        let result = get_availability(State(test.state()), test.session.clone(), Path(42)).await;

        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

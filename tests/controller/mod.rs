//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and session, and the tests assert
//! on the status code and, where it matters, the decoded JSON body.

mod event;
mod registration;
mod user;

use barrio_test_utils::prelude::*;

use crate::util::body_json;

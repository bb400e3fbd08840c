//! Integration tests for services that span several repositories.


use barrio_test_utils::prelude::*;

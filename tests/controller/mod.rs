//! Integration tests for the controller actions behind each page.
//!
//! Actions are called directly with their extractors against a mock facade and an
//! in-memory session, then the returned page, redirect or error response is checked.

mod company_details;
mod permission;
mod team;
mod user_details;

use account_management_test_utils::prelude::*;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};

use crate::util::{location, page, sign_in, TestContextExt};

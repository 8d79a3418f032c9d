// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use kestrel_domain::{Profile, Role};
use kestrel_persistence::{DashboardStore, Persistence};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::session::PROFILE_HEADER;
use crate::{AppState, build_router};

/// A router over a fresh in-memory store with one admin and one member.
pub struct TestApp {
    pub app: Router,
    pub admin: Profile,
    pub member: Profile,
}

pub fn create_test_app() -> TestApp {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let admin: Profile = persistence
        .create_profile("Ada Admin", "ada@example.com", Role::Admin)
        .unwrap();
    let member: Profile = persistence
        .create_profile("Member A", "a@example.com", Role::Member)
        .unwrap();

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };
    TestApp {
        app: build_router(app_state),
        admin,
        member,
    }
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    profile: Option<&Profile>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(profile) = profile {
        builder = builder.header(PROFILE_HEADER, profile.id.as_str());
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, value)
}

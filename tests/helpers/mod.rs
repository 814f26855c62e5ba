// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the axum request driver and the stub recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod axum_test;
pub mod stub_recipe_service;

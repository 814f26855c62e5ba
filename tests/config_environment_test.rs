// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Tests defaults, overrides, and invalid numeric values using serial env mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_chef::config::environment::ServerConfig;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "DATABASE_URL",
    "SPOONACULAR_API_KEY",
    "SPOONACULAR_BASE_URL",
    "RECIPE_API_TIMEOUT_SECS",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn defaults_apply_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert_eq!(
        config.database.url.to_connection_string(),
        "sqlite:./data/pantry_chef.db"
    );
    assert_eq!(config.recipe_api.base_url, "https://api.spoonacular.com");
    assert_eq!(config.recipe_api.timeout_secs, 10);
    assert!(config.recipe_api.api_key.is_none());
}

#[test]
#[serial]
fn environment_overrides_are_picked_up() {
    clear_env();
    env::set_var("HTTP_PORT", "9000");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("SPOONACULAR_API_KEY", "abc123");
    env::set_var("SPOONACULAR_BASE_URL", "http://localhost:4010");
    env::set_var("RECIPE_API_TIMEOUT_SECS", "3");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9000);
    assert!(config.database.url.is_memory());
    assert_eq!(config.recipe_api.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.recipe_api.base_url, "http://localhost:4010");
    assert_eq!(config.recipe_api.timeout_secs, 3);

    clear_env();
}

#[test]
#[serial]
fn invalid_port_is_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn empty_api_key_counts_as_unset() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.recipe_api.api_key.is_none());

    clear_env();
}

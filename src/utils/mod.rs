// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains the shared recipe identifier validation routine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Shared utilities

/// Recipe identifier parsing and validation
pub mod ids;

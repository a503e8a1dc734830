// ABOUTME: Core types and constants for the Indian Coffee Beans brew tools
// ABOUTME: Foundation crate with error handling and application-wide constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

#![deny(unsafe_code)]

//! # ICB Core
//!
//! Foundation crate providing shared types and constants for the brew
//! calculator service. It changes rarely so the rest of the workspace
//! recompiles less often.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and the JSON error envelope
//! - **constants**: Unit factors, service names and environment defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

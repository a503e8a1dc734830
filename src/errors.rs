// ABOUTME: Unified error handling re-exported from icb-core for the server crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable for routes, binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

pub use icb_core::errors::*;

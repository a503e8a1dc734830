// ABOUTME: Re-exports command modules for icb-cli
// ABOUTME: Provides access to the brew calculation, catalog and conversion commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

pub mod brew;

// ABOUTME: Re-exports helper modules for icb-cli
// ABOUTME: Provides access to display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

pub mod display;

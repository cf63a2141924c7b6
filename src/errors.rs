// ABOUTME: Unified error types re-exported from lightbnb-core
// ABOUTME: Lets the rest of the crate write crate::errors::{AppError, AppResult}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use lightbnb_core::errors::*;

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for lightbnb-cli
// ABOUTME: Provides access to property, user and reservation commands

pub mod property;
pub mod reservation;
pub mod user;

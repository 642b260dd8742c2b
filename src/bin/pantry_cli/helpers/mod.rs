// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for pantry-cli
// ABOUTME: Provides text output formatting

pub mod display;

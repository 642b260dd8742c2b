// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pantry-cli
// ABOUTME: Provides access to recipe search and customization commands

pub mod recipes;

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, environment keys, and dietary labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by the concern that reads them.

/// Service identity used in structured logs
pub mod service_names {
    /// Library/engine service name
    pub const PANTRY_RESOLVER: &str = "pantry-resolver";
    /// Command-line front end
    pub const PANTRY_CLI: &str = "pantry-cli";
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Optional cap on the number of resolved recipes returned
    pub const MAX_RESULTS: &str = "PANTRY_MAX_RESULTS";
    /// Default output format for the CLI (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "PANTRY_OUTPUT_FORMAT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Service name override for logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Human-facing dietary restriction labels
pub mod dietary_labels {
    /// No animal products
    pub const VEGAN: &str = "Vegan";
    /// No gluten-containing ingredients
    pub const GLUTEN_FREE: &str = "Gluten-Free";
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod badges;
pub mod catalog;
pub mod explain;
pub mod registry;
pub mod resolver;
pub mod settings;

use thiserror::Error;

pub use explain::{explain, AirlineCategory, AirlineRecommendation};
pub use registry::{Alliance, PartnerProgram, Registry, TransferRatio};
pub use resolver::{resolve, BookabilityResult, PartnerMatch, Relationship};
pub use settings::Settings;

#[derive(Error, Debug)]
pub enum PointPathError {
    #[error("Invalid transfer ratio: {0}")]
    InvalidRatio(String),
    #[error("Invalid partner table: {0}")]
    InvalidRegistry(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Trial Scout — scripted chat flow for clinical study recommendations.

pub mod config;
pub mod conversation;
pub mod error;
pub mod recommend;

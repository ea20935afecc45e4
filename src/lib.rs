//! VividHands storefront CLI

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod render;
pub mod review;

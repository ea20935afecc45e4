//! REST API連携

mod fetch;
pub mod storefront;

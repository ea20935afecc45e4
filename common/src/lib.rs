//! VividHands Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod timestamp;
pub mod filter;
pub mod delivery;
pub mod cart;
pub mod forms;
pub mod currency;
pub mod routes;
pub mod view;
pub mod export;

pub use types::{
    AuthResponse, DashboardStats, LoginRequest, Order, OrderItem, Product, RegisterRequest,
    Review, ReviewRequest, Session,
};
pub use error::{Error, Result};
pub use filter::{ProductFilter, SortKey};
pub use delivery::{delivery_status, DeliveryStatus};
pub use cart::{Cart, CartLine};
pub use forms::{AuthForm, AuthMode, AuthSubmission, ProductForm, ReviewDraft};
pub use currency::format_currency;
pub use routes::ApiRoutes;
pub use view::{ListView, LoadState};

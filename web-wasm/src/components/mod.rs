//! UIコンポーネント

pub mod about;
pub mod alert;
pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod home;
pub mod navbar;
pub mod orders;
pub mod product_card;
pub mod product_detail;
pub mod product_list;
pub mod progress_bar;
pub mod rating;

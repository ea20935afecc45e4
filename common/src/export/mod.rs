//! 注文一覧のxlsx出力（CLIのみ、`excel` feature）

#[cfg(feature = "excel")]
pub mod orders_sheet;

#[cfg(feature = "excel")]
pub use orders_sheet::generate_orders_buffer;

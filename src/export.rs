use crate::error::{Result, StorefrontError};
use std::path::{Path, PathBuf};
use vividhands_common::export::generate_orders_buffer;
use vividhands_common::Order;

const DEFAULT_FILE_NAME: &str = "artisan-orders";

/// ディレクトリ or 拡張子なしなら既定のファイル名を付ける
pub fn output_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", DEFAULT_FILE_NAME))
    } else {
        output.to_path_buf()
    }
}

/// 注文一覧をxlsxで保存し、書き出したパスを返す
pub fn export_orders(orders: &[Order], output: &Path) -> Result<PathBuf> {
    let path = output_path(output);
    let buffer = generate_orders_buffer(orders).map_err(|e| StorefrontError::Export(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, buffer)?;
    Ok(path)
}

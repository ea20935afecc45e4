//! 注文一覧のExcel生成
//!
//! 1行 = 1注文明細。出品者ダッシュボードの売上確認用。

use rust_xlsxwriter::*;

use crate::error::{Error, Result};
use crate::timestamp::{format_date_time, parse_timestamp};
use crate::types::Order;

const HEADERS: [(&str, f64); 10] = [
    ("Order ID", 10.0),
    ("Ordered", 24.0),
    ("Payment ID", 24.0),
    ("City", 16.0),
    ("State", 12.0),
    ("Product", 32.0),
    ("Quantity", 10.0),
    ("Unit Price", 14.0),
    ("Line Total", 14.0),
    ("Order Total", 14.0),
];

fn excel_err(context: &str, e: XlsxError) -> Error {
    Error::Excel(format!("{}: {}", context, e))
}

/// 注文一覧をxlsxバイト列に変換
pub fn generate_orders_buffer(orders: &[Order]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x212529))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let money_format = Format::new().set_num_format("₹#,##0.00");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Orders")
        .map_err(|e| excel_err("シート名設定エラー", e))?;

    for (col, (title, width)) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| excel_err("列幅設定エラー", e))?;
        worksheet
            .write_string_with_format(0, col, *title, &header_format)
            .map_err(|e| excel_err("見出し書き込みエラー", e))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| excel_err("固定設定エラー", e))?;

    let mut row: u32 = 1;
    for order in orders {
        let ordered = order
            .order_date
            .as_deref()
            .and_then(parse_timestamp)
            .map(format_date_time)
            .unwrap_or_else(|| "N/A".to_string());
        let payment = order.razorpay_payment_id.as_deref().unwrap_or("N/A");

        // 明細なしの注文も1行出す
        let lines: Vec<(String, u32, f64)> = if order.items.is_empty() {
            vec![(String::new(), 0, 0.0)]
        } else {
            order
                .items
                .iter()
                .map(|item| {
                    let name = item.product.as_ref().map(|p| p.name.clone()).unwrap_or_default();
                    (name, item.quantity, item.price)
                })
                .collect()
        };

        for (product_name, quantity, price) in lines {
            let write = |ws: &mut Worksheet| -> std::result::Result<(), XlsxError> {
                ws.write_number(row, 0, order.id as f64)?;
                ws.write_string(row, 1, &ordered)?;
                ws.write_string(row, 2, payment)?;
                ws.write_string(row, 3, &order.city)?;
                ws.write_string(row, 4, &order.state)?;
                ws.write_string(row, 5, &product_name)?;
                ws.write_number(row, 6, f64::from(quantity))?;
                ws.write_number_with_format(row, 7, price, &money_format)?;
                ws.write_number_with_format(row, 8, price * f64::from(quantity), &money_format)?;
                ws.write_number_with_format(row, 9, order.total_amount, &money_format)?;
                Ok(())
            };
            write(worksheet).map_err(|e| excel_err("行書き込みエラー", e))?;
            row += 1;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| excel_err("保存エラー", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderItem, Product};

    #[test]
    fn test_empty_orders_still_produce_workbook() {
        let buffer = generate_orders_buffer(&[]).expect("生成失敗");
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_orders_with_items() {
        let order = Order {
            id: 12,
            city: "Jaipur".to_string(),
            total_amount: 2500.0,
            razorpay_payment_id: Some("pay_123".to_string()),
            order_date: Some("2024-03-01T10:00:00".to_string()),
            items: vec![OrderItem {
                id: 1,
                product: Some(Product {
                    name: "Rug".to_string(),
                    ..Default::default()
                }),
                quantity: 2,
                price: 1250.0,
            }],
            ..Default::default()
        };
        let buffer = generate_orders_buffer(&[order, Order::default()]).expect("生成失敗");
        assert!(buffer.len() > 100);
    }
}

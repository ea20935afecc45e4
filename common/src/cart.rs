//! カート（画面ローカル状態）

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Product;

/// カートの1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// カート。数量は在庫数を超えない
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

fn stock_limit(product: &Product) -> u32 {
    u32::try_from(product.stock.max(0)).unwrap_or(u32::MAX)
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みJSONから復元。壊れていれば空
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 商品を追加し、追加後の数量を返す
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<u32> {
        let limit = stock_limit(product);
        let current = self.quantity_of(product.id);
        if limit == 0 || current >= limit {
            return Err(Error::OutOfStock(product.name.clone()));
        }

        let next = current.saturating_add(quantity.max(1)).min(limit);
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = next,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: next,
            }),
        }
        Ok(next)
    }

    /// 数量を変更。0なら削除、在庫数で頭打ち
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity.min(stock_limit(&line.product)).max(1);
        }
    }

    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// 合計点数
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: format!("Item {}", id),
            price,
            stock,
            ..Default::default()
        }
    }

    #[test]
    fn test_add_and_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100.0, 10), 2).unwrap();
        cart.add(&product(2, 250.0, 10), 1).unwrap();
        cart.add(&product(1, 100.0, 10), 1).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of(1), 3);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.subtotal(), 550.0);
    }

    #[test]
    fn test_add_caps_at_stock() {
        let mut cart = Cart::new();
        let vase = product(1, 100.0, 3);
        assert_eq!(cart.add(&vase, 5).unwrap(), 3);
        assert!(matches!(cart.add(&vase, 1), Err(Error::OutOfStock(_))));
    }

    #[test]
    fn test_add_out_of_stock() {
        let mut cart = Cart::new();
        assert!(cart.add(&product(1, 100.0, 0), 1).is_err());
        assert!(cart.add(&product(2, 100.0, -4), 1).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100.0, 4), 1).unwrap();

        cart.set_quantity(1, 10);
        assert_eq!(cart.quantity_of(1), 4);

        cart.set_quantity(1, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100.0, 4), 1).unwrap();
        cart.add(&product(2, 100.0, 4), 1).unwrap();

        assert!(cart.remove(1));
        assert!(!cart.remove(1));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_json_persistence() {
        let mut cart = Cart::new();
        cart.add(&product(1, 99.0, 4), 2).unwrap();

        let json = cart.to_json().unwrap();
        assert_eq!(Cart::from_json(&json), cart);
        assert!(Cart::from_json("{broken").is_empty());
    }
}

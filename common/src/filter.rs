//! 商品一覧のフィルタ・並び替え
//!
//! 取得済みの商品配列に対して、述語で絞り込み → 比較関数で並び替え、の1パスを行う。

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::Error;
use crate::timestamp::parse_timestamp;
use crate::types::Product;

/// 価格スライダーの上限
pub const PRICE_CEILING: f64 = 100_000.0;

/// 倫理スコアの上限
pub const MAX_ETHICAL_SCORE: u8 = 10;

/// 在庫僅少とみなす閾値
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    EthicalDesc,
    Popularity,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::EthicalDesc,
        SortKey::Popularity,
    ];

    /// selectのvalue値（Newestは空文字）
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::EthicalDesc => "ethical_desc",
            SortKey::Popularity => "popularity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceAsc => "Price Low-High",
            SortKey::PriceDesc => "Price High-Low",
            SortKey::EthicalDesc => "Ethical Rating",
            SortKey::Popularity => "Popularity",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::EthicalDesc => b.ethical_score.total_cmp(&a.ethical_score),
            SortKey::Popularity => b.sales_count.cmp(&a.sales_count),
            // 日付なしは最後尾
            SortKey::Newest => created_at(b).cmp(&created_at(a)),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "" | "newest" => Ok(SortKey::Newest),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "ethical_desc" | "ethical" => Ok(SortKey::EthicalDesc),
            "popularity" | "popular" => Ok(SortKey::Popularity),
            _ => Err(Error::InvalidValue {
                field: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Newest => write!(f, "newest"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

fn created_at(product: &Product) -> Option<chrono::NaiveDateTime> {
    product.created_at.as_deref().and_then(parse_timestamp)
}

/// フィルタ状態（画面ローカル、永続化しない）
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// 空文字は全カテゴリ
    pub category: String,
    /// この値以上の倫理スコアのみ表示
    pub ethical_score: u8,
    /// (最小, 最大) 両端を含む
    pub price_range: (f64, f64),
    pub search_query: String,
    pub sort_by: SortKey,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: String::new(),
            ethical_score: 0,
            price_range: (0.0, PRICE_CEILING),
            search_query: String::new(),
            sort_by: SortKey::Newest,
        }
    }
}

impl ProductFilter {
    /// 条件をすべて初期値に戻す
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_ethical_score(&mut self, score: u8) {
        self.ethical_score = score.min(MAX_ETHICAL_SCORE);
    }

    /// 最小価格は最大価格を超えない
    pub fn set_min_price(&mut self, min: f64) {
        let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
        self.price_range.0 = min.min(self.price_range.1);
    }

    /// 最大価格は最小価格を下回らない
    pub fn set_max_price(&mut self, max: f64) {
        let max = if max.is_finite() { max } else { PRICE_CEILING };
        self.price_range.1 = max.max(self.price_range.0);
    }

    /// 商品が全条件を満たすか
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with(&self.search_regex(), product)
    }

    /// 絞り込み → 並び替え。入力は変更しない
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let search = self.search_regex();
        let mut visible: Vec<Product> = products
            .iter()
            .filter(|p| self.matches_with(&search, p))
            .cloned()
            .collect();
        visible.sort_by(|a, b| self.sort_by.compare(a, b));
        visible
    }

    /// 条件が初期状態から変わっているか
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    fn matches_with(&self, search: &Option<Regex>, product: &Product) -> bool {
        let text_hit = match search {
            None => true,
            Some(re) => {
                re.is_match(&product.name)
                    || re.is_match(&product.description)
                    || re.is_match(&product.materials)
            }
        };

        text_hit
            && (self.category.is_empty() || product.category_label() == self.category)
            && product.ethical_score >= f64::from(self.ethical_score)
            && product.price >= self.price_range.0
            && product.price <= self.price_range.1
    }

    /// 検索語は大文字小文字を無視した正規表現。不正なパターンはリテラルとして扱う
    fn search_regex(&self) -> Option<Regex> {
        let query = self.search_query.as_str();
        if query.is_empty() {
            return None;
        }
        RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(true)
                    .build()
            })
            .ok()
    }
}

/// カテゴリ一覧（出現順・重複なし）
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        let category = product.category_label();
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// 在庫僅少バッジ
pub fn low_stock_label(stock: i64) -> Option<String> {
    (stock <= LOW_STOCK_THRESHOLD).then(|| format!("Only {} left", stock.max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str, price: f64, ethical: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            artisan_category: category.to_string(),
            price,
            ethical_score: ethical,
            stock: 10,
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                description: "Hand-thrown vase".to_string(),
                materials: "terracotta clay".to_string(),
                sales_count: 5,
                created_at: Some("2024-01-10T10:00:00".to_string()),
                ..product(1, "Vase", "Pottery", 1200.0, 7.0)
            },
            Product {
                description: "Block printed".to_string(),
                materials: "cotton".to_string(),
                sales_count: 50,
                created_at: Some("2024-03-01T10:00:00".to_string()),
                ..product(2, "Scarf", "Textiles", 800.0, 9.0)
            },
            Product {
                description: "Carved by hand".to_string(),
                materials: "sheesham wood".to_string(),
                sales_count: 20,
                created_at: None,
                ..product(3, "Bowl", "Woodwork", 450.0, 4.0)
            },
            Product {
                description: "Glazed mug".to_string(),
                materials: "Stoneware CLAY".to_string(),
                sales_count: 12,
                created_at: Some("2024-02-15T10:00:00".to_string()),
                ..product(4, "Mug", "Pottery", 300.0, 8.0)
            },
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_shows_everything_newest_first() {
        let filter = ProductFilter::default();
        let visible = filter.apply(&catalog());
        assert_eq!(ids(&visible), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let filter = ProductFilter {
            search_query: "clay".to_string(),
            ..Default::default()
        };
        let mut visible = ids(&filter.apply(&catalog()));
        visible.sort();
        assert_eq!(visible, vec![1, 4]);

        let by_name = ProductFilter {
            search_query: "SCARF".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_name.apply(&catalog())), vec![2]);
    }

    #[test]
    fn test_search_accepts_regex() {
        let filter = ProductFilter {
            search_query: "^(vase|bowl)$".to_string(),
            ..Default::default()
        };
        let mut visible = ids(&filter.apply(&catalog()));
        visible.sort();
        assert_eq!(visible, vec![1, 3]);
    }

    #[test]
    fn test_invalid_regex_matches_literally() {
        let mut products = catalog();
        products[0].description = "Size (large".to_string();
        let filter = ProductFilter {
            search_query: "(large".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products)), vec![1]);
    }

    #[test]
    fn test_category_ethical_and_price() {
        let filter = ProductFilter {
            category: "Pottery".to_string(),
            ethical_score: 8,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![4]);

        let filter = ProductFilter {
            price_range: (450.0, 800.0),
            ..Default::default()
        };
        let mut visible = ids(&filter.apply(&catalog()));
        visible.sort();
        assert_eq!(visible, vec![2, 3]);
    }

    #[test]
    fn test_sort_keys() {
        let products = catalog();
        let mut filter = ProductFilter::default();

        filter.sort_by = SortKey::PriceAsc;
        assert_eq!(ids(&filter.apply(&products)), vec![4, 3, 2, 1]);

        filter.sort_by = SortKey::PriceDesc;
        assert_eq!(ids(&filter.apply(&products)), vec![1, 2, 3, 4]);

        filter.sort_by = SortKey::EthicalDesc;
        assert_eq!(ids(&filter.apply(&products)), vec![2, 4, 1, 3]);

        filter.sort_by = SortKey::Popularity;
        assert_eq!(ids(&filter.apply(&products)), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let products = catalog();
        let filter = ProductFilter {
            sort_by: SortKey::PriceAsc,
            ..Default::default()
        };
        let _ = filter.apply(&products);
        assert_eq!(ids(&products), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_price_bounds_clamp_each_other() {
        let mut filter = ProductFilter::default();
        filter.set_max_price(500.0);
        filter.set_min_price(900.0);
        assert_eq!(filter.price_range, (500.0, 500.0));

        filter.set_max_price(100.0);
        assert_eq!(filter.price_range, (500.0, 500.0));

        filter.set_min_price(f64::NAN);
        assert_eq!(filter.price_range.0, 0.0);
    }

    #[test]
    fn test_clear_resets() {
        let mut filter = ProductFilter {
            category: "Pottery".to_string(),
            search_query: "mug".to_string(),
            sort_by: SortKey::Popularity,
            ..Default::default()
        };
        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_ethical_score_capped() {
        let mut filter = ProductFilter::default();
        filter.set_ethical_score(42);
        assert_eq!(filter.ethical_score, MAX_ETHICAL_SCORE);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(&catalog()),
            vec!["Pottery".to_string(), "Textiles".to_string(), "Woodwork".to_string()]
        );
    }

    #[test]
    fn test_sort_key_round_trip_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_low_stock_label() {
        assert_eq!(low_stock_label(3).as_deref(), Some("Only 3 left"));
        assert_eq!(low_stock_label(5).as_deref(), Some("Only 5 left"));
        assert_eq!(low_stock_label(6), None);
    }

    #[test]
    fn test_sort_keeps_input_order_on_ties() {
        // 同値のキーは入力順のまま
        let products: Vec<Product> = (1..=6)
            .map(|id| Product {
                sales_count: 10,
                created_at: (id % 2 == 0).then(|| "2024-02-01T10:00:00".to_string()),
                ..product(id, "Tile", "Pottery", 500.0, 6.0)
            })
            .collect();

        for key in SortKey::ALL {
            let filter = ProductFilter {
                sort_by: key,
                ..Default::default()
            };
            let expected = match key {
                // 日付ありが先、日付なし同士も入力順
                SortKey::Newest => vec![2, 4, 6, 1, 3, 5],
                _ => vec![1, 2, 3, 4, 5, 6],
            };
            assert_eq!(ids(&filter.apply(&products)), expected, "sort key {}", key);
        }
    }
}

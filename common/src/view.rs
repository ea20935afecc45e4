//! 画面状態の判定と表示用ヘルパ
//!
//! 取得中/失敗/空/一覧のどれを描画するかをここで決め、Web版とCLI版で共有する。

/// 一覧系画面の文言
pub mod messages {
    pub const LOADING_ORDERS: &str = "Loading your orders...";
    pub const ORDERS_ERROR_TITLE: &str = "Error Loading Orders";
    pub const ORDERS_EMPTY_TITLE: &str = "No Orders Found";
    pub const ORDERS_EMPTY_BODY: &str = "You haven't placed any orders yet.";
    pub const CONTINUE_SHOPPING: &str = "Continue Shopping";
    pub const PRODUCTS_EMPTY: &str = "No products match your criteria";
    pub const CART_EMPTY: &str = "Your cart is empty.";
    pub const ARTISAN_PRODUCTS_EMPTY: &str = "You haven't listed any products yet.";
    pub const ARTISAN_ORDERS_EMPTY: &str = "No orders for your products yet.";
    pub const REVIEWS_EMPTY: &str = "No reviews yet.";
    pub const FETCH_ORDERS_FAILED: &str = "Failed to fetch orders";
    pub const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products";
    pub const REVIEW_FAILED: &str = "Review submission failed";
}

/// 取得状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// 一覧画面で描画するもの
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Items(&'a [T]),
}

impl<T> LoadState<Vec<T>> {
    /// 失敗はエラーバナー、空配列は空表示
    pub fn list_view(&self) -> ListView<'_, T> {
        match self {
            LoadState::Loading => ListView::Loading,
            LoadState::Failed(message) => ListView::Error(message),
            LoadState::Loaded(items) if items.is_empty() => ListView::Empty,
            LoadState::Loaded(items) => ListView::Items(items),
        }
    }
}

/// 星5つのうち塗りつぶす数（小数は切り上げ）
pub fn filled_stars(rating: f64) -> usize {
    (0..5u8).filter(|i| f64::from(*i) < rating).count()
}

/// `★★★★☆`
pub fn star_bar(rating: f64) -> String {
    let filled = filled_stars(rating);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// 説明文を先頭 `max_chars` 文字 + "..." に切り詰める
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// 画像が無い商品の代替画像
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.jpg";

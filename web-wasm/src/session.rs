//! localStorageに保存するセッションとカート
//!
//! トークン類は生の文字列、カートはJSONで保存する。

use gloo::storage::{LocalStorage, Storage};
use leptos::logging::warn;
use vividhands_common::{Cart, Session};

/// カートの保存キー
pub const CART_KEY: &str = "vividhandsCart";

/// セッションの保存先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSlot {
    /// 購入者（userToken / userId）
    User,
    /// 出品者（artisanToken / artisanId）
    Artisan,
}

impl SessionSlot {
    /// (トークン, ID, 表示名) のキー
    pub fn keys(self) -> (&'static str, &'static str, &'static str) {
        match self {
            SessionSlot::User => ("userToken", "userId", "userName"),
            SessionSlot::Artisan => ("artisanToken", "artisanId", "artisanName"),
        }
    }
}

fn read(key: &str) -> Option<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .filter(|v| !v.trim().is_empty())
}

fn write(key: &str, value: &str) {
    if let Err(e) = LocalStorage::raw().set_item(key, value) {
        warn!("localStorage write failed for {}: {:?}", key, e);
    }
}

pub fn load(slot: SessionSlot) -> Option<Session> {
    let (token_key, id_key, name_key) = slot.keys();
    let token = read(token_key)?;
    let id = read(id_key)?.parse().ok()?;
    Some(Session {
        token,
        id,
        name: read(name_key),
    })
}

pub fn store(slot: SessionSlot, session: &Session) {
    let (token_key, id_key, name_key) = slot.keys();
    write(token_key, &session.token);
    write(id_key, &session.id.to_string());
    match &session.name {
        Some(name) => write(name_key, name),
        None => LocalStorage::delete(name_key),
    }
}

/// サインアウト
pub fn clear(slot: SessionSlot) {
    let (token_key, id_key, name_key) = slot.keys();
    for key in [token_key, id_key, name_key] {
        LocalStorage::delete(key);
    }
}

/// 壊れたデータは空カートとして扱う
pub fn load_cart() -> Cart {
    LocalStorage::get::<Cart>(CART_KEY).unwrap_or_default()
}

pub fn store_cart(cart: &Cart) {
    if let Err(e) = LocalStorage::set(CART_KEY, cart) {
        warn!("failed to save cart: {}", e);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use vividhands_common::Product;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn session(name: Option<&str>) -> Session {
        Session {
            token: "tok-123".to_string(),
            id: 42,
            name: name.map(str::to_string),
        }
    }

    #[wasm_bindgen_test]
    fn wasm_store_and_load_user_session() {
        clear(SessionSlot::User);
        store(SessionSlot::User, &session(Some("Asha")));

        assert_eq!(read("userToken").as_deref(), Some("tok-123"));
        assert_eq!(read("userId").as_deref(), Some("42"));
        assert_eq!(load(SessionSlot::User), Some(session(Some("Asha"))));
        // 出品者側には影響しない
        assert_eq!(load(SessionSlot::Artisan), None);

        clear(SessionSlot::User);
    }

    #[wasm_bindgen_test]
    fn wasm_clear_removes_artisan_keys() {
        store(SessionSlot::Artisan, &session(None));
        assert_eq!(read("artisanToken").as_deref(), Some("tok-123"));
        assert_eq!(read("artisanId").as_deref(), Some("42"));

        clear(SessionSlot::Artisan);
        assert_eq!(load(SessionSlot::Artisan), None);
        assert_eq!(read("artisanToken"), None);
        assert_eq!(read("artisanId"), None);
        assert_eq!(read("artisanName"), None);
    }

    #[wasm_bindgen_test]
    fn wasm_load_rejects_non_numeric_id() {
        write("userToken", "tok-123");
        write("userId", "abc");
        assert_eq!(load(SessionSlot::User), None);
        clear(SessionSlot::User);
    }

    #[wasm_bindgen_test]
    fn wasm_cart_persists_as_json() {
        let product = Product {
            id: 7,
            name: "Clay Mug".to_string(),
            price: 300.0,
            stock: 10,
            ..Default::default()
        };
        let mut cart = Cart::new();
        cart.add(&product, 2).expect("in stock");

        store_cart(&cart);
        assert!(read(CART_KEY).is_some());
        assert_eq!(load_cart(), cart);

        write(CART_KEY, "{broken");
        assert!(load_cart().is_empty());
        LocalStorage::delete(CART_KEY);
    }
}

//! メインアプリケーションコンポーネント
//!
//! 画面遷移はURLハッシュ（`#/product/5` など）で管理する。

use crate::components::{
    about::AboutUs,
    auth::{ArtisanLogin, Auth},
    cart::CartPage,
    dashboard::ArtisanDashboard,
    home::Home,
    navbar::Navbar,
    orders::OrdersPage,
    product_detail::ProductDetail,
};
use crate::session::{self, SessionSlot};
use leptos::prelude::*;
use vividhands_common::{Cart, Session};

/// 画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Product(i64),
    Cart,
    Orders,
    Auth,
    ArtisanLogin,
    Dashboard,
    About,
}

impl Page {
    /// `#/orders` → Orders。不明なハッシュはHome
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.split('/');
        match (parts.next(), parts.next()) {
            (Some("product"), Some(id)) => id.parse().map(Page::Product).unwrap_or_default(),
            (Some("products"), None) | (Some(""), None) | (None, _) => Page::Home,
            (Some("cart"), None) => Page::Cart,
            (Some("orders"), None) => Page::Orders,
            (Some("auth"), None) => Page::Auth,
            (Some("artisan-login"), None) => Page::ArtisanLogin,
            (Some("dashboard"), None) => Page::Dashboard,
            (Some("about"), None) => Page::About,
            _ => Page::Home,
        }
    }

    pub fn to_hash(self) -> String {
        match self {
            Page::Home => "#/".to_string(),
            Page::Product(id) => format!("#/product/{}", id),
            Page::Cart => "#/cart".to_string(),
            Page::Orders => "#/orders".to_string(),
            Page::Auth => "#/auth".to_string(),
            Page::ArtisanLogin => "#/artisan-login".to_string(),
            Page::Dashboard => "#/dashboard".to_string(),
            Page::About => "#/about".to_string(),
        }
    }

    /// 購入者のサインインが必要な画面は未サインインならAuthへ
    pub fn sign_in_redirect(self, signed_in: bool) -> Option<Page> {
        match self {
            Page::Orders if !signed_in => Some(Page::Auth),
            _ => None,
        }
    }
}

/// 画面をまたいで共有する状態
#[derive(Clone, Copy)]
pub struct AppContext {
    pub page: RwSignal<Page>,
    pub user: RwSignal<Option<Session>>,
    pub artisan: RwSignal<Option<Session>>,
    pub cart: RwSignal<Cart>,
}

impl AppContext {
    fn load() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self {
            page: RwSignal::new(Page::from_hash(&hash)),
            user: RwSignal::new(session::load(SessionSlot::User)),
            artisan: RwSignal::new(session::load(SessionSlot::Artisan)),
            cart: RwSignal::new(session::load_cart()),
        }
    }

    pub fn navigate(&self, page: Page) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&page.to_hash());
        }
        self.page.set(page);
    }

    /// カートを変更してlocalStorageに書き戻す
    pub fn update_cart<F: FnOnce(&mut Cart)>(&self, f: F) {
        self.cart.update(f);
        self.cart.with_untracked(session::store_cart);
    }

    pub fn sign_in(&self, slot: SessionSlot, value: Session) {
        session::store(slot, &value);
        self.slot(slot).set(Some(value));
    }

    pub fn sign_out(&self, slot: SessionSlot) {
        session::clear(slot);
        self.slot(slot).set(None);
    }

    fn slot(&self, slot: SessionSlot) -> RwSignal<Option<Session>> {
        match slot {
            SessionSlot::User => self.user,
            SessionSlot::Artisan => self.artisan,
        }
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let app = AppContext::load();
    provide_context(app);

    // 戻る/進む
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
            app.page.set(Page::from_hash(&hash));
        }
    });

    view! {
        <Navbar />
        <main class="container">
            {move || match app.page.get() {
                Page::Home => view! { <Home /> }.into_any(),
                Page::Product(id) => view! { <ProductDetail product_id=id /> }.into_any(),
                Page::Cart => view! { <CartPage /> }.into_any(),
                Page::Orders => view! { <OrdersPage /> }.into_any(),
                Page::Auth => view! { <Auth /> }.into_any(),
                Page::ArtisanLogin => view! { <ArtisanLogin /> }.into_any(),
                Page::Dashboard => view! { <ArtisanDashboard /> }.into_any(),
                Page::About => view! { <AboutUs /> }.into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_hash() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#/products"), Page::Home);
        assert_eq!(Page::from_hash("#/product/42"), Page::Product(42));
        assert_eq!(Page::from_hash("#/orders"), Page::Orders);
        assert_eq!(Page::from_hash("#/artisan-login"), Page::ArtisanLogin);
        assert_eq!(Page::from_hash("#/dashboard/"), Page::Dashboard);
    }

    #[test]
    fn test_unknown_hash_is_home() {
        assert_eq!(Page::from_hash("#/nowhere"), Page::Home);
        assert_eq!(Page::from_hash("#/product/abc"), Page::Home);
        assert_eq!(Page::from_hash("#/cart/extra"), Page::Home);
    }

    #[test]
    fn test_hash_round_trip() {
        for page in [Page::Home, Page::Product(7), Page::Cart, Page::About, Page::Dashboard] {
            assert_eq!(Page::from_hash(&page.to_hash()), page);
        }
    }

    #[test]
    fn test_orders_redirects_to_sign_in() {
        assert_eq!(Page::Orders.sign_in_redirect(false), Some(Page::Auth));
        assert_eq!(Page::Orders.sign_in_redirect(true), None);
        assert_eq!(Page::Cart.sign_in_redirect(false), None);
        assert_eq!(Page::Home.sign_in_redirect(false), None);
    }
}

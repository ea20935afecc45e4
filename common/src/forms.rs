//! フォーム状態と入力チェック
//!
//! 認証・レビュー・商品編集の各フォーム。送信前の必須チェックのみ行い、
//! 認可そのものはバックエンドに任せる。

use crate::error::{Error, Result};
use crate::types::{LoginRequest, Product, RegisterRequest, ReviewRequest};

/// 新規登録時のパスワード最小長
pub const MIN_PASSWORD_LEN: usize = 6;

/// 認証画面のモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Signin",
            AuthMode::SignUp => "Signup",
        }
    }

    /// 切り替えリンクの前置き
    pub fn toggle_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account?",
            AuthMode::SignUp => "Already have an account?",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        self.toggled().submit_label()
    }
}

/// 送信内容
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// 認証フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// 必須項目を確認して送信内容を組み立てる
    pub fn submission(&self) -> Result<AuthSubmission> {
        let email = self.email.trim();
        validate_email(email)?;
        if self.password.is_empty() {
            return Err(Error::MissingField("Password"));
        }

        match self.mode {
            AuthMode::SignIn => Ok(AuthSubmission::Login(LoginRequest {
                email: email.to_string(),
                password: self.password.clone(),
            })),
            AuthMode::SignUp => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err(Error::MissingField("Full Name"));
                }
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(Error::PasswordTooShort(MIN_PASSWORD_LEN));
                }
                Ok(AuthSubmission::Register(RegisterRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: self.password.clone(),
                }))
            }
        }
    }
}

/// `local@domain` の形になっているか
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(Error::MissingField("Email Address"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(Error::InvalidEmail(email.to_string())),
    }
}

/// レビュー入力（モーダル内の状態）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    /// 0は未選択
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(5);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self, product_id: i64) -> Result<ReviewRequest> {
        ReviewRequest::new(product_id, self.rating, self.comment.trim())
    }
}

/// 出品者の商品編集フォーム（multipartのテキスト項目）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub materials: String,
    pub ethical_score: String,
}

impl ProductForm {
    /// 既存商品の値で初期化
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category_label().to_string(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            materials: product.materials.clone(),
            ethical_score: product.ethical_score.to_string(),
        }
    }

    /// 検証済みのフィールド一覧（バックエンドのフィールド名）
    pub fn fields(&self) -> Result<Vec<(&'static str, String)>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::MissingField("Name"));
        }

        let price = parse_number::<f64>("price", &self.price)?;
        if price < 0.0 {
            return Err(invalid("price", &self.price));
        }
        let stock = parse_number::<i64>("stock", &self.stock)?;
        if stock < 0 {
            return Err(invalid("stock", &self.stock));
        }
        let ethical = parse_number::<f64>("ethical score", &self.ethical_score)?;
        if !(0.0..=10.0).contains(&ethical) {
            return Err(invalid("ethical score", &self.ethical_score));
        }

        Ok(vec![
            ("name", name.to_string()),
            ("description", self.description.trim().to_string()),
            ("category", self.category.trim().to_string()),
            ("price", price.to_string()),
            ("stock", stock.to_string()),
            ("materials", self.materials.trim().to_string()),
            ("ethicalScore", ethical.to_string()),
        ])
    }
}

fn invalid(field: &'static str, value: &str) -> Error {
    Error::InvalidValue {
        field,
        value: value.to_string(),
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| invalid(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::SignIn.title(), "Welcome Back");
        assert_eq!(AuthMode::SignUp.title(), "Create Account");
        assert_eq!(AuthMode::SignIn.toggle_label(), "Signup");
        assert_eq!(AuthMode::SignUp.toggle_prompt(), "Already have an account?");
    }

    #[test]
    fn test_signin_submission() {
        let form = AuthForm {
            email: " asha@example.com ".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        match form.submission().unwrap() {
            AuthSubmission::Login(req) => assert_eq!(req.email, "asha@example.com"),
            other => panic!("unexpected submission: {:?}", other),
        }
    }

    #[test]
    fn test_signup_requires_name_and_long_password() {
        let mut form = AuthForm {
            mode: AuthMode::SignUp,
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.submission(), Err(Error::MissingField("Full Name"))));

        form.name = "Asha".to_string();
        form.password = "abc".to_string();
        assert!(matches!(form.submission(), Err(Error::PasswordTooShort(6))));

        form.password = "secret".to_string();
        assert!(matches!(form.submission(), Ok(AuthSubmission::Register(_))));
    }

    #[test]
    fn test_toggle_keeps_fields() {
        let mut form = AuthForm {
            email: "a@b".to_string(),
            ..Default::default()
        };
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.email, "a@b");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(matches!(validate_email(""), Err(Error::MissingField(_))));
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@domain").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_review_draft() {
        let mut draft = ReviewDraft::default();
        assert!(draft.to_request(3).is_err());

        draft.set_rating(4);
        draft.comment = "  Beautiful work ".to_string();
        let request = draft.to_request(3).unwrap();
        assert_eq!(request.rating, 4);
        assert_eq!(request.comment, "Beautiful work");

        draft.reset();
        assert_eq!(draft, ReviewDraft::default());
    }

    #[test]
    fn test_product_form_fields() {
        let product = Product {
            name: "Rug".to_string(),
            artisan_category: "Textiles".to_string(),
            price: 4500.0,
            stock: 2,
            ethical_score: 9.0,
            ..Default::default()
        };
        let form = ProductForm::from_product(&product);
        let fields = form.fields().unwrap();
        assert_eq!(fields[0], ("name", "Rug".to_string()));
        assert!(fields.contains(&("category", "Textiles".to_string())));
        assert!(fields.contains(&("ethicalScore", "9".to_string())));
    }

    #[test]
    fn test_product_form_rejects_bad_numbers() {
        let mut form = ProductForm {
            name: "Rug".to_string(),
            price: "cheap".to_string(),
            stock: "1".to_string(),
            ethical_score: "5".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.fields(), Err(Error::InvalidValue { field: "price", .. })));

        form.price = "10".to_string();
        form.ethical_score = "11".to_string();
        assert!(matches!(form.fields(), Err(Error::InvalidValue { field: "ethical score", .. })));

        form.ethical_score = "5".to_string();
        form.name = " ".to_string();
        assert!(matches!(form.fields(), Err(Error::MissingField("Name"))));
    }
}

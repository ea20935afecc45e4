use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vividhands_common::SortKey;

#[derive(Parser)]
#[command(name = "vividhands")]
#[command(about = "VividHands artisan marketplace storefront", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品を検索・絞り込み
    Products {
        /// 商品名・説明・素材を検索（正規表現、大文字小文字を無視）
        #[arg(short, long)]
        search: Option<String>,

        /// 作り手のカテゴリ
        #[arg(short, long)]
        category: Option<String>,

        /// 倫理スコアの下限 (0-10)
        #[arg(short = 'e', long, default_value = "0")]
        min_ethical: u8,

        /// 最低価格
        #[arg(long)]
        min_price: Option<f64>,

        /// 最高価格
        #[arg(long)]
        max_price: Option<f64>,

        /// 並び順 (newest/price_asc/price_desc/ethical_desc/popularity)
        #[arg(long, default_value = "newest")]
        sort: SortKey,

        /// カテゴリ一覧のみ表示
        #[arg(long)]
        categories: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 商品の詳細とレビュー
    Product {
        #[arg(required = true)]
        id: i64,
    },

    /// カート操作
    Cart {
        #[command(subcommand)]
        command: Option<CartCommands>,
    },

    /// 注文履歴
    Orders {
        /// 期間の開始 (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// 期間の終了 (YYYY-MM-DD、その日の終わりまで)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// 注文の詳細
    Order {
        #[arg(required = true)]
        id: i64,
    },

    /// 配送済みの商品にレビューを投稿
    Review {
        /// 商品ID（省略時は配送済みの商品から選択）
        product_id: Option<i64>,

        /// 星の数 (1-5)
        #[arg(short, long)]
        rating: Option<u8>,

        /// コメント
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// サインイン
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },

    /// アカウント作成
    Signup {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },

    /// サインアウト
    Logout,

    /// 出品者ダッシュボード
    Artisan {
        #[command(subcommand)]
        command: ArtisanCommands,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを保存
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// カートの中身
    Show,

    /// 商品を追加
    Add {
        id: i64,

        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },

    /// 数量を変更（0で削除）
    Set { id: i64, quantity: u32 },

    /// 商品を削除
    Remove { id: i64 },

    /// 空にする
    Clear,
}

#[derive(Subcommand)]
pub enum ArtisanCommands {
    /// 出品者としてログイン
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },

    /// 出品者セッションを破棄
    Logout,

    /// 集計
    Stats,

    /// 自分の商品
    Products,

    /// 商品情報を更新（指定した項目のみ）
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        stock: Option<String>,

        #[arg(long)]
        materials: Option<String>,

        #[arg(long)]
        ethical_score: Option<String>,
    },

    /// 商品を削除
    Delete {
        id: i64,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 自分の商品を含む注文
    Orders {
        /// xlsxに書き出す（ファイルまたはディレクトリ）
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// 注文の詳細
    Order { id: i64 },
}

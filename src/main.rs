use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use dialoguer::{Confirm, Input, Password};
use vividhands::cli::{ArtisanCommands, CartCommands, Cli, Commands};
use vividhands::client::ApiClient;
use vividhands::config::Config;
use vividhands::error::StorefrontError;
use vividhands::{export, logging, render, review};
use vividhands_common::filter::categories;
use vividhands_common::timestamp::parse_timestamp;
use vividhands_common::{
    AuthForm, AuthMode, AuthSubmission, LoadState, LoginRequest, ProductFilter, ProductForm,
};

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// 期間指定の日付。日付のみの終端はその日の終わりまで
fn parse_range_bound(value: &str, end_of_day: bool) -> Result<NaiveDateTime, StorefrontError> {
    let parsed = parse_timestamp(value).ok_or_else(|| StorefrontError::InvalidDate(value.to_string()))?;
    if end_of_day && value.trim().len() == 10 {
        return parsed
            .date()
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| StorefrontError::InvalidDate(value.to_string()));
    }
    Ok(parsed)
}

fn prompt_email(email: Option<String>) -> Result<String, StorefrontError> {
    match email {
        Some(e) => Ok(e),
        None => Ok(Input::<String>::new().with_prompt("Email Address").interact_text()?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_tracing(cli.verbose);

    let mut config = Config::load().context("failed to load config")?;
    let routes = config.routes(cli.api_url.as_deref());
    tracing::debug!(api = routes.base(), "using api");
    let client = ApiClient::new(routes, config.timeout_seconds)?;

    match cli.command {
        Commands::Products { search, category, min_ethical, min_price, max_price, sort, categories: only_categories, json } => {
            let pb = render::spinner("Fetching products...");
            let result = client.products().await;
            pb.finish_and_clear();
            let products = result.context(vividhands_common::view::messages::FETCH_PRODUCTS_FAILED)?;

            if only_categories {
                for category in categories(&products) {
                    println!("{}", category);
                }
                return Ok(());
            }

            let mut filter = ProductFilter {
                search_query: search.unwrap_or_default(),
                category: category.unwrap_or_default(),
                sort_by: sort,
                ..Default::default()
            };
            filter.set_ethical_score(min_ethical);
            if let Some(max) = max_price {
                filter.set_max_price(max);
            }
            if let Some(min) = min_price {
                filter.set_min_price(min);
            }

            let visible = filter.apply(&products);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!("{}", render::product_list(&visible, &filter));
            }
        }

        Commands::Product { id } => {
            let pb = render::spinner("Fetching product...");
            let product = client.product(id).await;
            let reviews = client.product_reviews(id).await;
            pb.finish_and_clear();

            let product = product?;
            let reviews = reviews.unwrap_or_else(|e| {
                tracing::warn!("failed to fetch reviews: {}", e);
                Vec::new()
            });
            print!("{}", render::product_detail(&product, &reviews));
        }

        Commands::Cart { command } => {
            match command.unwrap_or(CartCommands::Show) {
                CartCommands::Show => {}
                CartCommands::Add { id, quantity } => {
                    let product = client.product(id).await?;
                    let total = config.cart.add(&product, quantity)?;
                    println!("✔ {} in cart: {}", product.name, total);
                }
                CartCommands::Set { id, quantity } => config.cart.set_quantity(id, quantity),
                CartCommands::Remove { id } => {
                    if !config.cart.remove(id) {
                        println!("Product {} is not in your cart", id);
                    }
                }
                CartCommands::Clear => config.cart.clear(),
            }
            config.save()?;
            print!("{}", render::cart(&config.cart));
        }

        Commands::Orders { from, to } => {
            let session = config.user_session()?;
            let pb = render::spinner(vividhands_common::view::messages::LOADING_ORDERS);
            let result = match (from, to) {
                (Some(from), Some(to)) => {
                    let start = parse_range_bound(&from, false)?;
                    let end = parse_range_bound(&to, true)?;
                    client.orders_between(session, start, end).await
                }
                _ => client.user_orders(session).await,
            };
            pb.finish_and_clear();

            let failed = result.is_err();
            let state = LoadState::from_result(result);
            print!("{}", render::orders_view(&state, now()));
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Order { id } => {
            let session = config.user_session()?;
            let order = client.order(session, id).await?;
            print!("{}", render::order_card(&order, now()));
        }

        Commands::Review { product_id, rating, comment } => {
            let session = config.user_session()?;

            let orders = client.user_orders(session).await?;
            let (product_id, name) = match product_id {
                Some(id) => {
                    let choice = review::require_reviewable(&orders, id, now())?;
                    (choice.product_id, choice.name)
                }
                None => {
                    let candidates = review::reviewable_products(&orders, now());
                    if candidates.is_empty() {
                        println!("No delivered items to review yet.");
                        return Ok(());
                    }
                    match review::pick_product(&candidates)? {
                        Some(choice) => (choice.product_id, choice.name),
                        None => return Ok(()),
                    }
                }
            };

            let draft = review::prompt_review(&name, rating, comment)?;
            let request = draft.to_request(product_id)?;
            client
                .submit_review(session, &request)
                .await
                .context(vividhands_common::view::messages::REVIEW_FAILED)?;
            println!("✔ Thanks for reviewing {}", name);
        }

        Commands::Login { email } => {
            let form = AuthForm {
                mode: AuthMode::SignIn,
                email: prompt_email(email)?,
                password: Password::new().with_prompt("Password").interact()?,
                ..Default::default()
            };
            let AuthSubmission::Login(request) = form.submission()? else {
                unreachable!("sign-in form always builds a login request");
            };
            let response = client.login(&request).await?;
            let session = response
                .user_session()
                .ok_or_else(|| StorefrontError::Config("login response has no token or user id".into()))?;
            println!("✔ Signed in{}", session.name.as_deref().map(|n| format!(" as {}", n)).unwrap_or_default());
            config.user = Some(session);
            config.save()?;
        }

        Commands::Signup { name, email } => {
            let name = match name {
                Some(n) => n,
                None => Input::<String>::new().with_prompt("Full Name").interact_text()?,
            };
            let form = AuthForm {
                mode: AuthMode::SignUp,
                name,
                email: prompt_email(email)?,
                password: Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?,
            };
            let AuthSubmission::Register(request) = form.submission()? else {
                unreachable!("sign-up form always builds a register request");
            };
            let response = client.register(&request).await?;
            match response.user_session() {
                Some(session) => {
                    config.user = Some(session);
                    config.save()?;
                    println!("✔ Account created and signed in");
                }
                None => println!("✔ Account created. Run `vividhands login` to sign in"),
            }
        }

        Commands::Logout => {
            config.user = None;
            config.save()?;
            println!("✔ Signed out");
        }

        Commands::Artisan { command } => run_artisan(command, &client, &mut config).await?,

        Commands::Config { set_api_url, show } => {
            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ API URL saved");
            }

            if show {
                println!("Config: {}", Config::config_path()?.display());
                println!("  API URL:  {}", config.resolve_api_url(cli.api_url.as_deref()));
                println!("  Timeout:  {}s", config.timeout_seconds);
                println!("  Customer: {}", if config.user.is_some() { "signed in" } else { "signed out" });
                println!("  Seller:   {}", if config.artisan.is_some() { "signed in" } else { "signed out" });
                println!("  Cart:     {} items", config.cart.item_count());
            }
        }
    }

    Ok(())
}

async fn run_artisan(command: ArtisanCommands, client: &ApiClient, config: &mut Config) -> anyhow::Result<()> {
    match command {
        ArtisanCommands::Login { email } => {
            let request = LoginRequest {
                email: prompt_email(email)?,
                password: Password::new().with_prompt("Password").interact()?,
            };
            vividhands_common::forms::validate_email(request.email.trim())?;
            let response = client.artisan_login(&request).await?;
            let session = response
                .artisan_session()
                .ok_or_else(|| StorefrontError::Config("login response has no token or artisan id".into()))?;
            config.artisan = Some(session);
            config.save()?;
            println!("✔ Signed in to the seller dashboard");
        }

        ArtisanCommands::Logout => {
            config.artisan = None;
            config.save()?;
            println!("✔ Signed out of the seller dashboard");
        }

        ArtisanCommands::Stats => {
            let session = config.artisan_session()?;
            let stats = client.dashboard_stats(session).await?;
            print!("{}", render::dashboard_stats(&stats));
        }

        ArtisanCommands::Products => {
            let session = config.artisan_session()?;
            let products = client.my_products(session).await?;
            print!("{}", render::artisan_products(&products));
        }

        ArtisanCommands::Update { id, name, description, category, price, stock, materials, ethical_score } => {
            let session = config.artisan_session()?;
            let products = client.my_products(session).await?;
            let current = products
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| StorefrontError::NotFound(format!("product {} in your listings", id)))?;

            let mut form = ProductForm::from_product(current);
            let overrides = [
                (&mut form.name, name),
                (&mut form.description, description),
                (&mut form.category, category),
                (&mut form.price, price),
                (&mut form.stock, stock),
                (&mut form.materials, materials),
                (&mut form.ethical_score, ethical_score),
            ];
            for (field, value) in overrides {
                if let Some(v) = value {
                    *field = v;
                }
            }

            let updated = client.update_product(session, id, &form).await?;
            println!("✔ Updated {}", updated.name);
        }

        ArtisanCommands::Delete { id, yes } => {
            let session = config.artisan_session()?;
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Delete product {}?", id))
                    .default(false)
                    .interact()?;
            if confirmed {
                client.delete_product(session, id).await?;
                println!("✔ Deleted product {}", id);
            }
        }

        ArtisanCommands::Orders { export } => {
            let session = config.artisan_session()?;
            let orders = client.artisan_orders(session).await?;
            print!("{}", render::artisan_orders(&orders));

            if let Some(output) = export {
                let path = export::export_orders(&orders, &output)?;
                println!("✔ Exported {} orders: {}", orders.len(), path.display());
            }
        }

        ArtisanCommands::Order { id } => {
            let session = config.artisan_session()?;
            let order = client.artisan_order(session, id).await?;
            print!("{}", render::order_card(&order, now()));
        }
    }

    Ok(())
}

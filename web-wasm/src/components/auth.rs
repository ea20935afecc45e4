//! サインイン / アカウント作成 / 出品者ログイン

use crate::api::storefront;
use crate::app::{use_app, Page};
use crate::components::alert::ErrorBanner;
use crate::session::SessionSlot;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use vividhands_common::forms::validate_email;
use vividhands_common::{AuthForm, AuthMode, AuthSubmission, LoginRequest};

#[component]
pub fn Auth() -> impl IntoView {
    let app = use_app();
    let form = RwSignal::new(AuthForm::default());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let mode = move || form.with(|f| f.mode);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = match form.with_untracked(AuthForm::submission) {
            Ok(s) => s,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let result = match &submission {
                AuthSubmission::Login(request) => storefront::login(request).await,
                AuthSubmission::Register(request) => storefront::register(request).await,
            };
            set_submitting.set(false);

            match result {
                Ok(response) => match response.user_session() {
                    Some(session) => {
                        log!("signed in as user {}", session.id);
                        app.sign_in(SessionSlot::User, session);
                        app.navigate(Page::Home);
                    }
                    // 登録のみ成功（トークンなし）ならサインインへ
                    None if matches!(submission, AuthSubmission::Register(_)) => {
                        form.update(|f| {
                            f.mode = AuthMode::SignIn;
                            f.password.clear();
                        });
                    }
                    None => set_error.set(Some("Sign in failed: no token returned".to_string())),
                },
                Err(e) => {
                    warn!("auth failed: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <section class="auth">
            <form class="auth-form" on:submit=on_submit>
                <h2>{move || mode().title()}</h2>

                {move || error.get().map(|message| view! { <ErrorBanner title="Authentication Error" message=message /> })}

                <Show when=move || mode() == AuthMode::SignUp>
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.name = value);
                            }
                        />
                    </div>
                </Show>

                <div class="form-group">
                    <label for="email">"Email Address"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Please wait..." } else { mode().submit_label() }}
                </button>

                <p class="auth-toggle">
                    {move || mode().toggle_prompt()}
                    " "
                    <button
                        type="button"
                        class="btn-link"
                        on:click=move |_| {
                            set_error.set(None);
                            form.update(AuthForm::toggle_mode);
                        }
                    >
                        {move || mode().toggle_label()}
                    </button>
                </p>
            </form>
        </section>
    }
}

/// 出品者ログイン
#[component]
pub fn ArtisanLogin() -> impl IntoView {
    let app = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = validate_email(&request.email) {
            set_error.set(Some(e.to_string()));
            return;
        }
        if request.password.is_empty() {
            set_error.set(Some("Password is required".to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let result = storefront::artisan_login(&request).await;
            set_submitting.set(false);
            match result.map(|r| r.artisan_session()) {
                Ok(Some(session)) => {
                    log!("signed in as artisan {}", session.id);
                    app.sign_in(SessionSlot::Artisan, session);
                    app.navigate(Page::Dashboard);
                }
                Ok(None) => set_error.set(Some("Login failed: no token returned".to_string())),
                Err(e) => {
                    warn!("artisan login failed: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <section class="auth">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Seller Login"</h2>

                {move || error.get().map(|message| view! { <ErrorBanner title="Login Error" message=message /> })}

                <div class="form-group">
                    <label for="artisan-email">"Email Address"</label>
                    <input
                        type="email"
                        id="artisan-email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="artisan-password">"Password"</label>
                    <input
                        type="password"
                        id="artisan-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Please wait..." } else { "Sign In" }}
                </button>
            </form>
        </section>
    }
}

//! Application Contexts
//!
//! Session state and screen navigation, provided once from `App` via the
//! Leptos context API. The session is an explicitly constructed object
//! handed to the tree composer; nothing here is a global.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::{format_api_error, ApiError};
use crate::models::{LoginDto, RegisterDto, UserResponseDto};
use crate::services::auth;
use crate::token;

/// The screens of the single-window client. Detail/edit variants carry the
/// entity id they target.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    Tasks,
    TaskNew,
    TaskDetail(String),
    TaskEdit(String),
    Categories,
    CategoryNew,
    CategoryEdit(String),
}

/// In-memory navigation: one signal, no router.
#[derive(Clone, Copy)]
pub struct Navigator {
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
}

impl Navigator {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self { screen: screen.0, set_screen: screen.1 }
    }

    pub fn goto(&self, screen: Screen) {
        self.set_screen.set(screen);
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Process-wide session state: at most one authenticated user, plus the
/// loading flag covering the initial token check.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: ReadSignal<Option<UserResponseDto>>,
    set_user: WriteSignal<Option<UserResponseDto>>,
    pub is_loading: ReadSignal<bool>,
    set_is_loading: WriteSignal<bool>,
    nav: Navigator,
}

impl AuthContext {
    pub fn new(
        user: (ReadSignal<Option<UserResponseDto>>, WriteSignal<Option<UserResponseDto>>),
        is_loading: (ReadSignal<bool>, WriteSignal<bool>),
        nav: Navigator,
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            is_loading: is_loading.0,
            set_is_loading: is_loading.1,
            nav,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Resolve the persisted token into a user, once, on mount. Without a
    /// token the session settles anonymous with no network call; a token
    /// the server rejects is cleared.
    pub fn init(self) {
        Effect::new(move |_| {
            spawn_local(async move {
                if token::has_token() {
                    match auth::get_current_user().await {
                        Ok(user) => self.set_user.set(Some(user)),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!(
                                    "[Auth] Session invalide : {}",
                                    format_api_error(&err)
                                )
                                .into(),
                            );
                            token::remove_token();
                            self.set_user.set(None);
                        }
                    }
                }
                self.set_is_loading.set(false);
            });
        });
    }

    /// Failures bubble untouched so the form can display them; the session
    /// state only moves on success.
    pub async fn login(self, credentials: LoginDto) -> Result<(), ApiError> {
        let response = auth::login(&credentials).await?;
        self.set_user.set(Some(response.user));
        self.nav.goto(Screen::Dashboard);
        Ok(())
    }

    pub async fn register(self, data: RegisterDto) -> Result<(), ApiError> {
        let response = auth::register(&data).await?;
        self.set_user.set(Some(response.user));
        self.nav.goto(Screen::Dashboard);
        Ok(())
    }

    /// Never fails: drops the token, forgets the user, goes to login.
    pub fn logout(self) {
        auth::logout();
        self.set_user.set(None);
        self.nav.goto(Screen::Login);
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

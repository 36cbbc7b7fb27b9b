//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::config::UiConfig;
use crate::i18n::LocaleAdapter;
use crate::plugins::Capabilities;

/// Get the session signal. Writes through it persist the token.
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// Get the immutable UI configuration.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>()
}

/// Provider component that turns the installed [`Capabilities`] into
/// context for the rest of the tree.
///
/// The capabilities themselves must already be in context, which the entry
/// point arranges through its launch builder. Their session only seeds the
/// signal; read the live session through [`use_session`].
#[component]
pub fn StorefrontProvider(children: Element) -> Element {
    let capabilities = use_context::<Capabilities>();

    let ui = use_context_provider(|| capabilities.ui.clone());
    use_context_provider(|| Signal::new(capabilities.session.clone()));

    let class = format!("storefront-app {}", ui.root_class());
    let style = ui.root_style();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            {children}
        }
    }
}

/// What [`SessionBadge`] shows for a session.
#[derive(Clone, Debug, PartialEq)]
enum BadgeView {
    Anonymous {
        label: String,
    },
    Account {
        account: String,
        avatar: String,
        admin: Option<String>,
        cart: String,
    },
}

impl BadgeView {
    fn of(session: &Session, locale: &LocaleAdapter) -> Self {
        if !session.is_logged_in() {
            return BadgeView::Anonymous {
                label: locale.t("session.anonymous"),
            };
        }
        BadgeView::Account {
            account: session.account.clone(),
            avatar: session.avatar(),
            admin: session.is_admin().then(|| locale.t("session.admin")),
            cart: locale.t_with("session.cart", &[("count", &session.cart.to_string())]),
        }
    }
}

/// Avatar, account name, admin marker and cart count of the signed-in user.
#[component]
pub fn SessionBadge() -> Element {
    let session = use_session();
    let ui = use_ui_config();

    let view = BadgeView::of(&session.read(), &ui.locale);
    match view {
        BadgeView::Anonymous { label } => rsx! {
            span {
                class: "session-badge session-badge--anonymous",
                "{label}"
            }
        },
        BadgeView::Account {
            account,
            avatar,
            admin,
            cart,
        } => rsx! {
            div {
                class: "session-badge",
                img {
                    class: "session-badge-avatar",
                    src: "{avatar}",
                    alt: "Avatar",
                }
                span {
                    class: "session-badge-account",
                    "{account}"
                }
                if let Some(admin) = admin {
                    span {
                        class: "session-badge-admin",
                        "{admin}"
                    }
                }
                span {
                    class: "session-badge-cart",
                    "{cart}"
                }
            }
        },
    }
}

/// Log the user out, persisting the cleared token.
fn sign_out(session: &mut SessionStore) {
    session.logout();
    tracing::info!(key = %session.key(), "logged out");
}

/// Button to log out the current user. Renders nothing when logged out.
#[component]
pub fn LogoutButton(#[props(default = "".to_string())] class: String) -> Element {
    let mut session = use_session();
    let ui = use_ui_config();

    if !session.read().is_logged_in() {
        return rsx! {};
    }

    let onclick = move |_| sign_out(&mut session.write());

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            {ui.locale.t("session.logout")}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use store::{LoginPayload, MemoryStorage, SessionStorage, StorefrontConfig};

    use super::*;
    use crate::plugins::{default_plugins, register_plugins, AppBuilder};

    fn capabilities(storage: &MemoryStorage) -> Capabilities {
        let mut app = AppBuilder::new();
        let config = StorefrontConfig::default();
        register_plugins(&mut app, &default_plugins(&config, Arc::new(storage.clone()))).unwrap();
        app.finish().unwrap()
    }

    fn admin_login() -> LoginPayload {
        LoginPayload::default()
            .with_token("tok")
            .with_account("alice")
            .with_role("ADMIN")
            .with_cart(3)
    }

    #[derive(Clone)]
    struct Seen(Rc<RefCell<Option<(SessionStore, UiConfig)>>>);

    #[component]
    fn Capture() -> Element {
        let seen = use_context::<Seen>();
        let session = use_session();
        *seen.0.borrow_mut() = Some((session(), use_ui_config()));
        rsx! {}
    }

    #[component]
    fn Harness() -> Element {
        rsx! {
            StorefrontProvider {
                SessionBadge {}
                LogoutButton {}
                Capture {}
            }
        }
    }

    #[test]
    fn test_provider_seeds_session_signal() {
        let storage = MemoryStorage::new();
        let mut caps = capabilities(&storage);
        caps.session.login(&admin_login()).unwrap();

        let seen = Seen(Rc::new(RefCell::new(None)));
        let mut dom = VirtualDom::new(Harness)
            .with_root_context(caps)
            .with_root_context(seen.clone());
        dom.rebuild_in_place();

        let (session, ui) = seen.0.borrow_mut().take().unwrap();
        assert_eq!(session.account, "alice");
        assert!(session.is_admin());
        assert_eq!(ui.theme.default_theme(), "pink");
    }

    #[test]
    fn test_provider_renders_anonymous_session() {
        let storage = MemoryStorage::new();
        let seen = Seen(Rc::new(RefCell::new(None)));
        let mut dom = VirtualDom::new(Harness)
            .with_root_context(capabilities(&storage))
            .with_root_context(seen.clone());
        dom.rebuild_in_place();

        let (session, _) = seen.0.borrow_mut().take().unwrap();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_badge_for_admin() {
        let storage = MemoryStorage::new();
        let mut caps = capabilities(&storage);
        caps.session.login(&admin_login()).unwrap();

        assert_eq!(
            BadgeView::of(&caps.session, &caps.ui.locale),
            BadgeView::Account {
                account: "alice".to_string(),
                avatar: "https://api.multiavatar.com/alice.png".to_string(),
                admin: Some("Admin".to_string()),
                cart: "3 in cart".to_string(),
            }
        );
    }

    #[test]
    fn test_badge_for_regular_user_has_no_admin_marker() {
        let storage = MemoryStorage::new();
        let mut caps = capabilities(&storage);
        caps.session
            .login(&LoginPayload::default().with_token("tok").with_account("bob"))
            .unwrap();

        match BadgeView::of(&caps.session, &caps.ui.locale) {
            BadgeView::Account { admin, cart, .. } => {
                assert!(admin.is_none());
                assert_eq!(cart, "0 in cart");
            }
            other => panic!("unexpected badge: {other:?}"),
        }
    }

    #[test]
    fn test_badge_for_anonymous() {
        let caps = capabilities(&MemoryStorage::new());
        assert_eq!(
            BadgeView::of(&caps.session, &caps.ui.locale),
            BadgeView::Anonymous {
                label: "Guest".to_string()
            }
        );
    }

    #[test]
    fn test_sign_out_persists_empty_token() {
        let storage = MemoryStorage::new();
        let mut caps = capabilities(&storage);
        caps.session.login(&admin_login()).unwrap();

        sign_out(&mut caps.session);

        assert!(!caps.session.is_logged_in());
        assert!(!caps.session.is_admin());
        assert_eq!(
            storage.get_item("shop-user").unwrap().as_deref(),
            Some(r#"{"token":""}"#)
        );
    }
}

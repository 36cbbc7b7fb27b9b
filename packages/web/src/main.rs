use dioxus::prelude::*;

use store::StorefrontConfig;
use ui::{AppBuilder, Capabilities, StartupError};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled `storefront.toml`.
const CONFIG: &str = include_str!("../storefront.toml");

fn main() {
    dioxus::logger::initialize_default();

    let (config, capabilities) = match bootstrap() {
        Ok(started) => started,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                tracing::error!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    };

    tracing::info!(
        plugins = ?capabilities.installed,
        mount_point = %config.app.mount_point,
        "mounting storefront"
    );
    mount(&config.app.mount_point, capabilities);
}

/// Load the configuration and run every plugin.
fn bootstrap() -> Result<(StorefrontConfig, Capabilities), StartupError> {
    let config = StorefrontConfig::from_toml(CONFIG)?;

    let mut app = AppBuilder::new();
    ui::register_plugins(&mut app, &ui::default_plugins(&config, ui::platform_storage()))?;

    Ok((config, app.finish()?))
}

fn mount(mount_point: &str, capabilities: Capabilities) {
    let builder = dioxus::LaunchBuilder::new().with_context(capabilities);

    #[cfg(feature = "web")]
    let builder = builder.with_cfg(dioxus::web::Config::new().rootname(mount_point));
    #[cfg(not(feature = "web"))]
    let _ = mount_point;

    builder.launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::StorefrontProvider {
            header {
                class: "app-bar",
                ui::SessionBadge {}
                ui::LogoutButton { class: "app-bar-logout" }
            }
        }
    }
}

//! Portfolio single-page app: Leptos client-side wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod content;
mod navigation;
mod pages;
mod theme;

// Only pulled in to enable its `js` feature on wasm32.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::theme::ThemeProvider;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The portfolio router: the homepage and a 404 fallback, inside the theme provider.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Title text=format!("{} | Portfolio", content::OWNER) />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Web, app and visualization projects." />

		<ThemeProvider>
			<Router>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
				</Routes>
			</Router>
		</ThemeProvider>
	}
}

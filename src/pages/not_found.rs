use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::warn;

/// Router fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
	let location = use_location();
	warn!("No route for {}", location.pathname.get_untracked());

	view! {
		<main class="not-found container">
			<h1>"404"</h1>
			<p class="muted">"Nothing lives at this address."</p>
			<a href="/" class="btn btn-primary">
				"Back to the portfolio"
			</a>
		</main>
	}
}

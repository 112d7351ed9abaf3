use leptos::prelude::*;

use super::ui::{Button, ButtonVariant};
use crate::content::{NAV_LINKS, OWNER, OWNER_INITIALS};
use crate::navigation::scroll_to;
use crate::theme::use_theme;

#[component]
fn SunIcon() -> impl IntoView {
	view! {
		<svg viewBox="0 0 24 24" width="18" height="18" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
			<circle cx="12" cy="12" r="4" />
			<path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4" />
		</svg>
	}
}

#[component]
fn MoonIcon() -> impl IntoView {
	view! {
		<svg viewBox="0 0 24 24" width="18" height="18" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
			<path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z" />
		</svg>
	}
}

/// Sticky header with section links, the theme toggle and a mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
	let theme = use_theme();
	let (menu_open, set_menu_open) = signal(false);

	let links = move || {
		NAV_LINKS
			.iter()
			.map(|&(id, label)| {
				view! {
					<button
						class="nav-link"
						on:click=move |_| {
							set_menu_open.set(false);
							scroll_to(id);
						}
					>
						{label}
					</button>
				}
			})
			.collect_view()
	};

	let toggle_label = move || {
		if theme.get().is_dark() {
			"Switch to light mode"
		} else {
			"Switch to dark mode"
		}
	};

	view! {
		<header class="navbar">
			<div class="navbar-inner container">
				<button class="brand" on:click=move |_| scroll_to("hero")>
					<span class="brand-logo" aria-label=format!("{OWNER} logo")>
						{OWNER_INITIALS}
					</span>
					<span class="brand-name">{OWNER}</span>
				</button>

				<nav class="nav-links" aria-label="Sections">
					{links()}
				</nav>

				<div class="navbar-actions">
					<button
						class="icon-button"
						on:click=move |_| theme.toggle()
						aria-label=toggle_label
						title=toggle_label
					>
						{move || {
							if theme.get().is_dark() {
								view! { <SunIcon /> }.into_any()
							} else {
								view! { <MoonIcon /> }.into_any()
							}
						}}
					</button>
					<Button variant=ButtonVariant::Ghost href="#contact" class="hide-mobile">
						"✉ Hire Me"
					</Button>
					<button
						class="icon-button show-mobile"
						on:click=move |_| set_menu_open.update(|open| *open = !*open)
						aria-label="Toggle navigation menu"
						aria-expanded=move || menu_open.get().to_string()
					>
						{move || if menu_open.get() { "✕" } else { "☰" }}
					</button>
				</div>
			</div>

			<Show when=move || menu_open.get()>
				<nav class="mobile-menu show-mobile" aria-label="Sections">
					{links()}
					<a href="#contact" class="nav-link" on:click=move |_| set_menu_open.set(false)>
						"✉ Hire Me"
					</a>
				</nav>
			</Show>
		</header>
	}
}

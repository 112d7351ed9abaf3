use leptos::prelude::*;

use crate::content::{GITHUB_URL, LINKEDIN_URL, NAV_LINKS, OWNER};

#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="footer">
			<div class="container footer-inner">
				<p class="muted">{format!("© {year} {OWNER}. All rights reserved.")}</p>
				<nav class="footer-links" aria-label="Footer">
					{NAV_LINKS
						.iter()
						.map(|&(id, label)| view! { <a href=format!("#{id}")>{label}</a> })
						.collect_view()}
				</nav>
				<div class="footer-social">
					<a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub">
						"GitHub"
					</a>
					<a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
						"LinkedIn"
					</a>
				</div>
			</div>
		</footer>
	}
}

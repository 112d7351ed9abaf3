use leptos::prelude::*;

use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;

/// The single portfolio page.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Navbar />
			<main>
				<Hero />
				<Skills />
				<Projects />
				<Contact />
			</main>
			<Footer />
		</ErrorBoundary>
	}
}

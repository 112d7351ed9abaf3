//! Small presentational building blocks shared by the page sections.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
	#[default]
	Primary,
	Secondary,
	Ghost,
}

impl ButtonVariant {
	fn class(self) -> &'static str {
		match self {
			Self::Primary => "btn btn-primary",
			Self::Secondary => "btn btn-secondary",
			Self::Ghost => "btn btn-ghost",
		}
	}
}

/// A link when `href` is given, a button otherwise.
#[component]
pub fn Button(
	#[prop(optional)] variant: ButtonVariant,
	#[prop(optional)] href: Option<&'static str>,
	#[prop(optional, into)] on_click: Option<Callback<()>>,
	#[prop(optional)] class: &'static str,
	#[prop(default = "button")] kind: &'static str,
	children: Children,
) -> impl IntoView {
	let class = format!("{} {class}", variant.class());
	match href {
		Some(href) => view! {
			<a href=href class=class>
				{children()}
			</a>
		}
		.into_any(),
		None => view! {
			<button
				type=kind
				class=class
				on:click=move |_| {
					if let Some(cb) = on_click {
						cb.run(());
					}
				}
			>
				{children()}
			</button>
		}
		.into_any(),
	}
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
	view! { <span class="badge">{children()}</span> }
}

/// Full-height page section that nav links scroll to by `id`.
#[component]
pub fn Section(
	id: &'static str,
	#[prop(optional)] class: &'static str,
	children: Children,
) -> impl IntoView {
	view! {
		<section id=id class=format!("section {class}")>
			<div class="container">{children()}</div>
		</section>
	}
}

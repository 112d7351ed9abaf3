use leptos::prelude::*;
use log::{info, warn};
use thiserror::Error;

use super::ui::{Badge, Button, Section};
use crate::content::{CAPABILITIES, CONTACT_EMAIL, LINKEDIN_URL, SERVICES};
use crate::navigation::open_url;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
	#[error("Please enter your name")]
	MissingName,
	#[error("Please enter a valid email address")]
	InvalidEmail,
	#[error("Please write a message")]
	EmptyMessage,
}

/// Contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
}

fn is_plausible_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& !email.chars().any(char::is_whitespace)
		&& domain
			.split_once('.')
			.is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl ContactMessage {
	/// Fields are checked in form order, so the first problem is reported.
	pub fn validate(&self) -> Result<(), ContactError> {
		if self.name.trim().is_empty() {
			return Err(ContactError::MissingName);
		}
		if !is_plausible_email(self.email.trim()) {
			return Err(ContactError::InvalidEmail);
		}
		if self.message.trim().is_empty() {
			return Err(ContactError::EmptyMessage);
		}
		Ok(())
	}

	pub fn subject(&self) -> String {
		let name = self.name.trim();
		format!("Inquiry from {}", if name.is_empty() { "a visitor" } else { name })
	}

	pub fn body(&self) -> String {
		format!(
			"{}\n\nFrom: {} <{}>",
			self.message,
			self.name.trim(),
			self.email.trim()
		)
	}

	/// `mailto:` link with subject and body passed through `encode`.
	pub fn mailto(&self, to: &str, encode: impl Fn(&str) -> String) -> String {
		format!(
			"mailto:{to}?subject={}&body={}",
			encode(&self.subject()),
			encode(&self.body())
		)
	}
}

fn encode_component(text: &str) -> String {
	js_sys::encode_uri_component(text).into()
}

#[component]
fn ContactForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let error = RwSignal::new(None::<ContactError>);

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let draft = ContactMessage {
			name: name.get_untracked(),
			email: email.get_untracked(),
			message: message.get_untracked(),
		};
		match draft.validate() {
			Ok(()) => {
				error.set(None);
				info!("Contact form submitted, opening mail client");
				open_url(&draft.mailto(CONTACT_EMAIL, encode_component));
			}
			Err(err) => {
				warn!("Contact form rejected: {err}");
				error.set(Some(err));
			}
		}
	};

	view! {
		<form class="card contact-form" on:submit=on_submit novalidate=true>
			<label>
				"Name"
				<input
					name="name"
					placeholder="Your name"
					prop:value=move || name.get()
					on:input=move |ev| name.set(event_target_value(&ev))
				/>
			</label>
			<label>
				"Email"
				<input
					name="email"
					type="email"
					placeholder="you@example.com"
					prop:value=move || email.get()
					on:input=move |ev| email.set(event_target_value(&ev))
				/>
			</label>
			<label>
				"Message"
				<textarea
					name="message"
					rows="5"
					placeholder="Tell me about your project…"
					prop:value=move || message.get()
					on:input=move |ev| message.set(event_target_value(&ev))
				/>
			</label>
			{move || error.get().map(|err| view! { <p class="form-error" role="alert">{err.to_string()}</p> })}
			<div class="form-actions">
				<Button kind="submit">"➤ Send Email"</Button>
				<a href=LINKEDIN_URL target="_blank" rel="noreferrer" class="btn btn-secondary">
					"LinkedIn"
				</a>
			</div>
		</form>
	}
}

#[component]
pub fn Contact() -> impl IntoView {
	view! {
		<Section id="contact">
			<div class="section-heading">
				<h2 class="section-title">"Contact"</h2>
				<p class="eyebrow">"Let’s build something functional"</p>
			</div>
			<div class="contact-grid">
				<ContactForm />
				<div class="card services">
					<h3>"✦ Hire me for"</h3>
					<ul class="service-list">
						{SERVICES.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
					</ul>
					<h4>"Capabilities"</h4>
					<div class="badge-row">
						{CAPABILITIES.iter().map(|c| view! { <Badge>{*c}</Badge> }).collect_view()}
					</div>
					<div class="availability">
						<p>"Typical response: " <strong>"within 24 hours"</strong></p>
						<p>"✓ Available for contract & freelance"</p>
					</div>
				</div>
			</div>
		</Section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(name: &str, email: &str, message: &str) -> ContactMessage {
		ContactMessage {
			name: name.into(),
			email: email.into(),
			message: message.into(),
		}
	}

	#[test]
	fn complete_form_is_valid() {
		assert_eq!(draft("Ada", "ada@example.com", "Hello").validate(), Ok(()));
		assert_eq!(draft(" Ada ", " ada@mail.example.org ", "Hi").validate(), Ok(()));
	}

	#[test]
	fn first_problem_is_reported() {
		assert_eq!(draft("  ", "nope", "").validate(), Err(ContactError::MissingName));
		assert_eq!(draft("Ada", "nope", "").validate(), Err(ContactError::InvalidEmail));
		assert_eq!(draft("Ada", "a@b.co", " \n").validate(), Err(ContactError::EmptyMessage));
	}

	#[test]
	fn rejects_malformed_emails() {
		for email in ["", "@example.com", "ada@", "ada@example", "ada@@example.com", "a da@x.io", "ada@.com", "ada@x."] {
			assert!(!is_plausible_email(email), "{email:?} accepted");
		}
	}

	#[test]
	fn subject_falls_back_to_visitor() {
		assert_eq!(draft("Ada", "", "").subject(), "Inquiry from Ada");
		assert_eq!(draft(" ", "", "").subject(), "Inquiry from a visitor");
	}

	#[test]
	fn mailto_encodes_subject_and_body() {
		let msg = draft("Ada", "ada@example.com", "Build me a site");
		assert_eq!(msg.body(), "Build me a site\n\nFrom: Ada <ada@example.com>");
		let url = msg.mailto("jan@example.com", |s| s.replace(' ', "%20").replace('\n', "%0A"));
		assert_eq!(
			url,
			"mailto:jan@example.com?subject=Inquiry%20from%20Ada\
			 &body=Build%20me%20a%20site%0A%0AFrom:%20Ada%20<ada@example.com>"
		);
	}

	#[test]
	fn errors_read_as_user_messages() {
		assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address");
	}
}

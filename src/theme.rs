//! Light/dark theme following the local clock, with a manual toggle.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout_with_handle;
use leptos::prelude::*;
use leptos_meta::Html;
use log::{debug, info, warn};

const HOUR_MS: u64 = 3_600_000;
const LIGHT_FROM: u32 = 6;
const DARK_FROM: u32 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
	Light,
	Dark,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}
}

/// Light from 06:00 up to 18:00 local time, dark otherwise.
pub fn theme_for_hour(hour: u32) -> Theme {
	if (LIGHT_FROM..DARK_FROM).contains(&hour) {
		Theme::Light
	} else {
		Theme::Dark
	}
}

/// Milliseconds from the given local time to the next 06:00 or 18:00.
pub fn ms_until_next_boundary(hour: u32, minute: u32, second: u32, millis: u32) -> u64 {
	let now = u64::from(hour) * HOUR_MS
		+ u64::from(minute) * 60_000
		+ u64::from(second) * 1_000
		+ u64::from(millis);
	let next = if hour < LIGHT_FROM {
		u64::from(LIGHT_FROM) * HOUR_MS
	} else if hour < DARK_FROM {
		u64::from(DARK_FROM) * HOUR_MS
	} else {
		u64::from(24 + LIGHT_FROM) * HOUR_MS
	};
	next.saturating_sub(now)
}

fn local_clock() -> (u32, u32, u32, u32) {
	let now = js_sys::Date::new_0();
	(
		now.get_hours(),
		now.get_minutes(),
		now.get_seconds(),
		now.get_milliseconds(),
	)
}

/// Shared handle to the current theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
	theme: RwSignal<Theme>,
}

impl ThemeContext {
	pub fn get(&self) -> Theme {
		self.theme.get()
	}

	/// Current theme without subscribing, for use outside reactive scopes.
	pub fn get_untracked(&self) -> Theme {
		self.theme.get_untracked()
	}

	pub fn toggle(&self) {
		self.theme.update(|t| *t = t.toggled());
	}
}

pub fn use_theme() -> ThemeContext {
	use_context::<ThemeContext>().unwrap_or_else(|| {
		warn!("use_theme called outside ThemeProvider");
		ThemeContext {
			theme: RwSignal::new(Theme::Light),
		}
	})
}

/// Provides [`ThemeContext`], mirrors it onto `<html>` and flips it at the
/// next clock boundary.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
	let (hour, ..) = local_clock();
	let theme = RwSignal::new(theme_for_hour(hour));
	provide_context(ThemeContext { theme });
	info!("Theme initialized to {}", theme.get_untracked().as_str());

	// re-armed on every change, manual toggles included
	Effect::new(move |_| {
		theme.track();
		let (h, m, s, ms) = local_clock();
		let wait = ms_until_next_boundary(h, m, s, ms);
		debug!("Next theme flip in {wait} ms");
		match set_timeout_with_handle(
			move || {
				let (hour, ..) = local_clock();
				theme.set(theme_for_hour(hour));
			},
			Duration::from_millis(wait),
		) {
			Ok(handle) => on_cleanup(move || handle.clear()),
			Err(err) => warn!("Could not schedule theme flip: {err:?}"),
		}
	});

	view! {
		<Html
			attr:lang="en"
			attr:dir="ltr"
			attr:data-theme=move || theme.get().as_str()
			attr:class=move || if theme.get().is_dark() { "scroll-smooth dark" } else { "scroll-smooth" }
			attr:style=move || format!("color-scheme: {}", theme.get().as_str())
		/>
		{children()}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn daytime_is_light() {
		assert_eq!(theme_for_hour(0), Theme::Dark);
		assert_eq!(theme_for_hour(5), Theme::Dark);
		assert_eq!(theme_for_hour(6), Theme::Light);
		assert_eq!(theme_for_hour(12), Theme::Light);
		assert_eq!(theme_for_hour(17), Theme::Light);
		assert_eq!(theme_for_hour(18), Theme::Dark);
		assert_eq!(theme_for_hour(23), Theme::Dark);
	}

	#[test]
	fn boundary_countdown() {
		assert_eq!(ms_until_next_boundary(5, 59, 59, 0), 1_000);
		assert_eq!(ms_until_next_boundary(6, 0, 0, 0), 12 * HOUR_MS);
		assert_eq!(ms_until_next_boundary(17, 30, 0, 0), 30 * 60_000);
		assert_eq!(ms_until_next_boundary(18, 0, 0, 0), 12 * HOUR_MS);
		assert_eq!(ms_until_next_boundary(23, 0, 0, 500), 7 * HOUR_MS - 500);
		assert_eq!(ms_until_next_boundary(0, 0, 0, 0), 6 * HOUR_MS);
	}

	#[test]
	fn toggle_flips_both_ways() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
		assert!(Theme::Dark.is_dark());
	}
}

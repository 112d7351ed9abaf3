use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scrolls the section with the given element id to the top of the viewport.
pub fn scroll_to(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		warn!("No section with id {id:?}");
		return;
	};
	debug!("Scrolling to #{id}");
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Points the window at `url`, e.g. a `mailto:` link.
pub fn open_url(url: &str) {
	let result = web_sys::window()
		.ok_or_else(|| "no window".into())
		.and_then(|w| w.location().set_href(url));
	if let Err(err) = result {
		warn!("Could not open {url}: {err:?}");
	}
}

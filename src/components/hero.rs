use leptos::prelude::*;

use super::life_grid::LifeGridCanvas;
use super::skill_graph::SkillGraphCanvas;
use super::ui::{Badge, Button, ButtonVariant, Section};
use crate::content::{CAPABILITIES, SKILL_NODES};
use crate::navigation::scroll_to;

/// Plain anchor buttons after the primary call to action: `(href, label, variant)`.
const HERO_ANCHORS: [(&str, &str, ButtonVariant); 2] = [
	("#skills", "🔧 Skills", ButtonVariant::Secondary),
	("#contact", "✉ Contact", ButtonVariant::Ghost),
];

#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<Section id="hero" class="hero">
			<div class="hero-grid">
				<div class="hero-copy">
					<h1>
						"Functional " <span class="accent">"Engineer"</span> " & Builder"
					</h1>
					<p class="lead">
						"I design and ship working software: websites, apps and robotics "
						"systems, prioritizing reliability and real-world utility."
					</p>
					<div class="hero-actions">
						<Button on_click=move |()| scroll_to("projects")>"View Projects →"</Button>
						{HERO_ANCHORS
							.iter()
							.map(|&(href, label, variant)| {
								view! {
									<Button variant=variant href=href>
										{label}
									</Button>
								}
							})
							.collect_view()}
					</div>
					<div class="badge-row">
						{CAPABILITIES.iter().map(|c| view! { <Badge>{*c}</Badge> }).collect_view()}
					</div>
				</div>
				<div class="card hero-visual">
					<LifeGridCanvas />
				</div>
			</div>

			<div class="card skill-graph-frame">
				<SkillGraphCanvas nodes=SKILL_NODES.to_vec() on_navigate=scroll_to />
			</div>
		</Section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::NAV_LINKS;

	#[test]
	fn anchors_point_at_page_sections() {
		let hrefs: Vec<_> = HERO_ANCHORS.iter().map(|(href, ..)| *href).collect();
		assert_eq!(hrefs, vec!["#skills", "#contact"]);
		for (href, ..) in HERO_ANCHORS {
			let id = href.trim_start_matches('#');
			assert!(NAV_LINKS.iter().any(|(section, _)| *section == id), "{href}");
		}
		assert_eq!(HERO_ANCHORS[0].2, ButtonVariant::Secondary);
		assert_eq!(HERO_ANCHORS[1].2, ButtonVariant::Ghost);
	}
}

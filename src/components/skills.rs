use leptos::prelude::*;

use super::ui::Section;
use crate::content::{SKILL_PANELS, SkillPanel};

#[component]
fn SkillPanelCard(panel: &'static SkillPanel) -> impl IntoView {
	view! {
		<div class="card skill-panel">
			<h3>{panel.title}</h3>
			<ul class="logo-grid">
				{panel
					.logos
					.iter()
					.map(|logo| {
						view! {
							<li class="logo-tile" title=logo.name>
								<img src=logo.src alt=logo.name loading="lazy" width="40" height="40" />
								<span>{logo.name}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

#[component]
pub fn Skills() -> impl IntoView {
	view! {
		<Section id="skills">
			<h2 class="section-title">"Skills"</h2>
			<div class="panel-grid">
				{SKILL_PANELS.iter().map(|panel| view! { <SkillPanelCard panel=panel /> }).collect_view()}
			</div>
		</Section>
	}
}

use leptos::prelude::*;

use super::ui::{Badge, Section};
use crate::content::{ALL_CATEGORIES, CATEGORIES, PROJECTS, Project};

/// Projects in `category` (or any, for "All") whose title, blurb or tags contain
/// `query`, case-insensitively. Order is preserved.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str, query: &str) -> Vec<&'a Project> {
	let query = query.trim().to_lowercase();
	projects
		.iter()
		.filter(|p| category == ALL_CATEGORIES || p.categories.iter().any(|c| *c == category))
		.filter(|p| {
			if query.is_empty() {
				return true;
			}
			let haystack = format!(
				"{} {} {}",
				p.title,
				p.blurb.unwrap_or_default(),
				p.tags.join(" ")
			)
			.to_lowercase();
			haystack.contains(&query)
		})
		.collect()
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
	view! {
		<article class="card project-card">
			<a href=project.live target="_blank" rel="noopener noreferrer" class="project-thumb">
				<img src=project.thumb alt=project.title loading="lazy" />
			</a>
			<div class="project-body">
				<h3>{project.title}</h3>
				{project.blurb.map(|blurb| view! { <p class="muted">{blurb}</p> })}
				<div class="badge-row">
					{project.tags.iter().map(|t| view! { <Badge>{*t}</Badge> }).collect_view()}
				</div>
				<div class="project-links">
					<a href=project.live target="_blank" rel="noopener noreferrer">
						"Live ↗"
					</a>
					{project
						.code
						.map(|code| {
							view! {
								<a href=code target="_blank" rel="noopener noreferrer">
									"Code ↗"
								</a>
							}
						})}
				</div>
			</div>
		</article>
	}
}

#[component]
pub fn Projects() -> impl IntoView {
	let (category, set_category) = signal(ALL_CATEGORIES);
	let (query, set_query) = signal(String::new());
	let visible = Memo::new(move |_| {
		query.with(|q| {
			filter_projects(&PROJECTS, category.get(), q)
				.into_iter()
				.copied()
				.collect::<Vec<_>>()
		})
	});

	view! {
		<Section id="projects">
			<h2 class="section-title">"Projects"</h2>
			<div class="project-controls">
				<div class="pill-row" role="tablist">
					{CATEGORIES
						.iter()
						.map(|&c| {
							view! {
								<button
									role="tab"
									class=move || if category.get() == c { "pill active" } else { "pill" }
									aria-selected=move || (category.get() == c).to_string()
									on:click=move |_| set_category.set(c)
								>
									{c}
								</button>
							}
						})
						.collect_view()}
				</div>
				<input
					type="search"
					class="search"
					placeholder="Search title or tech…"
					aria-label="Search projects"
					prop:value=move || query.get()
					on:input=move |ev| set_query.set(event_target_value(&ev))
				/>
			</div>

			<div class="project-grid">
				<For each=move || visible.get() key=|p| p.id children=|project| view! { <ProjectCard project=project /> } />
			</div>
			<Show when=move || visible.with(|v| v.is_empty())>
				<p class="muted empty">"No projects match that filter."</p>
			</Show>
		</Section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(projects: Vec<&Project>) -> Vec<&'static str> {
		projects.into_iter().map(|p| p.id).collect()
	}

	#[test]
	fn all_with_empty_query_keeps_everything_in_order() {
		let all = filter_projects(&PROJECTS, ALL_CATEGORIES, "   ");
		assert_eq!(all.len(), PROJECTS.len());
		assert_eq!(all.first().map(|p| p.id), Some("physim"));
		assert_eq!(all.last().map(|p| p.id), Some("em-field-visualizer"));
	}

	#[test]
	fn category_narrows_results() {
		let apps = ids(filter_projects(&PROJECTS, "App Development", ""));
		assert_eq!(
			apps,
			vec!["mathematical-proofs", "biology-definitions", "polonia-internationalis"]
		);
		let games = ids(filter_projects(&PROJECTS, "Game Development", ""));
		assert_eq!(games, vec!["sudoku-game"]);
	}

	#[test]
	fn query_matches_title_and_tags_case_insensitively() {
		assert_eq!(ids(filter_projects(&PROJECTS, ALL_CATEGORIES, "SUDOKU")), vec!["sudoku-game"]);
		let flask = ids(filter_projects(&PROJECTS, ALL_CATEGORIES, " flask "));
		assert_eq!(flask, vec!["mycyberlab", "evryquiktool"]);
	}

	#[test]
	fn category_and_query_combine() {
		assert!(filter_projects(&PROJECTS, "App Development", "flask").is_empty());
		let landing = ids(filter_projects(&PROJECTS, "Web Design", "construction"));
		assert_eq!(landing, vec!["construction-landing-page"]);
	}

	#[test]
	fn query_also_searches_blurbs() {
		let with_blurb = Project {
			blurb: Some("Rigid-body Physics sandbox"),
			..PROJECTS[0]
		};
		let projects = [with_blurb, PROJECTS[1]];
		assert_eq!(ids(filter_projects(&projects, ALL_CATEGORIES, "sandbox")), vec!["physim"]);
		assert!(filter_projects(&PROJECTS, ALL_CATEGORIES, "sandbox").is_empty());
	}

	#[test]
	fn unknown_category_matches_nothing() {
		assert!(filter_projects(&PROJECTS, "Cooking", "").is_empty());
	}
}

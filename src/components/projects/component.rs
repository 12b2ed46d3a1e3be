use leptos::prelude::*;

use crate::components::icons::{ExternalLinkIcon, FileTextIcon, GithubIcon};

use super::entries::ProjectEntry;

#[component]
fn ProjectCard(entry: ProjectEntry) -> impl IntoView {
	view! {
		<div class="project-card">
			<h3>{entry.title}</h3>
			<div class="project-chips">
				{entry
					.tech
					.iter()
					.map(|tech| view! { <span class="project-chip">{*tech}</span> })
					.collect_view()}
			</div>
			<p class="project-description">{entry.description}</p>
			<div class="project-links">
				{entry
					.github
					.map(|href| {
						view! {
							<a
								class="project-link"
								href=href
								target="_blank"
								rel="noreferrer"
							>
								<GithubIcon />
								"GitHub"
							</a>
						}
					})}
				{entry
					.docs
					.map(|href| {
						view! {
							<a
								class="project-link"
								href=href
								target="_blank"
								rel="noreferrer"
							>
								<FileTextIcon />
								"Docs"
							</a>
						}
					})}
				<a
					class="project-link primary"
					href=entry.read_more
					target="_blank"
					rel="noreferrer"
				>
					"Read More"
					<ExternalLinkIcon />
				</a>
			</div>
		</div>
	}
}

/// Featured work as a card grid. Each card lists its stack as chips and
/// links out to the repository and the writeup.
#[component]
pub fn ProjectsSection(
	#[prop(default = super::entries::projects())] projects: Vec<ProjectEntry>,
) -> impl IntoView {
	view! {
		<div class="projects-grid">
			{projects
				.iter()
				.map(|entry| view! { <ProjectCard entry=*entry /> })
				.collect_view()}
		</div>
	}
}

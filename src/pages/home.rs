use leptos::prelude::*;

use crate::components::certifications::CertificationsSection;
use crate::components::pipeline::PipelineBoard;
use crate::components::projects::ProjectsSection;
use crate::components::skills_network::{SkillCatalog, SkillsNetwork};
use crate::components::terminal::{BootTerminal, FloatingTerminal, ShellIdentity};
use crate::components::timeline::TimelineSection;

/// The single portfolio page.
#[component]
pub fn Home() -> impl IntoView {
	let catalog = SkillCatalog::devops_default();
	let identity = ShellIdentity::portfolio_default();
	let network_catalog = RwSignal::new(catalog.clone());

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

			<FloatingTerminal identity=identity.clone() catalog=catalog.clone() />
			<main class="portfolio">
				<header class="hero">
					<h1>"DevOps Engineer"</h1>
					<p class="subtitle">
						"Automating infrastructure, shipping reliably, keeping systems observable."
					</p>
				</header>

				<section id="about" class="section">
					<h2>"About"</h2>
					<BootTerminal identity=identity catalog=catalog />
				</section>

				<section id="skills" class="section">
					<h2>"Skills"</h2>
					<SkillsNetwork catalog=network_catalog />
				</section>

				<section id="projects" class="section">
					<h2>"Featured Projects"</h2>
					<h3>"Automated CI/CD Pipeline"</h3>
					<PipelineBoard />
					<ProjectsSection />
				</section>

				<section id="timeline" class="section">
					<h2>"Education & Experience"</h2>
					<TimelineSection />
				</section>

				<section id="certifications" class="section">
					<h2>"Certifications & Achievements"</h2>
					<CertificationsSection />
				</section>
			</main>
		</ErrorBoundary>
	}
}

use leptos::prelude::*;

use crate::components::icons::CloseIcon;

use super::entries::TimelineEntry;

#[component]
fn TimelineCard(entry: TimelineEntry, active: RwSignal<Option<&'static str>>) -> impl IntoView {
	let id = entry.id;
	let class = move || {
		if active.get() == Some(id) {
			"timeline-card active"
		} else {
			"timeline-card"
		}
	};

	view! {
		<div class=class on:click=move |_| active.set(Some(id))>
			<h3>{entry.title}</h3>
			<p class="timeline-subtitle">{entry.subtitle}</p>
			<span class="timeline-date">{entry.date}</span>
		</div>
	}
}

/// Education and experience in two columns. A card's detail modal carries
/// the certificate chips and the optional project link.
#[component]
pub fn TimelineSection(
	#[prop(default = super::entries::education())] education: Vec<TimelineEntry>,
	#[prop(default = super::entries::experience())] experience: Vec<TimelineEntry>,
) -> impl IntoView {
	let active = RwSignal::new(None::<&'static str>);
	let lookup: Vec<TimelineEntry> =
		education.iter().chain(experience.iter()).copied().collect();

	view! {
		<div class="timeline">
			<div>
				<h3>"Education"</h3>
				{education
					.iter()
					.map(|entry| view! { <TimelineCard entry=*entry active=active /> })
					.collect_view()}
			</div>
			<div>
				<h3>"Experience"</h3>
				{experience
					.iter()
					.map(|entry| view! { <TimelineCard entry=*entry active=active /> })
					.collect_view()}
			</div>
			{move || {
				active
					.get()
					.and_then(|id| lookup.iter().find(|entry| entry.id == id).copied())
					.map(|entry| {
						view! {
							<div class="timeline-overlay" on:click=move |_| active.set(None)>
								<div
									class="timeline-overlay-panel"
									on:click=|ev| ev.stop_propagation()
								>
									<button
										class="skill-overlay-close"
										on:click=move |_| active.set(None)
									>
										<CloseIcon />
									</button>
									<h2>{entry.title}</h2>
									<p class="timeline-subtitle">{entry.subtitle}</p>
									<span class="timeline-date">{entry.date}</span>
									<p>{entry.description}</p>
									{(!entry.certificates.is_empty())
										.then(|| {
											view! {
												<h4>"Certificates"</h4>
												<div class="timeline-chips">
													{entry
														.certificates
														.iter()
														.map(|cert| {
															view! {
																<span class="timeline-chip">
																	{*cert}
																</span>
															}
														})
														.collect_view()}
												</div>
											}
										})}
									{entry
										.link
										.map(|href| {
											view! {
												<a
													class="timeline-overlay-link"
													href=href
													target="_blank"
													rel="noreferrer"
												>
													"View Project"
												</a>
											}
										})}
								</div>
							</div>
						}
					})
			}}
		</div>
	}
}

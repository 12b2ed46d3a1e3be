use leptos::prelude::*;

use crate::components::icons::{AwardIcon, StarIcon, TrophyIcon};

use super::entries::{AchievementEntry, CertificationEntry};

#[component]
fn CertificationCard(entry: CertificationEntry) -> impl IntoView {
	view! {
		<div class="certification-card">
			<div class="certification-badge">
				<AwardIcon />
			</div>
			<h4>{entry.name}</h4>
			<p class="certification-issuer">{entry.issuer}</p>
			<span class="certification-date">{entry.date}</span>
			{entry
				.credential_id
				.map(|id| view! { <p class="certification-id">"ID: " {id}</p> })}
		</div>
	}
}

#[component]
fn AchievementCard(entry: AchievementEntry) -> impl IntoView {
	view! {
		<div class="achievement-card">
			<div class="achievement-icon">{entry.icon.render()}</div>
			<h4>{entry.title}</h4>
			<p>{entry.description}</p>
			{entry
				.date
				.map(|date| view! { <span class="achievement-date">{date}</span> })}
		</div>
	}
}

/// Credentials and community highlights in two card grids.
#[component]
pub fn CertificationsSection(
	#[prop(default = super::entries::certifications())] certifications: Vec<CertificationEntry>,
	#[prop(default = super::entries::achievements())] achievements: Vec<AchievementEntry>,
) -> impl IntoView {
	view! {
		<div class="certifications-heading">
			<TrophyIcon />
			<h3>"Certifications"</h3>
		</div>
		<div class="certifications-grid">
			{certifications
				.iter()
				.map(|entry| view! { <CertificationCard entry=*entry /> })
				.collect_view()}
		</div>
		<div class="certifications-heading">
			<StarIcon />
			<h3>"Achievements"</h3>
		</div>
		<div class="achievements-grid">
			{achievements
				.iter()
				.map(|entry| view! { <AchievementCard entry=*entry /> })
				.collect_view()}
		</div>
	}
}

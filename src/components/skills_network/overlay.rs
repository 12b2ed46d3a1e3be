use leptos::prelude::*;

use crate::components::icons::CloseIcon;

use super::catalog::SkillCatalog;

/// Modal detail view for the selected skill. Clicking the backdrop or the
/// close button clears the selection; clicks inside the panel stay inside.
#[component]
pub fn SkillDetailOverlay(
	#[prop(into)] catalog: Signal<SkillCatalog>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	move || {
		selected
			.get()
			.and_then(|id| catalog.with(|c| c.get(&id).cloned()))
			.map(|node| {
				let badge = format!("background-color: {}20", node.color);
				let tint = format!("color: {}", node.color);
				let bar = format!(
					"width: {}%; background-color: {}",
					node.proficiency, node.color,
				);
				let related: Vec<_> = node
					.related
					.iter()
					.filter_map(|rel| catalog.with(|c| c.get(rel).map(|n| n.name.clone())))
					.collect();
				view! {
					<div class="skill-overlay" on:click=move |_| selected.set(None)>
						<div class="skill-overlay-panel" on:click=|ev| ev.stop_propagation()>
							<button
								class="skill-overlay-close"
								on:click=move |_| selected.set(None)
							>
								<CloseIcon />
							</button>
							<div class="skill-overlay-header">
								<div class="skill-node-icon" style=badge>
									<span style=tint>{node.icon.render()}</span>
								</div>
								<div>
									<h2>{node.name.clone()}</h2>
									<p>{node.category.clone()}</p>
								</div>
							</div>
							<div class="skill-overlay-proficiency">
								<div class="skill-overlay-proficiency-label">
									<span>"Proficiency"</span>
									<span>{node.proficiency}"%"</span>
								</div>
								<div class="skill-overlay-meter">
									<div class="skill-overlay-meter-fill" style=bar></div>
								</div>
							</div>
							<p class="skill-overlay-description">{node.description.clone()}</p>
							<Show when={
								let has_related = !related.is_empty();
								move || has_related
							}>
								<div class="skill-overlay-related">
									<h4>"Related skills"</h4>
									<div class="skill-overlay-chips">
										{related
											.iter()
											.map(|name| {
												view! {
													<span class="skill-overlay-chip">
														{name.clone()}
													</span>
												}
											})
											.collect_view()}
									</div>
								</div>
							</Show>
						</div>
					</div>
				}
			})
	}
}

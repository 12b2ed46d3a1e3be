use leptos::prelude::*;

use super::graph::HoverState;
use super::types::{Point, SkillNode};

/// A single positioned skill in the network view. The card is absolutely
/// positioned by the layout signal; hovering feeds the shared hover state
/// so the link layer can light up the connected edges.
#[component]
pub fn SkillNodeCard(
	node: SkillNode,
	#[prop(into)] position: Signal<Option<Point>>,
	hovered: RwSignal<HoverState>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let SkillNode { id, name, category, proficiency, color, icon, .. } = node;

	let style = move || match position.get() {
		Some(point) => format!("transform: translate({}px, {}px)", point.x, point.y),
		None => "display: none".to_string(),
	};
	let glow = format!(
		"background-color: {}; filter: blur(8px) brightness({})",
		color,
		proficiency as f64 / 100.0,
	);
	let badge = format!("background-color: {color}20");
	let tint = format!("color: {color}");

	let enter_id = id.clone();
	let leave_id = id.clone();
	let click_id = id.clone();
	let card_id = id.clone();
	let class = move || {
		if hovered.with(|hover| hover.is_hovered(&card_id)) {
			"skill-node hovered"
		} else {
			"skill-node"
		}
	};

	view! {
		<div
			class=class
			style=style
			on:mouseenter=move |_| hovered.update(|hover| hover.enter(&enter_id))
			on:mouseleave=move |_| hovered.update(|hover| hover.leave(&leave_id))
			on:click=move |_| selected.set(Some(click_id.clone()))
		>
			<div class="skill-node-glow" style=glow></div>
			<div class="skill-node-card">
				<div class="skill-node-icon" style=badge>
					<span style=tint>{icon.render()}</span>
				</div>
				<div>
					<h3>{name}</h3>
					<p>{category}</p>
				</div>
			</div>
		</div>
	}
}

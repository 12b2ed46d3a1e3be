use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::carousel::SkillCarousel;
use super::catalog::SkillCatalog;
use super::graph::{HoverState, SkillGraph};
use super::layout::{LayoutSpec, is_narrow};
use super::node::SkillNodeCard;
use super::overlay::SkillDetailOverlay;
use super::types::Viewport;

fn window_viewport() -> Viewport {
	let window: Window = web_sys::window().unwrap();
	Viewport {
		width: window.inner_width().unwrap().as_f64().unwrap(),
		height: window.inner_height().unwrap().as_f64().unwrap(),
	}
}

/// Interactive map of the skill catalog. Wide viewports get the radial
/// network with hover-lit links; narrow ones fall back to the carousel.
/// Both share the selection signal, so the detail overlay works in either.
#[component]
pub fn SkillsNetwork(
	#[prop(into)] catalog: Signal<SkillCatalog>,
	#[prop(default = LayoutSpec::devops_default())] layout: LayoutSpec,
) -> impl IntoView {
	let viewport = RwSignal::new(window_viewport());
	let hovered = RwSignal::new(HoverState::default());
	let selected = RwSignal::new(None::<String>);

	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	Effect::new(move |_| {
		let window: Window = web_sys::window().unwrap();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			viewport.set(window_viewport());
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	let graph = Memo::new(move |_| SkillGraph::new(&catalog.get()));
	let positions = Memo::new(move |_| layout.positions(&catalog.get(), viewport.get()));
	let narrow = Memo::new(move |_| is_narrow(viewport.get()));

	Effect::new(move |_| {
		debug!(
			"layout mode: {}",
			if narrow.get() { "carousel" } else { "network" }
		);
	});

	view! {
		<section class="skills-network">
			<Show
				when=move || !narrow.get()
				fallback=move || {
					view! { <SkillCarousel catalog=catalog selected=selected /> }
				}
			>
				<div class="skills-network-stage">
					<div class="skills-network-hub">
						<div class="skills-network-hub-core">
							<h3 class="skills-network-hub-title">"DevOps"</h3>
							<p class="skills-network-hub-subtitle">"Skills Network"</p>
						</div>
					</div>
					<svg class="skills-network-links">
						{move || {
							let map = positions.get();
							graph
								.get()
								.edges()
								.iter()
								.map(|edge| {
									let endpoints =
										(map.get(&edge.source), map.get(&edge.target));
									match endpoints {
										(Some(&from), Some(&to)) => {
											let edge = edge.clone();
											let active = move || {
												let lit = hovered.with(|hover| {
													hover
														.hovered()
														.is_some_and(|id| edge.touches(id))
												});
												if lit {
													"skill-link active"
												} else {
													"skill-link"
												}
											};
											view! {
												<line
													x1=from.x.to_string()
													y1=from.y.to_string()
													x2=to.x.to_string()
													y2=to.y.to_string()
													class=active
												/>
											}
											.into_any()
										}
										_ => view! { <g></g> }.into_any(),
									}
								})
								.collect_view()
						}}
					</svg>
					{move || {
						catalog
							.get()
							.nodes()
							.iter()
							.map(|node| {
								let id = node.id.clone();
								let position = Signal::derive(move || {
									positions.get().get(&id).copied()
								});
								view! {
									<SkillNodeCard
										node=node.clone()
										position=position
										hovered=hovered
										selected=selected
									/>
								}
							})
							.collect_view()
					}}
				</div>
			</Show>
			<SkillDetailOverlay catalog=catalog selected=selected />
		</section>
	}
}

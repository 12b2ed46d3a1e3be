use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::stages::{PipelineClock, PipelineStage, devops_stages};

const FRAME_MS: f64 = 16.0;

/// Looping walkthrough of the delivery pipeline. The rail marks each stage
/// done / current / pending while the log panel replays the current stage's
/// output.
#[component]
pub fn PipelineBoard(
	#[prop(default = devops_stages())] stages: Vec<PipelineStage>,
) -> impl IntoView {
	let current = RwSignal::new(0usize);

	let clock = Rc::new(RefCell::new(PipelineClock::new()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let tick_stages = stages.clone();
	Effect::new(move |_| {
		let (clock_tick, animate_inner) = (clock.clone(), animate.clone());
		let stages = tick_stages.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			{
				let mut clock = clock_tick.borrow_mut();
				if clock.tick(FRAME_MS, &stages) {
					current.set(clock.stage());
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let log_stages = stages.clone();
	view! {
		<div class="pipeline-stages">
			{stages
				.iter()
				.enumerate()
				.map(|(i, stage)| {
					let state = move || {
						let now = current.get();
						if i < now {
							"pipeline-stage done"
						} else if i == now {
							"pipeline-stage current"
						} else {
							"pipeline-stage"
						}
					};
					view! {
						<div class=state>
							<div class="pipeline-stage-icon">{stage.icon.render()}</div>
							<span>{stage.title}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
		<div class="pipeline-log">
			{move || {
				log_stages
					.get(current.get())
					.copied()
					.map(|stage| {
						view! {
							<h4>{stage.title}</h4>
							<pre class="terminal-output">{stage.logs.join("\n")}</pre>
						}
					})
			}}
		</div>
	}
}

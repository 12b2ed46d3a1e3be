use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::SubmitEvent;

use crate::components::icons::{
	CloseIcon, MaximizeIcon, MinimizeIcon, PromptIcon, TerminalIcon,
};
use crate::components::skills_network::SkillCatalog;

use super::shell::{ScriptPlayer, Shell, ShellIdentity, ShellOutcome, boot_script};

const FRAME_MS: f64 = 16.0;

#[derive(Clone)]
struct HistoryEntry {
	command: String,
	output: String,
	stamp: String,
}

fn clock_stamp() -> String {
	js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

/// Read-only terminal that autoplays the boot script, pacing each entry by
/// its delay on the animation-frame clock.
#[component]
pub fn BootTerminal(identity: ShellIdentity, catalog: SkillCatalog) -> impl IntoView {
	let script = boot_script(&identity, &catalog);
	let revealed = RwSignal::new(0usize);

	let player = Rc::new(RefCell::new(ScriptPlayer::new(script.clone())));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	Effect::new(move |_| {
		let (player_tick, animate_inner) = (player.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let done = {
				let mut player = player_tick.borrow_mut();
				if player.tick(FRAME_MS) {
					revealed.set(player.revealed());
				}
				player.done()
			};
			if done {
				return;
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

	view! {
		<div class="terminal">
			<div class="terminal-titlebar">
				<div class="terminal-lights">
					<span class="dot red"></span>
					<span class="dot yellow"></span>
					<span class="dot green"></span>
				</div>
			</div>
			{move || {
				script
					.iter()
					.take(revealed.get())
					.map(|entry| {
						view! {
							<div>
								<div class="terminal-command">
									<span class="terminal-prompt">"➜"</span>
									" ~ $ "
									{entry.command.clone()}
								</div>
								<pre class="terminal-output">{entry.output.join("\n")}</pre>
							</div>
						}
					})
					.collect_view()
			}}
			<div class="terminal-command">
				<span class="terminal-prompt">"➜"</span>
				" ~ $ "
				<span class="terminal-cursor">"_"</span>
			</div>
		</div>
	}
}

#[component]
pub fn FloatingTerminal(identity: ShellIdentity, catalog: SkillCatalog) -> impl IntoView {
	let title = format!("{}@{}", identity.user, identity.host);
	// StoredValue keeps the shell reachable from Copy event handlers.
	let shell = StoredValue::new(Shell::new(identity, &catalog));

	let open = RwSignal::new(false);
	let minimized = RwSignal::new(false);
	let history = RwSignal::new(Vec::<HistoryEntry>::new());
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let body_ref = NodeRef::<leptos::html::Div>::new();

	// Keep the latest entry in view.
	Effect::new(move |_| {
		history.track();
		if let Some(body) = body_ref.get() {
			body.set_scroll_top(body.scroll_height());
		}
	});
	Effect::new(move |_| {
		if open.get() && !minimized.get() {
			if let Some(input) = input_ref.get() {
				let _ = input.focus();
			}
		}
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(input) = input_ref.get() else {
			return;
		};
		let raw = input.value();
		if raw.trim().is_empty() {
			return;
		}
		match shell.with_value(|shell| shell.run(&raw)) {
			ShellOutcome::Output(output) => history.update(|entries| {
				entries.push(HistoryEntry {
					command: raw.trim().to_string(),
					output,
					stamp: clock_stamp(),
				});
			}),
			ShellOutcome::Clear => history.update(Vec::clear),
			ShellOutcome::Exit => {
				open.set(false);
				minimized.set(false);
			}
		}
		input.set_value("");
	};

	view! {
		<button class="terminal-toggle" on:click=move |_| open.update(|open| *open = !*open)>
			<TerminalIcon />
		</button>
		<Show when=move || open.get()>
			<div class="floating-terminal">
				<div class="terminal-titlebar">
					<div class="terminal-lights">
						<span class="dot red"></span>
						<span class="dot yellow"></span>
						<span class="dot green"></span>
					</div>
					<span class="terminal-title">{title.clone()}</span>
					<div class="terminal-controls">
						<button on:click=move |_| minimized.update(|min| *min = !*min)>
							{move || {
								if minimized.get() {
									view! { <MaximizeIcon /> }.into_any()
								} else {
									view! { <MinimizeIcon /> }.into_any()
								}
							}}
						</button>
						<button on:click=move |_| open.set(false)>
							<CloseIcon />
						</button>
					</div>
				</div>
				<Show when=move || !minimized.get()>
					<div class="terminal-body" node_ref=body_ref>
						{move || {
							history
								.get()
								.iter()
								.map(|entry| {
									view! {
										<div>
											<div class="terminal-command">
												<span class="terminal-prompt">
													<PromptIcon />
												</span>
												{entry.command.clone()}
												<span class="terminal-stamp">
													{entry.stamp.clone()}
												</span>
											</div>
											<pre class="terminal-output">
												{entry.output.clone()}
											</pre>
										</div>
									}
								})
								.collect_view()
						}}
						<form class="terminal-promptline" on:submit=on_submit>
							<PromptIcon />
							<input
								type="text"
								node_ref=input_ref
								placeholder="Type a command..."
								autocomplete="off"
								spellcheck="false"
							/>
						</form>
					</div>
				</Show>
			</div>
		</Show>
	}
}

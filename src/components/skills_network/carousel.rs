use leptos::prelude::*;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};

use super::catalog::SkillCatalog;

/// Position within the carousel. Both directions wrap around, and the index
/// is re-clamped against the live catalog length on every read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselCursor {
	index: usize,
}

impl CarouselCursor {
	pub fn index(&self, len: usize) -> usize {
		if len == 0 { 0 } else { self.index % len }
	}

	pub fn advance(&mut self, len: usize) {
		if len == 0 {
			return;
		}
		let current = self.index % len;
		self.index = if current < len - 1 { current + 1 } else { 0 };
	}

	pub fn retreat(&mut self, len: usize) {
		if len == 0 {
			return;
		}
		let current = self.index % len;
		self.index = if current > 0 { current - 1 } else { len - 1 };
	}
}

/// One-card-at-a-time fallback for narrow viewports. Shows the same catalog
/// the network view does; tapping the card opens the detail overlay.
#[component]
pub fn SkillCarousel(
	#[prop(into)] catalog: Signal<SkillCatalog>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let cursor = RwSignal::new(CarouselCursor::default());
	let current = Memo::new(move |_| {
		catalog.with(|c| c.nodes().get(cursor.get().index(c.len())).cloned())
	});

	let prev = move |_| {
		let len = catalog.with(|c| c.len());
		cursor.update(|cur| cur.retreat(len));
	};
	let next = move |_| {
		let len = catalog.with(|c| c.len());
		cursor.update(|cur| cur.advance(len));
	};

	view! {
		<div class="skills-carousel">
			{move || {
				current
					.get()
					.map(|node| {
						let id = node.id.clone();
						let badge = format!("background-color: {}20", node.color);
						let tint = format!("color: {}", node.color);
						let bar = format!(
							"width: {}%; background-color: {}",
							node.proficiency, node.color,
						);
						view! {
							<div
								class="skills-carousel-card"
								on:click=move |_| selected.set(Some(id.clone()))
							>
								<div class="skills-carousel-card-header">
									<div class="skill-node-icon" style=badge>
										<span style=tint>{node.icon.render()}</span>
									</div>
									<div>
										<h3>{node.name.clone()}</h3>
										<p>{node.category.clone()}</p>
									</div>
								</div>
								<div class="skills-carousel-meter">
									<div class="skills-carousel-meter-fill" style=bar></div>
								</div>
								<p>{node.description.clone()}</p>
							</div>
						}
					})
			}}
			<Show when=move || catalog.with(|c| !c.is_empty())>
				<button class="skills-carousel-nav prev" on:click=prev>
					<ChevronLeftIcon />
				</button>
				<button class="skills-carousel-nav next" on:click=next>
					<ChevronRightIcon />
				</button>
			</Show>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn advance_wraps_at_the_end() {
		let mut cursor = CarouselCursor::default();
		for expected in [1, 2, 0, 1] {
			cursor.advance(3);
			assert_eq!(cursor.index(3), expected);
		}
	}

	#[test]
	fn retreat_wraps_at_the_start() {
		let mut cursor = CarouselCursor::default();
		cursor.retreat(3);
		assert_eq!(cursor.index(3), 2);
		cursor.retreat(3);
		assert_eq!(cursor.index(3), 1);
	}

	#[test]
	fn index_clamps_against_a_shrunken_catalog() {
		let mut cursor = CarouselCursor::default();
		for _ in 0..5 {
			cursor.advance(6);
		}
		assert_eq!(cursor.index(6), 5);
		assert_eq!(cursor.index(3), 2);
	}

	#[test]
	fn empty_catalog_is_inert() {
		let mut cursor = CarouselCursor::default();
		cursor.advance(0);
		cursor.retreat(0);
		assert_eq!(cursor.index(0), 0);
	}
}

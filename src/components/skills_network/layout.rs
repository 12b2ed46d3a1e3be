use std::collections::HashMap;
use std::f64::consts::PI;

use super::catalog::SkillCatalog;
use super::types::{Point, Viewport};

/// Below this width the section renders as a carousel instead of the graph.
pub const NARROW_BREAKPOINT: f64 = 768.0;

pub fn is_narrow(viewport: Viewport) -> bool {
	viewport.width < NARROW_BREAKPOINT
}

/// Radial placement parameters for the network view.
///
/// `overrides` holds per-id offsets applied after the circle is laid out,
/// for entries that need a manual nudge to balance against the hub. Matches
/// are by exact id only.
#[derive(Clone, Debug)]
pub struct LayoutSpec {
	pub radius: f64,
	pub center_shift: (f64, f64),
	pub overrides: HashMap<String, (f64, f64)>,
}

impl LayoutSpec {
	/// The placement the shipped catalog uses.
	pub fn devops_default() -> Self {
		let mut overrides = HashMap::new();
		overrides.insert("grafana".into(), (0.0, 50.0));
		overrides.insert("kubernetes".into(), (0.0, -50.0));
		overrides.insert("prometheus".into(), (0.0, -50.0));
		Self {
			radius: 350.0,
			center_shift: (-300.0, -150.0),
			overrides,
		}
	}

	pub fn center(&self, viewport: Viewport) -> Point {
		Point {
			x: viewport.width / 2.0 + self.center_shift.0,
			y: viewport.height / 2.0 + self.center_shift.1,
		}
	}

	/// Places every catalog entry on a circle around the center, in catalog
	/// order, then applies per-id overrides. Pure; recomputed on each resize.
	pub fn positions(&self, catalog: &SkillCatalog, viewport: Viewport) -> HashMap<String, Point> {
		let center = self.center(viewport);
		let count = catalog.len();
		let mut positions = HashMap::with_capacity(count);
		for (i, node) in catalog.nodes().iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count as f64;
			let mut point = Point {
				x: center.x + self.radius * angle.cos(),
				y: center.y + self.radius * angle.sin(),
			};
			if let Some(&(dx, dy)) = self.overrides.get(&node.id) {
				point.x += dx;
				point.y += dy;
			}
			positions.insert(node.id.clone(), point);
		}
		positions
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::icons::Glyph;
	use crate::components::skills_network::types::SkillNode;

	const EPS: f64 = 1e-9;

	fn ring(n: usize) -> SkillCatalog {
		let nodes = (0..n)
			.map(|i| SkillNode {
				id: format!("s{i}"),
				name: format!("Skill {i}"),
				category: "Tools".into(),
				proficiency: 50,
				description: String::new(),
				related: Vec::new(),
				color: "#FFFFFF".into(),
				icon: Glyph::Boxes,
			})
			.collect();
		SkillCatalog::new(nodes).unwrap()
	}

	fn bare_spec() -> LayoutSpec {
		LayoutSpec {
			radius: 350.0,
			center_shift: (-300.0, -150.0),
			overrides: HashMap::new(),
		}
	}

	fn viewport() -> Viewport {
		Viewport {
			width: 1920.0,
			height: 1080.0,
		}
	}

	#[test]
	fn empty_catalog_yields_empty_map() {
		let positions = bare_spec().positions(&ring(0), viewport());
		assert!(positions.is_empty());
	}

	#[test]
	fn single_node_sits_right_of_center() {
		let spec = bare_spec();
		let center = spec.center(viewport());
		let positions = spec.positions(&ring(1), viewport());
		let p = positions["s0"];
		assert_eq!(p.x, center.x + spec.radius);
		assert_eq!(p.y, center.y);
	}

	#[test]
	fn nodes_are_evenly_spaced_on_the_circle() {
		let n = 8;
		let spec = bare_spec();
		let center = spec.center(viewport());
		let positions = spec.positions(&ring(n), viewport());
		assert_eq!(positions.len(), n);

		for i in 0..n {
			let p = positions[&format!("s{i}")];
			let (dx, dy) = (p.x - center.x, p.y - center.y);
			assert!(((dx * dx + dy * dy).sqrt() - spec.radius).abs() < EPS);

			let mut angle = dy.atan2(dx);
			if angle < 0.0 {
				angle += 2.0 * PI;
			}
			let expected = (i as f64) * 2.0 * PI / n as f64;
			assert!((angle - expected).abs() < EPS, "node {i} off its angle");
		}
	}

	#[test]
	fn overrides_shift_matching_ids_only() {
		let base = bare_spec().positions(&ring(3), viewport());

		let mut spec = bare_spec();
		spec.overrides.insert("s1".into(), (10.0, -25.0));
		spec.overrides.insert("ghost".into(), (99.0, 99.0));
		let shifted = spec.positions(&ring(3), viewport());

		assert_eq!(shifted["s0"], base["s0"]);
		assert_eq!(shifted["s2"], base["s2"]);
		assert!((shifted["s1"].x - base["s1"].x - 10.0).abs() < EPS);
		assert!((shifted["s1"].y - base["s1"].y + 25.0).abs() < EPS);
	}

	#[test]
	fn shipped_overrides_reproduce_the_manual_nudges() {
		let catalog = SkillCatalog::devops_default();
		let base = bare_spec().positions(&catalog, viewport());
		let tuned = LayoutSpec::devops_default().positions(&catalog, viewport());

		assert!((tuned["grafana"].y - base["grafana"].y - 50.0).abs() < EPS);
		assert!((tuned["kubernetes"].y - base["kubernetes"].y + 50.0).abs() < EPS);
		assert!((tuned["prometheus"].y - base["prometheus"].y + 50.0).abs() < EPS);
		assert_eq!(tuned["terraform"], base["terraform"]);
	}

	#[test]
	fn narrow_switch_uses_the_breakpoint() {
		assert!(is_narrow(Viewport {
			width: 767.9,
			height: 800.0
		}));
		assert!(!is_narrow(Viewport {
			width: 768.0,
			height: 800.0
		}));
	}
}

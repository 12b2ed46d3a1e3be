use std::collections::HashSet;

use super::catalog::SkillCatalog;

/// An undirected connection between two catalog entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillEdge {
	pub source: String,
	pub target: String,
}

impl SkillEdge {
	/// An edge lights up when the hovered id is either endpoint.
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}
}

/// Edge list derived from the catalog's `related` declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillGraph {
	edges: Vec<SkillEdge>,
}

impl SkillGraph {
	/// Walks the catalog in order and emits one edge per resolvable related
	/// pair. Ids that are not in the catalog are skipped. Reciprocal
	/// declarations collapse into a single edge, keyed by catalog index, so
	/// a mutual pair is drawn exactly once and output order is deterministic.
	pub fn new(catalog: &SkillCatalog) -> Self {
		let mut seen = HashSet::new();
		let mut edges = Vec::new();
		for (i, node) in catalog.nodes().iter().enumerate() {
			for related in &node.related {
				let Some(j) = catalog.index_of(related) else {
					continue;
				};
				if j == i {
					continue;
				}
				if seen.insert((i.min(j), i.max(j))) {
					edges.push(SkillEdge {
						source: node.id.clone(),
						target: related.clone(),
					});
				}
			}
		}
		Self { edges }
	}

	pub fn edges(&self) -> &[SkillEdge] {
		&self.edges
	}
}

/// Pointer focus for the network view. At most one node is hovered at a
/// time; entering a node always replaces the previous hover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
	hovered: Option<String>,
}

impl HoverState {
	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}

	pub fn enter(&mut self, id: &str) {
		self.hovered = Some(id.to_string());
	}

	/// Clears the hover only while `id` still owns it. A fast swipe onto a
	/// neighbour fires the neighbour's enter before the old node's leave,
	/// and the newer hover must survive that stale leave.
	pub fn leave(&mut self, id: &str) {
		if self.is_hovered(id) {
			self.hovered = None;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::icons::Glyph;
	use crate::components::skills_network::types::SkillNode;

	fn node(id: &str, related: &[&str]) -> SkillNode {
		SkillNode {
			id: id.into(),
			name: id.to_uppercase(),
			category: "Tools".into(),
			proficiency: 50,
			description: String::new(),
			related: related.iter().map(|s| s.to_string()).collect(),
			color: "#FFFFFF".into(),
			icon: Glyph::Boxes,
		}
	}

	fn catalog(nodes: Vec<SkillNode>) -> SkillCatalog {
		SkillCatalog::new(nodes).unwrap()
	}

	#[test]
	fn dangling_related_ids_produce_no_edges() {
		let graph = SkillGraph::new(&catalog(vec![
			node("a", &["ghost", "phantom"]),
			node("b", &[]),
		]));
		assert!(graph.edges().is_empty());
	}

	#[test]
	fn mutual_declarations_collapse_to_one_edge() {
		let graph = SkillGraph::new(&catalog(vec![node("a", &["b"]), node("b", &["a"])]));
		assert_eq!(graph.edges().len(), 1);
		assert_eq!(
			graph.edges()[0],
			SkillEdge {
				source: "a".into(),
				target: "b".into()
			}
		);
	}

	#[test]
	fn self_references_are_ignored() {
		let graph = SkillGraph::new(&catalog(vec![node("a", &["a", "b"]), node("b", &[])]));
		assert_eq!(graph.edges().len(), 1);
	}

	#[test]
	fn shipped_catalog_resolves_to_nine_edges() {
		let graph = SkillGraph::new(&SkillCatalog::devops_default());
		assert_eq!(graph.edges().len(), 9);
		// Catalog order makes the first resolvable pair terraform -> aws.
		assert_eq!(graph.edges()[0].source, "terraform");
		assert_eq!(graph.edges()[0].target, "aws");

		let between_monitoring = graph
			.edges()
			.iter()
			.filter(|e| e.touches("prometheus") && e.touches("grafana"))
			.count();
		assert_eq!(between_monitoring, 1);
	}

	#[test]
	fn touches_matches_either_endpoint() {
		let edge = SkillEdge {
			source: "a".into(),
			target: "b".into(),
		};
		assert!(edge.touches("a"));
		assert!(edge.touches("b"));
		assert!(!edge.touches("c"));
	}

	#[test]
	fn hover_enter_replaces_the_previous_id() {
		let mut hover = HoverState::default();
		hover.enter("a");
		assert!(hover.is_hovered("a"));
		hover.enter("b");
		assert!(hover.is_hovered("b"));
		assert!(!hover.is_hovered("a"));
	}

	#[test]
	fn stale_leave_keeps_the_newer_hover() {
		let mut hover = HoverState::default();
		hover.enter("x");
		hover.enter("y");
		hover.leave("x");
		assert_eq!(hover.hovered(), Some("y"));
		hover.leave("y");
		assert_eq!(hover.hovered(), None);
	}

	#[test]
	fn edges_light_from_the_hovered_endpoint() {
		let graph = SkillGraph::new(&catalog(vec![
			node("a", &["b"]),
			node("b", &["c"]),
			node("c", &[]),
		]));
		let mut hover = HoverState::default();
		hover.enter("b");
		let lit = graph
			.edges()
			.iter()
			.filter(|edge| hover.hovered().is_some_and(|id| edge.touches(id)))
			.count();
		assert_eq!(lit, 2);
	}
}

use std::collections::HashMap;

use log::warn;
use thiserror::Error;

use crate::components::icons::Glyph;

use super::types::SkillNode;

/// Rejection reasons for catalog construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	#[error("duplicate skill id `{0}`")]
	DuplicateId(String),
	#[error("proficiency {1} out of range for skill `{0}`")]
	ProficiencyOutOfRange(String, u8),
}

/// Immutable, validated skill registry.
///
/// Iteration order is construction order; it drives both the radial layout
/// angles and the carousel sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillCatalog {
	nodes: Vec<SkillNode>,
	index: HashMap<String, usize>,
}

impl SkillCatalog {
	/// Builds a catalog, rejecting duplicate ids and out-of-range proficiency.
	pub fn new(nodes: Vec<SkillNode>) -> Result<Self, CatalogError> {
		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if node.proficiency > 100 {
				return Err(CatalogError::ProficiencyOutOfRange(
					node.id.clone(),
					node.proficiency,
				));
			}
			if index.insert(node.id.clone(), i).is_some() {
				return Err(CatalogError::DuplicateId(node.id.clone()));
			}
		}
		Ok(Self { nodes, index })
	}

	/// The catalog the site ships. Falls back to an empty catalog if the
	/// built-in data ever fails validation, so the page still renders.
	pub fn devops_default() -> Self {
		match Self::new(devops_nodes()) {
			Ok(catalog) => catalog,
			Err(err) => {
				warn!("default skill catalog rejected: {err}");
				Self::default()
			}
		}
	}

	pub fn get(&self, id: &str) -> Option<&SkillNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn nodes(&self) -> &[SkillNode] {
		&self.nodes
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Groups skill names by category, preserving first-seen category order.
	pub fn by_category(&self) -> Vec<(String, Vec<String>)> {
		let mut groups: Vec<(String, Vec<String>)> = Vec::new();
		for node in &self.nodes {
			match groups.iter_mut().find(|(category, _)| category == &node.category) {
				Some((_, names)) => names.push(node.name.clone()),
				None => groups.push((node.category.clone(), vec![node.name.clone()])),
			}
		}
		groups
	}
}

fn devops_nodes() -> Vec<SkillNode> {
	let skill = |id: &str,
	             name: &str,
	             category: &str,
	             proficiency: u8,
	             icon: Glyph,
	             color: &str,
	             description: &str,
	             related: &[&str]| SkillNode {
		id: id.into(),
		name: name.into(),
		category: category.into(),
		proficiency,
		icon,
		color: color.into(),
		description: description.into(),
		related: related.iter().map(|s| s.to_string()).collect(),
	};

	vec![
		skill(
			"terraform",
			"Terraform",
			"Infrastructure",
			95,
			Glyph::Boxes,
			"#7B42F6",
			"Infrastructure as Code (IaC) tool for building, changing, and versioning cloud and on-premises resources safely and efficiently.",
			&["aws", "azure", "gcp", "kubernetes"],
		),
		skill(
			"kubernetes",
			"Kubernetes",
			"Container",
			90,
			Glyph::Layers,
			"#3B82F6",
			"Container orchestration platform for automating deployment, scaling, and management of containerized applications.",
			&["docker", "helm", "prometheus", "grafana"],
		),
		skill(
			"jenkins",
			"Jenkins",
			"CI/CD",
			88,
			Glyph::GitCommit,
			"#EC4899",
			"Open-source automation server for building, deploying, and automating any project.",
			&["docker", "git", "sonarqube", "nexus"],
		),
		skill(
			"prometheus",
			"Prometheus",
			"Monitoring",
			92,
			Glyph::Activity,
			"#10B981",
			"Systems and service monitoring toolkit for collecting and querying metrics as time series data.",
			&["grafana", "alertmanager", "kubernetes"],
		),
		skill(
			"aws",
			"AWS",
			"Cloud",
			95,
			Glyph::Cloud,
			"#F59E0B",
			"Comprehensive cloud computing platform offering over 200 fully featured services from data centers globally.",
			&["terraform", "ecs", "lambda", "cloudwatch"],
		),
		skill(
			"docker",
			"Docker",
			"Container",
			90,
			Glyph::Boxes,
			"#3B82F6",
			"Platform for developing, shipping, and running applications in containers.",
			&["kubernetes", "jenkins", "gitlab"],
		),
		skill(
			"grafana",
			"Grafana",
			"Monitoring",
			85,
			Glyph::LineChart,
			"#F43F5E",
			"Open-source analytics and visualization platform for metrics, logs, and traces.",
			&["prometheus", "elasticsearch", "influxdb"],
		),
		skill(
			"gitlab-ci",
			"GitLab CI",
			"CI/CD",
			88,
			Glyph::GitBranch,
			"#8B5CF6",
			"Continuous Integration/Continuous Deployment platform integrated with GitLab.",
			&["docker", "kubernetes", "helm"],
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plain(id: &str, proficiency: u8) -> SkillNode {
		SkillNode {
			id: id.into(),
			name: id.to_uppercase(),
			category: "Tools".into(),
			proficiency,
			description: String::new(),
			related: Vec::new(),
			color: "#FFFFFF".into(),
			icon: Glyph::Boxes,
		}
	}

	#[test]
	fn default_catalog_validates() {
		let catalog = SkillCatalog::devops_default();
		assert_eq!(catalog.len(), 8);
		assert_eq!(catalog.nodes()[0].id, "terraform");
		assert_eq!(catalog.nodes()[7].id, "gitlab-ci");
	}

	#[test]
	fn rejects_duplicate_ids() {
		let err = SkillCatalog::new(vec![plain("a", 10), plain("a", 20)]).unwrap_err();
		assert_eq!(err, CatalogError::DuplicateId("a".into()));
	}

	#[test]
	fn rejects_out_of_range_proficiency() {
		let err = SkillCatalog::new(vec![plain("a", 101)]).unwrap_err();
		assert_eq!(err, CatalogError::ProficiencyOutOfRange("a".into(), 101));
	}

	#[test]
	fn lookup_is_optional() {
		let catalog = SkillCatalog::new(vec![plain("a", 10)]).unwrap();
		assert!(catalog.get("a").is_some());
		assert!(catalog.get("missing").is_none());
		assert_eq!(catalog.index_of("a"), Some(0));
	}

	#[test]
	fn groups_by_category_in_first_seen_order() {
		let groups = SkillCatalog::devops_default().by_category();
		let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
		assert_eq!(
			categories,
			["Infrastructure", "Container", "CI/CD", "Monitoring", "Cloud"]
		);
		let containers = &groups[1].1;
		assert_eq!(containers, &["Kubernetes", "Docker"]);
	}
}

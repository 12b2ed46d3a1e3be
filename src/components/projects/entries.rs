/// One card in the featured-projects grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectEntry {
	pub title: &'static str,
	pub description: &'static str,
	pub tech: &'static [&'static str],
	pub github: Option<&'static str>,
	pub docs: Option<&'static str>,
	pub read_more: &'static str,
}

pub fn projects() -> Vec<ProjectEntry> {
	vec![
		ProjectEntry {
			title: "Production-Grade 3-Tier E-Commerce Deployment on Amazon EKS",
			description: "Automated deployment and management of production-grade \
			              Kubernetes clusters with GitOps.",
			tech: &[
				"Terraform",
				"AWS EKS",
				"Helm",
				"ArgoCD",
				"Jenkins",
				"Prometheus",
				"Grafana",
				"Docker",
			],
			github: Some("https://github.com/devops-portfolio/eks-ecommerce-deployment"),
			docs: Some("https://example.com/posts/eks-ecommerce-deployment"),
			read_more: "https://example.com/posts/eks-ecommerce-deployment",
		},
		ProjectEntry {
			title: "Production-Grade Jenkins Monitoring with Prometheus, Grafana and InfluxDB",
			description: "Visualized Jenkins metrics and logs and built custom Grafana \
			              dashboards fed by Prometheus and InfluxDB.",
			tech: &["Jenkins", "Docker", "Prometheus", "Grafana", "InfluxDB"],
			github: Some("https://github.com/devops-portfolio/jenkins-monitoring"),
			docs: None,
			read_more: "https://example.com/posts/jenkins-monitoring",
		},
		ProjectEntry {
			title: "End-to-End Enterprise CI/CD Pipeline in Jenkins for a Java Application",
			description: "Multi-branch Jenkins pipeline for a Java application deploying \
			              to Kubernetes via ArgoCD.",
			tech: &["Jenkins", "Docker", "Maven", "Trivy", "Git", "ArgoCD", "Kubernetes"],
			github: Some("https://github.com/devops-portfolio/java-cicd-pipeline"),
			docs: Some("https://example.com/posts/java-cicd-pipeline"),
			read_more: "https://example.com/posts/java-cicd-pipeline",
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_projects_carry_chips_and_a_writeup_link() {
		let projects = projects();
		assert_eq!(projects.len(), 3);
		for project in &projects {
			assert!(!project.tech.is_empty(), "{} has no tech chips", project.title);
			assert!(
				project.read_more.starts_with("https://"),
				"{} has no writeup link",
				project.title
			);
		}
	}

	#[test]
	fn shipped_project_titles_are_unique() {
		let projects = projects();
		for (i, a) in projects.iter().enumerate() {
			for b in &projects[i + 1..] {
				assert_ne!(a.title, b.title);
			}
		}
	}
}

use crate::components::icons::Glyph;

/// One credential in the certifications grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CertificationEntry {
	pub name: &'static str,
	pub issuer: &'static str,
	pub date: &'static str,
	pub credential_id: Option<&'static str>,
}

/// One highlight in the achievements grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AchievementEntry {
	pub title: &'static str,
	pub description: &'static str,
	pub icon: Glyph,
	pub date: Option<&'static str>,
}

pub fn certifications() -> Vec<CertificationEntry> {
	vec![
		CertificationEntry {
			name: "Microsoft Certified: Azure Fundamentals",
			issuer: "Microsoft",
			date: "2024",
			credential_id: Some("AZ900-7D41C3B8"),
		},
		CertificationEntry {
			name: "Certified Kubernetes Administrator",
			issuer: "Cloud Native Computing Foundation",
			date: "2023",
			credential_id: Some("CKA-2308-014276"),
		},
		CertificationEntry {
			name: "HashiCorp Certified: Terraform Associate",
			issuer: "HashiCorp",
			date: "2023",
			credential_id: None,
		},
	]
}

pub fn achievements() -> Vec<AchievementEntry> {
	vec![
		AchievementEntry {
			title: "Open Source Contributor",
			description: "Contributed to major open-source projects including \
			              Kubernetes, Terraform, and Prometheus.",
			icon: Glyph::Github,
			date: Some("2023"),
		},
		AchievementEntry {
			title: "Community Speaker",
			description: "Regular speaker at DevOps and Cloud Native conferences, \
			              sharing expertise in infrastructure automation.",
			icon: Glyph::Award,
			date: Some("2023"),
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_certifications_name_their_issuer() {
		for cert in certifications() {
			assert!(!cert.issuer.is_empty(), "{} has no issuer", cert.name);
			assert!(!cert.date.is_empty(), "{} has no date", cert.name);
		}
	}

	#[test]
	fn shipped_achievements_carry_distinct_icons() {
		let achievements = achievements();
		assert_eq!(achievements.len(), 2);
		assert_ne!(achievements[0].icon, achievements[1].icon);
	}
}

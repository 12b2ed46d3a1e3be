/// One card on the education/experience timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
	pub id: &'static str,
	pub title: &'static str,
	pub subtitle: &'static str,
	pub date: &'static str,
	pub description: &'static str,
	pub link: Option<&'static str>,
	pub certificates: &'static [&'static str],
}

pub fn education() -> Vec<TimelineEntry> {
	vec![TimelineEntry {
		id: "edu-1",
		title: "B.Sc. Computer Science",
		subtitle: "State Technical University",
		date: "2018 - 2022",
		description: "Focused on distributed systems and cloud computing",
		link: None,
		certificates: &["Cloud Practitioner"],
	}]
}

pub fn experience() -> Vec<TimelineEntry> {
	vec![
		TimelineEntry {
			id: "exp-1",
			title: "DevOps Engineer",
			subtitle: "Northwind Hosting",
			date: "2023 - Present",
			description: "Owns infrastructure automation and CI/CD pipelines",
			link: Some("https://example.com/platform"),
			certificates: &[],
		},
		TimelineEntry {
			id: "exp-2",
			title: "Site Reliability Intern",
			subtitle: "Harbor Systems",
			date: "2022 - 2023",
			description: "Implemented automated deployment pipelines and monitoring solutions",
			link: None,
			certificates: &[],
		},
	]
}

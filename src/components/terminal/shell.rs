use crate::components::skills_network::SkillCatalog;

const HELP_TEXT: &str = "Available commands:
  help     - Show this help message
  about    - About the portfolio
  skills   - View skills
  contact  - Contact information
  clear    - Clear terminal
  exit     - Close terminal";

/// Who the terminals speak as. Injected so the components stay free of
/// hard-coded personal data.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellIdentity {
	pub user: String,
	pub host: String,
	pub role: String,
	pub about: String,
	pub contact: Vec<String>,
}

impl ShellIdentity {
	pub fn portfolio_default() -> Self {
		Self {
			user: "engineer".to_string(),
			host: "portfolio".to_string(),
			role: "DevOps Engineer".to_string(),
			about: "DevOps Engineer & SRE with expertise in cloud infrastructure, \
			        automation, and reliability engineering."
				.to_string(),
			contact: vec![
				"Email: hello@example.dev".to_string(),
				"GitHub: github.com/devops-portfolio".to_string(),
			],
		}
	}
}

/// What a command resolution asks the hosting terminal to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellOutcome {
	Output(String),
	Clear,
	Exit,
}

/// Command dispatcher behind the interactive terminal. The `skills` listing
/// is derived from the catalog, so the terminal and the network view can
/// never drift apart.
#[derive(Clone, Debug)]
pub struct Shell {
	identity: ShellIdentity,
	catalog: SkillCatalog,
}

impl Shell {
	pub fn new(identity: ShellIdentity, catalog: &SkillCatalog) -> Self {
		Self {
			identity,
			catalog: catalog.clone(),
		}
	}

	pub fn run(&self, input: &str) -> ShellOutcome {
		let command = input.trim().to_ascii_lowercase();
		match command.as_str() {
			"" => ShellOutcome::Output(String::new()),
			"help" => ShellOutcome::Output(HELP_TEXT.to_string()),
			"about" => ShellOutcome::Output(self.identity.about.clone()),
			"skills" => ShellOutcome::Output(self.skills_listing()),
			"contact" => ShellOutcome::Output(self.contact_listing()),
			"clear" => ShellOutcome::Clear,
			"exit" => ShellOutcome::Exit,
			other => ShellOutcome::Output(format!(
				"Command not found: {other}. Type 'help' for available commands."
			)),
		}
	}

	fn skills_listing(&self) -> String {
		let mut lines = vec!["Core skills:".to_string()];
		for (category, names) in self.catalog.by_category() {
			lines.push(format!("  {category}: {}", names.join(", ")));
		}
		lines.join("\n")
	}

	fn contact_listing(&self) -> String {
		let mut lines = vec!["Get in touch:".to_string()];
		for line in &self.identity.contact {
			lines.push(format!("  {line}"));
		}
		lines.join("\n")
	}
}

/// One autoplayed entry of the boot sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedCommand {
	pub command: String,
	pub output: Vec<String>,
	/// How long the prompt idles before this entry appears.
	pub delay_ms: f64,
}

/// The inline terminal's opening act: introduce the persona, then list the
/// tech stack as a directory tree derived from the catalog.
pub fn boot_script(identity: &ShellIdentity, catalog: &SkillCatalog) -> Vec<ScriptedCommand> {
	vec![
		ScriptedCommand {
			command: "whoami".to_string(),
			output: vec![format!(
				"{}@{} ~ {}",
				identity.user, identity.host, identity.role
			)],
			delay_ms: 1000.0,
		},
		ScriptedCommand {
			command: "ls -techstack".to_string(),
			output: tech_tree(catalog),
			delay_ms: 2000.0,
		},
	]
}

fn tech_tree(catalog: &SkillCatalog) -> Vec<String> {
	let groups = catalog.by_category();
	let mut lines = Vec::new();
	for (g, (category, names)) in groups.iter().enumerate() {
		lines.push(format!("{category}/"));
		for (i, name) in names.iter().enumerate() {
			let branch = if i + 1 == names.len() { "└──" } else { "├──" };
			lines.push(format!("{branch} {name}"));
		}
		if g + 1 != groups.len() {
			lines.push(String::new());
		}
	}
	lines
}

/// Replays a boot script against wall-clock deltas fed from the frame loop.
#[derive(Clone, Debug)]
pub struct ScriptPlayer {
	script: Vec<ScriptedCommand>,
	revealed: usize,
	elapsed_ms: f64,
}

impl ScriptPlayer {
	pub fn new(script: Vec<ScriptedCommand>) -> Self {
		Self {
			script,
			revealed: 0,
			elapsed_ms: 0.0,
		}
	}

	pub fn revealed(&self) -> usize {
		self.revealed
	}

	pub fn done(&self) -> bool {
		self.revealed == self.script.len()
	}

	/// Advances the clock; true when another entry just became visible.
	pub fn tick(&mut self, dt_ms: f64) -> bool {
		if self.done() {
			return false;
		}
		self.elapsed_ms += dt_ms;
		let delay = self.script[self.revealed].delay_ms;
		if self.elapsed_ms < delay {
			return false;
		}
		// Carry the overshoot so long frames do not stretch the pacing.
		self.elapsed_ms -= delay;
		self.revealed += 1;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn shell() -> Shell {
		Shell::new(
			ShellIdentity::portfolio_default(),
			&SkillCatalog::devops_default(),
		)
	}

	#[test]
	fn help_lists_every_command() {
		let ShellOutcome::Output(text) = shell().run("help") else {
			panic!("help should print");
		};
		assert!(text.starts_with("Available commands:"));
		for command in ["help", "about", "skills", "contact", "clear", "exit"] {
			assert!(text.contains(command), "help is missing `{command}`");
		}
	}

	#[test]
	fn commands_are_trimmed_and_case_insensitive() {
		let shell = shell();
		assert_eq!(shell.run("  HELP  "), shell.run("help"));
		assert_eq!(shell.run("Exit"), ShellOutcome::Exit);
	}

	#[test]
	fn about_and_contact_come_from_the_identity() {
		let shell = shell();
		let ShellOutcome::Output(about) = shell.run("about") else {
			panic!("about should print");
		};
		assert!(about.starts_with("DevOps Engineer & SRE"));
		let ShellOutcome::Output(contact) = shell.run("contact") else {
			panic!("contact should print");
		};
		assert_eq!(
			contact,
			"Get in touch:\n  Email: hello@example.dev\n  GitHub: github.com/devops-portfolio"
		);
	}

	#[test]
	fn skills_listing_is_derived_from_the_catalog() {
		let ShellOutcome::Output(text) = shell().run("skills") else {
			panic!("skills should print");
		};
		let lines: Vec<_> = text.lines().collect();
		assert_eq!(lines[0], "Core skills:");
		assert_eq!(lines[1], "  Infrastructure: Terraform");
		assert_eq!(lines[2], "  Container: Kubernetes, Docker");
		assert_eq!(lines[5], "  Cloud: AWS");
	}

	#[test]
	fn clear_and_exit_have_dedicated_outcomes() {
		let shell = shell();
		assert_eq!(shell.run("clear"), ShellOutcome::Clear);
		assert_eq!(shell.run("exit"), ShellOutcome::Exit);
	}

	#[test]
	fn unknown_commands_report_what_was_typed() {
		assert_eq!(
			shell().run("deploy"),
			ShellOutcome::Output(
				"Command not found: deploy. Type 'help' for available commands.".to_string()
			)
		);
	}

	#[test]
	fn boot_script_paces_whoami_then_the_tech_tree() {
		let script = boot_script(
			&ShellIdentity::portfolio_default(),
			&SkillCatalog::devops_default(),
		);
		assert_eq!(script.len(), 2);
		assert_eq!(script[0].command, "whoami");
		assert_eq!(script[0].output, vec!["engineer@portfolio ~ DevOps Engineer"]);
		assert_eq!(script[0].delay_ms, 1000.0);
		assert_eq!(script[1].command, "ls -techstack");
		assert_eq!(script[1].delay_ms, 2000.0);
	}

	#[test]
	fn tech_tree_draws_branches_per_category() {
		let script = boot_script(
			&ShellIdentity::portfolio_default(),
			&SkillCatalog::devops_default(),
		);
		let tree = &script[1].output;
		assert_eq!(tree[0], "Infrastructure/");
		assert_eq!(tree[1], "└── Terraform");
		assert_eq!(tree[2], "");
		assert_eq!(tree[3], "Container/");
		assert_eq!(tree[4], "├── Kubernetes");
		assert_eq!(tree[5], "└── Docker");
		assert_ne!(tree.last().map(String::as_str), Some(""), "no trailing blank");
	}

	#[test]
	fn player_reveals_entries_as_delays_elapse() {
		let script = boot_script(
			&ShellIdentity::portfolio_default(),
			&SkillCatalog::devops_default(),
		);
		let mut player = ScriptPlayer::new(script);
		assert!(!player.tick(999.0));
		assert!(player.tick(1.0));
		assert_eq!(player.revealed(), 1);
		assert!(!player.tick(1999.0));
		assert!(player.tick(1.0));
		assert!(player.done());
		assert!(!player.tick(16.0));
	}
}

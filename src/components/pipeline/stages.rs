use crate::components::icons::Glyph;

/// One stage of the simulated delivery pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineStage {
	pub id: &'static str,
	pub title: &'static str,
	pub icon: Glyph,
	pub logs: &'static [&'static str],
	pub duration_ms: f64,
}

pub fn devops_stages() -> Vec<PipelineStage> {
	vec![
		PipelineStage {
			id: "commit",
			title: "Code Commit",
			icon: Glyph::GitCommit,
			logs: &[
				"> git add .",
				"> git commit -m \"feat: add kubernetes deployment\"",
				"> git push origin main",
				"✓ Changes pushed to repository",
			],
			duration_ms: 2000.0,
		},
		PipelineStage {
			id: "test",
			title: "Automated Testing",
			icon: Glyph::TestTube,
			logs: &[
				"> Running unit tests...",
				"✓ API tests passed",
				"✓ Integration tests passed",
				"✓ Security scan completed",
			],
			duration_ms: 3000.0,
		},
		PipelineStage {
			id: "build",
			title: "Build & Package",
			icon: Glyph::Boxes,
			logs: &[
				"> Building Docker image...",
				"> docker build -t app:latest .",
				"✓ Image built successfully",
				"✓ Pushing to registry",
			],
			duration_ms: 2500.0,
		},
		PipelineStage {
			id: "deploy",
			title: "Deployment",
			icon: Glyph::Cloud,
			logs: &[
				"> kubectl apply -f deployment.yaml",
				"> Scaling replicas to 3",
				"✓ Deployment successful",
				"✓ Health checks passed",
			],
			duration_ms: 2500.0,
		},
		PipelineStage {
			id: "monitor",
			title: "Monitoring",
			icon: Glyph::LineChart,
			logs: &[
				"> Checking metrics...",
				"✓ CPU usage: 12%",
				"✓ Memory usage: 45%",
				"✓ Response time: 120ms",
			],
			duration_ms: 2000.0,
		},
	]
}

/// Frame-clock state for the looping stage animation. Each stage holds for
/// its own duration, then the clock wraps back to the first stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PipelineClock {
	stage: usize,
	elapsed_ms: f64,
}

impl PipelineClock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn stage(&self) -> usize {
		self.stage
	}

	/// Advances the clock; true when the current stage changed.
	pub fn tick(&mut self, dt_ms: f64, stages: &[PipelineStage]) -> bool {
		if stages.is_empty() {
			return false;
		}
		self.stage %= stages.len();
		self.elapsed_ms += dt_ms;
		let duration = stages[self.stage].duration_ms;
		if self.elapsed_ms < duration {
			return false;
		}
		self.elapsed_ms -= duration;
		self.stage = (self.stage + 1) % stages.len();
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_stages_run_commit_through_monitor() {
		let ids: Vec<_> = devops_stages().iter().map(|s| s.id).collect();
		assert_eq!(ids, ["commit", "test", "build", "deploy", "monitor"]);
	}

	#[test]
	fn stage_holds_until_its_duration_passes() {
		let stages = devops_stages();
		let mut clock = PipelineClock::new();
		assert!(!clock.tick(1999.0, &stages));
		assert_eq!(clock.stage(), 0);
		assert!(clock.tick(1.0, &stages));
		assert_eq!(clock.stage(), 1);
	}

	#[test]
	fn last_stage_wraps_to_the_first() {
		let stages = devops_stages();
		let mut clock = PipelineClock::new();
		let total: f64 = stages.iter().map(|s| s.duration_ms).sum();
		let mut elapsed = 0.0;
		while elapsed < total {
			clock.tick(100.0, &stages);
			elapsed += 100.0;
		}
		assert_eq!(clock.stage(), 0);
	}

	#[test]
	fn empty_stage_list_is_inert() {
		let mut clock = PipelineClock::new();
		assert!(!clock.tick(5000.0, &[]));
		assert_eq!(clock.stage(), 0);
	}

	#[test]
	fn stage_index_reclamps_when_the_list_shrinks() {
		let stages = devops_stages();
		let mut clock = PipelineClock::new();
		clock.tick(2000.0, &stages);
		clock.tick(3000.0, &stages);
		clock.tick(2500.0, &stages);
		assert_eq!(clock.stage(), 3);
		let short = &stages[..2];
		clock.tick(0.0, short);
		assert_eq!(clock.stage(), 1);
	}
}

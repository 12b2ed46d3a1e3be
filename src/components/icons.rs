//! Inline SVG glyphs shared by the skill cards, terminals, pipeline stages
//! and the project and certification sections.

use leptos::prelude::*;

/// Icon vocabulary for catalog entries, pipeline stages and achievements.
///
/// A glyph renders as a `currentColor` icon, so the surrounding element
/// controls its tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
	Boxes,
	Layers,
	GitCommit,
	GitBranch,
	Activity,
	Cloud,
	LineChart,
	TestTube,
	Github,
	Award,
}

impl Glyph {
	pub fn render(self) -> AnyView {
		match self {
			Glyph::Boxes => view! { <BoxesIcon /> }.into_any(),
			Glyph::Layers => view! { <LayersIcon /> }.into_any(),
			Glyph::GitCommit => view! { <GitCommitIcon /> }.into_any(),
			Glyph::GitBranch => view! { <GitBranchIcon /> }.into_any(),
			Glyph::Activity => view! { <ActivityIcon /> }.into_any(),
			Glyph::Cloud => view! { <CloudIcon /> }.into_any(),
			Glyph::LineChart => view! { <LineChartIcon /> }.into_any(),
			Glyph::TestTube => view! { <TestTubeIcon /> }.into_any(),
			Glyph::Github => view! { <GithubIcon /> }.into_any(),
			Glyph::Award => view! { <AwardIcon /> }.into_any(),
		}
	}
}

#[component]
fn BoxesIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"></path>
			<polyline points="3.29 7 12 12 20.71 7"></polyline>
			<line x1="12" y1="22" x2="12" y2="12"></line>
		</svg>
	}
}

#[component]
fn LayersIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polygon points="12 2 2 7 12 12 22 7 12 2"></polygon>
			<polyline points="2 17 12 22 22 17"></polyline>
			<polyline points="2 12 12 17 22 12"></polyline>
		</svg>
	}
}

#[component]
fn GitCommitIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<circle cx="12" cy="12" r="4"></circle>
			<line x1="1.05" y1="12" x2="7" y2="12"></line>
			<line x1="17.01" y1="12" x2="22.96" y2="12"></line>
		</svg>
	}
}

#[component]
fn GitBranchIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<line x1="6" y1="3" x2="6" y2="15"></line>
			<circle cx="18" cy="6" r="3"></circle>
			<circle cx="6" cy="18" r="3"></circle>
			<path d="M18 9a9 9 0 0 1-9 9"></path>
		</svg>
	}
}

#[component]
fn ActivityIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="22 12 18 12 15 21 9 3 6 12 2 12"></polyline>
		</svg>
	}
}

#[component]
fn CloudIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"></path>
		</svg>
	}
}

#[component]
fn LineChartIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M3 3v18h18"></path>
			<path d="m19 9-5 5-4-4-3 3"></path>
		</svg>
	}
}

#[component]
fn TestTubeIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M14.5 2v17.5a2.5 2.5 0 0 1-5 0V2"></path>
			<path d="M8.5 2h7"></path>
			<path d="M14.5 16h-5"></path>
		</svg>
	}
}

#[component]
pub fn GithubIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
			<path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"></path>
		</svg>
	}
}

#[component]
pub fn AwardIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<circle cx="12" cy="8" r="6"></circle>
			<path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"></path>
		</svg>
	}
}

#[component]
pub fn TrophyIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"></path>
			<path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"></path>
			<path d="M4 22h16"></path>
			<path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"></path>
			<path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"></path>
			<path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"></path>
		</svg>
	}
}

#[component]
pub fn StarIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"></polygon>
		</svg>
	}
}

#[component]
pub fn ExternalLinkIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>
			<polyline points="15 3 21 3 21 9"></polyline>
			<line x1="10" y1="14" x2="21" y2="3"></line>
		</svg>
	}
}

#[component]
pub fn FileTextIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path>
			<polyline points="14 2 14 8 20 8"></polyline>
			<line x1="16" y1="13" x2="8" y2="13"></line>
			<line x1="16" y1="17" x2="8" y2="17"></line>
		</svg>
	}
}

#[component]
pub fn TerminalIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="4 17 10 11 4 5"></polyline>
			<line x1="12" y1="19" x2="20" y2="19"></line>
		</svg>
	}
}

#[component]
pub fn ChevronLeftIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="15 18 9 12 15 6"></polyline>
		</svg>
	}
}

#[component]
pub fn ChevronRightIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="9 18 15 12 9 6"></polyline>
		</svg>
	}
}

#[component]
pub fn PromptIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="9 18 15 12 9 6"></polyline>
		</svg>
	}
}

#[component]
pub fn CloseIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<line x1="18" y1="6" x2="6" y2="18"></line>
			<line x1="6" y1="6" x2="18" y2="18"></line>
		</svg>
	}
}

#[component]
pub fn MinimizeIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="4 14 10 14 10 20"></polyline>
			<polyline points="20 10 14 10 14 4"></polyline>
			<line x1="14" y1="10" x2="21" y2="3"></line>
			<line x1="3" y1="21" x2="10" y2="14"></line>
		</svg>
	}
}

#[component]
pub fn MaximizeIcon() -> impl IntoView {
	view! {
		<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
			<polyline points="15 3 21 3 21 9"></polyline>
			<polyline points="9 21 3 21 3 15"></polyline>
			<line x1="21" y1="3" x2="14" y2="10"></line>
			<line x1="3" y1="21" x2="10" y2="14"></line>
		</svg>
	}
}

use crate::components::icons::Glyph;

/// One entry of the skill catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	pub id: String,
	pub name: String,
	pub category: String,
	/// 0..=100.
	pub proficiency: u8,
	pub description: String,
	/// Ids of related skills, in display order. May name skills that are
	/// not in the catalog; such entries are skipped wherever they are used.
	pub related: Vec<String>,
	/// Accent color as a CSS hex token.
	pub color: String,
	pub icon: Glyph,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

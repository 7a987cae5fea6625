/// A node of a decorative network; `group` picks its colour from the theme.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	/// Caption drawn beside the node; unlabeled nodes are filler.
	pub label: Option<&'static str>,
	/// Colour group.
	pub group: u8,
}

/// Undirected network drawn by the scene. Links are index pairs into `nodes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneGraph {
	/// Nodes in index order.
	pub nodes: Vec<SceneNode>,
	/// Edges between `nodes` indices; out-of-range pairs are skipped.
	pub links: Vec<(usize, usize)>,
}

/// Colour scheme a scene is painted with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneTheme {
	/// Stone and gold on the cream page background.
	#[default]
	Paper,
	/// Muted tones for the boxed scene in the impact section.
	Inset,
}

impl SceneTheme {
	/// Palette cycled through by node group.
	pub fn node_colors(self) -> &'static [&'static str] {
		match self {
			SceneTheme::Paper => &["#C5A059", "#44403c", "#78716c", "#a8a29e", "#b45309"],
			SceneTheme::Inset => &["#a8a29e", "#C5A059", "#d6d3d1", "#78716c"],
		}
	}

	/// Fill colour for nodes of `group`.
	pub fn node_color(self, group: u8) -> &'static str {
		let colors = self.node_colors();
		colors[group as usize % colors.len()]
	}

	/// `r, g, b` of edges, alpha is applied per frame.
	pub fn edge_rgb(self) -> &'static str {
		match self {
			SceneTheme::Paper => "197, 160, 89",
			SceneTheme::Inset => "120, 113, 108",
		}
	}

	/// `r, g, b` of node labels.
	pub fn label_rgb(self) -> &'static str {
		match self {
			SceneTheme::Paper => "41, 37, 36",
			SceneTheme::Inset => "87, 83, 78",
		}
	}
}

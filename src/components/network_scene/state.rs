use std::collections::HashSet;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{SceneGraph, SceneTheme};

pub(crate) const NODE_RADIUS: f64 = 4.0;
pub(crate) const HIT_RADIUS: f64 = 12.0;
/// Span (graph units) that fits the shorter side of the canvas at zoom 1.
const FIT_SPAN: f64 = 520.0;
const SEED_RADIUS: f64 = 120.0;

#[derive(Clone, Debug, Default)]
pub(crate) struct NodeStyle {
	pub(crate) label: Option<&'static str>,
	pub(crate) color: &'static str,
}

/// Graph-to-screen mapping: `screen = graph * k + (x, y)`.
#[derive(Clone, Debug, Default)]
pub(crate) struct ViewTransform {
	pub(crate) x: f64,
	pub(crate) y: f64,
	pub(crate) k: f64,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct DragState {
	pub(crate) node: Option<DefaultNodeIdx>,
	pub(crate) start_x: f64,
	pub(crate) start_y: f64,
	pub(crate) node_start_x: f32,
	pub(crate) node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct HoverState {
	pub(crate) node: Option<DefaultNodeIdx>,
	pub(crate) neighbors: HashSet<DefaultNodeIdx>,
	pub(crate) highlight_t: f64,
	pub(crate) prev_node: Option<DefaultNodeIdx>,
	pub(crate) prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Simulation, viewport and pointer state of one network canvas.
pub(crate) struct SceneState {
	pub(crate) graph: ForceGraph<NodeStyle, ()>,
	pub(crate) theme: SceneTheme,
	pub(crate) transform: ViewTransform,
	pub(crate) drag: DragState,
	pub(crate) hover: HoverState,
	pub(crate) width: f64,
	pub(crate) height: f64,
	pub(crate) flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl SceneState {
	pub(crate) fn new(data: &SceneGraph, theme: SceneTheme, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 120.0,
			force_spring: 0.04,
			force_max: 80.0,
			node_speed: 2000.0,
			damping_factor: 0.92,
		});

		let count = data.nodes.len().max(1) as f64;
		let indices: Vec<DefaultNodeIdx> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				// Seeded on a circle around the origin; the transform centres it.
				let angle = i as f64 * 2.0 * PI / count;
				graph.add_node(NodeData {
					x: (SEED_RADIUS * angle.cos()) as f32,
					y: (SEED_RADIUS * angle.sin()) as f32,
					mass: if node.label.is_some() { 14.0 } else { 8.0 },
					is_anchor: false,
					user_data: NodeStyle {
						label: node.label,
						color: theme.node_color(node.group),
					},
				})
			})
			.collect();

		let mut edges = Vec::with_capacity(data.links.len());
		for &(a, b) in &data.links {
			if let (Some(&src), Some(&tgt)) = (indices.get(a), indices.get(b)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		let mut state = Self {
			graph,
			theme,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
			edges,
		};
		state.resize(width, height);
		state
	}

	pub(crate) fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub(crate) fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub(crate) fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in graph space and scales with the view like the nodes do.
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub(crate) fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the outgoing highlight around so it can fade out.
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub(crate) fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub(crate) fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub(crate) fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Grab the node under the pointer, if any. Returns whether a drag started.
	pub(crate) fn begin_drag(&mut self, sx: f64, sy: f64) -> bool {
		let Some(idx) = self.node_at_position(sx, sy) else {
			return false;
		};
		let Some((nx, ny)) = self.node_position(idx) else {
			return false;
		};
		self.drag = DragState {
			node: Some(idx),
			start_x: sx,
			start_y: sy,
			node_start_x: nx as f32,
			node_start_y: ny as f32,
		};
		true
	}

	/// Move the dragged node with the pointer, pinning it in place.
	pub(crate) fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node else {
			return;
		};
		let (dx, dy) = (
			(sx - self.drag.start_x) / self.transform.k,
			(sy - self.drag.start_y) / self.transform.k,
		);
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Let go of the dragged node; it stays pinned where it was dropped.
	pub(crate) fn end_drag(&mut self) {
		self.drag = DragState::default();
	}

	pub(crate) fn is_dragging(&self) -> bool {
		self.drag.node.is_some()
	}

	pub(crate) fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Re-centre on the new canvas size and rescale so the network keeps fitting.
	pub(crate) fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform = ViewTransform {
			x: width / 2.0,
			y: height / 2.0,
			k: (width.min(height) / FIT_SPAN).clamp(0.5, 1.6),
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_scene::data::random_tree;

	fn scene() -> SceneState {
		SceneState::new(&random_tree(8), SceneTheme::Paper, 1040.0, 800.0)
	}

	/// Simulation handle of the `i`th input node; handles follow insertion order.
	fn node_index(s: &SceneState, i: usize) -> Option<DefaultNodeIdx> {
		let mut handles = Vec::new();
		s.graph.visit_nodes(|node| handles.push(node.index()));
		handles.sort();
		handles.get(i).copied()
	}

	fn screen_pos(s: &SceneState, i: usize) -> (f64, f64) {
		let idx = node_index(s, i).expect("node exists");
		let (gx, gy) = s.node_position(idx).expect("node has a position");
		(
			gx * s.transform.k + s.transform.x,
			gy * s.transform.k + s.transform.y,
		)
	}

	#[test]
	fn view_is_centred_and_fitted() {
		let s = scene();
		assert_eq!((s.transform.x, s.transform.y), (520.0, 400.0));
		assert!((s.transform.k - 800.0 / FIT_SPAN).abs() < 1e-9);
		let (gx, gy) = s.screen_to_graph(520.0, 400.0);
		assert!(gx.abs() < 1e-9 && gy.abs() < 1e-9);
	}

	#[test]
	fn zoom_is_clamped_on_tiny_canvases() {
		let mut s = scene();
		s.resize(100.0, 100.0);
		assert_eq!(s.transform.k, 0.5);
	}

	#[test]
	fn hit_test_finds_the_node_under_the_pointer() {
		let s = scene();
		let (sx, sy) = screen_pos(&s, 0);
		assert_eq!(s.node_at_position(sx, sy), node_index(&s, 0));
		assert_eq!(s.node_at_position(-500.0, -500.0), None);
	}

	#[test]
	fn hover_collects_direct_neighbours() {
		let mut s = scene();
		let root = node_index(&s, 0).unwrap();
		s.set_hover(Some(root));
		let expected: HashSet<_> = random_tree(8)
			.links
			.iter()
			.filter_map(|&(a, b)| match (a, b) {
				(0, other) | (other, 0) => node_index(&s, other),
				_ => None,
			})
			.collect();
		assert!(!expected.is_empty());
		assert_eq!(s.hover.neighbors, expected);
		assert!(s.is_hovered(root));
		assert!(expected.iter().all(|&n| s.is_highlighted(n)));
	}

	#[test]
	fn highlight_fades_out_after_leaving() {
		let mut s = scene();
		let root = node_index(&s, 0).unwrap();
		s.set_hover(Some(root));
		for _ in 0..120 {
			s.tick(0.016);
		}
		assert!(s.hover.highlight_t > 0.5);

		s.set_hover(None);
		assert_eq!(s.hover.prev_node, Some(root));
		assert!(s.has_active_highlight());
		for _ in 0..600 {
			s.tick(0.016);
		}
		assert_eq!(s.hover.highlight_t, 0.0);
		assert!(!s.has_active_highlight());
	}

	#[test]
	fn dragging_pins_the_node_under_the_pointer() {
		let mut s = scene();
		let (sx, sy) = screen_pos(&s, 3);
		assert!(s.begin_drag(sx, sy));
		assert!(s.is_dragging());

		s.drag_to(sx + 40.0, sy - 20.0);
		let (nx, ny) = screen_pos(&s, 3);
		assert!((nx - (sx + 40.0)).abs() < 1e-3);
		assert!((ny - (sy - 20.0)).abs() < 1e-3);

		s.end_drag();
		assert!(!s.is_dragging());
		assert!(!s.begin_drag(-500.0, -500.0));
	}
}

use super::types::{SceneGraph, SceneNode};

// (label, group); the first entry of each group acts as its hub.
const SKILLS: [(&str, u8); 14] = [
	("Python", 0),
	("SQL", 0),
	("PyTorch", 1),
	("TensorFlow", 1),
	("Transformers", 1),
	("NLP", 1),
	("Graph Theory", 2),
	("Anomaly Detection", 2),
	("Optimization", 2),
	("Forecasting", 2),
	("AWS", 3),
	("GCP", 3),
	("Tableau", 4),
	("D3.js", 4),
];

/// Deterministic pseudo-random value in `[0, 1)`.
fn lcg(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Labeled skill hubs with `filler` unlabeled satellites hung off random nodes.
pub fn skill_constellation(filler: usize) -> SceneGraph {
	let mut nodes: Vec<SceneNode> = SKILLS
		.iter()
		.map(|&(label, group)| SceneNode {
			label: Some(label),
			group,
		})
		.collect();
	let mut links = Vec::new();

	let mut hubs: Vec<usize> = Vec::new();
	for (i, &(_, group)) in SKILLS.iter().enumerate() {
		match hubs.iter().find(|&&h| SKILLS[h].1 == group) {
			Some(&hub) => links.push((i, hub)),
			None => {
				if let Some(&prev) = hubs.last() {
					links.push((i, prev));
				}
				hubs.push(i);
			}
		}
	}

	for _ in 0..filler {
		let i = nodes.len();
		let target = (lcg(i) * i as f64) as usize;
		let group = nodes[target].group;
		nodes.push(SceneNode { label: None, group });
		links.push((i, target));
	}

	SceneGraph { nodes, links }
}

/// Unlabeled random tree of `n` nodes.
pub fn random_tree(n: usize) -> SceneGraph {
	let nodes = (0..n)
		.map(|i| SceneNode {
			label: None,
			group: (i % 4) as u8,
		})
		.collect();
	let links = (1..n)
		.map(|i| (i, (lcg(i) * i as f64) as usize))
		.collect();
	SceneGraph { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn links_in_range(graph: &SceneGraph) -> bool {
		graph
			.links
			.iter()
			.all(|&(a, b)| a < graph.nodes.len() && b < graph.nodes.len() && a != b)
	}

	#[test]
	fn constellation_is_a_connected_tree() {
		let graph = skill_constellation(20);
		assert_eq!(graph.nodes.len(), SKILLS.len() + 20);
		assert_eq!(graph.links.len(), graph.nodes.len() - 1);
		assert!(links_in_range(&graph));
		assert_eq!(graph.nodes.iter().filter(|n| n.label.is_some()).count(), SKILLS.len());
	}

	#[test]
	fn satellites_inherit_their_anchor_group() {
		let graph = skill_constellation(30);
		for &(from, to) in graph.links.iter().filter(|(from, _)| *from >= SKILLS.len()) {
			assert_eq!(graph.nodes[from].group, graph.nodes[to].group);
		}
	}

	#[test]
	fn tree_is_deterministic() {
		let graph = random_tree(40);
		assert_eq!(graph.links.len(), 39);
		assert!(links_in_range(&graph));
		assert_eq!(graph, random_tree(40));
	}

	#[test]
	fn empty_tree() {
		assert_eq!(random_tree(0), SceneGraph::default());
	}
}

/// Number of clickable nodes.
pub const NODE_COUNT: usize = 5;
/// Number of derived clusters.
pub const CLUSTER_COUNT: usize = 4;

/// Which clusters each node feeds. Node 4 sits in the middle and touches all four.
pub const ADJACENCY: [&[usize]; NODE_COUNT] = [&[0, 1], &[0, 2], &[1, 3], &[2, 3], &[0, 1, 2, 3]];

/// Set of toggled node ids, stored as a bitmask over `0..NODE_COUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeToggleSet(u8);

impl NodeToggleSet {
	/// Flip membership of `node`. Ids outside the table are ignored.
	pub fn toggle(&mut self, node: usize) {
		if node < NODE_COUNT {
			self.0 ^= 1 << node;
		}
	}

	/// Whether `node` is toggled on.
	pub fn contains(self, node: usize) -> bool {
		node < NODE_COUNT && self.0 & (1 << node) != 0
	}

	/// No node toggled.
	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Number of toggled nodes.
	pub fn len(self) -> usize {
		self.0.count_ones() as usize
	}

	/// Toggled ids in ascending order.
	pub fn iter(self) -> impl Iterator<Item = usize> {
		(0..NODE_COUNT).filter(move |&n| self.contains(n))
	}
}

impl FromIterator<usize> for NodeToggleSet {
	fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
		let mut set = Self::default();
		for node in iter {
			if !set.contains(node) {
				set.toggle(node);
			}
		}
		set
	}
}

/// Active flags for every cluster, derived from a [`NodeToggleSet`] and never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClusterActivation([bool; CLUSTER_COUNT]);

impl ClusterActivation {
	/// A cluster is active when an odd number of toggled nodes are adjacent to it.
	pub fn of(set: NodeToggleSet) -> Self {
		let mut parity = [false; CLUSTER_COUNT];
		for node in set.iter() {
			for &cluster in ADJACENCY[node] {
				parity[cluster] = !parity[cluster];
			}
		}
		Self(parity)
	}

	/// Out-of-range clusters read as inactive.
	pub fn is_active(self, cluster: usize) -> bool {
		self.0.get(cluster).copied().unwrap_or(false)
	}

	/// Number of active clusters.
	pub fn count(self) -> usize {
		self.0.iter().filter(|&&on| on).count()
	}

	/// Active cluster ids in ascending order.
	pub fn active(self) -> Vec<usize> {
		(0..CLUSTER_COUNT).filter(|&c| self.is_active(c)).collect()
	}
}

/// Caption under the board.
pub fn status_line(set: NodeToggleSet) -> String {
	if set.is_empty() {
		"Network Status: Idle".to_string()
	} else {
		format!(
			"Analysis: {} relationships detected.",
			ClusterActivation::of(set).count()
		)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn set(nodes: &[usize]) -> NodeToggleSet {
		nodes.iter().copied().collect()
	}

	#[test]
	fn hand_computed_parity() {
		assert_eq!(ClusterActivation::of(set(&[])).active(), Vec::<usize>::new());
		assert_eq!(ClusterActivation::of(set(&[0])).active(), vec![0, 1]);
		// Cluster 0 is fed by both nodes and cancels out.
		assert_eq!(ClusterActivation::of(set(&[0, 1])).active(), vec![1, 2]);
		assert_eq!(ClusterActivation::of(set(&[4])).active(), vec![0, 1, 2, 3]);
	}

	#[test]
	fn parity_matches_adjacent_count_for_every_subset() {
		for mask in 0u8..(1 << NODE_COUNT) {
			let s: NodeToggleSet = (0..NODE_COUNT).filter(|n| mask & (1 << n) != 0).collect();
			let activation = ClusterActivation::of(s);
			for cluster in 0..CLUSTER_COUNT {
				let adjacent = s.iter().filter(|&n| ADJACENCY[n].contains(&cluster)).count();
				assert_eq!(
					activation.is_active(cluster),
					adjacent % 2 == 1,
					"subset {mask:05b}, cluster {cluster}"
				);
			}
		}
	}

	#[test]
	fn toggle_adds_then_removes() {
		let mut s = NodeToggleSet::default();
		s.toggle(3);
		assert!(s.contains(3));
		assert_eq!(s.len(), 1);
		s.toggle(3);
		assert!(!s.contains(3));
		assert!(s.is_empty());
	}

	#[test]
	fn out_of_range_ids_are_ignored() {
		let mut s = NodeToggleSet::default();
		s.toggle(NODE_COUNT);
		s.toggle(42);
		assert!(s.is_empty());
		assert!(!s.contains(42));
		assert!(!ClusterActivation::default().is_active(CLUSTER_COUNT));
	}

	#[test]
	fn status_reports_active_clusters() {
		assert_eq!(status_line(set(&[])), "Network Status: Idle");
		assert_eq!(status_line(set(&[4])), "Analysis: 4 relationships detected.");
		// Every cluster is fed twice: non-empty set, zero relationships.
		assert_eq!(
			status_line(set(&[0, 3])),
			"Analysis: 4 relationships detected."
		);
		assert_eq!(
			status_line(set(&[0, 1, 2, 3])),
			"Analysis: 0 relationships detected."
		);
	}

	proptest! {
		#[test]
		fn double_toggle_is_identity(
			start in proptest::collection::vec(0..NODE_COUNT, 0..8),
			node in 0..NODE_COUNT,
		) {
			let before: NodeToggleSet = start.into_iter().collect();
			let mut after = before;
			after.toggle(node);
			after.toggle(node);
			prop_assert_eq!(after, before);
			prop_assert_eq!(ClusterActivation::of(after), ClusterActivation::of(before));
		}

		#[test]
		fn single_toggle_flips_exactly_adjacent_clusters(
			start in proptest::collection::vec(0..NODE_COUNT, 0..8),
			node in 0..NODE_COUNT,
		) {
			let before: NodeToggleSet = start.into_iter().collect();
			let mut after = before;
			after.toggle(node);
			let (a, b) = (ClusterActivation::of(before), ClusterActivation::of(after));
			for cluster in 0..CLUSTER_COUNT {
				let flipped = a.is_active(cluster) != b.is_active(cluster);
				prop_assert_eq!(flipped, ADJACENCY[node].contains(&cluster));
			}
		}
	}
}

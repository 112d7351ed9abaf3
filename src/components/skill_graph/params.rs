/// Tuning constants for the skill graph simulation.
///
/// Defaults give snappy but stable motion at one tick per animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
	/// Stiffness of the spring pulling each node toward the rest circle.
	pub k_center: f64,
	/// Radius of the circle around the viewport center the nodes settle on.
	pub rest_center_radius: f64,
	/// Stiffness of the spring between ring neighbours.
	pub k_edge: f64,
	pub rest_edge_length: f64,
	/// Inverse-square repulsion strength between every pair of nodes.
	pub k_repel: f64,
	/// Floor on squared pair distance for repulsion (px²).
	pub min_distance_sq: f64,
	/// Floor on spring distances, keeps directions finite.
	pub distance_epsilon: f64,
	/// Per-tick velocity multiplier.
	pub damping: f64,
	/// Integration step. One step per frame, not wall-clock time.
	pub dt: f64,
	/// Fraction of velocity kept (and reversed) on a wall bounce.
	pub restitution: f64,
	pub node_radius: f64,
	pub node_mass: f64,
	/// Extra grab radius beyond the node body.
	pub hit_padding: f64,
	/// Extra hover radius beyond the node body.
	pub hover_padding: f64,
	/// Max random offset applied to seeded positions, both axes.
	pub seed_jitter: f64,
	/// Even nodes start this far above the midline, odd nodes below.
	pub seed_vertical_offset: f64,
	/// Max random initial speed per axis.
	pub seed_speed: f64,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		Self {
			k_center: 0.02,
			rest_center_radius: 120.0,
			k_edge: 0.04,
			rest_edge_length: 180.0,
			k_repel: 11_000.0,
			min_distance_sq: 36.0,
			distance_epsilon: 0.0001,
			damping: 0.9,
			dt: 1.0,
			restitution: 0.7,
			node_radius: 32.0,
			node_mass: 1.0,
			hit_padding: 10.0,
			hover_padding: 6.0,
			seed_jitter: 6.0,
			seed_vertical_offset: 28.0,
			seed_speed: 0.2,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_targets_are_consistent() {
		let p = SimulationParameters::default();
		assert!(p.damping > 0.0 && p.damping < 1.0);
		assert!(p.restitution > 0.0 && p.restitution < 1.0);
		assert!(p.hover_padding < p.hit_padding);
		// the repulsion floor sits well inside one node body
		assert!(p.min_distance_sq.sqrt() < p.node_radius);
		assert_eq!((p.rest_center_radius, p.rest_edge_length), (120.0, 180.0));
	}
}

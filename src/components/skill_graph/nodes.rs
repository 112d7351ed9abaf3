use rand::Rng;

use super::params::SimulationParameters;
use super::types::{SkillNode, Vec2};

/// Physical state of one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
	pub position: Vec2,
	pub velocity: Vec2,
	pub radius: f64,
	pub mass: f64,
}

/// Fixed-size set of nodes. Index `i` names the same node for the store's
/// whole lifetime and is always spring-linked to `(i + 1) % len`.
#[derive(Clone, Debug)]
pub struct NodeStore {
	bodies: Vec<Body>,
	identities: Vec<SkillNode>,
	width: f64,
	height: f64,
}

/// Deterministic part of the seed layout: evenly spaced along the midline,
/// alternating above and below it.
pub fn seed_position(
	index: usize,
	count: usize,
	width: f64,
	height: f64,
	params: &SimulationParameters,
) -> Vec2 {
	let spacing = width / (count as f64 + 1.0);
	let offset = if index % 2 == 0 {
		-params.seed_vertical_offset
	} else {
		params.seed_vertical_offset
	};
	Vec2::new((index as f64 + 1.0) * spacing, height / 2.0 + offset)
}

impl NodeStore {
	pub fn initialize<R: Rng + ?Sized>(
		identities: Vec<SkillNode>,
		width: f64,
		height: f64,
		params: &SimulationParameters,
		rng: &mut R,
	) -> Self {
		let count = identities.len();
		let (jitter, speed) = (params.seed_jitter.abs(), params.seed_speed.abs());
		let bodies = (0..count)
			.map(|i| {
				let base = seed_position(i, count, width, height, params);
				Body {
					position: base
						+ Vec2::new(
							rng.gen_range(-jitter..=jitter),
							rng.gen_range(-jitter..=jitter),
						),
					velocity: Vec2::new(
						rng.gen_range(-speed..=speed),
						rng.gen_range(-speed..=speed),
					),
					radius: params.node_radius,
					mass: params.node_mass,
				}
			})
			.collect();

		Self {
			bodies,
			identities,
			width,
			height,
		}
	}

	/// Changes the bounds used by the next boundary pass. Nodes stay where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bodies.is_empty()
	}

	pub fn bodies(&self) -> &[Body] {
		&self.bodies
	}

	pub fn bodies_mut(&mut self) -> &mut [Body] {
		&mut self.bodies
	}

	pub fn identities(&self) -> &[SkillNode] {
		&self.identities
	}

	pub fn identity(&self, index: usize) -> Option<&SkillNode> {
		self.identities.get(index)
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn center(&self) -> Vec2 {
		Vec2::new(self.width / 2.0, self.height / 2.0)
	}

	/// Ring edges `(i, (i + 1) % len)`, one per node.
	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		let n = self.len();
		(0..n).map(move |i| (i, (i + 1) % n))
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn identities(n: usize) -> Vec<SkillNode> {
		(0..n)
			.map(|_| SkillNode {
				label: "n",
				icon: "*",
				target: "hero",
			})
			.collect()
	}

	#[test]
	fn seed_layout_spacing_is_reproducible() {
		let params = SimulationParameters::default();
		assert_eq!(
			seed_position(0, 5, 600.0, 220.0, &params),
			Vec2::new(100.0, 82.0)
		);
		assert_eq!(
			seed_position(1, 5, 600.0, 220.0, &params),
			Vec2::new(200.0, 138.0)
		);
		assert_eq!(
			seed_position(4, 5, 600.0, 220.0, &params),
			Vec2::new(500.0, 82.0)
		);
	}

	#[test]
	fn initialize_stays_within_jitter_of_the_layout() {
		let params = SimulationParameters::default();
		let mut rng = StdRng::seed_from_u64(7);
		let store = NodeStore::initialize(identities(5), 800.0, 220.0, &params, &mut rng);

		assert_eq!(store.len(), 5);
		for (i, body) in store.bodies().iter().enumerate() {
			let base = seed_position(i, 5, 800.0, 220.0, &params);
			assert!((body.position.x - base.x).abs() <= params.seed_jitter);
			assert!((body.position.y - base.y).abs() <= params.seed_jitter);
			assert!(body.velocity.x.abs() <= params.seed_speed);
			assert!(body.velocity.y.abs() <= params.seed_speed);
			assert_eq!(body.radius, params.node_radius);
			assert_eq!(body.mass, 1.0);
		}
	}

	#[test]
	fn same_seed_gives_same_layout() {
		let params = SimulationParameters::default();
		let a = NodeStore::initialize(
			identities(4),
			640.0,
			220.0,
			&params,
			&mut StdRng::seed_from_u64(3),
		);
		let b = NodeStore::initialize(
			identities(4),
			640.0,
			220.0,
			&params,
			&mut StdRng::seed_from_u64(3),
		);
		assert_eq!(a.bodies(), b.bodies());
	}

	#[test]
	fn resize_keeps_positions() {
		let params = SimulationParameters::default();
		let mut store = NodeStore::initialize(
			identities(3),
			800.0,
			220.0,
			&params,
			&mut StdRng::seed_from_u64(1),
		);
		let before = store.bodies().to_vec();
		store.resize(300.0, 220.0);
		assert_eq!(store.bodies(), &before[..]);
		assert_eq!(store.width(), 300.0);
		assert_eq!(store.center(), Vec2::new(150.0, 110.0));
	}

	#[test]
	fn edges_form_a_closed_ring() {
		let params = SimulationParameters::default();
		for n in 1..=9 {
			let store = NodeStore::initialize(
				identities(n),
				800.0,
				220.0,
				&params,
				&mut StdRng::seed_from_u64(n as u64),
			);
			let edges: Vec<_> = store.edges().collect();
			let expected: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
			assert_eq!(edges, expected);
		}
	}
}

//! Per-tick force generators. Each one adds into `forces[i]` for node `i`
//! and reads nothing but the current bodies.

use super::nodes::Body;
use super::params::SimulationParameters;
use super::types::Vec2;

/// Zeroes `forces` to one entry per body, then sums all three generators.
pub fn accumulate(
	bodies: &[Body],
	center: Vec2,
	params: &SimulationParameters,
	forces: &mut Vec<Vec2>,
) {
	forces.clear();
	forces.resize(bodies.len(), Vec2::ZERO);
	center_spring(bodies, center, params, forces);
	ring_spring(bodies, params, forces);
	repulsion(bodies, params, forces);
}

/// Hookean pull toward the circle of `rest_center_radius` around `center`.
pub fn center_spring(
	bodies: &[Body],
	center: Vec2,
	params: &SimulationParameters,
	forces: &mut [Vec2],
) {
	for (body, force) in bodies.iter().zip(forces.iter_mut()) {
		let delta = body.position - center;
		let distance = delta.length().max(params.distance_epsilon);
		let magnitude = -params.k_center * (distance - params.rest_center_radius);
		*force += delta / distance * magnitude;
	}
}

/// Linear spring between each node and the next one around the ring.
pub fn ring_spring(bodies: &[Body], params: &SimulationParameters, forces: &mut [Vec2]) {
	let n = bodies.len();
	for i in 0..n {
		let j = (i + 1) % n;
		let delta = bodies[j].position - bodies[i].position;
		let distance = delta.length().max(params.distance_epsilon);
		let pull = delta / distance * (params.k_edge * (distance - params.rest_edge_length));
		forces[i] += pull;
		forces[j] -= pull;
	}
}

/// Inverse-square push between every unordered pair. O(n²).
pub fn repulsion(bodies: &[Body], params: &SimulationParameters, forces: &mut [Vec2]) {
	let n = bodies.len();
	for i in 0..n {
		for j in (i + 1)..n {
			let push = pair_repulsion(bodies[i].position, bodies[j].position, params);
			forces[i] -= push;
			forces[j] += push;
		}
	}
}

/// Repulsion felt by `b` from `a`; `a` feels the negation.
pub fn pair_repulsion(a: Vec2, b: Vec2, params: &SimulationParameters) -> Vec2 {
	let delta = b - a;
	let distance_sq = delta.length_sq().max(params.min_distance_sq);
	let distance = distance_sq.sqrt();
	delta / distance * (params.k_repel / distance_sq)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn body(x: f64, y: f64) -> Body {
		Body {
			position: Vec2::new(x, y),
			velocity: Vec2::ZERO,
			radius: 32.0,
			mass: 1.0,
		}
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn center_spring_rests_on_the_circle() {
		let params = SimulationParameters::default();
		let center = Vec2::new(400.0, 110.0);
		let mut forces = vec![Vec2::ZERO; 3];
		let bodies = [body(520.0, 110.0), body(600.0, 110.0), body(450.0, 110.0)];
		center_spring(&bodies, center, &params, &mut forces);

		assert!(close(forces[0].length(), 0.0));
		// outside the circle: pulled in
		assert!(close(forces[1].x, -0.02 * 80.0));
		assert!(close(forces[1].y, 0.0));
		// inside the circle: pushed out
		assert!(close(forces[2].x, 0.02 * 70.0));
	}

	#[test]
	fn center_spring_is_finite_at_the_center() {
		let params = SimulationParameters::default();
		let mut forces = vec![Vec2::ZERO];
		center_spring(&[body(10.0, 10.0)], Vec2::new(10.0, 10.0), &params, &mut forces);
		assert!(forces[0].x.is_finite() && forces[0].y.is_finite());
		assert_eq!(forces[0], Vec2::ZERO);
	}

	#[test]
	fn ring_spring_pulls_stretched_pairs_together() {
		let params = SimulationParameters::default();
		let bodies = [body(0.0, 0.0), body(280.0, 0.0)];
		let mut forces = vec![Vec2::ZERO; 2];
		ring_spring(&bodies, &params, &mut forces);

		// two-node ring links 0→1 and 1→0, both stretched by 100
		assert!(close(forces[0].x, 2.0 * 0.04 * 100.0));
		assert!(close(forces[1].x, -2.0 * 0.04 * 100.0));
	}

	#[test]
	fn ring_spring_pushes_compressed_pairs_apart() {
		let params = SimulationParameters::default();
		let bodies = [body(0.0, 0.0), body(0.0, 80.0)];
		let mut forces = vec![Vec2::ZERO; 2];
		ring_spring(&bodies, &params, &mut forces);
		assert!(forces[0].y < 0.0);
		assert!(forces[1].y > 0.0);
	}

	#[test]
	fn ring_spring_only_links_neighbours() {
		let params = SimulationParameters::default();
		// node 2 sits exactly at rest length from both ring neighbours, node 0 and 2
		// are not linked, so their large separation adds nothing
		let bodies = [
			body(0.0, 0.0),
			body(180.0, 0.0),
			body(360.0, 0.0),
			body(180.0, 0.0),
		];
		let mut forces = vec![Vec2::ZERO; 4];
		ring_spring(&bodies, &params, &mut forces);
		for force in &forces {
			assert!(close(force.length(), 0.0), "{force:?}");
		}
	}

	#[test]
	fn repulsion_is_equal_and_opposite() {
		let params = SimulationParameters::default();
		let pairs = [
			(Vec2::new(10.0, 20.0), Vec2::new(40.0, -5.0)),
			(Vec2::new(300.0, 100.0), Vec2::new(301.0, 100.5)),
			(Vec2::new(-3.0, 7.0), Vec2::new(250.0, 90.0)),
		];
		for (a, b) in pairs {
			let bodies = [body(a.x, a.y), body(b.x, b.y)];
			let mut forces = vec![Vec2::ZERO; 2];
			repulsion(&bodies, &params, &mut forces);
			assert!(close(forces[0].x, -forces[1].x));
			assert!(close(forces[0].y, -forces[1].y));
			// pushes apart
			assert!((b - a).x * forces[1].x + (b - a).y * forces[1].y > 0.0);
		}
	}

	#[test]
	fn repulsion_follows_inverse_square() {
		let params = SimulationParameters::default();
		let near = pair_repulsion(Vec2::ZERO, Vec2::new(100.0, 0.0), &params);
		let far = pair_repulsion(Vec2::ZERO, Vec2::new(200.0, 0.0), &params);
		assert!(close(near.x, 11_000.0 / 10_000.0));
		assert!(close(near.x / far.x, 4.0));
	}

	#[test]
	fn repulsion_is_clamped_near_coincidence() {
		let params = SimulationParameters::default();
		let touching = pair_repulsion(Vec2::ZERO, Vec2::new(1.0, 0.0), &params);
		// distance² floored at 36, and the direction is divided by the floored distance
		assert!(close(touching.length(), 11_000.0 / 36.0 / 6.0));

		let coincident = pair_repulsion(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), &params);
		assert!(coincident.x.is_finite() && coincident.y.is_finite());
		assert_eq!(coincident, Vec2::ZERO);
	}

	#[test]
	fn accumulate_resets_between_calls() {
		let params = SimulationParameters::default();
		let bodies = [body(100.0, 100.0), body(300.0, 120.0), body(200.0, 40.0)];
		let center = Vec2::new(200.0, 110.0);
		let mut forces = vec![Vec2::new(1e6, 1e6); 7];
		accumulate(&bodies, center, &params, &mut forces);
		let first = forces.clone();
		accumulate(&bodies, center, &params, &mut forces);

		assert_eq!(forces.len(), 3);
		assert_eq!(forces, first);
	}
}

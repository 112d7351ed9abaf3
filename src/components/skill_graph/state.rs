use rand::Rng;

use super::forces;
use super::nodes::{Body, NodeStore};
use super::params::SimulationParameters;
use super::types::{SkillNode, Vec2};

/// Rate at which hover glow eases toward its target, per tick.
const GLOW_SPEED: f64 = 0.2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
	/// Node under the pointer, `None` when nothing is held.
	pub index: Option<usize>,
	/// Node position minus pointer position at grab time.
	pub offset: Vec2,
	/// Set by any pointer move while held; a release without it is a click.
	pub has_moved: bool,
}

/// Everything the skill graph needs between frames. Owned by one host and
/// handed by reference to the tick and to every pointer handler.
pub struct SkillGraphState {
	store: NodeStore,
	params: SimulationParameters,
	forces: Vec<Vec2>,
	pointer: Option<Vec2>,
	hovered: Option<usize>,
	glow: Vec<f64>,
	pub drag: DragState,
}

impl SkillGraphState {
	pub fn new<R: Rng + ?Sized>(
		nodes: &[SkillNode],
		width: f64,
		height: f64,
		params: SimulationParameters,
		rng: &mut R,
	) -> Self {
		let store = NodeStore::initialize(nodes.to_vec(), width, height, &params, rng);
		let count = store.len();
		Self {
			store,
			params,
			forces: Vec::with_capacity(count),
			pointer: None,
			hovered: None,
			glow: vec![0.0; count],
			drag: DragState::default(),
		}
	}

	pub fn bodies(&self) -> &[Body] {
		self.store.bodies()
	}

	pub fn nodes(&self) -> &[SkillNode] {
		self.store.identities()
	}

	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.store.edges()
	}

	pub fn width(&self) -> f64 {
		self.store.width()
	}

	pub fn height(&self) -> f64 {
		self.store.height()
	}

	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.index.is_some()
	}

	/// Eased 0..1 hover emphasis for node `index`.
	pub fn glow(&self, index: usize) -> f64 {
		self.glow.get(index).copied().unwrap_or(0.0)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.store.resize(width, height);
	}

	/// First node in index order within `padding` of the node rim.
	fn node_at(&self, point: Vec2, padding: f64) -> Option<usize> {
		self.store
			.bodies()
			.iter()
			.position(|body| body.position.distance(point) < body.radius + padding)
	}

	/// Last node in index order within `padding`, the one drawn on top.
	fn topmost_node_at(&self, point: Vec2, padding: f64) -> Option<usize> {
		self.store
			.bodies()
			.iter()
			.rposition(|body| body.position.distance(point) < body.radius + padding)
	}

	/// Advances the simulation one step and refreshes hover.
	pub fn tick(&mut self) {
		if self.store.is_empty() {
			return;
		}

		let center = self.store.center();
		forces::accumulate(self.store.bodies(), center, &self.params, &mut self.forces);

		if let Some(index) = self.drag.index {
			let target = self.pointer.map(|p| p + self.drag.offset);
			let body = &mut self.store.bodies_mut()[index];
			if let Some(target) = target {
				body.position = target;
			}
			body.velocity = Vec2::ZERO;
			self.forces[index] = Vec2::ZERO;
		}

		self.integrate();
		self.update_hover();
	}

	fn integrate(&mut self) {
		let SimulationParameters {
			damping,
			dt,
			restitution,
			..
		} = self.params;
		let (width, height) = (self.store.width(), self.store.height());

		for (body, force) in self.store.bodies_mut().iter_mut().zip(&self.forces) {
			let acceleration = *force / body.mass;
			body.velocity = (body.velocity + acceleration * dt) * damping;
			body.position += body.velocity * dt;

			let r = body.radius;
			if body.position.x < r {
				body.position.x = r;
				body.velocity.x *= -restitution;
			}
			if body.position.x > width - r {
				body.position.x = width - r;
				body.velocity.x *= -restitution;
			}
			if body.position.y < r {
				body.position.y = r;
				body.velocity.y *= -restitution;
			}
			if body.position.y > height - r {
				body.position.y = height - r;
				body.velocity.y *= -restitution;
			}
		}
	}

	fn update_hover(&mut self) {
		self.hovered = self
			.pointer
			.and_then(|p| self.topmost_node_at(p, self.params.hover_padding));

		for (i, glow) in self.glow.iter_mut().enumerate() {
			let target = if self.hovered == Some(i) { 1.0 } else { 0.0 };
			*glow += (target - *glow) * GLOW_SPEED;
			if *glow < 0.001 {
				*glow = 0.0;
			}
		}
	}

	/// Starts a drag if `point` lands on a node. Returns the grabbed index.
	pub fn pointer_down(&mut self, point: Vec2) -> Option<usize> {
		self.pointer = Some(point);
		let index = self.node_at(point, self.params.hit_padding)?;
		self.drag = DragState {
			index: Some(index),
			offset: self.store.bodies()[index].position - point,
			has_moved: false,
		};
		Some(index)
	}

	pub fn pointer_move(&mut self, point: Vec2) {
		self.pointer = Some(point);
		if self.drag.index.is_some() {
			self.drag.has_moved = true;
		}
	}

	/// Ends any drag. A release without movement is a click on the held node,
	/// whose identity is returned so the host can navigate.
	pub fn pointer_up(&mut self) -> Option<SkillNode> {
		let drag = std::mem::take(&mut self.drag);
		match drag.index {
			Some(index) if !drag.has_moved => self.store.identity(index).copied(),
			_ => None,
		}
	}

	/// Pointer left the surface. A held node stays held until release,
	/// otherwise hover is cleared.
	pub fn pointer_leave(&mut self) {
		if self.drag.index.is_some() {
			return;
		}
		self.pointer = None;
		self.hovered = None;
	}
}

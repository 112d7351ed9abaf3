use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D vector in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
	pub x: f64,
	pub y: f64,
}

impl Vec2 {
	pub const ZERO: Self = Self::new(0.0, 0.0);

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length_sq(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	pub fn length(self) -> f64 {
		self.length_sq().sqrt()
	}

	pub fn distance(self, other: Self) -> f64 {
		(other - self).length()
	}
}

impl Add for Vec2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Vec2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Vec2 {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		Self::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Vec2 {
	type Output = Self;

	fn div(self, rhs: f64) -> Self {
		Self::new(self.x / rhs, self.y / rhs)
	}
}

impl Neg for Vec2 {
	type Output = Self;

	fn neg(self) -> Self {
		Self::new(-self.x, -self.y)
	}
}

impl AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl SubAssign for Vec2 {
	fn sub_assign(&mut self, rhs: Self) {
		self.x -= rhs.x;
		self.y -= rhs.y;
	}
}

/// Identity payload bound to one node: what it shows and where a click leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillNode {
	pub label: &'static str,
	pub icon: &'static str,
	/// Id of the page section a click scrolls to.
	pub target: &'static str,
}

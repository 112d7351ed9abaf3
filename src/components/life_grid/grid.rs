use rand::Rng;

/// Smallest side the torus supports without a cell seeing itself as a neighbour.
const MIN_SIDE: usize = 3;

const NEIGHBOURS: [(isize, isize); 8] = [
	(-1, -1),
	(0, -1),
	(1, -1),
	(-1, 0),
	(1, 0),
	(-1, 1),
	(0, 1),
	(1, 1),
];

/// Conway's Game of Life (B3/S23) on a wrapping grid.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeGrid {
	width: usize,
	height: usize,
	cells: Vec<bool>,
	next: Vec<bool>,
	generation: u64,
	/// Consecutive generations with an unchanged population.
	stagnant_for: u32,
}

impl LifeGrid {
	pub fn new(width: usize, height: usize) -> Self {
		let (width, height) = (width.max(MIN_SIDE), height.max(MIN_SIDE));
		Self {
			width,
			height,
			cells: vec![false; width * height],
			next: vec![false; width * height],
			generation: 0,
			stagnant_for: 0,
		}
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn population(&self) -> usize {
		self.cells.iter().filter(|c| **c).count()
	}

	/// True once the population has held steady for `limit` generations or died out.
	pub fn is_stagnant(&self, limit: u32) -> bool {
		self.stagnant_for >= limit || self.population() == 0
	}

	fn index(&self, x: usize, y: usize) -> usize {
		y * self.width + x
	}

	pub fn is_alive(&self, x: usize, y: usize) -> bool {
		x < self.width && y < self.height && self.cells[self.index(x, y)]
	}

	/// Out-of-range coordinates are ignored.
	pub fn set(&mut self, x: usize, y: usize, alive: bool) {
		if x < self.width && y < self.height {
			let i = self.index(x, y);
			self.cells[i] = alive;
		}
	}

	pub fn toggle(&mut self, x: usize, y: usize) {
		self.set(x, y, !self.is_alive(x, y));
	}

	/// Fills each cell alive with probability `density` and restarts the generation count.
	pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
		let density = density.clamp(0.0, 1.0);
		for cell in &mut self.cells {
			*cell = rng.gen_bool(density);
		}
		self.generation = 0;
		self.stagnant_for = 0;
	}

	pub fn live_neighbours(&self, x: usize, y: usize) -> usize {
		let (w, h) = (self.width as isize, self.height as isize);
		NEIGHBOURS
			.iter()
			.filter(|(dx, dy)| {
				let nx = (x as isize + dx).rem_euclid(w) as usize;
				let ny = (y as isize + dy).rem_euclid(h) as usize;
				self.cells[self.index(nx, ny)]
			})
			.count()
	}

	pub fn step(&mut self) {
		let before = self.population();
		for y in 0..self.height {
			for x in 0..self.width {
				let alive = self.cells[self.index(x, y)];
				let next = matches!((alive, self.live_neighbours(x, y)), (true, 2) | (_, 3));
				let i = self.index(x, y);
				self.next[i] = next;
			}
		}
		std::mem::swap(&mut self.cells, &mut self.next);
		self.generation += 1;

		if self.population() == before {
			self.stagnant_for = self.stagnant_for.saturating_add(1);
		} else {
			self.stagnant_for = 0;
		}
	}

	/// Changes the grid size, keeping cells in the overlapping top-left region.
	pub fn resize(&mut self, width: usize, height: usize) {
		let (width, height) = (width.max(MIN_SIDE), height.max(MIN_SIDE));
		if (width, height) == (self.width, self.height) {
			return;
		}
		let mut cells = vec![false; width * height];
		for y in 0..height.min(self.height) {
			for x in 0..width.min(self.width) {
				cells[y * width + x] = self.cells[self.index(x, y)];
			}
		}
		self.cells = cells;
		self.next = vec![false; width * height];
		self.width = width;
		self.height = height;
	}

	pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.cells
			.iter()
			.enumerate()
			.filter(|(_, alive)| **alive)
			.map(|(i, _)| (i % self.width, i / self.width))
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn with_cells(width: usize, height: usize, cells: &[(usize, usize)]) -> LifeGrid {
		let mut grid = LifeGrid::new(width, height);
		for &(x, y) in cells {
			grid.set(x, y, true);
		}
		grid
	}

	fn sorted_cells(grid: &LifeGrid) -> Vec<(usize, usize)> {
		let mut cells: Vec<_> = grid.live_cells().collect();
		cells.sort_unstable();
		cells
	}

	#[test]
	fn blinker_oscillates() {
		let mut grid = with_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]);
		grid.step();
		assert_eq!(sorted_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);
		grid.step();
		assert_eq!(sorted_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);
		assert_eq!(grid.generation(), 2);
	}

	#[test]
	fn block_is_still_and_goes_stagnant() {
		let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
		let mut grid = with_cells(6, 6, &block);
		for _ in 0..5 {
			grid.step();
		}
		assert_eq!(sorted_cells(&grid), block.to_vec());
		assert!(grid.is_stagnant(5));
		assert!(!grid.is_stagnant(6));
	}

	#[test]
	fn lonely_cells_die() {
		let mut grid = with_cells(5, 5, &[(0, 0), (3, 3)]);
		assert!(!grid.is_stagnant(100));
		grid.step();
		assert_eq!(grid.population(), 0);
		assert!(grid.is_stagnant(100));
	}

	#[test]
	fn neighbours_wrap_around_edges() {
		let grid = with_cells(5, 5, &[(4, 4), (4, 0), (0, 4)]);
		assert_eq!(grid.live_neighbours(0, 0), 3);
		assert_eq!(grid.live_neighbours(2, 2), 0);
	}

	#[test]
	fn glider_crosses_the_torus() {
		let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
		let mut grid = with_cells(8, 8, &glider);
		let start = sorted_cells(&grid);
		// one diagonal cell every four generations
		for _ in 0..32 {
			grid.step();
			assert_eq!(grid.population(), 5);
		}
		assert_eq!(sorted_cells(&grid), start);
	}

	#[test]
	fn randomize_respects_density_extremes() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut grid = LifeGrid::new(10, 10);
		grid.randomize(1.0, &mut rng);
		assert_eq!(grid.population(), 100);
		grid.randomize(0.0, &mut rng);
		assert_eq!(grid.population(), 0);
		grid.randomize(0.3, &mut rng);
		assert!(grid.population() > 0 && grid.population() < 100);
		assert_eq!(grid.generation(), 0);
	}

	#[test]
	fn toggle_and_bounds() {
		let mut grid = LifeGrid::new(4, 4);
		grid.toggle(1, 1);
		assert!(grid.is_alive(1, 1));
		grid.toggle(1, 1);
		assert!(!grid.is_alive(1, 1));
		grid.set(9, 9, true);
		assert!(!grid.is_alive(9, 9));
		assert_eq!(grid.population(), 0);
	}

	#[test]
	fn resize_keeps_overlap() {
		let mut grid = with_cells(6, 6, &[(1, 1), (5, 5)]);
		grid.resize(4, 8);
		assert_eq!((grid.width(), grid.height()), (4, 8));
		assert_eq!(sorted_cells(&grid), vec![(1, 1)]);

		grid.resize(1, 1);
		assert_eq!((grid.width(), grid.height()), (3, 3));
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::grid::LifeGrid;
use crate::theme::{Theme, use_theme};

const CELL_SIZE: f64 = 8.0;
const SEED_DENSITY: f64 = 0.22;
/// Animation frames per generation.
const FRAMES_PER_GENERATION: u32 = 6;
/// Generations with a flat population before reseeding.
const STAGNATION_LIMIT: u32 = 40;
const FALLBACK_WIDTH: f64 = 480.0;

fn grid_size(width: f64, height: f64) -> (usize, usize) {
	(
		(width / CELL_SIZE).floor() as usize,
		(height / CELL_SIZE).floor() as usize,
	)
}

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH)
}

fn render(grid: &LifeGrid, ctx: &CanvasRenderingContext2d, theme: Theme) {
	let (w, h) = (
		grid.width() as f64 * CELL_SIZE,
		grid.height() as f64 * CELL_SIZE,
	);
	ctx.clear_rect(0.0, 0.0, w, h);
	ctx.set_fill_style_str(match theme {
		Theme::Dark => "rgba(129, 140, 248, 0.85)",
		Theme::Light => "rgba(79, 70, 229, 0.75)",
	});
	for (x, y) in grid.live_cells() {
		ctx.fill_rect(
			x as f64 * CELL_SIZE + 1.0,
			y as f64 * CELL_SIZE + 1.0,
			CELL_SIZE - 2.0,
			CELL_SIZE - 2.0,
		);
	}
}

/// Decorative Game of Life for the hero. Clicking a cell toggles it.
#[component]
pub fn LifeGridCanvas(#[prop(default = 320.0)] height: f64) -> impl IntoView {
	let theme = use_theme();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let grid: Rc<RefCell<Option<LifeGrid>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (grid_init, animate_init) = (grid.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			warn!("No window, life grid disabled");
			return;
		};
		let width = parent_width(&canvas);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("Canvas 2d context unavailable, life grid disabled");
			return;
		};

		let (cols, rows) = grid_size(width, height);
		let mut seeded = LifeGrid::new(cols, rows);
		seeded.randomize(SEED_DENSITY, &mut rand::thread_rng());
		info!("Life grid mounted: {cols}x{rows} cells");
		*grid_init.borrow_mut() = Some(seeded);

		let (grid_anim, animate_inner, canvas_anim) =
			(grid_init.clone(), animate_init.clone(), canvas.clone());
		let mut frame = 0u32;
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !canvas_anim.is_connected() {
				grid_anim.borrow_mut().take();
				info!("Life grid stopped");
				return;
			}
			if let Some(ref mut grid) = *grid_anim.borrow_mut() {
				let width = parent_width(&canvas_anim);
				if width as u32 != canvas_anim.width() {
					canvas_anim.set_width(width as u32);
					let (cols, rows) = grid_size(width, height);
					grid.resize(cols, rows);
				}

				frame = frame.wrapping_add(1);
				if frame % FRAMES_PER_GENERATION == 0 {
					grid.step();
					if grid.is_stagnant(STAGNATION_LIMIT) {
						debug!("Life grid stagnant at generation {}, reseeding", grid.generation());
						grid.randomize(SEED_DENSITY, &mut rand::thread_rng());
					}
				}
				render(grid, &ctx, theme.get_untracked());
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let grid_click = grid.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if x < 0.0 || y < 0.0 {
			return;
		}
		if let Some(ref mut grid) = *grid_click.borrow_mut() {
			grid.toggle((x / CELL_SIZE) as usize, (y / CELL_SIZE) as usize);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="life-grid-canvas"
			role="img"
			aria-label="Animated Game of Life pattern"
			on:click=on_click
			style="display: block; width: 100%; cursor: crosshair;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grid_size_drops_partial_cells() {
		assert_eq!(grid_size(480.0, 320.0), (60, 40));
		assert_eq!(grid_size(487.0, 15.0), (60, 1));
	}
}

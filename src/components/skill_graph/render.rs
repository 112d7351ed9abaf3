use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SkillGraphState;
use crate::theme::Theme;

const HINT: &str = "Drag nodes • Click to jump";

struct Palette {
	ring: &'static str,
	node: &'static str,
	text: &'static str,
	label: &'static str,
	edge: &'static str,
}

impl Palette {
	fn for_theme(theme: Theme) -> Self {
		match theme {
			Theme::Dark => Self {
				ring: "rgba(255, 255, 255, 0.11)",
				node: "rgb(11, 17, 32)",
				text: "rgb(240, 240, 240)",
				label: "rgba(255, 255, 255, 0.63)",
				edge: "rgba(255, 255, 255, 0.12)",
			},
			Theme::Light => Self {
				ring: "rgba(0, 0, 0, 0.09)",
				node: "rgb(255, 255, 255)",
				text: "rgb(30, 30, 30)",
				label: "rgba(80, 90, 120, 0.63)",
				edge: "rgba(60, 70, 120, 0.24)",
			},
		}
	}
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SkillGraphState, ctx: &CanvasRenderingContext2d, theme: Theme) {
	let palette = Palette::for_theme(theme);
	ctx.clear_rect(0.0, 0.0, state.width(), state.height());
	draw_edges(state, ctx, &palette);
	draw_nodes(state, ctx, &palette);

	ctx.set_fill_style_str(palette.label);
	ctx.set_font("11px sans-serif");
	ctx.set_text_align("right");
	ctx.set_text_baseline("bottom");
	let _ = ctx.fill_text(HINT, state.width() - 8.0, state.height() - 6.0);
}

fn draw_edges(state: &SkillGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let bodies = state.bodies();
	ctx.set_stroke_style_str(palette.edge);
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for (i, j) in state.edges() {
		if i == j {
			continue;
		}
		let (a, b) = (bodies[i].position, bodies[j].position);
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
	}
	ctx.stroke();
}

fn draw_nodes(state: &SkillGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	for (i, (body, node)) in state.bodies().iter().zip(state.nodes()).enumerate() {
		let (x, y, r) = (body.position.x, body.position.y, body.radius);
		let t = ease_out_cubic(state.glow(i));

		// soft glow, widening as hover eases in
		let glow_radius = r + 14.0 + 6.0 * t;
		match ctx.create_radial_gradient(x, y, r * 0.8, x, y, glow_radius) {
			Ok(gradient) => {
				let alpha = 0.35 + 0.25 * t;
				let _ = gradient.add_color_stop(0.0, &format!("rgba(99, 102, 241, {alpha})"));
				let _ = gradient.add_color_stop(1.0, "rgba(99, 102, 241, 0)");
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
			}
			Err(_) => ctx.set_fill_style_str("rgba(99, 102, 241, 0.35)"),
		}
		ctx.begin_path();
		let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(palette.node);
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(x, y, r + 1.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(palette.ring);
		ctx.set_line_width(2.0);
		ctx.stroke();

		if t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, r + 3.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(99, 102, 241, {})", 0.7 * t));
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(palette.text);
		ctx.set_font("14px sans-serif");
		let _ = ctx.fill_text(node.icon, x, y - 2.0);
		ctx.set_fill_style_str(palette.label);
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(node.label, x, y + 18.0);
	}
}

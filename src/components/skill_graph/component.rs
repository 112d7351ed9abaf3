use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::params::SimulationParameters;
use super::render;
use super::state::SkillGraphState;
use super::types::{SkillNode, Vec2};
use crate::theme::use_theme;

const FALLBACK_WIDTH: f64 = 800.0;

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(FALLBACK_WIDTH)
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Vec2 {
	let rect = canvas.get_bounding_client_rect();
	Vec2::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn cursor_for(state: &SkillGraphState) -> &'static str {
	if state.is_dragging() {
		"grabbing"
	} else if state.hovered().is_some() {
		"pointer"
	} else {
		"grab"
	}
}

fn update_cursor(canvas: &HtmlCanvasElement, state: &SkillGraphState) {
	// `ElementExt::style` from the leptos prelude shadows the web-sys getter
	let _ = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor_for(state));
}

type EventClosure = Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>>;

/// Draggable ring of skill nodes. A click without drag calls `on_navigate`
/// with the node's target section id.
#[component]
pub fn SkillGraphCanvas(
	#[prop(into)] nodes: Signal<Vec<SkillNode>>,
	#[prop(into)] on_navigate: Callback<&'static str>,
	#[prop(default = 220.0)] height: f64,
	#[prop(optional)] params: SimulationParameters,
) -> impl IntoView {
	let theme = use_theme();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SkillGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let move_cb: EventClosure = Rc::new(RefCell::new(None));
	let up_cb: EventClosure = Rc::new(RefCell::new(None));
	let state_init = state.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			warn!("No window, skill graph disabled");
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
			warn!("Canvas 2d context unavailable, skill graph disabled");
			return;
		};

		let nodes = nodes.get_untracked();
		*state_init.borrow_mut() = Some(SkillGraphState::new(
			&nodes,
			width,
			height,
			params,
			&mut rand::thread_rng(),
		));
		info!("Skill graph mounted: {} nodes, {width}x{height}", nodes.len());

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let width = parent_width(&canvas_resize);
			canvas_resize.set_width(width as u32);
			canvas_resize.set_height(height as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(width, height);
			}
			debug!("Skill graph resized to {width}x{height}");
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			if let Err(err) =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
			{
				warn!("Could not listen for resize: {err:?}");
			}
		}

		// moves and releases are taken from the whole window so a drag
		// carries on past the canvas edge
		let (state_mm, canvas_mm) = (state_init.clone(), canvas.clone());
		*move_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut s) = *state_mm.borrow_mut() {
				s.pointer_move(pointer_position(&canvas_mm, &ev));
				update_cursor(&canvas_mm, s);
			}
		}));
		let (state_mu, canvas_mu) = (state_init.clone(), canvas.clone());
		*up_cb.borrow_mut() = Some(Closure::new(move |_: MouseEvent| {
			let clicked = state_mu.borrow_mut().as_mut().and_then(|s| {
				let clicked = s.pointer_up();
				update_cursor(&canvas_mu, s);
				clicked
			});
			if let Some(node) = clicked {
				info!("Skill node {} clicked, going to #{}", node.label, node.target);
				on_navigate.run(node.target);
			}
		}));
		for (event, cb) in [("mousemove", &move_cb), ("mouseup", &up_cb)] {
			if let Some(ref cb) = *cb.borrow() {
				if let Err(err) =
					window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
				{
					warn!("Could not listen for {event}: {err:?}");
				}
			}
		}

		let (state_anim, animate_inner, canvas_anim) =
			(state_init.clone(), animate.clone(), canvas.clone());
		let (resize_inner, move_inner, up_inner) = (resize_cb.clone(), move_cb.clone(), up_cb.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			// unmounted: detach window listeners and stop rescheduling
			if !canvas_anim.is_connected() {
				if let Some(win) = web_sys::window() {
					if let Some(cb) = resize_inner.borrow().as_ref() {
						let _ = win
							.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
					}
					for (event, cb) in [("mousemove", &move_inner), ("mouseup", &up_inner)] {
						if let Some(cb) = cb.borrow().as_ref() {
							let _ = win
								.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
						}
					}
				}
				state_anim.borrow_mut().take();
				info!("Skill graph stopped");
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx, theme.get_untracked());
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(index) = s.pointer_down(pointer_position(&canvas, &ev)) {
				debug!("Grabbed skill node {}", s.nodes()[index].label);
			}
			update_cursor(&canvas, s);
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state.borrow_mut() {
			s.pointer_leave();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-graph-canvas"
			role="img"
			aria-label="Skill graph: drag the nodes, click one to jump to its section"
			on:mousedown=on_mousedown
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; cursor: grab;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	const NODES: [SkillNode; 2] = [
		SkillNode {
			label: "Web Dev",
			icon: "🧩",
			target: "projects",
		},
		SkillNode {
			label: "Contact",
			icon: "✉️",
			target: "contact",
		},
	];

	#[test]
	fn cursor_follows_interaction() {
		let mut s = SkillGraphState::new(
			&NODES,
			800.0,
			220.0,
			SimulationParameters::default(),
			&mut StdRng::seed_from_u64(3),
		);
		assert_eq!(cursor_for(&s), "grab");

		let on_node = s.bodies()[1].position;
		s.pointer_move(on_node);
		s.tick();
		assert_eq!(cursor_for(&s), "pointer");

		s.pointer_down(s.bodies()[1].position);
		assert_eq!(cursor_for(&s), "grabbing");
		s.pointer_up();
		s.pointer_leave();
		assert_eq!(cursor_for(&s), "grab");
	}
}

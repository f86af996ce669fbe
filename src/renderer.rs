// Canvas 2d renderer for the particle field: distance-faded links between
// nearby particles first, then the particles themselves as glowing dots.

use crate::color::Color;
use crate::particle::Particle;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

// Pairs closer than this many pixels get a link.
pub const LINK_DISTANCE: f64 = 120.0;

const NODE_RADIUS: f64 = 3.0;
const NODE_GLOW_BLUR: f64 = 8.0;
const CYAN: Color = Color::from_u32(0x00ffffff);

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2d context from the canvas. A canvas without one means we
    // cannot draw at all, so the component refuses to mount.
    pub fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Renderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Renderer { context })
    }

    pub fn render(&self, particles: &[Particle], width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        self.render_links(particles);
        self.render_nodes(particles)
    }

    fn render_links(&self, particles: &[Particle]) {
        // The node pass leaves a shadow configured on the context; links
        // should stay crisp.
        self.context.set_shadow_blur(0.0);
        self.context.set_line_width(1.0);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dist =
                    vecmath::vec2_len(vecmath::vec2_sub(particles[i].pos, particles[j].pos));
                if let Some(alpha) = link_alpha(dist) {
                    self.context
                        .set_stroke_style(&JsValue::from_str(&CYAN.to_css_with_alpha(alpha)));
                    self.context.begin_path();
                    self.context
                        .move_to(particles[i].pos[0], particles[i].pos[1]);
                    self.context
                        .line_to(particles[j].pos[0], particles[j].pos[1]);
                    self.context.stroke();
                }
            }
        }
    }

    fn render_nodes(&self, particles: &[Particle]) -> Result<(), JsValue> {
        self.context
            .set_fill_style(&JsValue::from_str(&CYAN.to_css()));
        self.context.set_shadow_blur(NODE_GLOW_BLUR);
        self.context.set_shadow_color(&CYAN.to_css());
        for p in particles {
            self.context.begin_path();
            self.context.arc(p.pos[0], p.pos[1], NODE_RADIUS, 0.0, PI * 2.0)?;
            self.context.fill();
        }
        Ok(())
    }
}

// Link opacity fades linearly with distance and cuts off (strictly) at
// LINK_DISTANCE.
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some(1.0 - distance / LINK_DISTANCE)
    } else {
        None
    }
}

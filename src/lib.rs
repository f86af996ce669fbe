// "Neural Lights": an animated neural-network particle field drawn on a
// full-viewport canvas, with a static title overlay. The component owns its
// animation loop and resize subscription and releases both on stop().

mod utils;

pub mod color;
pub mod particle;
pub mod renderer;

use particle::{ParticleField, NODE_COUNT};
use renderer::Renderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, HtmlElement, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[wasm_bindgen]
pub struct NeuralLights {
    canvas: HtmlCanvasElement,
    overlay: HtmlElement,
    field: Rc<RefCell<ParticleField>>,
    size: Rc<Cell<(f64, f64)>>,
    // Moved into the frame closure when the loop starts.
    renderer: Option<Renderer>,
    // Handle of the pending animation frame request, shared with the frame
    // closure so stop() can cancel whatever is in flight.
    raf_id: Rc<Cell<Option<i32>>>,
    // The frame closure reschedules itself, so it has to live somewhere it
    // can reach its own reference from inside the callback.
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl NeuralLights {
    // Sizes the canvas to the window, builds the particle field and the
    // title overlay. Fails if the document or the 2d context is missing.
    pub fn new(canvas: HtmlCanvasElement) -> Result<NeuralLights, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let (width, height) = viewport_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        canvas.style().set_property("background", "#000")?;

        let renderer = Renderer::new(&canvas)?;
        let overlay = build_overlay(&window)?;
        let field = ParticleField::new(NODE_COUNT, width, height);

        Ok(NeuralLights {
            canvas,
            overlay,
            field: Rc::new(RefCell::new(field)),
            size: Rc::new(Cell::new((width, height))),
            renderer: Some(renderer),
            raf_id: Rc::new(Cell::new(None)),
            frame: Rc::new(RefCell::new(None)),
            on_resize: None,
        })
    }

    // Subscribes to window resizes and kicks off the animation loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let renderer = self
            .renderer
            .take()
            .ok_or_else(|| JsValue::from_str("component already started"))?;

        // Resize only keeps the backing store in sync with the window; the
        // particles are left alone and any now out of bounds reflect back in
        // on later steps.
        let on_resize = {
            let canvas = self.canvas.clone();
            let size = self.size.clone();
            Closure::wrap(Box::new(move || {
                let window = web_sys::window().unwrap();
                if let Ok((width, height)) = viewport_size(&window) {
                    size.set((width, height));
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);

        let field = self.field.clone();
        let size = self.size.clone();
        let raf_id = self.raf_id.clone();
        let frame = self.frame.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let _timer = Timer::new("NeuralLights::frame");
            let (width, height) = size.get();
            {
                let mut field = field.borrow_mut();
                // Draw the current positions, then move them.
                if let Err(err) = renderer.render(field.particles(), width, height) {
                    console::error_1(&err);
                    return;
                }
                field.advance(width, height);
            }
            let window = web_sys::window().unwrap();
            let id = window
                .request_animation_frame(
                    frame
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref::<js_sys::Function>(),
                )
                .unwrap();
            raf_id.set(Some(id));
        }) as Box<dyn FnMut()>));

        let id = window.request_animation_frame(
            self.frame
                .borrow()
                .as_ref()
                .unwrap()
                .as_ref()
                .unchecked_ref::<js_sys::Function>(),
        )?;
        self.raf_id.set(Some(id));
        Ok(())
    }

    // Cancels the pending frame, drops the frame closure, removes the resize
    // listener and the overlay. Safe to call more than once.
    pub fn stop(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if let Some(id) = self.raf_id.take() {
            window.cancel_animation_frame(id)?;
        }
        self.frame.borrow_mut().take();
        if let Some(on_resize) = self.on_resize.take() {
            window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        }
        if let Some(parent) = self.overlay.parent_node() {
            parent.remove_child(&self.overlay)?;
        }
        Ok(())
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("inner_width is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("inner_height is not a number"))?;
    Ok((width, height))
}

// The title sits in its own layer above the canvas and is laid out by CSS,
// never redrawn per frame.
fn build_overlay(window: &Window) -> Result<HtmlElement, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let overlay = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    overlay.set_text_content(Some("Neural Lights ⚡"));
    let style = overlay.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("right", "0")?;
    style.set_property("bottom", "0")?;
    style.set_property("display", "flex")?;
    style.set_property("align-items", "center")?;
    style.set_property("justify-content", "center")?;
    style.set_property("color", "#22d3ee")?;
    style.set_property("font-weight", "bold")?;
    style.set_property("font-size", "1.875rem")?;
    style.set_property("letter-spacing", "0.1em")?;
    style.set_property("pointer-events", "none")?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&overlay)?;
    Ok(overlay)
}

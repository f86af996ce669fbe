//! Browser-side lifecycle test, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use neural_lights::NeuralLights;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_sizes_and_tears_down() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    body.append_child(&canvas).unwrap();

    let mut lights = NeuralLights::new(canvas.clone()).unwrap();

    // Canvas backing store matches the window on mount.
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);

    // The title overlay exists while mounted and is gone after stop().
    let text = body.text_content().unwrap_or_default();
    assert!(text.contains("Neural Lights"));

    lights.start().unwrap();
    lights.stop().unwrap();

    let text = body.text_content().unwrap_or_default();
    assert!(!text.contains("Neural Lights"));

    // stop() is safe to call twice.
    lights.stop().unwrap();

    body.remove_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn resize_tracks_window_dimensions() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    body.append_child(&canvas).unwrap();

    let mut lights = NeuralLights::new(canvas.clone()).unwrap();
    lights.start().unwrap();

    // Knock the backing store out of sync, then fire a resize; the listener
    // must bring it back to the current window dimensions.
    canvas.set_width(1);
    canvas.set_height(1);
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();

    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);

    lights.stop().unwrap();

    // The listener is gone after stop(); a later resize leaves the canvas
    // alone.
    canvas.set_width(1);
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(canvas.width(), 1);

    body.remove_child(&canvas).unwrap();
}

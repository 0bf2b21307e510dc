/// Whirl Web - canvas front end for the rotating cube demo
///
/// Mounts on an existing canvas element, then redraws the wireframe at
/// a fixed 60 frame per second cadence driven by setTimeout. The page
/// only needs to load the module; the start hook boots everything.

use nalgebra::Point2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use whirl_core::{render_frame, AnimationState, Cube, Viewport, FRAME_INTERVAL_MS};

/// Canvas background fill.
const BACKGROUND: &str = "#101010";

/// Stroke and marker color.
const FOREGROUND: &str = "#50FF50";

/// Stroke width for cube edges, in pixels.
const LINE_WIDTH: f64 = 3.0;

/// Side of the square drawn for a vertex marker, in pixels.
const POINT_SIZE: f64 = 20.0;

/// The canvas is square; this is its side in pixels.
const CANVAS_SIZE: u32 = 800;

/// Element id the demo mounts on.
const CANVAS_ID: &str = "game";

/// Shared handle to the self-rescheduling animation callback.
type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drawing surface over a 2D canvas context.
#[derive(Clone)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
        })
    }

    /// Surface dimensions as seen by the projection pipeline.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Fill the whole canvas with the background color.
    pub fn clear(&self) {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    /// Stroke one cube edge.
    pub fn draw_line(&self, from: Point2<f64>, to: Point2<f64>) {
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.set_stroke_style_str(FOREGROUND);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    /// Mark a vertex with a filled square centered on `p`.
    pub fn draw_point(&self, p: Point2<f64>) {
        self.ctx.set_fill_style_str(FOREGROUND);
        self.ctx.fill_rect(
            p.x - POINT_SIZE / 2.0,
            p.y - POINT_SIZE / 2.0,
            POINT_SIZE,
            POINT_SIZE,
        );
    }
}

/// The browser-facing application: cube plus canvas surface.
#[wasm_bindgen]
pub struct WebApp {
    cube: Cube,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WebApp {
    /// Look the canvas up by element id and size it for the demo.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebApp, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document to mount on"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("element '{canvas_id}' is not a canvas")))?;

        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);

        Ok(WebApp {
            cube: Cube::corner_standing(),
            surface: CanvasSurface::new(&canvas)?,
        })
    }

    /// Kick off the animation. Each tick strokes one frame and books
    /// the next one; a failed booking ends the animation.
    pub fn start(&self) -> Result<(), JsValue> {
        let cube = self.cube;
        let surface = self.surface.clone();
        let mut state = AnimationState::new();

        let handle: TickClosure = Rc::new(RefCell::new(None));
        let inner = handle.clone();

        *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let (segments, next) = render_frame(&cube, state, surface.viewport());
            surface.clear();
            for segment in &segments {
                surface.draw_line(segment.start, segment.end);
            }
            state = next;
            let _ = schedule(&inner);
        }) as Box<dyn FnMut()>));

        schedule(&handle)
    }
}

/// Book the animation callback one frame interval from now.
fn schedule(tick: &TickClosure) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cell = tick.borrow();
    let closure = cell
        .as_ref()
        .ok_or_else(|| JsValue::from_str("animation closure gone"))?;

    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        FRAME_INTERVAL_MS as i32,
    )?;
    Ok(())
}

/// Boot the demo as soon as the module loads.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    WebApp::new(CANVAS_ID)?.start()
}

pub mod runner;

pub use runner::TweenRunner;

use js_sys::Function;
use tweener::{Curve, Tween, TweenConfig, TweenError};
use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger. Safe to call more than once.
#[wasm_bindgen]
pub fn tweener_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("tweener: initialized");
}

/// A tween driven from JavaScript.
///
/// ```js
/// const t = new WebTween(2, 0, 100, 0, 0.5, v => el.style.left = `${v}px`, () => done());
/// function frame(ms) {
///     if (t.tick(dt(ms))) requestAnimationFrame(frame);
/// }
/// ```
#[wasm_bindgen]
pub struct WebTween {
    runner: TweenRunner<Tween>,
}

#[wasm_bindgen]
impl WebTween {
    /// `curve` is the numeric id: 0 linear, 1 ease-in, 2 ease-out,
    /// 3 ease-in-out, 4 bounce-in, 5 bounce-out.
    #[wasm_bindgen(constructor)]
    pub fn new(
        curve: u32,
        from: f32,
        to: f32,
        delay: f32,
        duration: f32,
        on_value: Option<Function>,
        on_complete: Option<Function>,
    ) -> Result<WebTween, JsValue> {
        let curve = Curve::try_from(curve).map_err(to_js)?;
        let config = TweenConfig {
            curve,
            from,
            to,
            delay,
            duration,
        };
        Self::start(config, on_value, on_complete)
    }

    /// Build from a JSON description, e.g. `{"curve":"bounce_out","duration":0.4}`.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(
        json: &str,
        on_value: Option<Function>,
        on_complete: Option<Function>,
    ) -> Result<WebTween, JsValue> {
        let config = TweenConfig::from_json(json).map_err(to_js)?;
        Self::start(config, on_value, on_complete)
    }

    /// Advance by `dt` unscaled seconds. Returns true while more frames are
    /// wanted.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.runner.tick(dt)
    }

    pub fn dispose(&mut self) {
        self.runner.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f32 {
        self.runner.tween().value()
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.runner.tween().progress()
    }

    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool {
        self.runner.tween().is_finished()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 {
        self.runner.frames()
    }
}

impl WebTween {
    fn start(
        config: TweenConfig,
        on_value: Option<Function>,
        on_complete: Option<Function>,
    ) -> Result<WebTween, JsValue> {
        let mut builder = Tween::builder(config.curve, config.duration)
            .from_to(config.from, config.to)
            .delay(config.delay);

        if let Some(f) = on_value {
            builder = builder.on_value(move |v| {
                if let Err(err) = f.call1(&JsValue::NULL, &JsValue::from_f64(v as f64)) {
                    log::warn!("tween value callback threw: {:?}", err);
                }
            });
        }
        if let Some(f) = on_complete {
            builder = builder.on_complete(move || {
                if let Err(err) = f.call0(&JsValue::NULL) {
                    log::warn!("tween completion callback threw: {:?}", err);
                }
            });
        }

        let tween = builder.start().map_err(to_js)?;
        Ok(WebTween {
            runner: TweenRunner::new(tween),
        })
    }
}

fn to_js(err: TweenError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

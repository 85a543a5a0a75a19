//! Interval ownership for the two refresh cadences. Each live interval is
//! held by an `IntervalHandle` whose `Drop` clears it, and the widget owns
//! exactly one `RefreshDriver` at a time, so a stale interval id can never
//! outlive (or be cleared instead of) the driver that registered it.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::model::RefreshMode;

/// Full-refresh cadence (digital text, date, and hands).
pub const BASE_PERIOD_MS: i32 = 1000;
/// Second-hand sweep cadence in smooth mode.
pub const SWEEP_PERIOD_MS: i32 = 50;

/// A registered interval plus the closure backing it. Clearing happens in
/// `Drop`, never by handing the raw id around.
pub struct IntervalHandle {
    window: Window,
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn new(window: &Window, period_ms: i32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let tick = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            window: window.clone(),
            id,
            _tick: tick,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// The one live refresh driver. Replacing or dropping the value cancels
/// all of its intervals.
pub enum RefreshDriver {
    // Handles are held only so their Drop clears the intervals.
    Basic {
        _tick: IntervalHandle,
    },
    Smooth {
        _text: IntervalHandle,
        _sweep: IntervalHandle,
    },
}

impl RefreshDriver {
    /// 1s full refresh.
    pub fn basic(window: &Window, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        Ok(Self::Basic {
            _tick: IntervalHandle::new(window, BASE_PERIOD_MS, tick)?,
        })
    }

    /// 1s text/hour/minute refresh plus the 50ms second-hand sweep.
    pub fn smooth(
        window: &Window,
        text: impl FnMut() + 'static,
        sweep: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        Ok(Self::Smooth {
            _text: IntervalHandle::new(window, BASE_PERIOD_MS, text)?,
            _sweep: IntervalHandle::new(window, SWEEP_PERIOD_MS, sweep)?,
        })
    }
}

/// Startup policy: prefer the smooth driver; if it fails to start, report
/// the error and start the basic driver instead, exactly once. Returns the
/// driver paired with the mode that actually came up.
pub fn start_preferring<D, E>(
    smooth: impl FnOnce() -> Result<D, E>,
    basic: impl FnOnce() -> Result<D, E>,
    on_fallback: impl FnOnce(&E),
) -> Result<(D, RefreshMode), E> {
    match smooth() {
        Ok(driver) => Ok((driver, RefreshMode::Smooth)),
        Err(e) => {
            on_fallback(&e);
            basic().map(|driver| (driver, RefreshMode::Basic))
        }
    }
}

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{AnalogClock, ControlsPanel, DigitalClock};
use crate::clock::{CalendarDate, TimeSample};
use crate::model::{ClockAction, ClockState, RefreshMode};
use crate::scheduler::{self, RefreshDriver};
use crate::util::{self, Shortcut};

fn fresh_tick() -> ClockAction {
    ClockAction::Tick {
        sample: TimeSample::now(),
        date: CalendarDate::today(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| ClockState::initial(TimeSample::now(), CalendarDate::today()));
    let driver = use_mut_ref(|| None::<RefreshDriver>);

    {
        let state = state.clone();
        let driver = driver.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");

            let base_tick = {
                let state = state.clone();
                move || state.dispatch(fresh_tick())
            };
            let sweep_tick = {
                let state = state.clone();
                move || {
                    state.dispatch(ClockAction::Sweep {
                        sample: TimeSample::now(),
                    })
                }
            };

            let started = scheduler::start_preferring(
                {
                    let window = window.clone();
                    let text = base_tick.clone();
                    move || RefreshDriver::smooth(&window, text, sweep_tick)
                },
                {
                    let window = window.clone();
                    move || RefreshDriver::basic(&window, base_tick)
                },
                |e| util::clog(&format!("smooth refresh unavailable, degrading to 1s ticks: {:?}", e)),
            );
            match started {
                Ok((d, mode)) => {
                    *driver.borrow_mut() = Some(d);
                    if mode != RefreshMode::Basic {
                        state.dispatch(ClockAction::SetMode(mode));
                    }
                }
                Err(e) => util::clog(&format!("failed to start any refresh driver: {:?}", e)),
            }

            let key_cb = {
                let state = state.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match util::shortcut_for(&e.key()) {
                        Some(Shortcut::Theme) => state.dispatch(ClockAction::ToggleTheme),
                        Some(Shortcut::Format) => {
                            state.dispatch(ClockAction::ToggleFormat);
                            state.dispatch(fresh_tick());
                        }
                        Some(Shortcut::Help) => {
                            let _ = window.alert_with_message(util::HELP_TEXT);
                        }
                        None => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = window_clone
                    .remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                drop(key_cb);
                // Dropping the driver clears its intervals.
                driver.borrow_mut().take();
            }
        });
    }

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ClockAction::ToggleTheme))
    };
    let on_toggle_format = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(ClockAction::ToggleFormat);
            // Immediate one-shot refresh; no waiting for the next period.
            state.dispatch(fresh_tick());
        })
    };

    html! {
        <div class="clock-app" data-theme={state.theme.attr()}>
            <ControlsPanel
                theme={state.theme}
                format={state.format}
                on_toggle_theme={on_toggle_theme}
                on_toggle_format={on_toggle_format}
            />
            <main class="clock-layout">
                <AnalogClock angles={state.angles} />
                <DigitalClock sample={state.sample} date={state.date} format={state.format} />
            </main>
        </div>
    }
}

use yew::prelude::*;

use crate::clock::HandAngles;

#[derive(Properties, PartialEq, Clone)]
pub struct AnalogClockProps {
    pub angles: HandAngles,
}

#[function_component(AnalogClock)]
pub fn analog_clock(props: &AnalogClockProps) -> Html {
    let rotate = |deg: f64| format!("transform: rotate({}deg);", deg);
    html! {<div class="analog-clock">
        <div class="clock-face">
            { for (0..12).map(|i| {
                let style = format!("transform: rotate({}deg);", i * 30);
                html!{ <div class={if i % 3 == 0 { "marker marker-major" } else { "marker" }} style={style}></div> }
            }) }
            <div class="hand hour-hand" style={rotate(props.angles.hour_deg)}></div>
            <div class="hand minute-hand" style={rotate(props.angles.minute_deg)}></div>
            <div class="hand second-hand" style={rotate(props.angles.second_deg)}></div>
            <div class="center-dot"></div>
        </div>
    </div>}
}

use yew::prelude::*;

use crate::clock::{self, CalendarDate, TimeSample};
use crate::model::DisplayFormat;

#[derive(Properties, PartialEq, Clone)]
pub struct DigitalClockProps {
    pub sample: TimeSample,
    pub date: CalendarDate,
    pub format: DisplayFormat,
}

#[function_component(DigitalClock)]
pub fn digital_clock(props: &DigitalClockProps) -> Html {
    let (time, suffix) = clock::format_digital(&props.sample, props.format);
    html! {<div class="digital-clock">
        <div class="time-display">
            { time }
            { if let Some(sfx) = suffix { html!{ <span class="time-suffix">{ sfx }</span> } } else { html!{} } }
        </div>
        <div class="date-display">{ clock::format_date(&props.date) }</div>
    </div>}
}

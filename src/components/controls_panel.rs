use yew::prelude::*;

use crate::model::{DisplayFormat, ThemeState};

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub theme: ThemeState,
    pub format: DisplayFormat,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_format: Callback<()>,
}

#[function_component(ControlsPanel)]
pub fn controls_panel(props: &ControlsPanelProps) -> Html {
    let theme_cb = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let format_cb = {
        let cb = props.on_toggle_format.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div class="controls">
        <button class="theme-toggle" onclick={theme_cb} title="Toggle theme (T)">
            <span class="theme-icon">{ props.theme.icon() }</span>
        </button>
        <button class="format-toggle" onclick={format_cb} title="Toggle time format (F)">
            { props.format.toggle_label() }
        </button>
    </div>}
}

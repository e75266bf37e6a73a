use crate::state::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub mode: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let palette = props.mode.palette();
    let toggle_cb = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style={format!("display:flex; align-items:center; justify-content:space-between; margin-top:32px; padding-top:16px; border-top:1px solid {};", palette.border)}>
            <div style="display:flex; align-items:center; gap:8px;">
                <span style={format!("color:{};", palette.muted)}>{"Credits"}</span>
                <span style={format!("color:{};", palette.accent)}>{"▾"}</span>
            </div>
            <button onclick={toggle_cb} style={format!("background:none; border:none; cursor:pointer; color:{};", palette.muted)}>
                { props.mode.toggle_label() }
            </button>
        </div>
    }
}

use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let palette = super::use_palette();
    html! {
        <div style="text-align:center; margin-bottom:32px;">
            <h1 style="font-size:36px; font-weight:700; margin:0 0 8px 0;">{"League Guide"}</h1>
            <p style={format!("color:{}; margin:0 0 16px 0;", palette.muted)}>{"Pick a region to see its leaders"}</p>
            <div style={format!("display:flex; align-items:center; justify-content:center; gap:8px; color:{}; font-weight:500;", palette.accent)}>
                <span>{"▾"}</span>
                <span>{"Tips"}</span>
            </div>
        </div>
    }
}

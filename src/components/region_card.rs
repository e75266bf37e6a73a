use crate::model::Region;
use crate::util::region_image_url;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegionCardProps {
    pub region: Region,
    pub selected: bool,
    pub on_select: Callback<String>,
}

#[function_component(RegionCard)]
pub fn region_card(props: &RegionCardProps) -> Html {
    let palette = super::use_palette();
    let onclick = {
        let cb = props.on_select.clone();
        let id = props.region.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    html! {
        <div onclick={onclick} style={super::card_style(&palette, props.selected, palette.accent)}>
            <img src={region_image_url(props.region.image.as_deref())} alt="" style="width:100%; height:96px; object-fit:cover; display:block;" />
            <div style="position:absolute; inset:0; background:rgba(0,0,0,0.4); display:flex; align-items:center; justify-content:center;">
                <span style="color:#fff; font-weight:700; font-size:18px;">{ &props.region.name }</span>
            </div>
        </div>
    }
}

use crate::model::Leader;
use crate::util::leader_image_url;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderCardProps {
    pub leader: Leader,
    pub selected: bool,
    pub on_select: Callback<String>,
}

#[function_component(LeaderCard)]
pub fn leader_card(props: &LeaderCardProps) -> Html {
    let palette = super::use_palette();
    let onclick = {
        let cb = props.on_select.clone();
        let id = props.leader.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let image = props
        .leader
        .image
        .clone()
        .unwrap_or_else(|| leader_image_url(&props.leader.name));
    html! {
        <div onclick={onclick} style={super::card_style(&palette, props.selected, palette.leader_ring)}>
            <img src={image} alt={props.leader.name.clone()} style="width:96px; height:96px; object-fit:contain; display:block;" />
            <div style="position:absolute; inset:0; background:rgba(0,0,0,0.4); display:flex; align-items:center; justify-content:center;">
                <span style="color:#fff; font-weight:700; font-size:18px;">{ &props.leader.name }</span>
            </div>
        </div>
    }
}

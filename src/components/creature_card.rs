use crate::model::Creature;
use crate::util::creature_image_url;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CreatureCardProps {
    pub creature: Rc<Creature>,
    pub selected: bool,
    pub on_select: Callback<String>,
}

#[function_component(CreatureCard)]
pub fn creature_card(props: &CreatureCardProps) -> Html {
    let palette = super::use_palette();
    let onclick = {
        let cb = props.on_select.clone();
        let id = props.creature.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let name = &props.creature.name;
    let image = props
        .creature
        .image
        .clone()
        .unwrap_or_else(|| creature_image_url(name));
    html! {
        <div onclick={onclick} style={super::card_style(&palette, props.selected, palette.accent)}>
            <div style="display:flex; align-items:center; justify-content:center;">
                <img src={image} alt={name.clone()} style="width:96px; height:96px; object-fit:contain;" />
            </div>
            <div style="position:absolute; inset:0; background:rgba(0,0,0,0.3); display:flex; align-items:flex-end;">
                <span style="color:#fff; font-size:14px; font-weight:500; padding:8px; width:100%; text-align:center; background:rgba(0,0,0,0.6);">{ name }</span>
            </div>
        </div>
    }
}

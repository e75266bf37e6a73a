use super::trick_tree::TrickTree;
use crate::model::Creature;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CreatureDetailsProps {
    pub creature: Rc<Creature>,
}

#[function_component(CreatureDetails)]
pub fn creature_details(props: &CreatureDetailsProps) -> Html {
    let palette = super::use_palette();
    let creature = &props.creature;
    let heading = if creature.initial_move.trim().is_empty() {
        creature.name.clone()
    } else {
        format!("{}:", creature.initial_move)
    };
    html! {
        <div class="slide-in" style={format!("background:{}; border:1px solid {}; border-radius:8px; padding:24px;", palette.panel_bg, palette.border)}>
            <h3 style="font-size:20px; font-weight:700; margin:0 0 16px 0;">{ heading }</h3>
            { if creature.has_tricks() {
                // Keyed by creature so switching selection remounts a collapsed tree.
                html! { <TrickTree key={creature.id.clone()} tricks={creature.tricks.clone()} /> }
            } else {
                html! {
                    <div style={format!("color:{}; text-align:center; padding:16px 0;", palette.muted)}>
                        { format!("No strategies available for {} yet.", creature.name) }
                    </div>
                }
            } }
        </div>
    }
}

use crate::model::StrategyNode;
use crate::state::{ExpansionMap, NodePath, TrickRow};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TrickTreeProps {
    pub tricks: Vec<Rc<StrategyNode>>,
}

/// Root of one creature's strategy outline. Owns the expansion flags of every
/// row below it; mount it with a key per creature so a new selection starts
/// from a collapsed tree.
#[function_component(TrickTree)]
pub fn trick_tree(props: &TrickTreeProps) -> Html {
    let expansion = use_reducer(ExpansionMap::default);
    if props.tricks.is_empty() {
        return html! {};
    }
    html! {
        <div style="display:flex; flex-direction:column; gap:12px;">
            { for props.tricks.iter().enumerate().map(|(i, trick)| {
                let path = NodePath::root(i);
                let key = path.key();
                html! { <TrickItem key={key} node={trick.clone()} path={path} expansion={expansion.clone()} /> }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TrickItemProps {
    pub node: Rc<StrategyNode>,
    pub path: NodePath,
    pub expansion: UseReducerHandle<ExpansionMap>,
}

#[function_component(TrickItem)]
pub fn trick_item(props: &TrickItemProps) -> Html {
    let palette = super::use_palette();
    let row = TrickRow::derive(&props.node, &props.path, &props.expansion);

    let onclick = row.is_interactive().then(|| {
        let expansion = props.expansion.clone();
        let row = row.clone();
        Callback::from(move |_: MouseEvent| expansion.dispatch(row.toggle_action()))
    });

    let row_style = format!(
        "padding:12px; border-radius:8px; margin-bottom:8px; {} background:{}; border:1px solid {}; {}",
        row.indent_style(),
        palette.card_bg,
        palette.border,
        if row.is_interactive() { "cursor:pointer;" } else { "" }
    );
    // Leaves get an empty box of the same size as the chevron.
    let icon = html! {
        <span style={format!("width:16px; height:16px; margin-top:2px; flex-shrink:0; color:{}; line-height:16px; text-align:center;", palette.accent)}>
            { row.affordance.glyph() }
        </span>
    };

    html! {
        <div style="width:100%;">
            <div style={row_style} onclick={onclick}>
                <div style="display:flex; align-items:flex-start; gap:8px;">
                    { icon }
                    <span style="font-size:14px; line-height:1.6;">{ props.node.detail() }</span>
                </div>
            </div>
            { if row.children.is_empty() { html!{} } else {
                html! {
                    <div class="slide-in" style={format!("padding-left:16px; border-left:2px solid {};", palette.rail)}>
                        { for row.children.iter().map(|(path, child)| {
                            let key = path.key();
                            html! { <TrickItem key={key} node={child.clone()} path={path.clone()} expansion={props.expansion.clone()} /> }
                        }) }
                    </div>
                }
            } }
        </div>
    }
}

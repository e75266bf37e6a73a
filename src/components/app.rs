use super::{
    creature_card::CreatureCard, creature_details::CreatureDetails, footer::Footer, header::Header,
    leader_card::LeaderCard, region_card::RegionCard,
};
use crate::data::load_regions;
use crate::state::{Palette, Selection, SelectionAction, ThemeMode};
use yew::prelude::*;

const GRID_5: &str = "display:grid; grid-template-columns:repeat(auto-fill, minmax(160px, 1fr)); gap:16px; margin-bottom:24px;";
const GRID_CREATURES: &str = "display:grid; grid-template-columns:repeat(auto-fill, minmax(104px, 1fr)); gap:8px; margin-bottom:24px;";

#[function_component(App)]
pub fn app() -> Html {
    // Bundled data is parsed once per mount.
    let regions = use_memo((), |_| load_regions());
    let selection = use_reducer(Selection::default);
    let theme = use_state(ThemeMode::default);
    let palette = theme.palette();

    let on_region = {
        let selection = selection.clone();
        Callback::from(move |id: String| selection.dispatch(SelectionAction::SelectRegion(id)))
    };
    let on_leader = {
        let selection = selection.clone();
        Callback::from(move |id: String| selection.dispatch(SelectionAction::SelectLeader(id)))
    };
    let on_creature = {
        let selection = selection.clone();
        Callback::from(move |id: String| selection.dispatch(SelectionAction::SelectCreature(id)))
    };
    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let current_region = selection.current_region(&regions);
    let current_leader = selection.current_leader(&regions);
    let current_creature = selection.current_creature(&regions);

    let region_row = html! {
        <div style={GRID_5}>
            { for regions.iter().map(|region| html! {
                <RegionCard
                    key={region.id.clone()}
                    region={region.clone()}
                    selected={selection.region.as_deref() == Some(region.id.as_str())}
                    on_select={on_region.clone()}
                />
            }) }
        </div>
    };

    let leader_row = match current_region {
        Some(region) if !region.leaders.is_empty() => html! {
            <div class="slide-in" style={GRID_5}>
                { for region.leaders.iter().map(|leader| html! {
                    <LeaderCard
                        key={leader.id.clone()}
                        leader={leader.clone()}
                        selected={selection.leader.as_deref() == Some(leader.id.as_str())}
                        on_select={on_leader.clone()}
                    />
                }) }
            </div>
        },
        _ => html! {},
    };

    let creature_grid = match current_leader {
        Some(leader) => html! {
            <div class="slide-in" style={GRID_CREATURES}>
                { for leader.creatures.iter().map(|creature| html! {
                    <CreatureCard
                        key={creature.id.clone()}
                        creature={creature.clone()}
                        selected={selection.creature.as_deref() == Some(creature.id.as_str())}
                        on_select={on_creature.clone()}
                    />
                }) }
            </div>
        },
        None => html! {},
    };

    let details = match current_creature {
        Some(creature) => html! { <CreatureDetails creature={creature} /> },
        None => html! {},
    };

    html! {
        <ContextProvider<Palette> context={palette}>
            <div style={format!("min-height:100vh; background:{}; color:{}; transition:background-color 0.3s, color 0.3s;", palette.page_bg, palette.text)}>
                <div style="max-width:1200px; margin:0 auto; padding:32px 16px;">
                    <Header />
                    { region_row }
                    { leader_row }
                    { creature_grid }
                    { details }
                    <Footer mode={*theme} on_toggle_theme={on_toggle_theme} />
                </div>
            </div>
        </ContextProvider<Palette>>
    }
}

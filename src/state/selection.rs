use crate::model::{Creature, Leader, Region};
use std::rc::Rc;
use yew::Reducible;

/// Drill-down path: at most one selected id per level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub region: Option<String>,
    pub leader: Option<String>,
    pub creature: Option<String>,
}

pub enum SelectionAction {
    SelectRegion(String),
    SelectLeader(String),
    SelectCreature(String),
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SelectionAction::*;
        let mut new = (*self).clone();
        match action {
            SelectRegion(id) => {
                // Re-selecting closes the region; either way the lower levels reset.
                new.region = if new.region.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                new.leader = None;
                new.creature = None;
            }
            SelectLeader(id) => {
                if new.region.is_none() {
                    return self;
                }
                new.leader = if new.leader.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                new.creature = None;
            }
            SelectCreature(id) => {
                if new.leader.is_none() {
                    return self;
                }
                new.creature = if new.creature.as_deref() == Some(id.as_str()) { None } else { Some(id) };
            }
        }
        Rc::new(new)
    }
}

impl Selection {
    pub fn current_region<'a>(&self, regions: &'a [Region]) -> Option<&'a Region> {
        let id = self.region.as_deref()?;
        regions.iter().find(|r| r.id == id)
    }

    pub fn current_leader<'a>(&self, regions: &'a [Region]) -> Option<&'a Leader> {
        self.current_region(regions)?.leader(self.leader.as_deref()?)
    }

    pub fn current_creature(&self, regions: &[Region]) -> Option<Rc<Creature>> {
        self.current_leader(regions)?
            .creature(self.creature.as_deref()?)
            .cloned()
    }
}

//! Core data models for the league guide.
//! Regions, leaders and creatures come from the bundled JSON; each creature
//! carries a tree of strategy notes ("tricks") that the details view renders.

use crate::error::GuideError;
use crate::util::cwarn;
use serde::Deserialize;
use serde_json::Value;
use std::rc::Rc;

/// One step of a strategy outline, with its ordered sub-steps.
/// Immutable once built; the renderer only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyNode {
    detail: String,
    children: Vec<Rc<StrategyNode>>,
}

impl StrategyNode {
    #[cfg(test)]
    pub fn new(detail: impl Into<String>, children: Vec<StrategyNode>) -> Self {
        Self {
            detail: detail.into(),
            children: children.into_iter().map(Rc::new).collect(),
        }
    }

    #[cfg(test)]
    pub fn leaf(detail: impl Into<String>) -> Self {
        Self::new(detail, Vec::new())
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn children(&self) -> &[Rc<StrategyNode>] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn from_value(
        value: &Value,
        path: &mut Vec<usize>,
        issues: &mut Vec<GuideError>,
    ) -> Result<Self, GuideError> {
        let obj = value.as_object().ok_or_else(|| GuideError::NotAnObject {
            path: path_label(path),
        })?;
        let detail = obj
            .get("detail")
            .and_then(Value::as_str)
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| GuideError::MissingDetail {
                path: path_label(path),
            })?;
        // Bundled data writes sub-steps under "variant"; a null there defers to "children".
        let listed = match obj.get("variant") {
            None | Some(Value::Null) => obj.get("children"),
            variant => variant,
        };
        let children = match listed {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => parse_list(items, path, issues),
            Some(_) => {
                return Err(GuideError::InvalidChildren {
                    path: path_label(path),
                });
            }
        };
        Ok(Self {
            detail: detail.to_string(),
            children,
        })
    }
}

fn path_label(path: &[usize]) -> String {
    let mut out = String::from("tricks");
    for (depth, idx) in path.iter().enumerate() {
        if depth > 0 {
            out.push_str(".variant");
        }
        out.push_str(&format!("[{}]", idx));
    }
    out
}

// Malformed entries are dropped individually; siblings and the parent survive.
fn parse_list(
    items: &[Value],
    path: &mut Vec<usize>,
    issues: &mut Vec<GuideError>,
) -> Vec<Rc<StrategyNode>> {
    let mut nodes = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        path.push(i);
        match StrategyNode::from_value(item, path, issues) {
            Ok(node) => nodes.push(Rc::new(node)),
            Err(e) => issues.push(e),
        }
        path.pop();
    }
    nodes
}

/// Builds a trick list, recording every dropped entry in `issues`.
pub fn collect_tricks(
    value: &Value,
    owner: &str,
    issues: &mut Vec<GuideError>,
) -> Vec<Rc<StrategyNode>> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => parse_list(items, &mut Vec::new(), issues),
        _ => {
            issues.push(GuideError::InvalidTrickList {
                owner: owner.to_string(),
            });
            Vec::new()
        }
    }
}

/// Builds a trick list, logging a warning for each dropped entry.
pub fn parse_tricks(value: &Value, owner: &str) -> Vec<Rc<StrategyNode>> {
    let mut issues = Vec::new();
    let tricks = collect_tricks(value, owner, &mut issues);
    for issue in &issues {
        cwarn(&format!("{}: dropped {}", owner, issue));
    }
    tricks
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub initial_move: String,
    pub tricks: Vec<Rc<StrategyNode>>,
}

/// Raw shape of a creature data file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub initial_move: String,
    #[serde(default)]
    pub tricks: Value,
}

impl Creature {
    /// `file_stem` names the source file; it is the id of last resort.
    pub fn from_record(record: CreatureRecord, file_stem: &str) -> Self {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| {
                let lowered = record.name.trim().to_lowercase();
                (!lowered.is_empty()).then_some(lowered)
            })
            .unwrap_or_else(|| file_stem.to_string());
        let owner = if record.name.is_empty() { id.as_str() } else { record.name.as_str() };
        let tricks = parse_tricks(&record.tricks, owner);
        Self {
            name: record.name,
            image: record.image,
            initial_move: record.initial_move,
            tricks,
            id,
        }
    }

    pub fn has_tricks(&self) -> bool {
        !self.tricks.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Leader {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Filled from the per-leader data files after the config is read.
    #[serde(skip)]
    pub creatures: Vec<Rc<Creature>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub leaders: Vec<Leader>,
}

impl Region {
    pub fn leader(&self, id: &str) -> Option<&Leader> {
        self.leaders.iter().find(|l| l.id == id)
    }
}

impl Leader {
    pub fn creature(&self, id: &str) -> Option<&Rc<Creature>> {
        self.creatures.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegionConfig {
    #[serde(default)]
    pub regions: Vec<Region>,
}

use crate::model::StrategyNode;
use std::collections::HashSet;
use std::rc::Rc;
use yew::Reducible;

/// Position of a rendered trick: child indices from the top-level list down.
/// This is the identity of a node instance within one mounted tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodePath(Rc<[usize]>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(Rc::from(vec![index]))
    }

    pub fn child(&self, index: usize) -> Self {
        let mut v = self.0.to_vec();
        v.push(index);
        Self(Rc::from(v))
    }

    /// Nesting depth, 0 for top-level tricks.
    pub fn level(&self) -> u32 {
        self.0.len().saturating_sub(1) as u32
    }

    pub fn is_descendant_of(&self, other: &NodePath) -> bool {
        self.0.len() > other.0.len() && self.0.starts_with(&other.0)
    }

    pub fn key(&self) -> String {
        self.0.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(".")
    }
}

/// Expand/collapse flags of every mounted node in one trick tree.
/// A path absent from the set is collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionMap {
    expanded: HashSet<NodePath>,
}

pub enum ExpansionAction {
    Toggle { path: NodePath, has_children: bool },
}

impl ExpansionMap {
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expanded.contains(path)
    }

    /// Flips one node. Collapsing unmounts the subtree, so descendant flags go with it.
    pub fn toggle(&mut self, path: &NodePath) {
        if self.expanded.remove(path) {
            self.expanded.retain(|p| !p.is_descendant_of(path));
        } else {
            self.expanded.insert(path.clone());
        }
    }

    #[cfg(test)]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

impl Reducible for ExpansionMap {
    type Action = ExpansionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ExpansionAction::Toggle { path, has_children } => {
                // Leaves are inert.
                if !has_children {
                    return self;
                }
                let mut new = (*self).clone();
                new.toggle(&path);
                Rc::new(new)
            }
        }
    }
}

/// What the row shows in front of its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Collapsed,
    Expanded,
    /// Inert spacer for leaves, keeps sibling text aligned.
    Placeholder,
}

impl Affordance {
    pub fn for_node(has_children: bool, expanded: bool) -> Self {
        match (has_children, expanded) {
            (false, _) => Affordance::Placeholder,
            (true, true) => Affordance::Expanded,
            (true, false) => Affordance::Collapsed,
        }
    }

    pub fn is_interactive(self) -> bool {
        !matches!(self, Affordance::Placeholder)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Affordance::Collapsed => "▸",
            Affordance::Expanded => "▾",
            Affordance::Placeholder => "",
        }
    }
}

/// Everything one rendered trick row needs: its affordance, indentation,
/// the toggle it dispatches, and the children mounted beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct TrickRow {
    pub path: NodePath,
    pub has_children: bool,
    pub affordance: Affordance,
    /// Children to render, empty unless the row is expanded.
    pub children: Vec<(NodePath, Rc<StrategyNode>)>,
}

impl TrickRow {
    pub fn derive(node: &StrategyNode, path: &NodePath, map: &ExpansionMap) -> Self {
        let has_children = node.has_children();
        let expanded = has_children && map.is_expanded(path);
        let children = if expanded {
            node.children()
                .iter()
                .enumerate()
                .map(|(i, child)| (path.child(i), child.clone()))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            path: path.clone(),
            has_children,
            affordance: Affordance::for_node(has_children, expanded),
            children,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.affordance.is_interactive()
    }

    pub fn level(&self) -> u32 {
        self.path.level()
    }

    pub fn indent_style(&self) -> String {
        format!("margin-left:{}rem;", self.level())
    }

    pub fn toggle_action(&self) -> ExpansionAction {
        ExpansionAction::Toggle {
            path: self.path.clone(),
            has_children: self.has_children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        detail: String,
        level: u32,
        affordance: Affordance,
    }

    // Same recursion as the trick tree component: each row is derived with
    // `TrickRow::derive` and only the children it lists are visited.
    fn visible_rows(roots: &[Rc<StrategyNode>], map: &ExpansionMap) -> Vec<Row> {
        fn walk(node: &StrategyNode, path: NodePath, map: &ExpansionMap, out: &mut Vec<Row>) {
            let row = TrickRow::derive(node, &path, map);
            out.push(Row {
                detail: node.detail().to_string(),
                level: row.level(),
                affordance: row.affordance,
            });
            for (child_path, child) in row.children {
                walk(&child, child_path, map, out);
            }
        }
        let mut out = Vec::new();
        for (i, root) in roots.iter().enumerate() {
            walk(root, NodePath::root(i), map, &mut out);
        }
        out
    }

    fn details(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.detail.as_str()).collect()
    }

    fn dispatch(map: Rc<ExpansionMap>, path: NodePath, node: &StrategyNode) -> Rc<ExpansionMap> {
        map.reduce(ExpansionAction::Toggle {
            path,
            has_children: node.has_children(),
        })
    }

    fn example_tree() -> Vec<Rc<StrategyNode>> {
        vec![Rc::new(StrategyNode::new(
            "Lead with X",
            vec![StrategyNode::new(
                "If opponent sends Y",
                vec![StrategyNode::leaf("Use move Z")],
            )],
        ))]
    }

    fn two_branch_tree() -> Vec<Rc<StrategyNode>> {
        vec![
            Rc::new(StrategyNode::new(
                "A",
                vec![
                    StrategyNode::new("A1", vec![StrategyNode::leaf("A1a")]),
                    StrategyNode::new("A2", vec![StrategyNode::leaf("A2a")]),
                ],
            )),
            Rc::new(StrategyNode::new(
                "B",
                vec![StrategyNode::new("B1", vec![StrategyNode::leaf("B1a")])],
            )),
            Rc::new(StrategyNode::leaf("C")),
        ]
    }

    #[test]
    fn example_discloses_one_level_per_activation() {
        let tree = example_tree();
        let map = Rc::new(ExpansionMap::default());

        let rows = visible_rows(&tree, &map);
        assert_eq!(details(&rows), vec!["Lead with X"]);
        assert_eq!(rows[0].affordance, Affordance::Collapsed);

        let map = dispatch(map, NodePath::root(0), &tree[0]);
        let rows = visible_rows(&tree, &map);
        assert_eq!(details(&rows), vec!["Lead with X", "If opponent sends Y"]);
        assert_eq!(rows[0].affordance, Affordance::Expanded);
        assert_eq!(rows[1].affordance, Affordance::Collapsed);
        assert_eq!(rows[1].level, 1);

        let second = tree[0].children()[0].clone();
        let map = dispatch(map, NodePath::root(0).child(0), &second);
        let rows = visible_rows(&tree, &map);
        assert_eq!(
            details(&rows),
            vec!["Lead with X", "If opponent sends Y", "Use move Z"]
        );
        assert_eq!(rows[2].affordance, Affordance::Placeholder);
        assert_eq!(rows[2].level, 2);
    }

    #[test]
    fn leaf_activation_is_a_no_op() {
        let leaf = StrategyNode::leaf("static");
        let map = Rc::new(ExpansionMap::default());
        let after = dispatch(map.clone(), NodePath::root(0), &leaf);
        assert!(Rc::ptr_eq(&map, &after));
        assert!(!after.is_expanded(&NodePath::root(0)));
        assert!(!Affordance::for_node(false, false).is_interactive());
        assert!(!Affordance::for_node(false, true).is_interactive());
        assert_eq!(Affordance::Placeholder.glyph(), "");
    }

    #[test]
    fn two_activations_restore_state() {
        let tree = two_branch_tree();
        let path = NodePath::root(1);
        let map = Rc::new(ExpansionMap::default());
        let once = dispatch(map.clone(), path.clone(), &tree[1]);
        assert!(once.is_expanded(&path));
        let twice = dispatch(once, path.clone(), &tree[1]);
        assert!(!twice.is_expanded(&path));
        assert_eq!(*twice, *map);
    }

    #[test]
    fn sibling_and_cousin_state_is_isolated() {
        let tree = two_branch_tree();
        let a = NodePath::root(0);
        let b = NodePath::root(1);
        let a1 = a.child(0);
        let a2 = a.child(1);
        let b1 = b.child(0);

        let mut map = Rc::new(ExpansionMap::default());
        map = dispatch(map, a.clone(), &tree[0]);
        map = dispatch(map, b.clone(), &tree[1]);
        map = dispatch(map, a1.clone(), &tree[0].children()[0]);
        map = dispatch(map, b1.clone(), &tree[1].children()[0]);

        // Toggling A2 touches nothing else.
        let before = (*map).clone();
        map = dispatch(map, a2.clone(), &tree[0].children()[1]);
        for p in [&a, &b, &a1, &b1] {
            assert_eq!(map.is_expanded(p), before.is_expanded(p));
        }
        assert!(map.is_expanded(&a2));

        // Collapsing B leaves the A branch alone.
        map = dispatch(map, b.clone(), &tree[1]);
        assert!(map.is_expanded(&a) && map.is_expanded(&a1) && map.is_expanded(&a2));
        assert!(!map.is_expanded(&b));
    }

    #[test]
    fn collapsing_parent_unmounts_descendant_state() {
        let tree = two_branch_tree();
        let a = NodePath::root(0);
        let a1 = a.child(0);
        let mut map = Rc::new(ExpansionMap::default());
        map = dispatch(map, a.clone(), &tree[0]);
        map = dispatch(map, a1.clone(), &tree[0].children()[0]);
        map = dispatch(map, a.clone(), &tree[0]);
        assert_eq!(map.expanded_count(), 0);

        // Re-expanding the parent shows the child collapsed again.
        map = dispatch(map, a.clone(), &tree[0]);
        let rows = visible_rows(&tree, &map);
        assert_eq!(details(&rows), vec!["A", "A1", "A2", "B", "C"]);
        assert_eq!(rows[1].affordance, Affordance::Collapsed);
    }

    #[test]
    fn fresh_map_renders_everything_collapsed() {
        let tree = two_branch_tree();
        let mut map = Rc::new(ExpansionMap::default());
        map = dispatch(map, NodePath::root(0), &tree[0]);
        map = dispatch(map, NodePath::root(1), &tree[1]);
        assert_eq!(visible_rows(&tree, &map).len(), 7);

        // A new selection mounts a new tree with its own map.
        let remounted = ExpansionMap::default();
        let rows = visible_rows(&tree, &remounted);
        assert_eq!(details(&rows), vec!["A", "B", "C"]);
        assert!(rows.iter().all(|r| r.affordance != Affordance::Expanded));
    }

    #[test]
    fn leaf_row_is_inert_and_aligned() {
        let tree = example_tree();
        let mut map = Rc::new(ExpansionMap::default());
        map = dispatch(map, NodePath::root(0), &tree[0]);
        let mid = tree[0].children()[0].clone();
        map = dispatch(map, NodePath::root(0).child(0), &mid);

        let leaf_path = NodePath::root(0).child(0).child(0);
        let leaf = mid.children()[0].clone();
        let row = TrickRow::derive(&leaf, &leaf_path, &map);
        assert!(!row.is_interactive());
        assert!(row.children.is_empty());
        assert_eq!(row.affordance.glyph(), "");
        assert_eq!(row.indent_style(), "margin-left:2rem;");

        // The row's own toggle is refused by the reducer.
        let after = map.clone().reduce(row.toggle_action());
        assert!(Rc::ptr_eq(&map, &after));
    }

    #[test]
    fn row_lists_only_direct_children_when_expanded() {
        let tree = two_branch_tree();
        let a = NodePath::root(0);
        let map = Rc::new(ExpansionMap::default());

        let collapsed = TrickRow::derive(&tree[0], &a, &map);
        assert!(collapsed.is_interactive());
        assert_eq!(collapsed.affordance.glyph(), "▸");
        assert!(collapsed.children.is_empty());
        assert_eq!(collapsed.indent_style(), "margin-left:0rem;");

        let map = map.reduce(collapsed.toggle_action());
        let expanded = TrickRow::derive(&tree[0], &a, &map);
        assert_eq!(expanded.affordance.glyph(), "▾");
        let paths: Vec<_> = expanded.children.iter().map(|(p, _)| p.key()).collect();
        assert_eq!(paths, vec!["0.0", "0.1"]);
        let names: Vec<_> = expanded.children.iter().map(|(_, n)| n.detail()).collect();
        assert_eq!(names, vec!["A1", "A2"]);
    }

    #[test]
    fn node_path_relations() {
        let a = NodePath::root(0);
        let a1 = a.child(1);
        let a12 = a1.child(2);
        assert_eq!(a12.level(), 2);
        assert_eq!(a12.key(), "0.1.2");
        assert!(a12.is_descendant_of(&a));
        assert!(a12.is_descendant_of(&a1));
        assert!(!a1.is_descendant_of(&a1));
        assert!(!NodePath::root(1).child(1).is_descendant_of(&a));
    }
}

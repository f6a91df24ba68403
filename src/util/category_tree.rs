//! Flatten the nested category tree into indented table rows.

#[cfg(test)]
#[path = "category_tree_test.rs"]
mod category_tree_test;

use crate::net::types::Category;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatCategory {
    pub id: i64,
    pub name: String,
    pub depth: usize,
    pub parent_id: Option<i64>,
    pub description: Option<String>,
    pub sort_order: i64,
    pub has_children: bool,
}

impl FlatCategory {
    /// Name prefixed with one indent marker per level.
    pub fn indented_name(&self) -> String {
        format!("{}{}", "— ".repeat(self.depth), self.name)
    }
}

/// Depth-first pre-order walk. Children inherit their parent's id when the
/// backend omits `parent_id`.
pub fn flatten(roots: &[Category]) -> Vec<FlatCategory> {
    let mut out = Vec::new();
    let mut stack: Vec<(&Category, usize, Option<i64>)> = roots.iter().rev().map(|c| (c, 0, None)).collect();

    while let Some((node, depth, parent)) = stack.pop() {
        out.push(FlatCategory {
            id: node.id,
            name: node.name.clone(),
            depth,
            parent_id: node.parent_id.or(parent),
            description: node.description.clone(),
            sort_order: node.sort_order,
            has_children: !node.children.is_empty(),
        });
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1, Some(node.id))));
    }
    out
}

/// Ids of the row `id` and everything beneath it, from pre-order rows as
/// produced by `flatten`. Empty when `id` is absent.
pub fn subtree_ids(rows: &[FlatCategory], id: i64) -> Vec<i64> {
    let Some(start) = rows.iter().position(|row| row.id == id) else {
        return Vec::new();
    };
    let depth = rows[start].depth;
    std::iter::once(id)
        .chain(rows[start + 1..].iter().take_while(|row| row.depth > depth).map(|row| row.id))
        .collect()
}

//! Structural simplification of parsed conditions.
//!
//! Rewrites that do not change what a query matches:
//!
//! - `not (not X)` collapses to `X`
//! - a group holding a single child is replaced by that child
//! - `a and (b and c)` flattens into one `and` node (same for `or`)
//!
//! Children are visited right to left so splicing never shifts an index that
//! is still to be visited. Simplifying twice yields the same tree as once.

use crate::ast::{Condition, ConditionChild, Operator, Query, QueryList};

pub fn simplify(mut list: QueryList) -> QueryList {
    for query in list.queries.iter_mut().flatten() {
        simplify_query_in_place(query);
    }
    list
}

pub fn simplify_query(mut query: Query) -> Query {
    simplify_query_in_place(&mut query);
    query
}

pub fn simplify_condition(mut condition: Condition) -> Condition {
    simplify_root(&mut condition);
    condition
}

fn simplify_query_in_place(query: &mut Query) {
    if let Some(condition) = query.condition.as_mut() {
        simplify_root(condition);
    }
}

/// The root keeps its identity as a condition: it is never replaced by a
/// feature, only by a nested condition it wraps.
fn simplify_root(condition: &mut Condition) {
    simplify_children(condition);
    collapse_double_negation(condition);
    hoist_single_condition(condition);
}

fn simplify_children(parent: &mut Condition) {
    for i in (0..parent.children.len()).rev() {
        let ConditionChild::Condition(child) = &mut parent.children[i] else {
            continue;
        };

        simplify_children(child);
        collapse_double_negation(child);

        if child.operator.is_none()
            && child.children.len() == 1
            && let Some(only) = child.children.pop()
        {
            parent.children[i] = only;
        }

        if let ConditionChild::Condition(child) = &mut parent.children[i]
            && let Some(op) = child.operator
            && op.is_associative()
            && parent.operator == Some(op)
        {
            let grandchildren = std::mem::take(&mut child.children);
            parent.children.splice(i..=i, grandchildren);
        }
    }
}

/// `not (not X)`, where the inner node may itself hold several children.
fn collapse_double_negation(condition: &mut Condition) {
    if condition.operator != Some(Operator::Not) {
        return;
    }
    let inner_is_not = condition
        .single_condition()
        .is_some_and(|inner| inner.operator == Some(Operator::Not));
    if !inner_is_not {
        return;
    }

    if let Some(ConditionChild::Condition(inner)) = condition.children.pop() {
        condition.operator = None;
        condition.children = inner.children;
    }
}

fn hoist_single_condition(condition: &mut Condition) {
    if condition.operator.is_none()
        && condition.single_condition().is_some()
        && let Some(ConditionChild::Condition(inner)) = condition.children.pop()
    {
        *condition = inner;
    }
}

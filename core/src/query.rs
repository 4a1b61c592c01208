//! Filter/sort/limit pipeline over the record sequence.
//!
//! # Design
//! The engine is stateless: each call takes the full record slice and a
//! parameter mapping and returns borrowed records, so no stage copies
//! record data. Stages apply in a fixed order — owner, category, status,
//! substring, orderBy, limit — because ordering and limiting are positional
//! operations over whatever survives the filters before them.
//!
//! Two behaviors are deliberate quirks of this API's contract, pinned by
//! tests rather than corrected:
//! - the `status` filter selects complete records only when the raw value
//!   is exactly `"complete"`; any other value, including `"Complete"`,
//!   selects incomplete records;
//! - an unrecognized `orderBy` field yields an empty result instead of an
//!   error.

use std::collections::BTreeMap;

use crate::error::QueryError;
use crate::types::Todo;

/// Query parameters as key → ordered value list, mirroring URL query-string
/// semantics. Only the first value of a key is consulted; unrecognized keys
/// are ignored.
pub type ParamMap = BTreeMap<String, Vec<String>>;

/// First value for `key`, if the key is present with at least one value.
fn first<'p>(params: &'p ParamMap, key: &str) -> Option<&'p str> {
    params.get(key).and_then(|values| values.first()).map(String::as_str)
}

/// Run the full pipeline over `todos`.
///
/// An empty mapping returns every record in its input order. The only
/// failure is an unparseable `limit` value, which rejects the whole query.
pub fn filter_todos<'a>(
    todos: &'a [Todo],
    params: &ParamMap,
) -> Result<Vec<&'a Todo>, QueryError> {
    let mut selected: Vec<&Todo> = todos.iter().collect();

    if let Some(owner) = first(params, "owner") {
        selected.retain(|todo| todo.owner == owner);
    }
    if let Some(category) = first(params, "category") {
        selected.retain(|todo| todo.category == category);
    }
    if let Some(raw) = first(params, "status") {
        // "complete" selects complete records; every other value selects
        // incomplete ones. See module docs.
        let wanted = raw == "complete";
        selected.retain(|todo| todo.status == wanted);
    }
    // The HTTP layer historically accepted both spellings for the body
    // substring filter; each present key applies as an ordinary filter.
    if let Some(needle) = first(params, "contains") {
        selected.retain(|todo| todo.body.contains(needle));
    }
    if let Some(needle) = first(params, "body") {
        selected.retain(|todo| todo.body.contains(needle));
    }
    if let Some(field) = first(params, "orderBy") {
        selected = order_by(selected, field);
    }
    if let Some(raw) = first(params, "limit") {
        let limit: usize = raw
            .parse()
            .map_err(|_| QueryError::BadLimit(raw.to_string()))?;
        selected.truncate(limit);
    }

    Ok(selected)
}

/// Sort ascending by the named field. The sort is stable, so records that
/// compare equal keep their prior relative order. An unrecognized field
/// name returns an empty sequence (see module docs).
fn order_by<'a>(mut todos: Vec<&'a Todo>, field: &str) -> Vec<&'a Todo> {
    match field {
        "owner" => todos.sort_by(|a, b| a.owner.cmp(&b.owner)),
        "body" => todos.sort_by(|a, b| a.body.cmp(&b.body)),
        "status" => todos.sort_by(|a, b| a.status.cmp(&b.status)),
        "category" => todos.sort_by(|a, b| a.category.cmp(&b.category)),
        _ => return Vec::new(),
    }
    todos
}

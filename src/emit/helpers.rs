//! Filters available to every unit template.

use std::collections::HashMap;

use tera::{from_value, Tera, Value};

use crate::{naming, registry};

/// Registers every filter on `tera`.
pub(super) fn register(tera: &mut Tera) {
    tera.register_filter("lower_first", lower_first);
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("field", field);
    tera.register_filter("merge", merge);
    tera.register_filter("sentence", sentence);
}

fn lower_first(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(naming::lower_first(text("lower_first", value)?)))
}

fn snake_case(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(naming::snake_case(text("snake_case", value)?)))
}

fn field(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(naming::field_ident(text("field", value)?)))
}

/// `list | merge(with=other)`: sorted union of two name lists.
fn merge(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let with = args
        .get("with")
        .ok_or_else(|| tera::Error::msg("filter `merge` expects a `with` argument"))?;
    let merged = registry::merge(&names("merge", value)?, &names("merge", with)?);
    Ok(Value::Array(merged.into_iter().map(Value::String).collect()))
}

fn sentence(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(to_sentence(text("sentence", value)?)))
}

/// Collapses whitespace onto one line and closes the text with a period.
fn to_sentence(text: &str) -> String {
    let mut out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !out.is_empty() && !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}

fn text<'a>(filter: &str, value: &'a Value) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("filter `{filter}` expects a string, got {value}")))
}

fn names(filter: &str, value: &Value) -> tera::Result<Vec<String>> {
    from_value(value.clone()).map_err(|e| {
        tera::Error::msg(format!("filter `{filter}` expects a list of names: {e}"))
    })
}

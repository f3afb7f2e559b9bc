use goalflow_core::badge::{classify_priority, classify_status, Badge};
use goalflow_core::types::{Priority, Status};
use serde::Serialize;

use crate::output::{print_json, print_table};

#[derive(Serialize)]
struct ClassifiedValue {
    input: String,
    label: String,
    style: String,
}

/// Show the display badge for each raw value. Classification is total, so
/// this never fails no matter what strings come in. With no values the
/// whole canonical set is listed as a legend.
pub fn run(values: &[String], priority: bool, json: bool) -> anyhow::Result<()> {
    let inputs: Vec<String> = if values.is_empty() {
        if priority {
            Priority::all().iter().map(|p| p.to_string()).collect()
        } else {
            Status::known().iter().map(|s| s.to_string()).collect()
        }
    } else {
        values.to_vec()
    };

    let classified: Vec<ClassifiedValue> = inputs
        .into_iter()
        .map(|value| {
            let Badge { label, style } = if priority {
                classify_priority(&value)
            } else {
                classify_status(&value)
            };
            ClassifiedValue {
                input: value,
                label,
                style: style.to_string(),
            }
        })
        .collect();

    if json {
        return print_json(&classified);
    }

    let rows: Vec<Vec<String>> = classified
        .into_iter()
        .map(|c| vec![c.input, c.label, c.style])
        .collect();
    print_table(&["INPUT", "LABEL", "STYLE"], &rows);
    Ok(())
}

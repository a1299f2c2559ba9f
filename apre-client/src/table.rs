//! Report table view model
//!
//! Turns report rows into labeled columns with client-side sorting and
//! pagination. Rendering is left to the caller.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;
use shared::models::{AgentPerformanceRecord, UNKNOWN_AGENT};

/// Display format for dates in report tables
pub const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Field name in the row object
    pub key: String,
    /// Header text
    pub label: String,
    pub sortable: bool,
}

impl Column {
    /// Column with a label derived from the field name
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let label = label_for(&key);
        Self {
            key,
            label,
            sortable: true,
        }
    }

    pub fn labeled(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Display values, one per column
    pub cells: Vec<Value>,
    /// Values compared when sorting; differs from `cells` for formatted dates
    #[serde(skip)]
    sort_keys: Vec<Value>,
}

impl Row {
    fn new(cells: Vec<Value>) -> Self {
        Self {
            sort_keys: cells.clone(),
            cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

/// One page of rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    /// Zero-based
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub rows: &'a [Row],
}

/// `callDuration` -> `Call Duration`
pub fn label_for(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut word_start = true;
    for ch in key.chars() {
        if ch == '_' {
            if !label.is_empty() && !label.ends_with(' ') {
                label.push(' ');
            }
            word_start = true;
            continue;
        }
        if ch.is_uppercase() && !label.is_empty() && !label.ends_with(' ') {
            label.push(' ');
        }
        if word_start {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        word_start = false;
    }
    label
}

impl Table {
    /// Build a table from JSON row objects; missing fields become `null`
    pub fn from_rows<T: Serialize>(columns: Vec<Column>, rows: &[T]) -> serde_json::Result<Self> {
        let rows = rows
            .iter()
            .map(|row| {
                let value = serde_json::to_value(row)?;
                Ok(Row::new(
                    columns
                        .iter()
                        .map(|c| value.get(&c.key).cloned().unwrap_or(Value::Null))
                        .collect(),
                ))
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self { columns, rows })
    }

    pub fn column_index(&self, label_or_key: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.label == label_or_key || c.key == label_or_key)
    }

    /// Stable sort on one column; returns `false` if the column is unknown
    /// or not sortable. Missing values stay last in both directions.
    pub fn sort_by(&mut self, column: &str, direction: SortDirection) -> bool {
        let Some(index) = self.column_index(column) else {
            return false;
        };
        if !self.columns[index].sortable {
            return false;
        }

        self.rows.sort_by(|a, b| {
            let (a, b) = (&a.sort_keys[index], &b.sort_keys[index]);
            match (a.is_null(), b.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ord = compare_values(a, b);
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                }
            }
        });
        true
    }

    /// Number of pages for `size` rows per page
    pub fn total_pages(&self, size: usize) -> usize {
        self.rows.len().div_ceil(size.max(1))
    }

    /// Rows of page `index`; past the end yields an empty page
    pub fn page(&self, index: usize, size: usize) -> Page<'_> {
        let size = size.max(1);
        let start = index.saturating_mul(size).min(self.rows.len());
        let end = start.saturating_add(size).min(self.rows.len());
        Page {
            index,
            size,
            total_pages: self.total_pages(size),
            total_rows: self.rows.len(),
            rows: &self.rows[start..end],
        }
    }
}

/// Numbers numerically, everything else by its text
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => text(a).cmp(&text(b)),
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Agent performance by region, as shown in the region report
///
/// Dates are shown as `MM/DD/YYYY` but sort chronologically. Agents without
/// details are shown as "Unknown".
pub fn agent_performance_table(records: &[AgentPerformanceRecord]) -> Table {
    let columns = vec![
        Column::labeled("date", "Date"),
        Column::labeled("region", "Region").unsortable(),
        Column::labeled("agent", "Agent").unsortable(),
        Column::labeled("team", "Team"),
        Column::new("callDuration"),
        Column::new("resolutionTime"),
        Column::labeled("customerFeedback", "Feedback").unsortable(),
    ];

    let rows = records
        .iter()
        .map(|r| {
            let agent = r
                .agent_details
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_AGENT.to_string());
            let mut row = Row::new(vec![
                Value::String(r.date.format(DATE_FORMAT).to_string()),
                Value::String(r.region.clone()),
                Value::String(agent),
                r.team.clone().map(Value::String).unwrap_or(Value::Null),
                Value::from(r.call_duration),
                Value::from(r.resolution_time),
                r.customer_feedback.clone(),
            ]);
            row.sort_keys[0] = Value::String(r.date.to_rfc3339());
            row
        })
        .collect();

    Table { columns, rows }
}

//! In-memory rows of typed values.

use std::cmp::Ordering;
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use datum_result::{Error, Result};
use datum_types::column::build_column;
use datum_types::strategy::strategy;
use datum_types::{Kind, Value};

/// Rows stored column-wise as [`Value`]s under a fixed `(name, kind)` schema.
///
/// Inserts are all-or-nothing: a literal that does not parse for its column
/// rejects the whole row and leaves the set unchanged.
#[derive(Debug, Clone)]
pub struct RowSet {
    columns: Vec<(String, Kind)>,
    values: Vec<Vec<Value>>,
}

impl RowSet {
    pub fn new(columns: Vec<(String, Kind)>) -> Self {
        let values = columns.iter().map(|_| Vec::new()).collect();
        Self { columns, values }
    }

    pub fn columns(&self) -> &[(String, Kind)] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse one row of text literals, one per column.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgumentError`] for a wrong arity or any literal its
    /// column's kind rejects (for DATE: bad shape or no such calendar day).
    pub fn insert(&mut self, literals: &[&str]) -> Result<()> {
        if literals.len() != self.columns.len() {
            return Err(Error::InvalidArgumentError(format!(
                "row has {} values, table has {} columns",
                literals.len(),
                self.columns.len()
            )));
        }
        let row = self
            .columns
            .iter()
            .zip(literals)
            .map(|((name, kind), text)| {
                Value::from_text(*kind, text).map_err(|err| {
                    tracing::debug!(column = %name, literal = text, %err, "row rejected");
                    err
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.push_row(row)
    }

    /// Append already-typed values, one per column.
    ///
    /// A DATE whose day-count names no legal date rejects the row, as does a
    /// value of the wrong kind.
    pub fn insert_values(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::InvalidArgumentError(format!(
                "row has {} values, table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        for ((name, kind), value) in self.columns.iter().zip(&row) {
            if value.kind() != *kind {
                return Err(Error::InvalidArgumentError(format!(
                    "column '{name}' holds {kind}, got a {} value",
                    value.kind()
                )));
            }
            value.check_storable().map_err(|err| {
                tracing::debug!(column = %name, %err, "row rejected");
                err
            })?;
        }
        self.push_row(row)
    }

    fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        for (column, value) in self.values.iter_mut().zip(row) {
            column.push(value);
        }
        tracing::trace!(rows = self.len(), "row appended");
        Ok(())
    }

    /// Every row rendered as text, in insertion order.
    pub fn select_all(&self) -> Vec<Vec<String>> {
        (0..self.len())
            .map(|row| self.values.iter().map(|col| col[row].as_text()).collect())
            .collect()
    }

    /// Index of the column called `name`.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| Error::InvalidArgumentError(format!("unknown column '{name}'")))
    }

    /// Snapshot the rows as an Arrow batch, one array per column.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<Field> = self
            .columns
            .iter()
            .map(|(name, kind)| Field::new(name, kind.arrow_type(), false))
            .collect();
        let arrays = self
            .columns
            .iter()
            .zip(&self.values)
            .map(|((_, kind), values)| build_column(*kind, values))
            .collect::<Result<Vec<ArrayRef>>>()?;
        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
    }

    /// Row indices ordered by `column`, compared slot-wise on its Arrow array.
    ///
    /// Incomparable slots keep their relative order.
    pub fn order_by(&self, column: &str) -> Result<Vec<usize>> {
        let idx = self.column_index(column)?;
        let kind = self.columns[idx].1;
        let array = build_column(kind, &self.values[idx])?;
        let strategy = strategy(kind);
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            strategy
                .compare_columns(array.as_ref(), array.as_ref(), a, b)
                .unwrap_or(Ordering::Equal)
        });
        Ok(order)
    }
}

use std::collections::HashMap;

/// A single cell value as loaded or produced by a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

/// A possibly-absent cell
pub type Cell = Option<Value>;

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The string content, or `None` for numbers
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Coerce to a finite number. Text that does not parse yields `None`.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// An ordered table of named columns.
///
/// Rows always have exactly one cell per column. When a header repeats a
/// column name, lookups by name resolve to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    index: HashMap<String, usize>,
}

/// A table exactly as loaded from an input file
pub type RawTable = Table;

/// A table in the canonical IMGT-style schema
pub type CanonicalTable = Table;

impl Table {
    #[must_use]
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            columns,
            rows: Vec::new(),
            index,
        }
    }

    /// Append a row, padding with absent cells or truncating to the column count
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Cell at `row` in column `name`
    #[must_use]
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.column_index(name)?;
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// All cells in column `name`, in row order
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = Option<&'a Value>>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[col].as_ref()))
    }
}

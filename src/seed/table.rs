//! Seed table descriptions: column lists and the table they belong to.

use alloc::string::String;

type IndexSet<T> = indexmap::IndexSet<T, hashbrown::DefaultHashBuilder>;

/// Errors produced while describing, reading or writing a seed table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// The script has no `VALUES` keyword outside comments and literals.
    #[error("No VALUES clause found in the script")]
    ValuesNotFound,
    /// A column list named the same column twice.
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),
    /// A column list was empty.
    #[error("A seed table needs at least one column")]
    NoColumns,
    /// A row handed to the writer does not match the column list.
    #[error("Row {row} has {found} values, expected {expected}")]
    RowWidth {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of values the column list requires.
        expected: usize,
        /// Number of values the row actually has.
        found: usize,
    },
}

/// Ordered, duplicate-free column list of a seed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    names: IndexSet<String>,
}

impl Columns {
    /// Column order of the `pasar_malams` table.
    pub const PASAR_MALAM: [&'static str; 19] = [
        "id",
        "name",
        "address",
        "district",
        "state",
        "status",
        "description",
        "area_m2",
        "total_shop",
        "parking_available",
        "parking_accessible",
        "parking_notes",
        "amen_toilet",
        "amen_prayer_room",
        "location",
        "schedule",
        "created_at",
        "updated_at",
        "shop_list",
    ];

    /// Build a column list, preserving the given order.
    ///
    /// # Errors
    /// Returns [`SeedError::DuplicateColumn`] when a name repeats and
    /// [`SeedError::NoColumns`] when `names` yields nothing.
    pub fn new<I, S>(names: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::default();
        for name in names {
            let name = name.into();
            if set.contains(&name) {
                return Err(SeedError::DuplicateColumn(name));
            }
            set.insert(name);
        }
        if set.is_empty() {
            return Err(SeedError::NoColumns);
        }
        Ok(Self { names: set })
    }

    /// The 19 columns of the `pasar_malams` table, in table order.
    #[must_use]
    pub fn pasar_malams() -> Self {
        Self {
            names: Self::PASAR_MALAM.iter().copied().map(String::from).collect(),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column name at `index`, if in range.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }

    /// Position of a column name, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    /// Iterate the column names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a str;
    type IntoIter = core::iter::Map<indexmap::set::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&String) -> &str = String::as_str;
        self.names.iter().map(as_str)
    }
}

/// A seed table: schema name, table name, and column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSchema {
    schema: String,
    table: String,
    columns: Columns,
}

impl SeedSchema {
    /// Describe a table.
    #[must_use]
    pub fn new(schema: &str, table: &str, columns: Columns) -> Self {
        Self {
            schema: String::from(schema),
            table: String::from(table),
            columns,
        }
    }

    /// The dataset's `"public"."pasar_malams"` table.
    #[must_use]
    pub fn pasar_malams() -> Self {
        Self::new("public", "pasar_malams", Columns::pasar_malams())
    }

    /// Schema (namespace) name, unquoted.
    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Table name, unquoted.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Column order of the table.
    #[must_use]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// The table reference as SQL writes it, e.g. `"public"."pasar_malams"`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        let mut name = quote_identifier(&self.schema);
        name.push('.');
        name.push_str(&quote_identifier(&self.table));
        name
    }
}

/// Quote an identifier, doubling any embedded double quotes.
pub(crate) fn quote_identifier(identifier: &str) -> String {
    let mut quoted = String::with_capacity(identifier.len() + 2);
    quoted.push('"');
    for ch in identifier.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

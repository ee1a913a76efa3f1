//! In-memory table model and the builder used to declare it

use serde::Serialize;

use super::constraint::{Constraint, Index, PrimaryKey};
use super::types::{DefaultValue, TypeSpec};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub sql_type: TypeSpec,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub auto_increment: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: TypeSpec) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
            default: None,
            auto_increment: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Tables without a name cannot be rendered or looked up
    pub name: Option<String>,
    pub columns: Vec<Column>,
    /// Primary keys and indices in declaration order
    pub constraints: Vec<Constraint>,
}

impl Table {
    /// An unnamed table. Give it a name with [`Table::with_name`] before rendering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a column. Column-level primary key markers join the table's single
    /// primary key in column order; column-level index markers become
    /// single-column indices at this point in the declaration.
    pub fn column(mut self, def: ColumnDef) -> Self {
        let ColumnDef {
            column,
            primary_key,
            index,
        } = def;

        if primary_key {
            let existing = self.constraints.iter_mut().find_map(|c| match c {
                Constraint::PrimaryKey(pk) if pk.from_column_markers => Some(pk),
                _ => None,
            });
            match existing {
                Some(pk) => pk.columns.push(column.name.clone()),
                // A table-level key is never extended; a second key is
                // reported when the table is rendered
                None => self.constraints.push(Constraint::PrimaryKey(PrimaryKey {
                    from_column_markers: true,
                    ..PrimaryKey::new([column.name.clone()])
                })),
            }
        }

        if let Some(index) = index {
            self.constraints.push(Constraint::Index(Index {
                columns: vec![column.name.clone()],
                ..index
            }));
        }

        self.columns.push(column);
        self
    }

    /// Declare a primary key spanning `columns`
    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints
            .push(Constraint::PrimaryKey(PrimaryKey::new(columns)));
        self
    }

    /// Declare a primary key with an explicit constraint name
    pub fn named_primary_key<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints
            .push(Constraint::PrimaryKey(PrimaryKey::new(columns).named(name)));
        self
    }

    pub fn index<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_index(Index::new(columns))
    }

    pub fn unique_index<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_index(Index::new(columns).unique())
    }

    pub fn named_index<I, S>(self, name: impl Into<String>, columns: I, unique: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = Index::new(columns).named(name);
        self.with_index(if unique { index.unique() } else { index })
    }

    pub fn with_index(mut self, index: Index) -> Self {
        self.constraints.push(Constraint::Index(index));
        self
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &PrimaryKey> {
        self.constraints.iter().filter_map(|c| match c {
            Constraint::PrimaryKey(pk) => Some(pk),
            Constraint::Index(_) => None,
        })
    }

    pub fn indices(&self) -> impl Iterator<Item = &Index> {
        self.constraints.iter().filter_map(|c| match c {
            Constraint::Index(index) => Some(index),
            Constraint::PrimaryKey(_) => None,
        })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// Column declaration: the column itself plus the constraint markers that
/// [`Table::column`] turns into table constraints.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    column: Column,
    primary_key: bool,
    index: Option<Index>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, sql_type: TypeSpec) -> Self {
        Self {
            column: Column::new(name, sql_type),
            primary_key: false,
            index: None,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, TypeSpec::Integer)
    }

    pub fn long(name: impl Into<String>) -> Self {
        Self::new(name, TypeSpec::Long)
    }

    pub fn varchar(name: impl Into<String>, length: i64) -> Self {
        Self::new(name, TypeSpec::Varchar(length))
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, TypeSpec::Boolean)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, TypeSpec::Text)
    }

    pub fn decimal(name: impl Into<String>, precision: i64, scale: i64) -> Self {
        Self::new(name, TypeSpec::Decimal { precision, scale })
    }

    pub fn nullable(mut self) -> Self {
        self.column.nullable = true;
        self
    }

    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.column.default = Some(value.into());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.column.auto_increment = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn index(mut self) -> Self {
        self.index = Some(Index::new(Vec::<String>::new()));
        self
    }

    pub fn unique_index(mut self) -> Self {
        self.index = Some(Index::new(Vec::<String>::new()).unique());
        self
    }

    pub fn index_named(mut self, name: impl Into<String>) -> Self {
        self.index = Some(Index::new(Vec::<String>::new()).named(name));
        self
    }

    pub fn unique_index_named(mut self, name: impl Into<String>) -> Self {
        self.index = Some(Index::new(Vec::<String>::new()).named(name).unique());
        self
    }
}

impl From<Column> for ColumnDef {
    fn from(column: Column) -> Self {
        Self {
            column,
            primary_key: false,
            index: None,
        }
    }
}

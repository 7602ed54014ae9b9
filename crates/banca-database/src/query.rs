//! Example-driven `SELECT` construction.
//!
//! An [`Example`] contributes its populated attributes as predicates and
//! its ordering; a [`PageRequest`] contributes the result window. The
//! values are always bound as parameters, while column names are
//! checked to be plain identifiers before being spliced into the SQL.

use sqlx::{QueryBuilder, Sqlite};

use banca_core::error::AppError;
use banca_core::result::AppResult;
use banca_core::traits::Example;
use banca_core::types::{FilterField, FilterValue, PageRequest, SortField};

/// A validated, windowed query over one table.
#[derive(Debug, Clone)]
pub struct ExampleQuery {
    table: &'static str,
    columns: &'static str,
    predicates: Vec<FilterField>,
    ordering: Vec<SortField>,
    page: PageRequest,
}

impl ExampleQuery {
    /// Collect the predicates of `example`, rejecting any column that is
    /// not a plain identifier.
    pub fn new<E: Example>(
        table: &'static str,
        columns: &'static str,
        example: &E,
        page: &PageRequest,
    ) -> AppResult<Self> {
        let predicates = example.predicates();
        if let Some(bad) = predicates.iter().find(|p| !p.has_valid_column()) {
            return Err(AppError::validation(format!(
                "Invalid filter column '{}'",
                bad.field
            )));
        }

        let ordering = E::ordering();
        if let Some(bad) = ordering.iter().find(|s| !s.has_valid_column()) {
            return Err(AppError::validation(format!(
                "Invalid sort column '{}'",
                bad.field
            )));
        }

        Ok(Self {
            table,
            columns,
            predicates,
            ordering,
            page: *page,
        })
    }

    /// Whether the window excludes every row, so storage need not be queried.
    pub fn is_empty_window(&self) -> bool {
        self.page.is_empty_window()
    }

    /// Render the statement with its bound parameters.
    pub fn builder(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", self.columns, self.table));

        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(&predicate.field);
            qb.push(" = ");
            match &predicate.value {
                FilterValue::Text(v) => qb.push_bind(v.clone()),
                FilterValue::Integer(v) => qb.push_bind(*v),
                FilterValue::Timestamp(v) => qb.push_bind(*v),
            };
        }

        if !self.ordering.is_empty() {
            let terms: Vec<String> = self.ordering.iter().map(SortField::as_sql).collect();
            qb.push(" ORDER BY ");
            qb.push(terms.join(", "));
        }

        qb.push(" LIMIT ");
        qb.push_bind(self.page.sql_limit());
        qb.push(" OFFSET ");
        qb.push_bind(self.page.sql_offset());
        qb
    }
}

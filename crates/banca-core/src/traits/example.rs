//! Query-by-example contract.

use crate::types::filter::FilterField;
use crate::types::sorting::SortField;

/// A sparsely populated template of an entity used as a search filter.
///
/// Implementations keep every filterable attribute as an `Option`; a
/// populated attribute becomes a predicate, an empty one never filters.
/// The predicates are combined with logical AND, so an example with no
/// populated attribute matches every stored record.
pub trait Example {
    /// Predicates contributed by the populated attributes.
    fn predicates(&self) -> Vec<FilterField>;

    /// Ordering applied to search results.
    fn ordering() -> Vec<SortField>;

    /// Whether the example leaves every attribute unset.
    fn is_unconstrained(&self) -> bool {
        self.predicates().is_empty()
    }
}

//! In-memory category repository.

use catalog_core::types::sorting::{SortField, SortFields};
use catalog_entity::category::Category;

use super::searchable::{InMemorySearchableRepository, SearchPolicy};

/// Category search: case-insensitive substring match on the name, sortable
/// by `name` and `created_at`, newest first by default.
#[derive(Debug)]
pub struct CategorySearchPolicy {
    fields: SortFields<Category>,
}

impl CategorySearchPolicy {
    /// Create the category policy.
    pub fn new() -> Self {
        Self {
            fields: SortFields::new()
                .with("name", |a: &Category, b: &Category| a.name().cmp(b.name()))
                .with("created_at", |a: &Category, b: &Category| {
                    a.created_at().cmp(&b.created_at())
                }),
        }
    }
}

impl Default for CategorySearchPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPolicy<Category> for CategorySearchPolicy {
    type Filter = String;

    fn matches(&self, item: &Category, filter: &String) -> bool {
        item.name().to_lowercase().contains(&filter.to_lowercase())
    }

    fn sort_fields(&self) -> &SortFields<Category> {
        &self.fields
    }

    fn default_sort(&self) -> SortField {
        SortField::desc("created_at")
    }
}

/// Searchable in-memory store of categories.
pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchPolicy>;

impl CategoryInMemoryRepository {
    /// Create an empty category store.
    pub fn empty() -> Self {
        Self::new(CategorySearchPolicy::new())
    }
}

impl Default for CategoryInMemoryRepository {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use catalog_core::traits::{Repository, SearchableRepository};
    use catalog_core::types::params::{RawSearchParams, SearchParams};
    use catalog_core::types::sorting::SortDirection;
    use catalog_entity::category::NewCategory;
    use catalog_entity::CategoryRepository;

    use super::*;

    fn category(name: &str, seconds_from_now: i64) -> Category {
        Category::new(
            NewCategory::named(name).created_at(Utc::now() + Duration::seconds(seconds_from_now)),
        )
        .expect("valid category")
    }

    fn names(items: &[Category]) -> Vec<&str> {
        items.iter().map(Category::name).collect()
    }

    fn assert_category_repository<R: CategoryRepository>(_: &R) {}

    #[test]
    fn test_is_a_category_repository() {
        let repo = CategoryInMemoryRepository::empty();
        assert_category_repository(&repo);
        assert_eq!(repo.sortable_fields(), vec!["name", "created_at"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let policy = CategorySearchPolicy::new();
        let items = vec![category("test", 0), category("TEST", 0), category("fake", 0)];
        let filtered = policy.apply_filter(items.clone(), Some(&"TEST".to_string()));
        assert_eq!(filtered, vec![items[0].clone(), items[1].clone()]);
    }

    #[test]
    fn test_unset_filter_returns_input() {
        let policy = CategorySearchPolicy::new();
        let items = vec![category("Movie", 0)];
        assert_eq!(policy.apply_filter(items.clone(), None), items);
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let items = vec![category("test", 0), category("TEST", 100), category("fake", 200)];
        let repo = CategoryInMemoryRepository::with_items(CategorySearchPolicy::new(), items);
        let sorted = repo.apply_sort(repo.items().to_vec(), None, None);
        assert_eq!(names(&sorted), vec!["fake", "TEST", "test"]);
    }

    #[test]
    fn test_unknown_sort_field_uses_default_order() {
        let items = vec![category("b", 0), category("c", 100), category("a", 200)];
        let repo = CategoryInMemoryRepository::with_items(CategorySearchPolicy::new(), items);
        let sorted = repo.apply_sort(
            repo.items().to_vec(),
            Some("description"),
            Some(SortDirection::Asc),
        );
        assert_eq!(names(&sorted), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_by_name() {
        let items = vec![category("c", 0), category("a", 1), category("b", 2)];
        let repo = CategoryInMemoryRepository::with_items(CategorySearchPolicy::new(), items);
        let sorted = repo.apply_sort(repo.items().to_vec(), Some("name"), Some(SortDirection::Asc));
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
        let sorted = repo.apply_sort(repo.items().to_vec(), Some("name"), Some(SortDirection::Desc));
        assert_eq!(names(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_search_without_params_lists_newest_first() {
        let mut repo = CategoryInMemoryRepository::empty();
        for (i, name) in ["first", "second", "third"].into_iter().enumerate() {
            repo.insert(category(name, i as i64 * 10)).expect("insert");
        }
        let result = repo.search(&SearchParams::default()).expect("search");
        assert_eq!(names(result.items()), vec!["third", "second", "first"]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.per_page(), 15);
        assert_eq!(result.sort(), None);
        assert_eq!(result.sort_dir(), None);
    }

    #[test]
    fn test_search_with_filter_sort_and_pages() {
        let mut repo = CategoryInMemoryRepository::empty();
        for (i, name) in ["a", "AAA", "AaA", "b", "c"].into_iter().enumerate() {
            repo.insert(category(name, i as i64)).expect("insert");
        }
        let raw = RawSearchParams::default()
            .page(1)
            .per_page(2)
            .sort("name")
            .sort_dir("asc")
            .filter("a");

        let first = repo.search(&SearchParams::from_raw(raw.clone())).expect("search");
        assert_eq!(names(first.items()), vec!["AAA", "AaA"]);
        assert_eq!(first.total(), 3);
        assert_eq!(first.last_page(), 2);

        let second = repo.search(&SearchParams::from_raw(raw.page(2))).expect("search");
        assert_eq!(names(second.items()), vec!["a"]);
    }

    #[test]
    fn test_search_with_descending_name_sort() {
        let mut repo = CategoryInMemoryRepository::empty();
        for (i, name) in ["a", "AAA", "AaA", "b", "c"].into_iter().enumerate() {
            repo.insert(category(name, i as i64)).expect("insert");
        }
        let raw = RawSearchParams::default()
            .per_page(2)
            .sort("name")
            .sort_dir("DESC")
            .filter("A");
        let result = repo.search(&SearchParams::from_raw(raw)).expect("search");
        assert_eq!(names(result.items()), vec!["a", "AaA"]);
        assert_eq!(result.sort_dir(), Some(SortDirection::Desc));
    }
}

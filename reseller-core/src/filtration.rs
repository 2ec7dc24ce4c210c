use crate::extraction::FilterUniverse;
use crate::filter_state::ActiveFilters;

/// Shared, read-only inputs visible to every stage of a filtration
pub struct FiltrationContext<'a, 'f, T> {
    /// The unfiltered dataset
    pub all_items: &'a [T],
    pub all_filters: &'f FilterUniverse,
}

/// One step of a filtration pipeline
///
/// A stage receives the previous stage's result and returns the next one.
/// Results borrow from `context.all_items`, so stages can never mutate the
/// dataset.
pub trait FilterStage<T> {
    fn apply<'a>(
        &self,
        items: Vec<&'a T>,
        active_filters: &ActiveFilters,
        context: &FiltrationContext<'a, '_, T>,
    ) -> Vec<&'a T>;
}

/// An ordered composition of filter stages
pub struct Filtration<T> {
    stages: Vec<Box<dyn FilterStage<T>>>,
}

impl<T> Filtration<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage; stages run in the order they were added
    pub fn stage<S>(mut self, stage: S) -> Self
    where
        S: FilterStage<T> + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage over `all_items`
    /// The working result starts empty when `start_from_empty` is set,
    /// otherwise it starts as the whole dataset
    pub fn apply<'a>(
        &self,
        all_items: &'a [T],
        active_filters: &ActiveFilters,
        all_filters: &FilterUniverse,
        start_from_empty: bool,
    ) -> Vec<&'a T> {
        let context = FiltrationContext {
            all_items,
            all_filters,
        };

        let initial = if start_from_empty {
            Vec::new()
        } else {
            all_items.iter().collect()
        };

        self.stages.iter().fold(initial, |result, stage| {
            stage.apply(result, active_filters, &context)
        })
    }
}

impl<T> Default for Filtration<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeepEven;

    impl FilterStage<u32> for KeepEven {
        fn apply<'a>(
            &self,
            items: Vec<&'a u32>,
            _active_filters: &ActiveFilters,
            _context: &FiltrationContext<'a, '_, u32>,
        ) -> Vec<&'a u32> {
            items.into_iter().filter(|n| **n % 2 == 0).collect()
        }
    }

    /// Adds back the first item of the full dataset if missing
    struct AddFirst;

    impl FilterStage<u32> for AddFirst {
        fn apply<'a>(
            &self,
            mut items: Vec<&'a u32>,
            _active_filters: &ActiveFilters,
            context: &FiltrationContext<'a, '_, u32>,
        ) -> Vec<&'a u32> {
            if let Some(first) = context.all_items.first() {
                if !items.iter().any(|item| std::ptr::eq(*item, first)) {
                    items.push(first);
                }
            }
            items
        }
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let items = vec![1, 2, 3];
        let filtration = Filtration::<u32>::new();
        let result = filtration.apply(&items, &ActiveFilters::new(), &FilterUniverse::default(), false);
        assert_eq!(result, vec![&1, &2, &3]);
        assert!(filtration.is_empty());
    }

    #[test]
    fn test_start_from_empty() {
        let items = vec![1, 2, 3];
        let filtration = Filtration::<u32>::new().stage(KeepEven);
        let result = filtration.apply(&items, &ActiveFilters::new(), &FilterUniverse::default(), true);
        assert!(result.is_empty());
    }

    #[test]
    fn test_stages_run_in_order() {
        let items = vec![1, 2, 3, 4];
        let universe = FilterUniverse::default();
        let active = ActiveFilters::new();

        let keep_then_add = Filtration::<u32>::new().stage(KeepEven).stage(AddFirst);
        assert_eq!(keep_then_add.apply(&items, &active, &universe, false), vec![&2, &4, &1]);

        let add_then_keep = Filtration::<u32>::new().stage(AddFirst).stage(KeepEven);
        assert_eq!(add_then_keep.apply(&items, &active, &universe, true), Vec::<&u32>::new());
        assert_eq!(add_then_keep.len(), 2);
    }

    #[test]
    fn test_apply_is_repeatable() {
        let items = vec![5, 6, 7, 8];
        let filtration = Filtration::<u32>::new().stage(KeepEven).stage(AddFirst);
        let universe = FilterUniverse::default();
        let active = ActiveFilters::new();

        let first = filtration.apply(&items, &active, &universe, false);
        let second = filtration.apply(&items, &active, &universe, false);
        assert_eq!(first, second);
        assert_eq!(items, vec![5, 6, 7, 8]);
    }
}

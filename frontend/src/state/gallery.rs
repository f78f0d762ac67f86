use std::fmt;
use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    ECommerce,
    Brand,
    App,
}

impl Category {
    /// Order used when generating items and laying out the filter bar.
    pub const ALL: [Category; 4] = [Category::Web, Category::ECommerce, Category::Brand, Category::App];

    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::ECommerce => "E-commerce",
            Category::Brand => "Brand",
            Category::App => "App",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Web),
        CategoryFilter::Only(Category::ECommerce),
        CategoryFilter::Only(Category::Brand),
        CategoryFilter::Only(Category::App),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image_ref: String,
}

/// Active portfolio filter over an immutable item list.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryFilterState {
    items: Rc<[GalleryItem]>,
    active: CategoryFilter,
}

pub enum GalleryAction {
    SetActive(CategoryFilter),
}

impl GalleryFilterState {
    pub fn new(items: impl Into<Rc<[GalleryItem]>>) -> Self {
        Self {
            items: items.into(),
            active: CategoryFilter::All,
        }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn shared_items(&self) -> Rc<[GalleryItem]> {
        self.items.clone()
    }

    pub fn set_active(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }

    /// Items passing the active filter, in source order.
    pub fn visible_items(&self) -> impl Iterator<Item = &GalleryItem> + '_ {
        let active = self.active;
        self.items.iter().filter(move |item| active.matches(item.category))
    }
}

impl Reducible for GalleryFilterState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GalleryAction::SetActive(filter) if filter == self.active => self,
            GalleryAction::SetActive(filter) => {
                let mut next = (*self).clone();
                next.set_active(filter);
                log::debug!("Portfolio filter set to {}", filter.label());
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::gallery_items;

    fn ids(state: &GalleryFilterState) -> Vec<u32> {
        state.visible_items().map(|item| item.id).collect()
    }

    #[test]
    fn all_returns_full_list_in_order() {
        let state = GalleryFilterState::new(gallery_items(9));
        assert_eq!(state.active(), CategoryFilter::All);
        assert_eq!(ids(&state), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn brand_filter_picks_three_and_seven() {
        let mut state = GalleryFilterState::new(gallery_items(9));
        state.set_active(CategoryFilter::Only(Category::Brand));
        assert_eq!(ids(&state), vec![3, 7]);
    }

    #[test]
    fn each_filter_keeps_only_its_category_in_source_order() {
        let source = gallery_items(9);
        for filter in CategoryFilter::OPTIONS {
            let mut state = GalleryFilterState::new(source.clone());
            state.set_active(filter);
            let visible: Vec<&GalleryItem> = state.visible_items().collect();
            let expected: Vec<&GalleryItem> = source.iter().filter(|i| filter.matches(i.category)).collect();
            assert_eq!(visible, expected, "filter {}", filter.label());
            assert!(visible.iter().all(|i| filter.matches(i.category)));
        }
    }

    #[test]
    fn works_with_any_item_list() {
        let items = vec![
            GalleryItem {
                id: 10,
                title: "Shop".into(),
                category: Category::ECommerce,
                image_ref: "a.png".into(),
            },
            GalleryItem {
                id: 4,
                title: "Mark".into(),
                category: Category::Brand,
                image_ref: "b.png".into(),
            },
            GalleryItem {
                id: 2,
                title: "Store".into(),
                category: Category::ECommerce,
                image_ref: "c.png".into(),
            },
        ];
        let state = Rc::new(GalleryFilterState::new(items));
        let state = state.reduce(GalleryAction::SetActive(CategoryFilter::Only(Category::ECommerce)));
        assert_eq!(ids(&state), vec![10, 2]);
        let state = state.reduce(GalleryAction::SetActive(CategoryFilter::Only(Category::App)));
        assert_eq!(ids(&state), Vec::<u32>::new());
    }

    #[test]
    fn reselecting_active_filter_is_a_no_op() {
        let state = Rc::new(GalleryFilterState::new(gallery_items(9)));
        let same = state.clone().reduce(GalleryAction::SetActive(CategoryFilter::All));
        assert!(Rc::ptr_eq(&state, &same));
    }
}

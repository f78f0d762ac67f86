use std::rc::Rc;

use yew::Reducible;

use super::gallery::GalleryItem;

/// Gallery item shown in the detail overlay, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    selected: Option<GalleryItem>,
}

pub enum ModalAction {
    Open(GalleryItem),
    Close,
    /// Drops the selection if it is no longer in the given list.
    Prune(Rc<[GalleryItem]>),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, item: GalleryItem) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The selection, provided it still exists in `items`. A stale selection reads as closed.
    pub fn selected_in<'a>(&'a self, items: &[GalleryItem]) -> Option<&'a GalleryItem> {
        self.selected.as_ref().filter(|selected| items.contains(selected))
    }

    /// Closes the modal when its item has gone from `items`. Returns whether it closed.
    pub fn prune(&mut self, items: &[GalleryItem]) -> bool {
        if self.is_open() && self.selected_in(items).is_none() {
            log::debug!("Selected project no longer listed, closing modal");
            self.close();
            true
        } else {
            false
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if !self.is_open() && !matches!(action, ModalAction::Open(_)) {
            return self;
        }
        let mut next = (*self).clone();
        match action {
            ModalAction::Open(item) => next.open(item),
            ModalAction::Close => next.close(),
            ModalAction::Prune(items) => {
                if !next.prune(&items) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::gallery_items;

    #[test]
    fn open_then_close_clears_selection() {
        let items = gallery_items(9);
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::Open(items[0].clone()))
            .reduce(ModalAction::Close);
        assert!(!state.is_open());
        assert_eq!(state.selected_in(&items), None);
    }

    #[test]
    fn last_open_wins() {
        let items = gallery_items(9);
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::Open(items[1].clone()))
            .reduce(ModalAction::Open(items[5].clone()));
        assert_eq!(state.selected_in(&items).map(|i| i.id), Some(6));
    }

    #[test]
    fn stale_selection_reads_as_closed() {
        let items = gallery_items(9);
        let mut state = ModalState::default();
        state.open(items[8].clone());
        assert!(state.selected_in(&items[..4]).is_none());
        assert!(state.selected_in(&items).is_some());
    }

    #[test]
    fn pruning_a_stale_selection_closes_the_modal() {
        let items = gallery_items(9);
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open(items[8].clone()));
        let remaining: Rc<[GalleryItem]> = items[..4].into();

        let state = state.reduce(ModalAction::Prune(remaining));
        assert!(!state.is_open());

        // the item coming back does not reopen the modal
        let state = state.reduce(ModalAction::Prune(items.clone().into()));
        assert!(!state.is_open());
        assert_eq!(state.selected_in(&items), None);
    }

    #[test]
    fn pruning_keeps_a_listed_selection() {
        let items = gallery_items(9);
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open(items[2].clone()));
        let after = state.clone().reduce(ModalAction::Prune(items.clone().into()));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.selected_in(&items).map(|i| i.id), Some(3));
    }

    #[test]
    fn close_when_closed_keeps_state() {
        let state = Rc::new(ModalState::default());
        let after = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &after));
    }
}

use std::rc::Rc;

use yew::Reducible;

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    open: bool,
}

pub enum NavAction {
    Toggle,
    /// Sent on in-page navigation so the menu never stays over the target section.
    Close,
}

impl NavigationState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close_on_navigate(self) -> Self {
        Self { open: false }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Toggle => self.toggle_open(),
            NavAction::Close => self.close_on_navigate(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

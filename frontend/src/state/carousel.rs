use std::rc::Rc;

use yew::Reducible;

/// Rotating position over a fixed list of `len` slides.
///
/// `epoch` changes on every manual selection. The auto-advance timer is keyed
/// on it, so picking a slide restarts the interval instead of letting a pending
/// tick skip straight past the chosen slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    epoch: u32,
}

pub enum CarouselAction {
    Tick,
    Select(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            epoch: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn select(&mut self, index: usize) {
        self.index = index % self.len;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Tick => next.tick(),
            CarouselAction::Select(index) => next.select(index),
        }
        Rc::new(next)
    }
}

//! View state behind the page: theme, mobile menu, portfolio filter and
//! modal, testimonial rotation. Nothing here touches the DOM directly.

pub mod carousel;
pub mod gallery;
pub mod modal;
pub mod navigation;
pub mod theme;

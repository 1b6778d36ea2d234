//! Browser-independent state behind each interactive controller. The
//! `app` components own one of these per controller and only translate
//! DOM events into calls on it.

pub mod catalog;
pub mod contact;
pub mod dialog;
pub mod menu;
pub mod notice;
pub mod reveal;
pub mod scroll;
pub mod theme;

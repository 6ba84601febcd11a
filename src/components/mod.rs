//! The components module contains every piece of the site's interactive UI.

mod app;
mod audio_player;
mod contact_form;
mod episodes;
mod home;
mod icons;
mod navigation;
mod page_effects;
mod site_view;

pub use app::*;
pub use audio_player::*;
pub use contact_form::*;
pub use episodes::*;
pub use home::*;
pub use icons::*;
pub use navigation::*;
pub use page_effects::*;
pub use site_view::*;

//! Defines the site's routes. The site is a single page inside the shell.

use crate::components::{Home, SiteShell};
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum SiteView {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
}

use crate::components::{Icon, NavbarScrolled};
use crate::content::NAV_LINKS;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

const HAMBURGER_ID: &str = "nav-hamburger";
const MENU_ID: &str = "nav-menu";

/// Open/closed state of the mobile slide-out menu. The hamburger and the
/// menu panel always share it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click somewhere on the page. Closes unless it landed inside the
    /// hamburger or the menu. Returns whether the state changed.
    pub fn document_clicked(&mut self, inside_hamburger: bool, inside_menu: bool) -> bool {
        if inside_hamburger || inside_menu || !self.open {
            return false;
        }
        self.open = false;
        true
    }

    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let scrolled = use_context::<NavbarScrolled>().0;
    let menu = use_signal(MenuState::default);

    #[cfg(target_arch = "wasm32")]
    {
        let menu = menu.clone();
        use_effect(move || install_outside_click(menu));
    }

    let state = menu();

    rsx! {
        nav { id: "navbar", class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "KTRP Podcast" }
                ul { id: MENU_ID, class: state.class("nav-menu"),
                    for link in NAV_LINKS.iter() {
                        li { key: "{link.href}",
                            a {
                                class: "nav-link",
                                href: link.href,
                                onclick: {
                                    let mut menu = menu.clone();
                                    move |_| menu.write().close()
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
                button {
                    id: HAMBURGER_ID,
                    class: state.class("nav-hamburger"),
                    aria_label: "Toggle navigation",
                    aria_expanded: if state.is_open() { "true" } else { "false" },
                    onclick: {
                        let mut menu = menu.clone();
                        move |_| menu.write().toggle()
                    },
                    Icon { name: "bars".to_string(), class: "hamburger-icon".to_string() }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn install_outside_click(menu: Signal<MenuState>) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let runtime = Runtime::current();
    let mut menu = menu.clone();

    let click_cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let _guard = RuntimeGuard::new(runtime.clone());
        if !menu.peek().is_open() {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let contains = |id: &str| {
            document
                .get_element_by_id(id)
                .map(|element| element.contains(target.as_ref()))
                .unwrap_or(false)
        };
        let (inside_hamburger, inside_menu) = (contains(HAMBURGER_ID), contains(MENU_ID));
        menu.write().document_clicked(inside_hamburger, inside_menu);
    }) as Box<dyn FnMut(_)>);

    let _ = document.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
    click_cb.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_toggles_both_classes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert_eq!(menu.class("nav-menu"), "nav-menu active");
        assert_eq!(menu.class("nav-hamburger"), "nav-hamburger active");
        menu.toggle();
        assert_eq!(menu.class("nav-menu"), "nav-menu");
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.document_clicked(true, false));
        assert!(!menu.document_clicked(false, true));
        assert!(menu.is_open());
        assert!(menu.document_clicked(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}

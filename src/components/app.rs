use crate::components::{
    use_performance_helpers, use_safety_net, use_scroll_reveal, use_smooth_scroll, AudioDegraded,
    NavbarScrolled, Navbar, PreloadHints, SiteView,
};
use crate::config::SiteConfig;
use dioxus::prelude::*;

/// Page shell: provides shared state and installs the page-wide behaviours
/// once, then renders the navbar around the routed page.
#[component]
pub fn SiteShell() -> Element {
    let config = use_context_provider(SiteConfig::default);
    let navbar_scrolled = use_signal(|| false);
    let audio_degraded = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| NavbarScrolled(navbar_scrolled));
    use_context_provider(|| AudioDegraded(audio_degraded));

    use_safety_net(audio_degraded);
    use_performance_helpers(&config, navbar_scrolled);
    use_smooth_scroll(&config);
    use_scroll_reveal(&config);

    rsx! {
        PreloadHints {}
        Navbar {}
        main { class: "site-main",
            Outlet::<SiteView> {}
        }
        footer { class: "site-footer",
            p { "KTRP Podcast. New episodes every week." }
        }
    }
}

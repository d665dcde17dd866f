//! Top navigation bar.

use leptos::*;
use leptos_router::*;

/// Routes shown in the navbar, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/optimizer", "Optimizer"),
    ("/about", "About Us"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" class="navlogo">
                <img src="/logo.png" alt="the logo is a drawn bird" width="50" height="50"/>
            </A>
            <div class="navlinks">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| view! {
                        <A href=href class="navlink" active_class="currentLink" exact=true>
                            {label}
                        </A>
                    })
                    .collect_view()}
            </div>
            <button class="navmenu">
                <img src="/menu-icon.svg" alt="three bars lying down" width="35" height="35"/>
            </button>
        </nav>
    }
}

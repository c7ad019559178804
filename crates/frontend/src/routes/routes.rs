use crate::pages::entry_form::EntryFormPage;
use crate::pages::menu_page::MenuPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/">"New entry"</A>
            <A href="/menu">"Categories"</A>
        </nav>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="page">
                <Routes fallback=|| view! { <p class="page__empty">"Page not found"</p> }>
                    <Route path=path!("/") view=EntryFormPage />
                    <Route path=path!("/menu") view=MenuPage />
                </Routes>
            </main>
        </Router>
    }
}

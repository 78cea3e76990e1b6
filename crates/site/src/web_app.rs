use form_showcase::ShowcaseApp;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Form Widgets" />
        <Meta name="description" content="Live documentation for the form widget toolkit." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=|| view! { <ShowcaseApp /> } />
                    <Route path="/components/:id" view=ComponentRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ComponentRoute() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params
            .with(|map| map.get("id").cloned())
            .unwrap_or_default()
    });

    view! { <ShowcaseApp selected=id /> }
}

//! Documentation surface for the form widget toolkit.
//!
//! Every catalog page lists the component's features, props and code samples
//! and renders live demos wired to the real `form_ui` widgets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
mod gallery;
mod previews;

use form_ui::{Icon, IconName, IconSize};
use gallery::CopyButton;
use leptos::*;

pub use catalog::{catalog, categories, find_component, ComponentDoc, ExampleDoc, PropDoc};

/// Route of a component page.
pub fn component_href(id: &str) -> String {
    format!("/components/{id}")
}

#[component]
fn Navigation(#[prop(into)] selected: Signal<String>) -> impl IntoView {
    let docs = catalog();
    view! {
        <nav class="showcase-nav" aria-label="Components">
            {categories()
                .into_iter()
                .map(|category| {
                    let entries = docs
                        .iter()
                        .filter(|doc| doc.category == category)
                        .map(|doc| {
                            let id = doc.id.clone();
                            let href = component_href(&id);
                            view! {
                                <li>
                                    <a
                                        href=href
                                        data-ui-selected=move || selected.with(|selected| selected == &id).to_string()
                                    >
                                        {doc.name.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view();
                    view! {
                        <section data-ui-slot="nav-group">
                            <h2>{category}</h2>
                            <ul>{entries}</ul>
                        </section>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn PropsTable(props: Vec<PropDoc>) -> impl IntoView {
    view! {
        <table class="showcase-table" data-ui-slot="props">
            <thead>
                <tr>
                    <th scope="col">"Prop"</th>
                    <th scope="col">"Type"</th>
                    <th scope="col">"Default"</th>
                    <th scope="col">"Description"</th>
                </tr>
            </thead>
            <tbody>
                {props
                    .into_iter()
                    .map(|prop| view! {
                        <tr>
                            <td>
                                <code>{prop.name}</code>
                                {prop.required.then(|| view! { <span data-ui-slot="required">"*"</span> })}
                            </td>
                            <td><code>{prop.ty}</code></td>
                            <td>{prop.default.unwrap_or_else(|| "-".to_string())}</td>
                            <td>{prop.description}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ComponentPage(doc: ComponentDoc) -> impl IntoView {
    let preview = previews::live_preview(&doc.id);
    view! {
        <article class="showcase-page" data-ui-kind="component-page" data-ui-component=doc.id.clone()>
            <header>
                <span data-ui-slot="category">{doc.category}</span>
                <h1>{doc.name}</h1>
                <p>{doc.description}</p>
                <pre data-ui-slot="imports"><code>{doc.imports.clone()}</code></pre>
                <CopyButton text=doc.imports />
            </header>
            <section data-ui-slot="preview">
                <h2>"Preview"</h2>
                {preview}
            </section>
            <section data-ui-slot="features">
                <h2>"Features"</h2>
                <ul>
                    {doc
                        .features
                        .into_iter()
                        .map(|feature| view! {
                            <li><Icon icon=IconName::Check size=IconSize::Sm />{feature}</li>
                        })
                        .collect_view()}
                </ul>
            </section>
            <section>
                <h2>"Props"</h2>
                <PropsTable props=doc.props />
            </section>
            <section data-ui-slot="examples">
                <h2>"Examples"</h2>
                {doc
                    .examples
                    .into_iter()
                    .map(|example| view! {
                        <div data-ui-slot="example">
                            <h3>{example.title}</h3>
                            <p>{example.description}</p>
                            <pre><code>{example.code.clone()}</code></pre>
                            <CopyButton text=example.code />
                        </div>
                    })
                    .collect_view()}
            </section>
        </article>
    }
}

#[component]
/// Navigation plus the page for `selected`. An empty id shows the first
/// component; an unknown one shows a not-found notice.
pub fn ShowcaseApp(
    /// Catalog id of the page to show.
    #[prop(optional, into)]
    selected: MaybeSignal<String>,
) -> impl IntoView {
    let selected = Signal::derive(move || {
        let id = selected.get();
        if id.is_empty() {
            catalog()
                .first()
                .map(|doc| doc.id.clone())
                .unwrap_or_default()
        } else {
            id
        }
    });

    view! {
        <div class="showcase-root" data-ui-primitive="true" data-ui-kind="showcase">
            <Navigation selected />
            <main class="showcase-main">
                {move || match find_component(&selected.get()) {
                    Some(doc) => view! { <ComponentPage doc /> }.into_view(),
                    None => view! {
                        <section class="showcase-page" data-ui-slot="not-found">
                            <h1>"Component not found"</h1>
                            <p>{format!("No component is documented under `{}`.", selected.get())}</p>
                        </section>
                    }
                    .into_view(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn component_routes_use_catalog_ids() {
        assert_eq!(component_href("input-text"), "/components/input-text");
    }
}

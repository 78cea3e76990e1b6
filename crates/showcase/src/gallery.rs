//! Icon gallery page and the click-to-copy button shared by the docs.

use std::time::Duration;

use form_ui::{Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize, IconTone, InputText};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use wasm_bindgen_futures::JsFuture;

/// Filter value that matches every group.
pub const ALL_GROUPS: &str = "all";

/// How long a copy button reads "Copied!" before resetting.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// `use` line shown for every icon.
pub const ICON_IMPORT: &str = "use form_ui::{Icon, IconName};";

/// Gallery groups, first match wins. Icons matching none land in `other`.
const GROUP_KEYWORDS: [(&str, &[&str]); 9] = [
    ("navigation", &["arrow", "chevron"]),
    (
        "actions",
        &[
            "download", "upload", "copy", "delete", "edit", "save", "search", "filter", "sort",
            "refresh",
        ],
    ),
    (
        "interface",
        &[
            "close", "menu", "more", "settings", "info", "warning", "error", "success", "help",
            "question",
        ],
    ),
    (
        "content",
        &["file", "folder", "image", "document", "video", "audio", "link"],
    ),
    ("user & social", &["user", "profile", "heart", "star", "share"]),
    (
        "communication",
        &["mail", "phone", "message", "notification", "bell"],
    ),
    ("status", &["check", "plus", "minus", "loading", "lock", "unlock"]),
    ("layout", &["grid", "list", "calendar", "clock"]),
    ("development", &["code", "terminal", "bug", "database"]),
];

const OTHER_GROUP: &str = "other";

/// Gallery group of `icon`, derived from keywords in its token.
pub fn icon_group(icon: IconName) -> &'static str {
    let token = icon.token();
    GROUP_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| token.contains(keyword)))
        .map_or(OTHER_GROUP, |(group, _)| *group)
}

/// Filter choices: [`ALL_GROUPS`] then every non-empty group, sorted.
pub fn icon_groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = IconName::ALL.into_iter().map(icon_group).collect();
    groups.sort_unstable();
    groups.dedup();
    groups.insert(0, ALL_GROUPS);
    groups
}

/// Icons whose token contains `query` (case-insensitive) within `group`.
pub fn filter_icons(query: &str, group: &str) -> Vec<IconName> {
    let query = query.trim().to_lowercase();
    IconName::ALL
        .into_iter()
        .filter(|icon| icon.token().contains(&query))
        .filter(|icon| group == ALL_GROUPS || icon_group(*icon) == group)
        .collect()
}

/// Title-cased display name, `eye-off` → `Eye Off`.
pub fn icon_title(icon: IconName) -> String {
    icon.token()
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Path expression naming `icon`, e.g. `IconName::EyeOff`.
pub fn icon_path(icon: IconName) -> String {
    format!("IconName::{icon:?}")
}

/// `view!` snippet rendering `icon`.
pub fn icon_usage(icon: IconName) -> String {
    format!("view! {{ <Icon icon={} /> }}", icon_path(icon))
}

async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[component]
/// Copies `text` to the clipboard and reads "Copied!" for [`COPIED_RESET`].
pub fn CopyButton(#[prop(into)] text: String) -> impl IntoView {
    let text = store_value(text);
    let copied = create_rw_signal(false);
    let reset = store_value(None::<TimeoutHandle>);

    let clear_reset = move || {
        if let Some(handle) = reset.get_value() {
            handle.clear();
            reset.set_value(None);
        }
    };
    on_cleanup(clear_reset);

    let copy = Callback::new(move |_| {
        let text = text.get_value();
        spawn_local(async move {
            if let Err(err) = write_clipboard(&text).await {
                logging::warn!("copy to clipboard failed: {err}");
                return;
            }
            clear_reset();
            copied.set(true);
            match set_timeout_with_handle(move || copied.set(false), COPIED_RESET) {
                Ok(handle) => reset.set_value(Some(handle)),
                Err(err) => logging::warn!("copy reset timer failed: {err:?}"),
            }
        });
    });

    view! {
        <span data-ui-slot="copy" data-ui-copied=move || copied.get().to_string()>
            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on_click=copy>
                {move || {
                    if copied.get() {
                        view! { <Icon icon=IconName::Check size=IconSize::Xs />"Copied!" }
                    } else {
                        view! { <Icon icon=IconName::Copy size=IconSize::Xs />"Copy" }
                    }
                }}
            </Button>
        </span>
    }
}

#[component]
fn CopyRow(title: &'static str, text: String) -> impl IntoView {
    view! {
        <div data-ui-slot="copy-row">
            <h4>{title}</h4>
            <code>{text.clone()}</code>
            <CopyButton text />
        </div>
    }
}

#[component]
fn IconDetail(icon: IconName, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <aside class="showcase-popout" data-ui-slot="icon-detail" data-icon=icon.token()>
            <header>
                <h3>{icon_title(icon)}</h3>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    aria_label="Close"
                    leading_icon=IconName::Close
                    on_click=Callback::new(move |_| on_close.call(()))
                />
            </header>
            <h4>"Preview Sizes"</h4>
            <div class="showcase-row">
                {[IconSize::Sm, IconSize::Default, IconSize::Lg, IconSize::Xl]
                    .into_iter()
                    .map(|size| view! {
                        <figure>
                            <Icon icon size />
                            <figcaption>{size.token()}</figcaption>
                        </figure>
                    })
                    .collect_view()}
            </div>
            <CopyRow title="Import Statement" text=ICON_IMPORT.to_string() />
            <CopyRow title="Usage" text=icon_usage(icon) />
            <CopyRow title="Enum Reference" text=icon_path(icon) />
        </aside>
    }
}

/// Searchable, filterable grid over the whole icon registry. Picking an icon
/// opens its size preview and copyable snippets.
pub fn icon_gallery() -> View {
    let query = create_rw_signal(String::new());
    let group = create_rw_signal(ALL_GROUPS.to_string());
    let selected = create_rw_signal(None::<IconName>);
    let visible = Signal::derive(move || filter_icons(&query.get(), &group.get()));

    view! {
        <div class="showcase-row" data-ui-slot="icon-filters">
            <InputText
                label="Search Icons"
                placeholder="Search icons..."
                left_icon=IconName::Search
                clearable=true
                value=query
                on_change=Callback::new(move |next| query.set(next))
            />
            <label>
                "Category"
                <select on:change=move |ev| group.set(event_target_value(&ev))>
                    {icon_groups()
                        .into_iter()
                        .map(|name| view! {
                            <option value=name selected=move || group.with(|group| group == name)>
                                {if name == ALL_GROUPS { "All Categories" } else { name }}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
        <p data-ui-slot="count">
            {move || format!("Showing {} of {} icons", visible.with(Vec::len), IconName::ALL.len())}
        </p>
        <div class="showcase-icon-grid" data-ui-slot="icon-grid">
            {move || {
                let icons = visible.get();
                if icons.is_empty() {
                    return view! {
                        <div data-ui-slot="empty">
                            <Icon icon=IconName::Search size=IconSize::Xl tone=IconTone::Muted />
                            <h3>"No icons found"</h3>
                            <p>"Try adjusting your search terms or category filter."</p>
                        </div>
                    }
                    .into_view();
                }
                icons
                    .into_iter()
                    .map(|icon| view! {
                        <button
                            type="button"
                            title=icon_title(icon)
                            data-ui-selected=move || (selected.get() == Some(icon)).to_string()
                            on:click=move |_| selected.set(Some(icon))
                        >
                            <Icon icon size=IconSize::Md />
                            <span>{icon.token()}</span>
                        </button>
                    })
                    .collect_view()
            }}
        </div>
        {move || {
            selected
                .get()
                .map(|icon| view! { <IconDetail icon on_close=move |()| selected.set(None) /> })
        }}
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn groups_follow_token_keywords() {
        assert_eq!(icon_group(IconName::ChevronDown), "navigation");
        assert_eq!(icon_group(IconName::Refresh), "actions");
        assert_eq!(icon_group(IconName::Question), "interface");
        assert_eq!(icon_group(IconName::FileText), "content");
        assert_eq!(icon_group(IconName::Bell), "communication");
        assert_eq!(icon_group(IconName::Unlock), "status");
        assert_eq!(icon_group(IconName::Database), "development");
        assert_eq!(icon_group(IconName::Dollar), "other");
    }

    #[test]
    fn group_choices_start_with_all_and_stay_sorted() {
        let groups = icon_groups();
        assert_eq!(groups[0], ALL_GROUPS);
        let mut rest = groups[1..].to_vec();
        rest.sort_unstable();
        assert_eq!(groups[1..].to_vec(), rest);
        assert!(groups.contains(&"other"));
    }

    #[test]
    fn search_is_case_insensitive_and_scoped_to_group() {
        assert_eq!(filter_icons("", ALL_GROUPS).len(), IconName::ALL.len());
        assert_eq!(
            filter_icons("ARROW", ALL_GROUPS),
            vec![
                IconName::ArrowLeft,
                IconName::ArrowRight,
                IconName::ArrowUp,
                IconName::ArrowDown
            ]
        );
        assert_eq!(filter_icons("lock", "status"), vec![IconName::Lock, IconName::Unlock]);
        assert!(filter_icons("arrow", "status").is_empty());
    }

    #[test]
    fn snippets_name_the_enum_variant() {
        assert_eq!(icon_title(IconName::EyeOff), "Eye Off");
        assert_eq!(icon_path(IconName::EyeOff), "IconName::EyeOff");
        assert_eq!(icon_usage(IconName::Search), "view! { <Icon icon=IconName::Search /> }");
    }
}

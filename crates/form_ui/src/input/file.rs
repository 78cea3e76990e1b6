//! File picker with a drop zone, preview list and constraint checks.

use form_core::file::{
    apply_selection, combined_error, format_file_size, remove_at, FileKind, PreviewSize,
};
use form_core::{FileMeta, FileValidation, FileValidationError};
use leptos::ev::{DragEvent, FocusEvent};
use leptos::*;

use super::{field_id, InputWrapper};
use crate::controllable::use_controllable;
use crate::icon::{Icon, IconName, IconSize};
use crate::tokens::{bool_token, FieldSize, FieldVariant};

/// Size, name and type of a browser file, for validation and display.
pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.size().max(0.0) as u64, file.type_())
}

fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

fn kind_icon(kind: FileKind) -> IconName {
    match kind {
        FileKind::Image => IconName::Image,
        FileKind::Document => IconName::FileText,
        FileKind::Video => IconName::Video,
        FileKind::Audio => IconName::Music,
        FileKind::Other => IconName::File,
    }
}

fn dropzone_prompt(has_files: bool, multiple: bool, drag_and_drop: bool) -> &'static str {
    match (has_files, multiple, drag_and_drop) {
        (true, true, _) => "Click to select more files",
        (true, false, _) => "Click to select a different file",
        (false, _, true) => "Drop files here or browse",
        (false, _, false) => "Browse",
    }
}

fn rules_summary(rules: &FileValidation) -> Option<String> {
    let parts: Vec<String> = [
        rules
            .max_size
            .filter(|max| *max > 0)
            .map(|max| format!("Max size: {}", format_file_size(max))),
        rules
            .max_files
            .filter(|max| *max > 0)
            .map(|max| format!("Max files: {max}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join(" \u{2022} "))
}

#[component]
fn FilePreview(
    file: web_sys::File,
    show_preview: bool,
    preview_size: PreviewSize,
) -> impl IntoView {
    let meta = file_meta(&file);
    let object_url = if show_preview && meta.is_image() {
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => Some(url),
            Err(err) => {
                logging::warn!("preview for `{}` unavailable: {err:?}", meta.name);
                None
            }
        }
    } else {
        None
    };
    let icon = kind_icon(meta.kind());

    view! {
        <span data-ui-slot="preview" data-ui-size=preview_size.token()>
            {match object_url {
                Some(url) => {
                    let revoke = url.clone();
                    view! {
                        <img
                            src=url
                            alt=meta.name.clone()
                            on:load=move |_| {
                                let _ = web_sys::Url::revoke_object_url(&revoke);
                            }
                        />
                    }
                    .into_view()
                }
                None => view! { <Icon icon size=IconSize::Md /> }.into_view(),
            }}
        </span>
    }
}

#[component]
/// File input. Selections that break `validation` are reported and not
/// committed; valid ones replace the current selection.
pub fn InputFile(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] clearable: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = FieldSize::Md)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Native `accept` filter, e.g. `"image/*,.pdf"`.
    #[prop(optional, into)]
    accept: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] validation: FileValidation,
    #[prop(default = true)] drag_and_drop: bool,
    #[prop(default = true)] show_preview: bool,
    #[prop(optional)] preview_size: PreviewSize,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<web_sys::File>>>,
    #[prop(optional)] default_value: Vec<web_sys::File>,
    #[prop(optional)] on_change: Option<Callback<Vec<web_sys::File>>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<Vec<web_sys::File>>>,
) -> impl IntoView {
    let control = use_controllable(value, default_value);
    let rejected = create_rw_signal(Vec::<FileValidationError>::new());
    let drag_over = create_rw_signal(false);
    let picker = create_node_ref::<html::Input>();
    let id = field_id(id, "input-file");
    let input_id = id.clone();
    let accept_hint = accept.clone();
    let summary = rules_summary(&validation);
    let rules = store_value(validation);
    let has_files = Signal::derive(move || control.current.with(|files| !files.is_empty()));

    let message = Signal::derive(move || {
        let explicit = error.get();
        rejected
            .with(|errors| combined_error(Some(explicit.as_str()), errors))
            .unwrap_or_default()
    });

    let select = move |files: Vec<web_sys::File>| {
        let outcome = control.commit_checked(
            |held| rules.with_value(|rules| apply_selection(held, files, file_meta, rules)),
            on_change,
        );
        match outcome {
            Some(Err(errors)) => rejected.set(errors),
            Some(Ok(_)) => rejected.set(Vec::new()),
            None => {}
        }
    };

    let clear = Callback::new(move |_| {
        rejected.set(Vec::new());
        control.clear(Vec::new(), on_clear, on_change);
        if let Some(input) = picker.get_untracked() {
            input.set_value("");
        }
    });

    let open_dialog = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = picker.get_untracked() {
            input.click();
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if drag_and_drop && !disabled.get_untracked() {
            drag_over.set(true);
        }
    };
    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
    };
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
        if !drag_and_drop || disabled.get_untracked() {
            return;
        }
        select(files_from_list(ev.data_transfer().and_then(|transfer| transfer.files())));
    };

    view! {
        <InputWrapper
            label
            description
            error=message
            required
            size
            html_for=input_id
            clearable=Signal::derive(move || clearable && !disabled.get() && has_files.get())
            on_clear=clear
            layout_class=layout_class.unwrap_or("")
        >
            <input
                node_ref=picker
                type="file"
                id=id
                name=name
                accept=accept
                multiple=multiple
                required=required
                disabled=move || disabled.get()
                hidden=true
                on:change=move |ev| {
                    let input: web_sys::HtmlInputElement = event_target(&ev);
                    select(files_from_list(input.files()));
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            <div
                class="ui-dropzone"
                role="button"
                tabindex="0"
                data-ui-primitive="true"
                data-ui-kind="dropzone"
                data-ui-size=size.token()
                data-ui-variant=variant.token()
                data-ui-dragover=move || bool_token(drag_over.get())
                data-ui-disabled=move || bool_token(disabled.get())
                data-ui-invalid=move || bool_token(!message.with(String::is_empty))
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
                on:click=open_dialog
            >
                <Icon icon=IconName::Upload size=IconSize::Md />
                <span data-ui-slot="prompt">
                    {move || dropzone_prompt(has_files.get(), multiple, drag_and_drop)}
                </span>
                {accept_hint.map(|accept| view! { <span data-ui-slot="hint">"Accepted: " {accept}</span> })}
                {summary.map(|summary| view! { <span data-ui-slot="hint">{summary}</span> })}
            </div>
            <Show when=move || has_files.get()>
                <div data-ui-slot="files">
                    <span data-ui-slot="count">
                        {move || format!("Selected Files ({})", control.current.with(Vec::len))}
                    </span>
                    <ul>
                        {move || {
                            control
                                .current
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, file)| {
                                    let meta = file_meta(&file);
                                    view! {
                                        <li data-ui-slot="file">
                                            <FilePreview file show_preview preview_size />
                                            <span data-ui-slot="file-name">{meta.name.clone()}</span>
                                            <span data-ui-slot="file-size">{format_file_size(meta.size)}</span>
                                            <button
                                                type="button"
                                                data-ui-slot="remove"
                                                aria-label=format!("Remove {}", meta.name)
                                                disabled=move || disabled.get()
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    let remaining = control.current.with_untracked(|files| remove_at(files, index));
                                                    select(remaining);
                                                }
                                            >
                                                <Icon icon=IconName::Close size=IconSize::Sm />
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </InputWrapper>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_kinds_map_to_icons() {
        assert_eq!(kind_icon(FileKind::from_mime("image/png")), IconName::Image);
        assert_eq!(kind_icon(FileKind::from_mime("application/pdf")), IconName::FileText);
        assert_eq!(kind_icon(FileKind::from_mime("audio/mpeg")), IconName::Music);
        assert_eq!(kind_icon(FileKind::from_mime("application/zip")), IconName::File);
    }

    #[test]
    fn prompt_depends_on_selection_and_mode() {
        assert_eq!(dropzone_prompt(false, false, true), "Drop files here or browse");
        assert_eq!(dropzone_prompt(true, true, true), "Click to select more files");
        assert_eq!(dropzone_prompt(true, false, false), "Click to select a different file");
    }

    #[test]
    fn rules_summary_lists_only_set_limits() {
        let rules = FileValidation {
            max_size: Some(5 * 1024 * 1024),
            max_files: Some(3),
            ..FileValidation::default()
        };
        assert_eq!(
            rules_summary(&rules).as_deref(),
            Some("Max size: 5 MB \u{2022} Max files: 3")
        );
        assert_eq!(rules_summary(&FileValidation::default()), None);
    }
}

//! Hover tooltip with an optional "stay open until click" mode.

use std::time::Duration;

use form_core::tooltip::{
    TooltipPosition, TooltipSize, TooltipState, TooltipVariant, DEFAULT_DELAY_MS,
    DEFAULT_SIDE_OFFSET,
};
use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::tokens::{bool_token, event_within, merge_layout_class};

#[component]
/// Wraps `children` in a trigger that shows `content` on hover or focus.
///
/// With `stay_open_until_click`, clicking the trigger pins the tooltip so it
/// survives the pointer leaving; a click on the tooltip or the trigger closes it
/// and a click elsewhere unpins it. A disabled tooltip renders only its children.
pub fn Tooltip(
    /// Tooltip body.
    #[prop(into)]
    content: ViewFn,
    #[prop(optional)] position: TooltipPosition,
    #[prop(optional)] variant: TooltipVariant,
    #[prop(optional)] size: TooltipSize,
    /// Hover delay before opening, in milliseconds.
    #[prop(default = DEFAULT_DELAY_MS)]
    delay_ms: u32,
    #[prop(optional)] stay_open_until_click: bool,
    #[prop(default = true)] show_arrow: bool,
    #[prop(optional)] disabled: bool,
    #[prop(default = DEFAULT_SIDE_OFFSET)] side_offset: i32,
    #[prop(optional)] align_offset: i32,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_tooltip_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    if disabled {
        return children().into_view();
    }

    let state = create_rw_signal(TooltipState::default());
    let pending = store_value(None::<TimeoutHandle>);
    let root = create_node_ref::<html::Span>();
    let (side, align) = position.placement();
    let stay_open = stay_open_until_click;

    let cancel_pending = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
            pending.set_value(None);
        }
    };

    let schedule_open = move || {
        cancel_pending();
        match set_timeout_with_handle(
            move || {
                pending.set_value(None);
                state.update(|state| state.open_change(true, stay_open));
            },
            Duration::from_millis(u64::from(delay_ms)),
        ) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("tooltip delay timer failed: {err:?}");
                state.update(|state| state.open_change(true, stay_open));
            }
        }
    };

    let close_on_leave = move || {
        cancel_pending();
        state.update(|state| state.open_change(false, stay_open));
    };

    if stay_open {
        let outside_click_listener = window_event_listener(ev::click, move |ev| {
            if !state.get_untracked().manually_opened {
                return;
            }
            let inside = root
                .get_untracked()
                .is_some_and(|root| event_within(&ev, &root));
            if !inside {
                state.update(TooltipState::outside_click);
            }
        });
        on_cleanup(move || outside_click_listener.remove());
    }
    on_cleanup(cancel_pending);

    let style = format!(
        "--ui-tooltip-side-offset: {side_offset}px; --ui-tooltip-align-offset: {align_offset}px"
    );

    view! {
        <span
            node_ref=root
            class=merge_layout_class("ui-tooltip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip"
            data-ui-state=move || if state.get().open { "open" } else { "closed" }
            data-ui-pinned=move || bool_token(state.get().manually_opened)
            on:mouseenter=move |_| schedule_open()
            on:mouseleave=move |_| close_on_leave()
            on:focusin=move |_| {
                cancel_pending();
                state.update(|state| state.open_change(true, stay_open));
            }
            on:focusout=move |_| close_on_leave()
        >
            <span
                data-ui-slot="trigger"
                on:click=move |_| state.update(|state| state.trigger_click(stay_open))
            >
                {children()}
            </span>
            <Show when=move || state.get().open>
                <span
                    role="tooltip"
                    data-ui-slot="content"
                    data-ui-position=position.token()
                    data-ui-side=side.token()
                    data-ui-align=align.token()
                    data-ui-variant=variant.token()
                    data-ui-size=size.token()
                    style=style.clone()
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        state.update(|state| state.content_click(stay_open));
                        if let Some(on_tooltip_click) = on_tooltip_click.as_ref() {
                            on_tooltip_click.call(ev);
                        }
                    }
                >
                    {content.run()}
                    {show_arrow.then(|| view! { <span data-ui-slot="arrow" aria-hidden="true"></span> })}
                </span>
            </Show>
        </span>
    }
    .into_view()
}

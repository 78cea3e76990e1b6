//! Reactive wrapper around [`form_core::ControlledValue`] used by every input widget.

use form_core::ControlledValue;
use leptos::*;

/// Handle returned by [`use_controllable`].
pub struct Controllable<T: 'static> {
    state: RwSignal<ControlledValue<T>>,
    /// Value to display. Tracks the owner's signal when controlled.
    pub current: Signal<T>,
}

impl<T: 'static> Clone for Controllable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Controllable<T> {}

/// Binds an input's value to an optional owner-supplied signal.
///
/// Whether the input is controlled is decided once, from whether `value` was
/// passed. A controlled input always shows the owner's value and mirrors it into
/// its shadow state; an uncontrolled one starts at `default`.
pub fn use_controllable<T>(value: Option<MaybeSignal<T>>, default: T) -> Controllable<T>
where
    T: Clone + 'static,
{
    let initial = value.as_ref().map(|external| external.get_untracked());
    let state = create_rw_signal(ControlledValue::new(initial, default));

    let current = match value {
        Some(external) => {
            let mirrored = external.clone();
            create_effect(move |_| {
                let next = mirrored.get();
                state.update(|held| held.sync_external(Some(next)));
            });
            Signal::derive(move || external.get())
        }
        None => Signal::derive(move || state.with(|held| held.current().clone())),
    };

    Controllable { state, current }
}

impl<T: Clone + 'static> Controllable<T> {
    /// Whether the owner supplies the value.
    pub fn is_controlled(&self) -> bool {
        self.state.with_untracked(ControlledValue::is_controlled)
    }

    /// Current value without subscribing.
    pub fn get_untracked(&self) -> T {
        self.current.get_untracked()
    }

    /// Applies an edit and notifies the owner. The displayed value only moves on
    /// its own when uncontrolled.
    pub fn commit(&self, next: T, on_change: Option<Callback<T>>) -> T {
        let mut emitted = None;
        self.state.update(|held| emitted = Some(held.commit(next.clone())));
        let emitted = emitted.unwrap_or(next);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(emitted.clone());
        }
        emitted
    }

    /// Runs a fallible edit against the held value. `on_change` only hears
    /// about accepted edits. `None` means the input was already disposed.
    pub fn commit_checked<E>(
        &self,
        apply: impl FnOnce(&mut ControlledValue<T>) -> Result<T, E>,
        on_change: Option<Callback<T>>,
    ) -> Option<Result<T, E>> {
        let outcome = self.state.try_update(apply)?;
        if let (Ok(emitted), Some(on_change)) = (&outcome, on_change.as_ref()) {
            on_change.call(emitted.clone());
        }
        Some(outcome)
    }

    /// Resets to `empty`, then calls `on_clear` followed by `on_change`.
    pub fn clear(
        &self,
        empty: T,
        on_clear: Option<Callback<T>>,
        on_change: Option<Callback<T>>,
    ) -> T {
        let emitted = self.commit(empty, None);
        if let Some(on_clear) = on_clear.as_ref() {
            on_clear.call(emitted.clone());
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(emitted.clone());
        }
        emitted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uncontrolled_input_tracks_its_own_edits() {
        let runtime = create_runtime();

        let control = use_controllable(None, "seed".to_string());
        let seen = create_rw_signal(Vec::<String>::new());
        let on_change = Callback::new(move |value: String| seen.update(|all| all.push(value)));

        assert!(!control.is_controlled());
        assert_eq!(control.current.get_untracked(), "seed");

        control.commit("typed".to_string(), Some(on_change));
        assert_eq!(control.current.get_untracked(), "typed");
        assert_eq!(seen.get_untracked(), vec!["typed".to_string()]);

        runtime.dispose();
    }

    #[test]
    fn controlled_input_waits_for_the_owner() {
        let runtime = create_runtime();

        let owner = create_rw_signal(3);
        let control = use_controllable(Some(owner.into()), 0);
        let seen = create_rw_signal(None::<i32>);
        let on_change = Callback::new(move |value| seen.set(Some(value)));

        assert!(control.is_controlled());
        control.commit(7, Some(on_change));
        assert_eq!(seen.get_untracked(), Some(7));
        assert_eq!(control.current.get_untracked(), 3);

        owner.set(7);
        assert_eq!(control.current.get_untracked(), 7);

        runtime.dispose();
    }

    #[test]
    fn clear_notifies_both_callbacks_in_order() {
        let runtime = create_runtime();

        let control = use_controllable(None, "filled".to_string());
        let log = create_rw_signal(Vec::<String>::new());
        let on_clear = Callback::new(move |value: String| {
            log.update(|entries| entries.push(format!("clear:{value}")))
        });
        let on_change = Callback::new(move |value: String| {
            log.update(|entries| entries.push(format!("change:{value}")))
        });

        control.clear(String::new(), Some(on_clear), Some(on_change));
        assert_eq!(control.current.get_untracked(), "");
        assert_eq!(
            log.get_untracked(),
            vec!["clear:".to_string(), "change:".to_string()]
        );

        runtime.dispose();
    }

    #[test]
    fn rejected_file_selection_is_not_committed_or_reported() {
        use form_core::file::apply_selection;
        use form_core::{FileMeta, FileValidation};

        let runtime = create_runtime();

        let kept = vec![FileMeta::new("notes.pdf", 10, "application/pdf")];
        let control = use_controllable(None, kept.clone());
        let changes = create_rw_signal(0_usize);
        let on_change = Some(Callback::new(move |_: Vec<FileMeta>| {
            changes.update(|count| *count += 1)
        }));
        let rules = FileValidation {
            max_size: Some(100),
            ..FileValidation::default()
        };

        let oversized = vec![FileMeta::new("video.mp4", 5_000, "video/mp4")];
        let outcome = control.commit_checked(
            |held| apply_selection(held, oversized, Clone::clone, &rules),
            on_change,
        );
        assert!(matches!(outcome, Some(Err(ref errors)) if errors.len() == 1));
        assert_eq!(control.get_untracked(), kept);
        assert_eq!(changes.get_untracked(), 0);

        let accepted = vec![FileMeta::new("photo.png", 50, "image/png")];
        let outcome = control.commit_checked(
            |held| apply_selection(held, accepted.clone(), Clone::clone, &rules),
            on_change,
        );
        assert_eq!(outcome, Some(Ok(accepted.clone())));
        assert_eq!(control.get_untracked(), accepted);
        assert_eq!(changes.get_untracked(), 1);

        runtime.dispose();
    }

    #[test]
    fn static_owner_value_stays_authoritative() {
        let runtime = create_runtime();

        let control = use_controllable(Some(MaybeSignal::Static(5)), 0);
        control.commit(9, None);
        assert_eq!(control.get_untracked(), 5);

        runtime.dispose();
    }
}

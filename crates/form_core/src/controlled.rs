//! Controlled/uncontrolled value ownership shared by every input widget.
//!
//! An input is *controlled* when its owner supplies a value; that value is then
//! shown on every render and the input's own shadow copy only mirrors it. An
//! *uncontrolled* input owns its value, seeded once from an optional default.
//! Either way every edit is reported to the owner.

#[derive(Debug, Clone, PartialEq, Eq)]
/// External-or-internal value holder.
pub struct ControlledValue<T> {
    external: Option<T>,
    internal: T,
}

impl<T: Clone> ControlledValue<T> {
    /// Creates the holder. The internal value is seeded from `external` when it
    /// is supplied, otherwise from `default`.
    pub fn new(external: Option<T>, default: T) -> Self {
        let internal = external.clone().unwrap_or(default);
        Self { external, internal }
    }

    /// Whether the owner currently supplies the value.
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The value to display: the external value when supplied, else the internal one.
    pub fn current(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    /// The input's own shadow copy.
    pub fn internal(&self) -> &T {
        &self.internal
    }

    /// Mirrors a new owner-supplied value. `None` releases control and keeps the
    /// last internal value.
    pub fn sync_external(&mut self, external: Option<T>) {
        if let Some(value) = external.as_ref() {
            self.internal = value.clone();
        }
        self.external = external;
    }

    /// Applies an edit. The internal value only changes when uncontrolled; the
    /// returned value must be passed to the change notification in both modes.
    pub fn commit(&mut self, next: T) -> T {
        if !self.is_controlled() {
            self.internal = next.clone();
        }
        next
    }

    /// Resets to `empty` following the same rules as [`ControlledValue::commit`].
    pub fn clear(&mut self, empty: T) -> T {
        self.commit(empty)
    }
}

impl<T: Clone + Default> Default for ControlledValue<T> {
    fn default() -> Self {
        Self::new(None, T::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uncontrolled_value_is_seeded_once_from_default() {
        let mut value = ControlledValue::new(None, "seed".to_string());
        assert!(!value.is_controlled());
        assert_eq!(value.current(), "seed");

        let emitted = value.commit("typed".to_string());
        assert_eq!(emitted, "typed");
        assert_eq!(value.current(), "typed");
    }

    #[test]
    fn controlled_value_ignores_internal_edits_until_prop_changes() {
        let mut value = ControlledValue::new(Some(3), 0);
        assert!(value.is_controlled());

        let emitted = value.commit(7);
        assert_eq!(emitted, 7);
        assert_eq!(*value.current(), 3);
        assert_eq!(*value.internal(), 3);

        value.sync_external(Some(7));
        assert_eq!(*value.current(), 7);
    }

    #[test]
    fn controlled_value_wins_over_default_seed() {
        let value = ControlledValue::new(Some("owner"), "default");
        assert_eq!(*value.internal(), "owner");
        assert_eq!(*value.current(), "owner");
    }

    #[test]
    fn clear_follows_the_same_dual_path() {
        let mut uncontrolled = ControlledValue::new(None, vec![1, 2]);
        assert_eq!(uncontrolled.clear(Vec::new()), Vec::<i32>::new());
        assert!(uncontrolled.current().is_empty());

        let mut controlled = ControlledValue::new(Some(vec![1, 2]), Vec::new());
        assert_eq!(controlled.clear(Vec::new()), Vec::<i32>::new());
        assert_eq!(controlled.current(), &vec![1, 2]);
    }

    #[test]
    fn releasing_control_keeps_last_mirrored_value() {
        let mut value = ControlledValue::new(Some(10), 0);
        value.sync_external(Some(12));
        value.sync_external(None);
        assert!(!value.is_controlled());
        assert_eq!(*value.current(), 12);
        value.commit(13);
        assert_eq!(*value.current(), 13);
    }

    #[test]
    fn default_holder_is_uncontrolled() {
        let value = ControlledValue::<String>::default();
        assert!(!value.is_controlled());
        assert_eq!(value.current(), "");
    }
}

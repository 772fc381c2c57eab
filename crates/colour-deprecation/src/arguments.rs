//! Keyword argument deprecation.

use indexmap::IndexMap;

use crate::{ArgumentChange, DeprecationWarning, WarningCategory, WarningSink};

/// Rewrite a keyword map according to `changes`, warning for every
/// deprecated argument that was passed.
///
/// | change | effect on `kwargs` |
/// |---|---|
/// | renamed | value moves from the old key to the new key |
/// | removed | old key is dropped |
/// | future renamed | value is copied to the new key, old key kept |
/// | future removed | unchanged |
///
/// Changes whose argument was not passed are skipped silently. Key order is
/// otherwise preserved; moved or copied values are appended.
pub fn handle_arguments_deprecation<V: Clone>(
    changes: &[ArgumentChange],
    mut kwargs: IndexMap<String, V>,
    sink: &dyn WarningSink,
) -> IndexMap<String, V> {
    for change in changes {
        if !kwargs.contains_key(change.name()) {
            continue;
        }

        let category = match change {
            ArgumentChange::Renamed { name, new_name } => {
                if let Some(value) = kwargs.shift_remove(name) {
                    kwargs.insert(new_name.clone(), value);
                }
                WarningCategory::ArgumentRenamed
            }
            ArgumentChange::Removed { name } => {
                kwargs.shift_remove(name);
                WarningCategory::ArgumentRemoved
            }
            ArgumentChange::FutureRenamed { name, new_name } => {
                if let Some(value) = kwargs.get(name).cloned() {
                    kwargs.insert(new_name.clone(), value);
                }
                WarningCategory::ArgumentFutureRenamed
            }
            ArgumentChange::FutureRemoved { .. } => WarningCategory::ArgumentFutureRemoved,
        };

        tracing::trace!(argument = %change.name(), %category, "deprecated argument handled");
        sink.emit(&DeprecationWarning::new(
            category,
            change.name(),
            change.warning_message(),
        ));
    }
    kwargs
}

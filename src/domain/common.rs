use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Looks an entity up by id within a slice.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Mutable variant of [`find_by_id`].
pub fn find_by_id_mut<T: Identifiable>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Reports whether `candidate` collides with another entity's name, ignoring
/// case and surrounding whitespace. `exclude` skips the entity being edited.
pub fn name_taken<T: Identifiable + NamedEntity>(
    items: &[T],
    exclude: Option<Uuid>,
    candidate: &str,
) -> bool {
    let normalized = candidate.trim().to_ascii_lowercase();
    items.iter().any(|item| {
        let name = item.name().trim().to_ascii_lowercase();
        name == normalized && exclude.map_or(true, |id| item.id() != id)
    })
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;

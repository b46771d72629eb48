//! Client-Side Cache Patching
//!
//! Helpers applied to a hook's cached list after a successful mutation, so
//! the UI reflects the change without a full refetch. The server may attach
//! side effects beyond the echoed entity; the cache then diverges from
//! server truth until the next refetch, which is accepted at this scope.

use crate::models::{Category, Task};

/// Entities addressable by their opaque string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Newly created entities go first, matching the list's newest-first order.
pub fn prepend<T>(list: &mut Vec<T>, item: T) {
    list.insert(0, item);
}

/// Replace the entity with the same id, leaving every other element alone.
/// No-op when the id is not cached (the list was filtered past it).
pub fn replace_by_id<T: Identified>(list: &mut Vec<T>, updated: T) {
    if let Some(existing) = list.iter_mut().find(|existing| existing.id() == updated.id()) {
        *existing = updated;
    }
}

pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: &str) {
    list.retain(|existing| existing.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskLevel, TaskStatus};

    fn make_task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            status: TaskStatus::NotStarted,
            level: TaskLevel::Medium,
            category_id: None,
            created_at: "2024-01-01T10:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn prepend_puts_the_new_entity_first() {
        let mut list = vec![make_task("t1", "Une"), make_task("t2", "Deux")];
        prepend(&mut list, make_task("t3", "Trois"));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, "t3");
        assert_eq!(list[1].id, "t1");
    }

    #[test]
    fn replace_by_id_touches_only_the_matching_entity() {
        let mut list = vec![make_task("t1", "Une"), make_task("t2", "Deux")];
        replace_by_id(&mut list, make_task("t2", "Deux bis"));
        assert_eq!(list[0].title, "Une");
        assert_eq!(list[1].title, "Deux bis");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn replace_by_id_is_a_noop_for_unknown_ids() {
        let mut list = vec![make_task("t1", "Une")];
        replace_by_id(&mut list, make_task("t9", "Fantôme"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Une");
    }

    #[test]
    fn remove_by_id_leaves_no_trace_of_the_entity() {
        let mut list = vec![make_task("t1", "Une"), make_task("t2", "Deux")];
        remove_by_id(&mut list, "t1");
        assert!(list.iter().all(|task| task.id != "t1"));
        assert_eq!(list.len(), 1);
    }
}

//! Favorites set with write-through persistence.
//!
//! Holds the in-memory sequence of saved cafes and mirrors every mutation to
//! the injected [`KeyValueStore`] before the call returns, so the persisted
//! blob always equals the in-memory state.

use cafescout_core::Cafe;

use crate::kv::{KeyValueStore, StoreError};

/// Fixed storage key the favorites blob lives under.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered set of saved cafes, unique by `id`, persisted as a JSON array.
pub struct FavoritesStore<S> {
    store: S,
    cafes: Vec<Cafe>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Opens the store and loads persisted favorites.
    ///
    /// A missing key, an unreadable value, or a malformed blob all load as an
    /// empty set: corrupted state degrades to "no favorites" rather than an
    /// error, logged at `warn` for diagnostics.
    pub fn open(store: S) -> Self {
        let cafes = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Cafe>>(&raw) {
                Ok(cafes) => cafes,
                Err(e) => {
                    tracing::warn!(error = %e, "persisted favorites malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "persisted favorites unreadable, starting empty");
                Vec::new()
            }
        };
        Self { store, cafes }
    }

    /// True iff a cafe with this `id` is currently saved.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.cafes.iter().any(|c| c.id == id)
    }

    /// Saves `cafe` if absent, removes it if present. The one mutation
    /// primitive — add and remove are its two outcomes, matching the single
    /// save/remove gesture that drives this logic.
    ///
    /// Membership and removal go by `id` alone, so a re-fetched record with
    /// the same `id` but different fields still removes the stored one.
    /// The new set is written through before this returns; on a write failure
    /// the in-memory set is left unchanged so memory and disk stay equal.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the new set cannot be serialized or the
    /// persistence collaborator rejects the write.
    pub fn toggle(&mut self, cafe: Cafe) -> Result<&[Cafe], StoreError> {
        let next: Vec<Cafe> = if self.contains(cafe.id) {
            self.cafes
                .iter()
                .filter(|c| c.id != cafe.id)
                .cloned()
                .collect()
        } else {
            let mut grown = self.cafes.clone();
            grown.push(cafe);
            grown
        };

        let blob = serde_json::to_string(&next)?;
        self.store.set(FAVORITES_KEY, &blob)?;
        self.cafes = next;
        Ok(&self.cafes)
    }

    /// Saved cafes in insertion order, the only order guaranteed.
    #[must_use]
    pub fn list(&self) -> &[Cafe] {
        &self.cafes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cafes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cafes.is_empty()
    }
}

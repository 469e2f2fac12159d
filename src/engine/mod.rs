//! Mutation Engine
//!
//! One operation per use case. Each operation validates its precondition
//! and updates the in-memory tree right away, then hands back a
//! [`Persistence`] future that carries the store write. The engine borrow
//! ends before the write starts, so writes from different mutations may
//! be in flight at the same time and a slow store never blocks further
//! local edits. A store failure is logged and surfaced but the local
//! snapshot is kept (no rollback); the next `reload` reconciles with the
//! remote state.

mod edit;
mod ids;

pub use edit::{EditTarget, NameEdit};
pub use ids::IdGenerator;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use org_dragdrop::DragGesture;

use crate::domain::{visual, Community, DomainError, DomainResult, Session, Space, Tree};
use crate::repository::SpaceStore;

/// Name given to a freshly created space
pub const DEFAULT_SPACE_NAME: &str = "Nuovo spazio";
/// Name given to a freshly created community
pub const DEFAULT_COMMUNITY_NAME: &str = "Nuova community";

/// The deferred store write behind an already-applied mutation.
///
/// By the time one of these is handed out the local snapshot has moved
/// on; awaiting it drives the remote write and yields its outcome. It
/// owns the store handle and the documents it writes, so it can be
/// awaited, joined with writes from other mutations, or spawned, all
/// while the engine keeps taking edits. Dropping it skips the write.
pub struct Persistence {
    inner: Pin<Box<dyn Future<Output = DomainResult<()>> + Send>>,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    fn run<F>(fut: F) -> Self
    where
        F: Future<Output = DomainResult<()>> + Send + 'static,
    {
        Self {
            inner: Box::pin(fut),
        }
    }

    /// A write-free outcome, for operations that changed nothing remote
    fn done() -> Self {
        Self::run(std::future::ready(Ok(())))
    }
}

impl Future for Persistence {
    type Output = DomainResult<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

/// The edit-and-synchronization engine.
///
/// Owns the current tree snapshot, the store handle, and the session
/// context. Constructed by [`StructureEngine::load`], which completes the
/// initial fetch before any mutation can be issued.
pub struct StructureEngine {
    tree: Tree,
    store: Arc<dyn SpaceStore>,
    session: Session,
    edit: Option<NameEdit>,
    ids: IdGenerator,
}

impl StructureEngine {
    /// Fetch the tree from the store and build an engine around it.
    ///
    /// Until this returns, the system is in its loading state and no
    /// mutations are offered.
    pub async fn load(store: Arc<dyn SpaceStore>, session: Session) -> DomainResult<Self> {
        let tree = store.fetch_tree().await?;
        log::info!("loaded {} spaces from store", tree.len());
        Ok(Self {
            tree,
            store,
            session,
            edit: None,
            ids: IdGenerator::new(),
        })
    }

    /// The current immutable snapshot
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Re-fetch the tree from the store, replacing the local snapshot.
    /// This is the reconciliation path after an optimistic divergence.
    pub async fn reload(&mut self) -> DomainResult<()> {
        self.tree = self.store.fetch_tree().await?;
        Ok(())
    }

    fn stamp(&self) -> (Option<String>, i64) {
        (
            self.session.actor().map(str::to_string),
            chrono::Local::now().timestamp_millis(),
        )
    }

    // ========================
    // Space operations
    // ========================

    /// Rename a space. A name that trims to empty is silently discarded:
    /// the prior value is retained and no persistence call is issued.
    pub fn rename_space(&mut self, space_id: &str, new_name: &str) -> DomainResult<Persistence> {
        let name = new_name.trim();
        if name.is_empty() {
            return Ok(Persistence::done());
        }

        let (by, at) = self.stamp();
        let space = self
            .tree
            .find_space_mut(space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;
        space.name = name.to_string();
        space.stamp(by.as_deref(), at);
        let doc = space.clone();

        let store = Arc::clone(&self.store);
        Ok(Persistence::run(async move {
            if let Err(e) = store.update_space(&doc).await {
                log::error!("failed to persist rename of space {}: {}", doc.id, e);
                return Err(e);
            }
            Ok(())
        }))
    }

    /// Append a new space with a generated id, the default name, a color
    /// from the fixed palette, and no communities. Returns the new id
    /// alongside the write.
    pub fn add_space(&mut self) -> (String, Persistence) {
        let id = self.ids.space_id();
        let color = visual::palette_pick(self.ids.last_issued());
        let mut space = Space::new(id.clone(), DEFAULT_SPACE_NAME, color);
        let (by, at) = self.stamp();
        space.stamp(by.as_deref(), at);

        self.tree.push_space(space.clone());

        let store = Arc::clone(&self.store);
        let persist = Persistence::run(async move {
            if let Err(e) = store.create_space(&space).await {
                log::error!("failed to persist new space {}: {}", space.id, e);
                return Err(e);
            }
            Ok(())
        });
        (id, persist)
    }

    /// Delete a space and all its communities (cascade). The store only
    /// exposes the two collection levels, so the cascade deletes each
    /// community document before the space document.
    pub fn delete_space(&mut self, space_id: &str) -> DomainResult<Persistence> {
        let space = self
            .tree
            .remove_space(space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;

        let store = Arc::clone(&self.store);
        Ok(Persistence::run(async move {
            for community in &space.communities {
                if let Err(e) = store.delete_community(&space.id, &community.id).await {
                    log::error!(
                        "cascade delete of space {} stopped at community {}: {}",
                        space.id,
                        community.id,
                        e
                    );
                    return Err(e);
                }
            }
            if let Err(e) = store.delete_space(&space.id).await {
                log::error!("failed to delete space document {}: {}", space.id, e);
                return Err(e);
            }
            Ok(())
        }))
    }

    // ========================
    // Community operations
    // ========================

    /// Rename a community. Trimmed-empty names are silently discarded.
    pub fn rename_community(
        &mut self,
        space_id: &str,
        community_id: &str,
        new_name: &str,
    ) -> DomainResult<Persistence> {
        let name = new_name.trim();
        if name.is_empty() {
            return Ok(Persistence::done());
        }

        let (by, at) = self.stamp();
        let space = self
            .tree
            .find_space_mut(space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;
        let community = space.find_community_mut(community_id).ok_or_else(|| {
            DomainError::NotFound(format!(
                "Community {} not found under space {}",
                community_id, space_id
            ))
        })?;
        community.name = name.to_string();
        community.stamp(by.as_deref(), at);
        let doc = community.clone();

        let store = Arc::clone(&self.store);
        let space_id = space_id.to_string();
        Ok(Persistence::run(async move {
            if let Err(e) = store.update_community(&space_id, &doc).await {
                log::error!("failed to persist rename of community {}: {}", doc.id, e);
                return Err(e);
            }
            Ok(())
        }))
    }

    /// Append a new community to a space with a generated id and the
    /// default name. Returns the new id alongside the write.
    pub fn add_community(&mut self, space_id: &str) -> DomainResult<(String, Persistence)> {
        let id = self.ids.community_id();
        let mut community = Community::new(id.clone(), DEFAULT_COMMUNITY_NAME);
        let (by, at) = self.stamp();
        community.stamp(by.as_deref(), at);

        let space = self
            .tree
            .find_space_mut(space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;
        space.communities.push(community.clone());

        let store = Arc::clone(&self.store);
        let space_id = space_id.to_string();
        let persist = Persistence::run(async move {
            if let Err(e) = store.create_community(&space_id, &community).await {
                log::error!("failed to persist new community {}: {}", community.id, e);
                return Err(e);
            }
            Ok(())
        });
        Ok((id, persist))
    }

    pub fn delete_community(
        &mut self,
        space_id: &str,
        community_id: &str,
    ) -> DomainResult<Persistence> {
        self.tree
            .remove_community(space_id, community_id)
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Community {} not found under space {}",
                    community_id, space_id
                ))
            })?;

        let store = Arc::clone(&self.store);
        let space_id = space_id.to_string();
        let community_id = community_id.to_string();
        Ok(Persistence::run(async move {
            if let Err(e) = store.delete_community(&space_id, &community_id).await {
                log::error!("failed to delete community document {}: {}", community_id, e);
                return Err(e);
            }
            Ok(())
        }))
    }

    /// Transfer a community to another space, preserving its identity and
    /// appending it to the destination's list. Both affected spaces are
    /// re-stamped locally.
    ///
    /// Remotely this is a destination write followed by a source delete.
    /// The two steps are not transactional: a failure in between leaves
    /// the community duplicated in the store, surfaced as
    /// [`DomainError::PartialMove`]. No compensating write is attempted.
    pub fn move_community(
        &mut self,
        community_id: &str,
        from_space_id: &str,
        to_space_id: &str,
    ) -> DomainResult<Persistence> {
        if from_space_id == to_space_id {
            return Err(DomainError::InvalidInput(
                "Cannot move a community onto its own space".to_string(),
            ));
        }
        if self.tree.find_space(to_space_id).is_none() {
            return Err(DomainError::NotFound(format!(
                "Space {} not found",
                to_space_id
            )));
        }

        let mut community = self
            .tree
            .remove_community(from_space_id, community_id)
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Community {} not found under space {}",
                    community_id, from_space_id
                ))
            })?;

        let (by, at) = self.stamp();
        community.stamp(by.as_deref(), at);
        if let Some(source) = self.tree.find_space_mut(from_space_id) {
            source.stamp(by.as_deref(), at);
        }
        let dest = self
            .tree
            .find_space_mut(to_space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", to_space_id)))?;
        dest.stamp(by.as_deref(), at);
        dest.communities.push(community.clone());

        let store = Arc::clone(&self.store);
        let from = from_space_id.to_string();
        let to = to_space_id.to_string();
        Ok(Persistence::run(async move {
            if let Err(e) = store.create_community(&to, &community).await {
                log::error!(
                    "failed to write community {} under destination {}: {}",
                    community.id,
                    to,
                    e
                );
                return Err(e);
            }
            if let Err(e) = store.delete_community(&from, &community.id).await {
                log::error!(
                    "move of community {} left a duplicate under {}: {}",
                    community.id,
                    from,
                    e
                );
                return Err(DomainError::PartialMove {
                    community_id: community.id.clone(),
                    from_space_id: from,
                    to_space_id: to,
                });
            }
            Ok(())
        }))
    }

    // ========================
    // Rename edit protocol
    // ========================

    /// Enter edit mode for a space or community name, seeding the shared
    /// buffer with the current name. Any other in-progress edit is
    /// implicitly cancelled.
    pub fn start_edit(&mut self, target: EditTarget) -> DomainResult<()> {
        let current = match &target {
            EditTarget::Space { space_id } => self
                .tree
                .find_space(space_id)
                .map(|s| s.name.clone())
                .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?,
            EditTarget::Community {
                space_id,
                community_id,
            } => self
                .tree
                .find_community(space_id, community_id)
                .map(|c| c.name.clone())
                .ok_or_else(|| {
                    DomainError::NotFound(format!(
                        "Community {} not found under space {}",
                        community_id, space_id
                    ))
                })?,
        };
        self.edit = Some(NameEdit::start(target, &current));
        Ok(())
    }

    pub fn current_edit(&self) -> Option<&NameEdit> {
        self.edit.as_ref()
    }

    /// Replace the shared buffer's contents; no-op when nothing is being
    /// edited.
    pub fn set_edit_name(&mut self, value: &str) {
        if let Some(edit) = &mut self.edit {
            edit.set_buffer(value);
        }
    }

    /// Exit edit mode, renaming the target when the buffer trims to a
    /// non-empty name. An empty buffer is a no-op that still exits.
    pub fn commit_edit(&mut self) -> DomainResult<Persistence> {
        let Some(edit) = self.edit.take() else {
            return Ok(Persistence::done());
        };
        let Some(name) = edit.committed_name() else {
            return Ok(Persistence::done());
        };
        let name = name.to_string();
        match edit.target() {
            EditTarget::Space { space_id } => self.rename_space(space_id, &name),
            EditTarget::Community {
                space_id,
                community_id,
            } => self.rename_community(space_id, community_id, &name),
        }
    }

    /// Exit edit mode without renaming
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // ========================
    // Drag/drop glue
    // ========================

    /// Resolve a drop reported by the presentation layer. Dropping onto
    /// the source space (or with no drag in flight) changes nothing.
    pub fn drop_on(
        &mut self,
        gesture: &mut DragGesture,
        target_space_id: &str,
    ) -> DomainResult<Persistence> {
        match gesture.drop_on(target_space_id) {
            Some(request) => self.move_community(
                &request.community_id,
                &request.source_space_id,
                &request.target_space_id,
            ),
            None => Ok(Persistence::done()),
        }
    }

    // ========================
    // Portable documents
    // ========================

    /// Export the current tree as a pretty-printed portable document
    pub fn export_document(&self) -> DomainResult<String> {
        crate::portable::to_json(&self.tree)
    }

    /// Replace the whole in-memory tree with an imported document. The
    /// store is not touched; a parse failure leaves the tree unchanged.
    pub fn import_document(&mut self, json: &str) -> DomainResult<()> {
        let tree = crate::portable::from_json(json)?;
        log::info!("imported document with {} spaces", tree.len());
        self.tree = tree;
        Ok(())
    }
}

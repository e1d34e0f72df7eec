//! Event-driven journal: one store, one form, one visible list.
//!
//! Each UI event has an explicit handler. Handlers delegate persistence to
//! the [`EntryStore`] and keep the visible list in step with it. All
//! handlers take `&mut self`, so a submit cannot start while another one
//! is still awaiting its photo encoding.

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::form::{AttachmentIndicator, FormController, FormFields};
use crate::image::ImageAttachment;
use crate::render::{DeleteControl, ListRenderer, VisibleList};
use crate::storage::types::node_id_for;
use crate::storage::{Entry, EntryId, KeyValueStore};
use crate::store::EntryStore;

/// Abstract UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Page became ready; render everything stored
    Loaded,
    /// Photo input changed (`None` clears the selection)
    ImageSelected(Option<ImageAttachment>),
    /// Form submitted with its current field values
    Submit,
    /// A rendered entry's delete control was activated
    Delete(EntryId),
}

impl From<DeleteControl> for UiEvent {
    fn from(control: DeleteControl) -> Self {
        UiEvent::Delete(control.target)
    }
}

/// What a handled event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Visible list rebuilt with this many entries
    Rendered { count: usize },
    /// Attachment indicator changed
    Attachment(AttachmentIndicator),
    /// Entry stored and rendered at the top of the list
    Added(Entry),
    /// Delete handled; `removed` is false for unknown ids
    Deleted { id: EntryId, removed: bool },
}

/// The journal application state.
#[derive(Debug)]
pub struct Journal<S, C = SystemClock> {
    store: EntryStore<S>,
    clock: C,
    renderer: ListRenderer,
    form: FormController,
    list: VisibleList,
    warning: Option<String>,
}

impl<S: KeyValueStore> Journal<S, SystemClock> {
    /// Journal over `backend` using the wall clock.
    pub fn new(backend: S) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> Journal<S, C> {
    pub fn with_clock(backend: S, clock: C) -> Self {
        Self {
            store: EntryStore::new(backend),
            clock,
            renderer: ListRenderer::new(),
            form: FormController::new(),
            list: VisibleList::new(),
            warning: None,
        }
    }

    pub fn with_renderer(mut self, renderer: ListRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn list(&self) -> &VisibleList {
        &self.list
    }

    pub fn renderer(&self) -> &ListRenderer {
        &self.renderer
    }

    /// Non-fatal warning raised by the last load, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Route `event` to its handler.
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<Outcome> {
        debug!(?event, "dispatching ui event");
        match event {
            UiEvent::Loaded => self.on_load(),
            UiEvent::ImageSelected(image) => Ok(Outcome::Attachment(self.on_image_selected(image))),
            UiEvent::Submit => self.on_submit().await.map(Outcome::Added),
            UiEvent::Delete(id) => {
                let removed = self.on_delete(id)?;
                Ok(Outcome::Deleted { id, removed })
            }
        }
    }

    /// Clear the visible list and render every stored entry.
    pub fn on_load(&mut self) -> Result<Outcome> {
        let loaded = self.store.load_lenient()?;
        self.warning = loaded.warning;
        self.renderer.render_all(&mut self.list, &loaded.entries);
        Ok(Outcome::Rendered {
            count: self.list.len(),
        })
    }

    pub fn on_image_selected(&mut self, image: Option<ImageAttachment>) -> AttachmentIndicator {
        self.form.select_image(image)
    }

    /// Submit the form and render the stored entry at the top.
    pub async fn on_submit(&mut self) -> Result<Entry> {
        let entry = self.form.submit(&mut self.store, &self.clock).await?;
        self.renderer.render_one(&mut self.list, &entry);
        info!(id = entry.id, "entry added");
        Ok(entry)
    }

    /// Fill the form with `fields` and submit it.
    pub async fn submit(&mut self, fields: FormFields) -> Result<Entry> {
        self.form.fill(fields);
        self.on_submit().await
    }

    /// Remove entry `id` from storage, then drop its node.
    ///
    /// Returns whether the entry existed in storage.
    pub fn on_delete(&mut self, id: EntryId) -> Result<bool> {
        let removed = self.store.remove(id)?;
        self.list.remove_node(&node_id_for(id));
        if removed {
            info!(id, "entry deleted");
        }
        Ok(removed)
    }

    /// Complete HTML page for the current state.
    pub fn page_html(&self) -> String {
        self.renderer.render_page(&self.list, &self.form)
    }
}

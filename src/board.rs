//! The viewer session: view, pins, persistence and the menu/modal flows.

use crate::config::ViewerConfig;
use crate::event::ViewportEvent;
use crate::menu::{ContextMenu, MenuAction, MenuTarget};
use crate::pin::{Pin, PinDraft, PinEdit, PinEntry, PinId};
use crate::render::{PinMarker, PinRenderer};
use crate::store::{BlobStore, PinStore};
use crate::view_state::{Size, ViewState};
use crate::viewport::{InputSettings, ViewportController};

/// A pin form currently open.
#[derive(Debug, Clone, PartialEq)]
pub enum PinModal {
    /// Creating a pin where the user right-clicked (screen coordinates).
    Create { x: f32, y: f32, draft: PinDraft },
    /// Editing an existing pin.
    Edit { id: PinId, edit: PinEdit },
}

/// One image with its pins.
///
/// Every pin mutation is saved immediately. Pins are addressed by [`PinId`],
/// which stays valid until the pin is removed regardless of what happens to
/// other pins.
pub struct PinBoard<B> {
    controller: ViewportController,
    pins: Vec<PinEntry>,
    store: PinStore<B>,
    next_id: PinId,
    config: ViewerConfig,
    menu: Option<ContextMenu>,
    modal: Option<PinModal>,
}

impl<B: BlobStore> PinBoard<B> {
    /// Load pins from `backend` and fit the content into the viewport.
    pub fn open(backend: B, viewport: Size, content: Size, config: ViewerConfig) -> Self {
        let store = PinStore::with_key(backend, config.storage_key.clone());
        let controller =
            ViewportController::with_settings(viewport, content, InputSettings::from(&config));

        let mut board = Self {
            controller,
            pins: Vec::new(),
            store,
            next_id: 1,
            config,
            menu: None,
            modal: None,
        };
        for pin in board.store.load() {
            board.insert(pin);
        }
        board
    }

    fn insert(&mut self, pin: Pin) -> PinId {
        let id = self.next_id;
        self.next_id += 1;
        self.pins.push(PinEntry { id, pin });
        id
    }

    fn persist(&mut self) {
        let pins: Vec<Pin> = self.pins.iter().map(|entry| entry.pin.clone()).collect();
        if let Err(e) = self.store.save(&pins) {
            log::warn!("Failed to save {} pins: {}", pins.len(), e);
        }
    }

    fn index_of(&self, id: PinId) -> Option<usize> {
        self.pins.iter().position(|entry| entry.id == id)
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn store(&self) -> &PinStore<B> {
        &self.store
    }

    /// Pins in stored order.
    pub fn pins(&self) -> &[PinEntry] {
        &self.pins
    }

    /// Look up a pin by id.
    pub fn pin(&self, id: PinId) -> Option<&Pin> {
        self.pins
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.pin)
    }

    /// Feed an input event to the viewport. Returns `true` if the view
    /// changed, in which case every marker needs repositioning.
    pub fn handle(&mut self, event: ViewportEvent) -> bool {
        self.controller.handle(event)
    }

    /// Add a pin at a screen position. The stored coordinates are the image
    /// point currently under `(screen_x, screen_y)`.
    pub fn create_pin_at(&mut self, screen_x: f32, screen_y: f32, draft: PinDraft) -> PinId {
        let (x, y) = self.controller.view().to_image(screen_x, screen_y);
        let pin = draft.into_pin(f64::from(x), f64::from(y), &self.config.default_pin_label);
        log::info!("Creating pin '{}' at ({:.1}, {:.1})", pin.label, x, y);

        let id = self.insert(pin);
        self.persist();
        id
    }

    /// Apply an edit to a pin. Returns `false` if the pin no longer exists.
    pub fn edit_pin(&mut self, id: PinId, edit: PinEdit) -> bool {
        let Some(index) = self.index_of(id) else {
            log::warn!("Edit for unknown pin {}", id);
            return false;
        };

        edit.apply_to(&mut self.pins[index].pin);
        log::debug!("Edited pin {}", id);
        self.persist();
        true
    }

    /// Remove a pin. Returns the removed pin, or `None` if it didn't exist.
    pub fn remove_pin(&mut self, id: PinId) -> Option<Pin> {
        let index = self.index_of(id)?;
        let entry = self.pins.remove(index);
        log::info!("Removed pin '{}'", entry.pin.label);
        self.persist();
        Some(entry.pin)
    }

    /// Topmost pin whose marker is within the hit radius of a screen point.
    pub fn pin_at_screen(&self, screen_x: f32, screen_y: f32) -> Option<PinId> {
        let view = self.controller.view();
        self.pins
            .iter()
            .rev()
            .find(|entry| {
                let (image_x, image_y) = entry.pin.image_position();
                let (px, py) = view.to_screen(image_x, image_y);
                let dx = screen_x - px;
                let dy = screen_y - py;
                (dx * dx + dy * dy).sqrt() < self.config.pin_hit_radius
            })
            .map(|entry| entry.id)
    }

    /// Link to open when a pin is clicked.
    pub fn link_for(&self, id: PinId) -> Option<&str> {
        self.pin(id).and_then(Pin::link)
    }

    /// Marker for one pin under the current view.
    pub fn marker(&self, id: PinId) -> Option<PinMarker> {
        let view = self.controller.view();
        self.pins
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| PinMarker::project(entry, view, self.config.label_offset))
    }

    /// Markers for all pins under the current view.
    pub fn markers(&self) -> Vec<PinMarker> {
        let view = self.controller.view();
        self.pins
            .iter()
            .map(|entry| PinMarker::project(entry, view, self.config.label_offset))
            .collect()
    }

    /// Place every marker. Call after the view changed.
    pub fn render(&self, renderer: &mut impl PinRenderer) {
        for marker in self.markers() {
            renderer.place(&marker);
        }
    }

    /// Bring a single pin's element up to date: placed if the pin exists,
    /// removed otherwise.
    pub fn render_pin(&self, id: PinId, renderer: &mut impl PinRenderer) {
        match self.marker(id) {
            Some(marker) => renderer.place(&marker),
            None => renderer.remove(id),
        }
    }

    /// Open the context menu for a right-click at a screen point, replacing
    /// any menu already open.
    pub fn open_context_menu(&mut self, screen_x: f32, screen_y: f32) -> &ContextMenu {
        let target = match self.pin_at_screen(screen_x, screen_y) {
            Some(id) => MenuTarget::Pin(id),
            None => MenuTarget::Map,
        };
        self.menu
            .insert(ContextMenu::for_target(target, screen_x, screen_y))
    }

    /// The open context menu, if any.
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    pub fn close_context_menu(&mut self) {
        self.menu = None;
    }

    /// Where to draw the open menu in window coordinates, given the
    /// viewport's origin in the window, the menu's measured size and the
    /// window size.
    pub fn context_menu_position(
        &self,
        viewport_origin: (f32, f32),
        menu_size: Size,
        window: Size,
    ) -> Option<(f32, f32)> {
        self.menu.as_ref().map(|menu| {
            menu.position(viewport_origin, menu_size, window, self.config.menu_edge_margin)
        })
    }

    /// Run a menu action. Closes the menu; create and customize open the
    /// matching modal, remove takes effect immediately. Returns the pin
    /// whose element needs re-rendering, if any.
    pub fn apply_menu_action(&mut self, action: MenuAction) -> Option<PinId> {
        self.menu = None;
        match action {
            MenuAction::CreatePin { x, y } => {
                self.modal = Some(PinModal::Create {
                    x,
                    y,
                    draft: PinDraft::new(self.config.default_pin_color.clone()),
                });
                None
            }
            MenuAction::CustomizePin(id) => {
                self.modal = self.pin(id).map(|pin| PinModal::Edit {
                    id,
                    edit: PinEdit::from_pin(pin),
                });
                None
            }
            MenuAction::RemovePin(id) => self.remove_pin(id).map(|_| id),
        }
    }

    pub fn modal(&self) -> Option<&PinModal> {
        self.modal.as_ref()
    }

    /// Mutable access for the host to write form input into the modal.
    pub fn modal_mut(&mut self) -> Option<&mut PinModal> {
        self.modal.as_mut()
    }

    /// Close the modal without saving.
    pub fn cancel_modal(&mut self) {
        self.modal = None;
    }

    /// Save the open modal. Returns the created or edited pin.
    pub fn submit_modal(&mut self) -> Option<PinId> {
        match self.modal.take()? {
            PinModal::Create { x, y, draft } => Some(self.create_pin_at(x, y, draft)),
            PinModal::Edit { id, edit } => self.edit_pin(id, edit).then_some(id),
        }
    }
}

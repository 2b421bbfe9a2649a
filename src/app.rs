//! Session: owns the catalog and its index, dispatches actions, and tells
//! the host loop whether to keep going.

use std::collections::HashSet;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::actions::Action;
use crate::catalog::{Catalog, CatalogItem};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::events::{KeyInput, MouseInput};
use crate::repeat::KeyRepeaters;
use crate::search::{ApproxIndex, FilterEngine};
use crate::state::{AppState, ListArea};
use crate::usage::UsageRanking;

/// What the host loop should do after handling input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Launch the catalog item at this index, then exit.
    Launch(usize),
    Quit,
}

pub struct App {
    pub state: AppState,
    catalog: Catalog,
    index: ApproxIndex,
    ranking: UsageRanking,
    engine: FilterEngine,
    repeaters: KeyRepeaters<Action>,
    clipboard: Box<dyn Clipboard>,
    scroll_speed: f32,
}

impl App {
    /// The index is built here, after the catalog is final.
    pub fn new(
        catalog: Catalog,
        ranking: UsageRanking,
        clipboard: Box<dyn Clipboard>,
        config: &Config,
    ) -> Self {
        let index = ApproxIndex::build(&catalog);
        tracing::info!(items = catalog.len(), "catalog indexed");
        Self {
            state: AppState::default(),
            catalog,
            index,
            ranking,
            engine: FilterEngine::new(config.max_distance),
            repeaters: KeyRepeaters::new(config.repeat_timing()),
            clipboard,
            scroll_speed: config.scroll_speed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rows in the active list.
    pub fn count(&self) -> usize {
        self.state.results.len(self.catalog.len())
    }

    /// Catalog index shown at `row`.
    pub fn item_index(&self, row: usize) -> Option<usize> {
        self.state.results.item_at(row, self.catalog.len())
    }

    pub fn item(&self, row: usize) -> Option<&CatalogItem> {
        self.item_index(row).and_then(|i| self.catalog.get(i))
    }

    pub fn selected_item(&self) -> Option<usize> {
        self.item_index(self.state.viewport.selected())
    }

    pub fn dispatch(&mut self, action: Action) -> Flow {
        let cursor = &mut self.state.cursor;
        let edited = match action {
            Action::Quit => return Flow::Quit,
            Action::Launch => {
                return self.selected_item().map_or(Flow::Continue, Flow::Launch);
            }

            Action::Char(c) => {
                for lower in c.to_lowercase() {
                    cursor.insert_char(lower);
                }
                true
            }
            Action::Paste => match self.clipboard.get_text() {
                Some(text) => cursor.insert_text(&text.to_lowercase()),
                None => false,
            },
            Action::DeleteBack => cursor.delete_back(),
            Action::DeleteForward => cursor.delete_forward(),
            Action::DeleteWordBack => cursor.delete_word_back(),
            Action::DeleteWordForward => cursor.delete_word_forward(),
            Action::DeleteToEnd => cursor.delete_to_end(),
            Action::ClearInput => cursor.clear(),

            Action::MoveLeft => {
                cursor.move_left();
                false
            }
            Action::MoveRight => {
                cursor.move_right();
                false
            }
            Action::MoveWordLeft => {
                cursor.move_word_left();
                false
            }
            Action::MoveWordRight => {
                cursor.move_word_right();
                false
            }
            Action::MoveStart => {
                cursor.move_start();
                false
            }
            Action::MoveEnd => {
                cursor.move_end();
                false
            }

            Action::ListUp => {
                let count = self.count();
                self.state.viewport.move_up(count);
                false
            }
            Action::ListDown => {
                let count = self.count();
                self.state.viewport.move_down(count);
                false
            }
        };
        if edited {
            self.refilter();
        }
        Flow::Continue
    }

    /// Text pasted through the terminal rather than read from the clipboard.
    pub fn paste_text(&mut self, text: &str) {
        if self.state.cursor.insert_text(&text.to_lowercase()) {
            self.refilter();
        }
    }

    /// Recompute results from scratch and drop the navigation position.
    pub fn refilter(&mut self) {
        self.state.results =
            self.engine
                .recompute(self.state.cursor.text(), &self.catalog, &self.index, &self.ranking);
        self.state.viewport.reset();
        self.rehover();
    }

    /// Handle one key event as it arrives.
    pub fn on_key(&mut self, input: KeyInput, now: Instant) -> Flow {
        match input {
            KeyInput::Once(action) => self.dispatch(action),
            KeyInput::Press(action) => {
                if self.repeaters.update(action, now, true, true) {
                    self.dispatch(action)
                } else {
                    Flow::Continue
                }
            }
            KeyInput::Release(action) => {
                self.repeaters.update(action, now, false, false);
                Flow::Continue
            }
        }
    }

    /// Once per tick, after the event queue is drained: fire repeats for
    /// held actions.
    pub fn tick(&mut self, now: Instant, held: &HashSet<Action>) -> Flow {
        self.repeaters.release_all_except(now, |a| held.contains(a));
        for &action in held {
            if self.repeaters.update(action, now, true, false) {
                let flow = self.dispatch(action);
                if flow != Flow::Continue {
                    return flow;
                }
            }
        }
        Flow::Continue
    }

    pub fn on_mouse(&mut self, input: MouseInput) -> Flow {
        let count = self.count();
        match input {
            MouseInput::Wheel(notches) => {
                let delta = notches * self.scroll_speed * self.state.viewport.item_height();
                self.state.viewport.scroll_by(delta, count);
                self.rehover();
            }
            MouseInput::Move { column, row } => {
                self.state.pointer = Some((column, row));
                self.state.hovered = self.row_under(column, row);
            }
            MouseInput::Press { column, row } => {
                if self.on_scrollbar(column, row) {
                    self.state.dragging_scrollbar = true;
                    self.drag_scrollbar(row);
                } else if let Some(item) = self.row_under(column, row).and_then(|r| self.item_index(r)) {
                    return Flow::Launch(item);
                }
            }
            MouseInput::Drag { row, .. } if self.state.dragging_scrollbar => {
                self.drag_scrollbar(row);
            }
            MouseInput::Drag { .. } => {}
            MouseInput::Release => self.state.dragging_scrollbar = false,
        }
        Flow::Continue
    }

    /// Rows moved under a still pointer.
    fn rehover(&mut self) {
        self.state.hovered = self
            .state
            .pointer
            .and_then(|(column, row)| self.row_under(column, row));
    }

    fn row_under(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.state.list_area;
        if !area.contains(column, row) || self.state.no_matches() {
            return None;
        }
        self.state
            .viewport
            .row_at(f32::from(row - area.y), self.count())
    }

    fn has_scrollbar(&self) -> bool {
        self.state.viewport.max_scroll(self.count()) > 0.0
    }

    fn on_scrollbar(&self, column: u16, row: u16) -> bool {
        let area = self.state.list_area;
        self.has_scrollbar() && area.contains(column, row) && column == area.scrollbar_x()
    }

    fn drag_scrollbar(&mut self, row: u16) {
        let area = self.state.list_area;
        let track = f32::from(area.height.saturating_sub(1)).max(1.0);
        let fraction = f32::from(row.saturating_sub(area.y)) / track;
        let count = self.count();
        self.state.viewport.scroll_to_fraction(fraction, count);
    }

    /// New list geometry from the layout, e.g. after a terminal resize.
    pub fn set_list_area(&mut self, area: ListArea) {
        self.state.list_area = area;
        let count = self.count();
        self.state.viewport.set_viewport_height(f32::from(area.height), count);
    }

    /// Start the item's command through `spawn`, then count the launch. A
    /// command that fails to start is not counted.
    pub fn launch_with(
        &mut self,
        item: usize,
        spawn: impl FnOnce(&str) -> Result<()>,
    ) -> Result<()> {
        let command = self
            .catalog
            .get(item)
            .map(|entry| entry.command.clone())
            .context("launch requested for unknown item")?;
        spawn(&command)?;
        if let Err(e) = self.record_launch(item) {
            tracing::warn!("could not record launch: {e:#}");
        }
        Ok(())
    }

    /// Count the launch and append it to the history log.
    pub fn record_launch(&mut self, item: usize) -> Result<()> {
        match self.catalog.get(item) {
            Some(entry) => self.ranking.record(&entry.name),
            None => Ok(()),
        }
    }
}

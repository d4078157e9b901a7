//! Where a files view reads and writes its selection.
//!
//! A view either follows the UI store or is controlled by its page through `selected_ids` and
//! `on_select`. When the page passes them they win: reads come from `selected_ids`, writes go to
//! `on_select`, and the range anchor lives in the binding instead of the store.

use drive_model::FileId;
use leptos::*;

use crate::{
    keyboard::KeyCommand,
    model::UiState,
    reducer::UiAction,
    selection::{self, Modifiers},
};

#[derive(Clone, Copy)]
/// Selection source and sink for one mounted files view.
pub struct SelectionBinding {
    ui: RwSignal<UiState>,
    dispatch_ui: Callback<UiAction>,
    selected_ids: Option<Signal<Vec<FileId>>>,
    on_select: Option<Callback<Vec<FileId>>>,
    local_anchor: RwSignal<Option<FileId>>,
}

impl SelectionBinding {
    /// Binds to the UI store, overridden by whichever controlled props are present.
    pub fn new(
        ui: RwSignal<UiState>,
        dispatch_ui: Callback<UiAction>,
        selected_ids: Option<Signal<Vec<FileId>>>,
        on_select: Option<Callback<Vec<FileId>>>,
    ) -> Self {
        Self {
            ui,
            dispatch_ui,
            selected_ids,
            on_select,
            local_anchor: create_rw_signal(None),
        }
    }

    /// Current selection, tracked.
    pub fn selected(&self) -> Vec<FileId> {
        match self.selected_ids {
            Some(ids) => ids.get(),
            None => self.ui.with(|ui| ui.selected.clone()),
        }
    }

    /// Current selection without subscribing.
    pub fn selected_untracked(&self) -> Vec<FileId> {
        match self.selected_ids {
            Some(ids) => ids.get_untracked(),
            None => self.ui.with_untracked(|ui| ui.selected.clone()),
        }
    }

    /// Range anchor of the last non-shift pick.
    pub fn anchor(&self) -> Option<FileId> {
        match self.on_select {
            Some(_) => self.local_anchor.get_untracked(),
            None => self.ui.with_untracked(|ui| ui.anchor),
        }
    }

    /// Writes a new selection and anchor.
    pub fn commit(&self, ids: Vec<FileId>, anchor: Option<FileId>) {
        match self.on_select {
            Some(on_select) => {
                self.local_anchor.set(anchor);
                on_select.call(ids);
            }
            None => self.dispatch_ui.call(UiAction::SetSelection { ids, anchor }),
        }
    }

    /// Applies a click on `target` over the `visible` ordering.
    pub fn pick(&self, visible: &[FileId], target: FileId, modifiers: Modifiers) {
        let change = selection::click(
            visible,
            &self.selected_untracked(),
            self.anchor(),
            target,
            modifiers,
        );
        self.commit(change.selected, change.anchor);
    }

    /// Applies a keyboard command; Ctrl/Cmd+A keeps the anchor.
    pub fn apply_key(&self, command: KeyCommand, visible: &[FileId]) {
        match command {
            KeyCommand::SelectAll => self.commit(visible.to_vec(), self.anchor()),
            KeyCommand::ClearSelection => self.commit(Vec::new(), None),
        }
    }

    /// Ends a background press. A press that never became a drag and had no modifiers
    /// clears the selection.
    pub fn release_background(&self, dragged: bool, modifiers: Modifiers) {
        if !dragged && modifiers == Modifiers::default() {
            self.commit(Vec::new(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_ui;

    fn ids(raw: &[u64]) -> Vec<FileId> {
        raw.iter().copied().map(FileId).collect()
    }

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            toggle: false,
        }
    }

    fn store() -> (RwSignal<UiState>, Callback<UiAction>) {
        let ui = create_rw_signal(UiState::default());
        let dispatch = Callback::new(move |action| ui.update(|state| reduce_ui(state, action)));
        (ui, dispatch)
    }

    #[test]
    fn store_mode_writes_selection_and_anchor_to_the_store() {
        let runtime = create_runtime();
        let (ui, dispatch) = store();
        let binding = SelectionBinding::new(ui, dispatch, None, None);
        let visible = ids(&[1, 2, 3, 4]);

        binding.pick(&visible, FileId(2), Modifiers::default());
        binding.pick(&visible, FileId(4), shift());

        ui.with_untracked(|state| {
            assert_eq!(state.selected, ids(&[2, 3, 4]));
            assert_eq!(state.anchor, Some(FileId(2)));
        });
        assert_eq!(binding.selected_untracked(), ids(&[2, 3, 4]));
        runtime.dispose();
    }

    #[test]
    fn controlled_mode_reads_props_and_leaves_the_store_alone() {
        let runtime = create_runtime();
        let (ui, dispatch) = store();
        dispatch.call(UiAction::SetSelection {
            ids: ids(&[9]),
            anchor: Some(FileId(9)),
        });
        let page_selection = create_rw_signal(ids(&[1]));
        let commits = Rc::new(RefCell::new(Vec::new()));
        let on_select = {
            let commits = Rc::clone(&commits);
            Callback::new(move |next: Vec<FileId>| {
                commits.borrow_mut().push(next.clone());
                page_selection.set(next);
            })
        };
        let binding = SelectionBinding::new(
            ui,
            dispatch,
            Some(page_selection.into()),
            Some(on_select),
        );
        let visible = ids(&[1, 2, 3]);

        assert_eq!(binding.selected_untracked(), ids(&[1]));
        binding.pick(&visible, FileId(1), Modifiers::default());
        binding.pick(&visible, FileId(3), shift());

        assert_eq!(*commits.borrow(), vec![ids(&[1]), ids(&[1, 2, 3])]);
        assert_eq!(binding.anchor(), Some(FileId(1)));
        ui.with_untracked(|state| {
            assert_eq!(state.selected, ids(&[9]));
            assert_eq!(state.anchor, Some(FileId(9)));
        });
        runtime.dispose();
    }

    #[test]
    fn keyboard_commands_go_through_the_controlled_callback() {
        let runtime = create_runtime();
        let (ui, dispatch) = store();
        let page_selection = create_rw_signal(Vec::<FileId>::new());
        let binding = SelectionBinding::new(
            ui,
            dispatch,
            Some(page_selection.into()),
            Some(Callback::new(move |next| page_selection.set(next))),
        );

        binding.apply_key(KeyCommand::SelectAll, &ids(&[4, 5]));
        assert_eq!(page_selection.get_untracked(), ids(&[4, 5]));

        binding.apply_key(KeyCommand::ClearSelection, &ids(&[4, 5]));
        assert_eq!(page_selection.get_untracked(), Vec::<FileId>::new());
        assert!(ui.with_untracked(|state| state.selected.is_empty()));
        runtime.dispose();
    }

    #[test]
    fn background_release_clears_only_plain_clicks() {
        let runtime = create_runtime();
        let (ui, dispatch) = store();
        let binding = SelectionBinding::new(ui, dispatch, None, None);
        binding.commit(ids(&[1, 2]), Some(FileId(1)));

        binding.release_background(true, Modifiers::default());
        binding.release_background(false, shift());
        assert_eq!(binding.selected_untracked(), ids(&[1, 2]));

        binding.release_background(false, Modifiers::default());
        ui.with_untracked(|state| {
            assert!(state.selected.is_empty());
            assert_eq!(state.anchor, None);
        });
        runtime.dispose();
    }
}

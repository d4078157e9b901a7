//! Keyboard shortcuts for the files view.

use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Selection shortcut recognized by the files view.
pub enum KeyCommand {
    /// Ctrl/Cmd+A: select every visible file.
    SelectAll,
    /// Escape: clear the selection.
    ClearSelection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The parts of a key event that decide the command.
pub struct KeyInput {
    /// `KeyboardEvent.key`.
    pub key: String,
    /// Ctrl held.
    pub ctrl: bool,
    /// Cmd held.
    pub meta: bool,
    /// Alt held.
    pub alt: bool,
    /// The event originated from a text input, textarea, select, or editable region.
    pub from_text_input: bool,
}

impl KeyInput {
    /// Extracts the fields from a browser key event.
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            from_text_input: ev.target().map(|target| is_text_entry(&target)).unwrap_or(false),
        }
    }
}

fn is_text_entry(target: &web_sys::EventTarget) -> bool {
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    if matches!(
        element.tag_name().to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    ) {
        return true;
    }
    element
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|element| element.is_content_editable())
        .unwrap_or(false)
}

/// Maps a key event to a selection command. Events from text inputs never map.
pub fn command_for(input: &KeyInput) -> Option<KeyCommand> {
    if input.from_text_input {
        return None;
    }
    if input.key == "Escape" && !input.ctrl && !input.meta && !input.alt {
        return Some(KeyCommand::ClearSelection);
    }
    if (input.ctrl || input.meta) && !input.alt && input.key.eq_ignore_ascii_case("a") {
        return Some(KeyCommand::SelectAll);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str) -> KeyInput {
        KeyInput {
            key: key.to_string(),
            ..KeyInput::default()
        }
    }

    #[test]
    fn ctrl_or_cmd_a_selects_all() {
        let ctrl = KeyInput {
            ctrl: true,
            ..key("a")
        };
        let cmd = KeyInput {
            meta: true,
            ..key("A")
        };
        assert_eq!(command_for(&ctrl), Some(KeyCommand::SelectAll));
        assert_eq!(command_for(&cmd), Some(KeyCommand::SelectAll));
        assert_eq!(command_for(&key("a")), None);
    }

    #[test]
    fn escape_clears_selection() {
        assert_eq!(command_for(&key("Escape")), Some(KeyCommand::ClearSelection));
    }

    #[test]
    fn text_inputs_keep_their_shortcuts() {
        let typing = KeyInput {
            ctrl: true,
            from_text_input: true,
            ..key("a")
        };
        let escape_in_search = KeyInput {
            from_text_input: true,
            ..key("Escape")
        };
        assert_eq!(command_for(&typing), None);
        assert_eq!(command_for(&escape_in_search), None);
    }
}

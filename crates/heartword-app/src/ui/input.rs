use eframe::egui::{Event, InputState, Key, Modifiers};
use heartword_core::Letter;
use heartword_game::Movement;

use crate::action::{
    Action, ActionRequestQueue, AppAction, BoardAction, ModalRequest, PuzzleAction,
    SelectionAction, UiAction,
};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, false), action)
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, true), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false, false), action)
    }
}

const fn board(action: BoardAction) -> Action {
    Action::App(AppAction::Board(action))
}

const fn selection(action: SelectionAction) -> Action {
    Action::App(AppAction::Selection(action))
}

const fn puzzle(action: PuzzleAction) -> Action {
    Action::App(AppAction::Puzzle(action))
}

const fn open_modal(request: ModalRequest) -> Action {
    Action::Ui(UiAction::OpenModal(request))
}

const fn movement(movement: Movement) -> Action {
    selection(SelectionAction::MoveSelection(movement))
}

const SHORTCUTS: [Shortcut; 12] = [
    Shortcut::command(Key::R, board(BoardAction::RevealLetter)),
    Shortcut::command(Key::Comma, open_modal(ModalRequest::Settings)),
    Shortcut::command_shift(Key::Backspace, open_modal(ModalRequest::ResetConfirm)),
    Shortcut::plain(Key::Enter, puzzle(PuzzleAction::CheckWord)),
    Shortcut::plain(Key::ArrowUp, movement(Movement::Up)),
    Shortcut::plain(Key::ArrowDown, movement(Movement::Down)),
    Shortcut::plain(Key::ArrowLeft, movement(Movement::Left)),
    Shortcut::plain(Key::ArrowRight, movement(Movement::Right)),
    Shortcut::plain(Key::Space, selection(SelectionAction::ToggleDirection)),
    Shortcut::plain(Key::Backspace, board(BoardAction::Backspace)),
    Shortcut::plain(Key::Delete, board(BoardAction::Backspace)),
    Shortcut::plain(Key::Escape, Action::Ui(UiAction::CloseKeypad)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command
            && i.modifiers.shift == shortcut.trigger.shift;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }

    for letter in typed_letters(&i.events, i.modifiers) {
        action_queue.request(BoardAction::EnterLetter(letter).into());
    }
}

fn typed_letters(events: &[Event], modifiers: Modifiers) -> Vec<Letter> {
    if modifiers.command {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) => Some(text),
            _ => None,
        })
        .flat_map(|text| text.chars())
        .filter_map(|ch| Letter::from_char(ch).ok())
        .collect()
}

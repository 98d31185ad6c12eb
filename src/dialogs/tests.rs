use std::collections::VecDeque;

use super::{
    DialogController, DialogEvent, DialogKey, DialogOutcome, DialogPresenter, DialogRequest,
    ResponseButton, ScreenRect, Size, center_dialog,
};

#[derive(Debug, Default)]
struct ScriptedPresenter {
    events: VecDeque<DialogEvent>,
    shown: Vec<DialogRequest>,
}

impl ScriptedPresenter {
    fn replying(events: impl IntoIterator<Item = DialogEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            shown: Vec::new(),
        }
    }
}

impl DialogPresenter for ScriptedPresenter {
    fn present(&mut self, request: &DialogRequest) -> DialogEvent {
        self.shown.push(request.clone());
        self.events.pop_front().unwrap_or(DialogEvent::Closed)
    }
}

#[test]
fn message_dialog_always_resolves_ok() {
    let request = DialogRequest::message("Info", "first\nsecond");
    assert_eq!(request.lines(), vec!["first", "second"]);
    for event in [
        DialogEvent::Button(ResponseButton::Ok),
        DialogEvent::Key(DialogKey::Escape),
        DialogEvent::Closed,
    ] {
        assert_eq!(request.resolve(event), DialogOutcome::Ok);
    }
}

#[test]
fn yes_no_cancel_maps_buttons_and_keys() {
    let request = DialogRequest::yes_no_cancel("Save", "Save changes?");
    let cases = [
        (DialogEvent::Button(ResponseButton::Yes), DialogOutcome::Yes),
        (DialogEvent::Key(DialogKey::Enter), DialogOutcome::Yes),
        (DialogEvent::Key(DialogKey::Char('Y')), DialogOutcome::Yes),
        (DialogEvent::Button(ResponseButton::No), DialogOutcome::No),
        (DialogEvent::Key(DialogKey::Char('n')), DialogOutcome::No),
        (DialogEvent::Button(ResponseButton::Cancel), DialogOutcome::Cancel),
        (DialogEvent::Key(DialogKey::Escape), DialogOutcome::Cancel),
        (DialogEvent::Key(DialogKey::Char('q')), DialogOutcome::Cancel),
        (DialogEvent::Closed, DialogOutcome::Cancel),
    ];
    for (event, expected) in cases {
        assert_eq!(request.resolve(event), expected, "{event:?}");
    }
}

#[test]
fn custom_labels_only_apply_to_confirmations() {
    let request = DialogRequest::yes_no_cancel("Close", "Discard?").with_labels("Save", "Discard");
    assert!(matches!(
        request,
        DialogRequest::YesNoCancel { ref yes_label, ref no_label, .. }
            if yes_label == "Save" && no_label == "Discard"
    ));
    let message = DialogRequest::message("Note", "text");
    assert_eq!(message.clone().with_labels("a", "b"), message);
}

#[test]
fn html_body_is_wrapped_once() {
    let plain = DialogRequest::html("About", "<b>roi-kit</b>");
    assert_eq!(plain.lines(), vec!["<html><b>roi-kit</b></html>"]);
    let wrapped = DialogRequest::html("About", "<HTML><p>x</p></HTML>");
    assert_eq!(wrapped.lines(), vec!["<HTML><p>x</p></HTML>"]);
}

#[test]
fn controller_routes_requests_through_presenter() {
    let presenter = ScriptedPresenter::replying([
        DialogEvent::Key(DialogKey::Char('n')),
        DialogEvent::Button(ResponseButton::Ok),
    ]);
    let mut controller = DialogController::new(presenter);
    assert_eq!(controller.confirm("Quit", "Save first?"), DialogOutcome::No);
    assert_eq!(controller.message("Done", "Saved"), DialogOutcome::Ok);
    assert_eq!(controller.html("Help", "<p>hi</p>"), DialogOutcome::Ok);

    let titles = controller
        .presenter()
        .shown
        .iter()
        .map(DialogRequest::title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Quit", "Done", "Help"]);
}

#[test]
fn dialog_centres_on_parent() {
    let screen = ScreenRect {
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
    };
    let parent = ScreenRect {
        x: 100,
        y: 100,
        width: 800,
        height: 600,
    };
    let dialog = Size {
        width: 200,
        height: 100,
    };
    assert_eq!(center_dialog(dialog, Some(parent), screen), (400, 350));
    assert_eq!(center_dialog(dialog, None, screen), (860, 490));
}

#[test]
fn dialog_stays_on_screen() {
    let screen = ScreenRect {
        x: 0,
        y: 0,
        width: 1000,
        height: 800,
    };
    let parent = ScreenRect {
        x: 900,
        y: -50,
        width: 200,
        height: 100,
    };
    let dialog = Size {
        width: 300,
        height: 200,
    };
    assert_eq!(center_dialog(dialog, Some(parent), screen), (700, 0));

    let oversized = Size {
        width: 1200,
        height: 900,
    };
    assert_eq!(center_dialog(oversized, None, screen), (0, 0));
}

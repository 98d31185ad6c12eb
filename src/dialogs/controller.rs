use super::{DialogEvent, DialogOutcome, DialogRequest};

/// Presentation layer for dialogs. Implementations show `request` and block
/// until the user reacts.
pub trait DialogPresenter {
    fn present(&mut self, request: &DialogRequest) -> DialogEvent;
}

#[derive(Debug, Clone, Default)]
pub struct DialogController<P> {
    presenter: P,
}

impl<P: DialogPresenter> DialogController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn show(&mut self, request: &DialogRequest) -> DialogOutcome {
        let event = self.presenter.present(request);
        let outcome = request.resolve(event);
        log::debug!("dialog `{}` closed with {outcome:?}", request.title());
        outcome
    }

    pub fn message(&mut self, title: &str, message: &str) -> DialogOutcome {
        self.show(&DialogRequest::message(title, message))
    }

    pub fn confirm(&mut self, title: &str, message: &str) -> DialogOutcome {
        self.show(&DialogRequest::yes_no_cancel(title, message))
    }

    pub fn html(&mut self, title: &str, body: &str) -> DialogOutcome {
        self.show(&DialogRequest::html(title, body))
    }
}

//! Runtime state of the contact form component.
//!
//! Both halves are plain `common` state machines; the component only adds
//! the set of controls the visitor has left, so inline errors stay hidden
//! until a control has been touched or a submit was attempted.

use std::collections::HashSet;

use common::forms::autocomplete::AutocompletePipeline;
use common::forms::submission::ContactForm;
use common::forms::validation::{Field, FieldError};

pub struct ContactComponent {
    /// Form values and the submission state machine.
    pub form: ContactForm,

    /// Debounced address lookup and the current suggestion list.
    pub autocomplete: AutocompletePipeline,

    /// Controls that lost focus at least once.
    pub touched: HashSet<Field>,
}

impl ContactComponent {
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            autocomplete: AutocompletePipeline::new(),
            touched: HashSet::new(),
        }
    }

    /// First error of `field`, if it should be shown right now.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.form.errors().into_iter().find(|error| error.field() == field)
    }

    pub fn touch_all(&mut self) {
        self.touched.extend([
            Field::FullName,
            Field::Email,
            Field::City,
            Field::PostalCode,
            Field::Address,
            Field::Message,
            Field::Terms,
        ]);
    }
}

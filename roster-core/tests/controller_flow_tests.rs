#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the create / edit / delete cycle through the public API.

use roster_core::{
    render, render_filtered, ActionKind, Command, ConfirmPrompt, CoreError, FormController,
    FormField, FormMode, Outcome, PresetAnswer, RecordQuery, SubmitLabel, UserRecord,
};

// ===== Helpers =====

/// Prompt that answers from a queue and counts how often it was asked.
struct QueuedPrompt {
    answers: Vec<bool>,
    asked: usize,
}

impl QueuedPrompt {
    fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().rev().copied().collect(),
            asked: 0,
        }
    }
}

impl ConfirmPrompt for QueuedPrompt {
    fn confirm(&mut self, _record: &UserRecord) -> bool {
        self.asked += 1;
        self.answers.pop().unwrap_or(false)
    }
}

fn type_in(controller: &mut FormController, name: &str, email: &str, phone: &str) {
    controller.form_mut().set(FormField::Name, name);
    controller.form_mut().set(FormField::Email, email);
    controller.form_mut().set(FormField::Phone, phone);
}

fn submit(controller: &mut FormController) -> Outcome {
    controller
        .dispatch(Command::Submit, &mut PresetAnswer(false))
        .expect("submit should succeed")
}

// ===== Tests =====

#[test]
fn edit_example_from_a_single_record() {
    let mut controller = FormController::new();
    type_in(&mut controller, "Ana", "a@x.com", "111");
    let Outcome::Created(id) = submit(&mut controller) else {
        panic!("first submit must create");
    };

    // Click "edit" on the rendered item
    let command = controller.render().entries[0].command(ActionKind::Edit);
    controller
        .dispatch(command, &mut PresetAnswer(false))
        .unwrap();
    assert_eq!(controller.mode(), FormMode::Editing(id));
    assert_eq!(controller.form().name, "Ana");
    assert_eq!(controller.form().email, "a@x.com");
    assert_eq!(controller.form().phone, "111");

    type_in(&mut controller, "Ana B", "a@x.com", "111");
    assert_eq!(submit(&mut controller), Outcome::Updated(id));

    let records: Vec<_> = controller.store().iter().map(|(_, r)| r.clone()).collect();
    assert_eq!(records, vec![UserRecord::new("Ana B", "a@x.com", "111")]);
    assert_eq!(controller.mode(), FormMode::Creating);
    assert_eq!(controller.submit_label(), SubmitLabel::Create);
}

#[test]
fn delete_from_rendered_item_asks_once_per_click() {
    let mut controller = FormController::new();
    for (name, phone) in [("Ana", "1"), ("Bia", "2"), ("Caio", "3")] {
        type_in(&mut controller, name, "x@x.com", phone);
        submit(&mut controller);
    }
    let mut prompt = QueuedPrompt::new(&[false, true]);

    let middle = controller.render().entries[1].command(ActionKind::Delete);
    assert!(matches!(
        controller.dispatch(middle, &mut prompt),
        Ok(Outcome::DeleteCancelled(_))
    ));
    assert_eq!(controller.store().len(), 3);

    assert!(matches!(
        controller.dispatch(middle, &mut prompt),
        Ok(Outcome::Deleted(_))
    ));
    assert_eq!(prompt.asked, 2);

    let rendered = render(controller.store());
    let names: Vec<_> = rendered.entries.iter().map(|e| e.record.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Caio"]);
}

#[test]
fn stale_commands_fail_after_delete() {
    let mut controller = FormController::new();
    type_in(&mut controller, "Ana", "a@x.com", "111");
    submit(&mut controller);

    let entry = controller.render().entries[0].clone();
    controller
        .dispatch(entry.command(ActionKind::Delete), &mut PresetAnswer(true))
        .unwrap();

    assert_eq!(
        controller.dispatch(entry.command(ActionKind::Edit), &mut PresetAnswer(true)),
        Err(CoreError::RecordNotFound(entry.id))
    );
    assert_eq!(controller.mode(), FormMode::Creating);
}

#[test]
fn whitespace_only_submission_is_silently_ignored() {
    let mut controller = FormController::new();
    type_in(&mut controller, "   ", "\t", " ");

    let result = controller.dispatch(Command::Submit, &mut PresetAnswer(false));

    assert!(matches!(result, Err(e) if e.is_expected()));
    assert!(controller.store().is_empty());
    assert!(render(controller.store()).is_empty());
}

#[test]
fn filter_view_never_mutates_the_store() {
    let mut controller = FormController::new();
    for (name, email) in [("Ana", "a@x.com"), ("Bia", "b@x.com")] {
        type_in(&mut controller, name, email, "000");
        submit(&mut controller);
    }

    let filtered = render_filtered(controller.store(), &RecordQuery::new("b@x.com"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.entries[0].record.name, "Bia");
    assert_eq!(controller.store().len(), 2);

    let shared = render_filtered(controller.store(), &RecordQuery::new("000"));
    assert_eq!(shared.len(), 2);
}

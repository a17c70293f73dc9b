#![forbid(unsafe_code)]

//! Headless single-line text field controller.
//!
//! [`TextField`] owns the text value, cursor, validation rules, optional
//! mask formatter, and the editing lifecycle state. It renders nothing: a
//! host view layer feeds it events and reads back everything it needs to
//! draw. Grapheme-cluster aware for correct Unicode handling.
//!
//! Control flow per change: raw input → formatter (optional) → stored value
//! → [`Bindable`] notification → validation run → lifecycle state.
//!
//! Both the text and the lifecycle state are exposed as [`Bindable`]
//! handles, so a host can subscribe to either without polling.

use statefield_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use statefield_core::{Bindable, EditingState};
use statefield_form::{Formatter, Rule, RuleSet};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::theme::{FieldTheme, Rgb};

/// A headless single-line text field with validation, formatting, and an
/// editing lifecycle.
#[derive(Debug)]
pub struct TextField {
    /// Text value. Observable; always stores the formatted form.
    value: Bindable<String>,
    /// Lifecycle state. Observable.
    state: Bindable<EditingState>,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Validators, run in order.
    rules: RuleSet,
    /// Optional mask formatter applied on every change.
    formatter: Option<Formatter>,
    /// Maximum length in graphemes (None = unlimited).
    max_length: Option<usize>,
    /// Validate after every change (true) or only on focus-leave (false).
    update_live: bool,
    /// Whether lifecycle state drives a presentation color.
    styled: bool,
    /// Per-state colors.
    theme: FieldTheme,
}

impl TextField {
    /// Create an empty field: no rules, no formatter, live validation on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Bindable::new(String::new()),
            state: Bindable::new(EditingState::Untouched),
            cursor: 0,
            rules: RuleSet::new(),
            formatter: None,
            max_length: None,
            update_live: true,
            styled: true,
            theme: FieldTheme::default(),
        }
    }

    // --- Builder methods ---

    /// Set the initial text (builder). Formats if a formatter is configured;
    /// does not validate. The cursor moves to the end.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.assign_end(text.into());
        self
    }

    /// Set the full rule set (builder), replacing any existing rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Append a single rule (builder).
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Install the external validation predicate (builder).
    #[must_use]
    pub fn with_custom_validation(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.rules.set_custom(predicate);
        self
    }

    /// Set the mask formatter (builder) and reformat the current text.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        let text = self.value.with(String::clone);
        self.assign(text);
        self
    }

    /// Set the maximum length in graphemes (builder).
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Mark the field required (builder): appends [`Rule::NotEmpty`].
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        if required {
            self.rules.push(Rule::NotEmpty);
        }
        self
    }

    /// Choose when validation runs (builder): after every change (default)
    /// or only on focus-leave.
    #[must_use]
    pub fn with_update_live(mut self, live: bool) -> Self {
        self.update_live = live;
        self
    }

    /// Whether lifecycle state drives a presentation color (builder).
    /// Disable for optional fields that should not change color.
    #[must_use]
    pub fn with_styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Set the per-state colors (builder).
    #[must_use]
    pub fn with_theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    // --- Value access ---

    /// The current (formatted) text.
    #[must_use]
    pub fn text(&self) -> String {
        self.value.get()
    }

    /// The current text with mask characters stripped, when a formatter is
    /// configured; otherwise the text as-is.
    #[must_use]
    pub fn raw_text(&self) -> String {
        match self.formatter {
            Some(f) => self.value.with(|v| f.strip(v)),
            None => self.value.get(),
        }
    }

    /// The cursor position (grapheme index).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EditingState {
        self.state.get()
    }

    /// Whether the last validation run passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state.get() == EditingState::Valid
    }

    /// Whether the error label should be visible.
    #[must_use]
    pub fn error_visible(&self) -> bool {
        self.state.get().shows_error()
    }

    /// The presentation color for the current state, or `None` when the
    /// field was built `with_styled(false)`.
    #[must_use]
    pub fn current_color(&self) -> Option<Rgb> {
        self.styled.then(|| self.theme.color_for(self.state.get()))
    }

    /// The display width of the text in terminal cells.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.value.with(|v| UnicodeWidthStr::width(v.as_str()))
    }

    /// The visual column of the cursor, in terminal cells. Wide graphemes
    /// (CJK, emoji) count for their rendered width, not their length.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.value.with(|v| {
            v.graphemes(true)
                .take(self.cursor)
                .map(UnicodeWidthStr::width)
                .sum()
        })
    }

    /// A handle to the observable text value.
    ///
    /// Subscribe to it to react to every change; the handle shares the
    /// field's cell, so it stays current as the field mutates.
    #[must_use]
    pub fn text_value(&self) -> Bindable<String> {
        self.value.clone()
    }

    /// A handle to the observable lifecycle state.
    #[must_use]
    pub fn editing_state(&self) -> Bindable<EditingState> {
        self.state.clone()
    }

    // --- Programmatic mutation ---

    /// Assign text programmatically: format (if configured), store, notify.
    /// The cursor moves to the end. Does not validate; use
    /// [`restore`](Self::restore) for that.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.assign_end(text.into());
    }

    /// Restore a persisted value: assign it and, when non-empty, run
    /// validation so the field lands directly in valid or error.
    pub fn restore(&mut self, text: impl Into<String>) {
        self.assign_end(text.into());
        if self.value.with(|v| !v.is_empty()) {
            self.validate();
        }
    }

    /// Clear the text. Does not validate and does not change state.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.value.set(String::new());
    }

    /// Programmatic reset that keeps prior-interaction history: moves the
    /// lifecycle state to touched.
    pub fn reset_touched(&mut self) {
        let next = self.state.get().reset_touched();
        self.state.set(next);
    }

    /// Run the validators against the current text and drive the state
    /// machine. Returns the validation result.
    pub fn validate(&mut self) -> bool {
        let passed = self.value.with(|v| self.rules.evaluate(v));
        let next = self.state.get().on_validation(passed);
        self.state.set(next);
        #[cfg(feature = "tracing")]
        tracing::debug!(passed, state = next.as_str(), "field validated");
        passed
    }

    // --- Event handling ---

    /// Handle an input event.
    ///
    /// Returns `true` if the text, cursor, or lifecycle state changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("field_event", state = self.state.get().as_str()).entered();

        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            Event::Focus(true) => {
                let current = self.state.get();
                let next = current.on_focus_enter();
                if next == current {
                    return false;
                }
                self.state.set(next);
                true
            }
            Event::Focus(false) => {
                let before = self.state.get();
                self.validate();
                self.state.get() != before
            }
            Event::Paste(text) => self.insert_str(text),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() => self.insert_char(c),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => {
                let moved = self.cursor != 0;
                self.cursor = 0;
                moved
            }
            KeyCode::End => {
                let end = self.value.with(|v| grapheme_count(v));
                let moved = self.cursor != end;
                self.cursor = end;
                moved
            }
            _ => false,
        }
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) -> bool {
        let mut text = self.value.get();
        if let Some(max) = self.max_length
            && grapheme_count(&text) >= max
        {
            return false;
        }
        let byte = grapheme_byte_offset(&text, self.cursor);
        text.insert(byte, c);
        self.cursor += 1;
        self.commit(text);
        true
    }

    fn insert_str(&mut self, s: &str) -> bool {
        let mut text = self.value.get();
        let room = match self.max_length {
            Some(max) => max.saturating_sub(grapheme_count(&text)),
            None => usize::MAX,
        };
        let accepted: String = s.graphemes(true).take(room).collect();
        if accepted.is_empty() {
            return false;
        }
        let byte = grapheme_byte_offset(&text, self.cursor);
        let inserted = grapheme_count(&accepted);
        text.insert_str(byte, &accepted);
        self.cursor += inserted;
        self.commit(text);
        true
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut text = self.value.get();
        let start = grapheme_byte_offset(&text, self.cursor - 1);
        let end = grapheme_byte_offset(&text, self.cursor);
        text.drain(start..end);
        self.cursor -= 1;
        self.commit(text);
        true
    }

    fn delete_forward(&mut self) -> bool {
        let mut text = self.value.get();
        if self.cursor >= grapheme_count(&text) {
            return false;
        }
        let start = grapheme_byte_offset(&text, self.cursor);
        let end = grapheme_byte_offset(&text, self.cursor + 1);
        text.drain(start..end);
        self.commit(text);
        true
    }

    fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn move_right(&mut self) -> bool {
        if self.cursor >= self.value.with(|v| grapheme_count(v)) {
            return false;
        }
        self.cursor += 1;
        true
    }

    // --- Internal helpers ---

    /// Store `text` after every mutation: apply the formatter, clamp the
    /// cursor, notify the value's subscriber, then validate when live
    /// updates are on.
    fn commit(&mut self, text: String) {
        self.assign(text);
        if self.update_live {
            self.validate();
        }
    }

    /// Store `text` without validating. With a formatter configured the
    /// whole value is reformatted and the cursor moves to the end, matching
    /// wholesale mask reapplication; otherwise the cursor is clamped.
    fn assign(&mut self, text: String) {
        let text = match self.formatter {
            Some(f) => {
                let formatted = f.format(&text);
                self.cursor = grapheme_count(&formatted);
                formatted
            }
            None => {
                self.cursor = self.cursor.min(grapheme_count(&text));
                text
            }
        };
        self.value.set(text);
    }

    /// [`assign`](Self::assign), then place the cursor at the end.
    fn assign_end(&mut self, text: String) {
        self.assign(text);
        self.cursor = self.value.with(|v| grapheme_count(v));
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

fn grapheme_byte_offset(text: &str, grapheme_idx: usize) -> usize {
    text.grapheme_indices(true)
        .nth(grapheme_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefield_core::Modifiers;
    use statefield_form::{MaskFill, MaskPattern};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn type_str(field: &mut TextField, s: &str) {
        for c in s.chars() {
            field.handle_event(&press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_field() {
        let field = TextField::new();
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.state(), EditingState::Untouched);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "ac");
        field.handle_event(&press(KeyCode::Left));
        field.handle_event(&press(KeyCode::Char('b')));
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete() {
        let mut field = TextField::new().with_text("abc");
        field.handle_event(&press(KeyCode::Backspace));
        assert_eq!(field.text(), "ab");
        field.handle_event(&press(KeyCode::Home));
        field.handle_event(&press(KeyCode::Delete));
        assert_eq!(field.text(), "b");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut field = TextField::new().with_text("ab");
        field.handle_event(&press(KeyCode::Home));
        assert!(!field.handle_event(&press(KeyCode::Backspace)));
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn cursor_movement_is_bounded() {
        let mut field = TextField::new().with_text("hi");
        assert!(!field.handle_event(&press(KeyCode::Right)));
        field.handle_event(&press(KeyCode::Home));
        assert!(!field.handle_event(&press(KeyCode::Left)));
        field.handle_event(&press(KeyCode::End));
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn unicode_editing_is_grapheme_aware() {
        let mut field = TextField::new().with_text("cafe\u{301}");
        assert_eq!(field.cursor(), 4);
        field.handle_event(&press(KeyCode::Backspace));
        assert_eq!(field.text(), "caf");
    }

    #[test]
    fn cursor_column_accounts_for_wide_graphemes() {
        let mut field = TextField::new().with_text("日本a");
        assert_eq!(field.display_width(), 5);
        assert_eq!(field.cursor_column(), 5);
        field.handle_event(&press(KeyCode::Left));
        field.handle_event(&press(KeyCode::Left));
        assert_eq!(field.cursor(), 1);
        assert_eq!(field.cursor_column(), 2);
    }

    #[test]
    fn ctrl_chars_are_not_inserted() {
        let mut field = TextField::new();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL));
        assert!(!field.handle_event(&ev));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn max_length_rejects_insertions() {
        let mut field = TextField::new().with_max_length(3);
        type_str(&mut field, "abcdef");
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn paste_respects_max_length() {
        let mut field = TextField::new().with_max_length(4);
        field.handle_event(&Event::Paste("abcdef".into()));
        assert_eq!(field.text(), "abcd");
        assert!(!field.handle_event(&Event::Paste("x".into())));
    }

    #[test]
    fn focus_enter_activates_once() {
        let mut field = TextField::new();
        assert!(field.handle_event(&Event::Focus(true)));
        assert_eq!(field.state(), EditingState::Active);
        // Second focus is a no-op.
        assert!(!field.handle_event(&Event::Focus(true)));
        assert_eq!(field.state(), EditingState::Active);
    }

    #[test]
    fn live_validation_drives_state_while_typing() {
        let mut field = TextField::new().with_rule(Rule::MinLength(3));
        field.handle_event(&Event::Focus(true));
        type_str(&mut field, "ab");
        assert_eq!(field.state(), EditingState::Error);
        assert!(field.error_visible());
        type_str(&mut field, "c");
        assert_eq!(field.state(), EditingState::Valid);
        assert!(field.is_valid());
    }

    #[test]
    fn deferred_validation_waits_for_focus_leave() {
        let mut field = TextField::new()
            .with_rule(Rule::MinLength(3))
            .with_update_live(false);
        field.handle_event(&Event::Focus(true));
        type_str(&mut field, "ab");
        assert_eq!(field.state(), EditingState::Active);
        field.handle_event(&Event::Focus(false));
        assert_eq!(field.state(), EditingState::Error);
    }

    #[test]
    fn required_appends_not_empty() {
        let mut field = TextField::new().with_required(true);
        assert!(!field.validate());
        field.set_text("x");
        assert!(field.validate());
    }

    #[test]
    fn custom_validation_is_anded_in() {
        let mut field = TextField::new()
            .with_rule(Rule::NotEmpty)
            .with_custom_validation(|v| v.ends_with('!'));
        field.set_text("hey");
        assert!(!field.validate());
        field.set_text("hey!");
        assert!(field.validate());
    }

    #[test]
    fn formatter_reformats_on_every_change() {
        let phone = Formatter::new(MaskPattern::Phone);
        let mut field = TextField::new().with_formatter(phone);
        type_str(&mut field, "123");
        assert_eq!(field.text(), "(123");
        type_str(&mut field, "4567890");
        assert_eq!(field.text(), "(123) 456-7890");
        assert_eq!(field.cursor(), 14);
        assert_eq!(field.raw_text(), "1234567890");
    }

    #[test]
    fn formatter_pad_blank_variant() {
        let phone = Formatter::new(MaskPattern::Phone).with_fill(MaskFill::PadBlank);
        let mut field = TextField::new().with_formatter(phone);
        type_str(&mut field, "12");
        assert_eq!(field.text(), "(12 )    -    ");
    }

    #[test]
    fn with_formatter_reformats_existing_text() {
        let field = TextField::new()
            .with_text("1234567890")
            .with_formatter(Formatter::new(MaskPattern::Phone));
        assert_eq!(field.text(), "(123) 456-7890");
    }

    #[test]
    fn backspace_through_a_mask_drops_one_digit() {
        let mut field = TextField::new().with_formatter(Formatter::new(MaskPattern::DateOfBirth));
        type_str(&mut field, "0102");
        assert_eq!(field.text(), "01/02");
        // Cursor sits at the end; backspace removes the trailing digit and
        // the value reformats.
        field.handle_event(&press(KeyCode::Backspace));
        assert_eq!(field.text(), "01/0");
    }

    #[test]
    fn set_text_does_not_validate() {
        let mut field = TextField::new().with_rule(Rule::NotEmpty);
        field.set_text("");
        assert_eq!(field.state(), EditingState::Untouched);
    }

    #[test]
    fn restore_validates_non_empty_values() {
        let mut field = TextField::new().with_rule(Rule::Email);
        field.restore("a@b.co");
        assert_eq!(field.state(), EditingState::Valid);

        let mut field = TextField::new().with_rule(Rule::Email);
        field.restore("nope");
        assert_eq!(field.state(), EditingState::Error);
    }

    #[test]
    fn restore_of_empty_value_stays_untouched() {
        let mut field = TextField::new().with_rule(Rule::NotEmpty);
        field.restore("");
        assert_eq!(field.state(), EditingState::Untouched);
    }

    #[test]
    fn clear_resets_text_but_not_state() {
        let mut field = TextField::new().with_rule(Rule::NotEmpty);
        field.restore("hello");
        assert_eq!(field.state(), EditingState::Valid);
        field.clear();
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.state(), EditingState::Valid);
    }

    #[test]
    fn reset_touched_records_prior_interaction() {
        let mut field = TextField::new();
        field.handle_event(&Event::Focus(true));
        field.reset_touched();
        assert_eq!(field.state(), EditingState::Touched);
        assert!(field.state().is_visited());
    }

    #[test]
    fn text_value_handle_observes_changes() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut field = TextField::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.text_value().subscribe(move |v: &String| {
            sink.borrow_mut().push(v.clone());
        });

        type_str(&mut field, "ab");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn editing_state_handle_observes_transitions() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut field = TextField::new().with_rule(Rule::NotEmpty);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.editing_state().subscribe(move |s: &EditingState| {
            sink.borrow_mut().push(*s);
        });

        field.handle_event(&Event::Focus(true));
        field.handle_event(&Event::Focus(false));
        assert_eq!(
            *seen.borrow(),
            vec![EditingState::Active, EditingState::Error]
        );
    }

    #[test]
    fn styled_flag_gates_the_color() {
        let mut field = TextField::new().with_rule(Rule::NotEmpty);
        field.restore("x");
        assert_eq!(
            field.current_color(),
            Some(FieldTheme::default().color_for(EditingState::Valid))
        );

        let field = TextField::new().with_styled(false);
        assert_eq!(field.current_color(), None);
    }
}

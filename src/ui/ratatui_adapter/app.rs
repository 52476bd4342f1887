//! Terminal host for the picker
//!
//! `PickerApp` draws a one-field form whose voice field is the picker
//! trigger. The form owns the selected value, and optionally the open flag
//! (controlled mode), exactly like a host page would.

use super::events::{FormAction, HitAreas, map_key, map_mouse, poll_event};
use super::theme::Theme;
use super::widgets::{
    DialogLayout, FORM_HINTS, HelpBar, PICKER_HINTS, PickerDialog, Trigger,
};
use crate::catalog::Item;
use crate::picker::{EventOutcome, Picker, PickerBuilder};
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use std::cell::{Cell, RefCell};
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;

/// Who owns the picker's open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenOwnership {
    /// The picker manages it (uncontrolled)
    #[default]
    Picker,
    /// The form manages it and syncs it into the picker (controlled)
    Form,
}

/// Outcome of a form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    /// Value when the form closed (the initial value if aborted)
    pub value: Option<String>,
    /// Whether the user cancelled
    pub aborted: bool,
}

/// Form state plus the picker it hosts
pub struct FormSession {
    picker: Picker,
    value: Rc<RefCell<Option<String>>>,
    pending_open: Rc<Cell<Option<bool>>>,
    initial: Option<String>,
    exit_on_commit: bool,
}

impl FormSession {
    /// Wire a picker into a new form
    ///
    /// The form installs its own value callback and, for
    /// `OpenOwnership::Form`, the controlled open pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder already carries half of a controlled
    /// pair that the form cannot complete.
    pub fn new(
        builder: PickerBuilder,
        initial: Option<String>,
        ownership: OpenOwnership,
        exit_on_commit: bool,
    ) -> Result<Self> {
        let value = Rc::new(RefCell::new(initial.clone()));
        let pending_open = Rc::new(Cell::new(None));

        let sink = Rc::clone(&value);
        let mut builder =
            builder.on_value_change(move |id| *sink.borrow_mut() = Some(id.to_string()));
        if ownership == OpenOwnership::Form {
            let requests = Rc::clone(&pending_open);
            builder = builder
                .open(false)
                .on_open_change(move |open| requests.set(Some(open)));
        }

        Ok(Self {
            picker: builder.build()?,
            value,
            pending_open,
            initial,
            exit_on_commit,
        })
    }

    /// Current form value
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// The hosted picker
    #[must_use]
    pub const fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Apply one action; returns the final result when the form closes
    ///
    /// # Errors
    ///
    /// Returns `UiError::InterruptedError` on Ctrl-C, or an error if the
    /// controlled open flag cannot be synced.
    pub fn apply(&mut self, action: FormAction, items: &[Item]) -> Result<Option<FormResult>> {
        match action {
            FormAction::Picker(event) => {
                let outcome = self.picker.handle(event, items);
                if let Some(open) = self.pending_open.take() {
                    log::debug!("Form syncing picker open={open}");
                    self.picker.sync_open(open)?;
                }
                if matches!(outcome, EventOutcome::Committed(_)) && self.exit_on_commit {
                    return Ok(Some(self.finish(false)));
                }
                Ok(None)
            }
            FormAction::Submit => Ok(Some(self.finish(false))),
            FormAction::Abort => Ok(Some(self.finish(true))),
            FormAction::Interrupt => Err(UiError::InterruptedError),
            FormAction::Ignored => Ok(None),
        }
    }

    /// Translate a terminal event against the regions drawn last frame
    #[must_use]
    pub fn map_event(&self, event: Event, areas: &HitAreas, items: &[Item]) -> FormAction {
        let open = self.picker.is_open();
        match event {
            Event::Key(key) => map_key(key, open),
            Event::Mouse(mouse) => {
                map_mouse(mouse, areas, open, self.picker.scroll_offset(items))
            }
            _ => FormAction::Ignored,
        }
    }

    fn finish(&self, aborted: bool) -> FormResult {
        let value = if aborted {
            self.initial.clone()
        } else {
            self.value()
        };
        log::info!("Form closed (aborted={aborted}, value={value:?})");
        FormResult { value, aborted }
    }

    /// Draw the form and, if open, the picker dialog
    pub fn draw(&mut self, frame: &mut Frame, items: &[Item], theme: &Theme) -> HitAreas {
        let area = frame.area();
        let dialog = DialogLayout::compute(area);
        self.picker.set_visible_height(usize::from(dialog.list.height));

        let value = self.value();
        let view = self.picker.view(items, value.as_deref());
        let selected = Picker::selected(items, value.as_deref());

        let [title, _, trigger_row, details, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let trigger = Rect {
            width: trigger_row.width.min(48),
            ..trigger_row
        };

        frame.render_widget(
            Paragraph::new(Line::styled("Agent voice", theme.cursor_style())),
            title,
        );
        frame.render_widget(
            Trigger::new(view.trigger_label, selected.is_none(), theme)
                .open(view.open)
                .focused(!view.open),
            trigger,
        );
        if let Some(item) = selected {
            frame.render_widget(
                Paragraph::new(Self::details(item, theme)).wrap(Wrap { trim: true }),
                details,
            );
        }

        let hints = if view.open { PICKER_HINTS } else { FORM_HINTS };
        frame.render_widget(HelpBar::new(hints, theme), help);

        if view.open {
            frame.render_widget(PickerDialog::new(&view, items.len(), value.as_deref(), theme), area);
        }

        HitAreas { trigger, dialog }
    }

    fn details<'a>(item: &'a Item, theme: &Theme) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let tags = item.tag_summary();
        if !tags.is_empty() {
            lines.push(Line::styled(tags, theme.tag_style()));
        }
        if let Some(description) = item.description.as_deref() {
            lines.push(Line::styled(description, theme.dimmed_style()));
        }
        if let Some(preview) = item.preview_ref.as_deref() {
            lines.push(Line::from(vec![
                Span::styled("▶ ", theme.preview_style()),
                Span::styled(preview, theme.dimmed_style()),
            ]));
        }
        lines
    }
}

/// Ratatui host application
#[derive(Debug, Clone)]
pub struct PickerApp {
    theme: Theme,
    ownership: OpenOwnership,
    exit_on_commit: bool,
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerApp {
    /// Create a new app that returns as soon as a voice is committed
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            ownership: OpenOwnership::default(),
            exit_on_commit: true,
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Choose who owns the open flag
    #[must_use]
    pub const fn with_ownership(mut self, ownership: OpenOwnership) -> Self {
        self.ownership = ownership;
        self
    }

    /// Keep the form open after a commit (leave with `s` or Esc)
    #[must_use]
    pub const fn exit_on_commit(mut self, exit: bool) -> Self {
        self.exit_on_commit = exit;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the form until the user submits, aborts, or commits a voice
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be driven or the picker
    /// contract is violated.
    pub fn run(
        &self,
        items: &[Item],
        builder: PickerBuilder,
        initial: Option<String>,
    ) -> Result<FormResult> {
        let mut session =
            FormSession::new(builder, initial, self.ownership, self.exit_on_commit)?;

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, &mut session, items);

        if let Err(e) = Self::cleanup_terminal() {
            log::warn!("Terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut FormSession,
        items: &[Item],
    ) -> Result<FormResult> {
        let mut areas = HitAreas::default();

        loop {
            terminal.draw(|frame| areas = session.draw(frame, items, &self.theme))?;

            let Some(event) = poll_event(Duration::from_millis(100))? else {
                continue;
            };

            let action = session.map_event(event, &areas, items);
            if let Some(result) = session.apply(action, items)? {
                return Ok(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::PickerEvent;
    use crate::testing::{buffer_text, rachel_and_adam, sample_voices};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    fn session(ownership: OpenOwnership, exit_on_commit: bool) -> FormSession {
        FormSession::new(Picker::builder(), None, ownership, exit_on_commit).unwrap()
    }

    fn render(session: &mut FormSession, items: &[Item]) -> String {
        render_sized(session, items, 100, 30).0
    }

    fn render_sized(
        session: &mut FormSession,
        items: &[Item],
        width: u16,
        height: u16,
    ) -> (String, HitAreas) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut areas = HitAreas::default();
        terminal
            .draw(|frame| {
                areas = session.draw(frame, items, &Theme::default());
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), areas)
    }

    fn press(session: &mut FormSession, items: &[Item], event: PickerEvent) -> Option<FormResult> {
        session.apply(FormAction::Picker(event), items).unwrap()
    }

    #[test]
    fn test_form_shows_placeholder_then_selection() {
        let items = sample_voices();
        let mut session = session(OpenOwnership::Picker, false);

        assert!(render(&mut session, &items).contains("Select a voice..."));

        press(&mut session, &items, PickerEvent::ActivateTrigger);
        press(&mut session, &items, PickerEvent::Input('r'));
        press(&mut session, &items, PickerEvent::Input('a'));
        assert!(press(&mut session, &items, PickerEvent::Commit).is_none());

        assert_eq!(session.value().as_deref(), Some("v1"));
        let text = render(&mut session, &items);
        assert!(text.contains("Rachel ▾"));
        assert!(text.contains("previews/rachel.mp3"));
    }

    #[test]
    fn test_exit_on_commit_returns_value() {
        let items = rachel_and_adam();
        let mut session = session(OpenOwnership::Picker, true);
        press(&mut session, &items, PickerEvent::ActivateTrigger);
        press(&mut session, &items, PickerEvent::Down);

        let result = press(&mut session, &items, PickerEvent::Commit).unwrap();
        assert_eq!(
            result,
            FormResult {
                value: Some("v2".to_string()),
                aborted: false
            }
        );
    }

    #[test]
    fn test_abort_restores_initial_value() {
        let items = rachel_and_adam();
        let mut session = FormSession::new(
            Picker::builder(),
            Some("v2".to_string()),
            OpenOwnership::Picker,
            false,
        )
        .unwrap();
        press(&mut session, &items, PickerEvent::ActivateTrigger);
        press(&mut session, &items, PickerEvent::Commit);
        assert_eq!(session.value().as_deref(), Some("v1"));

        let result = session.apply(FormAction::Abort, &items).unwrap().unwrap();
        assert!(result.aborted);
        assert_eq!(result.value.as_deref(), Some("v2"));
    }

    #[test]
    fn test_form_owned_open_state_round_trip() {
        let items = rachel_and_adam();
        let mut session = session(OpenOwnership::Form, false);
        assert!(session.picker().is_controlled());

        press(&mut session, &items, PickerEvent::ActivateTrigger);
        assert!(session.picker().is_open());
        assert!(render(&mut session, &items).contains("2 of 2 voices"));

        press(&mut session, &items, PickerEvent::Commit);
        assert!(!session.picker().is_open());
        assert_eq!(session.value().as_deref(), Some("v1"));
        assert!(!render(&mut session, &items).contains("voices"));
    }

    #[test]
    fn test_open_dialog_with_empty_catalog() {
        let mut session = session(OpenOwnership::Picker, false);
        press(&mut session, &[], PickerEvent::ActivateTrigger);
        assert!(render(&mut session, &[]).contains("No voices found."));
    }

    #[test]
    fn test_submit_keeps_value() {
        let items = rachel_and_adam();
        let mut session = session(OpenOwnership::Picker, false);
        let result = session.apply(FormAction::Submit, &items).unwrap().unwrap();
        assert!(!result.aborted);
        assert!(result.value.is_none());
        assert!(session.apply(FormAction::Ignored, &items).unwrap().is_none());
    }

    #[test]
    fn test_click_after_catalog_shrinks_hits_drawn_row() {
        let items = sample_voices();
        let mut session = session(OpenOwnership::Picker, false);
        press(&mut session, &items, PickerEvent::ActivateTrigger);
        // Two list rows fit in a 10-row terminal
        render_sized(&mut session, &items, 100, 10);
        press(&mut session, &items, PickerEvent::End);

        let replaced = rachel_and_adam();
        let (text, areas) = render_sized(&mut session, &replaced, 100, 10);
        assert_eq!(areas.dialog.list.height, 2);
        assert!(text.contains(">   Adam"));

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: areas.dialog.list.x + 2,
            row: areas.dialog.list.y,
            modifiers: KeyModifiers::NONE,
        });
        let action = session.map_event(click, &areas, &replaced);
        assert_eq!(action, FormAction::Picker(PickerEvent::Click(1)));
        session.apply(action, &replaced).unwrap();
        assert_eq!(session.value().as_deref(), Some("v2"));
    }

    #[test]
    fn test_interrupt_is_an_error() {
        let items = rachel_and_adam();
        let mut session = session(OpenOwnership::Picker, false);
        assert!(matches!(
            session.apply(FormAction::Interrupt, &items),
            Err(UiError::InterruptedError)
        ));
    }
}

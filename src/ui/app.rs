//! Application event loop
//!
//! Wires one augmented control to the prompt dialog and the create endpoint.
//! The POST runs on a spawned task and reports back over an mpsc channel, so
//! the UI task keeps drawing while the request is in flight.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use crate::flow::{CreateFlow, FlowEffect, FlowState};
use crate::remote::CreateClient;
use crate::select::SelectControl;
use crate::ui::components::{PromptDialog, PromptDialogState, PromptOutcome, SelectView};
use crate::ui::events::AppEvent;

/// Main application state
pub struct App {
    title: String,
    control: SelectControl,
    flow: CreateFlow,
    prompt: PromptDialogState,
    client: Arc<dyn CreateClient>,
    /// Last create failure, shown until the next selection change
    error: Option<String>,
    should_quit: bool,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Build an app around an already-augmented control and its flow
    pub fn new(
        title: impl Into<String>,
        control: SelectControl,
        flow: CreateFlow,
        client: Arc<dyn CreateClient>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            title: title.into(),
            control,
            flow,
            prompt: PromptDialogState::new(),
            client,
            error: None,
            should_quit: false,
            event_tx,
            event_rx,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key);
                            }
                        }
                    }
                }
                Some(app_event) = self.event_rx.recv() => {
                    self.handle_app_event(app_event);
                }
            }

            if self.should_quit {
                info!("quitting");
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The open prompt captures all input
        if self.prompt.is_visible() {
            if let PromptOutcome::Closed(input) = self.prompt.handle_key(key) {
                let effect = self.flow.prompt_closed(&mut self.control, input);
                self.perform(effect);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.change_selection(|c| c.select_previous()),
            KeyCode::Down => self.change_selection(|c| c.select_next()),
            _ => {}
        }
    }

    fn change_selection(&mut self, movement: impl FnOnce(&mut SelectControl)) {
        // Selection is frozen while a create request is in flight
        if self.flow.state() == FlowState::AwaitingServer {
            return;
        }
        movement(&mut self.control);
        self.error = None;
        let effect = self.flow.selection_changed(&self.control);
        self.perform(effect);
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CreateCompleted(result) => {
                let effect = self.flow.completed(&mut self.control, result);
                self.perform(effect);
            }
        }
    }

    /// Perform an effect returned by the flow
    fn perform(&mut self, effect: Option<FlowEffect>) {
        match effect {
            Some(FlowEffect::ShowPrompt { message }) => self.prompt.open(message),
            Some(FlowEffect::SubmitCreate {
                endpoint,
                field_name,
                value,
            }) => {
                let client = Arc::clone(&self.client);
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let result = client.create(&endpoint, &field_name, &value).await;
                    // Receiver only drops on shutdown
                    let _ = tx.send(AppEvent::CreateCompleted(result));
                });
            }
            Some(FlowEffect::SurfaceError { message }) => self.error = Some(message),
            None => {}
        }
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(3),    // select control
            Constraint::Length(1), // status line
        ])
        .split(f.area());

        SelectView::new(&self.title).render(chunks[0], f.buffer_mut(), &self.control);

        let status = if self.flow.state() == FlowState::AwaitingServer {
            Line::from(Span::styled(
                " creating…",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(error) = &self.error {
            Line::from(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                " ↑↓ select  q quit",
                Style::default().fg(Color::DarkGray),
            ))
        };
        Paragraph::new(status).render(chunks[1], f.buffer_mut());

        PromptDialog::render(f.area(), f.buffer_mut(), &self.prompt);
    }
}

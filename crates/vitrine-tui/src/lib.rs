// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};
use vitrine_app::{
    AppCommand, AppEvent, AppState, NavigationEvent, Page, PageRequest, Record, RecordId,
    parse_top_n,
};

const HALF_PAGE_ROWS: isize = 5;
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const TOP_N_INPUT_MAX: usize = 6;
const EMPTY_LISTING: &str = "No results.";
const EMPTY_BASKET: &str = "No artworks selected.";

/// The side of the app that talks to the catalog. Fetching never fails from
/// the UI's point of view: implementations hand back an empty page instead.
pub trait CatalogRuntime {
    fn fetch_page(&mut self, request: PageRequest) -> Page;
    fn spawn_fetch(
        &mut self,
        generation: u64,
        request: PageRequest,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let page = self.fetch_page(request);
        tx.send(InternalEvent::PageLoaded { generation, page })
            .map_err(|_| anyhow::anyhow!("page event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    PageLoaded { generation: u64, page: Page },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Listing,
    Basket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListingCommand {
    MoveRow(isize),
    JumpFirstRow,
    JumpLastRow,
    ToggleRow,
    TogglePage,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    LargerPageSize,
    SmallerPageSize,
    Reload,
    OpenTopN,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasketCommand {
    MoveRow(isize),
    Remove,
    Clear,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct TopNPrompt {
    visible: bool,
    input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    focus: Focus,
    cursor: usize,
    basket_cursor: usize,
    top_n: TopNPrompt,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: CatalogRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let result = event_loop(&mut terminal, state, runtime, next_terminal_event);
    let restored = restore_terminal();
    result.and(restored)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    Ok(())
}

fn next_terminal_event() -> Result<Option<Event>> {
    if !event::poll(Duration::from_millis(120)).context("poll event")? {
        return Ok(None);
    }
    event::read().map(Some).context("read event")
}

/// Runs until quit. Any error is returned rather than raised mid-loop so the
/// caller can put the terminal back first.
fn event_loop<B, R, F>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    runtime: &mut R,
    mut next_event: F,
) -> Result<()>
where
    B: Backend,
    R: CatalogRuntime,
    F: FnMut() -> Result<Option<Event>>,
{
    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    dispatch_and_fetch(
        state,
        runtime,
        &mut view_data,
        &internal_tx,
        AppCommand::Reload,
    );

    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        terminal
            .draw(|frame| render(frame, state, &view_data))
            .context("draw frame")?;

        let Some(event) = next_event()? else {
            continue;
        };
        if let Event::Key(key) = event
            && handle_key_event(state, runtime, &mut view_data, &internal_tx, key)
        {
            return Ok(());
        }
    }
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::PageLoaded { generation, page } => {
                let events = state.dispatch(AppCommand::ApplyPage { generation, page });
                for event in &events {
                    if let AppEvent::PageLoaded { rows, total, .. } = event {
                        info!(generation, rows, total, "page loaded");
                    }
                }
                clamp_cursors(state, view_data);
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return true;
    }

    if view_data.top_n.visible {
        handle_top_n_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            view_data.help_visible = true;
            return false;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            view_data.focus = match view_data.focus {
                Focus::Listing => Focus::Basket,
                Focus::Basket => Focus::Listing,
            };
            clamp_cursors(state, view_data);
            return false;
        }
        _ => {}
    }

    match view_data.focus {
        Focus::Listing => {
            if let Some(command) = listing_command_for_key(key) {
                apply_listing_command(state, runtime, view_data, internal_tx, command);
            }
        }
        Focus::Basket => {
            if let Some(command) = basket_command_for_key(key) {
                apply_basket_command(state, runtime, view_data, internal_tx, command);
            }
        }
    }
    false
}

fn listing_command_for_key(key: KeyEvent) -> Option<ListingCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Some(ListingCommand::MoveRow(1)),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Some(ListingCommand::MoveRow(-1)),
        (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ListingCommand::MoveRow(HALF_PAGE_ROWS))
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ListingCommand::MoveRow(-HALF_PAGE_ROWS))
        }
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => Some(ListingCommand::JumpFirstRow),
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Some(ListingCommand::JumpLastRow),
        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Some(ListingCommand::ToggleRow),
        (KeyCode::Char('a'), KeyModifiers::NONE) => Some(ListingCommand::TogglePage),
        (KeyCode::Char('l'), _) | (KeyCode::Char('n'), _) | (KeyCode::Right, _) => {
            Some(ListingCommand::NextPage)
        }
        (KeyCode::Char('h'), _) | (KeyCode::Char('p'), _) | (KeyCode::Left, _) => {
            Some(ListingCommand::PrevPage)
        }
        (KeyCode::PageDown, _) => Some(ListingCommand::NextPage),
        (KeyCode::PageUp, _) => Some(ListingCommand::PrevPage),
        (KeyCode::Char('H'), _) => Some(ListingCommand::FirstPage),
        (KeyCode::Char('L'), _) => Some(ListingCommand::LastPage),
        (KeyCode::Char('+'), _) => Some(ListingCommand::LargerPageSize),
        (KeyCode::Char('-'), _) => Some(ListingCommand::SmallerPageSize),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(ListingCommand::Reload),
        (KeyCode::Char('#'), _) => Some(ListingCommand::OpenTopN),
        _ => None,
    }
}

fn apply_listing_command<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: ListingCommand,
) {
    match command {
        ListingCommand::MoveRow(delta) => move_cursor(view_data, state.page.records.len(), delta),
        ListingCommand::JumpFirstRow => view_data.cursor = 0,
        ListingCommand::JumpLastRow => {
            view_data.cursor = state.page.records.len().saturating_sub(1);
        }
        ListingCommand::ToggleRow => {
            let Some(record) = state.page.records.get(view_data.cursor) else {
                return;
            };
            let selected = toggled_page_selection(state, record.id);
            report_page_selection(state, runtime, view_data, internal_tx, selected);
        }
        ListingCommand::TogglePage => {
            if state.page.records.is_empty() {
                return;
            }
            let all_selected = state
                .page
                .records
                .iter()
                .all(|record| state.selection.contains(record.id));
            let selected = if all_selected {
                Vec::new()
            } else {
                state.page.records.clone()
            };
            report_page_selection(state, runtime, view_data, internal_tx, selected);
        }
        ListingCommand::FirstPage => {
            let target = state.pagination.first_page();
            navigate_or_report(state, runtime, view_data, internal_tx, target, "first page");
        }
        ListingCommand::PrevPage => {
            let target = state.pagination.prev_page();
            navigate_or_report(state, runtime, view_data, internal_tx, target, "first page");
        }
        ListingCommand::NextPage => {
            let target = state.pagination.next_page(state.page.total);
            navigate_or_report(state, runtime, view_data, internal_tx, target, "last page");
        }
        ListingCommand::LastPage => {
            let target = state.pagination.last_page(state.page.total);
            navigate_or_report(state, runtime, view_data, internal_tx, target, "last page");
        }
        ListingCommand::LargerPageSize => {
            let size = state.pagination.larger_page_size();
            let target = state.pagination.with_page_size(size);
            navigate_or_report(state, runtime, view_data, internal_tx, target, "page size");
        }
        ListingCommand::SmallerPageSize => {
            let size = state.pagination.smaller_page_size();
            let target = state.pagination.with_page_size(size);
            navigate_or_report(state, runtime, view_data, internal_tx, target, "page size");
        }
        ListingCommand::Reload => {
            dispatch_and_fetch(state, runtime, view_data, internal_tx, AppCommand::Reload);
        }
        ListingCommand::OpenTopN => {
            view_data.top_n.visible = true;
        }
    }
}

/// What the table would report after flipping one row: the current visible
/// selection with `id` added or taken out, in page order.
fn toggled_page_selection(state: &AppState, id: RecordId) -> Vec<Record> {
    let was_selected = state.selection.contains(id);
    state
        .page
        .records
        .iter()
        .filter(|record| {
            if record.id == id {
                !was_selected
            } else {
                state.selection.contains(record.id)
            }
        })
        .cloned()
        .collect()
}

/// Hands a page-local selection report to the reconciler together with the
/// ids of the page that produced it.
fn report_page_selection<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    selected: Vec<Record>,
) {
    let page_ids = state.page.ids();
    dispatch_and_fetch(
        state,
        runtime,
        view_data,
        internal_tx,
        AppCommand::PageSelectionChanged { page_ids, selected },
    );
}

fn navigate_or_report<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    target: Option<NavigationEvent>,
    boundary: &str,
) {
    match target {
        Some(event) => {
            view_data.cursor = 0;
            dispatch_and_fetch(
                state,
                runtime,
                view_data,
                internal_tx,
                AppCommand::Navigate(event),
            );
        }
        None => emit_status(
            state,
            view_data,
            internal_tx,
            format!("already at {boundary}"),
        ),
    }
}

fn handle_top_n_key<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.top_n.visible = false;
        }
        KeyCode::Backspace => {
            view_data.top_n.input.pop();
        }
        KeyCode::Enter => {
            let Some(n) = parse_top_n(&view_data.top_n.input) else {
                return;
            };
            view_data.top_n = TopNPrompt::default();
            dispatch_and_fetch(
                state,
                runtime,
                view_data,
                internal_tx,
                AppCommand::SelectTop(n),
            );
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => {
            if view_data.top_n.input.len() < TOP_N_INPUT_MAX {
                view_data.top_n.input.push(ch);
            }
        }
        _ => {}
    }
}

fn basket_command_for_key(key: KeyEvent) -> Option<BasketCommand> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(BasketCommand::MoveRow(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(BasketCommand::MoveRow(-1)),
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => Some(BasketCommand::Remove),
        KeyCode::Char('X') => Some(BasketCommand::Clear),
        KeyCode::Esc => Some(BasketCommand::Leave),
        _ => None,
    }
}

fn apply_basket_command<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: BasketCommand,
) {
    match command {
        BasketCommand::MoveRow(delta) => {
            let len = state.selection.len();
            let next = (view_data.basket_cursor as isize + delta)
                .clamp(0, len.saturating_sub(1) as isize);
            view_data.basket_cursor = next as usize;
        }
        BasketCommand::Remove => {
            let Some(id) = state
                .selection
                .iter()
                .nth(view_data.basket_cursor)
                .map(|record| record.id)
            else {
                return;
            };
            dispatch_and_fetch(
                state,
                runtime,
                view_data,
                internal_tx,
                AppCommand::RemoveSelected(id),
            );
        }
        BasketCommand::Clear => {
            dispatch_and_fetch(
                state,
                runtime,
                view_data,
                internal_tx,
                AppCommand::ClearSelection,
            );
        }
        BasketCommand::Leave => view_data.focus = Focus::Listing,
    }
}

fn dispatch_and_fetch<R: CatalogRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    for event in &events {
        match event {
            AppEvent::FetchRequested {
                generation,
                request,
            } => {
                if let Err(error) =
                    runtime.spawn_fetch(*generation, *request, internal_tx.clone())
                {
                    warn!(generation, %error, "could not start fetch");
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("fetch failed to start: {error}"),
                    );
                }
            }
            AppEvent::SelectionChanged(delta) if !delta.is_empty() => {
                debug!(
                    added = delta.added,
                    removed = delta.removed,
                    basket = state.selection.len(),
                    "selection changed"
                );
            }
            _ => {}
        }
    }
    clamp_cursors(state, view_data);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
}

fn move_cursor(view_data: &mut ViewData, rows: usize, delta: isize) {
    if rows == 0 {
        view_data.cursor = 0;
        return;
    }
    let next = (view_data.cursor as isize + delta).clamp(0, rows as isize - 1);
    view_data.cursor = next as usize;
}

fn clamp_cursors(state: &AppState, view_data: &mut ViewData) {
    view_data.cursor = view_data
        .cursor
        .min(state.page.records.len().saturating_sub(1));
    view_data.basket_cursor = view_data
        .basket_cursor
        .min(state.selection.len().saturating_sub(1));
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Percentage(30),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_listing(frame, layout[0], state, view_data);
    render_basket(frame, layout[1], state, view_data);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if view_data.top_n.visible {
        let area = centered_rect(36, 24, frame.area());
        frame.render_widget(Clear, area);
        let prompt = Paragraph::new(render_top_n_overlay_text(&view_data.top_n))
            .block(Block::default().title("select rows").borders(Borders::ALL));
        frame.render_widget(prompt, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn focus_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_listing(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let focused = view_data.focus == Focus::Listing;
    let block = Block::default()
        .title(listing_title(state))
        .borders(Borders::ALL)
        .border_style(focus_border_style(focused));

    if state.page.records.is_empty() {
        let text = if state.loading { "" } else { EMPTY_LISTING };
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let header = Row::new(
        ["", "title", "artist", "origin", "inscriptions", "date_start", "date_end"]
            .into_iter()
            .map(|label| {
                Cell::from(label).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            }),
    );

    let row_style = if state.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let rows = listing_rows(state)
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from)).style(row_style));

    let widths = [
        Constraint::Length(3),
        Constraint::Min(24),
        Constraint::Min(20),
        Constraint::Min(12),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(cursor_style(focused))
        .block(block);

    // Selecting the cursor row makes the table scroll it into view.
    let mut table_state = TableState::default().with_selected(Some(view_data.cursor));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_basket(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let focused = view_data.focus == Focus::Basket;
    let block = Block::default()
        .title(basket_title(state))
        .borders(Borders::ALL)
        .border_style(focus_border_style(focused));

    if state.selection.is_empty() {
        frame.render_widget(Paragraph::new(EMPTY_BASKET).block(block), area);
        return;
    }

    let rows = basket_rows(state).into_iter().map(|(title, artist)| {
        Row::new([
            Cell::from(title),
            Cell::from(artist).style(Style::default().fg(Color::Gray)),
        ])
    });
    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .column_spacing(2)
        .row_highlight_style(cursor_style(focused))
        .block(block);

    let mut table_state = TableState::default().with_selected(Some(view_data.basket_cursor));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn listing_title(state: &AppState) -> String {
    let pagination = &state.pagination;
    let mut title = format!(
        "artworks | {} | page {}/{} | {} per page",
        pagination.report(state.page.total, state.page.records.len()),
        pagination.page_index.saturating_add(1),
        pagination.page_count(state.page.total).max(1),
        pagination.page_size,
    );
    if state.loading {
        title.push_str(" | loading…");
    }
    title
}

fn basket_title(state: &AppState) -> String {
    format!("selected artworks ({})", state.selection.len())
}

/// Cell text per row, with the checkbox driven by the visible selection.
fn listing_rows(state: &AppState) -> Vec<[String; 7]> {
    let visible = state
        .visible_selection()
        .into_iter()
        .map(|record| record.id)
        .collect::<Vec<_>>();
    state
        .page
        .records
        .iter()
        .map(|record| {
            let mark = if visible.contains(&record.id) {
                CHECKED
            } else {
                UNCHECKED
            };
            [
                mark.to_owned(),
                record.title_label(),
                record.artist_label(),
                record.origin_label(),
                record.inscriptions_label(),
                record.date_start_label(),
                record.date_end_label(),
            ]
        })
        .collect()
}

fn basket_rows(state: &AppState) -> Vec<(String, String)> {
    state
        .selection
        .iter()
        .map(|record| (record.title_label(), record.artist_label()))
        .collect()
}

fn render_top_n_overlay_text(prompt: &TopNPrompt) -> String {
    let input = if prompt.input.is_empty() {
        "e.g., 5".to_owned()
    } else {
        prompt.input.clone()
    };
    format!("Select top rows\n\n> {input}\n\nenter submit | esc cancel")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible || view_data.top_n.visible {
        return String::new();
    }

    let focus = match view_data.focus {
        Focus::Listing => "LIST",
        Focus::Basket => "BASKET",
    };
    let default = match view_data.focus {
        Focus::Listing => "j/k move | space/a select | h/l H/L page | +/- size | # top-n | tab basket | ? help | q",
        Focus::Basket => "j/k move | x remove | X clear | tab/esc list | ? help | q",
    };
    match &state.status_line {
        Some(status) => format!("{focus} | {status} | {default}"),
        None => format!("{focus} | {default}"),
    }
}

fn help_overlay_text() -> &'static str {
    "listing\n  j/k, up/down    move cursor\n  g/G             first/last row\n  space, enter    toggle row\n  a               toggle whole page\n  #               select top N rows of this page\n  h/l, left/right previous/next page\n  H/L             first/last page\n  +/-             rows per page\n  r               reload page\n\nbasket\n  tab             switch focus\n  j/k             move cursor\n  x, delete       remove entry\n  X               clear basket\n\n?/esc close help | q quit"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

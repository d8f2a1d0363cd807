// ABOUTME: Ratatui wizard view for the interactive terminal front end
// Collects styled lines through the WizardView trait, then draws them into a frame

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{render_wizard, Callout, CalloutKind, FieldView, WizardView};
use crate::app::AppState;
use crate::wizard::WizardStep;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// Buffers one frame's worth of wizard output
#[derive(Debug, Default)]
pub struct TuiView {
    step: Option<(WizardStep, usize, usize)>,
    fields: Vec<ListItem<'static>>,
    /// Row of the focused field, kept in view when the list scrolls
    focused: Option<usize>,
    callouts: Vec<Line<'static>>,
}

impl TuiView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw everything collected so far into `area`
    pub fn draw(self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let callout_height = u16::try_from(self.callouts.len()).unwrap_or(u16::MAX).saturating_add(2);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),              // Header with progress
                Constraint::Min(5),                 // Step fields
                Constraint::Length(callout_height), // Callouts
                Constraint::Length(1),              // Key hints
            ])
            .split(area);

        self.draw_header(frame, layout[0]);

        let title = self
            .step
            .map(|(step, _, _)| format!(" {} ", step.description()))
            .unwrap_or_default();
        let list = List::new(self.fields).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .style(Style::default().bg(PANEL_BG))
                .title(title)
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        );
        let mut list_state = ListState::default().with_selected(self.focused);
        frame.render_stateful_widget(list, layout[1], &mut list_state);

        if !self.callouts.is_empty() {
            let callouts = Paragraph::new(self.callouts)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(SUBDUED_BORDER)),
                );
            frame.render_widget(callouts, layout[2]);
        }

        let hints = Paragraph::new(Span::styled(
            "↑/↓ move  Space toggle  →/Enter next  ← back  s submit  q quit",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[3]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let Some((_, current, _)) = self.step else {
            return;
        };

        let mut spans = Vec::new();
        for (idx, step) in WizardStep::all().iter().enumerate() {
            let (icon, style) = if idx < current {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == current {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
            if idx + 1 < WizardStep::total() {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Tenant Alerting Wizard",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(spans),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(header, area);
    }
}

/// Render the whole app state into the frame
pub fn draw_app(frame: &mut Frame, state: &AppState) {
    let mut view = TuiView::new();
    render_wizard(&state.wizard, &state.tenants, Some(state.focus), &mut view);

    if state.wizard.current_step() == WizardStep::TenantChoice {
        if let Some(error) = &state.tenant_error {
            view.render_callout(&Callout::new(
                CalloutKind::Danger,
                vec![format!("Failed to load tenants: {error}")],
            ));
        }
    }
    if let Some(notice) = &state.notice {
        view.render_callout(&Callout::new(CalloutKind::Info, vec![notice.clone()]));
    }

    view.draw(frame, frame.size());
}

impl WizardView for TuiView {
    fn render_step(&mut self, step: WizardStep, index: usize, total: usize) {
        self.step = Some((step, index, total));
    }

    fn render_field(&mut self, field: &FieldView, focused: bool) {
        let cursor = if focused {
            Span::styled("▶ ", Style::default().fg(GOLD))
        } else {
            Span::raw("  ")
        };
        let label_style = if focused {
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };

        let line = match field {
            FieldView::Tenant { tenant, selected } => Line::from(vec![
                cursor,
                check_box(*selected),
                Span::styled(tenant.display_name.clone(), label_style),
                Span::styled(
                    format!("  {}", tenant.default_domain_name),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
            FieldView::Switch { label, on, .. } => Line::from(vec![
                cursor,
                check_box(*on),
                Span::styled(*label, label_style),
            ]),
            FieldView::Review(item) => {
                let (icon, color) = if item.satisfied {
                    ("✓ ", SELECTION_GREEN)
                } else {
                    ("✗ ", MUTED_GRAY)
                };
                Line::from(vec![
                    cursor,
                    Span::styled(icon, Style::default().fg(color)),
                    Span::styled(item.label, label_style),
                ])
            }
        };
        if focused {
            self.focused = Some(self.fields.len());
        }
        self.fields.push(ListItem::new(line));
    }

    fn render_callout(&mut self, callout: &Callout) {
        let color = match callout.kind {
            CalloutKind::Danger => ERROR_RED,
            CalloutKind::Info => CORNFLOWER_BLUE,
            CalloutKind::Success => SELECTION_GREEN,
        };
        for line in &callout.lines {
            self.callouts.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::styled(line.clone(), Style::default().fg(color)),
            ]));
        }
    }
}

fn check_box(on: bool) -> Span<'static> {
    if on {
        Span::styled("[x] ", Style::default().fg(SELECTION_GREEN))
    } else {
        Span::styled("[ ] ", Style::default().fg(MUTED_GRAY))
    }
}

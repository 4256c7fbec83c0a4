// ABOUTME: Job-posting wizard component
// Renders the step-based wizard: header with progress, step panel, status line, key hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::catalog::{Package, PriceType, RequirementId, JOB_TYPES};
use super::state::{FieldFocus, MessageKind, PostJobState, TerminalView, WizardStep};

const FARM_GREEN: Color = Color::Rgb(16, 185, 129);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// The job-posting wizard component
#[derive(Debug)]
pub struct PostJobComponent {
    show_progress: bool,
}

impl Default for PostJobComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PostJobComponent {
    pub fn new() -> Self {
        Self { show_progress: true }
    }

    pub fn with_progress(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &PostJobState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress
                Constraint::Min(10),   // Step panel
                Constraint::Length(1), // Status message
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        Self::render_status(frame, layout[2], state);
        Self::render_navigation(frame, layout[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &PostJobState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(FARM_GREEN))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🌾 ", Style::default()),
            Span::styled(
                "Đăng tin tuyển thợ",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        if self.show_progress {
            Self::render_progress(frame, rows[1], state);
        }
    }

    /// Render step progress dots and the step counter
    fn render_progress(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let current_idx = state.current_step.number() - 1;
        let mut spans = Vec::new();

        for idx in 0..WizardStep::total() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(
            format!(
                " Bước {}/{}: {}",
                state.current_step.number(),
                WizardStep::total(),
                state.current_step.title()
            ),
            Style::default().fg(SOFT_WHITE),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn panel(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(FARM_GREEN))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &PostJobState) {
        let step = state.current_step;
        let block = Self::panel(step.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match step {
            WizardStep::JobType => Self::render_job_types(frame, inner, state),
            WizardStep::Title | WizardStep::Details | WizardStep::Location => {
                Self::render_fields(frame, inner, state);
            }
            WizardStep::Requirements => Self::render_requirements(frame, inner, state),
            WizardStep::Images => Self::render_images(frame, inner),
            WizardStep::Package => Self::render_packages(frame, inner, state),
            WizardStep::Review => Self::render_review(frame, inner, state),
        }
    }

    fn option_line(
        highlighted: bool,
        marker: &str,
        label: &str,
        detail: Option<&str>,
    ) -> ListItem<'static> {
        let pointer = if highlighted { "▶ " } else { "  " };
        let label_style = if highlighted {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };

        let mut spans = vec![
            Span::styled(pointer.to_string(), Style::default().fg(GOLD)),
            Span::styled(marker.to_string(), Style::default().fg(SELECTION_GREEN)),
            Span::styled(label.to_string(), label_style),
        ];
        if let Some(detail) = detail {
            spans.push(Span::styled(
                format!("  {detail}"),
                Style::default().fg(MUTED_GRAY),
            ));
        }
        ListItem::new(Line::from(spans))
    }

    fn render_job_types(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let items: Vec<ListItem> = JOB_TYPES
            .iter()
            .enumerate()
            .map(|(idx, job_type)| {
                let marker = if state.draft.job_type == *job_type { "● " } else { "○ " };
                Self::option_line(idx == state.cursor, marker, job_type, None)
            })
            .collect();

        frame.render_widget(List::new(items), area);
    }

    fn field_value(state: &PostJobState, field: FieldFocus) -> String {
        let draft = &state.draft;
        match field {
            FieldFocus::Title => draft.title.clone(),
            FieldFocus::Quantity => draft.quantity.clone(),
            FieldFocus::PriceType => {
                let (day, kg) = match draft.price_type {
                    PriceType::Day => ("(•)", "( )"),
                    PriceType::Kg => ("( )", "(•)"),
                };
                format!("{day} Theo ngày   {kg} Theo kg")
            }
            FieldFocus::Price => draft.price.clone(),
            FieldFocus::Description => draft.description.clone(),
            FieldFocus::Location => draft.location.clone(),
        }
    }

    fn field_placeholder(state: &PostJobState, field: FieldFocus) -> &'static str {
        match field {
            FieldFocus::Price => state.draft.price_type.placeholder(),
            FieldFocus::Description => "Mô tả công việc, yêu cầu cụ thể...",
            FieldFocus::Location => "Nhập địa chỉ vườn...",
            _ => "",
        }
    }

    fn render_fields(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let mut lines = Vec::new();
        let focused = state.focused_field();

        for field in state.current_step.fields() {
            let is_focused = focused == Some(*field);
            let label_style = if is_focused {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            lines.push(Line::from(Span::styled(field.label(), label_style)));

            let value = Self::field_value(state, *field);
            let value_span = if value.is_empty() {
                Span::styled(
                    Self::field_placeholder(state, *field),
                    Style::default().fg(SUBDUED_BORDER),
                )
            } else {
                Span::styled(value, Style::default().fg(SOFT_WHITE))
            };
            let cursor = if is_focused && *field != FieldFocus::PriceType {
                "▏"
            } else {
                ""
            };
            lines.push(Line::from(vec![
                Span::styled("  ", Style::default()),
                value_span,
                Span::styled(cursor, Style::default().fg(GOLD)),
            ]));
            lines.push(Line::from(""));
        }

        if state.current_step == WizardStep::Location {
            lines.push(Line::from(Span::styled(
                "Bản đồ chưa được hỗ trợ trên giao diện dòng lệnh",
                Style::default().fg(MUTED_GRAY),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_requirements(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(5)])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Chọn những thông tin thợ BẮT BUỘC phải cung cấp khi ứng tuyển:",
                Style::default().fg(MUTED_GRAY),
            )),
            layout[0],
        );

        let items: Vec<ListItem> = RequirementId::all()
            .iter()
            .enumerate()
            .map(|(idx, req)| {
                let marker = if state.is_requirement_selected(*req) { "[x] " } else { "[ ] " };
                let detail = req.is_mandatory().then_some("luôn bắt buộc");
                Self::option_line(idx == state.cursor, marker, req.label(), detail)
            })
            .collect();

        frame.render_widget(List::new(items), layout[1]);
    }

    fn render_images(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Tải ảnh chưa được hỗ trợ",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(
                "Tin sẽ được đăng không kèm hình ảnh",
                Style::default().fg(MUTED_GRAY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_packages(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let items: Vec<ListItem> = Package::all()
            .iter()
            .enumerate()
            .map(|(idx, package)| {
                let marker = if state.draft.package == *package { "● " } else { "○ " };
                Self::option_line(
                    idx == state.cursor,
                    marker,
                    package.name(),
                    Some(package.blurb()),
                )
            })
            .collect();

        frame.render_widget(List::new(items), area);
    }

    fn render_review(frame: &mut Frame, area: Rect, state: &PostJobState) {
        match state.terminal_view() {
            Some(TerminalView::ReadyToSubmit { busy }) => {
                Self::render_summary(frame, area, state, busy);
            }
            _ => Self::render_auth_prompt(frame, area),
        }
    }

    fn render_auth_prompt(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "🔒 Đăng nhập để đăng tin",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Bạn cần có tài khoản để quản lý tin đăng và ứng viên.",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Đăng nhập: ", Style::default().fg(SOFT_WHITE)),
                Span::styled("viecnong login", Style::default().fg(FARM_GREEN)),
            ]),
            Line::from(vec![
                Span::styled("Đăng ký ngay: ", Style::default().fg(SOFT_WHITE)),
                Span::styled("viecnong register", Style::default().fg(FARM_GREEN)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_summary(frame: &mut Frame, area: Rect, state: &PostJobState, busy: bool) {
        let draft = &state.draft;
        let requirements = state
            .selected_requirements()
            .iter()
            .map(RequirementId::label)
            .collect::<Vec<_>>()
            .join(", ");

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(MUTED_GRAY)),
                Span::styled(value, Style::default().fg(SOFT_WHITE)),
            ])
        };

        let button = if busy {
            Span::styled("[ Đang xử lý... ]", Style::default().fg(MUTED_GRAY))
        } else {
            Span::styled(
                "[ Xác nhận & Đăng tin ngay ]",
                Style::default().fg(DARK_BG).bg(FARM_GREEN).add_modifier(Modifier::BOLD),
            )
        };

        let lines = vec![
            Line::from(Span::styled(
                "🎉 Sẵn sàng đăng tin!",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                draft.title.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            row("Loại", draft.job_type.clone()),
            row("Lương", format!("{} / {}", draft.price, draft.price_type.unit())),
            row("Số lượng", format!("{} người", draft.quantity)),
            row("Địa điểm", draft.location.clone()),
            row("Yêu cầu hồ sơ", requirements),
            Line::from(""),
            Line::from(button),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_status(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let Some(message) = &state.status_message else {
            return;
        };
        let color = match message.kind {
            MessageKind::Success => SELECTION_GREEN,
            MessageKind::Error => ERROR_RED,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message.text.clone(), Style::default().fg(color)))
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_navigation(frame: &mut Frame, area: Rect, state: &PostJobState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let key = |k: &'static str| Span::styled(k, Style::default().fg(GOLD));
        let hint = |h: &'static str| Span::styled(h, Style::default().fg(MUTED_GRAY));

        let mut spans = Vec::new();
        if state.can_go_back() {
            spans.extend([key("←"), hint(" Quay lại  ")]);
        }
        match state.current_step {
            WizardStep::JobType => {
                spans.extend([
                    key("↑↓"),
                    hint(" Chọn  "),
                    key("Enter"),
                    hint(" Tiếp tục  "),
                ]);
            }
            WizardStep::Requirements | WizardStep::Package => {
                spans.extend([key("↑↓"), hint(" Di chuyển  "), key("Space"), hint(" Chọn  ")]);
            }
            WizardStep::Details => spans.extend([key("Tab"), hint(" Ô kế tiếp  ")]),
            _ => {}
        }
        if state.is_final_step() {
            if state.terminal_view() != Some(TerminalView::AuthPrompt) {
                spans.extend([key("Enter"), hint(" Đăng tin  ")]);
            }
        } else {
            spans.extend([key("→"), hint(" Tiếp tục  ")]);
        }
        if !state.busy {
            spans.extend([key("Esc"), hint(" Thoát")]);
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );
    }
}

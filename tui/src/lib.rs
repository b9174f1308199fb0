//! TUI rendering for Gamefolio using ratatui.

mod format;
mod input;
mod layout;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use layout::{
    CARD_HEIGHT, CARD_WIDTH, CardSlot, PageLayout, STATUS_BAR_HEIGHT, TOP_BAR_HEIGHT, fan_rows,
};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use gamefolio_engine::{App, CardView, DragVisual, HAND_LABEL, PageView};

use self::format::truncate_to_width;

/// Main draw function. Returns the layout the frame was drawn with, which is
/// what subsequent mouse events are hit-tested against.
pub fn draw(frame: &mut Frame, app: &App) -> PageLayout {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let view = app.view();
    let layout = PageLayout::compute(frame.area(), &view);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    draw_top_bar(frame, &view, layout.top_bar, &palette, &glyphs);
    draw_drop_zone(frame, &view, layout.drop_zone, &palette, &glyphs);
    draw_info_panel(frame, &view, layout.info_panel, &palette, &glyphs);

    let follow = if options.reduced_motion {
        None
    } else {
        app.drag_visual()
    };
    draw_hand(frame, &view, &layout, follow, &palette, &glyphs);
    draw_status_bar(frame, &view, layout.status_bar, &palette, &glyphs);

    layout
}

fn draw_top_bar(
    frame: &mut Frame,
    view: &PageView<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = glyphs
        .border(Block::default().borders(Borders::BOTTOM), BorderType::Plain)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1));
    let line = Line::from(vec![
        Span::styled(view.shell.brand.to_string(), styles::brand(palette)),
        Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
        Span::styled(
            view.shell.description.to_string(),
            Style::default().fg(palette.text_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_drop_zone(
    frame: &mut Frame,
    view: &PageView<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let zone = &view.drop_zone;
    let (border, border_style, body_style) = if zone.hovering {
        (
            glyphs.zone_border_hover,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            styles::zone_hover(palette),
        )
    } else {
        (
            glyphs.zone_border,
            Style::default().fg(palette.text_muted),
            Style::default().fg(palette.text_secondary).bg(palette.bg_panel),
        )
    };

    let block = glyphs
        .border(Block::default().borders(Borders::ALL), border)
        .border_style(border_style)
        .title(format!(
            " {} ",
            truncate_to_width(zone.label, usize::from(area.width.saturating_sub(4)), glyphs.ascii)
        ))
        .style(body_style);
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    let pad = inner.height.saturating_sub(1) / 2;
    lines.extend((0..pad).map(|_| Line::from("")));
    lines.push(Line::from(Span::styled(
        zone.hint,
        body_style.add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_info_panel(
    frame: &mut Frame,
    view: &PageView<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let info = &view.info;
    let block = glyphs
        .border(Block::default().borders(Borders::ALL), glyphs.card_border)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));

    let text_style = if info.placeholder {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(palette.text_primary)
    };
    let lines = vec![
        Line::from(Span::styled(info.title, styles::panel_title(palette))),
        Line::from(""),
        Line::from(Span::styled(info.text, text_style)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_hand(
    frame: &mut Frame,
    view: &PageView<'_>,
    layout: &PageLayout,
    follow: Option<DragVisual>,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut lifted: Option<(&CardView, Rect)> = None;

    for slot in &layout.cards {
        let Some(card) = view.hand.get(slot.index) else {
            continue;
        };
        if card.dragging
            && let Some(visual) = follow
        {
            lifted = Some((card, layout.dragged_rect(slot, visual)));
            continue;
        }
        draw_card(frame, card, slot.rect, palette, glyphs);
    }

    if let Some((card, rect)) = lifted {
        draw_card(frame, card, rect, palette, glyphs);
    }
}

fn draw_card(
    frame: &mut Frame,
    card: &CardView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let style = if card.dragging {
        styles::card_dragging(palette)
    } else if card.selected {
        styles::card_selected(palette)
    } else {
        styles::card(palette)
    };

    let block = glyphs
        .border(Block::default().borders(Borders::ALL), glyphs.card_border)
        .border_style(style)
        .style(style);
    let inner = block.inner(area);

    let marker = if card.dragging {
        Some(glyphs.dragging)
    } else if card.selected {
        Some(glyphs.selected)
    } else {
        None
    };
    let max = usize::from(inner.width);
    let title = match marker {
        Some(marker) => truncate_to_width(&format!("{marker} {}", card.title), max, glyphs.ascii),
        None => truncate_to_width(card.title, max, glyphs.ascii),
    };

    // Cards leaning left or right of the fan's middle keep their title on that side.
    let alignment = if card.pose.angle_deg < 0.0 {
        Alignment::Left
    } else if card.pose.angle_deg > 0.0 {
        Alignment::Right
    } else {
        Alignment::Center
    };

    let pad = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        title,
        style.add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).alignment(alignment).block(block), area);
}

fn draw_status_bar(
    frame: &mut Frame,
    view: &PageView<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (lead, key, action) = if let Some(card) = view.hand.iter().find(|card| card.dragging) {
        (
            Span::styled(
                format!(" {} {}", glyphs.dragging, card.label),
                styles::card_dragging(palette),
            ),
            "Esc",
            " abbrechen",
        )
    } else if let Some(tooltip) = view.tooltip() {
        (
            Span::styled(format!(" {tooltip}"), styles::panel_title(palette)),
            "q",
            " beenden",
        )
    } else if let Some(announcement) = view.announcement {
        (
            Span::styled(format!(" {announcement}"), styles::announcement(palette)),
            "q",
            " beenden",
        )
    } else {
        (
            Span::styled(
                format!(" {HAND_LABEL}: Karte mit der Maus nach oben ziehen"),
                Style::default().fg(palette.text_secondary),
            ),
            "q",
            " beenden",
        )
    };

    let line = Line::from(vec![
        lead,
        Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
        Span::styled(key, styles::key_highlight(palette)),
        Span::styled(action, styles::key_hint(palette)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.bg_dark)),
        area,
    );
}

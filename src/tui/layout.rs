use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::RecipeSummary;
use crate::tui::app::{Focus, TuiApp};
use crate::tui::tags;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Ingredient input
            Constraint::Length(3), // Tags
            Constraint::Min(6),    // Results or detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_input(frame, app, chunks[0], colors);
    render_tags(frame, app, chunks[1], colors);

    if app.controller.detail_visible() {
        render_detail(frame, app, chunks[2], colors);
    } else {
        render_results(frame, app, chunks[2], colors);
    }

    render_status_bar(frame, app, chunks[3], colors);
    render_notifications(frame, app, chunks[2], colors);

    if app.show_help {
        render_help(frame, frame.area(), colors);
    }
}

fn border_style(active: bool, colors: &ColorConfig) -> Style {
    if active {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    }
}

fn render_input(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let is_active = app.focus == Focus::Input;
    let block = Block::default()
        .title(" What's in your kitchen? ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active, colors));

    let paragraph = Paragraph::new(app.input.as_str()).block(block);
    frame.render_widget(paragraph, area);

    if is_active {
        // Display cells, not chars.
        let width = u16::try_from(Line::from(app.input.as_str()).width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(width);
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_tags(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let is_active = app.focus == Focus::Tags;
    let ingredients = app.controller.ingredients();
    let block = Block::default()
        .title(format!(" Ingredients ({}) ", ingredients.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, colors));

    let line = if ingredients.is_empty() {
        Line::from(Span::styled(
            "Type an ingredient and press Enter, or use 1-9 for quick picks",
            Style::default().fg(colors.inactive_border),
        ))
    } else {
        tags::tag_line(&tags::project(ingredients), app.selected_tag(), colors)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Three display lines per recipe: title, timings and tags.
pub fn recipe_card(recipe: &RecipeSummary, colors: &ColorConfig) -> ListItem<'static> {
    let title = Line::from(Span::styled(
        recipe.title.clone(),
        Style::default()
            .fg(colors.card_title)
            .add_modifier(Modifier::BOLD),
    ));
    let meta = Line::from(Span::styled(
        format!(
            "  {} min  ·  {} servings  ·  ★ {}",
            recipe.cook_time, recipe.servings, recipe.rating
        ),
        Style::default().fg(colors.card_meta),
    ));
    let tags = Line::from(Span::styled(
        format!(
            "  {}",
            recipe
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        ),
        Style::default().fg(colors.card_tags),
    ));

    ListItem::new(Text::from(vec![title, meta, tags]))
}

fn render_results(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let is_active = app.focus == Focus::Results;
    let results = app.controller.results();

    let title = if results.is_empty() {
        " Recipes ".to_string()
    } else {
        format!(" Recipes [{}/{}] ", app.result_index + 1, results.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active, colors));

    if !app.controller.results_visible() {
        let hint = if app.controller.is_loading() {
            "Cooking up some ideas..."
        } else {
            "Add a few ingredients and press F5 to find recipes."
        };
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    }

    let items: Vec<ListItem> = results.iter().map(|r| recipe_card(r, colors)).collect();

    let highlight_style = if is_active {
        Style::default()
            .bg(colors.selection_bg)
            .fg(colors.selection_fg)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.result_list_state);
}

fn render_detail(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let Some(detail) = app.controller.detail() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(image) = &detail.image_url {
        lines.push(Line::from(Span::styled(
            format!("Image: {}", image),
            Style::default().fg(colors.card_meta),
        )));
        lines.push(Line::from(""));
    }
    lines.extend(detail.body_lines().into_iter().map(Line::from));

    let block = Block::default()
        .title(format!(" {} ", detail.title))
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::Results, colors));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.controller.is_loading() {
        "Loading...".to_string()
    } else {
        match app.focus {
            Focus::Input => "Enter:Add  F5:Search  Tab:Pane  Esc:Leave input  Ctrl+c:Quit",
            Focus::Tags => "j/k:Select  d:Remove  1-9:Quick add  s:Search  i:Input  t:Theme  ?:Help  q:Quit",
            Focus::Results if app.controller.detail_visible() => {
                "j/k:Scroll  b:Back  o:Image  s:Search  ?:Help  q:Quit"
            }
            Focus::Results => "j/k:Navigate  Enter:Open  o:Image  s:Search  i:Input  ?:Help  q:Quit",
        }
        .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

/// Stack active notifications in the top-right corner of `area`, newest last.
fn render_notifications(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let notifications = app.controller.notifications().active();
    let width = area.width.min(48);
    let mut y = area.y + 1;

    for note in notifications {
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);
        let color = colors.severity(note.severity);
        let block = Block::default()
            .title(format!(" {} ", note.severity.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(note.text.as_str())
                .style(Style::default().fg(color))
                .block(block),
            rect,
        );
        y += 3;
    }
}

fn render_help(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let text = vec![
        Line::from(Span::styled(
            "How it works",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Type what you have and press Enter to add it as a tag."),
        Line::from("2. Press F5 (or s outside the input box) to search recipes."),
        Line::from("3. Pick a recipe with j/k and Enter to see how to cook it."),
        Line::from(""),
        Line::from("Tags: d removes the selected one, 1-9 add quick picks."),
        Line::from("Recipe: b goes back to the list, o opens the image."),
        Line::from("t switches between the light and dark theme."),
        Line::from(""),
        Line::from("Press any key to close."),
    ];

    let width = area.width.min(64);
    let height = area.height.min(text.len() as u16 + 2);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        rect,
    );
}

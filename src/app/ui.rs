//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::auth::{AuthField, AuthMode};
use super::browser::Browser;
use super::composer::{Composer, ComposerField};
use super::panels::FriendsPanel;
use super::screen::Screen;
use super::state::{AppState, Mode};
use crate::models::{City, Message, Post};
use crate::seed;
use crate::theme::ThemeColors;

/// App icon
const ICON: &str = "🎣";

/// Width of the city list next to walls and chats
const CITY_LIST_WIDTH: u16 = 32;

/// Width of the navigation drawer
const DRAWER_WIDTH: u16 = 36;

/// Height of one friend card
const FRIEND_CARD_HEIGHT: u16 = 5;

/// Main render function
pub fn render(frame: &mut Frame, state: &AppState) {
    let colors = state.theme().colors();

    // Set background
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg_block, area);

    if state.screen() == Screen::Auth {
        render_auth(frame, state, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Bottom navigation
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, state, chunks[0]);
    render_main(frame, state, chunks[1]);
    render_nav_bar(frame, state, chunks[2]);
    render_status_bar(frame, state, chunks[3]);

    if state.drawer.is_open() {
        render_drawer(frame, state);
    }
    if state.mode == Mode::Help {
        render_help_popup(frame, state);
    }
}

fn rounded_block<'a>(colors: &ThemeColors, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            colors.block_focus()
        } else {
            colors.block()
        })
        .style(colors.card())
}

fn avatar_span(initials: String, colors: &ThemeColors) -> Span<'static> {
    Span::styled(
        format!(" {initials} "),
        Style::default()
            .fg(colors.bg_card)
            .bg(colors.accent)
            .add_modifier(Modifier::BOLD),
    )
}

/// Cut `text` to `max` display columns, adding an ellipsis when it does not fit
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn wrap_lines(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, width.max(8))
        .into_iter()
        .map(|line| Line::styled(line.into_owned(), style))
        .collect()
}

// ── Auth ────────────────────────────────────────────────────────────────────

fn render_auth(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let form = &state.auth;
    let fields = form.fields();

    let height = 9 + 3 * fields.len() as u16;
    let card = centered_fixed(52, height, area);
    let block = rounded_block(&colors, true);
    let inner = block.inner(card);
    frame.render_widget(Clear, card);
    frame.render_widget(block, card);

    let mut constraints = vec![
        Constraint::Length(2), // Title
        Constraint::Length(1), // Mode tabs
        Constraint::Length(1), // Spacer
    ];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1)); // Submit
    constraints.push(Constraint::Min(0)); // Hints

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    // Title with theme toggle on the right
    let title_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(rows[0]);
    // Bobbing float
    let icon = if (state.current_tick() / 10) % 2 == 0 {
        ICON
    } else {
        "🐟"
    };
    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), colors.text()),
            Span::styled("РыбаКоп", colors.logo()),
        ]),
        Line::styled(Screen::Auth.subtitle(), colors.text_muted()),
    ]);
    frame.render_widget(title, title_cols[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(state.theme().toggle_icon(), colors.key_hint()))
            .alignment(Alignment::Right),
        title_cols[1],
    );

    let modes = [AuthMode::Login, AuthMode::Register];
    let tabs = Tabs::new(modes.iter().map(|m| Line::from(m.label())))
        .select(modes.iter().position(|m| *m == form.mode))
        .style(colors.tab())
        .highlight_style(colors.tab_active())
        .divider(Span::styled(" │ ", colors.text_muted()));
    frame.render_widget(tabs, rows[1]);

    for (i, field) in fields.iter().enumerate() {
        let field_area = rows[3 + i];
        let focused = form.focus == *field;
        let value = form.value(*field);
        let shown = if *field == AuthField::Password {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let block = rounded_block(&colors, focused)
            .title(format!(" {} ", field.placeholder()))
            .title_style(if focused {
                colors.text_primary()
            } else {
                colors.text_muted()
            })
            .style(colors.input());
        let inner = block.inner(field_area);
        let content = if shown.is_empty() && !focused {
            Span::styled(field.placeholder(), colors.text_muted())
        } else {
            Span::styled(shown.clone(), colors.text())
        };
        frame.render_widget(Paragraph::new(content).block(block), field_area);

        if focused {
            let x = inner.x + (shown.width() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }

    let submit_row = rows[3 + fields.len()];
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("  {}  ", form.mode.submit_label()),
            colors.selected(),
        ))
        .alignment(Alignment::Center),
        submit_row,
    );

    let hints = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", colors.key_hint()),
            Span::styled(" войти  ", colors.text_muted()),
            Span::styled("Tab", colors.key_hint()),
            Span::styled(" поле  ", colors.text_muted()),
            Span::styled("F3", colors.key_hint()),
            Span::styled(" режим  ", colors.text_muted()),
            Span::styled("F2", colors.key_hint()),
            Span::styled(" тема", colors.text_muted()),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hints, rows[4 + fields.len()]);
}

// ── Shell ───────────────────────────────────────────────────────────────────

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let block = rounded_block(&colors, false)
        .title(format!(" {ICON} РыбаКоп "))
        .title_style(colors.logo());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ☰ ", colors.key_hint()),
            Span::styled(state.screen().subtitle(), colors.text_bold()),
        ])),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(state.theme().toggle_icon(), colors.key_hint()),
            Span::styled(format!(" {} ", state.theme().name()), colors.text_muted()),
            Span::styled("[t]  ", colors.text_muted()),
            Span::styled("🔔 ", colors.text_muted()),
        ]))
        .alignment(Alignment::Right),
        cols[1],
    );
}

fn render_nav_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let tabs = Screen::tabs();

    let titles: Vec<Line> = tabs
        .iter()
        .map(|s| Line::from(format!("{} {}", s.icon(), s.label())))
        .collect();

    let nav = Tabs::new(titles)
        .block(rounded_block(&colors, false))
        .select(tabs.iter().position(|s| *s == state.screen()))
        .style(colors.tab())
        .highlight_style(colors.tab_active())
        .divider(Span::styled(" │ ", colors.text_muted()));

    frame.render_widget(nav, area);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();

    let hints: &[(&str, &str)] = match state.mode {
        Mode::Compose => &[("Enter", "отправить"), ("Tab", "теги"), ("Esc", "отмена")],
        Mode::Search => &[("Enter", "открыть"), ("↑/↓", "выбор"), ("Esc", "сброс")],
        Mode::Help => &[("Esc", "закрыть")],
        Mode::Normal => &[
            ("m", "меню"),
            ("Tab", "разделы"),
            ("t", "тема"),
            ("?", "помощь"),
            ("q", "выход"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    if !state.status.is_empty() {
        spans.push(Span::styled(state.status.clone(), colors.text_success()));
        spans.push(Span::styled("  │  ", colors.text_muted()));
    }
    for (key, label) in hints {
        spans.push(Span::styled(*key, colors.key_hint()));
        spans.push(Span::styled(format!(": {label}  "), colors.text_muted()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg)),
        area,
    );
}

fn render_main(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.screen() {
        Screen::Feed => render_feed(frame, state, area),
        Screen::Friends => render_friends(frame, state, area),
        Screen::City => render_walls(frame, state, area),
        Screen::Chat => render_chat(frame, state, area),
        Screen::Profile => render_profile(frame, state, area),
        Screen::Auth | Screen::Map | Screen::Leaderboard | Screen::Search => {
            render_placeholder(frame, state, area);
        }
    }
}

// ── Feed ────────────────────────────────────────────────────────────────────

fn render_feed(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let composer = &state.feed.composer;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(composer_height(composer)),
            Constraint::Min(0),
        ])
        .split(area);

    // Friends strip
    let mut spans = Vec::new();
    for (i, friend) in state.feed.friends.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", colors.text_muted()));
        }
        spans.push(Span::styled(format!("{} ", friend.avatar), colors.text()));
        spans.push(Span::styled(friend.name.clone(), colors.text_bold()));
        if friend.online && state.config.show_online_badges {
            spans.push(Span::styled(" ●", colors.text_success()));
        }
        spans.push(Span::styled(format!(" {}", friend.status), colors.text_muted()));
    }
    let strip = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(rounded_block(&colors, false).title(" 👥 Друзья "));
    frame.render_widget(strip, chunks[0]);

    render_composer(
        frame,
        &colors,
        chunks[1],
        composer,
        state.mode == Mode::Compose,
        &ComposerText {
            title: " ✏ Новый пост ",
            prompt: "Поделись своим уловом...",
            placeholder: "Расскажи о своей рыбалке...",
            key: "n",
        },
    );

    render_post_list(
        frame,
        &colors,
        chunks[2],
        " 📰 Лента ",
        &state.feed.posts,
        state.feed.selected_post,
        state.mode == Mode::Normal,
    );
}

/// Labels of a composer
struct ComposerText {
    title: &'static str,
    prompt: &'static str,
    placeholder: &'static str,
    key: &'static str,
}

fn composer_height(composer: &Composer) -> u16 {
    match (composer.is_open(), composer.has_tags()) {
        (false, _) => 3,
        (true, false) => 7,
        (true, true) => 9,
    }
}

fn render_composer(
    frame: &mut Frame,
    colors: &ThemeColors,
    area: Rect,
    composer: &Composer,
    editing: bool,
    text: &ComposerText,
) {
    if !composer.is_open() {
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {}  ", text.prompt), colors.text_muted()),
            Span::styled(format!("[{}]", text.key), colors.key_hint()),
        ]))
        .block(rounded_block(colors, false));
        frame.render_widget(prompt, area);
        return;
    }

    let block = rounded_block(colors, editing)
        .title(text.title)
        .title_style(colors.text_primary());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Min(1)];
    if composer.has_tags() {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let width = inner.width.saturating_sub(1) as usize;
    let body = if composer.text().is_empty() {
        vec![Line::styled(text.placeholder, colors.text_muted())]
    } else {
        wrap_lines(composer.text(), width, colors.text())
    };
    let body_height = rows[0].height as usize;
    let skip = body.len().saturating_sub(body_height);
    frame.render_widget(
        Paragraph::new(body.into_iter().skip(skip).collect::<Vec<_>>()).style(colors.input()),
        rows[0],
    );

    if composer.has_tags() {
        let tags = if composer.tags().is_empty() {
            Span::styled("#щука #зимняя_рыбалка", colors.text_muted())
        } else {
            Span::styled(composer.tags().to_string(), colors.text_primary())
        };
        let focused = composer.focus() == ComposerField::Tags;
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "Теги: ",
                    if focused {
                        colors.key_hint()
                    } else {
                        colors.text_dim()
                    },
                ),
                tags,
            ]))
            .block(Block::default().borders(Borders::TOP).border_style(colors.block())),
            rows[1],
        );
    }

    let actions = Paragraph::new(Line::from(vec![
        Span::styled(
            "[Enter] Опубликовать",
            if composer.can_submit() {
                colors.key_hint()
            } else {
                colors.text_muted()
            },
        ),
        Span::styled("   [Esc] Отмена", colors.text_muted()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(actions, rows[rows.len() - 1]);

    if editing {
        match composer.focus() {
            ComposerField::Text => {
                let last = wrap_lines(composer.text(), width, colors.text());
                let line = last.last().map_or(0, Line::width) as u16;
                let row = (last.len().saturating_sub(1) as u16).min(rows[0].height.saturating_sub(1));
                frame.set_cursor_position((rows[0].x + line.min(width as u16), rows[0].y + row));
            }
            ComposerField::Tags => {
                let x = rows[1].x + 6 + composer.tags().width() as u16;
                frame.set_cursor_position((x.min(rows[1].right().saturating_sub(1)), rows[1].y + 1));
            }
        }
    }
}

fn post_item(post: &Post, colors: &ThemeColors, width: usize) -> ListItem<'static> {
    let initials = post
        .user
        .as_ref()
        .map_or_else(|| "РК".to_string(), crate::models::User::initials);

    let mut lines = vec![Line::from(vec![
        avatar_span(initials, colors),
        Span::raw(" "),
        Span::styled(truncate(post.author_name(), width.saturating_sub(20)), colors.text_bold()),
        Span::styled(format!("  {}", post.relative_time()), colors.text_muted()),
    ])];

    lines.extend(wrap_lines(&post.content, width, colors.text()));

    if !post.tags.is_empty() {
        let mut spans = Vec::new();
        for tag in &post.tags {
            spans.push(Span::styled(format!("#{tag}"), colors.tag()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !post.images.is_empty() {
        lines.push(Line::styled(
            format!("🖼  фото: {}", post.images.len()),
            colors.text_dim(),
        ));
    }

    lines.push(Line::from(vec![
        Span::styled(format!("♥ {}", post.likes_count), colors.text_error()),
        Span::styled(format!("   💬 {}", post.comments_count), colors.text_dim()),
        Span::styled("   ↗ Поделиться", colors.text_dim()),
    ]));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn render_post_list(
    frame: &mut Frame,
    colors: &ThemeColors,
    area: Rect,
    title: &str,
    posts: &[Post],
    selected: usize,
    focused: bool,
) {
    let block = rounded_block(colors, focused)
        .title(title.to_string())
        .title_style(colors.text_primary());

    if posts.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled("  Пока нет постов. Будьте первым!", colors.text_muted()),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = posts.iter().map(|p| post_item(p, colors, width)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors.selection))
        .highlight_symbol("▌ ");

    let mut list_state = ListState::default().with_selected(Some(selected.min(posts.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

// ── Searchable city list → detail ───────────────────────────────────────────

/// Render a [`Browser`] on the left and the selected item's detail on the right.
///
/// Without a selection the right side shows `empty_hint` instead of calling
/// `detail`.
#[allow(clippy::too_many_arguments)]
fn render_drill_down<T>(
    frame: &mut Frame,
    state: &AppState,
    area: Rect,
    browser: &Browser<T>,
    list_title: &str,
    row: impl Fn(&T, &ThemeColors) -> Line<'static>,
    empty_hint: &str,
    detail: impl FnOnce(&mut Frame, Rect, &T),
) {
    let colors = state.theme().colors();
    let searching = state.mode == Mode::Search;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CITY_LIST_WIDTH), Constraint::Min(0)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(cols[0]);

    // Search box
    let search_block = rounded_block(&colors, searching)
        .title(" 🔍 Поиск ")
        .style(colors.input());
    let search_inner = search_block.inner(left[0]);
    let query = if browser.query().is_empty() && !searching {
        Line::from(vec![
            Span::styled("Найти город... ", colors.text_muted()),
            Span::styled("[/]", colors.key_hint()),
        ])
    } else {
        Line::styled(browser.query().to_string(), colors.text())
    };
    frame.render_widget(Paragraph::new(query).block(search_block), left[0]);
    if searching {
        let x = search_inner.x + (browser.query().width() as u16).min(search_inner.width.saturating_sub(1));
        frame.set_cursor_position((x, search_inner.y));
    }

    // Filtered list
    let selected = browser.selected();
    let filtered = browser.filtered();
    let list_block = rounded_block(&colors, selected.is_none() || searching)
        .title(list_title.to_string())
        .title_style(colors.text_primary());

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(" Ничего не найдено", colors.text_muted())).block(list_block),
            left[1],
        );
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|item| {
                let mut line = row(*item, &colors);
                if selected.is_some_and(|s| std::ptr::eq(s, *item)) {
                    line.spans.insert(0, Span::styled("● ", colors.text_primary()));
                }
                ListItem::new(line)
            })
            .collect();
        let list = List::new(items)
            .block(list_block)
            .highlight_style(colors.selected())
            .highlight_symbol("▌ ");
        let mut list_state = ListState::default().with_selected(Some(browser.highlight()));
        frame.render_stateful_widget(list, left[1], &mut list_state);
    }

    match selected {
        Some(item) => detail(frame, cols[1], item),
        None => render_empty_state(frame, &colors, cols[1], empty_hint),
    }
}

fn city_row(city: &City, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(city.name.clone(), colors.text_bold()),
        Span::styled(
            format!("  {}", truncate(&city.region, 14)),
            colors.text_muted(),
        ),
    ])
}

fn render_empty_state(frame: &mut Frame, colors: &ThemeColors, area: Rect, hint: &str) {
    let block = rounded_block(colors, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(4) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::styled("🗺", colors.text()));
    lines.push(Line::from(""));
    lines.push(Line::styled(hint.to_string(), colors.text_muted()));
    lines.push(Line::from(vec![
        Span::styled("↑/↓", colors.key_hint()),
        Span::styled(" выбрать  ", colors.text_muted()),
        Span::styled("Enter", colors.key_hint()),
        Span::styled(" открыть", colors.text_muted()),
    ]));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

// ── City walls ──────────────────────────────────────────────────────────────

fn render_walls(frame: &mut Frame, state: &AppState, area: Rect) {
    render_drill_down(
        frame,
        state,
        area,
        &state.walls.cities,
        " 🗺 Города ",
        city_row,
        "Выберите город, чтобы открыть его стену",
        |frame, area, city| render_wall(frame, state, area, city),
    );
}

fn render_wall(frame: &mut Frame, state: &AppState, area: Rect, city: &City) {
    let colors = state.theme().colors();
    let composer = &state.walls.composer;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(composer_height(composer)),
            Constraint::Min(0),
        ])
        .split(area);

    let mut location = city.region.clone();
    if let Some(coords) = city.coordinates() {
        location.push_str(&format!(" · {coords}"));
    }
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("📍 ", colors.text()),
            Span::styled(city.name.clone(), colors.text_bold()),
        ]),
        Line::styled(location, colors.text_muted()),
        Line::styled(
            "Стена города: делитесь уловами, находками и историями с земляками!",
            colors.text_dim(),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(rounded_block(&colors, false));
    frame.render_widget(header, chunks[0]);

    render_composer(
        frame,
        &colors,
        chunks[1],
        composer,
        state.mode == Mode::Compose,
        &ComposerText {
            title: " ✏ Пост на стену ",
            prompt: "Поделитесь своим уловом или историей...",
            placeholder: "Расскажите о своём улове или рыбацкой истории...",
            key: "n",
        },
    );

    render_post_list(
        frame,
        &colors,
        chunks[2],
        " 📌 Стена ",
        state.walls.posts(),
        state.walls.selected_post,
        state.mode == Mode::Normal,
    );
}

// ── City chats ──────────────────────────────────────────────────────────────

fn render_chat(frame: &mut Frame, state: &AppState, area: Rect) {
    render_drill_down(
        frame,
        state,
        area,
        &state.chat.cities,
        " 💬 Чаты городов ",
        city_row,
        "Выберите город, чтобы начать общение",
        |frame, area, city| render_chat_room(frame, state, area, city),
    );
}

fn message_lines(
    msg: &Message,
    own: bool,
    colors: &ThemeColors,
    width: usize,
) -> Vec<Line<'static>> {
    let mut header = vec![
        Span::styled(
            if own {
                "Вы".to_string()
            } else {
                msg.author_name().to_string()
            },
            if own {
                colors.text_primary().add_modifier(Modifier::BOLD)
            } else {
                colors.text_bold()
            },
        ),
        Span::styled(format!("  {}", msg.clock_time()), colors.text_muted()),
    ];
    if msg.is_edited {
        header.push(Span::styled(" (изменено)", colors.text_muted()));
    }

    let mut lines = vec![Line::from(header)];
    lines.extend(wrap_lines(&msg.content, width, colors.text()));
    lines
}

fn render_chat_room(frame: &mut Frame, state: &AppState, area: Rect, city: &City) {
    let colors = state.theme().colors();
    let editing = state.mode == Mode::Compose;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("💬 ", colors.text()),
        Span::styled(city.name.clone(), colors.text_bold()),
        Span::styled(format!("  {}", city.region), colors.text_muted()),
    ]))
    .block(rounded_block(&colors, false));
    frame.render_widget(header, chunks[0]);

    // Thread, pinned to the bottom unless scrolled back
    let block = rounded_block(&colors, !editing).title(" Сообщения ");
    let inner = block.inner(chunks[1]);
    let width = inner.width.saturating_sub(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, msg) in state.chat.thread().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(message_lines(msg, msg.user_id == state.user.id, &colors, width));
    }
    let overflow = (lines.len() as u16).saturating_sub(inner.height);
    state.chat.set_max_scroll(overflow);
    let offset = overflow.saturating_sub(state.chat.scroll_back());
    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), chunks[1]);

    // Input
    let composer = &state.chat.composer;
    let input_block = rounded_block(&colors, editing)
        .title(" Сообщение ")
        .style(colors.input());
    let input_inner = input_block.inner(chunks[2]);
    let hint_width = 10;
    let text_width = input_inner.width.saturating_sub(hint_width) as usize;
    let text = composer.text();
    let visible = if text.width() > text_width {
        // Keep the end of the draft visible
        let skip = text.chars().count().saturating_sub(text_width);
        text.chars().skip(skip).collect::<String>()
    } else {
        text.to_string()
    };
    let input_line = if text.is_empty() && !editing {
        Line::from(vec![
            Span::styled("Напишите сообщение... ", colors.text_muted()),
            Span::styled("[i]", colors.key_hint()),
        ])
    } else {
        Line::styled(visible.clone(), colors.text())
    };
    frame.render_widget(Paragraph::new(input_line).block(input_block), chunks[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter ➤",
            if composer.can_submit() {
                colors.key_hint()
            } else {
                colors.text_muted()
            },
        ))
        .alignment(Alignment::Right),
        Rect {
            x: input_inner.right().saturating_sub(hint_width),
            width: hint_width.min(input_inner.width),
            ..input_inner
        },
    );
    if editing {
        let x = input_inner.x + (visible.width() as u16).min(text_width as u16);
        frame.set_cursor_position((x, input_inner.y));
    }
}

// ── Friends ─────────────────────────────────────────────────────────────────

fn render_friends(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let panel = &state.friends;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::styled("Друзья рыбаки", colors.text_bold()),
        Line::styled(
            "Найди друзей по увлечению. Делись опытом и трофеями.",
            colors.text_muted(),
        ),
    ])
    .alignment(Alignment::Center)
    .block(rounded_block(&colors, false));
    frame.render_widget(header, chunks[0]);

    let grid = chunks[1];
    let visible_rows = (grid.height / FRIEND_CARD_HEIGHT) as usize;
    if visible_rows > 0 {
        let selected_row = panel.selected / FriendsPanel::COLUMNS;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        for (slot, row) in (first_row..).take(visible_rows).enumerate() {
            let start = row * FriendsPanel::COLUMNS;
            if start >= panel.friends.len() {
                break;
            }
            let row_area = Rect {
                y: grid.y + slot as u16 * FRIEND_CARD_HEIGHT,
                height: FRIEND_CARD_HEIGHT,
                ..grid
            };
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row_area);

            for (col, cell) in cells.iter().enumerate() {
                let idx = start + col;
                let Some(friend) = panel.friends.get(idx) else {
                    break;
                };
                let focused = idx == panel.selected;
                let mut name = vec![
                    Span::styled(format!("{}  ", friend.avatar), colors.text()),
                    Span::styled(friend.name.clone(), colors.text_bold()),
                ];
                if friend.online && state.config.show_online_badges {
                    name.push(Span::styled(" ●", colors.text_success()));
                }
                let card = Paragraph::new(vec![
                    Line::from(name),
                    Line::styled(friend.status.clone(), colors.text_muted()),
                    Line::styled(
                        "[+ Добавить]",
                        if focused {
                            colors.key_hint()
                        } else {
                            colors.text_dim()
                        },
                    ),
                ])
                .alignment(Alignment::Center)
                .block(rounded_block(&colors, focused));
                frame.render_widget(card, *cell);
            }
        }
    }

    let footer = Paragraph::new(Span::styled("Найти ещё рыбаков", colors.text_accent()))
        .alignment(Alignment::Center)
        .block(rounded_block(&colors, false));
    frame.render_widget(footer, chunks[2]);
}

// ── Profile ─────────────────────────────────────────────────────────────────

fn render_profile(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let user = &state.user;
    let stats = seed::profile_stats();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(0)])
        .split(area);

    let stat = |value: u32, label: &'static str| -> Vec<Span<'static>> {
        vec![
            Span::styled(value.to_string(), colors.text_bold()),
            Span::styled(format!(" {label}     "), colors.text_muted()),
        ]
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(avatar_span(user.initials(), &colors)),
        Line::from(""),
        Line::styled(user.username.clone(), colors.text_bold()),
        Line::styled(seed::CURRENT_HANDLE, colors.text_muted()),
        Line::from(""),
        Line::from(
            [
                stat(stats.posts, "Постов"),
                stat(stats.friends, "Друзей"),
                stat(stats.trophies, "Трофеев"),
            ]
            .concat(),
        ),
        Line::styled(
            format!(
                "Опыт: {} лет · Уловов: {} · Рейтинг: {}",
                user.experience_years, user.total_catches, user.rating
            ),
            colors.text_dim(),
        ),
    ];
    if let Some(bio) = &user.bio {
        lines.push(Line::styled(bio.clone(), colors.text_dim()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("[✎ Редактировать профиль]", colors.text_muted()));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(rounded_block(&colors, false));
    frame.render_widget(card, chunks[0]);

    let badges: Vec<Line> = seed::BADGES
        .chunks(4)
        .flat_map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|b| Span::styled(format!("  {b}  "), colors.text()))
                .collect();
            [Line::from(spans), Line::from("")]
        })
        .collect();
    let achievements = Paragraph::new(badges)
        .alignment(Alignment::Center)
        .block(
            rounded_block(&colors, false)
                .title(" Достижения ")
                .title_style(colors.text_primary()),
        );
    frame.render_widget(achievements, chunks[1]);
}

fn render_placeholder(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme().colors();
    let screen = state.screen();
    let block = rounded_block(&colors, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::styled(
        format!("{} {}", screen.icon(), screen.label()),
        colors.text_bold(),
    ));
    lines.push(Line::styled("Раздел в разработке", colors.text_muted()));
    lines.push(Line::from(vec![
        Span::styled("m", colors.key_hint()),
        Span::styled(": открыть меню", colors.text_muted()),
    ]));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

// ── Overlays ────────────────────────────────────────────────────────────────

fn render_drawer(frame: &mut Frame, state: &AppState) {
    let colors = state.theme().colors();
    let full = frame.area();
    let area = Rect {
        width: DRAWER_WIDTH.min(full.width),
        ..full
    };

    frame.render_widget(Clear, area);
    let block = rounded_block(&colors, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(inner);

    let user = &state.user;
    let header = Paragraph::new(vec![
        Line::from(vec![
            avatar_span(user.initials(), &colors),
            Span::raw(" "),
            Span::styled(
                truncate(&user.username, DRAWER_WIDTH as usize - 14),
                colors.text_bold(),
            ),
            Span::styled("  ✕ Esc", colors.text_muted()),
        ]),
        Line::styled(format!("     Рейтинг: {}", user.rating), colors.text_muted()),
    ])
    .block(Block::default().borders(Borders::BOTTOM).border_style(colors.block()));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = Screen::menu()
        .iter()
        .map(|screen| {
            let style = if *screen == state.screen() {
                colors.text_primary().add_modifier(Modifier::BOLD)
            } else {
                colors.text_dim()
            };
            ListItem::new(Line::styled(format!("{}  {}", screen.icon(), screen.label()), style))
        })
        .collect();
    let menu = List::new(items)
        .highlight_style(colors.selected())
        .highlight_symbol("▌ ");
    let mut menu_state = ListState::default().with_selected(Some(state.drawer.highlight()));
    frame.render_stateful_widget(menu, chunks[1], &mut menu_state);

    let footer = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{ICON} "), colors.text()),
            Span::styled("Поймано рыбы", colors.text_bold()),
        ]),
        Line::styled(user.total_catches.to_string(), colors.logo()),
    ])
    .block(Block::default().borders(Borders::TOP).border_style(colors.block()));
    frame.render_widget(footer, chunks[2]);
}

fn render_help_popup(frame: &mut Frame, state: &AppState) {
    let colors = state.theme().colors();
    let popup_area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let section = |title: &'static str| {
        Line::styled(
            format!("  {title}"),
            colors.text_primary().add_modifier(Modifier::BOLD),
        )
    };
    let key = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<16}"), colors.key_hint()),
            Span::styled(what, colors.text()),
        ])
    };

    let help = vec![
        Line::from(""),
        section("Навигация"),
        key("m", "Меню"),
        key("Tab / Shift+Tab", "Следующий / предыдущий раздел"),
        key("1-5", "Лента, Друзья, Чаты, Города, Профиль"),
        key("j/k или ↑/↓", "Вверх / вниз"),
        Line::from(""),
        section("Лента и стены"),
        key("n", "Новый пост"),
        key("Tab", "Переключить текст / теги"),
        key("Enter", "Опубликовать"),
        key("Esc", "Отмена"),
        Line::from(""),
        section("Города и чаты"),
        key("/", "Поиск города"),
        key("Enter", "Открыть город"),
        key("Esc", "Назад к списку"),
        key("i", "Написать сообщение"),
        key("Ctrl+U / Ctrl+D", "Прокрутка сообщений"),
        key("G", "К последнему сообщению"),
        Line::from(""),
        section("Общее"),
        key("t", "Тёмная / светлая тема"),
        key("q", "Выход"),
    ];

    let popup = Paragraph::new(help)
        .block(
            rounded_block(&colors, true)
                .title(" ❓ Помощь ")
                .title_style(colors.text_primary()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(popup, popup_area);
}

/// Helper to create a centered rect using percentages
const fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = r.width * percent_x / 100;
    let popup_height = r.height * percent_y / 100;
    Rect {
        x: r.x + (r.width.saturating_sub(popup_width)) / 2,
        y: r.y + (r.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Helper to create a centered rect of a fixed size, clamped to `r`
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw_buffer(state: &AppState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let buffer = draw_buffer(state, width, height);
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state_on(screen: Screen) -> AppState {
        let mut state = AppState::new(Config::default());
        state.navigate(screen);
        state
    }

    #[test]
    fn test_every_screen_renders_in_both_themes() {
        for theme in Theme::all() {
            for screen in std::iter::once(&Screen::Auth).chain(Screen::menu()) {
                let mut state = state_on(*screen);
                if state.theme() != *theme {
                    state.toggle_theme();
                }
                let text = draw(&state, 100, 40);
                assert!(!text.trim().is_empty(), "{screen:?} rendered nothing");
            }
        }
    }

    #[test]
    fn test_theme_toggle_restores_every_cell() {
        for screen in std::iter::once(&Screen::Auth).chain(Screen::menu()) {
            let mut state = state_on(*screen);
            let before = draw_buffer(&state, 100, 40);
            state.toggle_theme();
            let toggled = draw_buffer(&state, 100, 40);
            state.toggle_theme();
            let after = draw_buffer(&state, 100, 40);

            assert_ne!(before, toggled, "{screen:?} ignored the theme");
            assert_eq!(before, after, "{screen:?} changed after two toggles");
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for screen in std::iter::once(&Screen::Auth).chain(Screen::menu()) {
            let mut state = state_on(*screen);
            state.drawer.open(*screen);
            draw(&state, 10, 5);
            state.mode = Mode::Help;
            draw(&state, 3, 2);
        }
    }

    #[test]
    fn test_auth_screen() {
        let mut state = AppState::new(Config::default());
        let text = draw(&state, 100, 30);
        assert!(text.contains("РыбаКоп"));
        assert!(text.contains("Войти"));
        assert!(!text.contains("Имя"));

        state.auth.toggle_mode();
        state.auth.password = "secret".to_string();
        let text = draw(&state, 100, 30);
        assert!(text.contains("Зарегистрироваться"));
        assert!(text.contains("Имя"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_feed_screen() {
        let state = state_on(Screen::Feed);
        let text = draw(&state, 120, 45);
        assert!(text.contains("Лента"));
        assert!(text.contains("Иван"));
        assert!(text.contains("Юрий Рыболов"));
        assert!(text.contains("Поделись своим уловом"));
    }

    #[test]
    fn test_feed_composer_open() {
        let mut state = state_on(Screen::Feed);
        state.start_compose();
        let text = draw(&state, 120, 45);
        assert!(text.contains("Расскажи о своей рыбалке"));

        state.feed.composer.set_text("Хороший клёв!");
        let text = draw(&state, 120, 45);
        assert!(text.contains("Хороший клёв!"));
    }

    #[test]
    fn test_city_empty_state_then_wall() {
        let mut state = state_on(Screen::City);
        let text = draw(&state, 120, 45);
        assert!(text.contains("Выберите город"));
        assert!(text.contains("Санкт-Петербург"));

        state.walls.cities.set_query("Моск");
        state.walls.open_highlighted();
        let text = draw(&state, 120, 45);
        assert!(!text.contains("Выберите город"));
        assert!(text.contains("Московская область"));
        assert!(text.contains("#щука"));
        assert!(!text.contains("Казань"));
    }

    #[test]
    fn test_chat_room() {
        let mut state = state_on(Screen::Chat);
        state.chat.open_highlighted();
        let text = draw(&state, 120, 40);
        assert!(text.contains("Привет всем!"));
        assert!(text.contains("Алексей"));

        state.chat.composer.set_text("Я тоже еду");
        state.submit_compose();
        let text = draw(&state, 120, 40);
        assert!(text.contains("Я тоже еду"));
        assert!(text.contains("Вы"));
    }

    #[test]
    fn test_chat_scroll_back_stops_at_first_message() {
        let mut state = state_on(Screen::Chat);
        state.chat.open_highlighted();
        for n in 1..=6 {
            state.chat.composer.set_text(format!("Сообщение {n}"));
            state.submit_compose();
        }
        let latest = draw(&state, 100, 26);
        assert!(latest.contains("Сообщение 6"));

        for _ in 0..20 {
            state.chat.scroll_up(5);
        }
        let oldest = draw(&state, 100, 26);
        assert!(!oldest.contains("Сообщение 6"));

        // One step down moves the view right away
        state.chat.scroll_down(5);
        let moved = draw(&state, 100, 26);
        assert_ne!(oldest, moved);
    }

    #[test]
    fn test_newest_message_visible_on_short_terminal() {
        let mut state = state_on(Screen::Chat);
        state.chat.open_highlighted();
        state.chat.composer.set_text("Последнее слово");
        state.submit_compose();

        // One row of thread left between the header and the input
        let text = draw(&state, 100, 16);
        assert!(text.contains("Последнее слово"));
    }

    #[test]
    fn test_drawer_overlay() {
        let mut state = state_on(Screen::Feed);
        state.drawer.open(state.screen());
        let text = draw(&state, 100, 40);
        assert!(text.contains("Карта уловов"));
        assert!(text.contains("Поймано рыбы"));
        assert!(text.contains("89"));
    }

    #[test]
    fn test_profile_and_placeholder() {
        let text = draw(&state_on(Screen::Profile), 100, 40);
        assert!(text.contains("@yury_fisherman"));
        assert!(text.contains("Трофеев"));
        assert!(text.contains("Достижения"));

        let text = draw(&state_on(Screen::Leaderboard), 100, 40);
        assert!(text.contains("Раздел в разработке"));
    }

    #[test]
    fn test_friends_grid() {
        let mut state = state_on(Screen::Friends);
        state.friends.move_by(5);
        let text = draw(&state, 100, 30);
        assert!(text.contains("Дмитрий"));
        assert!(text.contains("Найти ещё рыбаков"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Москва", 10), "Москва");
        assert_eq!(truncate("Санкт-Петербург", 6), "Санкт…");
    }
}

//! # Rendering Module
//!
//! Styled terminal output from minijinja templates. Layout math (widths, truncation,
//! padding) stays in Rust because it needs Unicode-aware measuring; templates only
//! arrange the pieces and pick styles through the `style` filter.
//!
//! Every render produces the complete output for its view. Nothing is diffed.

use super::styles::{self, names};
use super::templates::{
    FULL_RECIPE_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, PAGINATION_TEMPLATE,
    TEXT_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::image::summarize;
use recipebox::model::Recipe;
use recipebox::pagination::PageInfo;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const FIELD_PREVIEW_WIDTH: usize = 80;

pub const NO_MATCHES: &str = "No matching recipes found.";

/// Where a recipe list is being shown. Only search results announce emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListContext {
    Listing,
    Search,
}

#[derive(Serialize)]
struct RecipeLine {
    id: String,
    title: String,
    padding: String,
    age: String,
    image: String,
    ingredients: String,
    instructions: String,
    actions: String,
}

#[derive(Serialize)]
struct ListData {
    recipes: Vec<RecipeLine>,
    empty: bool,
    search: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct PageControl {
    label: String,
    style: String,
}

#[derive(Serialize)]
struct PaginationData {
    pages: Vec<PageControl>,
    hint: String,
}

#[derive(Serialize)]
struct FullRecipeEntry {
    id: String,
    title: String,
    age: String,
    image: String,
    ingredients: String,
    instructions: String,
}

#[derive(Serialize)]
struct FullRecipeData {
    recipes: Vec<FullRecipeEntry>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render_template<S: Serialize>(
    template: &str,
    data: &S,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(console::colors_enabled);
    environment(use_color).render_str(template, data)
}

/// Renders a list of recipes, one entry per recipe with its actions.
pub fn render_recipe_list(recipes: &[Recipe], context: ListContext) -> String {
    render_recipe_list_internal(recipes, context, None)
}

fn render_recipe_list_internal(
    recipes: &[Recipe],
    context: ListContext,
    use_color: Option<bool>,
) -> String {
    let lines = recipes
        .iter()
        .map(|recipe| {
            let id = recipe.id.to_string();
            let age = format_age(recipe);
            let fixed_width = id.width() + 2 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed_width);
            let title = truncate_to_width(&recipe.title, available);
            let padding = " ".repeat(available.saturating_sub(title.width()));

            RecipeLine {
                actions: format!(
                    "view: recipebox view {id} · edit: recipebox edit {id} · delete: recipebox delete {id}"
                ),
                id,
                title,
                padding,
                age,
                image: describe_image(recipe),
                ingredients: preview(&recipe.ingredients),
                instructions: preview(&recipe.instructions),
            }
        })
        .collect::<Vec<_>>();

    let data = ListData {
        empty: lines.is_empty(),
        recipes: lines,
        search: context == ListContext::Search,
        empty_message: NO_MATCHES.to_string(),
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders one control per page, the current one highlighted.
pub fn render_pagination(page: &PageInfo) -> String {
    render_pagination_internal(page, None)
}

fn render_pagination_internal(page: &PageInfo, use_color: Option<bool>) -> String {
    let pages = (1..=page.count)
        .map(|n| {
            if n == page.current {
                PageControl {
                    label: format!("[{}]", n),
                    style: names::PAGE_CURRENT.to_string(),
                }
            } else {
                PageControl {
                    label: n.to_string(),
                    style: names::PAGE.to_string(),
                }
            }
        })
        .collect();

    let data = PaginationData {
        pages,
        hint: format!("{} recipes · recipebox list --page <n>", page.total),
    };

    render_template(PAGINATION_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders recipes in full, for the detail view.
pub fn render_full_recipes(recipes: &[Recipe]) -> String {
    render_full_recipes_internal(recipes, None)
}

fn render_full_recipes_internal(recipes: &[Recipe], use_color: Option<bool>) -> String {
    let entries = recipes
        .iter()
        .map(|recipe| FullRecipeEntry {
            id: recipe.id.to_string(),
            title: recipe.title.clone(),
            age: format_age(recipe).trim().to_string(),
            image: describe_image(recipe),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        })
        .collect();

    let data = FullRecipeData { recipes: entries };

    render_template(FULL_RECIPE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages with a style per level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Like [`print_messages`] but on stderr, for notices that must stay out of
/// piped output.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages_internal(messages, Some(console::colors_enabled_stderr()));
    if !output.is_empty() {
        eprint!("{}", output);
    }
}

fn describe_image(recipe: &Recipe) -> String {
    if !recipe.has_image() {
        return "no image".to_string();
    }
    match summarize(&recipe.image) {
        Some(summary) => format!("{}, {}", summary.media_type, format_size(summary.bytes)),
        None => "unreadable image".to_string(),
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Single-line preview of a free-text field.
fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    truncate_to_width(flat.trim(), FIELD_PREVIEW_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_age(recipe: &Recipe) -> String {
    match recipe.id.created_at() {
        Some(created) => format_time_ago(created),
        None => format!("{:>width$}", "", width = TIME_WIDTH),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

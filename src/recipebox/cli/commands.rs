//! # CLI Dispatch
//!
//! `run()` parses arguments, installs logging, builds the [`AppContext`] and hands
//! each subcommand to its `handle_*` function. Handlers call the API (through the
//! form controller for add and edit), then render the returned `CmdResult`.
//!
//! Business rules live in the library. Handlers only translate arguments in and
//! output out, so CLI tests check parsing and rendering, never catalog logic.

use super::logging::{init_subscriber, Verbosity};
use super::render::{
    eprint_messages, print_messages, render_full_recipes, render_pagination, render_recipe_list,
    render_text_list, ListContext,
};
use super::setup::{Cli, Commands, CoreCommands, DataCommands, MiscCommands, RecipeCommands};
use clap::Parser;
use recipebox::api::{CmdMessage, ConfigAction, RecipeApi};
use recipebox::error::{RecipeError, Result};
use recipebox::form::FormController;
use recipebox::init::{initialize, resolve_data_dir, HOME_ENV};
use recipebox::model::RecipeId;
use recipebox::store::fs::FileBackend;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: RecipeApi<FileBackend>,
    form: FormController,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                title,
                ingredients,
                instructions,
                image,
            } => handle_add(&mut ctx, title.join(" "), ingredients, instructions, image),
            CoreCommands::List { page } => handle_list(&mut ctx, page),
            CoreCommands::Search { query } => handle_search(&mut ctx, query.join(" ")),
        },
        Some(Commands::Recipe(cmd)) => match cmd {
            RecipeCommands::View { id } => handle_view(&mut ctx, id),
            RecipeCommands::Edit {
                id,
                title,
                ingredients,
                instructions,
                image,
            } => handle_edit(&mut ctx, id, title, ingredients, instructions, image),
            RecipeCommands::Delete { id } => handle_delete(&mut ctx, id),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { path } => handle_export(&mut ctx, path),
            DataCommands::Import { path } => handle_import(&mut ctx, path),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
        },
        None => handle_list(&mut ctx, 1),
    }
}

fn init_context() -> Result<AppContext> {
    let home = std::env::var(HOME_ENV).ok();
    let data_dir = resolve_data_dir(home.as_deref())?;
    debug!(target: "recipebox::cli", data_dir = %data_dir.display(), "Opening catalog");

    let ctx = initialize(&data_dir)?;
    eprint_messages(&ctx.messages);

    Ok(AppContext {
        api: ctx.api,
        form: FormController::new(),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    ingredients: String,
    instructions: String,
    image: Option<PathBuf>,
) -> Result<()> {
    let form = ctx.form.form_mut();
    form.title = title;
    form.ingredients = ingredients;
    form.instructions = instructions;
    form.image = image;

    let result = ctx.form.submit(&mut ctx.api)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, page: usize) -> Result<()> {
    let result = ctx.api.select_page(page)?;

    print!(
        "{}",
        render_recipe_list(&result.listed_recipes, ListContext::Listing)
    );
    if let Some(page) = &result.page {
        print!("{}", render_pagination(page));
        if page.total == 0 {
            print_messages(&[CmdMessage::info(
                "No recipes yet. Add one with: recipebox add <title>",
            )]);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    *ctx.form.search_query_mut() = query;
    let result = ctx.form.submit_search(&ctx.api)?;
    print!(
        "{}",
        render_recipe_list(&result.listed_recipes, ListContext::Search)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: RecipeId) -> Result<()> {
    let result = ctx.api.view_recipe(id)?;
    print!("{}", render_full_recipes(&result.listed_recipes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: RecipeId,
    title: Option<String>,
    ingredients: Option<String>,
    instructions: Option<String>,
    image: Option<PathBuf>,
) -> Result<()> {
    let started = ctx.form.begin_edit(&ctx.api, id);
    if started.listed_recipes.is_empty() {
        print_messages(&started.messages);
        return Ok(());
    }

    let form = ctx.form.form_mut();
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(ingredients) = ingredients {
        form.ingredients = ingredients;
    }
    if let Some(instructions) = instructions {
        form.instructions = instructions;
    }
    form.image = image;

    let result = ctx.form.submit(&mut ctx.api)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: RecipeId) -> Result<()> {
    let result = ctx.api.delete_recipe(id)?;
    print_messages(&result.messages);
    Ok(())
}

/// Without a path the JSON goes to stdout alone, so it can be piped.
fn handle_export(ctx: &mut AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export()?;
    let exported = result.exported.clone().unwrap_or_else(|| "[]".to_string());

    match path {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", exported)).map_err(RecipeError::Io)?;
            print_messages(&result.messages);
        }
        None => println!("{}", exported),
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;

    if key.is_none() {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

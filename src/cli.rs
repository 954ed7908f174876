// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{core::config::Settings, infra::t, reporting::Palette};

pub mod commands;

use commands::{export::ExportArgs, init::InitArgs, update::UpdateArgs, Context};

/// Pre-parses the command line arguments to find the UI language setting.
/// This allows i18n to be initialized before the full CLI is built, so help
/// text is localized. It looks for `--ui-lang <VALUE>` or `--ui-lang=<VALUE>`.
fn pre_parse_ui_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--ui-lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--ui-lang=").map(str::to_string))
}

/// `true` when `--no-color` appears on the command line. Used for output that
/// happens outside a parsed command, such as the final error line.
pub fn no_color_requested() -> bool {
    env::args().any(|arg| arg == "--no-color")
}

fn language_arg(locale: &str) -> Arg {
    Arg::new("language")
        .short('l')
        .long("language")
        .help(t!("arg_language", locale = locale).to_string())
        .value_name("CODE")
        .required(true)
        .action(ArgAction::Set)
}

fn catalog_arg(locale: &str) -> Arg {
    Arg::new("xcstrings")
        .short('x')
        .long("xcstrings")
        .help(t!("arg_xcstrings", locale = locale).to_string())
        .value_name("XCSTRINGS")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("xcstrings-sync")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("ui-lang")
                .long("ui-lang")
                .help(t!("cli_ui_lang", locale = locale).to_string())
                .value_name("LOCALE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help(t!("cli_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help(t!("cli_no_color", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("export")
                .about(t!("cmd_export_about", locale = locale).to_string())
                .arg(language_arg(locale))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(catalog_arg(locale))
                .arg(
                    Arg::new("include-keys")
                        .short('k')
                        .long("include-keys")
                        .help(t!("arg_include_keys", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("update")
                .about(t!("cmd_update_about", locale = locale).to_string())
                .arg(language_arg(locale))
                .arg(
                    Arg::new("csv")
                        .short('c')
                        .long("csv")
                        .help(t!("arg_csv", locale = locale).to_string())
                        .value_name("CSV")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(catalog_arg(locale))
                .arg(
                    Arg::new("dry-run")
                        .short('d')
                        .long("dry-run")
                        .help(t!("arg_dry_run", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help(t!("arg_verbose", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_init_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value(crate::core::config::DEFAULT_SETTINGS_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let ui_language = pre_parse_ui_language();
    let locale = crate::init(ui_language.as_deref());

    let matches = build_cli(&locale).get_matches();

    // `init` writes the settings file, so it must not depend on reading one.
    if let Some(("init", init_matches)) = matches.subcommand() {
        let palette = Palette::for_stdout(matches.get_flag("no-color"));
        return commands::init::execute(InitArgs::from_matches(init_matches), palette, &locale);
    }

    let context = build_context(&matches, ui_language.is_some(), locale)?;

    match matches.subcommand() {
        Some(("export", export_matches)) => {
            commands::export::execute(&context, ExportArgs::from_matches(export_matches))?;
        }
        Some(("update", update_matches)) => {
            commands::update::execute(&context, UpdateArgs::from_matches(update_matches))?;
        }
        _ => {
            // `subcommand_required` makes clap print help and exit before this point.
        }
    }
    Ok(())
}

/// Loads settings and settles the locale and palette for the run.
/// A `--ui-lang` flag wins over the settings file's `language`.
fn build_context(matches: &ArgMatches, ui_lang_given: bool, locale: String) -> Result<Context> {
    let base_dir = env::current_dir()
        .with_context(|| t!("cwd_unavailable", locale = &locale).to_string())?;
    let config_path = matches.get_one::<PathBuf>("config");
    let settings = Settings::load(config_path.map(PathBuf::as_path), &base_dir)
        .with_context(|| t!("settings_load_failed", locale = &locale).to_string())?;

    let locale = match (&settings.language, ui_lang_given) {
        (Some(language), false) => crate::init(Some(language.as_str())),
        _ => locale,
    };

    Ok(Context {
        palette: Palette::for_stdout(matches.get_flag("no-color")),
        locale,
        settings,
        base_dir,
    })
}

//! prompt-forge's main application entry point and orchestration logic.
//! Handles command-line argument parsing and runs the
//! load, resolve, render, simulate and output pipeline.

use std::borrow::Cow;

use chrono::Local;
use log::debug;
use prompt_forge::{
    cli::{get_args, Args},
    error::{default_error_handler, Result, INTERRUPTED_EXIT_CODE},
    history::{append_history, default_history_path},
    loader::{load_template, TemplateSource},
    logger::init_logger,
    output::{estimate_tokens, format_output},
    parser::{load_values_file, parse_var_args, resolve_values},
    prompt::{DialoguerPrompter, Prompter},
    renderer::{MarkerRenderer, TemplateRenderer, ValueMap},
    rules::RuleSet,
    template::{describe_variables, extract_variables},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(e) = ctrlc::set_handler(|| std::process::exit(INTERRUPTED_EXIT_CODE)) {
        debug!("Failed to install interrupt handler: {e}");
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template from a file, inline text or stdin
/// 2. Extracts variables (and stops here for `--check`)
/// 3. Resolves variable values
/// 4. Renders the template (and stops here for `--dry-run`)
/// 5. Simulates a response when asked
/// 6. Prints the output and appends to the history file when asked
fn run(args: Args) -> Result<()> {
    let source = TemplateSource::from_args(args.template, args.inline_template)?;
    let template = load_template(source)?;

    let variables = extract_variables(&template);
    debug!("Extracted {} variable(s)", variables.len());

    if args.check {
        println!("{}", describe_variables(&variables));
        return Ok(());
    }

    let file_values = match &args.vars_file {
        Some(path) => load_values_file(path)?,
        None => ValueMap::new(),
    };
    let cli_values = parse_var_args(&args.vars)?;

    let prompter = DialoguerPrompter::new();
    let interactive = args.interactive.then_some(&prompter as &dyn Prompter);
    let resolution = resolve_values(&variables, file_values, cli_values, interactive)?;
    if !resolution.unused.is_empty() {
        eprintln!("Warning: Unused: {}", resolution.unused.join(", "));
    }

    let engine = MarkerRenderer::new();
    let rendered = engine.render(&template, &resolution.values);

    if args.dry_run {
        println!("=== DRY RUN ===\n{rendered}");
        return Ok(());
    }

    let response = if args.simulate {
        let rules = match &args.rules {
            Some(path) => Cow::Owned(RuleSet::from_file(path)?),
            None => Cow::Borrowed(RuleSet::builtin()),
        };
        debug!("Simulating response with {} rule(s)", rules.len());
        Some(rules.respond(&rendered, &resolution.values))
    } else {
        None
    };

    let tokens = args.show_tokens.then(|| estimate_tokens(&rendered));
    let now = Local::now();
    println!("{}", format_output(&rendered, response.as_deref(), tokens, args.format, now)?);

    if let Some(save) = args.save {
        let path = match save {
            Some(path) => path,
            None => default_history_path()?,
        };
        let written = append_history(path, &rendered, response.as_deref(), now)?;
        eprintln!("Saved to {}", written.display());
    }

    Ok(())
}

//! Drives the wizard steps from command line arguments.
//!
//! Each step goes through the same use case a view would call, so the
//! store sees the same writes in the same order. Slot changes are printed
//! by plain store subscribers.

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::{info, info_span, warn, Instrument};
use vc_app::usecases::WizardSelection;
use vc_app::{AppDeps, UseCases};
use vc_core::{AppConfig, ConfigStore, VerifyResult};

use super::config::resolve_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::adapters::DirsAppDirs;
use crate::cli::CliArgs;

/// Entry point of the `vscch` binary.
pub async fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), &DirsAppDirs::new())?;
    let log_dir = args.log_path.as_deref().or(config.log_dir.as_deref());
    init_tracing_subscriber(log_dir, args.log_level())?;
    config
        .build
        .validate()
        .context("Invalid build configuration")?;

    let deps = wire_dependencies(&config, &args);
    if !args.json {
        print_slot_changes(&deps.store);
    }

    let selection = run_wizard(&deps, &config, &args).await?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &selection)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "args: {}", selection.options.args.join(" "))?;
    }
    Ok(())
}

/// Fill every slot, finalize the options and mark the wizard complete.
pub async fn run_wizard(
    deps: &AppDeps,
    config: &AppConfig,
    args: &CliArgs,
) -> anyhow::Result<WizardSelection> {
    let span = info_span!("wizard.run", setup = %args.setup);

    async {
        let usecases = UseCases::new(deps);

        choose_editor(&usecases, args).await?;
        choose_compiler(&usecases, args).await?;
        choose_workspace(&usecases, args)?;
        choose_options(&usecases, config, args)?;

        let selection = usecases
            .collect_selection()
            .execute()
            .context("Wizard state is incomplete")?;
        usecases.mark_complete().execute();
        info!("Wizard completed");
        Ok(selection)
    }
    .instrument(span)
    .await
}

async fn choose_editor(usecases: &UseCases<'_>, args: &CliArgs) -> anyhow::Result<()> {
    match &args.editor {
        Some(path) => {
            let result = usecases.select_editor().execute(path).await;
            ensure_accepted("editor", result)
        }
        None => match usecases.detect_editor().execute().await? {
            Some(_) => Ok(()),
            None => bail!("No editor found on PATH, pass --editor"),
        },
    }
}

async fn choose_compiler(usecases: &UseCases<'_>, args: &CliArgs) -> anyhow::Result<()> {
    let compiler = match &args.compiler_path {
        Some(path) => {
            let result = usecases
                .verify_compiler()
                .execute(args.setup, path)
                .await;
            match result {
                VerifyResult::Err { message } => bail!("compiler rejected: {message}"),
                other => other
                    .into_value()
                    .context("compiler verification returned no compiler")?,
            }
        }
        None => usecases
            .scan_compilers()
            .execute(args.setup)
            .await?
            .into_iter()
            .next()
            .with_context(|| {
                format!(
                    "No {} compiler found, pass --compiler-path and --compiler-version",
                    args.setup
                )
            })?,
    };
    usecases.select_compiler().execute(compiler);
    Ok(())
}

fn choose_workspace(usecases: &UseCases<'_>, args: &CliArgs) -> anyhow::Result<()> {
    let path = match &args.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir()
            .context("Failed to read current directory")?
            .to_string_lossy()
            .into_owned(),
    };
    ensure_accepted("workspace", usecases.select_workspace().execute(&path))
}

/// Apply the preset and the command line switches, then switch off what
/// the selected compiler cannot use.
fn choose_options(
    usecases: &UseCases<'_>,
    config: &AppConfig,
    args: &CliArgs,
) -> anyhow::Result<()> {
    let kind = args.profile.unwrap_or(config.profile);
    usecases.apply_profile().execute(kind, args.args.iter().cloned());

    let enabled = usecases.scan_enabled_options().execute()?;
    usecases.update_options().execute(|options| {
        args.apply_overrides(options);
        options.use_gnu &= enabled.use_gnu_enabled;
        options.pedantic &= enabled.pedantic_enabled;
        options.acp_output &= enabled.acp_output_enabled;
        options.base.ascii_check &= enabled.ascii_check_enabled;
        options.base.add_to_path &= enabled.add_to_path_enabled;
        options.base.desktop_shortcut &= enabled.desktop_shortcut_enabled;
    })?;
    Ok(())
}

/// `Err` aborts the run; `Warn` is logged and the value was still stored.
fn ensure_accepted(step: &str, result: VerifyResult) -> anyhow::Result<()> {
    match result {
        VerifyResult::Ok { .. } => Ok(()),
        VerifyResult::Warn { message } => {
            warn!(step, reason = %message, "Accepted with warning");
            Ok(())
        }
        VerifyResult::Err { message } => bail!("{step} rejected: {message}"),
    }
}

/// One line per slot write. The initial absent values are not printed.
fn print_slot_changes(store: &Arc<ConfigStore>) {
    store.editor().subscribe(|value: Option<&String>| {
        if let Some(path) = value {
            println!("editor: {path}");
        }
    });
    store.compiler().subscribe(|value| {
        if let Some(c) = value {
            println!("compiler: {} {} ({})", c.setup, c.version, c.path);
        }
    });
    store.workspace().subscribe(|value: Option<&String>| {
        if let Some(path) = value {
            println!("workspace: {path}");
        }
    });
    store.options().subscribe(|value| {
        if let Some(options) = value {
            match serde_json::to_string(options) {
                Ok(json) => println!("options: {json}"),
                Err(err) => warn!(error = %err, "Failed to render options"),
            }
        }
    });
    store.done().subscribe(|value| {
        if let Some(done) = value {
            println!("done: {done}");
        }
    });
}

//! `generate` subcommand.
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Generate the man page for the main argument structure, plus pages for
/// every subcommand, into the output directory if specified, else the
/// current directory.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the output directory or a page file
/// could not be created.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let output_dir: PathBuf = output_dir.unwrap_or(
        std::env::current_dir().context("Opening current directory")?,
    );

    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    render_page(cmd.clone(), &output_dir, cmd.get_name())?;
    generate_subcommand_man_pages(cmd, &output_dir, cmd.get_name())?;

    Ok(())
}

/// Generate subcommand Man pages recursively, prefixing each page name
/// with its parent chain (`jspan-generate-man.1` style).
fn generate_subcommand_man_pages(
    cmd: &clap::Command,
    output_dir: &Path,
    prefix: &str,
) -> Result<()> {
    for subcmd in cmd.get_subcommands() {
        let prefixed_name = format!("{}-{}", prefix, subcmd.get_name());

        // Rename the Command so clap_mangen uses the prefixed name in
        // NAME, SYNOPSIS, and SEE ALSO. The leaked &'static str is fine
        // since man page generation is a one-shot operation.
        let leaked_name: &'static str =
            Box::leak(prefixed_name.clone().into_boxed_str());
        let renamed = subcmd
            .clone()
            .name(leaked_name)
            .disable_help_subcommand(true);

        render_page(renamed, output_dir, &prefixed_name)?;
        if subcmd.has_subcommands() {
            generate_subcommand_man_pages(subcmd, output_dir, &prefixed_name)?;
        }
    }

    Ok(())
}

/// Render one command's man page to `<output_dir>/<page_name>.1`.
fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    page_name: &str,
) -> Result<()> {
    let page_path = output_dir.join(format!("{page_name}.1"));
    let mut page_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&page_path)
        .with_context(|| format!("failed to create {}", page_path.display()))?;

    clap_mangen::Man::new(cmd).render(&mut page_file)?;
    println!("Generated: {}", page_path.display());
    Ok(())
}

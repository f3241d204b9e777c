use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use console::style;
use kernelstrip::Outcome;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
    about = "remove the body of a benchmark kernel and turn it into a function declaration",
)]
pub struct Options {
    #[clap(help = "C source file containing the kernel (rewritten in place)")]
    pub filename: PathBuf,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::parse();
    let strip_options = kernelstrip::Options::from_env();
    log::debug!("kernel marker: {:?}", strip_options.marker);

    let path = &options.filename;
    let outcome = kernelstrip::remove_body(path, &strip_options)
        .wrap_err_with(|| format!("failed to remove kernel body from {}", path.display()))?;

    match outcome {
        Outcome::Stripped {
            span,
            removed_lines,
        } => {
            println!(
                "{}",
                style(format!(
                    "removed kernel body from {} (lines {}-{}, {} lines)",
                    path.display(),
                    span.start + 1,
                    span.end + 1,
                    removed_lines,
                ))
                .green()
            );
        }
        Outcome::Unchanged => {
            println!(
                "{}",
                style(format!("{} already declares the kernel", path.display())).yellow()
            );
        }
    }
    Ok(())
}

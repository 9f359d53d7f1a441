//! somato — fetches a body-composition assessment payload and writes a
//! styled, self-contained HTML report.

use std::path::PathBuf;

use eyre::{Result, WrapErr, eyre};
use somato_core::locator::{DEFAULT_API_BASE, ReportLocator};
use somato_report::render::render_report;
use somato_report::styles::ReportStyles;

mod fetch;

const USAGE: &str = "usage: somato <report-url-or-id> [--out FILE] [--logo FILE] [--base-url URL]";

struct Args {
    input: String,
    out: Option<PathBuf>,
    logo: Option<PathBuf>,
    base_url: String,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut out = None;
    let mut logo = None;
    let mut base_url = DEFAULT_API_BASE.to_string();

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--out" => {
                out = Some(PathBuf::from(
                    argv.next().ok_or_else(|| eyre!("--out needs a path\n{USAGE}"))?,
                ));
            }
            "--logo" => {
                logo = Some(PathBuf::from(
                    argv.next().ok_or_else(|| eyre!("--logo needs a path\n{USAGE}"))?,
                ));
            }
            "--base-url" => {
                base_url = argv
                    .next()
                    .ok_or_else(|| eyre!("--base-url needs a value\n{USAGE}"))?;
            }
            other if other.starts_with("--") => {
                return Err(eyre!("unknown option {other}\n{USAGE}"));
            }
            positional => {
                if input.replace(positional.to_string()).is_some() {
                    return Err(eyre!("more than one report identifier given\n{USAGE}"));
                }
            }
        }
    }

    Ok(Args {
        input: input.ok_or_else(|| eyre!("missing report identifier\n{USAGE}"))?,
        out,
        logo,
        base_url,
    })
}

fn load_styles(logo: Option<&PathBuf>) -> ReportStyles {
    let mut styles = ReportStyles::default();
    match logo {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => styles.logo_png = Some(bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "logo unreadable, falling back to clinic name");
            }
        },
        // No --logo: pick up a logo.png next to the invocation if present.
        None => {
            if let Ok(bytes) = std::fs::read("logo.png") {
                styles.logo_png = Some(bytes);
            }
        }
    }
    styles
}

fn output_path(out: Option<PathBuf>, payload_name: Option<&str>, id: &str) -> PathBuf {
    out.unwrap_or_else(|| {
        let stem: String = payload_name
            .unwrap_or(id)
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        PathBuf::from(format!("Relatorio_{stem}.html"))
    })
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    let locator = ReportLocator::parse(&args.input)?;

    let agent = fetch::agent();
    let payload = fetch::fetch_report(&agent, &locator.api_url(&args.base_url))?;
    tracing::info!(
        assessments = payload.avaliacoes.len(),
        "payload decoded"
    );

    let styles = load_styles(args.logo.as_ref());
    let html = render_report(&payload, &styles)?;

    let out = output_path(args.out, payload.paciente.nome.as_deref(), locator.id());
    std::fs::write(&out, &html)
        .wrap_err_with(|| format!("failed to write report to {}", out.display()))?;

    println!("{}", out.display());
    Ok(())
}

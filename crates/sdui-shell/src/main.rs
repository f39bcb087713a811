//! sdui - render and submit server-driven UI documents from the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sdui_engine::{Config, Document, Engine, HttpTransport, Page, Url};

#[derive(Parser)]
#[command(name = "sdui", version, about = "Server-driven UI engine shell")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a document from a server and render it to HTML
    Fetch {
        /// Base origin, e.g. http://localhost:3000
        base: Url,
        /// Document endpoint path
        #[arg(long, default_value = "/api/config")]
        path: String,
    },
    /// Render a local document file to HTML
    Render {
        /// Path to a JSON document
        file: PathBuf,
    },
    /// Submit a form from a local document against a server
    Submit {
        /// Path to a JSON document
        file: PathBuf,
        /// Base origin the submission posts to
        base: Url,
        /// Id of the form to submit
        #[arg(long, default_value = "form")]
        form: String,
        /// Field values as id=value pairs
        #[arg(long = "set", value_parser = parse_field_value)]
        values: Vec<(String, String)>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Fetch { base, path } => fetch(base, path),
        Commands::Render { file } => render(&file),
        Commands::Submit {
            file,
            base,
            form,
            values,
        } => submit(&file, base, &form, values),
    }
}

fn fetch(base: Url, path: String) -> Result<()> {
    let transport = HttpTransport::new(base).context("building HTTP transport")?;
    let engine = Engine::with_config(transport, Config::new(path));
    let page = engine.load().context("loading document")?;
    println!("{}", page.render_html());
    Ok(())
}

fn render(file: &Path) -> Result<()> {
    let page = Page::from_document(read_document(file)?);
    println!("{}", page.render_html());
    Ok(())
}

fn submit(file: &Path, base: Url, form: &str, values: Vec<(String, String)>) -> Result<()> {
    let mut page = Page::from_document(read_document(file)?);
    let transport = HttpTransport::new(base).context("building HTTP transport")?;
    let engine = Engine::new(transport);

    for (field, value) in values {
        page.set_value(form, &field, value);
    }
    if !engine.submit(&mut page, form) {
        anyhow::bail!("document has no form with id {form:?}");
    }
    match page.form(form).and_then(|boundary| boundary.notice()) {
        Some(notice) if notice.is_error() => anyhow::bail!("{}", notice.text()),
        Some(notice) => println!("{}", notice.text()),
        None => {}
    }
    Ok(())
}

fn read_document(file: &Path) -> Result<Document> {
    let text =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    Document::from_json(&text).context("decoding document")
}

fn parse_field_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => {
            Ok((field.to_string(), value.to_string()))
        }
        _ => Err(format!("expected id=value, got {raw:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_value() {
        assert_eq!(
            parse_field_value("firstName=John"),
            Ok(("firstName".to_string(), "John".to_string()))
        );
        assert_eq!(
            parse_field_value("email="),
            Ok(("email".to_string(), String::new()))
        );
        assert_eq!(
            parse_field_value("country=us=east"),
            Ok(("country".to_string(), "us=east".to_string()))
        );
        assert!(parse_field_value("novalue").is_err());
        assert!(parse_field_value("=x").is_err());
    }
}

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use advisor_core::{InputFormat, Preferences, SkinType, assess, parse_observation, uv};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Confirm, Select};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "advisor",
    version,
    about = "Umbrella, clothing and UV advice from a weather observation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store default skin type, input format and output style.
    Configure,

    /// Show umbrella, clothing and UV advice for an observation document.
    Show {
        /// Observation JSON file; reads stdin when omitted or "-".
        file: Option<PathBuf>,

        /// Document layout; falls back to the configured one.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// UV index to use instead of the reading in the document.
        #[arg(long, allow_negative_numbers = true)]
        uv: Option<f64>,

        /// Fitzpatrick skin type (1-6) for personalised UV advice.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        skin_type: Option<u8>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show UV advice for a single index value.
    Uv {
        /// UV index; negative means unknown.
        #[arg(allow_negative_numbers = true)]
        index: f64,

        /// Fitzpatrick skin type (1-6) for personalised UV advice.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        skin_type: Option<u8>,

        /// Print the advice as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Native,
    Openweather,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Native => InputFormat::Native,
            FormatArg::Openweather => InputFormat::OpenWeather,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let prefs = Preferences::load()?;

        match self.command {
            Command::Configure => configure(prefs),
            Command::Show {
                file,
                format,
                uv,
                skin_type,
                json,
            } => {
                let format = match format {
                    Some(arg) => arg.into(),
                    None => prefs.input_format()?,
                };
                let skin_type = resolve_skin_type(skin_type, &prefs)?;

                let text = read_input(file.as_deref())?;
                let observation = parse_observation(&text, format)
                    .with_context(|| format!("Failed to read {format} observation"))?;

                let report = assess(&observation, uv, skin_type);

                if json || prefs.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", output::render_report(&report));
                }
                Ok(())
            }
            Command::Uv {
                index,
                skin_type,
                json,
            } => {
                let skin_type = resolve_skin_type(skin_type, &prefs)?;
                let advice = uv::classify(index, skin_type);
                let protection = uv::protection_items(index);

                if json || prefs.json {
                    let body = serde_json::json!({ "uv": advice, "protection": protection });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                } else {
                    print!("{}", output::render_uv(&advice, Some(&protection)));
                }
                Ok(())
            }
        }
    }
}

/// Command-line value first, then the stored preference.
fn resolve_skin_type(flag: Option<u8>, prefs: &Preferences) -> Result<Option<SkinType>> {
    match flag {
        Some(value) => Ok(Some(SkinType::new(value)?)),
        None => prefs.skin_type(),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading observation file");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read observation file: {}", path.display()))
        }
        _ => {
            tracing::debug!("reading observation from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read observation from stdin")?;
            Ok(text)
        }
    }
}

const SKIN_CHOICES: [&str; 7] = [
    "Not set (generic advice)",
    "1 - very fair, always burns",
    "2 - fair, burns easily",
    "3 - medium, sometimes burns",
    "4 - olive, rarely burns",
    "5 - brown, very rarely burns",
    "6 - dark, never burns",
];

fn configure(mut prefs: Preferences) -> Result<()> {
    let current_skin = prefs.skin_type.map(usize::from).unwrap_or(0);
    let skin = Select::new("Skin type (Fitzpatrick scale):", SKIN_CHOICES.to_vec())
        .with_starting_cursor(current_skin.min(SKIN_CHOICES.len() - 1))
        .raw_prompt()
        .context("Skin type prompt was cancelled")?;

    let skin_type = match u8::try_from(skin.index)? {
        0 => None,
        value => Some(SkinType::new(value)?),
    };
    prefs.set_skin_type(skin_type);

    let formats = InputFormat::all().to_vec();
    let current_format = prefs.input_format().unwrap_or_default();
    let format = Select::new("Default observation format:", formats)
        .with_starting_cursor(
            InputFormat::all().iter().position(|f| *f == current_format).unwrap_or(0),
        )
        .prompt()
        .context("Format prompt was cancelled")?;
    prefs.set_input_format(format);

    prefs.json = Confirm::new("Print JSON by default?")
        .with_default(prefs.json)
        .prompt()
        .context("Output prompt was cancelled")?;

    let path = prefs.save()?;
    println!("Saved preferences to {}", path.display());
    Ok(())
}

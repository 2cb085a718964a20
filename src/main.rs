//! # Estampa CLI
//!
//! Command-line interface for rendering ESC/P print jobs.
//!
//! ## Usage
//!
//! ```bash
//! # List the placeholders a template needs
//! estampa placeholders invoice.json
//!
//! # Render a job to stdout
//! estampa render invoice.json --data values.json
//!
//! # Render straight to the printer device
//! estampa render invoice.json --data values.json --output /dev/usb/lp0
//! ```

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use estampa::{
    EstampaError,
    template::{Template, values_from_json},
};

/// Estampa - ESC/P template renderer for dot-matrix printers
#[derive(Parser, Debug)]
#[command(name = "estampa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill a template and write the printer payload
    Render {
        /// JSON template file
        template: PathBuf,

        /// JSON object with placeholder values
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Output file or device (stdout when omitted)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the placeholders a template needs values for
    Placeholders {
        /// JSON template file
        template: PathBuf,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EstampaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            data,
            output,
        } => {
            let template = Template::from_json(&fs::read_to_string(&template)?)?;
            let values = match data {
                Some(path) => values_from_json(&fs::read_to_string(path)?)?,
                None => HashMap::new(),
            };

            let report = template.fill(&values)?;
            let payload = report.render()?;

            match output {
                Some(path) => {
                    fs::write(&path, &payload)?;
                    eprintln!(
                        "Wrote {} page(s), {} bytes to {}",
                        report.pages().len(),
                        payload.len(),
                        path.display()
                    );
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&payload)?;
                    stdout.flush()?;
                }
            }
            Ok(())
        }

        Commands::Placeholders { template } => {
            let template = Template::from_json(&fs::read_to_string(&template)?)?;
            for name in template.placeholders() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

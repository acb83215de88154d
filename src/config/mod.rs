pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str =
    "https://projects.eclipse.org/api/projects?working_group=sdv&pagesize=90000";

#[derive(Debug, Clone, Parser)]
#[command(name = "landscape-gen")]
#[command(about = "Generate a landscape2 data.yml from the Eclipse SDV project listing")]
pub struct CliConfig {
    /// Local JSON file with the project list; fetched from the API when omitted
    #[arg(long)]
    pub input: Option<String>,

    /// Output YAML file
    #[arg(long, default_value = "data.yml")]
    pub output: String,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Download logos into this directory (e.g. "logos") instead of keeping URLs
    #[arg(long)]
    pub logo_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn input_file(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_file(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("output", &self.output)?;
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(logo_dir) = &self.logo_dir {
            validate_path("logo_dir", logo_dir)?;
        }
        Ok(())
    }
}

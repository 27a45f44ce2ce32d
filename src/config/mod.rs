#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "region-splitter")]
#[command(about = "Splits a member export into per-region spreadsheet files")]
pub struct CliConfig {
    #[arg(long, help = "Member export CSV (must contain a 'Zip' column)")]
    pub members_file: String,

    #[arg(long, help = "Region zipcodes workbook (.xls or .xlsx)")]
    pub regions_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "NYSAND_Member_Files.zip")]
    pub archive_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn members_file(&self) -> &str {
        &self.members_file
    }

    fn regions_file(&self) -> &str {
        &self.regions_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("members_file", &self.members_file)?;
        validate_file_extension("members_file", &self.members_file, &["csv"])?;
        validate_path("regions_file", &self.regions_file)?;
        validate_file_extension("regions_file", &self.regions_file, &["xls", "xlsx"])?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_non_empty_string("archive_name", &self.archive_name)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            members_file: "members.csv".to_string(),
            regions_file: "regions.xlsx".to_string(),
            output_path: "./output".to_string(),
            archive_name: "NYSAND_Member_Files.zip".to_string(),
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_extensions() {
        let mut bad_members = config();
        bad_members.members_file = "members.xlsx".to_string();
        assert!(bad_members.validate().is_err());

        let mut bad_regions = config();
        bad_regions.regions_file = "regions.csv".to_string();
        assert!(bad_regions.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_archive_name() {
        let mut bad = config();
        bad.archive_name = "  ".to_string();
        assert!(bad.validate().is_err());
    }
}

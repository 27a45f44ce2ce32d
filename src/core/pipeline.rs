use crate::core::partition::{merge_and_partition, partition_file_name, UNMATCHED_FILE_NAME};
use crate::core::region_map::{build_region_map, parse_region_workbook};
use crate::core::roster::parse_roster;
use crate::core::xlsx::write_worksheet;
use crate::core::{ConfigProvider, Pipeline, SourceData, SplitResult, Storage};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

pub struct RegionSplitPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RegionSplitPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RegionSplitPipeline<S, C> {
    async fn extract(&self) -> Result<SourceData> {
        tracing::debug!("Reading member export from: {}", self.config.members_file());
        let roster_bytes = self.storage.read_file(self.config.members_file()).await?;
        let roster = parse_roster(&roster_bytes)?;

        tracing::debug!("Reading region workbook from: {}", self.config.regions_file());
        let workbook_bytes = self.storage.read_file(self.config.regions_file()).await?;
        let sheets = parse_region_workbook(&workbook_bytes)?;

        Ok(SourceData { roster, sheets })
    }

    async fn transform(&self, source: SourceData) -> Result<SplitResult> {
        let map = build_region_map(&source.sheets)?;
        tracing::debug!(
            "Region map holds {} entries from {} sheets",
            map.len(),
            source.sheets.len()
        );

        let result = merge_and_partition(&source.roster, &map);
        tracing::debug!(
            "Partitioned {} roster records into {} regions plus {} unmatched rows",
            source.roster.records.len(),
            result.regions.len(),
            result.unmatched.len()
        );

        Ok(result)
    }

    async fn load(&self, result: SplitResult) -> Result<String> {
        tracing::debug!(
            "Creating archive with {} files",
            result.regions.len() + 1
        );

        // 在記憶體中組裝ZIP文件
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for group in &result.regions {
                let file_name = partition_file_name(&group.region);
                let sheet = write_worksheet(&result.headers, &group.rows)?;
                zip.start_file::<_, ()>(file_name.as_str(), FileOptions::default())?;
                zip.write_all(&sheet)?;
            }

            // 未匹配的成員永遠有自己的文件，即使是空的
            let unmatched_sheet = write_worksheet(&result.headers, &result.unmatched)?;
            zip.start_file::<_, ()>(UNMATCHED_FILE_NAME, FileOptions::default())?;
            zip.write_all(&unmatched_sheet)?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        let output_path = Path::new(self.config.output_path())
            .join(self.config.archive_name())
            .to_string_lossy()
            .into_owned();

        tracing::debug!("Writing archive ({} bytes) to {}", zip_data.len(), output_path);
        self.storage.write_file(&output_path, &zip_data).await?;

        Ok(output_path)
    }
}

use crate::domain::{Credit, RawCategories, RunSummary, Storage};
use crate::error::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    categories_file: PathBuf,
    output_file: PathBuf,
    summary_file: PathBuf,
}

impl FileSystemStore {
    pub fn new(
        categories_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        summary_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            categories_file: categories_file.into(),
            output_file: output_file.into(),
            summary_file: summary_file.into(),
        }
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Writes credit rows with every field quoted and `\n` line endings.
pub fn write_credits<W: Write>(writer: W, credits: &[Credit]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for credit in credits {
        writer.write_record(credit.to_record())?;
    }

    writer.flush()?;
    Ok(())
}

impl Storage for FileSystemStore {
    fn load_categories(&self) -> Result<RawCategories> {
        info!("Reading categories from {:?}", self.categories_file);
        let file = File::open(&self.categories_file)?;
        let categories: RawCategories = serde_json::from_reader(BufReader::new(file))?;
        info!("Loaded {} categories", categories.len());
        Ok(categories)
    }

    fn save_credits(&self, credits: &[Credit]) -> Result<()> {
        let file = File::create(&self.output_file)?;
        write_credits(BufWriter::new(file), credits)?;
        info!("Wrote {} credit rows to {:?}", credits.len(), self.output_file);
        Ok(())
    }

    fn save_summary(&self, summary: &RunSummary) -> Result<()> {
        self.write_json_file(&self.summary_file, summary)
    }
}

//! Passport export: render, serialize, name

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use passport_render::{render_with_report, RenderReport};
use passport_sheet::Worksheet;
use passport_template::{Passport, Template};
use passport_xlsx::{export_file_name, ExportOptions, XlsxWriter};

use crate::error::ExportResult;

static DEFAULT_EXPORTER: Lazy<PassportExporter> = Lazy::new(|| {
    let exporter = PassportExporter::from_env();
    log::debug!("default exporter initialized: {:?}", exporter.options());
    exporter
});

/// Process-wide exporter configured from the environment
///
/// Built on first use; environment overrides are read exactly once and
/// concurrent first callers wait for the same initialization.
pub fn default_exporter() -> &'static PassportExporter {
    &DEFAULT_EXPORTER
}

/// An exported workbook held in memory
#[derive(Debug, Clone)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub report: RenderReport,
}

/// An exported workbook written to disk
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub report: RenderReport,
}

/// Renders passports and writes them as XLSX workbooks
#[derive(Debug, Clone, Default)]
pub struct PassportExporter {
    options: ExportOptions,
}

impl PassportExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Exporter with `PASSPORT_*` environment overrides applied
    pub fn from_env() -> Self {
        Self::new(ExportOptions::from_env())
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render without serializing
    pub fn render(
        &self,
        template: &Template,
        passport: &Passport,
    ) -> ExportResult<(Worksheet, RenderReport)> {
        Ok(render_with_report(template, passport)?)
    }

    /// File name for a passport: `{prefix}{assetTag}_v{version}.xlsx`
    pub fn file_name(&self, passport: &Passport) -> String {
        export_file_name(
            &self.options.file_name_prefix,
            &passport.asset_tag,
            passport.version,
        )
    }

    /// Render and serialize into memory
    pub fn export_bytes(&self, template: &Template, passport: &Passport) -> ExportResult<Export> {
        let (sheet, report) = self.render(template, passport)?;
        let bytes = XlsxWriter::write_bytes(&sheet, &self.options)?;

        if !report.is_clean() {
            log::info!(
                "passport '{}' exported with {} skipped layout items",
                passport.asset_tag,
                report.skipped.len()
            );
        }

        Ok(Export {
            file_name: self.file_name(passport),
            bytes,
            report,
        })
    }

    /// Render and write to an explicit path
    pub fn export_to_path<P: AsRef<Path>>(
        &self,
        template: &Template,
        passport: &Passport,
        path: P,
    ) -> ExportResult<RenderReport> {
        let export = self.export_bytes(template, passport)?;
        std::fs::write(path.as_ref(), &export.bytes)?;
        log::debug!("wrote {}", path.as_ref().display());
        Ok(export.report)
    }

    /// Render and write into a directory under the generated file name
    pub fn export_to_dir<P: AsRef<Path>>(
        &self,
        template: &Template,
        passport: &Passport,
        dir: P,
    ) -> ExportResult<ExportedFile> {
        let path = dir.as_ref().join(self.file_name(passport));
        let report = self.export_to_path(template, passport, &path)?;
        Ok(ExportedFile { path, report })
    }
}

/// Extension trait for Template to export passports with the default exporter
pub trait TemplateExt {
    /// Render a passport onto a fresh worksheet
    fn render_passport(&self, passport: &Passport) -> ExportResult<Worksheet>;

    /// Export a passport into a directory
    fn export_passport<P: AsRef<Path>>(
        &self,
        passport: &Passport,
        dir: P,
    ) -> ExportResult<ExportedFile>;
}

impl TemplateExt for Template {
    fn render_passport(&self, passport: &Passport) -> ExportResult<Worksheet> {
        default_exporter()
            .render(self, passport)
            .map(|(sheet, _)| sheet)
    }

    fn export_passport<P: AsRef<Path>>(
        &self,
        passport: &Passport,
        dir: P,
    ) -> ExportResult<ExportedFile> {
        default_exporter().export_to_dir(self, passport, dir)
    }
}

//! Request loading and report writing shared by every subcommand.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use carelink_fs::{is_regular_file, open_utf8_file, write_report};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ARG_REQUEST, CliError};

/// Paths resolved for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportPaths {
    /// JSON request to read.
    pub(crate) request_path: Utf8PathBuf,
    /// File to write the report to; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ReportPaths {
    pub(crate) fn new(
        request_path: Option<Utf8PathBuf>,
        output: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let request = request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env,
        })?;
        Ok(Self {
            request_path: request,
            output,
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }

    /// Validate the request path and decode it.
    pub(crate) fn load<T: DeserializeOwned>(&self) -> Result<T, CliError> {
        self.validate_sources()?;
        load_request(&self.request_path)
    }

    /// Write `report` to the configured output.
    pub(crate) fn emit<T: Serialize>(
        &self,
        report: &T,
        stdout: &mut dyn Write,
    ) -> Result<(), CliError> {
        let mut payload =
            serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
        payload.push('\n');
        match &self.output {
            Some(path) => {
                write_report(path, payload.as_bytes()).map_err(|source| {
                    CliError::WriteReportFile {
                        path: path.clone(),
                        source,
                    }
                })
            }
            None => stdout
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteReport),
        }
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON-encoded request from disk.
pub(crate) fn load_request<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

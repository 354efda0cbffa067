use std::path::PathBuf;

use thiserror::Error;

use crate::department::UnknownDepartment;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingCredential(&'static str),
}

/// Failure of a single classification request.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("choice not found in response")]
    EmptyChoices,

    #[error("content not found in response")]
    MissingContent,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("label sequences differ in length: {truth} true vs {predicted} predicted")]
    InvalidInput { truth: usize, predicted: usize },
}

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("failed to read samples from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    UnknownLabel {
        line: usize,
        #[source]
        source: UnknownDepartment,
    },

    #[error("line {line}: label without complaint text")]
    MissingText { line: usize },
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read prompt template from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("prompt template has no {0} placeholder")]
    MissingPlaceholder(&'static str),
}

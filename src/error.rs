use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("trick at {path} is not an object")]
    NotAnObject { path: String },

    #[error("trick at {path} has no usable detail")]
    MissingDetail { path: String },

    #[error("trick at {path} has a non-array variant list")]
    InvalidChildren { path: String },

    #[error("tricks for {owner} are not a list")]
    InvalidTrickList { owner: String },

    #[error("region config could not be parsed: {0}")]
    Config(#[source] serde_json::Error),

    #[error("creature file {file} could not be parsed: {source}")]
    CreatureFile {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

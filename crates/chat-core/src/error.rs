use crate::RequiredField;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required fields: {} {location}", join_fields(.fields))]
    MissingFields {
        fields: Vec<RequiredField>,
        location: ErrorLocation,
    },

    #[error("Account collection encoding failed: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Account collection decoding failed: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_fields(fields: Vec<RequiredField>) -> Self {
        Self::MissingFields {
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = StdResult<T, CoreError>;

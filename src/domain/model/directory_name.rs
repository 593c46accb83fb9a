//! Naming scheme for model directories
//!
//! A model directory encodes its hyper-parameters in its name:
//! `<model_name>-<label>_<input_size>-<label>_<learning_rate>-<label>_<batch_size>`.
//! Only the last `_` token of each numeric segment is significant.

use std::str::FromStr;

use thiserror::Error;

/// Separator between the segments of a model directory name
pub const NAME_SEGMENT_SEPARATOR: char = '-';

/// Separator inside a segment; the value is the last token
const VALUE_SEPARATOR: char = '_';

const REQUIRED_SEGMENTS: usize = 4;

/// Errors produced while decoding a model directory name
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected at least {} '-' separated segments, found {found}", REQUIRED_SEGMENTS)]
    TooFewSegments { found: usize },

    #[error("invalid input size '{token}'")]
    InvalidInputSize { token: String },

    #[error("invalid learning rate '{token}'")]
    InvalidLearningRate { token: String },

    #[error("invalid batch size '{token}'")]
    InvalidBatchSize { token: String },
}

/// Typed view of a model directory name
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDirectoryName {
    raw: String,
    model_name: String,
    input_size: u32,
    learning_rate: f64,
    batch_size: u32,
}

impl ModelDirectoryName {
    /// Decode a directory name such as `resnet-size_224-lr_0.001-batch_32`
    pub fn parse(raw: impl Into<String>) -> Result<Self, DecodeError> {
        let raw = raw.into();
        let segments: Vec<&str> = raw.split(NAME_SEGMENT_SEPARATOR).collect();

        if segments.len() < REQUIRED_SEGMENTS {
            return Err(DecodeError::TooFewSegments {
                found: segments.len(),
            });
        }

        let input_size = parse_value::<u32>(segments[1])
            .map_err(|token| DecodeError::InvalidInputSize { token })?;

        let learning_rate = parse_value::<f64>(segments[2])
            .and_then(|rate| {
                if rate.is_finite() {
                    Ok(rate)
                } else {
                    Err(last_token(segments[2]).to_string())
                }
            })
            .map_err(|token| DecodeError::InvalidLearningRate { token })?;

        let batch_size = parse_value::<u32>(segments[3])
            .map_err(|token| DecodeError::InvalidBatchSize { token })?;

        let model_name = segments[0].to_string();

        Ok(Self {
            raw,
            model_name,
            input_size,
            learning_rate,
            batch_size,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }
}

impl FromStr for ModelDirectoryName {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn last_token(segment: &str) -> &str {
    // rsplit always yields at least one item
    segment.rsplit(VALUE_SEPARATOR).next().unwrap_or(segment)
}

/// Parse the last token of a segment, returning the token on failure
fn parse_value<T: FromStr>(segment: &str) -> Result<T, String> {
    let token = last_token(segment);
    token.parse::<T>().map_err(|_| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_name() {
        let name = ModelDirectoryName::parse("name-x_5-y_0.01-z_32").unwrap();

        assert_eq!(name.raw(), "name-x_5-y_0.01-z_32");
        assert_eq!(name.model_name(), "name");
        assert_eq!(name.input_size(), 5);
        assert_eq!(name.learning_rate(), 0.01);
        assert_eq!(name.batch_size(), 32);
    }

    #[test]
    fn test_parse_uses_last_underscore_token() {
        let name =
            ModelDirectoryName::parse("siamese-input_size_224-learning_rate_0.001-batch_size_16")
                .unwrap();

        assert_eq!(name.model_name(), "siamese");
        assert_eq!(name.input_size(), 224);
        assert_eq!(name.learning_rate(), 0.001);
        assert_eq!(name.batch_size(), 16);
    }

    #[test]
    fn test_parse_segment_without_label() {
        let name = ModelDirectoryName::parse("net-5-0.5-8").unwrap();

        assert_eq!(name.input_size(), 5);
        assert_eq!(name.learning_rate(), 0.5);
        assert_eq!(name.batch_size(), 8);
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let name = ModelDirectoryName::parse("net-s_5-lr_0.1-b_4-run_2").unwrap();

        assert_eq!(name.model_name(), "net");
        assert_eq!(name.batch_size(), 4);
    }

    #[test]
    fn test_parse_keeps_model_name_verbatim() {
        let name = ModelDirectoryName::parse("My_Model.v2-s_1-lr_1-b_1").unwrap();
        assert_eq!(name.model_name(), "My_Model.v2");
    }

    #[test]
    fn test_too_few_segments() {
        assert_eq!(
            ModelDirectoryName::parse("name-x_5-y_0.01"),
            Err(DecodeError::TooFewSegments { found: 3 })
        );
        assert_eq!(
            ModelDirectoryName::parse("plain"),
            Err(DecodeError::TooFewSegments { found: 1 })
        );
        assert_eq!(
            ModelDirectoryName::parse(""),
            Err(DecodeError::TooFewSegments { found: 1 })
        );
    }

    #[test]
    fn test_invalid_input_size() {
        assert_eq!(
            ModelDirectoryName::parse("name-x_abc-y_0.01-z_32"),
            Err(DecodeError::InvalidInputSize {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_fractional_input_size_is_rejected() {
        assert!(matches!(
            ModelDirectoryName::parse("name-x_5.5-y_0.01-z_32"),
            Err(DecodeError::InvalidInputSize { .. })
        ));
    }

    #[test]
    fn test_invalid_learning_rate() {
        assert_eq!(
            ModelDirectoryName::parse("name-x_5-y_fast-z_32"),
            Err(DecodeError::InvalidLearningRate {
                token: "fast".to_string()
            })
        );
    }

    #[test]
    fn test_non_finite_learning_rate_is_rejected() {
        assert_eq!(
            ModelDirectoryName::parse("name-x_5-y_NaN-z_32"),
            Err(DecodeError::InvalidLearningRate {
                token: "NaN".to_string()
            })
        );
        assert!(ModelDirectoryName::parse("name-x_5-y_inf-z_32").is_err());
    }

    #[test]
    fn test_invalid_batch_size() {
        assert_eq!(
            ModelDirectoryName::parse("name-x_5-y_0.01-z_"),
            Err(DecodeError::InvalidBatchSize {
                token: String::new()
            })
        );
    }

    #[test]
    fn test_from_str() {
        let name: ModelDirectoryName = "name-x_5-y_0.01-z_32".parse().unwrap();
        assert_eq!(name.batch_size(), 32);
    }

    #[test]
    fn test_decode_error_display() {
        let error = DecodeError::TooFewSegments { found: 2 };
        assert_eq!(
            error.to_string(),
            "expected at least 4 '-' separated segments, found 2"
        );
    }
}

//! Text and location bodies

use super::BodyCodec;
use crate::config::CodecLimits;
use crate::error::{CodecError, CodecResult};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::CspMessageType;

/// UTF-8 text, at least one byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBody {
    pub text: String,
}

impl TextBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl BodyCodec for TextBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(self.text.as_bytes());
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let text = reader.rest_utf8("text")?;
        if text.is_empty() {
            return Err(reader.malformed("text is empty"));
        }
        Ok(Self::new(text))
    }

    fn validate(&self, message_type: CspMessageType, limits: &CodecLimits) -> CodecResult<()> {
        if self.text.is_empty() {
            return Err(CodecError::incomplete("text message", "text"));
        }
        if self.text.len() > limits.max_text_len {
            return Err(CodecError::payload_too_large(
                message_type,
                self.text.len(),
                limits.max_text_len,
            ));
        }
        Ok(())
    }
}

/// Shared location
///
/// Wire format is UTF-8 text: `lat,lon[,accuracy]` on the first line, then
/// either a single address line, or a name line followed by the address.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBody {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters
    pub accuracy: Option<f64>,
    /// Point of interest name
    pub name: Option<String>,
    pub address: Option<String>,
}

impl LocationBody {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            name: None,
            address: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    fn coordinates_valid(latitude: f64, longitude: f64, accuracy: Option<f64>) -> bool {
        (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
            && accuracy.map_or(true, |a| a.is_finite() && a >= 0.0)
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl BodyCodec for LocationBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        let mut text = format!("{},{}", self.latitude, self.longitude);
        if let Some(accuracy) = self.accuracy {
            text.push_str(&format!(",{}", accuracy));
        }
        match (&self.name, &self.address) {
            (Some(name), address) => {
                text.push('\n');
                text.push_str(name);
                text.push('\n');
                text.push_str(address.as_deref().unwrap_or_default());
            }
            (None, Some(address)) => {
                text.push('\n');
                text.push_str(address);
            }
            (None, None) => {}
        }
        writer.put_bytes(text.as_bytes());
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let text = reader.rest_utf8("location")?;
        let mut lines = text.splitn(3, '\n');
        let coordinates = lines.next().unwrap_or_default();

        let parts: Vec<&str> = coordinates.split(',').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(reader.malformed(format!(
                "expected 'lat,lon[,accuracy]', got {} components",
                parts.len()
            )));
        }
        let latitude = parse_coordinate(parts[0]);
        let longitude = parse_coordinate(parts[1]);
        let accuracy = match parts.get(2) {
            Some(raw) => Some(
                parse_coordinate(raw).ok_or_else(|| reader.malformed("accuracy is not a number"))?,
            ),
            None => None,
        };
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) if Self::coordinates_valid(lat, lon, accuracy) => (lat, lon),
            _ => return Err(reader.malformed("coordinates out of range or not numeric")),
        };

        let second = lines.next();
        let third = lines.next();
        let (name, address) = match (second, third) {
            (Some(name), Some(address)) => (Some(name), Some(address)),
            (Some(address), None) => (None, Some(address)),
            _ => (None, None),
        };

        Ok(Self {
            latitude,
            longitude,
            accuracy,
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            address: address.filter(|a| !a.is_empty()).map(str::to_string),
        })
    }

    fn validate(&self, message_type: CspMessageType, _limits: &CodecLimits) -> CodecResult<()> {
        if !Self::coordinates_valid(self.latitude, self.longitude, self.accuracy) {
            return Err(CodecError::invalid_field(
                message_type,
                "coordinates",
                format!("({}, {}) out of range", self.latitude, self.longitude),
            ));
        }
        if let Some(name) = &self.name {
            if name.is_empty() || name.contains('\n') {
                return Err(CodecError::invalid_field(
                    message_type,
                    "name",
                    "must be non-empty and single-line",
                ));
            }
        }
        match (&self.name, &self.address) {
            (_, Some(address)) if address.is_empty() => Err(CodecError::invalid_field(
                message_type,
                "address",
                "must be non-empty when set",
            )),
            (None, Some(address)) if address.contains('\n') => Err(CodecError::invalid_field(
                message_type,
                "address",
                "multi-line addresses require a name",
            )),
            _ => Ok(()),
        }
    }
}

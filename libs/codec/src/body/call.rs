//! Call signaling bodies
//!
//! Offer, answer, ICE candidates, hangup and ringing all carry a JSON object
//! keyed by `callId`. The signaling content itself is interpreted by the call
//! stack, not here.

use super::BodyCodec;
use crate::error::CodecResult;
use crate::wire::{BodyReader, BodyWriter};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallBody {
    pub payload: Map<String, Value>,
}

impl CallBody {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    /// Call id shared by all signaling messages of one call
    pub fn call_id(&self) -> Option<u32> {
        self.payload
            .get("callId")
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok())
    }
}

impl BodyCodec for CallBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_json("call payload", &self.payload)
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            payload: reader.rest_json("call payload")?,
        })
    }
}

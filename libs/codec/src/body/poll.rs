//! Poll (ballot) bodies
//!
//! Poll setup carries the ballot id and the ballot definition as a JSON
//! object. A vote names the ballot by creator and id and lists
//! `[choice id, value]` pairs.

use super::BodyCodec;
use crate::error::CodecResult;
use crate::wire::{BodyReader, BodyWriter};
use csp_types::{BallotId, Identity};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct PollSetupBody {
    pub ballot_id: BallotId,
    /// Ballot definition (description, choices, state, ...)
    pub definition: Map<String, Value>,
}

impl BodyCodec for PollSetupBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(self.ballot_id.as_bytes());
        writer.put_json("ballot definition", &self.definition)
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let ballot_id = BallotId::new(reader.take_array("ballot id")?);
        let definition = reader.rest_json("ballot definition")?;
        Ok(Self {
            ballot_id,
            definition,
        })
    }
}

/// One vote, serialized as a two element JSON array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollVoteChoice(pub u32, pub i32);

impl PollVoteChoice {
    pub fn choice_id(&self) -> u32 {
        self.0
    }

    pub fn value(&self) -> i32 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollVoteBody {
    pub ballot_creator: Identity,
    pub ballot_id: BallotId,
    pub votes: Vec<PollVoteChoice>,
}

impl BodyCodec for PollVoteBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_identity(&self.ballot_creator);
        writer.put_bytes(self.ballot_id.as_bytes());
        writer.put_json("votes", &self.votes)
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let ballot_creator = reader.read_identity("ballot creator")?;
        let ballot_id = BallotId::new(reader.take_array("ballot id")?);
        let votes = reader.rest_json("votes")?;
        Ok(Self {
            ballot_creator,
            ballot_id,
            votes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::testing::{decode, encode};
    use crate::error::CodecError;
    use csp_types::CspMessageType;
    use serde_json::json;

    #[test]
    fn test_vote_layout() {
        let body = PollVoteBody {
            ballot_creator: "ABCDEFGH".parse().unwrap(),
            ballot_id: BallotId::new([5; 8]),
            votes: vec![PollVoteChoice(1, 1), PollVoteChoice(2, 0)],
        };
        let bytes = encode(CspMessageType::PollVote, &body);
        assert_eq!(&bytes[..8], b"ABCDEFGH");
        assert_eq!(&bytes[8..16], &[5; 8]);
        assert_eq!(&bytes[16..], b"[[1,1],[2,0]]");
        assert_eq!(decode::<PollVoteBody>(CspMessageType::PollVote, &bytes).unwrap(), body);
    }

    #[test]
    fn test_setup_round_trip() {
        let definition = json!({
            "d": "Lunch?",
            "s": 0,
            "c": [{"i": 1, "o": "Pizza"}, {"i": 2, "o": "Sushi"}]
        });
        let body = PollSetupBody {
            ballot_id: BallotId::new([1; 8]),
            definition: definition.as_object().unwrap().clone(),
        };
        let bytes = encode(CspMessageType::PollSetup, &body);
        assert_eq!(decode::<PollSetupBody>(CspMessageType::PollSetup, &bytes).unwrap(), body);
    }

    #[test]
    fn test_setup_requires_json_object() {
        let mut bytes = vec![1u8; 8];
        bytes.extend_from_slice(b"[1,2]");
        assert!(matches!(
            decode::<PollSetupBody>(CspMessageType::PollSetup, &bytes),
            Err(CodecError::MalformedBody { offset: 8, .. })
        ));
    }
}

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::domain::{
    CommandAction, CompareOutput, ComparePayload, EncodeOutput, EncodePayload,
};

pub(super) fn route(action: CommandAction, payload: Value) -> Result<Value> {
    let data = match action {
        CommandAction::Encode => serde_json::to_value(encode(parse_payload(payload)?)?)?,
        CommandAction::Compare => serde_json::to_value(compare(parse_payload(payload)?)?)?,
    };
    Ok(data)
}

fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).context("Invalid payload")
}

pub(crate) fn encode(payload: EncodePayload) -> Result<EncodeOutput> {
    let code = soundex_encoder::encode(&payload.word)?;
    log::debug!("encoded {:?} as {code}", payload.word);
    Ok(EncodeOutput {
        word: payload.word,
        code: code.into_string(),
    })
}

pub(crate) fn compare(payload: ComparePayload) -> Result<CompareOutput> {
    let left = encode(EncodePayload {
        word: payload.left,
    })
    .context("Failed to encode left word")?;
    let right = encode(EncodePayload {
        word: payload.right,
    })
    .context("Failed to encode right word")?;
    let matches = left.code == right.code;
    Ok(CompareOutput {
        left,
        right,
        matches,
    })
}

pub mod domain;
mod services;

#[allow(unused_imports)]
pub use domain::{
    classify_error, CommandAction, CommandRequest, CommandResponse, CommandStatus,
    CompareOutput, ComparePayload, EncodeOutput, EncodePayload, ErrorEnvelope, ResponseMeta,
};

use std::time::Instant;

pub fn execute(request: CommandRequest) -> CommandResponse {
    let started = Instant::now();
    let CommandRequest { action, payload } = request;

    let outcome = services::route(action, payload);
    let meta = ResponseMeta {
        action: Some(action.as_str()),
        duration_us: Some(started.elapsed().as_micros() as u64),
    };

    match outcome {
        Ok(data) => CommandResponse {
            status: CommandStatus::Ok,
            message: None,
            error: None,
            data,
            meta,
        },
        Err(err) => {
            let message = format!("{err:#}");
            log::debug!("{} failed: {message}", action.as_str());
            error_response(message, Some(action), meta)
        }
    }
}

pub fn error_response(
    message: String,
    action: Option<CommandAction>,
    meta: ResponseMeta,
) -> CommandResponse {
    let classification = classify_error(&message, action);
    let error = ErrorEnvelope {
        code: classification.code,
        message: message.clone(),
        hint: classification.hint,
    };
    CommandResponse {
        status: CommandStatus::Error,
        message: Some(message),
        error: Some(error),
        data: serde_json::Value::Null,
        meta,
    }
}

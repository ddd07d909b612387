//! Fakes: empty-bodied stand-ins for every function a header declares.

use crate::descriptor::FakeRequest;
use crate::error::Result;
use serde_json::json;

/// Validates the request and builds the fake template's context.
///
/// Definitions keep the order of `request.signatures`, which is the header's order
/// when the request came from [`FakeRequest::from_header`].
pub(crate) fn fake_context(request: &FakeRequest) -> Result<serde_json::Value> {
    request.validate()?;
    let definitions: Vec<String> = request.signatures.iter().map(ToString::to_string).collect();
    Ok(json!({
        "fake_include": request.fake_include,
        "definitions": definitions,
    }))
}

use crate::shared::http;
use mep_contracts::shared::api::ApiCall;

/// Run a create, update, delete or visibility call; the error is the text to show
pub async fn run(call: &ApiCall) -> Result<(), String> {
    http::execute(call).await.map_err(|e| e.user_message())
}

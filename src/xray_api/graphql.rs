//! Thin layer over the cloud GraphQL endpoint. One POST per operation,
//! bearer-authenticated by the caller; a 200 response carrying a top-level
//! `errors` array is surfaced as `XrayError::GraphQl`.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

use super::{expect_success, XrayError};

pub(crate) async fn execute(
    client: &Client,
    base_url: &str,
    token: &str,
    document: &str,
) -> Result<Value, XrayError> {
    let url = format!("{base_url}/graphql");
    let body = serde_json::json!({ "query": document });
    let response = client
        .post(&url)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .json(&body)
        .send()
        .await?;
    let (_, data) = expect_success(response).await?;
    if let Some(errors) = data.get("errors").and_then(Value::as_array) {
        let messages: Vec<String> = errors
            .iter()
            .filter_map(|error| error.get("message").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        return Err(XrayError::GraphQl(messages));
    }
    Ok(data)
}

pub(crate) fn test_plans_by_key_query(test_plan_key: &str) -> String {
    format!(
        "{{ getTestPlans(jql: \"key = {test_plan_key}\", limit: 1) {{ total results {{ issueId }} }} }}"
    )
}

pub(crate) fn add_test_executions_mutation(
    test_plan_issue_id: &str,
    test_exec_issue_id: &str,
) -> String {
    format!(
        "mutation {{ addTestExecutionsToTestPlan(issueId: \"{test_plan_issue_id}\", \
         testExecIssueIds: [\"{test_exec_issue_id}\"]) {{ addedTestExecutions warning }} }}"
    )
}

use crate::schema::ProcstreamConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(super) fn validate_endpoint(errors: &mut Vec<String>, config: &ProcstreamConfig) {
    let endpoint = &config.endpoint;
    validate_non_empty(errors, "endpoint.url", &endpoint.url);
    if !endpoint.url.trim().is_empty()
        && !(endpoint.url.starts_with("http://") || endpoint.url.starts_with("https://"))
    {
        errors.push(format!(
            "endpoint.url = {:?} must start with http:// or https://",
            endpoint.url
        ));
    }
    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        300,
    );
}

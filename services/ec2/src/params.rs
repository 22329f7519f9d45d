/// An ordered set of request parameters, values pre-stringified.
///
/// Insertion order is irrelevant: canonicalization sorts by name before
/// signing. A `None` value marks a parameter an operation builder chose not
/// to supply; it is dropped during canonicalization, never serialized as
/// empty.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    entries: Vec<(String, Option<String>)>,
}

impl RequestParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), Some(value.into())));
    }

    /// Append an optional parameter. `None` is kept in the set but dropped
    /// at canonicalization time.
    pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<String>) {
        self.entries.push((name.into(), value));
    }

    /// The non-nil entries, ready for canonicalization.
    pub fn present(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect()
    }
}

/// One API call, as assembled by an operation-level request builder.
///
/// `idempotent` is advisory metadata for a caller-level retry policy. It is
/// consumed by the dispatcher and never signed or sent over the wire; the
/// dispatcher itself performs no retries.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    /// The API action name, e.g. `DescribeInstances`.
    pub action: String,
    /// Operation-specific parameters.
    pub params: RequestParams,
    /// Whether retrying this call cannot duplicate side effects.
    pub idempotent: bool,
}

impl OperationRequest {
    /// Start a request for the given action.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: RequestParams::new(),
            idempotent: false,
        }
    }

    /// Add a parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Add an optional parameter.
    pub fn with_param_opt(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.params.insert_opt(name, value);
        self
    }

    /// Mark the request safely retryable.
    pub fn idempotent(mut self) -> Self {
        self.idempotent = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_values_are_dropped() {
        let mut params = RequestParams::new();
        params.insert("InstanceId", "i-123");
        params.insert_opt("DeviceIndex", None);
        params.insert_opt("Description", Some("primary".to_string()));

        let present = params.present();
        assert_eq!(
            present,
            vec![
                ("InstanceId".to_string(), "i-123".to_string()),
                ("Description".to_string(), "primary".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_surface() {
        let req = OperationRequest::new("DescribeVolumes")
            .with_param("VolumeId.1", "vol-1")
            .with_param_opt("Filter", None)
            .idempotent();

        assert_eq!(req.action, "DescribeVolumes");
        assert!(req.idempotent);
        assert_eq!(req.params.present().len(), 1);
    }
}

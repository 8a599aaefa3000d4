use metrics::{counter, IntoLabels, Label};

pub const VALIDATION_METRIC: &str = "brdocs.validation";
pub const GENERATED_METRIC: &str = "brdocs.generated";
pub const MASK_ERROR_METRIC: &str = "brdocs.mask_error";

const VALIDATOR: &str = "validator";
const OUTCOME: &str = "outcome";

/// Holder of multiple [Label] providing some methods to easily clone and add new labels in it.
#[derive(Clone, Debug, Default)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(labels: &[(&'static str, &'static str)]) -> Self {
        Labels(labels.iter().map(|(k, v)| Label::new(*k, *v)).collect())
    }

    /// Labels identifying a single validator (`cpf`, `cnpj`, `email`, ...)
    pub fn validator(name: &'static str) -> Self {
        Labels::new(&[(VALIDATOR, name)])
    }

    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(&self, additional_labels: &[(&'static str, &'static str)]) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(|(k, v)| Label::new(*k, *v)));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

pub(crate) fn record_validation(validator: &'static str, valid: bool) {
    let outcome = if valid { "valid" } else { "invalid" };
    counter!(
        VALIDATION_METRIC,
        Labels::validator(validator).clone_with_labels(&[(OUTCOME, outcome)])
    )
    .increment(1);
}

pub(crate) fn record_generated(validator: &'static str) {
    counter!(GENERATED_METRIC, Labels::validator(validator)).increment(1);
}

pub(crate) fn record_mask_error(validator: &'static str) {
    counter!(MASK_ERROR_METRIC, Labels::validator(validator)).increment(1);
}

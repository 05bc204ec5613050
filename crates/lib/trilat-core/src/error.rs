/// Errors raised while reading or validating the simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("invalid parameter {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("could not parse {name} from '{input}'")]
    Parse { name: &'static str, input: String },
}

use crate::domain::AppError;

/// Port for the precondition check that makes the environment loadable.
///
/// Implementations fail loudly when required inputs cannot be provisioned.
pub trait EnvVerifier {
    fn verify(&self) -> Result<(), AppError>;
}
